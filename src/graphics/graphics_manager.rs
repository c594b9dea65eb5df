// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use log::{info, warn};
use macroquad::prelude::*;

use crate::config::AssetConfig;
use crate::graphics::sprites::{fallback_color, Sheet, SpriteRegion};

async fn load_sheet(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Nearest);
            info!("loaded sprite sheet {path}");
            Some(texture)
        }
        Err(e) => {
            warn!("failed to load texture from {path}: {e}");
            None
        }
    }
}

/// Sprite sheets shared by every screen. Missing sheets draw as flat colours.
pub struct GraphicsManager {
    tiles: Option<Texture2D>,
    mobs: Option<Texture2D>,
    character: Option<Texture2D>,
}

impl GraphicsManager {
    pub async fn load(assets: &AssetConfig) -> Self {
        let (tiles, mobs, character) = futures::join!(
            load_sheet(&assets.tiles_texture),
            load_sheet(&assets.mobs_texture),
            load_sheet(&assets.character_texture),
        );

        Self {
            tiles,
            mobs,
            character,
        }
    }

    fn sheet(&self, sheet: Sheet) -> Option<&Texture2D> {
        match sheet {
            Sheet::Tiles => self.tiles.as_ref(),
            Sheet::Mobs => self.mobs.as_ref(),
            Sheet::Character => self.character.as_ref(),
        }
    }

    /// Draws `region` with its bottom-left corner at `pos` in world space (y up).
    pub fn draw_region(&self, region: &SpriteRegion, pos: Vec2) {
        let rect = region.rect;
        match self.sheet(region.sheet) {
            Some(texture) => draw_texture_ex(
                texture,
                pos.x,
                pos.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(rect.w, rect.h)),
                    source: Some(rect),
                    flip_y: true,
                    ..Default::default()
                },
            ),
            None => draw_rectangle(
                pos.x,
                pos.y,
                rect.w,
                rect.h,
                fallback_color(region.sheet, rect),
            ),
        }
    }
}

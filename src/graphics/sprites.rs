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

use macroquad::prelude::*;

use crate::maps::TILE_SIZE;
use crate::tile::TileKind;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sheet {
    Tiles,
    Mobs,
    Character,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpriteRegion {
    pub sheet: Sheet,
    pub rect: Rect,
}

impl SpriteRegion {
    fn tile(sheet: Sheet, col: f32, row: f32, w: f32, h: f32) -> Self {
        Self {
            sheet,
            rect: Rect {
                x: col * TILE_SIZE,
                y: row * TILE_SIZE,
                w,
                h,
            },
        }
    }
}

pub const CHARACTER_FRAME_COUNT: usize = 4;
pub const CHARACTER_FRAME_SIZE: Vec2 = Vec2::new(16.0, 32.0);

/// Source region drawn for each kind of maze object.
pub fn region_for(kind: TileKind) -> SpriteRegion {
    match kind {
        TileKind::Wall => SpriteRegion::tile(Sheet::Tiles, 0.0, 0.0, 16.0, 16.0),
        TileKind::Entry => SpriteRegion::tile(Sheet::Tiles, 2.0, 6.0, 16.0, 16.0),
        TileKind::Exit => SpriteRegion::tile(Sheet::Tiles, 0.0, 6.0, 16.0, 16.0),
        TileKind::Trap => SpriteRegion::tile(Sheet::Tiles, 2.0, 9.0, 16.0, 16.0),
        TileKind::Enemy => SpriteRegion::tile(Sheet::Mobs, 4.0, 5.0, 16.0, 16.0),
        TileKind::Key => SpriteRegion::tile(Sheet::Tiles, 6.0, 3.0, 16.0, 6.0),
    }
}

/// Walk-down frames laid out left to right on the first row of the character sheet.
pub fn character_frames() -> Vec<SpriteRegion> {
    (0..CHARACTER_FRAME_COUNT)
        .map(|col| SpriteRegion {
            sheet: Sheet::Character,
            rect: Rect::new(
                col as f32 * CHARACTER_FRAME_SIZE.x,
                0.0,
                CHARACTER_FRAME_SIZE.x,
                CHARACTER_FRAME_SIZE.y,
            ),
        })
        .collect()
}

/// Flat colour drawn when a sheet failed to load.
pub fn fallback_color(sheet: Sheet, rect: Rect) -> Color {
    match sheet {
        Sheet::Character => SKYBLUE,
        Sheet::Mobs => PURPLE,
        Sheet::Tiles => match (rect.x as i32, rect.y as i32) {
            (0, 0) => GRAY,
            (32, 96) => DARKGREEN,
            (0, 96) => GOLD,
            (32, 144) => RED,
            (96, 48) => YELLOW,
            _ => LIGHTGRAY,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_regions_follow_tile_grid() {
        assert_eq!(region_for(TileKind::Wall).rect, Rect::new(0.0, 0.0, 16.0, 16.0));
        assert_eq!(region_for(TileKind::Entry).rect, Rect::new(32.0, 96.0, 16.0, 16.0));
        assert_eq!(region_for(TileKind::Exit).rect, Rect::new(0.0, 96.0, 16.0, 16.0));
        assert_eq!(region_for(TileKind::Trap).rect, Rect::new(32.0, 144.0, 16.0, 16.0));
        assert_eq!(region_for(TileKind::Key).rect, Rect::new(96.0, 48.0, 16.0, 6.0));
        assert_eq!(region_for(TileKind::Enemy).sheet, Sheet::Mobs);
        assert_eq!(region_for(TileKind::Enemy).rect, Rect::new(64.0, 80.0, 16.0, 16.0));
    }

    #[test]
    fn character_strip_has_four_tall_frames() {
        let frames = character_frames();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[3].rect, Rect::new(48.0, 0.0, 16.0, 32.0));
    }

    #[test]
    fn every_kind_has_a_distinct_fallback() {
        let colors: Vec<Color> = TileKind::ALL
            .into_iter()
            .map(|k| {
                let r = region_for(k);
                fallback_color(r.sheet, r.rect)
            })
            .collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

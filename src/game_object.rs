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

use macroquad::math::Vec2;

use crate::entity::Entity;
use crate::graphics::GraphicsManager;
use crate::graphics::sprites::region_for;
use crate::maps::TILE_SIZE;
use crate::position::Position;
use crate::tile::TileKind;

/// Static maze object: one of the six tile kinds sitting on a grid cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameObject {
    pub kind: TileKind,
    pub tile: Position,
}

impl GameObject {
    pub fn new(kind: TileKind, tile: Position) -> Self {
        Self { kind, tile }
    }
}

impl Entity for GameObject {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn world_pos(&self) -> Vec2 {
        self.tile.to_world(TILE_SIZE)
    }

    fn draw(&self, graphics: &GraphicsManager) {
        graphics.draw_region(&region_for(self.kind), self.world_pos());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objects_sit_on_sixteen_pixel_grid() {
        let key = GameObject::new(TileKind::Key, Position::new(4, 2));
        assert_eq!(key.world_pos(), Vec2::new(64.0, 32.0));
        assert_eq!(key.name(), "key");
        assert!(!key.is_player());
    }
}

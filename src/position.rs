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

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    UpRight,
    DownRight,
    DownLeft,
    UpLeft,
    None,
}

impl Direction {
    /// Unit step in world space. The maze grid grows upwards, so `Up` is +y.
    pub fn delta(self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, 1.0),
            Direction::Right => (1.0, 0.0),
            Direction::Down => (0.0, -1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::UpRight => (1.0, 1.0),
            Direction::DownRight => (1.0, -1.0),
            Direction::DownLeft => (-1.0, -1.0),
            Direction::UpLeft => (-1.0, 1.0),
            Direction::None => (0.0, 0.0),
        }
    }

    pub fn from_axes(dx: i32, dy: i32) -> Self {
        match (dx.signum(), dy.signum()) {
            (0, 1) => Direction::Up,
            (1, 0) => Direction::Right,
            (0, -1) => Direction::Down,
            (-1, 0) => Direction::Left,
            (1, 1) => Direction::UpRight,
            (1, -1) => Direction::DownRight,
            (-1, -1) => Direction::DownLeft,
            (-1, 1) => Direction::UpLeft,
            _ => Direction::None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn east(&self) -> Self {
        Self {
            x: self.x + 1,
            y: self.y,
        }
    }

    /// Bottom-left corner of the tile in world pixels.
    pub fn to_world(&self, tile_size: f32) -> Vec2 {
        Vec2::new(self.x as f32 * tile_size, self.y as f32 * tile_size)
    }

    /// Tile containing a world point, `None` when the point lies left of or below the grid.
    pub fn from_world(point: Vec2, tile_size: f32) -> Option<Self> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        Some(Self {
            x: (point.x / tile_size) as usize,
            y: (point.y / tile_size) as usize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_round_trip_lands_in_same_tile() {
        let pos = Position::new(3, 7);
        let world = pos.to_world(16.0) + Vec2::new(8.0, 8.0);
        assert_eq!(Position::from_world(world, 16.0), Some(pos));
    }

    #[test]
    fn negative_world_point_has_no_tile() {
        assert_eq!(Position::from_world(Vec2::new(-0.5, 4.0), 16.0), None);
    }

    #[test]
    fn direction_from_axes_matches_delta() {
        let d = Direction::from_axes(-1, 1);
        assert_eq!(d, Direction::UpLeft);
        assert_eq!(d.delta(), (-1.0, 1.0));
        assert_eq!(Direction::from_axes(0, 0), Direction::None);
    }
}

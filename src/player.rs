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

use crate::animation::Animation;
use crate::entity::Entity;
use crate::graphics::GraphicsManager;
use crate::graphics::sprites::{SpriteRegion, character_frames};
use crate::maps::{MazeData, TILE_SIZE};
use crate::position::{Direction, Position};

// Collision footprint is one tile at the sprite's feet, shrunk so the
// character fits through one-tile corridors.
const FOOTPRINT_INSET: f32 = 1.0;

pub struct Player {
    pub name: String,
    pub position: Vec2,
    animation: Animation<SpriteRegion>,
    state_time: f32,
}

impl Player {
    pub fn new(position: Vec2, frame_duration: f32) -> Self {
        Self {
            name: "Player".into(),
            position,
            animation: Animation::new(frame_duration, character_frames()),
            state_time: 0.0,
        }
    }

    pub fn spawn_at(tile: Position, frame_duration: f32) -> Self {
        Self::new(tile.to_world(TILE_SIZE), frame_duration)
    }

    pub fn update(&mut self, delta: f32) {
        self.state_time += delta;
    }

    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    pub fn current_frame(&self) -> Option<&SpriteRegion> {
        self.animation.key_frame(self.state_time, true)
    }

    /// Moves one axis at a time so the player slides along walls. Returns
    /// whether the position changed.
    pub fn try_move(&mut self, direction: Direction, distance: f32, maze: &MazeData) -> bool {
        let (dx, dy) = direction.delta();
        let start = self.position;

        let step_x = Vec2::new(self.position.x + dx * distance, self.position.y);
        if dx != 0.0 && Self::fits(step_x, maze) {
            self.position = step_x;
        }
        let step_y = Vec2::new(self.position.x, self.position.y + dy * distance);
        if dy != 0.0 && Self::fits(step_y, maze) {
            self.position = step_y;
        }

        self.position != start
    }

    fn fits(pos: Vec2, maze: &MazeData) -> bool {
        let min = pos + Vec2::splat(FOOTPRINT_INSET);
        let max = pos + Vec2::splat(TILE_SIZE - FOOTPRINT_INSET);
        let maze_size = Vec2::new(
            maze.width() as f32 * TILE_SIZE,
            maze.height() as f32 * TILE_SIZE,
        );
        if min.x < 0.0 || min.y < 0.0 || max.x > maze_size.x || max.y > maze_size.y {
            return false;
        }

        [
            Vec2::new(min.x, min.y),
            Vec2::new(max.x, min.y),
            Vec2::new(min.x, max.y),
            Vec2::new(max.x, max.y),
        ]
        .into_iter()
        .all(|corner| match Position::from_world(corner, TILE_SIZE) {
            Some(tile) => !maze.is_solid(tile),
            None => false,
        })
    }
}

impl Entity for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn world_pos(&self) -> Vec2 {
        self.position
    }

    fn draw(&self, graphics: &GraphicsManager) {
        if let Some(frame) = self.current_frame() {
            graphics.draw_region(frame, self.position);
        }
    }

    fn is_player(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::EMPTY_TILE_CODE;

    // 5x3 open room with a wall at (3,1).
    fn room() -> MazeData {
        let mut maze = MazeData::filled(5, 3, EMPTY_TILE_CODE);
        maze[Position::new(3, 1)] = 0;
        maze
    }

    #[test]
    fn spawns_on_tile_corner() {
        let player = Player::spawn_at(Position::new(2, 1), 0.1);
        assert_eq!(player.world_pos(), Vec2::new(32.0, 16.0));
        assert!(player.is_player());
    }

    #[test]
    fn animation_advances_with_time() {
        let mut player = Player::spawn_at(Position::new(0, 0), 0.1);
        let first = *player.current_frame().unwrap();
        player.update(0.25);
        assert_eq!(player.state_time(), 0.25);
        let third = *player.current_frame().unwrap();
        assert_eq!(third.rect.x, 32.0);
        assert_ne!(first, third);
    }

    #[test]
    fn walks_through_open_floor() {
        let maze = room();
        let mut player = Player::spawn_at(Position::new(1, 1), 0.1);
        assert!(player.try_move(Direction::Up, 8.0, &maze));
        assert_eq!(player.position, Vec2::new(16.0, 24.0));
    }

    #[test]
    fn walls_block_movement() {
        let maze = room();
        let mut player = Player::spawn_at(Position::new(2, 1), 0.1);
        assert!(!player.try_move(Direction::Right, 4.0, &maze));
        assert_eq!(player.position, Vec2::new(32.0, 16.0));
    }

    #[test]
    fn slides_along_wall_on_diagonal() {
        let maze = room();
        let mut player = Player::spawn_at(Position::new(2, 1), 0.1);
        assert!(player.try_move(Direction::DownRight, 4.0, &maze));
        assert_eq!(player.position, Vec2::new(32.0, 12.0));
    }

    #[test]
    fn cannot_leave_the_maze() {
        let maze = room();
        let mut player = Player::spawn_at(Position::new(0, 0), 0.1);
        assert!(!player.try_move(Direction::Left, 4.0, &maze));
        assert!(!player.try_move(Direction::Down, 4.0, &maze));
        assert_eq!(player.position, Vec2::ZERO);
    }
}

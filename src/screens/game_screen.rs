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

use log::{debug, info, warn};
use macroquad::prelude::*;

use crate::audio::{MusicPlayer, Track};
use crate::camera::MazeCamera;
use crate::config::GameConfig;
use crate::entity::Entity;
use crate::game_object::GameObject;
use crate::graphics::GraphicsManager;
use crate::input::{InputSnapshot, KeyboardAction};
use crate::maps::{MapSource, MazeData, TILE_SIZE};
use crate::player::Player;
use crate::position::{Direction, Position};
use crate::screens::Screen;
use crate::tile::TileKind;

#[derive(Debug, Default, PartialEq)]
pub struct Placement {
    pub objects: Vec<GameObject>,
    /// Tile right of the entry. With several entries the last one placed wins.
    pub spawn: Option<Position>,
}

/// Turns tile codes into maze objects, walking columns left to right.
pub fn place_objects(maze: &MazeData) -> Placement {
    let mut placement = Placement::default();
    for (pos, code) in maze.cells() {
        let Some(kind) = TileKind::from_code(code) else {
            continue;
        };
        if kind == TileKind::Entry {
            placement.spawn = Some(pos.east());
        }
        placement.objects.push(GameObject::new(kind, pos));
    }
    placement
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    None,
    Pause,
}

pub struct GameScreen {
    source: MapSource,
    maze: MazeData,
    objects: Vec<GameObject>,
    player: Option<Player>,
    camera: MazeCamera,
    follow_zoom: f32,
    player_speed: f32,
}

impl GameScreen {
    pub fn new(maze: MazeData, source: MapSource, viewport: Vec2, config: &GameConfig) -> Self {
        let placement = place_objects(&maze);
        let player = placement
            .spawn
            .map(|tile| Player::spawn_at(tile, config.player.frame_duration));
        if player.is_none() {
            warn!("{source} has no entry, nothing to control");
        }

        let maze_size = Vec2::new(
            maze.width() as f32 * TILE_SIZE,
            maze.height() as f32 * TILE_SIZE,
        );
        info!(
            "{source}: {} objects on a {}x{} grid",
            placement.objects.len(),
            maze.width(),
            maze.height()
        );

        Self {
            source,
            maze,
            objects: placement.objects,
            player,
            camera: MazeCamera::new(maze_size, viewport, &config.camera),
            follow_zoom: config.camera.zoom,
            player_speed: config.player.speed,
        }
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn camera(&self) -> &MazeCamera {
        &self.camera
    }

    pub fn update(&mut self, delta: f32, input: &InputSnapshot) -> GameEvent {
        if input.keyboard_action == KeyboardAction::Cancel {
            return GameEvent::Pause;
        }

        if let Some(player) = self.player.as_mut() {
            if input.direction != Direction::None {
                player.try_move(input.direction, self.player_speed * delta, &self.maze);
            }
            player.update(delta);
            self.camera.follow(player.world_pos());
        }
        GameEvent::None
    }
}

impl Screen for GameScreen {
    fn show(&mut self, music: &mut MusicPlayer) {
        music.play_looped(Track::InGame);
        match &self.player {
            Some(player) => {
                self.camera.focus(player.world_pos(), self.follow_zoom);
                debug!("showing {} with {} at {}", self.source, player.name(), player.world_pos());
            }
            None => self.camera.show_whole_maze(),
        }
    }

    fn hide(&mut self, music: &mut MusicPlayer) {
        music.stop(Track::InGame);
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(Vec2::new(width, height));
    }

    fn draw(&self, graphics: &GraphicsManager) {
        set_camera(&self.camera.to_camera2d());
        for object in &self.objects {
            object.draw(graphics);
        }
        if let Some(player) = &self.player {
            player.draw(graphics);
        }
        set_default_camera();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL: &str = "\
0,0=0
1,0=0
2,0=0
0,1=1
2,1=2
1,2=3
3,2=4
4,2=5
";

    fn screen() -> GameScreen {
        let maze = MazeData::from_properties(LEVEL).unwrap();
        GameScreen::new(
            maze,
            MapSource::Default,
            Vec2::new(800.0, 600.0),
            &GameConfig::default(),
        )
    }

    fn walking(direction: Direction) -> InputSnapshot {
        InputSnapshot {
            direction,
            ..InputSnapshot::idle()
        }
    }

    #[test]
    fn places_one_object_per_known_code() {
        let maze = MazeData::from_properties(LEVEL).unwrap();
        let placement = place_objects(&maze);
        let kinds: Vec<_> = placement.objects.iter().map(|o| o.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TileKind::Wall,
                TileKind::Entry,
                TileKind::Wall,
                TileKind::Trap,
                TileKind::Wall,
                TileKind::Exit,
                TileKind::Enemy,
                TileKind::Key,
            ]
        );
        assert_eq!(placement.spawn, Some(Position::new(1, 1)));
    }

    #[test]
    fn last_entry_sets_spawn() {
        let maze = MazeData::from_properties("0,0=1\n3,4=1\n").unwrap();
        assert_eq!(place_objects(&maze).spawn, Some(Position::new(4, 4)));
    }

    #[test]
    fn maze_without_entry_has_no_player() {
        let maze = MazeData::from_properties("0,0=0\n1,1=7\n").unwrap();
        let placement = place_objects(&maze);
        assert_eq!(placement.objects.len(), 1);
        assert_eq!(placement.spawn, None);

        let screen = GameScreen::new(
            maze,
            MapSource::Level(1),
            Vec2::new(640.0, 480.0),
            &GameConfig::default(),
        );
        assert!(screen.player().is_none());
    }

    #[test]
    fn player_spawns_right_of_entry() {
        let screen = screen();
        let player = screen.player().unwrap();
        assert_eq!(player.world_pos(), Vec2::new(16.0, 16.0));
        assert_eq!(screen.objects().len(), 8);
    }

    #[test]
    fn escape_requests_pause() {
        let mut screen = screen();
        let input = InputSnapshot {
            keyboard_action: KeyboardAction::Cancel,
            ..InputSnapshot::idle()
        };
        assert_eq!(screen.update(0.016, &input), GameEvent::Pause);
    }

    #[test]
    fn walking_moves_player_and_camera() {
        let mut screen = screen();
        let camera_before = screen.camera().position;
        let start = screen.player().unwrap().world_pos();

        // Speed 64 px/s for 0.125 s is half a tile upwards, into open floor.
        assert_eq!(screen.update(0.125, &walking(Direction::Up)), GameEvent::None);
        let end = screen.player().unwrap().world_pos();
        assert_eq!(end, start + Vec2::new(0.0, 8.0));
        assert_ne!(screen.camera().position, camera_before);
    }

    #[test]
    fn walls_stop_the_player() {
        let mut screen = screen();
        let start = screen.player().unwrap().world_pos();
        screen.update(0.125, &walking(Direction::Down));
        assert_eq!(screen.player().unwrap().world_pos(), start);
    }
}

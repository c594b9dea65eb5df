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

use std::future::Future;
use std::path::PathBuf;

use log::{error, info};
use macroquad::prelude::*;

use crate::audio::{MusicPlayer, Track};
use crate::config::{self, AssetConfig, GameConfig};
use crate::flow::{ActiveScreen, ScreenFlow, Transition};
use crate::graphics::GraphicsManager;
use crate::input::{Input, InputSnapshot, KeyboardAction};
use crate::maps::{self, MapSource, MazeData, MazeError};
use crate::screens::game_screen::GameEvent;
use crate::screens::{GameScreen, MenuScreen, Screen};

/// Loads the maze for a new game. On failure logs the cause and returns the
/// line the menu shows in its status row.
async fn load_game_maze<R, Fut>(
    source: &MapSource,
    assets: &AssetConfig,
    read: R,
) -> Result<MazeData, String>
where
    R: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = Result<String, MazeError>>,
{
    maps::load_from_source(source, assets, read)
        .await
        .map_err(|e| {
            error!("cannot start {source}: {e}");
            format!("{source}: {e}")
        })
}

/// Owns the screens and the resources they share.
pub struct MazeRunnerGame {
    config: &'static GameConfig,
    flow: ScreenFlow,
    menu: Option<MenuScreen>,
    game_screen: Option<GameScreen>,
    graphics: GraphicsManager,
    music: MusicPlayer,
    screen_size: Vec2,
}

impl MazeRunnerGame {
    pub async fn create(config: &'static GameConfig) -> Self {
        let (graphics, music) = futures::join!(
            GraphicsManager::load(&config.assets),
            MusicPlayer::load(&config.audio, &config.assets),
        );

        let mut game = Self {
            config,
            flow: ScreenFlow::new(),
            menu: None,
            game_screen: None,
            graphics,
            music,
            screen_size: Vec2::new(screen_width(), screen_height()),
        };

        game.music.play_looped(Track::Background);
        game.go_to_menu(true);
        game
    }

    fn go_to_menu(&mut self, dispose_game: bool) {
        if let Some(screen) = self.game_screen.as_mut() {
            screen.hide(&mut self.music);
        }
        if dispose_game {
            self.game_screen = None;
        }

        let mut menu = MenuScreen::new(
            self.flow.page(),
            &self.config.assets.custom_maps_dir,
            self.screen_size.x,
        );
        menu.show(&mut self.music);
        self.menu = Some(menu);
        info!("menu: {:?} (paused: {})", self.flow.page(), self.flow.is_paused());
    }

    async fn start_game(&mut self, source: MapSource) {
        match load_game_maze(&source, &self.config.assets, maps::read_map_text).await {
            Ok(maze) => {
                if let Some(mut old) = self.game_screen.take() {
                    old.hide(&mut self.music);
                }
                let mut screen =
                    GameScreen::new(maze, source.clone(), self.screen_size, self.config);
                screen.show(&mut self.music);
                self.game_screen = Some(screen);
                if let Some(mut menu) = self.menu.take() {
                    menu.hide(&mut self.music);
                }
                self.flow.game_started(source);
            }
            Err(status) => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.set_status(&status);
                }
            }
        }
    }

    fn resume_game(&mut self) {
        if let Some(mut menu) = self.menu.take() {
            menu.hide(&mut self.music);
        }
        if let Some(screen) = self.game_screen.as_mut() {
            screen.show(&mut self.music);
        }
    }

    /// Applies a flow transition. Returns `false` once the game should exit.
    async fn apply(&mut self, transition: Transition) -> bool {
        match transition {
            Transition::None => {}
            Transition::ShowPage(page) => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.set_page(page);
                }
            }
            Transition::StartGame(source) => self.start_game(source).await,
            Transition::ResumeGame => self.resume_game(),
            Transition::ShowMenu { dispose_game } => self.go_to_menu(dispose_game),
            Transition::Quit => {
                info!("exiting");
                if let Some(screen) = self.game_screen.as_mut() {
                    screen.hide(&mut self.music);
                }
                return false;
            }
        }
        true
    }

    fn check_resize(&mut self) {
        let size = Vec2::new(screen_width(), screen_height());
        if size == self.screen_size {
            return;
        }
        self.screen_size = size;
        if let Some(menu) = self.menu.as_mut() {
            menu.resize(size.x, size.y);
        }
        if let Some(screen) = self.game_screen.as_mut() {
            screen.resize(size.x, size.y);
        }
    }

    fn next_transition(&mut self, delta: f32, input: &InputSnapshot) -> Transition {
        match self.flow.active() {
            ActiveScreen::Game => match self.game_screen.as_mut() {
                Some(screen) => match screen.update(delta, input) {
                    GameEvent::Pause => self.flow.on_pause(),
                    GameEvent::None => Transition::None,
                },
                None => Transition::None,
            },
            ActiveScreen::Menu => {
                if input.keyboard_action == KeyboardAction::Cancel {
                    return self.flow.on_menu_cancel();
                }
                match self.menu.as_mut().and_then(|menu| menu.update(input)) {
                    Some(event) => self.flow.on_menu_event(&event),
                    None => Transition::None,
                }
            }
        }
    }

    fn draw(&self) {
        clear_background(BLACK);
        match self.flow.active() {
            ActiveScreen::Game => {
                if let Some(screen) = &self.game_screen {
                    screen.draw(&self.graphics);
                }
            }
            ActiveScreen::Menu => {
                if let Some(menu) = &self.menu {
                    menu.draw(&self.graphics);
                }
            }
        }
    }

    /// Runs one frame. Returns `false` once the player chose to exit.
    pub async fn frame(&mut self) -> bool {
        self.check_resize();

        // Cap the step at one 30 fps frame.
        let delta = get_frame_time().min(1.0 / 30.0);
        let input = Input::poll();
        let transition = self.next_transition(delta, &input);
        if !self.apply(transition).await {
            return false;
        }

        self.draw();
        true
    }
}

pub async fn run() {
    let mut game = MazeRunnerGame::create(config::get()).await;

    loop {
        if !game.frame().await {
            break;
        }
        next_frame().await;
    }
}

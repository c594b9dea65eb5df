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

//! Which screen is up and what a menu click or Escape press leads to.
//!
//! Kept free of engine calls so the pause/resume rules can be tested
//! without a window.

use log::debug;

use crate::maps::MapSource;
use crate::ui::MenuEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveScreen {
    Menu,
    Game,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuPage {
    Main,
    Pause,
    Levels,
    CustomMaps,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    None,
    ShowPage(MenuPage),
    /// Load the maze and, once loaded, replace any running game with it.
    StartGame(MapSource),
    ResumeGame,
    ShowMenu { dispose_game: bool },
    Quit,
}

#[derive(Debug)]
pub struct ScreenFlow {
    active: ActiveScreen,
    page: MenuPage,
    paused: bool,
    has_game: bool,
    last_source: Option<MapSource>,
}

impl Default for ScreenFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenFlow {
    pub fn new() -> Self {
        Self {
            active: ActiveScreen::Menu,
            page: MenuPage::Main,
            paused: false,
            has_game: false,
            last_source: None,
        }
    }

    pub fn active(&self) -> ActiveScreen {
        self.active
    }

    pub fn page(&self) -> MenuPage {
        self.page
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn has_game(&self) -> bool {
        self.has_game
    }

    /// Page the menu falls back to: the pause menu while a game is suspended.
    fn home_page(&self) -> MenuPage {
        if self.paused { MenuPage::Pause } else { MenuPage::Main }
    }

    pub fn on_menu_event(&mut self, event: &MenuEvent) -> Transition {
        debug!("menu event {event:?} on {:?}", self.page);
        match event {
            MenuEvent::Play => Transition::StartGame(MapSource::Default),
            MenuEvent::NewGame => {
                Transition::StartGame(self.last_source.clone().unwrap_or(MapSource::Default))
            }
            MenuEvent::LoadLevel(n) => Transition::StartGame(MapSource::Level(*n)),
            MenuEvent::LoadMap(path) => Transition::StartGame(MapSource::File(path.clone())),
            MenuEvent::ShowLevels => {
                self.page = MenuPage::Levels;
                Transition::ShowPage(self.page)
            }
            MenuEvent::ShowCustomMaps => {
                self.page = MenuPage::CustomMaps;
                Transition::ShowPage(self.page)
            }
            MenuEvent::Back => {
                self.page = match self.page {
                    MenuPage::CustomMaps => MenuPage::Levels,
                    _ => self.home_page(),
                };
                Transition::ShowPage(self.page)
            }
            MenuEvent::Resume => {
                if self.paused && self.has_game {
                    self.paused = false;
                    self.active = ActiveScreen::Game;
                    Transition::ResumeGame
                } else {
                    Transition::None
                }
            }
            MenuEvent::QuitToMainMenu => {
                self.paused = false;
                self.has_game = false;
                self.active = ActiveScreen::Menu;
                self.page = MenuPage::Main;
                Transition::ShowMenu { dispose_game: true }
            }
            MenuEvent::Exit => Transition::Quit,
        }
    }

    /// Escape while playing suspends the game behind the pause menu.
    pub fn on_pause(&mut self) -> Transition {
        if self.active != ActiveScreen::Game {
            return Transition::None;
        }
        self.paused = true;
        self.active = ActiveScreen::Menu;
        self.page = MenuPage::Pause;
        Transition::ShowMenu {
            dispose_game: false,
        }
    }

    /// Escape inside the menu steps back a page, or resumes from the pause menu.
    pub fn on_menu_cancel(&mut self) -> Transition {
        match self.page {
            MenuPage::Levels | MenuPage::CustomMaps => self.on_menu_event(&MenuEvent::Back),
            MenuPage::Pause => self.on_menu_event(&MenuEvent::Resume),
            MenuPage::Main => Transition::None,
        }
    }

    /// Records that a game screen for `source` is now running.
    pub fn game_started(&mut self, source: MapSource) {
        self.active = ActiveScreen::Game;
        self.paused = false;
        self.has_game = true;
        self.last_source = Some(source);
    }
}

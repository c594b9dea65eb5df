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

use std::path::PathBuf;

use log::{debug, warn};

use crate::audio::MusicPlayer;
use crate::flow::MenuPage;
use crate::graphics::GraphicsManager;
use crate::input::{InputSnapshot, KeyboardAction};
use crate::maps::{list_map_files, LEVEL_COUNT};
use crate::screens::Screen;
use crate::ui::{MenuEvent, MenuPanel};

fn labelled(text: &str, event: MenuEvent) -> (String, MenuEvent) {
    (text.to_string(), event)
}

fn map_button(path: PathBuf) -> (String, MenuEvent) {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    (name, MenuEvent::LoadMap(path))
}

/// Builds the widgets for one page. `custom_maps_dir` is only read for the custom map list.
pub fn build_panel(page: MenuPage, custom_maps_dir: &str) -> MenuPanel {
    match page {
        MenuPage::Main => MenuPanel::new(
            "Welcome to BlazeMaze",
            vec![
                labelled("Play", MenuEvent::Play),
                labelled("Levels", MenuEvent::ShowLevels),
                labelled("Exit", MenuEvent::Exit),
            ],
        ),
        MenuPage::Pause => MenuPanel::new(
            "Game Paused",
            vec![
                labelled("Resume", MenuEvent::Resume),
                labelled("New Game", MenuEvent::NewGame),
                labelled("Load Map", MenuEvent::ShowLevels),
                labelled("Quit to Main Menu", MenuEvent::QuitToMainMenu),
            ],
        ),
        MenuPage::Levels => {
            let mut buttons: Vec<_> = (1..=LEVEL_COUNT)
                .map(|n| (format!("Level {n}"), MenuEvent::LoadLevel(n)))
                .collect();
            buttons.push(labelled("Custom", MenuEvent::ShowCustomMaps));
            buttons.push(labelled("Back", MenuEvent::Back));
            MenuPanel::new("Choose Your Map", buttons)
        }
        MenuPage::CustomMaps => {
            let (mut buttons, status) = match list_map_files(custom_maps_dir) {
                Ok(files) if files.is_empty() => {
                    (Vec::new(), format!("no map files in {custom_maps_dir}"))
                }
                Ok(files) => (files.into_iter().map(map_button).collect(), String::new()),
                Err(e) => {
                    warn!("cannot list {custom_maps_dir}: {e}");
                    (Vec::new(), e.to_string())
                }
            };
            buttons.push(labelled("Back", MenuEvent::Back));
            let mut panel = MenuPanel::new("Custom Maps", buttons);
            panel.set_status(&status);
            panel
        }
    }
}

pub struct MenuScreen {
    page: MenuPage,
    panel: MenuPanel,
    custom_maps_dir: String,
    screen_width: f32,
}

impl MenuScreen {
    pub fn new(page: MenuPage, custom_maps_dir: &str, screen_width: f32) -> Self {
        let mut panel = build_panel(page, custom_maps_dir);
        panel.update_geometry(screen_width);
        Self {
            page,
            panel,
            custom_maps_dir: custom_maps_dir.to_string(),
            screen_width,
        }
    }

    pub fn page(&self) -> MenuPage {
        self.page
    }

    pub fn panel(&self) -> &MenuPanel {
        &self.panel
    }

    pub fn set_page(&mut self, page: MenuPage) {
        self.page = page;
        self.panel = build_panel(page, &self.custom_maps_dir);
        self.panel.update_geometry(self.screen_width);
        debug!("menu page {page:?}: {:?}", self.panel.button_labels());
    }

    pub fn set_status(&mut self, text: &str) {
        self.panel.set_status(text);
    }

    /// A click on a button, or Enter while one is hovered, yields its event.
    pub fn update(&mut self, input: &InputSnapshot) -> Option<MenuEvent> {
        self.panel.update_mouse_position(input.mouse);
        if let Some(click) = input.click {
            return self.panel.handle_click(click);
        }
        if input.keyboard_action == KeyboardAction::Confirm {
            return self.panel.hovered_event();
        }
        None
    }
}

impl Screen for MenuScreen {
    // Background music keeps running across screens, so the menu leaves audio alone.
    fn show(&mut self, _music: &mut MusicPlayer) {}

    fn hide(&mut self, _music: &mut MusicPlayer) {}

    fn resize(&mut self, width: f32, _height: f32) {
        self.screen_width = width;
        self.panel.update_geometry(width);
    }

    fn draw(&self, _graphics: &GraphicsManager) {
        self.panel.draw();
    }
}

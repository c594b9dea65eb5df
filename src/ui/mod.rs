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

pub mod point_f;
pub mod quad_f;
pub mod widget_button;
pub mod widget_text;

use std::path::PathBuf;

use macroquad::prelude::*;

use crate::ui::{
    point_f::PointF,
    quad_f::QuadF,
    widget_button::WidgetButton,
    widget_text::{TEXT_FONT_SIZE, TITLE_FONT_SIZE, WidgetText},
};

pub const TOP_MARGIN: f32 = 20.0;
pub const TITLE_HEIGHT: f32 = 60.0;
pub const TITLE_PADDING_BOTTOM: f32 = 80.0;
pub const ROW_WIDTH: f32 = 500.0;
pub const ROW_HEIGHT: f32 = 50.0;
pub const ROW_PADDING: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent {
    Play,
    ShowLevels,
    Exit,
    Resume,
    NewGame,
    QuitToMainMenu,
    LoadLevel(usize),
    ShowCustomMaps,
    LoadMap(PathBuf),
    Back,
}

/// Title quad followed by one quad per row, top aligned and centred on `screen_width`.
pub fn column_layout(screen_width: f32, rows: usize) -> (QuadF, Vec<QuadF>) {
    let x = (screen_width - ROW_WIDTH) / 2.0;
    let title = QuadF::new(x, TOP_MARGIN, ROW_WIDTH, TITLE_HEIGHT);

    let mut y = title.bottom() + TITLE_PADDING_BOTTOM;
    let quads = (0..rows)
        .map(|_| {
            let quad = QuadF::new(x, y + ROW_PADDING, ROW_WIDTH, ROW_HEIGHT);
            y = quad.bottom() + ROW_PADDING;
            quad
        })
        .collect();
    (title, quads)
}

/// One menu page: a title over a column of buttons, plus a status line.
#[derive(Debug)]
pub struct MenuPanel {
    title: WidgetText,
    buttons: Vec<WidgetButton<MenuEvent>>,
    status: WidgetText,
}

impl MenuPanel {
    pub fn new(title: &str, buttons: Vec<(String, MenuEvent)>) -> Self {
        let mut status = WidgetText::new("", TEXT_FONT_SIZE);
        status.color = ORANGE;
        Self {
            title: WidgetText::new(title, TITLE_FONT_SIZE),
            buttons: buttons
                .into_iter()
                .map(|(text, event)| WidgetButton::new(&text, event))
                .collect(),
            status,
        }
    }

    pub fn title(&self) -> &str {
        &self.title.text
    }

    pub fn button_labels(&self) -> Vec<&str> {
        self.buttons.iter().map(|b| b.text.text.as_str()).collect()
    }

    pub fn status(&self) -> &str {
        &self.status.text
    }

    pub fn set_status(&mut self, text: &str) {
        self.status.set_text(text);
    }

    pub fn update_geometry(&mut self, screen_width: f32) {
        // The status line takes one extra row below the buttons.
        let (title, quads) = column_layout(screen_width, self.buttons.len() + 1);
        self.title.quad = title;
        for (button, quad) in self.buttons.iter_mut().zip(quads.iter()) {
            button.set_quad(*quad);
        }
        if let Some(last) = quads.last() {
            self.status.quad = *last;
        }
    }

    pub fn update_mouse_position(&mut self, pos: PointF) {
        for button in &mut self.buttons {
            button.on_mouse_position_update(pos);
        }
    }

    pub fn handle_click(&self, pos: PointF) -> Option<MenuEvent> {
        self.buttons.iter().find_map(|b| b.on_click(pos))
    }

    /// Event of the button under the mouse, for keyboard activation.
    pub fn hovered_event(&self) -> Option<MenuEvent> {
        self.buttons
            .iter()
            .find(|b| b.hovered)
            .map(|b| b.event.clone())
    }

    pub fn draw(&self) {
        self.title.draw();
        for button in &self.buttons {
            button.draw();
        }
        self.status.draw();
    }
}

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

use crate::{position::Direction, ui::point_f::PointF};
use macroquad::prelude::*;
use once_cell::sync::Lazy;
use std::sync::Mutex;

const CLICK_TOLERANCE: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyboardAction {
    None,
    Cancel,
    Confirm,
}

pub struct Input {
    keyboard_action: KeyboardAction,
    direction_intention: Direction,
    mouse_position: PointF,
    clicked_position: Option<PointF>,

    mouse_press_position: Option<PointF>,
}

#[derive(Clone, Copy)]
pub struct InputSnapshot {
    pub keyboard_action: KeyboardAction,
    /// Held direction, for continuous walking.
    pub direction: Direction,
    pub click: Option<PointF>,
    pub mouse: PointF,
}

#[cfg(test)]
impl InputSnapshot {
    pub fn idle() -> Self {
        Self {
            keyboard_action: KeyboardAction::None,
            direction: Direction::None,
            click: None,
            mouse: PointF::zero(),
        }
    }
}

fn held(keys: &[KeyCode]) -> bool {
    keys.iter().any(|&k| is_key_down(k))
}

impl Input {
    fn handle_keyboard_input(&mut self) {
        let mut keyboard_action = KeyboardAction::None;

        if is_key_pressed(KeyCode::Escape) {
            keyboard_action = KeyboardAction::Cancel;
        }
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
            keyboard_action = KeyboardAction::Confirm;
        }

        let mut dx = 0;
        let mut dy = 0;
        if held(&[KeyCode::Right, KeyCode::D, KeyCode::Kp6]) {
            dx += 1;
        }
        if held(&[KeyCode::Left, KeyCode::A, KeyCode::Kp4]) {
            dx -= 1;
        }
        if held(&[KeyCode::Up, KeyCode::W, KeyCode::Kp8]) {
            dy += 1;
        }
        if held(&[KeyCode::Down, KeyCode::S, KeyCode::Kp2]) {
            dy -= 1;
        }

        self.keyboard_action = keyboard_action;
        self.direction_intention = Direction::from_axes(dx, dy);
    }

    fn handle_mouse_input(&mut self) {
        self.mouse_position = mouse_position().into();
        if is_mouse_button_pressed(MouseButton::Left) {
            self.mouse_press_position = Some(self.mouse_position);
        }
        if is_mouse_button_released(MouseButton::Left) {
            if let Some(press_pos) = self.mouse_press_position.take() {
                // A drag that wanders off the press point is not a click.
                self.clicked_position =
                    Some(press_pos).filter(|p| p.near(self.mouse_position, CLICK_TOLERANCE));
            }
        }
    }

    pub fn poll() -> InputSnapshot {
        let mut input = match INPUT.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        input.handle_keyboard_input();
        input.handle_mouse_input();
        InputSnapshot {
            keyboard_action: input.keyboard_action,
            direction: input.direction_intention,
            click: input.clicked_position.take(), // consumes click for this frame
            mouse: input.mouse_position,
        }
    }
}

static INPUT: Lazy<Mutex<Input>> = Lazy::new(|| {
    Mutex::new(Input {
        keyboard_action: KeyboardAction::None,
        direction_intention: Direction::None,
        mouse_position: PointF::zero(),
        clicked_position: None,
        mouse_press_position: None,
    })
});

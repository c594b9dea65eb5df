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

use crate::ui::quad_f::QuadF;

pub const TITLE_FONT_SIZE: u16 = 48;
pub const TEXT_FONT_SIZE: u16 = 30;

#[derive(Clone, Debug)]
pub struct WidgetText {
    pub text: String,
    pub font_size: u16,
    pub color: Color,
    pub visible: bool,
    pub quad: QuadF,
}

impl WidgetText {
    pub fn new(text: &str, font_size: u16) -> Self {
        WidgetText {
            text: text.to_string(),
            font_size,
            color: WHITE,
            visible: true,
            quad: QuadF::zero(),
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Draws the text centred in its quad.
    pub fn draw(&self) {
        if !self.visible || self.text.is_empty() {
            return;
        }
        let dim = measure_text(&self.text, None, self.font_size, 1.0);
        let x = self.quad.center_x() - dim.width / 2.0;
        let y = self.quad.y + (self.quad.h + dim.height) / 2.0;
        draw_text(&self.text, x, y, self.font_size as f32, self.color);
    }
}

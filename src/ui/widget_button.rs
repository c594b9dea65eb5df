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

use crate::ui::{
    point_f::PointF,
    quad_f::QuadF,
    widget_text::{TEXT_FONT_SIZE, WidgetText},
};

/// Clickable menu row that reports `event` when released over.
#[derive(Clone, Debug)]
pub struct WidgetButton<E> {
    pub text: WidgetText,
    pub event: E,
    pub hovered: bool,
    pub hovered_color: Color,
    pub color: Color,
}

impl<E: Clone> WidgetButton<E> {
    pub fn new(text: &str, event: E) -> Self {
        WidgetButton {
            text: WidgetText::new(text, TEXT_FONT_SIZE),
            event,
            hovered: false,
            hovered_color: Color::new(0.5, 0.5, 0.5, 1.0),
            color: Color::new(0.3, 0.3, 0.3, 1.0),
        }
    }

    pub fn quad(&self) -> QuadF {
        self.text.quad
    }

    pub fn set_quad(&mut self, quad: QuadF) {
        self.text.quad = quad;
    }

    pub fn is_visible(&self) -> bool {
        self.text.visible
    }

    pub fn contains_point(&self, pos: PointF) -> bool {
        self.quad().contains(pos.x, pos.y)
    }

    pub fn on_mouse_position_update(&mut self, pos: PointF) {
        self.hovered = self.is_visible() && self.contains_point(pos);
    }

    pub fn on_click(&self, pos: PointF) -> Option<E> {
        if self.is_visible() && self.contains_point(pos) {
            Some(self.event.clone())
        } else {
            None
        }
    }

    pub fn draw(&self) {
        if !self.is_visible() {
            return;
        }
        let q = self.quad();
        let fill = if self.hovered { self.hovered_color } else { self.color };
        draw_rectangle(q.x, q.y, q.w, q.h, fill);
        draw_rectangle_lines(q.x, q.y, q.w, q.h, 2.0, WHITE);
        self.text.draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_inside_reports_event() {
        let mut button = WidgetButton::new("Play", 7u8);
        button.set_quad(QuadF::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(button.on_click(PointF::new(50.0, 20.0)), Some(7));
        assert_eq!(button.on_click(PointF::new(150.0, 20.0)), None);
    }

    #[test]
    fn hidden_button_ignores_mouse() {
        let mut button = WidgetButton::new("Exit", ());
        button.set_quad(QuadF::new(0.0, 0.0, 100.0, 40.0));
        button.text.visible = false;
        button.on_mouse_position_update(PointF::new(10.0, 10.0));
        assert!(!button.hovered);
        assert_eq!(button.on_click(PointF::new(10.0, 10.0)), None);
    }
}

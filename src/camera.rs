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

use crate::config::CameraConfig;

/// Orthographic follow camera over a maze, in world pixels with y up.
///
/// `zoom` is world units per screen pixel, so smaller values show less of
/// the maze.
#[derive(Clone, Debug)]
pub struct MazeCamera {
    pub position: Vec2,
    pub zoom: f32,
    viewport: Vec2,
    maze_size: Vec2,
    lerp: f32,
    padding: f32,
}

impl MazeCamera {
    pub fn new(maze_size: Vec2, viewport: Vec2, config: &CameraConfig) -> Self {
        Self {
            position: maze_size / 2.0,
            zoom: Self::fit_zoom(maze_size, viewport),
            viewport,
            maze_size,
            lerp: config.lerp.clamp(0.0, 1.0),
            padding: config.padding.clamp(0.0, 0.5),
        }
    }

    /// Zoom at which the whole maze fits in the viewport.
    pub fn fit_zoom(maze_size: Vec2, viewport: Vec2) -> f32 {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return 1.0;
        }
        let zoom = (maze_size.x / viewport.x).max(maze_size.y / viewport.y);
        if zoom > 0.0 { zoom } else { 1.0 }
    }

    pub fn view_size(&self) -> Vec2 {
        self.viewport * self.zoom
    }

    /// Region the camera centre may occupy while following.
    pub fn follow_bounds(&self) -> Rect {
        let min = self.maze_size * self.padding;
        let max = self.maze_size * (1.0 - self.padding);
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Eases toward `target` and keeps the centre inside [`follow_bounds`](Self::follow_bounds).
    pub fn follow(&mut self, target: Vec2) {
        let eased = self.position + (target - self.position) * self.lerp;
        let bounds = self.follow_bounds();
        self.position = Vec2::new(
            eased.x.clamp(bounds.x, bounds.x + bounds.w),
            eased.y.clamp(bounds.y, bounds.y + bounds.h),
        );
    }

    /// Jumps straight to `target`.
    pub fn focus(&mut self, target: Vec2, zoom: f32) {
        self.position = target;
        self.zoom = zoom;
    }

    pub fn show_whole_maze(&mut self) {
        self.position = self.maze_size / 2.0;
        self.zoom = Self::fit_zoom(self.maze_size, self.viewport);
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    pub fn to_camera2d(&self) -> Camera2D {
        let view = self.view_size();
        Camera2D {
            target: self.position,
            zoom: vec2(2.0 / view.x, 2.0 / view.y),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    fn camera() -> MazeCamera {
        MazeCamera::new(
            Vec2::new(320.0, 160.0),
            Vec2::new(800.0, 600.0),
            &CameraConfig::default(),
        )
    }

    #[test]
    fn starts_centred_with_whole_maze_visible() {
        let cam = camera();
        assert_eq!(cam.position, Vec2::new(160.0, 80.0));
        assert_eq!(cam.zoom, 0.4);
        let view = cam.view_size();
        assert!(view.x >= 320.0 && view.y >= 160.0);
    }

    #[test]
    fn follow_moves_a_tenth_of_the_way() {
        let mut cam = camera();
        cam.focus(Vec2::new(100.0, 100.0), 0.4);
        cam.follow(Vec2::new(200.0, 50.0));
        assert!(close(cam.position, Vec2::new(110.0, 95.0)));
    }

    #[test]
    fn follow_clamps_to_padded_maze() {
        let mut cam = camera();
        cam.focus(Vec2::new(0.0, 0.0), 0.4);
        cam.follow(Vec2::new(-500.0, -500.0));
        assert!(close(cam.position, Vec2::new(32.0, 16.0)));

        cam.focus(Vec2::new(320.0, 160.0), 0.4);
        cam.follow(Vec2::new(1000.0, 1000.0));
        assert!(close(cam.position, Vec2::new(288.0, 144.0)));
    }

    #[test]
    fn follow_bounds_cover_middle_eighty_percent() {
        let bounds = camera().follow_bounds();
        assert!(close(bounds.point(), Vec2::new(32.0, 16.0)));
        assert!(close(bounds.size(), Vec2::new(256.0, 128.0)));
    }

    #[test]
    fn oversized_padding_collapses_to_centre() {
        let config = CameraConfig {
            padding: 0.9,
            ..CameraConfig::default()
        };
        let mut cam = MazeCamera::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 10.0), &config);
        cam.follow(Vec2::new(0.0, 0.0));
        assert!(close(cam.position, Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn fit_zoom_handles_degenerate_viewport() {
        assert_eq!(MazeCamera::fit_zoom(Vec2::new(64.0, 64.0), Vec2::ZERO), 1.0);
        assert_eq!(MazeCamera::fit_zoom(Vec2::new(64.0, 32.0), Vec2::new(32.0, 32.0)), 2.0);
    }

    #[test]
    fn resize_changes_visible_area() {
        let mut cam = camera();
        cam.focus(cam.position, 0.5);
        cam.resize(Vec2::new(400.0, 200.0));
        assert_eq!(cam.view_size(), Vec2::new(200.0, 100.0));
    }
}

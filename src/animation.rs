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

/// Frame sequence played at a fixed rate.
#[derive(Clone, Debug)]
pub struct Animation<T> {
    frames: Vec<T>,
    frame_duration: f32,
}

impl<T> Animation<T> {
    pub fn new(frame_duration: f32, frames: Vec<T>) -> Self {
        Self {
            frames,
            frame_duration,
        }
    }

    pub fn frame_index(&self, state_time: f32, looping: bool) -> usize {
        if self.frames.len() <= 1 || self.frame_duration <= 0.0 {
            return 0;
        }
        let index = (state_time.max(0.0) / self.frame_duration) as usize;
        if looping {
            index % self.frames.len()
        } else {
            index.min(self.frames.len() - 1)
        }
    }

    /// Frame shown `state_time` seconds into the animation, `None` when there are no frames.
    pub fn key_frame(&self, state_time: f32, looping: bool) -> Option<&T> {
        self.frames.get(self.frame_index(state_time, looping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looping_wraps_around() {
        let anim = Animation::new(0.1, vec!['a', 'b', 'c', 'd']);
        assert_eq!(anim.key_frame(0.0, true), Some(&'a'));
        assert_eq!(anim.key_frame(0.15, true), Some(&'b'));
        assert_eq!(anim.key_frame(0.45, true), Some(&'a'));
    }

    #[test]
    fn non_looping_holds_last_frame() {
        let anim = Animation::new(0.1, vec![1, 2, 3]);
        assert_eq!(anim.key_frame(5.0, false), Some(&3));
    }

    #[test]
    fn single_frame_and_empty() {
        let single = Animation::new(0.1, vec!["only"]);
        assert_eq!(single.key_frame(12.3, true), Some(&"only"));

        let empty: Animation<u8> = Animation::new(0.1, Vec::new());
        assert_eq!(empty.key_frame(0.3, true), None);
    }
}

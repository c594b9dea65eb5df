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

use log::{debug, warn};
use macroquad::audio::{load_sound, play_sound, stop_sound, PlaySoundParams, Sound};

use crate::config::{AssetConfig, AudioConfig};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Track {
    Background,
    InGame,
}

struct LoadedTrack {
    sound: Sound,
    volume: f32,
    playing: bool,
}

async fn load_track(path: &str, volume: f32) -> Option<LoadedTrack> {
    match load_sound(path).await {
        Ok(sound) => Some(LoadedTrack {
            sound,
            volume,
            playing: false,
        }),
        Err(e) => {
            warn!("failed to load music from {path}: {e}");
            None
        }
    }
}

/// Looping music tracks. A track that failed to load is silently skipped.
pub struct MusicPlayer {
    background: Option<LoadedTrack>,
    in_game: Option<LoadedTrack>,
}

impl MusicPlayer {
    pub fn silent() -> Self {
        Self {
            background: None,
            in_game: None,
        }
    }

    pub async fn load(audio: &AudioConfig, assets: &AssetConfig) -> Self {
        if !audio.enabled {
            debug!("audio disabled");
            return Self::silent();
        }

        let (background, in_game) = futures::join!(
            load_track(&assets.background_music, audio.background_volume),
            load_track(&assets.game_music, audio.game_volume),
        );
        Self { background, in_game }
    }

    fn track_mut(&mut self, track: Track) -> Option<&mut LoadedTrack> {
        match track {
            Track::Background => self.background.as_mut(),
            Track::InGame => self.in_game.as_mut(),
        }
    }

    pub fn play_looped(&mut self, track: Track) {
        if let Some(t) = self.track_mut(track) {
            if t.playing {
                return;
            }
            play_sound(
                &t.sound,
                PlaySoundParams {
                    looped: true,
                    volume: t.volume,
                },
            );
            t.playing = true;
            debug!("playing {track:?}");
        }
    }

    pub fn stop(&mut self, track: Track) {
        if let Some(t) = self.track_mut(track) {
            if t.playing {
                stop_sound(&t.sound);
                t.playing = false;
                debug!("stopped {track:?}");
            }
        }
    }
}

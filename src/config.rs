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

use std::fmt;
use std::fs;
use std::path::Path;

use log::{info, warn};
use once_cell::sync::OnceCell;
use serde::Deserialize;

pub const CONFIG_PATH: &str = "assets/config.json";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "BlazeMaze".to_string(),
            width: 1000,
            height: 720,
            fullscreen: false,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// World units per screen pixel while following the player.
    pub zoom: f32,
    pub lerp: f32,
    /// Fraction of the maze kept between the camera centre and each edge.
    pub padding: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom: 0.4,
            lerp: 0.1,
            padding: 0.1,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Walking speed in world pixels per second.
    pub speed: f32,
    pub frame_duration: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 64.0,
            frame_duration: 0.1,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    pub background_volume: f32,
    pub game_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            background_volume: 0.5,
            game_volume: 0.7,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetConfig {
    pub tiles_texture: String,
    pub mobs_texture: String,
    pub character_texture: String,
    pub background_music: String,
    pub game_music: String,
    pub default_map: String,
    pub maps_dir: String,
    pub custom_maps_dir: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            tiles_texture: "assets/basictiles.png".to_string(),
            mobs_texture: "assets/mobs.png".to_string(),
            character_texture: "assets/character.png".to_string(),
            background_music: "assets/background.ogg".to_string(),
            game_music: "assets/in_game.ogg".to_string(),
            default_map: "assets/defaultmap/level-1.properties".to_string(),
            maps_dir: "assets/maps".to_string(),
            custom_maps_dir: "assets/maps".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub player: PlayerConfig,
    pub audio: AudioConfig,
    pub assets: AssetConfig,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config: {e}"),
            ConfigError::Json(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl GameConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => {
                info!("using config {}", path.as_ref().display());
                config
            }
            Err(e) => {
                warn!("{e}, falling back to defaults");
                Self::default()
            }
        }
    }
}

pub static GAME_CONFIG: OnceCell<GameConfig> = OnceCell::new();

/// Global configuration, read from [`CONFIG_PATH`] on first use.
pub fn get() -> &'static GameConfig {
    GAME_CONFIG.get_or_init(|| GameConfig::load_or_default(CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.camera.zoom, 0.4);
        assert_eq!(config.camera.lerp, 0.1);
        assert_eq!(config.camera.padding, 0.1);
        assert_eq!(config.player.frame_duration, 0.1);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config =
            GameConfig::from_json(r#"{ "camera": { "zoom": 0.25 }, "audio": { "enabled": false } }"#)
                .unwrap();
        assert_eq!(config.camera.zoom, 0.25);
        assert_eq!(config.camera.lerp, 0.1);
        assert!(!config.audio.enabled);
        assert_eq!(config.window.title, "BlazeMaze");
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = GameConfig::from_json("{ camera: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = GameConfig::load_or_default("/no/such/config.json");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn bundled_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIG_PATH);
        let config = GameConfig::load(path).unwrap();
        assert_eq!(config.assets.maps_dir, "assets/maps");
    }
}

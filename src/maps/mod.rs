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

pub mod maze_data;
pub mod properties;

use std::fmt;
use std::fs;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use macroquad::file::load_string;

use crate::config::AssetConfig;
pub use maze_data::MazeData;

pub const TILE_SIZE: f32 = 16.0;
pub const LEVEL_COUNT: usize = 5;
pub const MAP_FILE_SUFFIX: &str = "properties";
/// Exclusive upper bound on either coordinate in a map file.
pub const MAX_MAZE_SIDE: usize = 1024;

#[derive(Debug)]
pub enum MazeError {
    Io(String),
    Parse { line: usize, reason: String },
    InvalidCoordinate { key: String },
    InvalidTileCode { key: String, value: String },
    TooLarge { key: String },
    UnknownLevel(usize),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::Io(e) => write!(f, "failed reading map: {e}"),
            MazeError::Parse { line, reason } => write!(f, "line {line}: {reason}"),
            MazeError::InvalidCoordinate { key } => {
                write!(f, "`{key}` is not an `x,y` coordinate")
            }
            MazeError::InvalidTileCode { key, value } => {
                write!(f, "tile code `{value}` at `{key}` is not an integer")
            }
            MazeError::TooLarge { key } => {
                write!(f, "`{key}` lies outside the {MAX_MAZE_SIDE}x{MAX_MAZE_SIDE} limit")
            }
            MazeError::UnknownLevel(n) => write!(f, "there is no level {n}"),
        }
    }
}

impl std::error::Error for MazeError {}

impl From<io::Error> for MazeError {
    fn from(e: io::Error) -> Self {
        MazeError::Io(e.to_string())
    }
}

impl From<macroquad::Error> for MazeError {
    fn from(e: macroquad::Error) -> Self {
        MazeError::Io(e.to_string())
    }
}

/// Where a maze comes from. Kept around so "New Game" can reload the same source.
#[derive(Clone, Debug, PartialEq)]
pub enum MapSource {
    Default,
    Level(usize),
    File(PathBuf),
}

impl MapSource {
    pub fn path(&self, assets: &AssetConfig) -> Result<PathBuf, MazeError> {
        match self {
            MapSource::Default => Ok(PathBuf::from(&assets.default_map)),
            MapSource::Level(n) => level_path(&assets.maps_dir, *n),
            MapSource::File(path) => Ok(path.clone()),
        }
    }
}

impl fmt::Display for MapSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapSource::Default => write!(f, "default map"),
            MapSource::Level(n) => write!(f, "level {n}"),
            MapSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Path of built-in level `n`, counting from 1.
pub fn level_path(maps_dir: &str, n: usize) -> Result<PathBuf, MazeError> {
    if !(1..=LEVEL_COUNT).contains(&n) {
        return Err(MazeError::UnknownLevel(n));
    }
    Ok(Path::new(maps_dir).join(format!("level-{n}.{MAP_FILE_SUFFIX}")))
}

/// Map files in `dir`, sorted by name.
pub fn list_map_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, MazeError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        let is_map = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(MAP_FILE_SUFFIX));
        if path.is_file() && is_map {
            files.push(path);
        }
    }
    files.sort();
    debug!("found {} map files in {}", files.len(), dir.as_ref().display());
    Ok(files)
}

/// Reads map text through the engine's file loader.
pub async fn read_map_text(path: PathBuf) -> Result<String, MazeError> {
    Ok(load_string(&path.to_string_lossy()).await?)
}

/// Reads `path` with `read` and parses it. `read` is [`read_map_text`] in the game.
pub async fn load_maze<R, Fut>(path: PathBuf, read: R) -> Result<MazeData, MazeError>
where
    R: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = Result<String, MazeError>>,
{
    let text = read(path.clone()).await?;
    let maze = MazeData::from_properties(&text)?;
    info!(
        "loaded {} ({}x{})",
        path.display(),
        maze.width(),
        maze.height()
    );
    Ok(maze)
}

pub async fn load_default_maze<R, Fut>(
    assets: &AssetConfig,
    read: R,
) -> Result<MazeData, MazeError>
where
    R: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = Result<String, MazeError>>,
{
    load_maze(PathBuf::from(&assets.default_map), read).await
}

pub async fn load_from_source<R, Fut>(
    source: &MapSource,
    assets: &AssetConfig,
    read: R,
) -> Result<MazeData, MazeError>
where
    R: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = Result<String, MazeError>>,
{
    match source {
        MapSource::Default => load_default_maze(assets, read).await,
        other => load_maze(other.path(assets)?, read).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::time::{SystemTime, UNIX_EPOCH};

    async fn read_from_disk(path: PathBuf) -> Result<String, MazeError> {
        Ok(fs::read_to_string(path)?)
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let dir = std::env::temp_dir().join(format!("blaze-maze-{name}-{stamp}"));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn level_paths_cover_the_five_levels() {
        assert_eq!(
            level_path("assets/maps", 3).unwrap(),
            PathBuf::from("assets/maps/level-3.properties")
        );
        assert!(matches!(level_path("assets/maps", 0), Err(MazeError::UnknownLevel(0))));
        assert!(matches!(level_path("assets/maps", 6), Err(MazeError::UnknownLevel(6))));
    }

    #[test]
    fn lists_only_properties_files_sorted() {
        let dir = scratch_dir("list");
        fs::write(dir.join("b.properties"), "0,0=0").unwrap();
        fs::write(dir.join("a.properties"), "0,0=0").unwrap();
        fs::write(dir.join("notes.txt"), "hello").unwrap();
        fs::create_dir_all(dir.join("nested.properties")).unwrap();

        let files = list_map_files(&dir).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.properties", "b.properties"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let err = list_map_files("/definitely/not/here").unwrap_err();
        assert!(matches!(err, MazeError::Io(_)));
    }

    #[test]
    fn bundled_maps_parse() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let mut paths: Vec<PathBuf> = (1..=LEVEL_COUNT)
            .map(|n| root.join(level_path("assets/maps", n).unwrap()))
            .collect();
        paths.push(root.join("assets/defaultmap/level-1.properties"));

        for path in paths {
            let text = fs::read_to_string(&path).unwrap();
            let maze = MazeData::from_properties(&text).unwrap();
            let entries = maze
                .cells()
                .filter(|&(_, code)| code == crate::tile::TileKind::Entry.code())
                .count();
            assert_eq!(entries, 1, "{}", path.display());
        }
    }

    #[test]
    fn sources_resolve_against_asset_dirs() {
        let assets = AssetConfig::default();
        assert_eq!(
            MapSource::Default.path(&assets).unwrap(),
            PathBuf::from("assets/defaultmap/level-1.properties")
        );
        assert_eq!(
            MapSource::Level(2).path(&assets).unwrap(),
            PathBuf::from("assets/maps/level-2.properties")
        );
        assert!(matches!(
            MapSource::Level(9).path(&assets),
            Err(MazeError::UnknownLevel(9))
        ));
    }

    #[test]
    fn loads_level_and_default_through_reader() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let assets = AssetConfig {
            default_map: root.join("assets/defaultmap/level-1.properties").display().to_string(),
            maps_dir: root.join("assets/maps").display().to_string(),
            ..AssetConfig::default()
        };

        let level = block_on(load_from_source(&MapSource::Level(3), &assets, read_from_disk));
        assert!(level.unwrap().width() > 1);
        let default = block_on(load_default_maze(&assets, read_from_disk)).unwrap();
        let via_source =
            block_on(load_from_source(&MapSource::Default, &assets, read_from_disk)).unwrap();
        assert_eq!(default, via_source);
    }

    #[test]
    fn load_failures_keep_their_cause() {
        let assets = AssetConfig::default();

        let unknown = block_on(load_from_source(&MapSource::Level(9), &assets, read_from_disk));
        assert!(matches!(unknown, Err(MazeError::UnknownLevel(9))));

        let missing = MapSource::File(PathBuf::from("/no/such/map.properties"));
        let missing = block_on(load_from_source(&missing, &assets, read_from_disk));
        assert!(matches!(missing, Err(MazeError::Io(_))));

        let dir = scratch_dir("bad");
        let bad = dir.join("bad.properties");
        fs::write(&bad, "0,0=1
x,y=0
").unwrap();
        let malformed = block_on(load_from_source(&MapSource::File(bad), &assets, read_from_disk));
        assert!(matches!(malformed, Err(MazeError::InvalidCoordinate { .. })));
        fs::remove_dir_all(&dir).unwrap();
    }
}

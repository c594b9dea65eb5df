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

use crate::maps::{properties::parse_properties, MazeError, MAX_MAZE_SIDE};
use crate::position::Position;
use crate::tile::{TileKind, EMPTY_TILE_CODE};
use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

/// Dense grid of tile codes, stored column-major (`tiles[x][y]`).
#[derive(Clone, Debug, PartialEq)]
pub struct MazeData {
    tiles: Vec<Vec<i32>>,
}

impl MazeData {
    pub fn filled(width: usize, height: usize, code: i32) -> Self {
        Self {
            tiles: vec![vec![code; height]; width],
        }
    }

    /// Builds the grid from the text of a maze properties file.
    ///
    /// The grid spans `0..=max_x` by `0..=max_y` over every key in the file.
    /// Cells not named in the file hold [`EMPTY_TILE_CODE`]. Coordinates at or
    /// past [`MAX_MAZE_SIDE`] are rejected before anything is allocated.
    pub fn from_properties(text: &str) -> Result<Self, MazeError> {
        let mut cells = BTreeMap::new();
        for (key, value) in parse_properties(text)? {
            let pos = parse_coordinate(&key)?;
            let code = value
                .trim()
                .parse::<i32>()
                .map_err(|_| MazeError::InvalidTileCode {
                    key: key.clone(),
                    value: value.clone(),
                })?;
            cells.insert(pos, code);
        }

        let max_x = cells.keys().map(|p| p.x).max().unwrap_or(0);
        let max_y = cells.keys().map(|p| p.y).max().unwrap_or(0);

        let mut maze = Self::filled(max_x + 1, max_y + 1, EMPTY_TILE_CODE);
        for (pos, code) in cells {
            maze[pos] = code;
        }
        Ok(maze)
    }

    pub fn width(&self) -> usize {
        self.tiles.len()
    }

    pub fn height(&self) -> usize {
        self.tiles.first().map_or(0, |column| column.len())
    }

    pub fn code_at(&self, pos: Position) -> Option<i32> {
        self.tiles.get(pos.x).and_then(|column| column.get(pos.y)).copied()
    }

    pub fn kind_at(&self, pos: Position) -> Option<TileKind> {
        self.code_at(pos).and_then(TileKind::from_code)
    }

    pub fn is_solid(&self, pos: Position) -> bool {
        self.kind_at(pos).is_some_and(TileKind::is_solid)
    }

    /// Every cell in placement order: x-major, then y.
    pub fn cells(&self) -> impl Iterator<Item = (Position, i32)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, &code)| (Position::new(x, y), code))
        })
    }
}

fn parse_coordinate(key: &str) -> Result<Position, MazeError> {
    let invalid = || MazeError::InvalidCoordinate {
        key: key.to_string(),
    };

    let mut parts = key.split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let x = x.trim().parse::<usize>().map_err(|_| invalid())?;
    let y = y.trim().parse::<usize>().map_err(|_| invalid())?;
    if x >= MAX_MAZE_SIDE || y >= MAX_MAZE_SIDE {
        return Err(MazeError::TooLarge {
            key: key.to_string(),
        });
    }
    Ok(Position::new(x, y))
}

impl Index<Position> for MazeData {
    type Output = i32;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.tiles[pos.x][pos.y]
    }
}

impl IndexMut<Position> for MazeData {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.tiles[pos.x][pos.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_file_becomes_dense_grid() {
        let maze = MazeData::from_properties("0,0=0\n3,1=2\n1,2=5\n").unwrap();
        assert_eq!(maze.width(), 4);
        assert_eq!(maze.height(), 3);
        assert_eq!(maze[Position::new(0, 0)], 0);
        assert_eq!(maze[Position::new(3, 1)], 2);
        assert_eq!(maze[Position::new(1, 2)], 5);
        assert_eq!(maze[Position::new(2, 2)], EMPTY_TILE_CODE);
        assert_eq!(maze.cells().count(), 12);
    }

    #[test]
    fn empty_file_gives_single_empty_cell() {
        let maze = MazeData::from_properties("# nothing here\n").unwrap();
        assert_eq!(maze, MazeData::filled(1, 1, EMPTY_TILE_CODE));
    }

    #[test]
    fn later_duplicate_wins() {
        let maze = MazeData::from_properties("1,1=0\n1,1=3\n").unwrap();
        assert_eq!(maze.kind_at(Position::new(1, 1)), Some(TileKind::Trap));
    }

    #[test]
    fn coordinate_parts_are_trimmed() {
        let maze = MazeData::from_properties("2, 1=4\n").unwrap();
        assert_eq!(maze.kind_at(Position::new(2, 1)), Some(TileKind::Enemy));
    }

    #[test]
    fn rejects_malformed_coordinates() {
        for text in ["a,b=0", "3=0", "-1,2=0", "1,2,3=0"] {
            let err = MazeData::from_properties(text).unwrap_err();
            assert!(
                matches!(err, MazeError::InvalidCoordinate { .. }),
                "{text}: {err:?}"
            );
        }
    }

    #[test]
    fn rejects_coordinates_past_the_size_limit() {
        let edge = MAX_MAZE_SIDE - 1;
        let maze = MazeData::from_properties(&format!("{edge},0=0")).unwrap();
        assert_eq!(maze.width(), MAX_MAZE_SIDE);

        for text in [
            "18446744073709551615,0=0".to_string(),
            "0,18446744073709551615=0".to_string(),
            "100000,100000=0".to_string(),
            format!("0,{MAX_MAZE_SIDE}=0"),
        ] {
            let err = MazeData::from_properties(&text).unwrap_err();
            assert!(matches!(err, MazeError::TooLarge { .. }), "{text}: {err:?}");
        }
    }

    #[test]
    fn rejects_non_numeric_codes() {
        let err = MazeData::from_properties("0,0=wall").unwrap_err();
        assert!(matches!(err, MazeError::InvalidTileCode { .. }));
    }

    #[test]
    fn unknown_codes_are_kept_but_have_no_kind() {
        let maze = MazeData::from_properties("0,0=9").unwrap();
        assert_eq!(maze.code_at(Position::new(0, 0)), Some(9));
        assert_eq!(maze.kind_at(Position::new(0, 0)), None);
        assert_eq!(maze.code_at(Position::new(1, 0)), None);
    }

    #[test]
    fn cells_iterate_x_major() {
        let maze = MazeData::filled(2, 2, 0);
        let order: Vec<_> = maze.cells().map(|(p, _)| (p.x, p.y)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn walls_are_solid() {
        let maze = MazeData::from_properties("0,0=0\n1,0=3").unwrap();
        assert!(maze.is_solid(Position::new(0, 0)));
        assert!(!maze.is_solid(Position::new(1, 0)));
        assert!(!maze.is_solid(Position::new(5, 5)));
    }
}

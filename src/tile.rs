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

/// Code written by the loader for cells absent from the map file.
pub const EMPTY_TILE_CODE: i32 = 7;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Wall,
    Entry,
    Exit,
    Trap,
    Enemy,
    Key,
}

impl TileKind {
    pub const ALL: [TileKind; 6] = [
        TileKind::Wall,
        TileKind::Entry,
        TileKind::Exit,
        TileKind::Trap,
        TileKind::Enemy,
        TileKind::Key,
    ];

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn code(self) -> i32 {
        match self {
            TileKind::Wall => 0,
            TileKind::Entry => 1,
            TileKind::Exit => 2,
            TileKind::Trap => 3,
            TileKind::Enemy => 4,
            TileKind::Key => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TileKind::Wall => "wall",
            TileKind::Entry => "entry",
            TileKind::Exit => "exit",
            TileKind::Trap => "trap",
            TileKind::Enemy => "enemy",
            TileKind::Key => "key",
        }
    }

    pub fn is_solid(self) -> bool {
        self == TileKind::Wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_the_six_kinds() {
        for kind in TileKind::ALL {
            assert_eq!(TileKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn unknown_codes_place_nothing() {
        assert_eq!(TileKind::from_code(EMPTY_TILE_CODE), None);
        assert_eq!(TileKind::from_code(6), None);
        assert_eq!(TileKind::from_code(-1), None);
    }

    #[test]
    fn only_walls_are_solid() {
        let solid: Vec<_> = TileKind::ALL.into_iter().filter(|k| k.is_solid()).collect();
        assert_eq!(solid, vec![TileKind::Wall]);
    }
}

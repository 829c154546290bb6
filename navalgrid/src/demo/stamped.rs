// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Adventurer level: stamps four ships, two of them diagonal, onto a board.
use std::io::{self, Write};

use log::debug;

use crate::{
    board::{Coordinate, Grid, EMPTY},
    config::DemoConfig,
    render,
    ships::{Direction, Line},
};

/// The stamped ships.
pub const SHIPS: [Line; 4] = [
    Line::new(Coordinate::new(1, 1), 3, Direction::Vertical),
    Line::new(Coordinate::new(4, 2), 4, Direction::Horizontal),
    Line::new(Coordinate::new(6, 5), 3, Direction::DiagonalDown),
    Line::new(Coordinate::new(2, 7), 3, Direction::DiagonalUp),
];

/// Build the board with every ship of [`SHIPS`] stamped using the configured marker.
/// Parts that don't fit the configured board are left off.
pub fn build_board(config: &DemoConfig) -> Grid {
    let mut grid = Grid::new(config.board());
    for ship in SHIPS.iter() {
        let outcome = grid.stamp(ship, config.ship_marker());
        if !outcome.complete() {
            debug!(
                "{} of {} parts of {} left off the board",
                outcome.dropped.len() + outcome.unaddressable,
                ship.len(),
                ship
            );
        }
    }
    grid
}

pub fn run<W: Write + ?Sized>(out: &mut W, config: &DemoConfig) -> io::Result<()> {
    writeln!(out, "=== ADVENTURER LEVEL ===")?;
    writeln!(out)?;
    let grid = build_board(config);
    let title = format!(
        "Board {} ({}=free, {}=occupied):",
        grid.dimensions(),
        EMPTY,
        config.ship_marker()
    );
    render::render_indexed_grid(out, &grid, &title)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::board::RectDimensions;

    #[test]
    fn default_board_has_thirteen_ship_cells() {
        let grid = build_board(&DemoConfig::default());
        let cells: [(isize, isize); 13] = [
            (1, 1),
            (4, 2),
            (5, 2),
            (6, 2),
            (7, 2),
            (1, 2),
            (1, 3),
            (4, 5),
            (6, 5),
            (3, 6),
            (7, 6),
            (2, 7),
            (8, 7),
        ];
        let mut expected: Vec<Coordinate> = cells.iter().copied().map(Coordinate::from).collect();
        expected.sort_by_key(|c| (c.y, c.x));

        assert_eq!(grid.positions(3).collect::<Vec<_>>(), expected);
        assert_eq!(grid.count(EMPTY), 87);
    }

    #[test]
    fn smaller_board_drops_parts() {
        let config = DemoConfig::new(
            RectDimensions::new(6, 6),
            RectDimensions::new(5, 5),
            3,
            1,
        )
        .unwrap();
        let grid = build_board(&config);
        // vertical 3, horizontal (4,2),(5,2), diagonal down (none), diagonal up (4,5)
        // only; (2,7) and (3,6) are below the board.
        assert_eq!(grid.count(3), 6);
        assert_eq!(grid.get(Coordinate::new(4, 5)), Some(3));
    }

    #[test]
    fn renders_indexed_board() {
        let mut out = Vec::new();
        run(&mut out, &DemoConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "=== ADVENTURER LEVEL ===");
        assert_eq!(lines[2], "Board 10x10 (0=free, 3=occupied):");
        assert_eq!(lines[4], "    0  1  2  3  4  5  6  7  8  9");
        assert_eq!(lines[5], " 0  0  0  0  0  0  0  0  0  0  0");
        assert_eq!(lines[7], " 2  0  3  0  0  3  3  3  3  0  0");
        assert_eq!(lines[12], " 7  0  0  3  0  0  0  0  0  3  0");
        assert_eq!(lines.len(), 16);
    }
}

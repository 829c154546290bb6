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

//! Novice level: lists the coordinates of two ships.
use std::io::{self, Write};

use crate::{
    board::Coordinate,
    ships::{Direction, Line},
};

/// The listed ships, with their labels.
pub const SHIPS: [(&str, Line); 2] = [
    ("A", Line::new(Coordinate::new(2, 1), 3, Direction::Vertical)),
    ("B", Line::new(Coordinate::new(5, 4), 4, Direction::Horizontal)),
];

/// Print every part of each ship as a numbered coordinate.
pub fn run<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "=== NOVICE LEVEL ===")?;
    writeln!(out)?;
    for (i, (label, ship)) in SHIPS.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_ship(out, label, ship)?;
    }
    writeln!(out)
}

fn write_ship<W: Write + ?Sized>(out: &mut W, label: &str, ship: &Line) -> io::Result<()> {
    writeln!(
        out,
        "Ship {} ({}) - anchor: {} - length: {}",
        label,
        ship.direction(),
        ship.anchor(),
        ship.len()
    )?;
    writeln!(out, "Parts (x, y):")?;
    for (n, part) in ship.cells().enumerate() {
        writeln!(out, "  Part {}: {}", n + 1, part)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_both_ships() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "=== NOVICE LEVEL ===

Ship A (vertical) - anchor: (2, 1) - length: 3
Parts (x, y):
  Part 1: (2, 1)
  Part 2: (2, 2)
  Part 3: (2, 3)

Ship B (horizontal) - anchor: (5, 4) - length: 4
Parts (x, y):
  Part 1: (5, 4)
  Part 2: (6, 4)
  Part 3: (7, 4)
  Part 4: (8, 4)

"
        );
    }
}

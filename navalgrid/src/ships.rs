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

//! Types used for defining ships and their shapes.
use std::fmt;

pub use self::linear::{Line, LineCells};

mod linear;

/// Direction a [`Line`] extends in from its anchor. `y` grows downward.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Down the column: `(0, 1)`.
    Vertical,
    /// Along the row: `(1, 0)`.
    Horizontal,
    /// Down and to the right, `\`: `(1, 1)`.
    DiagonalDown,
    /// Up and to the right, `/`: `(1, -1)`.
    DiagonalUp,
}

impl Direction {
    /// Per-step `(dx, dy)` offset of this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (0, 1),
            Direction::Horizontal => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Direction::Vertical => "vertical",
            Direction::Horizontal => "horizontal",
            Direction::DiagonalDown => "diagonal down",
            Direction::DiagonalUp => "diagonal up",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

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
use std::fmt;

/// The coordinates of a cell in the grid. Signed, so that a shape may run off the top or
/// left edge of a grid and have those parts rejected by the bounds check.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Horizontal position of the cell (the column).
    pub x: isize,
    /// Vertical position of the cell (the row).
    pub y: isize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Move this coordinate `steps` times by the delta `(dx, dy)`. Returns `None` if the
    /// result doesn't fit in a coordinate.
    pub(crate) fn checked_offset(self, (dx, dy): (isize, isize), steps: isize) -> Option<Self> {
        let x = dx.checked_mul(steps)?.checked_add(self.x)?;
        let y = dy.checked_mul(steps)?.checked_add(self.y)?;
        Some(Self::new(x, y))
    }
}

impl From<(isize, isize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (isize, isize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (isize, isize) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

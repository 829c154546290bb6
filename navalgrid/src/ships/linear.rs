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
use std::{convert::TryFrom, fmt, iter::FusedIterator, ops::Range};

use crate::{board::Coordinate, ships::Direction};

/// A linear ship shape: an anchor, a length, and the direction it extends in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Line {
    anchor: Coordinate,
    len: usize,
    direction: Direction,
}

impl Line {
    /// Construct a line starting at `anchor` covering `len` cells along `direction`.
    /// A zero-length line covers no cells.
    pub const fn new(anchor: Coordinate, len: usize, direction: Direction) -> Self {
        Self {
            anchor,
            len,
            direction,
        }
    }

    /// Get the first cell of this line.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    /// Get the length of this line.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if this line covers no cells.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the direction this line extends in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Get an iterator over the cells of this line, starting from the anchor. Cells are
    /// produced regardless of whether they fit any particular grid. The iterator ends
    /// early at the first step whose cell can't be represented as a [`Coordinate`].
    pub fn cells(&self) -> LineCells {
        LineCells {
            anchor: self.anchor,
            delta: self.direction.delta(),
            steps: 0..self.len,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} line of length {} at {}",
            self.direction, self.len, self.anchor
        )
    }
}

/// Iterator over the cells of a [`Line`].
#[derive(Debug, Clone)]
pub struct LineCells {
    anchor: Coordinate,
    delta: (isize, isize),
    steps: Range<usize>,
}

impl LineCells {
    /// Stop the iterator. Each axis moves monotonically, so once a step overflows every
    /// later step does too.
    fn stop(&mut self) {
        self.steps.start = self.steps.end;
    }
}

impl Iterator for LineCells {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        let i = self.steps.next()?;
        let cell = isize::try_from(i)
            .ok()
            .and_then(|step| self.anchor.checked_offset(self.delta, step));
        if cell.is_none() {
            self.stop();
        }
        cell
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.steps.len()))
    }
}

impl FusedIterator for LineCells {}

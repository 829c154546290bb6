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

//! Defines the marker grid and stamping of lines into it.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use log::debug;

use crate::{
    board::{CannotPlaceReason, Coordinate, PlaceError, RectDimensions},
    ships::Line,
};

/// Value stored in a single grid cell.
pub type Marker = u32;

/// Marker of a cell nothing has been written to.
pub const EMPTY: Marker = 0;

/// Result of stamping a [`Line`] onto a [`Grid`].
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Stamped {
    /// Number of cells that were written.
    pub marked: usize,
    /// Coordinates of the line that fell outside the grid, in line order.
    pub dropped: Vec<Coordinate>,
    /// Trailing steps of the line that run past the coordinate range and so have no
    /// cell at all.
    pub unaddressable: usize,
}

impl Stamped {
    /// Returns true if every cell of the line was written.
    pub fn complete(&self) -> bool {
        self.dropped.is_empty() && self.unaddressable == 0
    }
}

/// A rectangular grid of [`Marker`]s, stored row-major. Starts zero-initialized.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    /// Dimensions of this grid.
    dim: RectDimensions,
    /// Cells that make up this grid.
    cells: Box<[Marker]>,
}

impl Grid {
    /// Construct a grid of the given dimensions with every cell [`EMPTY`].
    pub fn new(dim: RectDimensions) -> Self {
        let cells = vec![EMPTY; dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }

    /// Get the [`RectDimensions`] of this grid.
    pub fn dimensions(&self) -> &RectDimensions {
        &self.dim
    }

    /// Get the marker at the given [`Coordinate`], or `None` if it's out of bounds.
    pub fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<Marker> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i).copied())
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut Marker> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Get an iterator over the rows of this grid. Each row is a slice of markers.
    pub fn rows(&self) -> impl Iterator<Item = &[Marker]> {
        self.cells.chunks(self.dim.width())
    }

    /// Get an iterator over every coordinate holding the given marker, row-major.
    pub fn positions(&self, marker: Marker) -> impl Iterator<Item = Coordinate> + '_ {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == marker)
            .map(move |(i, _)| dim.un_linearize(i))
    }

    /// Count the cells holding the given marker.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells.iter().filter(|&&cell| cell == marker).count()
    }

    /// Write `marker` into every in-bounds cell of `line`. Cells outside the grid, and
    /// steps past the coordinate range, are skipped and reported in the returned
    /// [`Stamped`].
    pub fn stamp(&mut self, line: &Line, marker: Marker) -> Stamped {
        let dim = self.dim;
        let mut outcome = Stamped::default();
        for coord in line.cells() {
            match self.get_mut(coord) {
                Some(cell) => {
                    *cell = marker;
                    outcome.marked += 1;
                }
                None => {
                    debug!("dropping {} of {}: outside {} grid", coord, line, dim);
                    outcome.dropped.push(coord);
                }
            }
        }
        outcome.unaddressable = line.len() - outcome.marked - outcome.dropped.len();
        if outcome.unaddressable > 0 {
            debug!(
                "dropping {} steps of {}: past the coordinate range",
                outcome.unaddressable, line
            );
        }
        outcome
    }

    /// Write `marker` into every cell of `line` only if all of them are in bounds.
    /// Otherwise leaves the grid untouched and returns the first offending cell.
    pub fn try_stamp(&mut self, line: &Line, marker: Marker) -> Result<usize, PlaceError> {
        // A line only runs past the coordinate range after a cell at the edge of that
        // range, which no grid contains, so this also rejects every truncated line.
        if let Some(coord) = line.cells().find(|coord| !self.dim.contains(coord)) {
            return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, *line, coord));
        }
        // Already ensured that every position is valid.
        for coord in line.cells() {
            self[coord] = marker;
        }
        Ok(line.len())
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = Marker;

    fn index(&self, coord: B) -> &Self::Output {
        match self.dim.try_linearize(coord.borrow()) {
            Some(i) => &self.cells[i],
            None => panic!("{} is out of bounds for {}", coord.borrow(), self.dim),
        }
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        match self.dim.try_linearize(coord.borrow()) {
            Some(i) => &mut self.cells[i],
            None => panic!("{} is out of bounds for {}", coord.borrow(), self.dim),
        }
    }
}

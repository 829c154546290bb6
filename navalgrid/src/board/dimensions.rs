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

//! Rectangular grid dimensions and the bounds check.
use std::fmt;

use crate::board::{Coordinate, DimensionError};

/// Returns true if `(x, y)` addresses a cell of a `width` x `height` grid, that is
/// `0 <= x < width` and `0 <= y < height`.
#[inline]
pub fn in_bounds(x: isize, y: isize, width: usize, height: usize) -> bool {
    x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height
}

/// Simple rectangular dimensions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RectDimensions {
    /// Width of the grid. This cooresponds to the `x` [`Coordinate`].
    width: usize,
    /// Height of the grid. This cooresponds to the `y` [`Coordinate`].
    height: usize,
}

impl RectDimensions {
    /// Create new [`RectDimensions`] with the specified width and height.
    /// Panics if `width * height` exceeds `usize::MAX` or if `width` or `height` is 0.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(dim) => dim,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create new [`RectDimensions`] with the specified width and height.
    /// Fails if `width * height` exceeds `usize::MAX`, if either side is 0, or if either
    /// side does not fit in a signed coordinate.
    pub fn try_new(width: usize, height: usize) -> Result<Self, DimensionError> {
        if width == 0 || height == 0 {
            Err(DimensionError::Zero { width, height })
        } else if width > isize::MAX as usize
            || height > isize::MAX as usize
            || width.checked_mul(height).is_none()
        {
            Err(DimensionError::TooLarge { width, height })
        } else {
            Ok(Self { width, height })
        }
    }

    /// Get the width of these [`RectDimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`RectDimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Compute the total number of cells. Used to allocate storage for a grid.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Check if the given [`Coordinate`] is in bounds for these [`RectDimensions`].
    #[inline]
    pub fn contains(&self, coord: &Coordinate) -> bool {
        in_bounds(coord.x, coord.y, self.width, self.height)
    }

    /// Convert a coordinate to a row-major linear index within these dimensions.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Get back a coordinate from a linear index. Panics if `idx >= total_size()`.
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        assert!(
            idx < self.total_size(),
            "index {} is out of bounds for {}",
            idx,
            self
        );
        Coordinate::new((idx % self.width) as isize, (idx / self.width) as isize)
    }
}

impl Default for RectDimensions {
    /// Construct the default rectangular dimensions, a 10x10 board.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}

impl fmt::Display for RectDimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

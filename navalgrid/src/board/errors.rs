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

//! Errors used by the [`Grid`][crate::board::Grid] and its dimensions.

use thiserror::Error;

use crate::{board::Coordinate, ships::Line};

/// Error returned when constructing invalid [`RectDimensions`][crate::board::RectDimensions].
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum DimensionError {
    /// Width or height was zero.
    #[error("dimensions must be nonzero, got {width}x{height}")]
    Zero { width: usize, height: usize },
    /// The dimensions don't fit the coordinate or index types.
    #[error("dimensions too large: {width}x{height}")]
    TooLarge { width: usize, height: usize },
}

/// Reason why a line could not be stamped onto a grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more cells of the line fall outside the grid.
    #[error("part of the line is outside the grid")]
    OutOfBounds,
}

/// Error caused when attempting a strict stamp of a line that doesn't fit.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("could not place {line}: {reason}")]
pub struct PlaceError {
    reason: CannotPlaceReason,
    /// The line whose placement was rejected.
    line: Line,
    /// First cell of the line that failed validation.
    coord: Coordinate,
}

impl PlaceError {
    /// Construct a placement error from a reason, line, and failing coordinate.
    pub(crate) fn new(reason: CannotPlaceReason, line: Line, coord: Coordinate) -> Self {
        Self {
            reason,
            line,
            coord,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the first coordinate that failed validation.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

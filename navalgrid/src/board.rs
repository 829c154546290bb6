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

//! Types that make up a grid: coordinates, dimensions and the marker grid itself.

pub use self::{
    coordinate::Coordinate,
    dimensions::{in_bounds, RectDimensions},
    errors::{CannotPlaceReason, DimensionError, PlaceError},
    grid::{Grid, Marker, Stamped, EMPTY},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;

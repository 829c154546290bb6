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

//! Grid sizes and markers shared by the demo scenarios.

use thiserror::Error;

use crate::board::{Marker, RectDimensions, EMPTY};

/// Smallest pattern grid side. Patterns span three rows and three columns around the
/// centre column.
pub const MIN_PATTERN_SIDE: usize = 3;

/// Marker written for ship cells on the stamped board.
pub const SHIP_MARKER: Marker = 3;

/// Marker written for cells affected by an ability pattern.
pub const PATTERN_MARKER: Marker = 1;

/// Reason a [`DemoConfig`] was rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// The pattern grid can't hold the three-row patterns.
    #[error("pattern grid must be at least {min}x{min}, got {dim}")]
    PatternTooSmall { dim: RectDimensions, min: usize },
    /// A marker would be indistinguishable from an empty cell.
    #[error("{which} marker must differ from the empty marker {empty}")]
    MarkerIsEmpty { which: &'static str, empty: Marker },
}

/// Settings passed to every demo scenario.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DemoConfig {
    board: RectDimensions,
    pattern: RectDimensions,
    ship_marker: Marker,
    pattern_marker: Marker,
}

impl DemoConfig {
    /// Build a config, checking that the patterns fit and the markers are visible.
    pub fn new(
        board: RectDimensions,
        pattern: RectDimensions,
        ship_marker: Marker,
        pattern_marker: Marker,
    ) -> Result<Self, ConfigError> {
        if pattern.width() < MIN_PATTERN_SIDE || pattern.height() < MIN_PATTERN_SIDE {
            return Err(ConfigError::PatternTooSmall {
                dim: pattern,
                min: MIN_PATTERN_SIDE,
            });
        }
        if ship_marker == EMPTY {
            return Err(ConfigError::MarkerIsEmpty {
                which: "ship",
                empty: EMPTY,
            });
        }
        if pattern_marker == EMPTY {
            return Err(ConfigError::MarkerIsEmpty {
                which: "pattern",
                empty: EMPTY,
            });
        }
        Ok(Self {
            board,
            pattern,
            ship_marker,
            pattern_marker,
        })
    }

    /// Dimensions of the stamped ship board.
    pub fn board(&self) -> RectDimensions {
        self.board
    }

    /// Dimensions of each ability pattern grid.
    pub fn pattern(&self) -> RectDimensions {
        self.pattern
    }

    /// Marker written into the cells ships occupy on the stamped board.
    pub fn ship_marker(&self) -> Marker {
        self.ship_marker
    }

    /// Marker written into the cells an ability pattern covers.
    pub fn pattern_marker(&self) -> Marker {
        self.pattern_marker
    }
}

impl Default for DemoConfig {
    /// A 10x10 board marked with 3 and 5x5 patterns marked with 1.
    fn default() -> Self {
        Self {
            board: RectDimensions::default(),
            pattern: RectDimensions::new(5, 5),
            ship_marker: SHIP_MARKER,
            pattern_marker: PATTERN_MARKER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let def = DemoConfig::default();
        assert_eq!(
            DemoConfig::new(def.board(), def.pattern(), 3, 1),
            Ok(def)
        );
        assert_eq!(def.board(), RectDimensions::new(10, 10));
        assert_eq!(def.pattern(), RectDimensions::new(5, 5));
    }

    #[test]
    fn markers_are_distinct_from_empty() {
        let def = DemoConfig::default();
        assert_eq!(def.ship_marker(), SHIP_MARKER);
        assert_eq!(def.pattern_marker(), PATTERN_MARKER);
        let custom = DemoConfig::new(def.board(), def.pattern(), 4, 2).unwrap();
        assert_eq!((custom.ship_marker(), custom.pattern_marker()), (4, 2));
        assert_ne!(custom.ship_marker(), EMPTY);
    }

    #[test]
    fn rejects_small_pattern() {
        let err = DemoConfig::new(RectDimensions::default(), RectDimensions::new(5, 2), 3, 1)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::PatternTooSmall {
                dim: RectDimensions::new(5, 2),
                min: 3
            }
        );
        assert_eq!(err.to_string(), "pattern grid must be at least 3x3, got 5x2");
    }

    #[test]
    fn rejects_empty_markers() {
        let pattern = RectDimensions::new(5, 5);
        assert!(matches!(
            DemoConfig::new(RectDimensions::default(), pattern, EMPTY, 1),
            Err(ConfigError::MarkerIsEmpty { which: "ship", .. })
        ));
        assert!(matches!(
            DemoConfig::new(RectDimensions::default(), pattern, 3, EMPTY),
            Err(ConfigError::MarkerIsEmpty { which: "pattern", .. })
        ));
    }
}

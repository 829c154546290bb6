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

//! The three demo scenarios, one per level.
//!
//! [`listing`] prints the coordinates of two ships without a grid, [`stamped`] stamps four
//! ships onto a board and [`patterns`] shows three ability patterns.
use std::{fmt, io::Write};

use log::debug;

use crate::config::DemoConfig;

pub mod listing;
pub mod patterns;
pub mod stamped;

/// A demo scenario that can be picked from the menu.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Level {
    /// Coordinate listing of two ships.
    Novice,
    /// Ten by ten board with four stamped ships.
    Adventurer,
    /// Cone, octahedron and cross ability patterns.
    Master,
}

impl Level {
    /// All levels in menu order.
    pub const ALL: &'static [Level] = &[Level::Novice, Level::Adventurer, Level::Master];

    /// Get the level for a menu selector, if any. `0` is not a level.
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(Level::Novice),
            2 => Some(Level::Adventurer),
            3 => Some(Level::Master),
            _ => None,
        }
    }

    /// Get the menu selector for this level.
    pub fn selector(self) -> i64 {
        match self {
            Level::Novice => 1,
            Level::Adventurer => 2,
            Level::Master => 3,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Level::Novice => "novice",
            Level::Adventurer => "adventurer",
            Level::Master => "master",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Run the scenario for `level`, writing its output to `out`.
pub fn run_level<W: Write + ?Sized>(
    level: Level,
    out: &mut W,
    config: &DemoConfig,
) -> std::io::Result<()> {
    debug!("running {} level", level);
    match level {
        Level::Novice => listing::run(out),
        Level::Adventurer => stamped::run(out, config),
        Level::Master => patterns::run(out, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_round_trip() {
        for &level in Level::ALL {
            assert_eq!(Level::from_selector(level.selector()), Some(level));
        }
        assert_eq!(Level::from_selector(0), None);
        assert_eq!(Level::from_selector(4), None);
        assert_eq!(Level::from_selector(-1), None);
    }

    #[test]
    fn every_level_writes_output() {
        let config = DemoConfig::default();
        for &level in Level::ALL {
            let mut out = Vec::new();
            run_level(level, &mut out, &config).unwrap();
            let text = String::from_utf8(out).unwrap();
            let upper = level.to_string().to_uppercase();
            assert!(text.starts_with(&format!("=== {} LEVEL ===\n\n", upper)));
        }
    }
}

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

//! Master level: cone, octahedron and cross ability patterns.
//!
//! Patterns are fixed masks over the top three rows of the pattern grid, centred on column
//! `width / 2`. [`DemoConfig`] guarantees the grid is at least 3x3.
use std::io::{self, Write};

use crate::{
    board::{Coordinate, Grid, Marker, EMPTY},
    config::DemoConfig,
    render,
};

/// ```text
/// 0 0 1 0 0
/// 0 1 1 1 0
/// 1 1 1 1 1
/// ```
pub fn cone(config: &DemoConfig) -> Grid {
    let mut grid = Grid::new(config.pattern());
    let marker = config.pattern_marker();
    let c = centre(&grid);
    grid[Coordinate::new(c, 0)] = marker;
    for x in c - 1..=c + 1 {
        grid[Coordinate::new(x, 1)] = marker;
    }
    fill_row(&mut grid, 2, marker);
    grid
}

/// ```text
/// 0 0 1 0 0
/// 0 1 1 1 0
/// 0 0 1 0 0
/// ```
pub fn octahedron(config: &DemoConfig) -> Grid {
    let mut grid = Grid::new(config.pattern());
    let marker = config.pattern_marker();
    let c = centre(&grid);
    grid[Coordinate::new(c, 0)] = marker;
    for x in c - 1..=c + 1 {
        grid[Coordinate::new(x, 1)] = marker;
    }
    grid[Coordinate::new(c, 2)] = marker;
    grid
}

/// ```text
/// 0 0 1 0 0
/// 1 1 1 1 1
/// 0 0 1 0 0
/// ```
pub fn cross(config: &DemoConfig) -> Grid {
    let mut grid = Grid::new(config.pattern());
    let marker = config.pattern_marker();
    let c = centre(&grid);
    grid[Coordinate::new(c, 0)] = marker;
    fill_row(&mut grid, 1, marker);
    grid[Coordinate::new(c, 2)] = marker;
    grid
}

fn centre(grid: &Grid) -> isize {
    (grid.dimensions().width() / 2) as isize
}

fn fill_row(grid: &mut Grid, y: isize, marker: Marker) {
    for x in 0..grid.dimensions().width() as isize {
        grid[Coordinate::new(x, y)] = marker;
    }
}

pub fn run<W: Write + ?Sized>(out: &mut W, config: &DemoConfig) -> io::Result<()> {
    writeln!(out, "=== MASTER LEVEL ===")?;
    writeln!(out)?;
    let legend = format!(
        "({}=not affected, {}=affected)",
        EMPTY,
        config.pattern_marker()
    );
    let patterns = [
        ("CONE", cone(config)),
        ("OCTAHEDRON", octahedron(config)),
        ("CROSS", cross(config)),
    ];
    for (name, grid) in patterns.iter() {
        render::render_grid(out, grid, &format!("Ability: {} {}", name, legend))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::board::RectDimensions;

    fn rows(grid: &Grid) -> Vec<Vec<Marker>> {
        grid.rows().map(|row| row.to_vec()).collect()
    }

    #[test]
    fn cone_rows() {
        assert_eq!(
            rows(&cone(&DemoConfig::default())),
            vec![
                vec![0, 0, 1, 0, 0],
                vec![0, 1, 1, 1, 0],
                vec![1, 1, 1, 1, 1],
                vec![0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn octahedron_rows() {
        assert_eq!(
            rows(&octahedron(&DemoConfig::default())),
            vec![
                vec![0, 0, 1, 0, 0],
                vec![0, 1, 1, 1, 0],
                vec![0, 0, 1, 0, 0],
                vec![0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn cross_rows() {
        assert_eq!(
            rows(&cross(&DemoConfig::default())),
            vec![
                vec![0, 0, 1, 0, 0],
                vec![1, 1, 1, 1, 1],
                vec![0, 0, 1, 0, 0],
                vec![0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn smallest_pattern_grid() {
        let config = DemoConfig::new(
            RectDimensions::default(),
            RectDimensions::new(3, 3),
            3,
            2,
        )
        .unwrap();
        assert_eq!(
            rows(&cone(&config)),
            vec![vec![0, 2, 0], vec![2, 2, 2], vec![2, 2, 2]]
        );
    }

    #[test]
    fn renders_three_patterns_in_order() {
        let mut out = Vec::new();
        run(&mut out, &DemoConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let titles: Vec<&str> = text.lines().filter(|l| l.starts_with("Ability:")).collect();
        assert_eq!(
            titles,
            vec![
                "Ability: CONE (0=not affected, 1=affected)",
                "Ability: OCTAHEDRON (0=not affected, 1=affected)",
                "Ability: CROSS (0=not affected, 1=affected)",
            ]
        );
        assert!(text.contains("Ability: CONE (0=not affected, 1=affected)\n0 0 1 0 0\n0 1 1 1 0\n1 1 1 1 1\n0 0 0 0 0\n0 0 0 0 0\n\n"));
    }
}

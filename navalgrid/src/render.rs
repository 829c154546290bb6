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

//! Console rendering of grids.
use std::{
    fmt,
    io::{self, Write},
};

use crate::board::Grid;

/// Write `grid` under `title`: one line per row with the cell values separated by single
/// spaces, then a blank separator line.
pub fn render_grid<W: Write + ?Sized>(out: &mut W, grid: &Grid, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    write_rows(out, grid.rows().map(|row| row.iter()), None, 1)?;
    writeln!(out)
}

/// Write `grid` under `title` with a header of column indices and each row prefixed by
/// its row index. Cells are right-aligned to two characters.
pub fn render_indexed_grid<W: Write + ?Sized>(
    out: &mut W,
    grid: &Grid,
    title: &str,
) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out)?;
    write!(out, "  ")?;
    for x in 0..grid.dimensions().width() {
        write!(out, " {:>2}", x)?;
    }
    writeln!(out)?;
    write_rows(out, grid.rows().map(|row| row.iter()), Some(2), 2)?;
    writeln!(out)
}

/// Write the rows of a board. Takes an iterator over the rows of iterators over the
/// items. When `index_width` is set, each row starts with its index padded to that width.
fn write_rows<W: Write + ?Sized>(
    out: &mut W,
    rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>,
    index_width: Option<usize>,
    cell_width: usize,
) -> io::Result<()> {
    for (y, row) in rows.enumerate() {
        let mut sep = "";
        if let Some(width) = index_width {
            write!(out, "{:>width$}", y, width = width)?;
            sep = " ";
        }
        for cell in row {
            write!(out, "{}{:>width$}", sep, cell, width = cell_width)?;
            sep = " ";
        }
        writeln!(out)?;
    }
    Ok(())
}

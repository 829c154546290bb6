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

//! Console menu for picking a demo level.
use std::io::{self, BufRead, Write};

use log::{debug, trace};
use thiserror::Error;

use crate::{
    config::DemoConfig,
    demo::{self, Level},
};

/// Selector that leaves the menu.
pub const EXIT_SELECTOR: i64 = 0;

/// A valid menu choice.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Selection {
    /// Leave the menu.
    Exit,
    /// Run the given level.
    Run(Level),
}

/// Reason a line of menu input was rejected.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum MenuError {
    /// The line wasn't an integer.
    #[error("Invalid input. Try again.")]
    NotANumber(String),
    /// The integer doesn't name a menu option.
    #[error("Invalid option. Choose 0-3.")]
    UnknownOption(i64),
}

/// Parse one line of menu input.
pub fn parse_selection(input: &str) -> Result<Selection, MenuError> {
    let selector: i64 = input
        .trim()
        .parse()
        .map_err(|_| MenuError::NotANumber(input.trim().to_owned()))?;
    if selector == EXIT_SELECTOR {
        return Ok(Selection::Exit);
    }
    Level::from_selector(selector)
        .map(Selection::Run)
        .ok_or(MenuError::UnknownOption(selector))
}

/// Run the menu until the exit selector is picked or `input` runs out. Input that isn't a
/// number brings the menu straight back; an unknown option is reported like a finished
/// level, separator included.
pub fn run_menu<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    config: &DemoConfig,
) -> io::Result<()> {
    let mut input = InputReader::new(input);
    loop {
        write_menu(&mut out, config)?;
        let selection = match input.read_input(&mut out, "Option:")? {
            Some(line) => parse_selection(line),
            None => {
                debug!("menu input closed");
                writeln!(out)?;
                Ok(Selection::Exit)
            }
        };
        trace!("menu selection: {:?}", selection);
        let selection = match selection {
            Err(err @ MenuError::NotANumber(_)) => {
                debug!("rejected menu input: {:?}", err);
                writeln!(out, "{}", err)?;
                writeln!(out)?;
                continue;
            }
            other => other,
        };
        writeln!(out)?;
        match selection {
            Ok(Selection::Exit) => break,
            Ok(Selection::Run(level)) => demo::run_level(level, &mut out, config)?,
            Err(err) => {
                debug!("rejected menu input: {:?}", err);
                writeln!(out, "{}", err)?;
                writeln!(out)?;
            }
        }
        writeln!(out, "---------")?;
        writeln!(out)?;
    }
    writeln!(out, "Exiting. Thank you.")?;
    out.flush()
}

fn write_menu<W: Write>(out: &mut W, config: &DemoConfig) -> io::Result<()> {
    writeln!(out, "NAVAL GRID - Demo Levels")?;
    writeln!(out, "Select a level to run:")?;
    for &level in Level::ALL {
        let summary = match level {
            Level::Novice => "simple placement".to_owned(),
            Level::Adventurer => format!("{} board, 4 ships", config.board()),
            Level::Master => "ability patterns".to_owned(),
        };
        writeln!(out, "  {} - {} level ({})", level.selector(), level, summary)?;
    }
    writeln!(out, "  {} - Exit", EXIT_SELECTOR)
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Print the prompt and read one line, returned trimmed. Returns `None` once input
    /// runs out.
    fn read_input<W: Write>(&mut self, out: &mut W, prompt: &str) -> io::Result<Option<&str>> {
        write!(out, "{} ", prompt)?;
        out.flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.buf.trim()))
    }
}

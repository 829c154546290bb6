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

//! Placement of fixed ship and ability shapes onto small rectangular grids.
//!
//! [`board`] provides the bounds check, the [`Grid`][board::Grid] and the stamper that
//! writes a [`Line`][ships::Line] into it. [`render`] prints grids to any writer, and
//! [`demo`] and [`menu`] put those pieces together into the three console demos.

pub mod board;
pub mod config;
pub mod demo;
pub mod menu;
pub mod render;
pub mod ships;

pub use crate::config::DemoConfig;

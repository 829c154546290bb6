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
use std::io;

use clap::App;
use log::debug;

use navalgrid::{menu, DemoConfig};

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Only --help and --version; the demo itself is driven from the menu.
    App::new("Naval Grid")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Places fixed ships and ability patterns on small grids and prints them.")
        .get_matches();

    let config = DemoConfig::default();
    debug!("starting menu with {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run_menu(stdin.lock(), stdout.lock(), &config)
}

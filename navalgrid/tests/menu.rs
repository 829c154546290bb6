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
use std::io::Cursor;

use navalgrid::{
    board::RectDimensions,
    menu::run_menu,
    DemoConfig,
};

fn drive(input: &str, config: &DemoConfig) -> String {
    let mut out = Vec::new();
    run_menu(Cursor::new(input.as_bytes()), &mut out, config).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn exit_immediately() {
    let text = drive("0\n", &DemoConfig::default());
    assert!(text.starts_with("NAVAL GRID - Demo Levels\n"));
    assert!(text.contains("  2 - adventurer level (10x10 board, 4 ships)\n"));
    assert!(text.ends_with("Exiting. Thank you.\n"));
    assert_eq!(text.matches("Option: ").count(), 1);
}

#[test]
fn garbage_shows_menu_again() {
    let text = drive("hello\n0\n", &DemoConfig::default());
    assert!(text.contains("Option: Invalid input. Try again.\n\nNAVAL GRID - Demo Levels\n"));
    assert_eq!(text.matches("Option: ").count(), 2);
    assert_eq!(text.matches("NAVAL GRID - Demo Levels").count(), 2);
    assert!(!text.contains("---------"));
    assert!(text.ends_with("Exiting. Thank you.\n"));
}

#[test]
fn unknown_option_is_reported_with_separator() {
    let text = drive("9\n0\n", &DemoConfig::default());
    assert!(text.contains(
        "Option: \nInvalid option. Choose 0-3.\n\n---------\n\nNAVAL GRID - Demo Levels\n"
    ));
    assert_eq!(text.matches("NAVAL GRID - Demo Levels").count(), 2);
    assert!(!text.contains("==="));
}

#[test]
fn runs_each_level_then_exits() {
    let text = drive("1\n2\n3\n0\n", &DemoConfig::default());
    let novice = text.find("=== NOVICE LEVEL ===").unwrap();
    let adventurer = text.find("=== ADVENTURER LEVEL ===").unwrap();
    let master = text.find("=== MASTER LEVEL ===").unwrap();
    assert!(novice < adventurer && adventurer < master);
    assert_eq!(text.matches("---------\n").count(), 3);
    assert_eq!(text.matches("NAVAL GRID - Demo Levels").count(), 4);
    assert!(text.contains("  Part 4: (8, 4)\n"));
    assert!(text.contains(" 5  0  0  0  0  3  0  3  0  0  0\n"));
    assert!(text.contains("Ability: CROSS (0=not affected, 1=affected)\n0 0 1 0 0\n1 1 1 1 1\n"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let text = drive("2\n", &DemoConfig::default());
    assert!(text.contains("=== ADVENTURER LEVEL ==="));
    assert!(text.ends_with("Exiting. Thank you.\n"));
}

#[test]
fn configured_board_size_flows_through() {
    let config = DemoConfig::new(
        RectDimensions::new(12, 8),
        RectDimensions::new(7, 5),
        4,
        2,
    )
    .unwrap();
    let text = drive("2\n3\n0\n", &config);
    assert!(text.contains("  2 - adventurer level (12x8 board, 4 ships)\n"));
    assert!(text.contains("Board 12x8 (0=free, 4=occupied):"));
    assert!(text.contains("    0  1  2  3  4  5  6  7  8  9 10 11\n"));
    assert!(text.contains("Ability: CONE (0=not affected, 2=affected)\n0 0 0 2 0 0 0\n0 0 2 2 2 0 0\n2 2 2 2 2 2 2\n"));
}

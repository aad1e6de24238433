/*
published.rs

Copyright 2025 Hervé Quatremain

This file is part of Hexorbit.

Hexorbit is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hexorbit is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hexorbit. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Daily and tutorial puzzles that players already received must never change.

use pretty_assertions::assert_eq;

use hexorbit::generator::hexagon::Hex;
use hexorbit::generator::puzzles::{Center, Puzzle};
use hexorbit::{generate_daily_puzzle, generate_tutorial_puzzle};

fn puzzle(centers: &[(i32, i32, i32)], blocked: &[(i32, i32)]) -> Puzzle {
    Puzzle {
        centers: centers
            .iter()
            .map(|(q, r, t)| Center::new(Hex::new(*q, *r), *t))
            .collect(),
        black_hexagons: blocked.iter().map(|h| Hex::from(*h)).collect(),
    }
}

#[test]
fn daily_2025_01_15() {
    assert_eq!(
        generate_daily_puzzle("2025-01-15"),
        puzzle(
            &[(0, 1, 14), (2, 1, 8), (1, 3, 11), (3, 3, 14), (0, 5, 13), (2, 5, 11)],
            &[(3, 1), (0, 0), (2, 2), (-1, 6), (3, 2)],
        )
    );
}

#[test]
fn daily_2026_10_19() {
    assert_eq!(
        generate_daily_puzzle("2026-10-19"),
        puzzle(
            &[(0, 1, 14), (2, 1, 8), (1, 3, 19), (3, 3, 11), (0, 5, 37), (2, 5, 11)],
            &[(3, 1), (3, 0), (-1, 1), (4, 2)],
        )
    );
}

#[test]
fn daily_2024_02_29() {
    assert_eq!(
        generate_daily_puzzle("2024-02-29"),
        puzzle(
            &[(3, 0, 19), (2, 2, 37), (0, 2, 39), (-1, 0, 8), (0, -2, 12), (2, -2, 7)],
            &[(0, 0), (2, -1), (-2, 0), (2, -3), (1, -3)],
        )
    );
}

#[test]
fn daily_2025_12_25() {
    assert_eq!(
        generate_daily_puzzle("2025-12-25"),
        puzzle(
            &[(1, -1, 10), (3, -1, 9), (2, 1, 19), (4, 1, 30), (1, 3, 12), (3, 3, 9)],
            &[(4, 3), (3, -2), (2, 3), (0, 4)],
        )
    );
}

/// A layout that takes millions of search iterations: the default limit must not replace it.
#[test]
fn daily_2025_01_03_long_search() {
    assert_eq!(
        generate_daily_puzzle("2025-01-03"),
        puzzle(
            &[(1, 0, 13), (0, 2, 8), (-2, 2, 27), (-3, 0, 23), (-2, -2, 9), (0, -2, 21)],
            &[(0, 3), (1, 2), (-2, -3), (1, 1), (-1, -3)],
        )
    );
}

#[test]
fn daily_is_stable_and_depends_on_the_date() {
    assert_eq!(
        generate_daily_puzzle("2025-03-01"),
        generate_daily_puzzle("2025-03-01")
    );
    assert_ne!(
        generate_daily_puzzle("2025-03-01"),
        generate_daily_puzzle("2025-03-02")
    );
}

#[test]
fn tutorial_steps() {
    assert_eq!(generate_tutorial_puzzle(0), puzzle(&[(0, 1, 26)], &[]));
    assert_eq!(
        generate_tutorial_puzzle(1),
        puzzle(&[(0, -1, 14), (2, -1, 11), (-1, 2, 14)], &[(-1, 0), (-1, 1)])
    );
    assert_eq!(
        generate_tutorial_puzzle(2),
        puzzle(
            &[(0, 1, 33), (2, 1, 10), (4, 1, 11), (4, -1, 38)],
            &[(4, 2), (3, 0)],
        )
    );
}

#[test]
fn tutorial_steps_past_the_end_reuse_the_last_one() {
    assert_eq!(generate_tutorial_puzzle(3), generate_tutorial_puzzle(2));
    assert_eq!(generate_tutorial_puzzle(40), generate_tutorial_puzzle(2));
}

#[test]
fn json_format() {
    let json: String = serde_json::to_string(&generate_tutorial_puzzle(0)).unwrap();
    assert_eq!(
        json,
        r#"{"centers":[{"q":0,"r":1,"target":26}],"blackHexagons":[]}"#
    );
}

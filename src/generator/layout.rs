/*
layout.rs

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

//! Place the centers of the puzzle.
//!
//! Centers come from hand-made templates: each difficulty level has four templates that give the
//! relative positions of its centers.
//! Centers at distance two share cells between their orbits, and centers further apart do not.
//! Purely random layouts too often produce disconnected or degenerate shapes, so the templates
//! bound the layouts to known good ones.

use log::debug;

use super::hexagon::Hex;
use super::puzzles::Difficulty;
use super::rng::SeededRng;

/// Relative positions of the centers.
pub type Template = &'static [(i32, i32)];

const BEGINNER: [Template; 4] = [&[(0, 0)], &[(0, 0)], &[(0, 0)], &[(0, 0)]];

const EASY: [Template; 4] = [
    &[(0, 0), (2, 0), (4, 0)],
    &[(0, 0), (0, 2), (0, 4)],
    &[(0, 0), (2, 0), (-1, 3)],
    &[(0, 0), (2, -2), (0, 3)],
];

const MEDIUM: [Template; 4] = [
    &[(0, 0), (2, 0), (4, 0), (2, 2)],
    &[(0, 0), (2, 0), (4, 0), (2, -2)],
    &[(0, 0), (0, 2), (0, 4), (2, 2)],
    &[(0, 0), (2, 0), (4, 0), (4, -2)],
];

const HARD: [Template; 4] = [
    &[(0, 0), (2, 0), (4, 0), (2, 2), (2, -2)],
    &[(0, 0), (2, 0), (4, 0), (6, 0), (4, -2)],
    &[(0, 0), (2, 0), (1, 2), (3, 2), (2, 4)],
    &[(0, 0), (2, 0), (4, 0), (2, 2), (4, 2)],
];

const EXTREME: [Template; 4] = [
    &[(2, 0), (1, 2), (-1, 2), (-2, 0), (-1, -2), (1, -2)],
    &[(0, 0), (2, 0), (4, 0), (1, 2), (3, 2), (5, 2)],
    &[(0, 0), (2, 0), (4, 0), (1, 2), (3, 2), (2, 4)],
    &[(0, 0), (2, 0), (1, 2), (3, 2), (0, 4), (2, 4)],
];

const INSANE: [Template; 4] = [
    // Flower: a hub surrounded by six centers, all at distance two
    &[(0, 0), (2, 0), (0, 2), (-2, 2), (-2, 0), (0, -2), (2, -2)],
    // Four and three
    &[(0, 0), (2, 0), (4, 0), (6, 0), (0, 2), (2, 2), (4, 2)],
    // Three, two, and two
    &[(0, 0), (2, 0), (4, 0), (1, 2), (3, 2), (0, 4), (2, 4)],
    // Three, three, and one
    &[(0, 0), (2, 0), (4, 0), (0, 2), (2, 2), (4, 2), (2, 4)],
];

/// Return the templates for the given difficulty level.
pub fn templates(difficulty: Difficulty) -> &'static [Template] {
    match difficulty {
        Difficulty::Beginner => &BEGINNER,
        Difficulty::Easy => &EASY,
        Difficulty::Medium => &MEDIUM,
        Difficulty::Hard => &HARD,
        Difficulty::Extreme => &EXTREME,
        Difficulty::Insane => &INSANE,
    }
}

/// Select a random template and shift it by a random offset in the `[-1, 1]` range on both axes.
pub fn place_centers(rng: &mut SeededRng, difficulty: Difficulty) -> Vec<Hex> {
    let catalog: &[Template] = templates(difficulty);
    let index: usize = rng.next_index(catalog.len());
    let offset_q: i32 = rng.next_int(-1, 1);
    let offset_r: i32 = rng.next_int(-1, 1);

    debug!("Template {index} for {difficulty}, offset ({offset_q}, {offset_r})");
    catalog[index]
        .iter()
        .map(|(q, r)| Hex::new(q + offset_q, r + offset_r))
        .collect()
}

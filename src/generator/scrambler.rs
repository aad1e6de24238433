/*
scrambler.rs

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

//! Move the blocked cells away from their solved positions.
//!
//! The player rotates orbits to bring the blocked cells back. The scrambler applies the same
//! moves to the solved layout, so undoing them in reverse order always solves the puzzle.
//!
//! A rotation moves the status of each orbit cell one step: the cell at position `i` takes the
//! status of the cell at position `i + 1`.

use log::debug;

use super::blocked_cells::BlockedCells;
use super::hexagon::{self, Hex};
use super::rng::SeededRng;

/// Starting layout and the rotations that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Scramble {
    /// Blocked cells shown to the player.
    pub blocked: BlockedCells,

    /// Index of the rotated center for each move, in the order they were applied.
    pub rotations: Vec<usize>,
}

/// Rotate the orbit of the center by one step.
pub fn rotate_orbit(blocked: &mut BlockedCells, center: Hex) {
    shift_orbit(blocked, center, 1);
}

/// Undo [`rotate_orbit`].
pub fn rotate_orbit_back(blocked: &mut BlockedCells, center: Hex) {
    shift_orbit(blocked, center, 5);
}

fn shift_orbit(blocked: &mut BlockedCells, center: Hex, step: usize) {
    let orbit: Vec<Hex> = hexagon::orbit(center, 1);
    let pattern: Vec<bool> = blocked.pattern(&orbit);
    for (i, hex) in orbit.iter().enumerate() {
        blocked.set(*hex, pattern[(i + step) % orbit.len()]);
    }
}

/// Whether the orbit of the center has both blocked and open cells.
fn is_mixed(blocked: &BlockedCells, center: Hex) -> bool {
    let pattern: Vec<bool> = blocked.pattern(&hexagon::orbit(center, 1));
    pattern.iter().any(|b| *b) && !pattern.iter().all(|b| *b)
}

/// Scramble the solved layout with `min_rotations` to `max_rotations` random rotations, or
/// exactly `min_rotations` when `max_rotations` is smaller.
///
/// When the rotations bring the layout back to the solution, one more rotation is applied to
/// the first orbit whose cells are not all in the same state.
/// An empty layout stays empty and does not consume any random draw.
pub fn scramble(
    rng: &mut SeededRng,
    centers: &[Hex],
    solution: &BlockedCells,
    min_rotations: u32,
    max_rotations: u32,
) -> Scramble {
    if solution.is_empty() || centers.is_empty() {
        return Scramble {
            blocked: BlockedCells::default(),
            rotations: Vec::new(),
        };
    }

    let mut blocked: BlockedCells = solution.clone();
    let count: u32 = rng.next_count(min_rotations, max_rotations);
    let mut rotations: Vec<usize> = Vec::with_capacity(count as usize + 1);

    for _ in 0..count {
        let index: usize = rng.next_index(centers.len());
        rotate_orbit(&mut blocked, centers[index]);
        rotations.push(index);
    }

    if blocked == *solution {
        if let Some(index) = centers.iter().position(|c| is_mixed(&blocked, *c)) {
            debug!("Scramble back to the solution, rotating orbit {index} once more");
            rotate_orbit(&mut blocked, centers[index]);
            rotations.push(index);
        }
    }

    debug!("Scrambled with {} rotations: {rotations:?}", rotations.len());
    Scramble { blocked, rotations }
}

/// Undo the rotations of a scramble and return the solved layout.
pub fn unscramble(centers: &[Hex], scramble: &Scramble) -> BlockedCells {
    let mut blocked: BlockedCells = scramble.blocked.clone();
    for index in scramble.rotations.iter().rev() {
        rotate_orbit_back(&mut blocked, centers[*index]);
    }
    blocked
}

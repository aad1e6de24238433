/*
blocked.rs

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

//! Place the blocked cells in their solved positions.
//!
//! These are the positions the solver uses to derive the targets. The player does not see them:
//! the scrambler moves them away before the puzzle is published.

use log::debug;
use std::collections::HashSet;

use super::blocked_cells::BlockedCells;
use super::hexagon::{self, Hex};
use super::puzzles::Difficulty;
use super::rng::SeededRng;

/// Maximum number of blocked cells in an orbit. Every orbit keeps at least four open cells.
pub const MAX_BLOCKED_PER_ORBIT: usize = 2;

/// Return the number of cells to block for the difficulty level.
pub fn blocked_count(rng: &mut SeededRng, difficulty: Difficulty) -> usize {
    let count: i32 = match difficulty {
        Difficulty::Beginner => 0,
        Difficulty::Easy => 2,
        Difficulty::Medium => rng.next_int(2, 3),
        Difficulty::Hard => rng.next_int(3, 5),
        Difficulty::Extreme => rng.next_int(4, 6),
        Difficulty::Insane => rng.next_int(5, 7),
    };
    count as usize
}

/// Return the orbit cells of all the centers, without duplicates and without the centers, in
/// center order then orbit order.
pub fn orbit_cells(centers: &[Hex]) -> Vec<Hex> {
    let center_set: HashSet<Hex> = centers.iter().copied().collect();
    let mut seen: HashSet<Hex> = HashSet::with_capacity(centers.len() * 6);
    let mut cells: Vec<Hex> = Vec::with_capacity(centers.len() * 6);

    for center in centers {
        for hex in hexagon::orbit(*center, 1) {
            if !center_set.contains(&hex) && seen.insert(hex) {
                cells.push(hex);
            }
        }
    }
    cells
}

/// Select the cells to block.
///
/// Candidates are tried in random order, and a candidate is rejected when one of the orbits it
/// belongs to already has [`MAX_BLOCKED_PER_ORBIT`] blocked cells.
pub fn place_blocked_cells(
    rng: &mut SeededRng,
    centers: &[Hex],
    difficulty: Difficulty,
) -> BlockedCells {
    if difficulty == Difficulty::Beginner {
        return BlockedCells::default();
    }

    let count: usize = blocked_count(rng, difficulty);
    let orbits: Vec<Vec<Hex>> = centers.iter().map(|c| hexagon::orbit(*c, 1)).collect();
    let candidates: Vec<Hex> = rng.shuffle(&orbit_cells(centers));
    let mut blocked: BlockedCells = BlockedCells::new(count);

    for hex in candidates {
        if blocked.len() >= count {
            break;
        }
        let full: bool = orbits
            .iter()
            .filter(|orbit| orbit.contains(&hex))
            .any(|orbit| blocked.count_in(orbit) >= MAX_BLOCKED_PER_ORBIT);
        if full {
            debug!("    Cell {hex} rejected: orbit already has {MAX_BLOCKED_PER_ORBIT} blocked cells");
            continue;
        }
        blocked.insert(hex);
    }

    debug!(
        "Blocked {} cells out of {count} for {difficulty}: {:?}",
        blocked.len(),
        blocked.get()
    );
    blocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::layout;

    #[test]
    fn orbit_cells_are_unique_and_skip_centers() {
        let centers: [Hex; 2] = [Hex::new(0, 0), Hex::new(2, 0)];
        let cells: Vec<Hex> = orbit_cells(&centers);
        // Two orbits of six cells sharing one cell
        assert_eq!(cells.len(), 11);
        assert_eq!(&cells[..6], hexagon::neighbors(Hex::new(0, 0)));
        assert!(cells.iter().all(|h| !centers.contains(h)));
    }

    #[test]
    fn beginner_has_no_blocked_cells() {
        let mut rng: SeededRng = SeededRng::new(5);
        let centers: Vec<Hex> = layout::place_centers(&mut rng, Difficulty::Beginner);
        assert!(place_blocked_cells(&mut rng, &centers, Difficulty::Beginner).is_empty());
    }

    #[test]
    fn counts_follow_difficulty_ranges() {
        let ranges: [(Difficulty, usize, usize); 5] = [
            (Difficulty::Easy, 2, 2),
            (Difficulty::Medium, 2, 3),
            (Difficulty::Hard, 3, 5),
            (Difficulty::Extreme, 4, 6),
            (Difficulty::Insane, 5, 7),
        ];
        let mut rng: SeededRng = SeededRng::new(17);
        for (difficulty, min, max) in ranges {
            for _ in 0..100 {
                let count: usize = blocked_count(&mut rng, difficulty);
                assert!((min..=max).contains(&count), "{difficulty}: {count}");
            }
        }
    }

    #[test]
    fn orbits_never_exceed_the_cap() {
        let mut rng: SeededRng = SeededRng::new(2024);
        for difficulty in Difficulty::ALL {
            for _ in 0..200 {
                let centers: Vec<Hex> = layout::place_centers(&mut rng, difficulty);
                let blocked: BlockedCells = place_blocked_cells(&mut rng, &centers, difficulty);
                for center in &centers {
                    let orbit: Vec<Hex> = hexagon::orbit(*center, 1);
                    assert!(blocked.count_in(&orbit) <= MAX_BLOCKED_PER_ORBIT);
                }
                assert!(blocked.get().iter().all(|h| !centers.contains(h)));
            }
        }
    }

    #[test]
    fn a_single_orbit_stops_at_the_cap() {
        // Asking for more cells than one orbit can take
        let mut rng: SeededRng = SeededRng::new(1);
        let centers: [Hex; 1] = [Hex::new(0, 0)];
        let blocked: BlockedCells = place_blocked_cells(&mut rng, &centers, Difficulty::Insane);
        assert_eq!(blocked.len(), MAX_BLOCKED_PER_ORBIT);
    }
}

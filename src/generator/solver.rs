/*
solver.rs

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

//! Fill the open cells and derive the targets.
//!
//! The solver assigns a digit to every open cell so that no digit repeats in an orbit.
//! A cell can belong to several orbits when centers are at distance two.
//!
//! Cells that belong to the most orbits are filled first, and each cell tries the digits in its
//! own random order. The solver works in two modes:
//!
//! * In [`SolveMode::Free`] mode, any valid assignment is accepted and the targets are the orbit
//!   sums.
//! * In [`SolveMode::Constrained`] mode, a target is drawn for each orbit first, from a range that
//!   depends on the number of open cells in the orbit, and the search must reach all the targets.
//!   After each tentative digit, the solver computes the smallest and largest sums that the
//!   remaining open cells of the orbit can still add, and drops the digit if the target is out of
//!   reach.
//!
//! The search is bounded by a number of iterations. Most searches finish in a few hundred
//! iterations, but some target draws make the search explore millions of dead ends before
//! finding a solution. The default limit is high enough for the daily puzzles to keep their
//! published layouts. Past the limit, the caller draws a new puzzle.

use log::{Level, debug, log_enabled};
use std::collections::{HashMap, HashSet};
use std::time::Instant;

use super::blocked_cells::BlockedCells;
use super::hexagon::{self, Hex};
use super::puzzles::Center;
use super::rng::SeededRng;

/// Default maximum number of search iterations for one puzzle.
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000_000;

/// Digits a cell can receive.
pub const DIGITS: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Type of errors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SolverError {
    /// No assignment satisfies the constraints.
    NoSolution,

    /// No assignment found before the iteration limit.
    IterationsExceeded,
}

/// Solving mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolveMode {
    /// Any valid assignment; the targets are derived from it.
    Free,

    /// The targets are drawn first, and the assignment must reach them.
    Constrained,
}

/// Open cell and the orbits it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenCell {
    pub hex: Hex,

    /// Indexes of the centers whose orbit contains the cell.
    pub orbits: Vec<usize>,
}

/// Result of a successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Centers with their targets, in the order of the input centers.
    pub centers: Vec<Center>,

    /// Digit of each open cell, in search order.
    pub values: Vec<(Hex, u8)>,
}

impl Solution {
    /// Return the digit of the given cell, or None if the cell is not an open cell.
    pub fn value(&self, hex: Hex) -> Option<u8> {
        self.values.iter().find(|(h, _)| *h == hex).map(|(_, v)| *v)
    }

    /// Return the digits indexed by cell.
    pub fn values_map(&self) -> HashMap<Hex, u8> {
        self.values.iter().copied().collect()
    }
}

/// Return the range of targets for an orbit with the given number of open cells.
///
/// The ranges do not overlap: four distinct digits cannot sum to more than 30 but the range stops
/// at 9, because five distinct digits sum to at least 10, and six to at least 15. The target
/// alone therefore tells how many cells of the orbit are blocked.
pub fn target_range(open_cells: usize) -> (i32, i32) {
    match open_cells {
        0..=4 => (6, 9),
        5 => (10, 14),
        _ => (15, 39),
    }
}

/// Return the smallest and largest sums of `count` distinct digits that are not in the `used`
/// bit mask, or None if not enough digits are left.
pub fn completion_bounds(used: u16, count: usize) -> Option<(i32, i32)> {
    let mut available: [i32; 10] = [0; 10];
    let mut len: usize = 0;
    for d in DIGITS {
        if used & (1 << d) == 0 {
            available[len] = i32::from(d);
            len += 1;
        }
    }
    if len < count {
        return None;
    }
    let min: i32 = available[..count].iter().sum();
    let max: i32 = available[len - count..len].iter().sum();
    Some((min, max))
}

/// Return the open cells of the puzzle, the most constrained first.
///
/// Cells are collected in center order then orbit order; the sort is stable, so cells that
/// belong to the same number of orbits keep that order.
pub fn open_cells(centers: &[Hex], blocked: &BlockedCells) -> Vec<OpenCell> {
    let center_set: HashSet<Hex> = centers.iter().copied().collect();
    let mut index: HashMap<Hex, usize> = HashMap::with_capacity(centers.len() * 6);
    let mut cells: Vec<OpenCell> = Vec::with_capacity(centers.len() * 6);

    for (ci, center) in centers.iter().enumerate() {
        for hex in hexagon::orbit(*center, 1) {
            if center_set.contains(&hex) || blocked.contains(hex) {
                continue;
            }
            let i: usize = *index.entry(hex).or_insert_with(|| {
                cells.push(OpenCell {
                    hex,
                    orbits: Vec::with_capacity(3),
                });
                cells.len() - 1
            });
            cells[i].orbits.push(ci);
        }
    }
    cells.sort_by(|a, b| b.orbits.len().cmp(&a.orbits.len()));
    cells
}

/// Draw a target for each orbit, in center order.
pub fn draw_targets(rng: &mut SeededRng, centers: &[Hex], blocked: &BlockedCells) -> Vec<i32> {
    let center_set: HashSet<Hex> = centers.iter().copied().collect();
    centers
        .iter()
        .map(|center| {
            let open: usize = hexagon::orbit(*center, 1)
                .iter()
                .filter(|h| !center_set.contains(h) && !blocked.contains(**h))
                .count();
            let (min, max) = target_range(open);
            rng.next_int(min, max)
        })
        .collect()
}

/// State of the search, updated when a digit is placed and restored when it is removed.
struct Search {
    cells: Vec<OpenCell>,

    /// Order in which each cell tries the digits.
    digit_orders: Vec<Vec<u8>>,

    /// Orbit targets. None in free mode.
    targets: Option<Vec<i32>>,

    /// Digits used in each orbit, as bit masks.
    used: Vec<u16>,

    /// Sum of the digits placed in each orbit.
    sums: Vec<i32>,

    /// Number of open cells still empty in each orbit.
    remaining: Vec<usize>,

    /// Digit placed in each cell, in cell order.
    assignment: Vec<u8>,
}

impl Search {
    /// Whether the digit is not used yet in any orbit of the cell.
    fn is_free(&self, idx: usize, digit: u8) -> bool {
        let bit: u16 = 1 << digit;
        self.cells[idx]
            .orbits
            .iter()
            .all(|oi| self.used[*oi] & bit == 0)
    }

    /// Whether the targets of the cell orbits are still reachable with the digit in the cell.
    fn is_feasible(&self, idx: usize, digit: u8) -> bool {
        let targets: &Vec<i32> = match &self.targets {
            Some(t) => t,
            None => return true,
        };
        let bit: u16 = 1 << digit;

        for oi in &self.cells[idx].orbits {
            let sum: i32 = self.sums[*oi] + i32::from(digit);
            let remaining: usize = self.remaining[*oi] - 1;
            let target: i32 = targets[*oi];

            // Last open cell of the orbit: the sum must be exact
            if remaining == 0 {
                if sum != target {
                    return false;
                }
                continue;
            }
            match completion_bounds(self.used[*oi] | bit, remaining) {
                None => return false,
                Some((min, max)) => {
                    if sum + min > target || sum + max < target {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn place(&mut self, idx: usize, digit: u8) {
        let bit: u16 = 1 << digit;
        self.assignment[idx] = digit;
        for oi in &self.cells[idx].orbits {
            self.used[*oi] |= bit;
            self.sums[*oi] += i32::from(digit);
            self.remaining[*oi] -= 1;
        }
    }

    fn remove(&mut self, idx: usize, digit: u8) {
        let bit: u16 = 1 << digit;
        for oi in &self.cells[idx].orbits {
            self.used[*oi] &= !bit;
            self.sums[*oi] -= i32::from(digit);
            self.remaining[*oi] += 1;
        }
    }

    /// Whether every orbit reached its target. Always true in free mode.
    fn targets_reached(&self) -> bool {
        match &self.targets {
            Some(t) => t.iter().zip(&self.sums).all(|(t, s)| t == s),
            None => true,
        }
    }
}

/// [`Solver`] object.
pub struct Solver {
    /// Number of iterations it took for the last search.
    pub iteration: usize,

    /// Duration in seconds it took for the last search.
    pub duration: f32,

    /// Maximum number of iterations before giving up.
    max_iterations: usize,

    /// Time when the search started. Used to compute the [`Solver::duration`].
    start: Instant,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}

impl Solver {
    /// Create the object.
    pub fn new(max_iterations: usize) -> Self {
        Self {
            iteration: 0,
            duration: 0.0,
            max_iterations,
            start: Instant::now(),
        }
    }

    /// Fill the open cells and return the solution.
    ///
    /// In [`SolveMode::Constrained`] mode, the targets are drawn before the digit orders.
    ///
    /// # Errors
    ///
    /// The method returns an error if no assignment exists, or if the iteration limit is reached.
    /// In both cases, the caller can retry with another layout.
    pub fn solve(
        &mut self,
        rng: &mut SeededRng,
        centers: &[Hex],
        blocked: &BlockedCells,
        mode: SolveMode,
    ) -> Result<Solution, SolverError> {
        let targets: Option<Vec<i32>> = match mode {
            SolveMode::Free => None,
            SolveMode::Constrained => Some(draw_targets(rng, centers, blocked)),
        };
        self.search(rng, centers, blocked, targets)
    }

    /// Fill the open cells so that each orbit reaches the given target.
    ///
    /// # Errors
    ///
    /// See [`Solver::solve`].
    pub fn solve_with_targets(
        &mut self,
        rng: &mut SeededRng,
        centers: &[Hex],
        blocked: &BlockedCells,
        targets: &[i32],
    ) -> Result<Solution, SolverError> {
        self.search(rng, centers, blocked, Some(targets.to_vec()))
    }

    fn search(
        &mut self,
        rng: &mut SeededRng,
        centers: &[Hex],
        blocked: &BlockedCells,
        targets: Option<Vec<i32>>,
    ) -> Result<Solution, SolverError> {
        self.iteration = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        let cells: Vec<OpenCell> = open_cells(centers, blocked);
        let digit_orders: Vec<Vec<u8>> = cells.iter().map(|_| rng.shuffle(&DIGITS)).collect();
        let mut remaining: Vec<usize> = vec![0; centers.len()];
        for cell in &cells {
            for oi in &cell.orbits {
                remaining[*oi] += 1;
            }
        }

        if log_enabled!(Level::Debug) {
            debug!("Solving {} open cells", cells.len());
            debug!("    targets = {targets:?}");
            debug!("  remaining = {remaining:?}");
        }

        let num_cells: usize = cells.len();
        let mut state: Search = Search {
            cells,
            digit_orders,
            targets,
            used: vec![0; centers.len()],
            sums: vec![0; centers.len()],
            remaining,
            assignment: vec![0; num_cells],
        };

        let res: Result<(), SolverError> = self.backtrack(0, &mut state);
        self.duration = self.start.elapsed().as_secs_f32();
        debug!(
            "Iterations = {}  Duration = {}  Result = {:?}",
            self.iteration, self.duration, res
        );
        res?;

        let values: Vec<(Hex, u8)> = state
            .cells
            .iter()
            .zip(&state.assignment)
            .map(|(cell, digit)| (cell.hex, *digit))
            .collect();

        let centers: Vec<Center> = match &state.targets {
            Some(targets) => centers
                .iter()
                .zip(targets)
                .map(|(c, t)| Center::new(*c, *t))
                .collect(),
            None => {
                let digits: HashMap<Hex, u8> = values.iter().copied().collect();
                centers
                    .iter()
                    .map(|c| {
                        let sum: i32 = hexagon::orbit(*c, 1)
                            .iter()
                            .filter_map(|h| digits.get(h))
                            .map(|d| i32::from(*d))
                            .sum();
                        Center::new(*c, sum)
                    })
                    .collect()
            }
        };

        Ok(Solution { centers, values })
    }

    /// Recursively fill the cells, starting at `idx`.
    fn backtrack(&mut self, idx: usize, state: &mut Search) -> Result<(), SolverError> {
        self.iteration += 1;
        if self.iteration > self.max_iterations {
            return Err(SolverError::IterationsExceeded);
        }

        if idx == state.cells.len() {
            return if state.targets_reached() {
                Ok(())
            } else {
                Err(SolverError::NoSolution)
            };
        }

        for k in 0..DIGITS.len() {
            let digit: u8 = state.digit_orders[idx][k];
            if !state.is_free(idx, digit) || !state.is_feasible(idx, digit) {
                continue;
            }

            state.place(idx, digit);
            match self.backtrack(idx + 1, state) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    if e == SolverError::IterationsExceeded {
                        return Err(e);
                    }
                }
            }
            state.remove(idx, digit);
        }
        Err(SolverError::NoSolution)
    }
}

/*
validate.rs

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

//! Manage the status of a puzzle in progress.
//!
//! A [`Board`] object stores the digits that the player entered and the current position of the
//! blocked cells, and reports the status of each orbit.

use log::debug;
use std::collections::{HashMap, HashSet};

use crate::generator::blocked_cells::BlockedCells;
use crate::generator::hexagon::{self, Hex};
use crate::generator::puzzles::{Center, Puzzle};
use crate::generator::scrambler;

/// Role of a cell in the puzzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellRole {
    Center,

    /// Orbit cell that takes a digit.
    Open,

    /// Orbit cell that cannot take a digit.
    Blocked,
}

/// Status of an orbit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OrbitStatus {
    /// Some open cells have no digit.
    Incomplete,

    /// A digit appears more than once.
    Duplicated,

    /// All the open cells have distinct digits, but the sum is not the target.
    WrongSum,

    Correct,
}

/// Puzzle in progress.
#[derive(Debug, Clone)]
pub struct Board {
    centers: Vec<Center>,

    /// Coordinates of the centers, for lookups.
    center_set: HashSet<Hex>,

    /// Current position of the blocked cells.
    blocked: BlockedCells,

    /// Digits entered by the player.
    values: HashMap<Hex, u8>,
}

impl Board {
    /// Create a [`Board`] object with no digits.
    pub fn new(centers: &[Center], blocked: BlockedCells) -> Self {
        Self {
            centers: centers.to_vec(),
            center_set: centers.iter().map(|c| c.hex()).collect(),
            blocked,
            values: HashMap::new(),
        }
    }

    /// Create a [`Board`] object for the starting position of the puzzle.
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        Self::new(&puzzle.centers, puzzle.blocked_cells())
    }

    /// Return the centers.
    pub fn centers(&self) -> &[Center] {
        &self.centers
    }

    /// Return the current position of the blocked cells.
    pub fn blocked(&self) -> &BlockedCells {
        &self.blocked
    }

    /// Return the role of the cell, or None if the cell is not part of the puzzle.
    pub fn cell_role(&self, hex: Hex) -> Option<CellRole> {
        if self.center_set.contains(&hex) {
            return Some(CellRole::Center);
        }
        if !self.orbits_of(hex).is_empty() {
            if self.blocked.contains(hex) {
                return Some(CellRole::Blocked);
            }
            return Some(CellRole::Open);
        }
        None
    }

    /// Return the indexes of the centers whose orbit contains the cell.
    pub fn orbits_of(&self, hex: Hex) -> Vec<usize> {
        if self.center_set.contains(&hex) {
            return Vec::new();
        }
        self.centers
            .iter()
            .enumerate()
            .filter(|(_, c)| hexagon::distance(c.hex(), hex) == 1)
            .map(|(i, _)| i)
            .collect()
    }

    /// Return the open cells, without duplicates, in center order then orbit order.
    pub fn open_cells(&self) -> Vec<Hex> {
        let mut seen: HashSet<Hex> = HashSet::new();
        let mut cells: Vec<Hex> = Vec::new();
        for center in &self.centers {
            for hex in hexagon::orbit(center.hex(), 1) {
                if self.cell_role(hex) == Some(CellRole::Open) && seen.insert(hex) {
                    cells.push(hex);
                }
            }
        }
        cells
    }

    /// Return the digit of the cell.
    pub fn value(&self, hex: Hex) -> Option<u8> {
        self.values.get(&hex).copied()
    }

    /// Whether the player can put the digit in the cell: the cell must be open and the digit
    /// must not already be in one of the orbits of the cell.
    pub fn is_allowed(&self, hex: Hex, digit: u8) -> bool {
        if digit > 9 || self.cell_role(hex) != Some(CellRole::Open) {
            return false;
        }
        self.orbits_of(hex).iter().all(|ci| {
            hexagon::orbit(self.centers[*ci].hex(), 1)
                .iter()
                .filter(|h| **h != hex)
                .all(|h| self.value(*h) != Some(digit))
        })
    }

    /// Put a digit in a cell. Return `false`, and leave the board unchanged, if the digit is not
    /// allowed.
    pub fn set_value(&mut self, hex: Hex, digit: u8) -> bool {
        if !self.is_allowed(hex, digit) {
            debug!("Digit {digit} refused in cell {hex}");
            return false;
        }
        self.values.insert(hex, digit);
        true
    }

    /// Remove the digit from the cell.
    pub fn clear_value(&mut self, hex: Hex) {
        self.values.remove(&hex);
    }

    /// Rotate the orbit of the center by one step. Digits and blocked cells move together.
    pub fn rotate(&mut self, center_index: usize) {
        let center: Hex = match self.centers.get(center_index) {
            Some(c) => c.hex(),
            None => return,
        };
        let orbit: Vec<Hex> = hexagon::orbit(center, 1);
        let digits: Vec<Option<u8>> = orbit.iter().map(|h| self.value(*h)).collect();

        scrambler::rotate_orbit(&mut self.blocked, center);
        for (i, hex) in orbit.iter().enumerate() {
            match digits[(i + 1) % orbit.len()] {
                Some(d) => self.values.insert(*hex, d),
                None => self.values.remove(hex),
            };
        }
    }

    /// Return the status of the orbit, or None if there is no center at this index.
    pub fn orbit_status(&self, center_index: usize) -> Option<OrbitStatus> {
        let center: &Center = self.centers.get(center_index)?;
        let mut seen: u16 = 0;
        let mut sum: i32 = 0;
        let mut complete: bool = true;

        for hex in hexagon::orbit(center.hex(), 1) {
            if self.cell_role(hex) != Some(CellRole::Open) {
                continue;
            }
            match self.value(hex) {
                Some(d) => {
                    if seen & (1 << d) != 0 {
                        return Some(OrbitStatus::Duplicated);
                    }
                    seen |= 1 << d;
                    sum += i32::from(d);
                }
                None => complete = false,
            }
        }

        Some(if !complete {
            OrbitStatus::Incomplete
        } else if sum != center.target {
            OrbitStatus::WrongSum
        } else {
            OrbitStatus::Correct
        })
    }

    /// Return the status of every orbit, in center order.
    pub fn statuses(&self) -> Vec<OrbitStatus> {
        (0..self.centers.len())
            .filter_map(|i| self.orbit_status(i))
            .collect()
    }

    /// Whether every orbit is correct.
    pub fn is_solved(&self) -> bool {
        self.statuses().iter().all(|s| *s == OrbitStatus::Correct)
    }
}

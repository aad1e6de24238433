/*
blocked_cells.rs

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

//! Set of blocked cells (black hexagons).

use std::collections::HashSet;

use super::hexagon::Hex;

/// Blocked cells, in insertion order.
///
/// The order is part of the generated puzzle: a cell keeps the position of its first insertion
/// until it is removed.
#[derive(Debug, Default, Clone)]
pub struct BlockedCells {
    /// Cells as an ordered list.
    cells: Vec<Hex>,

    /// Membership of the cells.
    /// Instead of looking for the cell in the [`BlockedCells::cells`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    lookup: HashSet<Hex>,
}

/// Two sets are equal when they block the same cells, whatever the order.
impl PartialEq for BlockedCells {
    fn eq(&self, other: &Self) -> bool {
        self.lookup == other.lookup
    }
}

impl Eq for BlockedCells {}

impl BlockedCells {
    /// Create a [`BlockedCells`] object.
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            lookup: HashSet::with_capacity(capacity),
        }
    }

    /// Create a [`BlockedCells`] object from a list of cells. Duplicates are ignored.
    pub fn from_slice(cells: &[Hex]) -> Self {
        let mut obj: BlockedCells = BlockedCells::new(cells.len());
        for hex in cells {
            obj.insert(*hex);
        }
        obj
    }

    /// Remove all the cells.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.lookup.clear();
    }

    /// Block a cell. Return `false` if the cell was already blocked.
    pub fn insert(&mut self, hex: Hex) -> bool {
        if !self.lookup.insert(hex) {
            return false;
        }
        self.cells.push(hex);
        true
    }

    /// Unblock a cell. Return `false` if the cell was not blocked.
    pub fn remove(&mut self, hex: Hex) -> bool {
        if !self.lookup.remove(&hex) {
            return false;
        }
        self.cells.retain(|h| *h != hex);
        true
    }

    /// Block or unblock a cell.
    pub fn set(&mut self, hex: Hex, blocked: bool) {
        if blocked {
            self.insert(hex);
        } else {
            self.remove(hex);
        }
    }

    /// Number of blocked cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is blocked.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell is blocked.
    pub fn contains(&self, hex: Hex) -> bool {
        self.lookup.contains(&hex)
    }

    /// Return the cells in insertion order.
    pub fn get(&self) -> &[Hex] {
        &self.cells
    }

    /// Return the number of the given cells that are blocked.
    pub fn count_in(&self, cells: &[Hex]) -> usize {
        cells.iter().filter(|h| self.contains(**h)).count()
    }

    /// Return the blocked status of each of the given cells.
    pub fn pattern(&self, cells: &[Hex]) -> Vec<bool> {
        cells.iter().map(|h| self.contains(*h)).collect()
    }
}

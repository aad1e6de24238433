/*
hexagon.rs

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

//! Axial coordinates and grid topology.
//!
//! A cell is addressed by its `(q, r)` axial coordinates:
//!
//! ```text
//!        / \     / \
//!      /     \ /     \
//!     | 0,-1  | 1,-1  |
//!    / \     / \     / \
//!  /     \ /     \ /     \
//! | -1,0  |  0,0  |  1,0  |
//!  \     / \     / \     /
//!    \ /     \ /     \ /
//!     | -1,1  |  0,1  |
//!      \     / \     /
//!        \ /     \ /
//! ```
//!
//! The order of the [`DIRECTIONS`] array is significant: orbits are traversed in that order, and
//! rotating an orbit by one step moves the content of each cell to the previous cell in that
//! order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Axial offsets of the six neighbors: east, north-east, north-west, west, south-west, and
/// south-east.
pub const DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Cell coordinates.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    /// Create a [`Hex`] object.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Return the cell translated by the given offset.
    pub const fn offset(&self, dq: i32, dr: i32) -> Self {
        Self {
            q: self.q + dq,
            r: self.r + dr,
        }
    }
}

/// Cells are displayed as `q,r`, which is also the key format the play session uses.
impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.q, self.r)
    }
}

impl From<(i32, i32)> for Hex {
    fn from(c: (i32, i32)) -> Self {
        Self::new(c.0, c.1)
    }
}

/// Return the six neighbors of the given cell, in the [`DIRECTIONS`] order.
pub fn neighbors(hex: Hex) -> [Hex; 6] {
    DIRECTIONS.map(|(dq, dr)| hex.offset(dq, dr))
}

/// Return the ring of cells at the given distance from the center.
///
/// Radius 0 is the center itself.
/// For other radii, the walk starts at the east corner of the ring and follows the sides in the
/// same rotational direction as [`neighbors`], which is why radius 1 returns exactly the
/// neighbors, in the same order. The ring has `6 * radius` cells.
pub fn orbit(center: Hex, radius: u32) -> Vec<Hex> {
    if radius == 0 {
        return vec![center];
    }

    let radius: i32 = radius as i32;
    let mut ring: Vec<Hex> = Vec::with_capacity(6 * radius as usize);
    let (east_q, east_r) = DIRECTIONS[0];
    let mut hex: Hex = center.offset(east_q * radius, east_r * radius);

    for side in 0..6 {
        // Going from the east corner to the north-east corner is a north-west move
        let (dq, dr) = DIRECTIONS[(side + 2) % 6];
        for _ in 0..radius {
            ring.push(hex);
            hex = hex.offset(dq, dr);
        }
    }
    ring
}

/// Return the distance between two cells, in number of moves.
pub fn distance(a: Hex, b: Hex) -> u32 {
    let dq: i32 = a.q - b.q;
    let dr: i32 = a.r - b.r;
    ((dq.abs() + (dq + dr).abs() + dr.abs()) / 2) as u32
}

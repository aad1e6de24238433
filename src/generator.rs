/*
generator.rs

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

//! Generate orbit puzzles.
//!
//! A puzzle is a set of centers on a hexagonal grid. The six cells around a center form its
//! orbit. The player fills the open cells of each orbit with distinct digits that add up to the
//! target of the center. Some orbit cells are blocked, and the player rotates the orbits to move
//! the blocked cells back to the positions where the targets can be reached.
//!
//! [`puzzles::Generator`] runs the generation steps:
//!
//! * [`layout`] selects the centers from templates.
//! * [`blocked`] selects the solved positions of the blocked cells.
//!   The cells are stored in a [`blocked_cells::BlockedCells`] object.
//! * [`solver`] fills the open cells and derives the targets.
//!   If it takes too long, then the generator tries another layout.
//!   After too many failures, a static puzzle is returned.
//! * [`scrambler`] rotates the orbits to move the blocked cells away from their solved positions.
//!
//! All the random draws come from a [`rng::SeededRng`] object, so a seed always gives the same
//! puzzle.

pub mod blocked;
pub mod blocked_cells;
pub mod hexagon;
pub mod layout;
pub mod puzzles;
pub mod rng;
pub mod scrambler;
pub mod solver;

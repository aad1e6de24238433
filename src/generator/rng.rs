/*
rng.rs

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

//! Seeded random sequence.
//!
//! The daily puzzle must be the same for every player on a given date, on every platform.
//! Therefore, the generator does not use the random generators from the [`rand`] crate, which do
//! not guarantee a stable output across versions, but a Mulberry32 generator implemented with
//! 32-bit wrapping arithmetic.
//! The [`rand`] crate is only used to draw the seed of free play puzzles.

use rand::Rng;

/// Mulberry32 pseudo-random generator.
#[derive(Debug, Clone)]
pub struct SeededRng {
    /// Internal state, advanced by a constant on each draw.
    state: u32,
}

impl SeededRng {
    /// Create a [`SeededRng`] object.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create a [`SeededRng`] object from a random seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random::<u32>())
    }

    /// Return a float in the `[0, 1)` range.
    pub fn next_float(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let s: u32 = self.state;
        let mut t: u32 = (s ^ (s >> 15)).wrapping_mul(1 | s);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    /// Return an integer between `min` and `max`, both included.
    pub fn next_int(&mut self, min: i32, max: i32) -> i32 {
        let span: f64 = f64::from(max) - f64::from(min) + 1.0;
        min + (self.next_float() * span).floor() as i32
    }

    /// Return a count in the `min..=max` range, or `min` when `max` is smaller. Consumes one
    /// draw and gives the same value as [`SeededRng::next_int`] over the same range.
    pub fn next_count(&mut self, min: u32, max: u32) -> u32 {
        let max: u32 = max.max(min);
        let span: f64 = f64::from(max) - f64::from(min) + 1.0;
        min + ((self.next_float() * span).floor() as u32).min(max - min)
    }

    /// Return an index in the `0..len` range. `len` must not be zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        self.next_int(0, len as i32 - 1) as usize
    }

    /// Return a shuffled copy of the given items (Fisher-Yates).
    ///
    /// The draws are consumed from the last index down to the second one.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled: Vec<T> = items.to_vec();
        for i in (1..shuffled.len()).rev() {
            let j: usize = self.next_index(i + 1);
            shuffled.swap(i, j);
        }
        shuffled
    }
}

/// Convert a date string, such as `2025-01-15`, into a seed.
///
/// The hash is computed over the UTF-16 code units of the string (`hash * 31 + unit`, wrapped
/// to 32 bits), so that the daily puzzles stay identical to the ones already published.
pub fn date_to_seed(date: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in date.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    hash as u32
}

/*
puzzles.rs

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

//! Puzzle representation and generation.
//!
//! A [`Generator`] object runs the generation steps for a difficulty level:
//!
//! 1. Place the centers from a template ([`layout::place_centers`]).
//! 2. Place the blocked cells in their solved positions ([`blocked::place_blocked_cells`]).
//! 3. Fill the open cells and derive the targets ([`solver::Solver::solve`]).
//! 4. Scramble the blocked cells ([`scrambler::scramble`]).
//!
//! When the solver fails, the generator starts over from the first step with the next random
//! draws. After [`GeneratorConfig::max_retries`] failures, a static single-orbit puzzle is
//! returned instead.

use clap::ValueEnum;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;
use strum_macros::FromRepr;

use super::blocked;
use super::blocked_cells::BlockedCells;
use super::hexagon::Hex;
use super::layout;
use super::rng::{self, SeededRng};
use super::scrambler::{self, Scramble};
use super::solver::{self, SolveMode, Solution, Solver, SolverError};

/// Seeds of the tutorial puzzles, one per step.
pub const TUTORIAL_SEEDS: [u32; 3] = [42, 137, 256];

/// Puzzle difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(usize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// One orbit, no blocked cells.
    Beginner,
    Easy,
    #[default]
    Medium,
    Hard,

    /// Difficulty of the daily puzzle.
    Extreme,
    Insane,
}

impl Difficulty {
    /// All the levels, from the easiest.
    pub const ALL: [Difficulty; 6] = [
        Difficulty::Beginner,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
        Difficulty::Insane,
    ];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::Extreme => write!(f, "extreme"),
            Difficulty::Insane => write!(f, "insane"),
        }
    }
}

/// Center cell and the sum its orbit must reach.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Center {
    pub q: i32,
    pub r: i32,
    pub target: i32,
}

impl Center {
    pub fn new(hex: Hex, target: i32) -> Self {
        Self {
            q: hex.q,
            r: hex.r,
            target,
        }
    }

    /// Coordinates of the center.
    pub fn hex(&self) -> Hex {
        Hex::new(self.q, self.r)
    }
}

/// Generated puzzle, as given to the player.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Centers with their targets.
    pub centers: Vec<Center>,

    /// Blocked cells in their starting (scrambled) positions.
    #[serde(rename = "blackHexagons")]
    pub black_hexagons: Vec<Hex>,
}

impl Puzzle {
    /// Return the puzzle used when the generation fails: one orbit with no blocked cells.
    pub fn fallback() -> Self {
        Self {
            centers: vec![Center::new(Hex::new(0, 0), 15)],
            black_hexagons: Vec::new(),
        }
    }

    /// Coordinates of the centers.
    pub fn center_hexes(&self) -> Vec<Hex> {
        self.centers.iter().map(|c| c.hex()).collect()
    }

    /// Starting blocked cells as a set.
    pub fn blocked_cells(&self) -> BlockedCells {
        BlockedCells::from_slice(&self.black_hexagons)
    }
}

/// Generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of layouts to try before returning [`Puzzle::fallback`].
    pub max_retries: usize,

    /// Maximum number of solver iterations for one layout.
    pub max_iterations: usize,

    /// Smallest number of scramble rotations.
    pub min_rotations: u32,

    /// Largest number of scramble rotations.
    pub max_rotations: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_retries: 30,
            max_iterations: solver::DEFAULT_MAX_ITERATIONS,
            min_rotations: 3,
            max_rotations: 8,
        }
    }
}

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GeneratorError {
    /// The solver failed on every layout.
    RetriesExhausted,
}

/// Puzzle with everything the generator knows about it.
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    pub difficulty: Difficulty,

    /// Puzzle as given to the player.
    pub puzzle: Puzzle,

    /// Digits of the open cells when the blocked cells are in their solved positions.
    pub solution: Solution,

    /// Solved positions of the blocked cells.
    pub solution_blocked: BlockedCells,

    /// Centers rotated by the scrambler, in order.
    pub rotations: Vec<usize>,
}

/// [`Generator`] object.
pub struct Generator {
    /// Number of layouts tried for the last puzzle.
    pub attempts: usize,

    /// Total number of solver iterations for the last puzzle.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last puzzle.
    pub duration: f32,

    /// Whether the last puzzle is [`Puzzle::fallback`].
    pub used_fallback: bool,

    config: GeneratorConfig,

    /// Time when the generation started. Used to compute the [`Generator::duration`].
    start: Instant,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Generator {
    /// Create the object.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            attempts: 0,
            iteration: 0,
            duration: 0.0,
            used_fallback: false,
            config,
            start: Instant::now(),
        }
    }

    /// Generate a puzzle and return it with its solution.
    ///
    /// # Errors
    ///
    /// The method returns an error if the solver fails on [`GeneratorConfig::max_retries`]
    /// layouts in a row.
    pub fn generate_detailed(
        &mut self,
        rng: &mut SeededRng,
        difficulty: Difficulty,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        self.attempts = 0;
        self.iteration = 0;
        self.duration = 0.0;
        self.used_fallback = false;
        self.start = Instant::now();

        let res: Result<GeneratedPuzzle, GeneratorError> = self.run(rng, difficulty);
        self.duration = self.start.elapsed().as_secs_f32();
        debug!(
            "Attempts = {}  Iterations = {}  Duration = {}",
            self.attempts, self.iteration, self.duration
        );
        res
    }

    fn run(
        &mut self,
        rng: &mut SeededRng,
        difficulty: Difficulty,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        let mut solver: Solver = Solver::new(self.config.max_iterations);

        for attempt in 1..=self.config.max_retries {
            self.attempts = attempt;

            let centers: Vec<Hex> = layout::place_centers(rng, difficulty);
            let (solution_blocked, mode) = if difficulty == Difficulty::Beginner {
                (BlockedCells::default(), SolveMode::Free)
            } else {
                (
                    blocked::place_blocked_cells(rng, &centers, difficulty),
                    SolveMode::Constrained,
                )
            };

            let res: Result<Solution, SolverError> =
                solver.solve(rng, &centers, &solution_blocked, mode);
            self.iteration += solver.iteration;
            let solution: Solution = match res {
                Ok(s) => s,
                Err(e) => {
                    debug!("Attempt {attempt} for {difficulty} failed: {e:?}");
                    continue;
                }
            };

            let scramble: Scramble = scrambler::scramble(
                rng,
                &centers,
                &solution_blocked,
                self.config.min_rotations,
                self.config.max_rotations,
            );
            let puzzle: Puzzle = Puzzle {
                centers: solution.centers.clone(),
                black_hexagons: scramble.blocked.get().to_vec(),
            };
            return Ok(GeneratedPuzzle {
                difficulty,
                puzzle,
                solution,
                solution_blocked,
                rotations: scramble.rotations,
            });
        }
        Err(GeneratorError::RetriesExhausted)
    }

    /// Generate a puzzle.
    ///
    /// If the generation fails, then [`Puzzle::fallback`] is returned and
    /// [`Generator::used_fallback`] is set.
    pub fn generate(&mut self, rng: &mut SeededRng, difficulty: Difficulty) -> Puzzle {
        match self.generate_detailed(rng, difficulty) {
            Ok(generated) => generated.puzzle,
            Err(e) => {
                warn!(
                    "No {difficulty} puzzle after {} attempts ({e:?}), using the fallback puzzle",
                    self.attempts
                );
                self.used_fallback = true;
                Puzzle::fallback()
            }
        }
    }
}

/// Generate a puzzle with the default configuration.
pub fn generate_puzzle(rng: &mut SeededRng, difficulty: Difficulty) -> Puzzle {
    Generator::default().generate(rng, difficulty)
}

/// Generate the puzzle for the given seed.
pub fn generate_seeded_puzzle(seed: u32, difficulty: Difficulty) -> Puzzle {
    generate_puzzle(&mut SeededRng::new(seed), difficulty)
}

/// Generate the daily puzzle. Every player gets the same puzzle for a given date.
///
/// The date is a string such as `2025-01-15`.
pub fn generate_daily_puzzle(date: &str) -> Puzzle {
    generate_seeded_puzzle(rng::date_to_seed(date), Difficulty::Extreme)
}

/// Generate a new random puzzle.
pub fn generate_free_play_puzzle(difficulty: Difficulty) -> Puzzle {
    generate_puzzle(&mut SeededRng::from_entropy(), difficulty)
}

/// Return the seed and difficulty of the tutorial step.
///
/// Steps past the last one reuse the last step.
pub fn tutorial_parameters(step: usize) -> (u32, Difficulty) {
    let step: usize = step.min(TUTORIAL_SEEDS.len() - 1);
    let difficulty: Difficulty = Difficulty::from_repr(step).unwrap_or(Difficulty::Medium);
    (TUTORIAL_SEEDS[step], difficulty)
}

/// Generate the puzzle for a tutorial step.
pub fn generate_tutorial_puzzle(step: usize) -> Puzzle {
    let (seed, difficulty) = tutorial_parameters(step);
    generate_seeded_puzzle(seed, difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn difficulty_names() {
        let names: Vec<String> = Difficulty::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(
            names,
            ["beginner", "easy", "medium", "hard", "extreme", "insane"]
        );
        assert_eq!(
            serde_json::to_string(&Difficulty::Extreme).unwrap(),
            "\"extreme\""
        );
        assert_eq!(Difficulty::from_repr(1), Some(Difficulty::Easy));
        assert!(Difficulty::Beginner < Difficulty::Insane);
    }

    #[test]
    fn tutorial_steps() {
        assert_eq!(tutorial_parameters(0), (42, Difficulty::Beginner));
        assert_eq!(tutorial_parameters(1), (137, Difficulty::Easy));
        assert_eq!(tutorial_parameters(2), (256, Difficulty::Medium));
        assert_eq!(tutorial_parameters(3), (256, Difficulty::Medium));
        assert_eq!(tutorial_parameters(usize::MAX), (256, Difficulty::Medium));
    }

    #[test]
    fn puzzle_json_shape() {
        let puzzle: Puzzle = Puzzle {
            centers: vec![Center::new(Hex::new(1, -1), 12)],
            black_hexagons: vec![Hex::new(2, -1)],
        };
        assert_eq!(
            serde_json::to_value(&puzzle).unwrap(),
            json!({
                "centers": [{ "q": 1, "r": -1, "target": 12 }],
                "blackHexagons": [{ "q": 2, "r": -1 }]
            })
        );
        let back: Puzzle = serde_json::from_value(serde_json::to_value(&puzzle).unwrap()).unwrap();
        assert_eq!(back, puzzle);
    }

    #[test]
    fn fallback_after_retries() {
        // One iteration is never enough to fill an orbit
        let config: GeneratorConfig = GeneratorConfig {
            max_retries: 3,
            max_iterations: 1,
            ..GeneratorConfig::default()
        };
        let mut generator: Generator = Generator::new(config);
        let mut rng: SeededRng = SeededRng::new(9);

        assert_eq!(
            generator
                .generate_detailed(&mut rng, Difficulty::Hard)
                .map(|g| g.puzzle),
            Err(GeneratorError::RetriesExhausted)
        );
        assert_eq!(generator.attempts, 3);

        let puzzle: Puzzle = generator.generate(&mut rng, Difficulty::Hard);
        assert_eq!(puzzle, Puzzle::fallback());
        assert!(generator.used_fallback);
        assert_eq!(puzzle.centers[0].target, 15);
        assert!(puzzle.black_hexagons.is_empty());
    }

    #[test]
    fn generated_puzzle_is_consistent() {
        let mut generator: Generator = Generator::default();
        let mut rng: SeededRng = SeededRng::new(2718);
        let g: GeneratedPuzzle = generator
            .generate_detailed(&mut rng, Difficulty::Medium)
            .expect("medium puzzles are generated in a few attempts");

        assert!(!generator.used_fallback);
        assert_eq!(g.puzzle.centers, g.solution.centers);
        assert_eq!(g.puzzle.black_hexagons.len(), g.solution_blocked.len());
        assert_ne!(g.puzzle.blocked_cells(), g.solution_blocked);
        let scramble: Scramble = Scramble {
            blocked: g.puzzle.blocked_cells(),
            rotations: g.rotations.clone(),
        };
        assert_eq!(
            scrambler::unscramble(&g.puzzle.center_hexes(), &scramble),
            g.solution_blocked
        );
    }

    #[test]
    fn beginner_has_one_free_orbit() {
        for seed in 0..50 {
            let puzzle: Puzzle = generate_seeded_puzzle(seed, Difficulty::Beginner);
            assert_eq!(puzzle.centers.len(), 1);
            assert!(puzzle.black_hexagons.is_empty());
            assert!((15..=39).contains(&puzzle.centers[0].target));
        }
    }
}

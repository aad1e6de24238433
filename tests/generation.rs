/*
generation.rs

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

use pretty_assertions::assert_eq;

use hexorbit::generator::blocked::MAX_BLOCKED_PER_ORBIT;
use hexorbit::generator::blocked_cells::BlockedCells;
use hexorbit::generator::hexagon::{self, Hex};
use hexorbit::generator::layout;
use hexorbit::generator::puzzles::{
    Difficulty, GeneratedPuzzle, Generator, GeneratorConfig, Puzzle, generate_free_play_puzzle,
};
use hexorbit::generator::rng::SeededRng;
use hexorbit::generator::scrambler::{self, Scramble};
use hexorbit::generator::solver;
use hexorbit::validate::{Board, OrbitStatus};

/// Lower iteration limit, so that the tests stay fast on unlucky layouts.
fn test_config() -> GeneratorConfig {
    GeneratorConfig {
        max_iterations: 20_000,
        ..GeneratorConfig::default()
    }
}

/// Verify everything the generator promises about a puzzle.
fn check(g: &GeneratedPuzzle) {
    let centers: Vec<Hex> = g.puzzle.center_hexes();
    assert_eq!(centers.len(), layout::templates(g.difficulty)[0].len());

    // Blocked cells in their solved positions: at most two per orbit, and the target range
    // matches the number of open cells
    for center in &g.puzzle.centers {
        let orbit: Vec<Hex> = hexagon::orbit(center.hex(), 1);
        let blocked: usize = g.solution_blocked.count_in(&orbit);
        assert!(blocked <= MAX_BLOCKED_PER_ORBIT);
        let (min, max) = solver::target_range(6 - blocked);
        assert!(
            (min..=max).contains(&center.target),
            "target {} with {blocked} blocked cells",
            center.target
        );
    }

    // Scrambled positions differ from the solution, unless there is nothing to scramble
    let start: BlockedCells = g.puzzle.blocked_cells();
    assert_eq!(start.len(), g.solution_blocked.len());
    if g.solution_blocked.is_empty() {
        assert!(g.rotations.is_empty());
    } else {
        assert_ne!(start, g.solution_blocked);
    }
    let scramble: Scramble = Scramble {
        blocked: start,
        rotations: g.rotations.clone(),
    };
    assert_eq!(scrambler::unscramble(&centers, &scramble), g.solution_blocked);

    // The player reaches the solution by rotating the orbits back, then filling the digits
    let mut board: Board = Board::from_puzzle(&g.puzzle);
    for index in g.rotations.iter().rev() {
        for _ in 0..5 {
            board.rotate(*index);
        }
    }
    assert_eq!(*board.blocked(), g.solution_blocked);
    for (hex, digit) in &g.solution.values {
        assert!(board.set_value(*hex, *digit), "{digit} refused in {hex}");
    }
    assert!(
        board.is_solved(),
        "{:?} for {:?}",
        board.statuses(),
        g.puzzle
    );
}

#[test]
fn every_call_returns_a_puzzle() {
    let mut generator: Generator = Generator::new(test_config());
    for (i, difficulty) in Difficulty::ALL.into_iter().enumerate() {
        let mut fallbacks: usize = 0;
        for seed in 0..1000u32 {
            let mut rng: SeededRng = SeededRng::new(seed.wrapping_mul(7919).wrapping_add(i as u32));
            match generator.generate_detailed(&mut rng, difficulty) {
                Ok(g) => check(&g),
                Err(_) => fallbacks += 1,
            }
        }
        // The fallback stays exceptional
        assert!(fallbacks < 50, "{fallbacks} fallbacks for {difficulty}");
    }
}

#[test]
fn fallback_is_a_solvable_puzzle() {
    let puzzle: Puzzle = Puzzle::fallback();
    let mut board: Board = Board::from_puzzle(&puzzle);
    for (digit, hex) in hexagon::neighbors(Hex::new(0, 0)).iter().enumerate() {
        assert!(board.set_value(*hex, digit as u8));
    }
    assert_eq!(board.statuses(), [OrbitStatus::Correct]);
}

#[test]
fn same_seed_same_puzzle() {
    for difficulty in Difficulty::ALL {
        let a: Puzzle =
            Generator::new(test_config()).generate(&mut SeededRng::new(4242), difficulty);
        let b: Puzzle =
            Generator::new(test_config()).generate(&mut SeededRng::new(4242), difficulty);
        assert_eq!(a, b);
    }
}

#[test]
fn free_play_puzzles() {
    for difficulty in Difficulty::ALL {
        let puzzle: Puzzle = generate_free_play_puzzle(difficulty);
        assert!(!puzzle.centers.is_empty());
        if difficulty == Difficulty::Beginner {
            assert!(puzzle.black_hexagons.is_empty());
            assert_eq!(puzzle.centers.len(), 1);
            assert!((15..=39).contains(&puzzle.centers[0].target));
        }
    }
}

#[test]
fn starting_layout_may_exceed_the_orbit_cap() {
    // The cap holds on the solved positions. Rotations move blocked cells through shared
    // cells, so a starting orbit can hold more of them.
    let mut generator: Generator = Generator::new(test_config());
    let mut over_cap: usize = 0;
    for difficulty in [Difficulty::Extreme, Difficulty::Insane] {
        for seed in 0..300u32 {
            let mut rng: SeededRng = SeededRng::new(seed);
            let g: GeneratedPuzzle = match generator.generate_detailed(&mut rng, difficulty) {
                Ok(g) => g,
                Err(_) => continue,
            };
            let start: BlockedCells = g.puzzle.blocked_cells();
            for center in g.puzzle.center_hexes() {
                let orbit: Vec<Hex> = hexagon::orbit(center, 1);
                assert!(g.solution_blocked.count_in(&orbit) <= MAX_BLOCKED_PER_ORBIT);
                if start.count_in(&orbit) > MAX_BLOCKED_PER_ORBIT {
                    over_cap += 1;
                }
            }
        }
    }
    assert!(over_cap > 0);
}

#[test]
fn free_play_calls_always_return_a_puzzle() {
    for _ in 0..1000 {
        let puzzle: Puzzle = generate_free_play_puzzle(Difficulty::Easy);
        if puzzle == Puzzle::fallback() {
            continue;
        }
        assert_eq!(puzzle.centers.len(), 3);
        assert_eq!(puzzle.black_hexagons.len(), 2);
        for center in &puzzle.centers {
            assert!((6..=39).contains(&center.target), "target {}", center.target);
        }
    }

    for _ in 0..1000 {
        let puzzle: Puzzle = generate_free_play_puzzle(Difficulty::Beginner);
        assert_eq!(puzzle.centers.len(), 1);
        assert!(puzzle.black_hexagons.is_empty());
        assert!((15..=39).contains(&puzzle.centers[0].target));
    }
}

#[test]
fn generator_statistics() {
    let mut generator: Generator = Generator::default();
    let mut rng: SeededRng = SeededRng::new(3);
    let puzzle: Puzzle = generator.generate(&mut rng, Difficulty::Easy);

    assert!(!generator.used_fallback);
    assert!(generator.attempts >= 1);
    assert!(generator.iteration > 0);
    assert_eq!(puzzle.centers.len(), 3);
    assert_eq!(puzzle.black_hexagons.len(), 2);
}

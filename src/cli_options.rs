/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers checking the generated puzzles.
//! Each puzzle is printed as a JSON object on its own line.
//!
//! # Examples
//!
//! List the difficulty levels:
//!
//! ```
//! $ hexorbit --ls
//! beginner
//! easy
//! medium
//! hard
//! extreme
//! insane
//! ```
//!
//! Generate the daily puzzle for a given date:
//!
//! ```
//! $ hexorbit --daily 2025-01-15
//! {"centers":[{"q":0,"r":1,"target":14},{"q":2,"r":1,"target":8},...],"blackHexagons":[...]}
//! ```
//!
//! Generate 100 random hard puzzles and print some statistics:
//!
//! ```
//! $ hexorbit --free -f hard -c 100 -s
//! ```

use chrono::{Local, NaiveDate};
use clap::{ArgGroup, Parser};
use log::debug;
use rand::Rng;
use std::env;

use hexorbit::generator::puzzles::{self, Difficulty, Generator, Puzzle};
use hexorbit::generator::rng::{self, SeededRng};

/// Build Hexorbit puzzles for developers.
#[derive(Parser)]
#[command(about, long_about = None, version)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["ls", "daily", "free", "tutorial", "seed"])
))]
struct Args {
    /// List the difficulty levels
    #[arg(long, default_value_t = false)]
    ls: bool,

    /// Generate the daily puzzle for the date (YYYY-MM-DD, today by default)
    #[arg(long, value_name = "DATE", num_args = 0..=1, default_missing_value = "")]
    daily: Option<String>,

    /// Generate random puzzles
    #[arg(long, default_value_t = false)]
    free: bool,

    /// Generate the puzzle of the tutorial step (from 0)
    #[arg(long, value_name = "STEP")]
    tutorial: Option<usize>,

    /// Generate the puzzles for the seed, and the following seeds when --count is greater than 1
    #[arg(long)]
    seed: Option<u32>,

    /// Difficulty level for --free and --seed
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Number of puzzles to generate with --free and --seed
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Statistics over the generated puzzles.
#[derive(Default)]
struct Summary {
    count: usize,
    total: f32,
    max: f32,
    iterations: usize,
    attempts: usize,
    fallbacks: usize,
}

impl Summary {
    fn add(&mut self, generator: &Generator) {
        self.count += 1;
        self.total += generator.duration;
        if generator.duration > self.max {
            self.max = generator.duration;
        }
        self.iterations += generator.iteration;
        self.attempts += generator.attempts;
        if generator.used_fallback {
            self.fallbacks += 1;
        }
    }

    fn print(&self) {
        let count: usize = self.count.max(1);
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}
  average attempts = {}
         fallbacks = {}",
            self.total,
            self.total / count as f32,
            self.max,
            self.iterations / count,
            self.attempts as f32 / count as f32,
            self.fallbacks
        );
    }
}

/// Return the date in the `YYYY-MM-DD` format. An empty string is today's date.
fn daily_date(date: &str) -> Result<String, String> {
    if date.is_empty() {
        return Ok(Local::now().date_naive().format("%Y-%m-%d").to_string());
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => Ok(d.format("%Y-%m-%d").to_string()),
        Err(e) => Err(format!("Invalid date {date}: {e}. Use the YYYY-MM-DD format.")),
    }
}

/// Return the seed and difficulty of each puzzle to generate.
fn jobs(args: &Args) -> Result<Vec<(u32, Difficulty)>, String> {
    if let Some(date) = &args.daily {
        let date: String = daily_date(date)?;
        debug!("Daily puzzle for {date}");
        return Ok(vec![(rng::date_to_seed(&date), Difficulty::Extreme)]);
    }
    if let Some(step) = args.tutorial {
        return Ok(vec![puzzles::tutorial_parameters(step)]);
    }
    if let Some(seed) = args.seed {
        return Ok((0..args.count)
            .map(|i| (seed.wrapping_add(i as u32), args.difficulty))
            .collect());
    }
    let mut rng: rand::rngs::ThreadRng = rand::rng();
    Ok((0..args.count)
        .map(|_| (rng.random::<u32>(), args.difficulty))
        .collect())
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        println!("DEBUG");
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the difficulty levels
    //
    if args.ls {
        for difficulty in Difficulty::ALL {
            println!("{difficulty}");
        }
        return 0;
    }

    let jobs: Vec<(u32, Difficulty)> = match jobs(&args) {
        Ok(j) => j,
        Err(msg) => {
            eprintln!("{msg}");
            return 1;
        }
    };

    let mut generator: Generator = Generator::default();
    let mut summary: Summary = Summary::default();
    for (seed, difficulty) in jobs {
        debug!("Seed {seed} for {difficulty}");
        let puzzle: Puzzle = generator.generate(&mut SeededRng::new(seed), difficulty);
        summary.add(&generator);

        match serde_json::to_string(&puzzle) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Cannot serialize the puzzle: {e}");
                return 1;
            }
        }
    }

    // Print some stats
    if args.summary {
        summary.print();
    }
    0
}

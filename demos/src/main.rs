//! Side-by-side Dijkstra / A* run on a random or hand-written grid.
//!
//! Run: cargo run --bin gridpath -- [SIZE] [BARRIER_PERCENT]
//!      cargo run --bin gridpath -- --map FILE
//!
//! Random grids need SIZE >= 2 so the two corners are distinct.

use std::error::Error;

use gridpath_core::{CellState, Grid, Pos};
use gridpath_search::{Algorithm, Engine, Flow, Outcome, SearchConfig, Step};
use rand::{Rng, RngExt};

const DEFAULT_SIZE: i32 = 20;
const DEFAULT_BARRIER_PERCENT: u32 = 25;
const MIN_SIZE: i32 = 2;

/// Random barriers, start in the top-left corner and end in the bottom-right
/// one, laid down with the same place action an interactive editor uses.
fn random_grid(
    rng: &mut impl Rng,
    size: i32,
    barrier_percent: u32,
) -> Result<Grid, Box<dyn Error>> {
    if size < MIN_SIZE {
        return Err(format!("grid size must be at least {MIN_SIZE}, got {size}").into());
    }
    let mut grid = Grid::new(size)?;
    grid.place(Pos::ZERO)?;
    grid.place(Pos::new(size - 1, size - 1))?;
    for row in 0..size {
        for col in 0..size {
            if rng.random_range(0..100u32) < barrier_percent {
                grid.place(Pos::new(row, col))?;
            }
        }
    }
    Ok(grid)
}

fn load_grid(args: &[String]) -> Result<Grid, Box<dyn Error>> {
    match args {
        [flag, path] if flag == "--map" => {
            let text = std::fs::read_to_string(path)?;
            Ok(text.parse()?)
        }
        _ => {
            let size = match args.first() {
                Some(s) => s.parse()?,
                None => DEFAULT_SIZE,
            };
            let percent = match args.get(1) {
                Some(s) => s.parse()?,
                None => DEFAULT_BARRIER_PERCENT,
            };
            random_grid(&mut rand::rng(), size, percent)
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let grid = load_grid(&args)?;
    println!("{grid}\n");

    for algorithm in Algorithm::ALL {
        let mut grid = grid.clone();
        let mut engine = Engine::with_config(SearchConfig::default().with_algorithm(algorithm));

        let mut redraws = 0usize;
        let mut peak_frontier = 0usize;
        let mut observer = |g: &Grid, _: Step| {
            redraws += 1;
            peak_frontier = peak_frontier.max(g.count(CellState::Frontier));
            Flow::Continue
        };
        let report = engine.run(&mut grid, &mut observer)?;

        let result = match &report.outcome {
            Outcome::Found(path) => format!("path of {} steps", path.steps()),
            Outcome::NoPathFound => "no path".to_string(),
            Outcome::Cancelled => "cancelled".to_string(),
        };
        println!("{algorithm}: {result}");
        println!(
            "  expanded {}, queued {}, peak frontier {peak_frontier}, redraws {redraws}",
            report.stats.expanded, report.stats.inserted
        );
        println!("{grid}\n");
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn random_grid_needs_two_corners() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for size in [-1, 0, 1] {
            let err = random_grid(&mut rng, size, 0).unwrap_err();
            assert!(err.to_string().contains("at least 2"), "{err}");
        }
        let grid = random_grid(&mut rng, 2, 100).unwrap();
        assert_eq!(grid.start(), Some(Pos::ZERO));
        assert_eq!(grid.end(), Some(Pos::new(1, 1)));
        assert_eq!(grid.count(CellState::Barrier), 2);
    }
}

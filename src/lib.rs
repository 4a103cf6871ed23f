//! Conway's game of life on an unbounded grid, stepped incrementally from
//! the changes of the previous generation.

use std::io::{stdout, Write};

use tracing::info;

pub use utils::Pos;
mod utils;

pub use world::{snap, CellSet, ChunkedSet, HashedSet};
pub mod world;

pub use engine::{
    advance, apply_changes, bounding_box, compute_changes, live_neighbor_count, neighbors_of,
    simulate, Board, BoundingBox, Change, Destiny, RunReport, R_PENTOMINO,
};
pub mod engine;

pub use view::{render, show, Canvas};
pub mod view;

pub use config::Config;
pub mod config;

pub use error::{ConfigError, Error, Result};
mod error;

/// runs the simulation `config.runs` times, printing the throughput of each run.
pub fn run<S>(config: &Config) -> Result<Vec<RunReport>>
where
    S: CellSet,
{
    info!(
        generations = config.generations,
        runs = config.runs,
        show_work = config.show_work,
        "starting"
    );
    let mut reports = Vec::with_capacity(config.runs as usize);
    for _ in 0..config.runs {
        let report = simulate::<S>(config, |board| {
            if config.show_work {
                show(&board.live)?;
            }
            Ok(())
        })?;
        writeln!(stdout(), "{report}")?;
        reports.push(report);
    }
    Ok(reports)
}

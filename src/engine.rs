//! Incremental generation stepping.
//!
//! A [`Board`] carries the live set of a generation together with the changes
//! scheduled for the next one. Advancing only re-evaluates the neighbors of
//! cells that just changed: a cell's neighbor count can only move if one of
//! its neighbors toggled, so everything else is left alone.

use std::{
    fmt,
    time::{Duration, Instant},
};

use tracing::{debug, trace};

use crate::{pos, CellSet, Config, Pos, Result};

pub const R_PENTOMINO: [Pos; 5] = [pos!(0, 0), pos!(0, 1), pos!(1, 1), pos!(-1, 0), pos!(0, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destiny {
    Live,
    Die,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Change {
    pub destiny: Destiny,
    pub pos: Pos,
}

impl Change {
    pub fn live(pos: Pos) -> Self {
        let destiny = Destiny::Live;
        Self { destiny, pos }
    }

    pub fn die(pos: Pos) -> Self {
        let destiny = Destiny::Die;
        Self { destiny, pos }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Board<S>
where
    S: CellSet,
{
    pub live: S,
    pub updates: Vec<Change>,
}

impl<S> Board<S>
where
    S: CellSet,
{
    /// an empty board whose pending updates bring `pattern` to life.
    pub fn seed(pattern: impl IntoIterator<Item = Pos>) -> Self {
        let updates = pattern.into_iter().map(Change::live).collect();
        Self {
            live: S::default(),
            updates,
        }
    }

    /// like [`Board::seed`], but also schedules the empty cells around the
    /// pattern as dead so that the first step looks at the whole pattern
    /// neighborhood, including cells that have no seeded neighbor.
    pub fn start(pattern: impl IntoIterator<Item = Pos>) -> Self {
        let pattern: S = pattern.into_iter().collect();
        let margin: S = pattern
            .iter()
            .flat_map(|pos| pos.neighbors())
            .filter(|pos| !pattern.contains(*pos))
            .collect();
        let updates = pattern
            .iter()
            .map(Change::live)
            .chain(margin.iter().map(Change::die))
            .collect();
        Self {
            live: S::default(),
            updates,
        }
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: Pos,
    pub max: Pos,
}

impl BoundingBox {
    /// box reported for an empty live set.
    pub const EMPTY: Self = Self {
        min: pos!(0, 0),
        max: pos!(1, 1),
    };

    /// columns covered, saturating at `u64::MAX` for a box spanning every column.
    pub fn width(&self) -> u64 {
        self.max.x.abs_diff(self.min.x).saturating_add(1)
    }

    pub fn height(&self) -> u64 {
        self.max.y.abs_diff(self.min.y).saturating_add(1)
    }
}

/// applies the pending updates of `board` to its live set.
pub fn apply_changes<S>(board: &Board<S>) -> S
where
    S: CellSet,
{
    let (to_live, to_die) = board
        .updates
        .iter()
        .fold((S::default(), S::default()), |(mut to_live, mut to_die), change| {
            match change.destiny {
                Destiny::Live => to_live.insert(change.pos),
                Destiny::Die => to_die.insert(change.pos),
            }
            (to_live, to_die)
        });
    board.live.difference(&to_die).union(&to_live)
}

pub fn bounding_box<S>(live: &S) -> BoundingBox
where
    S: CellSet,
{
    live.iter()
        .fold(None, |bounds: Option<BoundingBox>, pos| {
            Some(match bounds {
                None => BoundingBox { min: pos, max: pos },
                Some(BoundingBox { min, max }) => BoundingBox {
                    min: pos!(min.x.min(pos.x), min.y.min(pos.y)),
                    max: pos!(max.x.max(pos.x), max.y.max(pos.y)),
                },
            })
        })
        .unwrap_or(BoundingBox::EMPTY)
}

/// every cell adjacent to a changed cell, the only cells that can change next.
pub fn neighbors_of<S>(changes: &[Change]) -> S
where
    S: CellSet,
{
    changes
        .iter()
        .flat_map(|change| change.pos.neighbors())
        .collect()
}

pub fn live_neighbor_count<S>(live: &S, pos: Pos) -> usize
where
    S: CellSet,
{
    pos.neighbors()
        .into_iter()
        .filter(|neighbor| live.contains(*neighbor))
        .count()
}

fn compute_change<S>(live: &S, pos: Pos) -> Option<Change>
where
    S: CellSet,
{
    match (live.contains(pos), live_neighbor_count(live, pos)) {
        (_, 2) => None,
        (false, 3) => Some(Change::live(pos)),
        (true, count) if count != 3 => Some(Change::die(pos)),
        _ => None,
    }
}

/// the changes the next generation needs, limited to the `affected` cells.
pub fn compute_changes<S>(live: &S, affected: &S) -> Vec<Change>
where
    S: CellSet,
{
    affected
        .iter()
        .filter_map(|pos| compute_change(live, pos))
        .collect()
}

pub fn advance<S>(board: &Board<S>) -> Board<S>
where
    S: CellSet,
{
    let live = apply_changes(board);
    let affected: S = neighbors_of(&board.updates);
    let updates = compute_changes(&live, &affected);
    Board { live, updates }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub generations: u32,
    pub elapsed: Duration,
    pub population: usize,
}

impl RunReport {
    /// whole generations per second, computed on elapsed milliseconds.
    pub fn throughput(&self) -> u128 {
        let millis = self.elapsed.as_millis().max(1);
        u128::from(self.generations) * 1000 / millis
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} generations /sec", self.throughput())
    }
}

/// runs `config.generations` generations from the r-pentomino, calling
/// `observe` on every produced board. stops at the first observer failure.
pub fn simulate<S>(
    config: &Config,
    mut observe: impl FnMut(&Board<S>) -> Result<()>,
) -> Result<RunReport>
where
    S: CellSet,
{
    let start = Instant::now();
    let mut board: Board<S> = Board::seed(R_PENTOMINO);
    for generation in 0..config.generations {
        board = advance(&board);
        trace!(
            generation,
            population = board.population(),
            updates = board.updates.len(),
            "advanced"
        );
        observe(&board)?;
    }
    let report = RunReport {
        generations: config.generations,
        elapsed: start.elapsed(),
        population: board.population(),
    };
    debug!(
        generations = report.generations,
        elapsed_ms = report.elapsed.as_millis() as u64,
        population = report.population,
        "run finished"
    );
    Ok(report)
}

use std::fmt::Debug;

use crate::Pos;

/// a set of live cell positions.
///
/// `union` and `difference` build new sets, the engine never mutates the
/// live set of a generation once it has been produced.
pub trait CellSet: Default + Clone + Debug + FromIterator<Pos> {
    fn insert(&mut self, pos: Pos);
    fn contains(&self, pos: Pos) -> bool;
    fn len(&self) -> usize;
    fn iter(&self) -> Box<dyn Iterator<Item = Pos> + '_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for pos in other.iter() {
            result.insert(pos);
        }
        result
    }

    fn difference(&self, other: &Self) -> Self {
        self.iter().filter(|pos| !other.contains(*pos)).collect()
    }

    /// positions sorted by (x, y), mostly for comparisons in tests.
    fn sorted(&self) -> Vec<Pos> {
        let mut result: Vec<_> = self.iter().collect();
        result.sort_unstable();
        result
    }
}

pub use chunked_set::{snap, ChunkedSet};
mod chunked_set;

pub use hashed_set::HashedSet;
mod hashed_set;

use std::collections::HashSet;

use metrohash::MetroBuildHasher;

use crate::{CellSet, Pos};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashedSet {
    cells: HashSet<Pos, MetroBuildHasher>,
}

impl HashedSet {
    pub fn with_capacity(capacity: usize) -> Self {
        let cells = HashSet::with_capacity_and_hasher(capacity, MetroBuildHasher::default());
        Self { cells }
    }
}

impl FromIterator<Pos> for HashedSet {
    fn from_iter<T: IntoIterator<Item = Pos>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut result = Self::with_capacity(iter.size_hint().0);
        result.cells.extend(iter);
        result
    }
}

impl CellSet for HashedSet {
    fn insert(&mut self, pos: Pos) {
        self.cells.insert(pos);
    }

    fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Pos> + '_> {
        Box::new(self.cells.iter().copied())
    }

    fn union(&self, other: &Self) -> Self {
        let cells = self.cells.union(&other.cells).copied().collect();
        Self { cells }
    }

    fn difference(&self, other: &Self) -> Self {
        let cells = self.cells.difference(&other.cells).copied().collect();
        Self { cells }
    }
}

use std::collections::HashMap;

use metrohash::MetroBuildHasher;

use crate::{pos, CellSet, Pos};

const CHUNK_SIZE: usize = 16;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Chunk {
    cells: [[bool; CHUNK_SIZE]; CHUNK_SIZE],
    population: usize,
}

impl Chunk {
    fn contains(&self, local: Pos) -> bool {
        self.cells[local.x as usize][local.y as usize]
    }

    /// returns true if the cell was not already set.
    fn insert(&mut self, local: Pos) -> bool {
        let cell = &mut self.cells[local.x as usize][local.y as usize];
        let inserted = !*cell;
        if inserted {
            *cell = true;
            self.population += 1;
        }
        inserted
    }

    fn actives(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(y, alive)| alive.then_some(pos!(x as i64, y as i64)))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ChunkPos(Pos);

/// live cells bucketed in square chunks, only chunks holding at least one
/// cell are stored.
#[derive(Debug, Clone, Default)]
pub struct ChunkedSet {
    chunks: HashMap<ChunkPos, Chunk, MetroBuildHasher>,
    population: usize,
}

impl ChunkedSet {
    /// gets the position of the chunk containing the passed position
    fn chunk_pos(Pos { x, y }: Pos) -> ChunkPos {
        let x = snap(x, CHUNK_SIZE as i64);
        let y = snap(y, CHUNK_SIZE as i64);
        ChunkPos(pos!(x, y))
    }

    /// gets the position of a cell local to its parent chunk.
    fn local_pos(pos: Pos) -> Pos {
        let ChunkPos(chunk_pos) = Self::chunk_pos(pos);
        pos - chunk_pos
    }

    fn chunk(&self, pos: Pos) -> Option<&Chunk> {
        self.chunks.get(&Self::chunk_pos(pos))
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

/// rounds `n` down to a multiple of `step`, towards negative infinity.
pub fn snap(n: i64, step: i64) -> i64 {
    n - n.rem_euclid(step)
}

#[test]
fn test_snap() {
    assert_eq!(snap(0, 10), 0);
    assert_eq!(snap(1, 10), 0);
    assert_eq!(snap(-1, 10), -10);
    assert_eq!(snap(10, 10), 10);
    assert_eq!(snap(11, 10), 10);
    assert_eq!(snap(-10, 10), -10);
    assert_eq!(snap(-11, 10), -20);
    assert_eq!(snap(i64::MIN, 16), i64::MIN);
    assert_eq!(snap(i64::MAX, 16), i64::MAX - 15);
}

impl FromIterator<Pos> for ChunkedSet {
    fn from_iter<T: IntoIterator<Item = Pos>>(iter: T) -> Self {
        let mut result = Self::default();
        for pos in iter {
            result.insert(pos);
        }
        result
    }
}

impl CellSet for ChunkedSet {
    fn insert(&mut self, pos: Pos) {
        let local = Self::local_pos(pos);
        let chunk = self.chunks.entry(Self::chunk_pos(pos)).or_default();
        if chunk.insert(local) {
            self.population += 1;
        }
    }

    fn contains(&self, pos: Pos) -> bool {
        self.chunk(pos)
            .map(|chunk| chunk.contains(Self::local_pos(pos)))
            .unwrap_or(false)
    }

    fn len(&self) -> usize {
        self.population
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Pos> + '_> {
        Box::new(
            self.chunks
                .iter()
                .flat_map(|(ChunkPos(chunk_pos), chunk)| {
                    chunk.actives().map(move |pos| *chunk_pos + pos)
                }),
        )
    }

    fn difference(&self, other: &Self) -> Self {
        let mut result = Self::default();
        for (chunk_pos, chunk) in &self.chunks {
            match other.chunks.get(chunk_pos) {
                None => {
                    result.population += chunk.population;
                    result.chunks.insert(*chunk_pos, chunk.clone());
                }
                Some(removed) => {
                    let mut kept = Chunk::default();
                    for local in chunk.actives().filter(|local| !removed.contains(*local)) {
                        kept.insert(local);
                    }
                    if kept.population > 0 {
                        result.population += kept.population;
                        result.chunks.insert(*chunk_pos, kept);
                    }
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_across_chunk_borders() {
        let cells = [pos!(-1, -1), pos!(0, 0), pos!(15, 15), pos!(16, 16), pos!(-17, 3)];
        let set: ChunkedSet = cells.into_iter().collect();

        assert_eq!(set.len(), 5);
        assert_eq!(set.chunk_count(), 4);
        for pos in cells {
            assert!(set.contains(pos), "expected {pos:?} in set");
        }
        assert!(!set.contains(pos!(1, 1)));
        assert!(!set.contains(pos!(-16, 3)));
    }

    #[test]
    fn cells_at_coordinate_bounds() {
        let cells = [pos!(i64::MIN, i64::MIN), pos!(i64::MAX, i64::MAX), pos!(i64::MAX, 0)];
        let set: ChunkedSet = cells.into_iter().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.chunk_count(), 3);
        for pos in cells {
            assert!(set.contains(pos), "expected {pos:?} in set");
        }
        let mut expected = cells.to_vec();
        expected.sort_unstable();
        assert_eq!(set.sorted(), expected);
    }

    #[test]
    fn difference_drops_emptied_chunks() {
        let a: ChunkedSet = [pos!(0, 0), pos!(20, 20)].into_iter().collect();
        let b: ChunkedSet = [pos!(20, 20), pos!(40, 40)].into_iter().collect();

        let diff = a.difference(&b);
        assert_eq!(diff.sorted(), vec![pos!(0, 0)]);
        assert_eq!(diff.chunk_count(), 1);
        assert_eq!(diff.len(), 1);

        let union = a.union(&b);
        assert_eq!(union.len(), 3);
        assert_eq!(union.sorted(), vec![pos!(0, 0), pos!(20, 20), pos!(40, 40)]);
    }

    #[test]
    fn duplicate_insert_keeps_population() {
        let mut set = ChunkedSet::default();
        set.insert(pos!(3, -3));
        set.insert(pos!(3, -3));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![pos!(3, -3)]);
    }
}

use std::ops::{Add, Sub};

/// a cell of the grid. arithmetic wraps at the `i64` bounds, so the grid
/// closes on itself instead of overflowing.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        $crate::Pos { x: $x, y: $y }
    };
}

/// offsets of the moore neighborhood, x major, self excluded.
const OFFSETS: [Pos; 8] = [
    pos!(-1, -1),
    pos!(-1, 0),
    pos!(-1, 1),
    pos!(0, -1),
    pos!(0, 1),
    pos!(1, -1),
    pos!(1, 0),
    pos!(1, 1),
];

impl Pos {
    /// the eight cells surrounding this one, always in the same order:
    /// x ascending, then y ascending within a column.
    pub fn neighbors(self) -> [Pos; 8] {
        OFFSETS.map(|offset| self + offset)
    }
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        pos!(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

#[test]
fn test_neighbors() {
    let expected = [
        pos!(-1, -1),
        pos!(-1, 0),
        pos!(-1, 1),
        pos!(0, -1),
        pos!(0, 1),
        pos!(1, -1),
        pos!(1, 0),
        pos!(1, 1),
    ];
    assert_eq!(pos!(0, 0).neighbors(), expected);
    let shifted = expected.map(|p| p + pos!(1, 1));
    assert_eq!(pos!(1, 1).neighbors(), shifted);
    assert!(!pos!(5, -3).neighbors().contains(&pos!(5, -3)));
}

#[test]
fn test_neighbors_wrap_at_bounds() {
    let corner = pos!(i64::MAX, i64::MIN);
    let neighbors = corner.neighbors();
    assert!(neighbors.contains(&pos!(i64::MIN, i64::MAX)));
    assert!(neighbors.contains(&pos!(i64::MAX - 1, i64::MIN + 1)));
    assert_eq!(pos!(i64::MIN, 0) - pos!(1, 0), pos!(i64::MAX, 0));
}

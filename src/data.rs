use std::fmt::{self, Display, Formatter};
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }

    /// Manhattan distance.
    pub fn dist(self, other: Pos) -> i32 {
        (self.r - other.r).abs() + (self.c - other.c).abs()
    }
}

/// Expansion order is part of the solver's observable behavior
/// (which of several equally cheap paths gets found) - keep it fixed:
/// right, left, down, up.
pub const DIRECTIONS: [Dir; 4] = [Dir::Right, Dir::Left, Dir::Down, Dir::Up];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Right,
    Left,
    Down,
    Up,
}

impl Dir {
    pub(crate) fn offset(self) -> (i32, i32) {
        match self {
            Dir::Right => (0, 1),
            Dir::Left => (0, -1),
            Dir::Down => (1, 0),
            Dir::Up => (-1, 0),
        }
    }

    /// The move letter reported to the caller.
    pub(crate) fn to_char(self) -> char {
        match self {
            Dir::Right => 'r',
            Dir::Left => 'l',
            Dir::Down => 'd',
            Dir::Up => 'u',
        }
    }

    /// Direction implied by a player step from `from` to `to`.
    /// The two positions must be orthogonal neighbors.
    pub(crate) fn between(from: Pos, to: Pos) -> Dir {
        match (to.r - from.r, to.c - from.c) {
            (0, 1) => Dir::Right,
            (0, -1) => Dir::Left,
            (1, 0) => Dir::Down,
            (-1, 0) => Dir::Up,
            _ => unreachable!("non-adjacent positions {:?} -> {:?}", from, to),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}

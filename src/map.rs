use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Pos;
use crate::vec2d::Vec2d;

pub(crate) const WALL: char = '#';
pub(crate) const TARGET: char = '.';
pub(crate) const PLAYER: char = '@';
pub(crate) const CRATE: char = '$';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapCell {
    Empty,
    Wall,
    Goal,
}

/// The static facts of one puzzle: wall layout, goal cells and bounds.
/// Built once per solve, never mutated.
#[derive(Clone)]
pub struct GoalMap {
    pub(crate) grid: Vec2d<MapCell>,
    pub(crate) goals: Vec<Pos>,
}

impl GoalMap {
    /// Builds the map from the engine's character grid:
    /// `#` is a wall, `.` a goal, anything else open floor.
    /// Rows shorter than `width` are padded with open floor.
    pub fn from_chars(width: usize, height: usize, grid: &[Vec<char>]) -> Self {
        let mut cells = Vec2d::new(height as i32, width as i32, MapCell::Empty);
        let mut goals = Vec::new();

        for r in 0..height {
            let row: &[char] = grid.get(r).map(Vec::as_slice).unwrap_or(&[]);
            for c in 0..width {
                let pos = Pos::new(r as i32, c as i32);
                match row.get(c) {
                    Some(&WALL) => cells[pos] = MapCell::Wall,
                    Some(&TARGET) => {
                        cells[pos] = MapCell::Goal;
                        goals.push(pos);
                    }
                    _ => {}
                }
            }
        }

        GoalMap { grid: cells, goals }
    }

    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        self.grid.contains(pos)
    }

    /// Out-of-bounds cells are not walls - they fail `in_bounds` instead.
    pub fn is_wall(&self, pos: Pos) -> bool {
        self.grid.contains(pos) && self.grid[pos] == MapCell::Wall
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.grid.contains(pos) && self.grid[pos] == MapCell::Goal
    }

    pub fn goals(&self) -> &[Pos] {
        &self.goals
    }
}

impl Display for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.grid.rows() {
            for c in 0..self.grid.cols() {
                let cell = match self.grid[Pos::new(r, c)] {
                    MapCell::Empty => ' ',
                    MapCell::Wall => WALL,
                    MapCell::Goal => TARGET,
                };
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

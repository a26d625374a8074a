//! A heuristic best-first solver for crate-pushing warehouse puzzles.
//!
//! The caller (the surrounding game engine, which is not part of this
//! crate) hands over two character grids - the static layout and the
//! movable items - and gets back one string of `u`/`d`/`l`/`r` player
//! moves that puts every crate on a target cell, or the fixed
//! [`NO_SOLUTION`] shuffle when the search exhausts its options.

// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod data;
pub mod map;
pub mod solver;
pub mod state;

mod vec2d;

pub use crate::solver::{SolverErr, SolverOk, NO_SOLUTION};

use crate::map::GoalMap;

/// Solves one puzzle.
///
/// `grid` describes the static layout (`#` wall, `.` target, anything
/// else open floor), `items` the movable pieces (`@` player, `$` crate,
/// anything else empty); both are `height` rows of `width` characters.
/// Exactly one player must be present. An unsolvable puzzle is not an
/// error - it returns [`NO_SOLUTION`].
pub fn solve_puzzle(
    width: usize,
    height: usize,
    grid: &[Vec<char>],
    items: &[Vec<char>],
) -> Result<String, SolverErr> {
    solve_puzzle_limited(width, height, grid, items, None)
}

/// Like [`solve_puzzle`] but gives up after `max_expansions` expanded
/// states, reporting [`NO_SOLUTION`]. `None` means unbounded, which is
/// the compatible default - a pathological puzzle can then run for a
/// very long time.
pub fn solve_puzzle_limited(
    width: usize,
    height: usize,
    grid: &[Vec<char>],
    items: &[Vec<char>],
    max_expansions: Option<usize>,
) -> Result<String, SolverErr> {
    let map = GoalMap::from_chars(width, height, grid);
    let initial_state = solver::initial_state(width, height, items)?;

    let solver_ok = solver::solve(&map, &initial_state, max_expansions);
    Ok(solver_ok
        .moves
        .unwrap_or_else(|| NO_SOLUTION.to_string()))
}

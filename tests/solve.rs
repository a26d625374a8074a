mod common;

use sokobot::{solve_puzzle, solve_puzzle_limited, SolverErr, NO_SOLUTION};

use crate::common::{layers, replay_solves};

fn solve(level: &str) -> Result<String, SolverErr> {
    let _ = env_logger::try_init();
    let (width, height, grid, items) = layers(level);
    solve_puzzle(width, height, &grid, &items)
}

#[test]
fn corridor_one_push() {
    assert_eq!(solve("#@$.#").unwrap(), "r");
}

#[test]
fn room_one_push() {
    let level = "
#######
#     #
# @$. #
#     #
#######";
    assert_eq!(solve(level).unwrap(), "r");
}

#[test]
fn already_solved_returns_empty_string() {
    let level = "
#####
#@ *#
#####";
    assert_eq!(solve(level).unwrap(), "");
}

#[test]
fn no_crates_returns_empty_string() {
    let level = "
#####
#@ .#
#####";
    assert_eq!(solve(level).unwrap(), "");
}

#[test]
fn missing_player_fails_fast() {
    assert_eq!(solve("# $ .#").unwrap_err(), SolverErr::NoPlayer);
}

#[test]
fn trapped_crate_returns_sentinel() {
    let moves = solve("#$@.#").unwrap();
    assert_eq!(moves, NO_SOLUTION);
    assert_eq!(moves.len(), 76);
}

#[test]
fn two_crates_replay_to_solved() {
    let level = "
#######
#@ $ .#
# $   #
# .   #
#######";
    let moves = solve(level).unwrap();
    assert_ne!(moves, NO_SOLUTION);
    assert!(replay_solves(level, &moves), "moves: {}", moves);
}

#[test]
fn wider_room_replay_to_solved() {
    let level = "
########
#.  $ @#
#   $  #
# .    #
########";
    let moves = solve(level).unwrap();
    assert_ne!(moves, NO_SOLUTION);
    assert!(replay_solves(level, &moves), "moves: {}", moves);
}

#[test]
fn solution_never_walks_through_walls() {
    // replay_solves panics on any illegal step or push
    let level = "
#######
# . ###
# $$ .#
#  @  #
#######";
    let moves = solve(level).unwrap();
    assert_ne!(moves, NO_SOLUTION);
    assert!(replay_solves(level, &moves), "moves: {}", moves);
}

#[test]
fn zero_budget_reports_no_solution() {
    let level = "
#######
#@ $ .#
#######";
    let (width, height, grid, items) = layers(level);

    let moves = solve_puzzle_limited(width, height, &grid, &items, Some(0)).unwrap();
    assert_eq!(moves, NO_SOLUTION);

    // the goal test still runs on the root before the budget applies
    let solved = "
#####
#@ *#
#####";
    let (width, height, grid, items) = layers(solved);
    let moves = solve_puzzle_limited(width, height, &grid, &items, Some(0)).unwrap();
    assert_eq!(moves, "");
}

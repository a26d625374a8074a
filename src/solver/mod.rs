mod a_star;

pub use self::a_star::{SearchNode, Stats};

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::debug;
use typed_arena::Arena;

use crate::data::{Dir, Pos, DIRECTIONS};
use crate::map::{GoalMap, CRATE, PLAYER};
use crate::state::State;

/// Returned instead of an error when the search exhausts the frontier.
/// The consuming game engine treats this fixed 76-move shuffle as the
/// "no solution" answer - the value is a compatibility contract,
/// do not change it.
pub const NO_SOLUTION: &str =
    "lrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlrlr";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    NoPlayer,
    MultiplePlayers,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::NoPlayer => write!(f, "Invalid input - no player"),
            SolverErr::MultiplePlayers => write!(f, "Invalid input - more than one player"),
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// `None` means the frontier was exhausted (or the expansion budget
    /// ran out) without reaching a goal state.
    pub moves: Option<String>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(moves: Option<String>, stats: Stats) -> Self {
        Self { moves, stats }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => writeln!(f, "Moves: {}", moves.len())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

/// Locates the player and crates in the engine's items grid
/// (`@` player, `$` crate, anything else empty).
pub(crate) fn initial_state(
    width: usize,
    height: usize,
    items: &[Vec<char>],
) -> Result<State, SolverErr> {
    let mut player_pos = None;
    let mut crates = Vec::new();

    for (r, row) in items.iter().take(height).enumerate() {
        for (c, &item) in row.iter().take(width).enumerate() {
            let pos = Pos::new(r as i32, c as i32);
            match item {
                PLAYER => {
                    if player_pos.replace(pos).is_some() {
                        return Err(SolverErr::MultiplePlayers);
                    }
                }
                CRATE => crates.push(pos),
                _ => {}
            }
        }
    }

    let player_pos = player_pos.ok_or(SolverErr::NoPlayer)?;
    Ok(State::new(player_pos, crates))
}

/// Runs the best-first search on one puzzle. `max_expansions` bounds how
/// many states get expanded before giving up; `None` searches until the
/// frontier is empty, which is the original, compatible behavior.
pub fn solve(map: &GoalMap, initial_state: &State, max_expansions: Option<usize>) -> SolverOk {
    debug!("solving level:\n{}", map);
    let arena = Arena::new();
    let (moves, stats) = search(&arena, map, initial_state, max_expansions);
    debug!("search done:\n{:?}", stats);
    SolverOk::new(moves, stats)
}

fn search<'a>(
    arena: &'a Arena<SearchNode<'a>>,
    map: &GoalMap,
    initial_state: &State,
    max_expansions: Option<usize>,
) -> (Option<String>, Stats) {
    let mut stats = Stats::new();

    let mut to_visit = BinaryHeap::new();
    let mut seen = FnvHashSet::default();

    let h = heuristic(map, initial_state);
    let start: &SearchNode<'_> =
        arena.alloc(SearchNode::new(initial_state.clone(), None, 0, h));
    seen.insert(start.state.clone());
    stats.add_created(start);
    to_visit.push(Reverse(start));

    let mut expansions = 0usize;
    while let Some(Reverse(cur_node)) = to_visit.pop() {
        if stats.add_unique_visited(cur_node) {
            debug!("visited new depth: {}", cur_node.dist);
        }

        if solved(map, &cur_node.state) {
            debug!("solved, backtracking moves");
            return (Some(backtrack_moves(cur_node)), stats);
        }

        if let Some(limit) = max_expansions {
            if expansions >= limit {
                debug!("expansion budget of {} used up, giving up", limit);
                break;
            }
        }
        expansions += 1;

        for neighbor_state in expand(map, &cur_node.state) {
            // a config is marked seen when generated, not when visited -
            // later cheaper arrivals are dropped too (every move costs 1,
            // so this can cost optimality but never termination)
            if seen.contains(&neighbor_state) {
                stats.add_dropped_duplicate(cur_node.dist + 1);
                continue;
            }
            seen.insert(neighbor_state.clone());

            let h = heuristic(map, &neighbor_state);
            let next_node: &SearchNode<'_> =
                arena.alloc(SearchNode::new(neighbor_state, Some(cur_node), cur_node.dist + 1, h));
            stats.add_created(next_node);
            to_visit.push(Reverse(next_node));
        }
    }

    (None, stats)
}

/// All states one player step away: walks onto open floor and legal
/// crate pushes, in the fixed right, left, down, up order.
fn expand(map: &GoalMap, state: &State) -> Vec<State> {
    let mut new_states = Vec::new();

    for &dir in &DIRECTIONS {
        let new_player_pos = state.player_pos + dir;
        if !map.in_bounds(new_player_pos) || map.is_wall(new_player_pos) {
            continue;
        }

        if let Some(crate_index) = state.crates.iter().position(|&b| b == new_player_pos) {
            // push attempt
            let push_dest = new_player_pos + dir;
            if !map.in_bounds(push_dest)
                || map.is_wall(push_dest)
                || state.crates.contains(&push_dest)
            {
                continue;
            }

            let mut new_crates = state.crates.clone();
            new_crates[crate_index] = push_dest;
            if is_dead_end(map, push_dest, &new_crates) {
                // discarded outright, the state never reaches the frontier
                continue;
            }
            new_states.push(State::new(new_player_pos, new_crates));
        } else {
            // plain walk
            new_states.push(State::new(new_player_pos, state.crates.clone()));
        }
    }

    new_states
}

/// Estimated moves remaining: each crate's Manhattan distance to its
/// nearest goal, summed, plus the player's distance to the nearest
/// crate. Shared goals can be double-counted and the player term isn't
/// a lower bound - this is a tuned estimate, not an admissible one, and
/// the move strings it produces are part of the observable behavior.
fn heuristic(map: &GoalMap, state: &State) -> i32 {
    let mut goal_dist_sum = 0;
    for &crate_pos in &state.crates {
        let min = map
            .goals()
            .iter()
            .map(|&goal| crate_pos.dist(goal))
            .min()
            .unwrap_or(0);
        goal_dist_sum += min;
    }

    // no crates means no player term - must not fault on an empty set
    let closest_crate = state
        .crates
        .iter()
        .map(|&crate_pos| state.player_pos.dist(crate_pos))
        .min()
        .unwrap_or(0);

    goal_dist_sum + closest_crate
}

/// Local deadlock rule, checked right after a crate lands on
/// `crate_pos`: off-goal and with every in-bounds cell of the 3x3
/// neighborhood blocked by a wall or another crate, the crate can never
/// move again. Deliberately weak - it knows nothing about corridor or
/// multi-crate deadlocks and must stay that way.
fn is_dead_end(map: &GoalMap, crate_pos: Pos, crates: &[Pos]) -> bool {
    if map.is_goal(crate_pos) {
        return false;
    }

    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let neighbor = Pos::new(crate_pos.r + dr, crate_pos.c + dc);
            // out-of-bounds neighbors count neither way
            if !map.in_bounds(neighbor) {
                continue;
            }
            if !map.is_wall(neighbor) && !crates.contains(&neighbor) {
                // one open neighbor is enough
                return false;
            }
        }
    }

    true
}

fn solved(map: &GoalMap, state: &State) -> bool {
    // every crate on a goal - goals without a crate are fine
    for &pos in &state.crates {
        if !map.is_goal(pos) {
            return false;
        }
    }
    true
}

fn backtrack_moves(goal_node: &SearchNode<'_>) -> String {
    let mut moves = Vec::new();

    let mut node = goal_node;
    while let Some(prev_node) = node.prev {
        let dir = Dir::between(prev_node.state.player_pos, node.state.player_pos);
        moves.push(dir.to_char());
        node = prev_node;
    }

    moves.reverse();
    moves.into_iter().collect()
}

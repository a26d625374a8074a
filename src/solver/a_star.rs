use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::state::State;

/// One search node. Nodes live in a `typed_arena::Arena` owned by the
/// search call; `prev` points strictly toward the root, so the node
/// graph is a tree and reconstructing moves is a plain parent walk.
#[derive(Debug)]
pub struct SearchNode<'a> {
    pub state: State,
    pub prev: Option<&'a SearchNode<'a>>,
    /// Moves from the root to this node.
    pub dist: i32,
    /// Estimated moves remaining.
    pub h: i32,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(state: State, prev: Option<&'a SearchNode<'a>>, dist: i32, h: i32) -> Self {
        SearchNode {
            state,
            prev,
            dist,
            h,
        }
    }

    /// `dist + h` is the sole frontier ordering key.
    fn f(&self) -> i32 {
        self.dist + self.h
    }
}

impl<'a> PartialOrd for SearchNode<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> Ord for SearchNode<'a> {
    fn cmp(&self, other: &Self) -> Ordering {
        // natural order - the search loop wraps nodes in Reverse
        // to turn BinaryHeap into a min-heap
        self.f().cmp(&other.f())
    }
}

impl<'a> PartialEq for SearchNode<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.f() == other.f()
    }
}

impl<'a> Eq for SearchNode<'a> {}

/// Per-depth node counts. Diagnostics only - nothing in the search
/// consults it.
#[derive(Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum::<i32>()
    }

    pub fn total_unique_visited(&self) -> i32 {
        self.visited_states.iter().sum::<i32>()
    }

    pub fn total_dropped_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum::<i32>()
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node.dist)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.visited_states, node.dist)
    }

    /// Duplicates are dropped when generated, before a node exists,
    /// so this takes the depth the child would have had.
    pub(crate) fn add_dropped_duplicate(&mut self, depth: i32) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    fn add(counts: &mut Vec<i32>, depth: i32) -> bool {
        let mut ret = false;

        // while because some depths might be skipped
        while depth as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth as usize] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "dropped duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(
            f,
            "total created: {}",
            self.total_created().separated_string()
        )?;
        writeln!(
            f,
            "total dropped duplicates: {}",
            self.total_dropped_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "total unique visited: {}",
            self.total_unique_visited().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let duplicates = self.total_dropped_duplicates();
        let visited = self.total_unique_visited();
        let left = created - visited;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(
            f,
            "Unique states visited total: {}",
            visited.separated_string()
        )?;
        writeln!(
            f,
            "Duplicates dropped at generation: {}",
            duplicates.separated_string()
        )?;
        writeln!(
            f,
            "Created but not visited total: {}",
            left.separated_string()
        )?;
        writeln!(f, "Depth / created / visited:")?;
        for i in 0..self.created_states.len() {
            let visited = if i < self.visited_states.len() {
                self.visited_states[i]
            } else {
                0
            };
            writeln!(
                f,
                "{}: {} / {}",
                i,
                self.created_states[i].separated_string(),
                visited.separated_string()
            )?;
        }
        Ok(())
    }
}

use crate::data::Pos;

/// One logical puzzle configuration. Equality and hashing cover both
/// fields, so a `State` doubles as the duplicate-suppression key:
/// two states reached by different routes compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub player_pos: Pos,
    pub crates: Vec<Pos>,
}

impl State {
    pub fn new(player_pos: Pos, mut crates: Vec<Pos>) -> State {
        // sort to detect equal states when pushes reorder crates
        crates.sort();
        State { player_pos, crates }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_order_does_not_affect_identity() {
        let a = State::new(Pos::new(0, 0), vec![Pos::new(1, 1), Pos::new(2, 2)]);
        let b = State::new(Pos::new(0, 0), vec![Pos::new(2, 2), Pos::new(1, 1)]);
        assert_eq!(a, b);
    }

    #[test]
    fn player_is_part_of_identity() {
        let a = State::new(Pos::new(0, 0), vec![Pos::new(1, 1)]);
        let b = State::new(Pos::new(0, 1), vec![Pos::new(1, 1)]);
        assert_ne!(a, b);
    }
}

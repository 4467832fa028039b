//! Reports on the turns of a [game](crate::game).
//!
//! The display of a report is the message given to a player.

use crate::structures::{frame::Frame, world::WORLD_COUNT};

/// The result of querying a formula on the hidden frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryReport {
    /// The formula is valid at every world.
    Valid,

    /// The formula is valid at some, but not every, world.
    ValidIn(usize),

    /// The formula is valid at no world.
    Invalid,
}

impl QueryReport {
    /// The report for a formula valid at `count` worlds.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => QueryReport::Invalid,
            n if n < WORLD_COUNT => QueryReport::ValidIn(n),
            _ => QueryReport::Valid,
        }
    }
}

impl std::fmt::Display for QueryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryReport::Valid => write!(f, "valid!"),
            QueryReport::ValidIn(1) => write!(f, "valid in 1 world, invalid in the rest."),
            QueryReport::ValidIn(n) => write!(f, "valid in {n} worlds, invalid in the rest."),
            QueryReport::Invalid => write!(f, "invalid."),
        }
    }
}

/// The result of guessing the hidden frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessReport {
    /// The guess is the hidden frame, up to relabelling, and the hidden frame is given.
    Correct(Frame),

    Incorrect,
}

impl std::fmt::Display for GuessReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuessReport::Correct(_) => write!(f, "correct! congratulations!!"),
            GuessReport::Incorrect => write!(f, "incorrect."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        assert_eq!(QueryReport::from_count(0), QueryReport::Invalid);
        assert_eq!(QueryReport::from_count(3), QueryReport::ValidIn(3));
        assert_eq!(QueryReport::from_count(WORLD_COUNT), QueryReport::Valid);
        assert_eq!(
            QueryReport::from_count(2).to_string(),
            "valid in 2 worlds, invalid in the rest."
        );
    }
}

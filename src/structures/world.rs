/*!
Worlds, the points of a frame.

There are exactly four worlds, written `a`, `b`, `c`, and `d`.
The order `a < b < c < d` is fixed and is used to index worlds, to order [relations](crate::structures::relation), and to report the worlds at which a formula is valid.

```rust
# use kripke_guess::structures::world::{World, WORLDS};
assert_eq!(World::from_letter('c'), Some(World::C));
assert_eq!(World::C.index(), 2);
assert_eq!(WORLDS[3].letter(), 'd');
assert_eq!(World::from_letter('e'), None);
```
*/

/// A count of the worlds of every frame.
pub const WORLD_COUNT: usize = 4;

/// A world of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum World {
    A,
    B,
    C,
    D,
}

/// All worlds, in order.
pub const WORLDS: [World; WORLD_COUNT] = [World::A, World::B, World::C, World::D];

impl World {
    /// The position of the world in [WORLDS].
    pub fn index(&self) -> usize {
        match self {
            World::A => 0,
            World::B => 1,
            World::C => 2,
            World::D => 3,
        }
    }

    /// The world at `index` of [WORLDS], if any.
    pub fn from_index(index: usize) -> Option<Self> {
        WORLDS.get(index).copied()
    }

    /// The letter used to write the world.
    pub fn letter(&self) -> char {
        match self {
            World::A => 'a',
            World::B => 'b',
            World::C => 'c',
            World::D => 'd',
        }
    }

    /// The world written with `letter`, if any.
    pub fn from_letter(letter: char) -> Option<Self> {
        WORLDS.into_iter().find(|world| world.letter() == letter)
    }
}

impl std::fmt::Display for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_agrees_with_order() {
        for (index, world) in WORLDS.iter().enumerate() {
            assert_eq!(world.index(), index);
            assert_eq!(World::from_index(index), Some(*world));
        }
        assert_eq!(World::from_index(WORLD_COUNT), None);
        assert!(WORLDS.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

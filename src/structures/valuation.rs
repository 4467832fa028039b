/*!
A valuation, aka. an assignment of truth values to atoms at worlds.

A valuation is a set of (world, atom) pairs, read as: the atom is true at the world.
Pairs absent from the set are false.

As there are four worlds and four atoms, a valuation is represented as sixteen bits, with the pair (*w*, *p*) at bit `4 · w + p` (using the indices of the world and atom).

# Enumeration

[Valuations] iterates over every valuation which differs only on some given atoms, with all other atoms false at every world.
For *k* atoms this is the power set of the 4 · *k* relevant pairs, and so 2^(4 · *k*) valuations.
With no atoms there is exactly one valuation, the empty valuation.

```rust
# use kripke_guess::structures::{atom::Atom, valuation::Valuations};
assert_eq!(Valuations::over(&[]).count(), 1);
assert_eq!(Valuations::over(&[Atom::P]).count(), 16);
assert_eq!(Valuations::over(&[Atom::P, Atom::S]).count(), 256);
```
*/

use crate::structures::{
    atom::{Atom, ATOMS, ATOM_COUNT},
    world::{World, WORLDS},
};

/// A set of (world, atom) pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Valuation {
    pairs: u16,
}

impl Valuation {
    fn bit(world: World, atom: Atom) -> usize {
        world.index() * ATOM_COUNT + atom.index()
    }

    /// Whether `atom` is true at `world`.
    pub fn holds(&self, world: World, atom: Atom) -> bool {
        self.pairs & (1 << Self::bit(world, atom)) != 0
    }

    /// Makes `atom` true at `world`.
    pub fn set(&mut self, world: World, atom: Atom) {
        self.pairs |= 1 << Self::bit(world, atom);
    }

    /// The pairs of the valuation, ordered by world and then atom.
    pub fn pairs(&self) -> impl Iterator<Item = (World, Atom)> + '_ {
        WORLDS.into_iter().flat_map(move |world| {
            ATOMS
                .into_iter()
                .filter(move |atom| self.holds(world, *atom))
                .map(move |atom| (world, atom))
        })
    }
}

impl FromIterator<(World, Atom)> for Valuation {
    fn from_iter<I: IntoIterator<Item = (World, Atom)>>(iter: I) -> Self {
        let mut valuation = Valuation::default();
        for (world, atom) in iter {
            valuation.set(world, atom);
        }
        valuation
    }
}

/// An iterator over all valuations of some atoms.
pub struct Valuations {
    /// The bit of each relevant (world, atom) pair in a valuation.
    bits: Vec<usize>,

    /// The next subset of the relevant pairs, or [None] if exhausted.
    next: Option<u32>,
}

impl Valuations {
    /// All valuations over the given atoms.
    /// Duplicate atoms are ignored.
    pub fn over(atoms: &[Atom]) -> Self {
        let mut atoms = atoms.to_vec();
        atoms.sort_unstable();
        atoms.dedup();

        let bits = WORLDS
            .into_iter()
            .flat_map(|world| atoms.iter().map(move |atom| Valuation::bit(world, *atom)))
            .collect();

        Valuations {
            bits,
            next: Some(0),
        }
    }

    /// A count of the valuations, in total.
    pub fn total(&self) -> u32 {
        1 << self.bits.len()
    }
}

impl Iterator for Valuations {
    type Item = Valuation;

    fn next(&mut self) -> Option<Self::Item> {
        let subset = self.next?;

        let mut valuation = Valuation::default();
        for (position, bit) in self.bits.iter().enumerate() {
            if subset & (1 << position) != 0 {
                valuation.pairs |= 1 << bit;
            }
        }

        self.next = match subset + 1 < self.total() {
            true => Some(subset + 1),
            false => None,
        };

        Some(valuation)
    }
}

/*!
Relations, aka. accessibility edges between worlds.

A relation is an ordered pair of worlds, written `aRb` for the relation from `a` to `b`.

The sixteen relations are totally ordered, row-major, by source and then target:

```text
 0: aRa   1: aRb   2: aRc   3: aRd
 4: bRa   5: bRb   6: bRc   7: bRd
 8: cRa   9: cRb  10: cRc  11: cRd
12: dRa  13: dRb  14: dRc  15: dRd
```

The position of a relation in this order is the bit of the relation in the id of a [frame](crate::structures::frame).
The derived [Ord] on relations agrees with the order, as worlds are ordered and the source is compared first.

```rust
# use kripke_guess::structures::{relation::Relation, world::World};
let relation = Relation::new(World::B, World::B);
assert_eq!(relation.index(), 5);
assert_eq!(Relation::from_index(5), Some(relation));
assert_eq!(relation.to_string(), "bRb");
```
*/

use crate::structures::world::{World, WORLDS, WORLD_COUNT};

/// A count of all relations between worlds.
pub const RELATION_COUNT: usize = WORLD_COUNT * WORLD_COUNT;

/// A relation from some world to some world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Relation {
    /// The world the relation is from.
    from: World,

    /// The world the relation is to.
    to: World,
}

impl Relation {
    pub fn new(from: World, to: World) -> Self {
        Relation { from, to }
    }

    /// The source of the relation.
    pub fn from(&self) -> World {
        self.from
    }

    /// The target of the relation.
    pub fn to(&self) -> World {
        self.to
    }

    /// The position of the relation in the fixed order of relations.
    pub fn index(&self) -> usize {
        self.from.index() * WORLD_COUNT + self.to.index()
    }

    /// The relation at `index` of the fixed order of relations, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= RELATION_COUNT {
            return None;
        }
        let from = World::from_index(index / WORLD_COUNT)?;
        let to = World::from_index(index % WORLD_COUNT)?;
        Some(Relation { from, to })
    }

    /// The relation with both worlds substituted through `permutation`.
    pub fn permuted(&self, permutation: &Permutation) -> Self {
        Relation {
            from: permutation[self.from.index()],
            to: permutation[self.to.index()],
        }
    }
}

/// An iterator over all relations, in order.
pub fn relations() -> impl Iterator<Item = Relation> {
    WORLDS
        .into_iter()
        .flat_map(|from| WORLDS.into_iter().map(move |to| Relation::new(from, to)))
}

/// A relabelling of worlds, mapping the world at index *i* of [WORLDS] to the *i*th element.
pub type Permutation = [World; WORLD_COUNT];

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}R{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major() {
        for (index, relation) in relations().enumerate() {
            assert_eq!(relation.index(), index);
            assert_eq!(Relation::from_index(index), Some(relation));
        }
        assert_eq!(relations().count(), RELATION_COUNT);
        assert_eq!(Relation::from_index(RELATION_COUNT), None);
    }

    #[test]
    fn order_is_index_order() {
        let ordered = relations().collect::<Vec<_>>();
        assert!(ordered.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn permuted_endpoints() {
        let swap_a_c = [World::C, World::B, World::A, World::D];
        let relation = Relation::new(World::A, World::D);
        assert_eq!(
            relation.permuted(&swap_a_c),
            Relation::new(World::C, World::D)
        );
    }
}

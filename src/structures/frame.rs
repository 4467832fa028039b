/*!
Frames, aka. sets of relations over the four worlds.

# Ids

As there are sixteen [relations](crate::structures::relation), a frame is identified with a sixteen bit integer: bit *i* is set *if and only if* the relation at index *i* belongs to the frame.
The identification is a bijection between frames and [0, 2¹⁶), and so:
- Every [FrameId] decodes to a frame (via [From]).
- Decoding from a wider integer is checked, through [Frame::decode].

```rust
# use kripke_guess::structures::{frame::Frame, relation::Relation, world::World::*};
let frame = Frame::from_iter([
    Relation::new(A, A),
    Relation::new(A, B),
    Relation::new(B, B),
]);

// aRa is bit 0, aRb is bit 1, and bRb is bit 5.
assert_eq!(frame.id(), 0b100011);
assert_eq!(Frame::from(frame.id()), frame);

assert!(Frame::decode(65_535).is_ok());
assert!(Frame::decode(65_536).is_err());
```

# Graphs

A frame is a directed graph on the worlds, and [Frame::graph] returns the frame as a [petgraph] graph whose edges are weighted by relations.
This is mostly of use for display, e.g. through [Frame::dot], and as an independent check on [canonical ids](crate::db::canonical).
*/

use std::collections::BTreeSet;

use petgraph::{
    dot::{Config, Dot},
    graphmap::DiGraphMap,
};

use crate::{
    misc::log::targets::{self},
    structures::{
        relation::{self, Permutation, Relation, RELATION_COUNT},
        world::{World, WORLDS, WORLD_COUNT},
    },
    types::err::{self},
};

/// The id of a frame.
pub type FrameId = u16;

/// A count of all frames, and so one more than the largest id.
pub const FRAME_COUNT: usize = 1 << RELATION_COUNT;

/// A set of relations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Frame {
    relations: BTreeSet<Relation>,
}

impl Frame {
    /// The frame with the given id, if the id is within [0, [FRAME_COUNT]).
    pub fn decode(id: usize) -> Result<Self, err::FrameError> {
        match FrameId::try_from(id) {
            Ok(id) => Ok(Frame::from(id)),
            Err(_) => {
                log::warn!(target: targets::FRAME, "Decode of out of range id {id}");
                Err(err::FrameError::IdOutOfRange(id))
            }
        }
    }

    /// The id of the frame.
    pub fn id(&self) -> FrameId {
        self.relations
            .iter()
            .fold(0, |id, relation| id | (1 << relation.index()))
    }

    /// The relations of the frame, in order.
    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.relations.iter()
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    pub fn contains(&self, relation: &Relation) -> bool {
        self.relations.contains(relation)
    }

    /// The worlds accessible from `world`, in order.
    pub fn successors(&self, world: World) -> impl Iterator<Item = World> + '_ {
        let first = Relation::new(world, World::A);
        let last = Relation::new(world, World::D);
        self.relations
            .range(first..=last)
            .map(|relation| relation.to())
    }

    /// The frame with every relation relabelled through `permutation`.
    pub fn permuted(&self, permutation: &Permutation) -> Self {
        self.relations
            .iter()
            .map(|relation| relation.permuted(permutation))
            .collect()
    }

    /// The frame as a directed graph, including worlds with no relation.
    pub fn graph(&self) -> DiGraphMap<World, Relation> {
        let mut graph = DiGraphMap::with_capacity(WORLD_COUNT, self.relations.len());
        for world in WORLDS {
            graph.add_node(world);
        }
        for relation in &self.relations {
            graph.add_edge(relation.from(), relation.to(), *relation);
        }
        graph
    }

    /// The frame in the Graphviz DOT language.
    pub fn dot(&self) -> String {
        let graph = self.graph();
        format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    }
}

impl From<FrameId> for Frame {
    fn from(id: FrameId) -> Self {
        relation::relations()
            .filter(|relation| id & (1 << relation.index()) != 0)
            .collect()
    }
}

impl FromIterator<Relation> for Frame {
    fn from_iter<I: IntoIterator<Item = Relation>>(iter: I) -> Self {
        Frame {
            relations: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Frame {
    /// The frame as a frame specification, e.g. `aRa, aRb, bRb`, or `∅` if the frame has no relations.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.relations.is_empty() {
            return write!(f, "∅");
        }
        let mut relations = self.relations.iter();
        if let Some(relation) = relations.next() {
            write!(f, "{relation}")?;
        }
        for relation in relations {
            write!(f, ", {relation}")?;
        }
        Ok(())
    }
}

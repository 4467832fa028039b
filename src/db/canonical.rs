/*!
A database of frames, up to relabelling of worlds.

Two frames are the same frame up to relabelling when some [permutation](crate::structures::relation::Permutation) of the worlds takes the relations of one frame to the relations of the other.
The frames reachable from a frame by relabelling are the *orbit* of the frame, and the *canonical id* of a frame is the smallest id in the orbit of the frame.

The database stores:
- For every id, the canonical id of the frame with the id.
- The canonical ids, one for each orbit, in ascending order.

# Construction

Ids are examined in ascending order.
Any id already assigned a canonical id is skipped.
Otherwise, the frame of the id is relabelled through each of the twenty four permutations of the worlds, and every id found is assigned the least id found.

An id is only examined when no smaller id in the orbit of the id was examined, and so each examined id is canonical and the canonical ids are found in ascending order.

# Access

The database is built once, the first time it is required, and is read-only after.
[canonical_db] returns the database, building it if required, and [canonical_id] and [all_canonical_ids] read from the database.

```rust
# use kripke_guess::db::canonical::{canonical_id, all_canonical_ids};
# use kripke_guess::parse::parse_frame;
let guess = parse_frame("aRb, bRc").expect("frame");
let hidden = parse_frame("dRa, cRd").expect("frame");
assert_eq!(canonical_id(guess.id()), canonical_id(hidden.id()));

// The directed graphs, with loops, on four unlabelled points.
assert_eq!(all_canonical_ids().len(), 3044);
```
*/

use std::sync::OnceLock;

use crate::{
    generic::permutation::permutations,
    misc::log::targets::{self},
    structures::{
        frame::{Frame, FrameId, FRAME_COUNT},
        relation::Permutation,
        world::WORLDS,
    },
};

/// The canonical id of each frame, and the canonical ids.
pub struct CanonicalDB {
    /// The canonical id of each id, indexed by id.
    mapping: Vec<FrameId>,

    /// Each canonical id, in ascending order.
    canonicals: Vec<FrameId>,

    /// The permutations of the worlds.
    permutations: Vec<Permutation>,
}

/// Every permutation of the worlds, beginning with the identity.
pub fn world_permutations() -> Vec<Permutation> {
    permutations(&WORLDS)
        .into_iter()
        .filter_map(|perm| Permutation::try_from(perm).ok())
        .collect()
}

impl CanonicalDB {
    /// Builds the database, examining every frame.
    pub fn build() -> Self {
        let permutations = world_permutations();

        let mut assigned: Vec<Option<FrameId>> = vec![None; FRAME_COUNT];
        let mut canonicals = Vec::default();

        for (id, frame_id) in (0..FRAME_COUNT).zip(FrameId::MIN..=FrameId::MAX) {
            if assigned[id].is_some() {
                continue;
            }

            let frame = Frame::from(frame_id);
            let orbit = permutations
                .iter()
                .map(|permutation| frame.permuted(permutation).id())
                .collect::<Vec<_>>();

            let canonical = orbit.iter().copied().min().unwrap_or(frame_id);
            for member in orbit {
                assigned[usize::from(member)] = Some(canonical);
            }
            canonicals.push(canonical);
        }

        let mapping = assigned.into_iter().flatten().collect::<Vec<_>>();
        debug_assert_eq!(mapping.len(), FRAME_COUNT);

        log::info!(target: targets::CANONICAL, "{FRAME_COUNT} frames in {} orbits", canonicals.len());

        CanonicalDB {
            mapping,
            canonicals,
            permutations,
        }
    }

    /// The smallest id among the frames which are the frame of `id` up to relabelling.
    pub fn canonical_id(&self, id: FrameId) -> FrameId {
        self.mapping[usize::from(id)]
    }

    /// The canonical ids, one for each orbit, in ascending order.
    pub fn canonicals(&self) -> &[FrameId] {
        &self.canonicals
    }

    /// A count of the orbits.
    pub fn orbit_count(&self) -> usize {
        self.canonicals.len()
    }

    /// Whether the frames of `a` and `b` are the same frame up to relabelling.
    pub fn equivalent(&self, a: FrameId, b: FrameId) -> bool {
        self.canonical_id(a) == self.canonical_id(b)
    }

    /// The distinct ids in the orbit of `id`, in ascending order.
    pub fn orbit(&self, id: FrameId) -> Vec<FrameId> {
        let frame = Frame::from(id);
        let mut orbit = self
            .permutations
            .iter()
            .map(|permutation| frame.permuted(permutation).id())
            .collect::<Vec<_>>();
        orbit.sort_unstable();
        orbit.dedup();
        orbit
    }

    /// The permutations of the worlds, beginning with the identity.
    pub fn permutations(&self) -> &[Permutation] {
        &self.permutations
    }
}

static CANONICAL_DB: OnceLock<CanonicalDB> = OnceLock::new();

/// The canonical database, built on first call.
pub fn canonical_db() -> &'static CanonicalDB {
    CANONICAL_DB.get_or_init(CanonicalDB::build)
}

/// The canonical id of `id`.
pub fn canonical_id(id: FrameId) -> FrameId {
    canonical_db().canonical_id(id)
}

/// The canonical ids, one for each orbit, in ascending order.
pub fn all_canonical_ids() -> &'static [FrameId] {
    canonical_db().canonicals()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutations_of_worlds() {
        let permutations = world_permutations();
        assert_eq!(permutations.len(), 24);
        assert_eq!(permutations[0], WORLDS);
    }

    #[test]
    fn canonicals_are_ascending_and_fixed() {
        let db = canonical_db();
        assert!(db.canonicals().windows(2).all(|pair| pair[0] < pair[1]));
        for canonical in db.canonicals() {
            assert_eq!(db.canonical_id(*canonical), *canonical);
        }
    }

    #[test]
    fn orbits_partition() {
        let db = canonical_db();
        let total = db
            .canonicals()
            .iter()
            .map(|canonical| db.orbit(*canonical).len())
            .sum::<usize>();
        assert_eq!(total, FRAME_COUNT);
    }

    #[test]
    fn small_orbits() {
        let db = canonical_db();
        assert_eq!(db.orbit(0), vec![0]);
        assert_eq!(db.orbit(FrameId::MAX), vec![FrameId::MAX]);
        // A single loop may be at any of the four worlds: aRa, bRb, cRc, dRd.
        assert_eq!(db.orbit(1), vec![1, 1 << 5, 1 << 10, 1 << 15]);
        // A single edge between distinct worlds may be any of the twelve such edges.
        assert_eq!(db.orbit(1 << 1).len(), 12);
    }
}

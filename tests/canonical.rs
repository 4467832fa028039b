use petgraph::{algo::is_isomorphic_matching, Graph};
use rand::{rngs::StdRng, Rng, SeedableRng};

use kripke_guess::{
    db::canonical::{all_canonical_ids, canonical_db, canonical_id},
    parse::parse_frame,
    structures::{
        frame::{Frame, FrameId, FRAME_COUNT},
        world::WORLDS,
    },
};

/// A graph of the frame with loops as node weights, as a check independent of relabelling.
fn looped_graph(frame: &Frame) -> Graph<bool, ()> {
    let mut graph = Graph::new();
    let nodes = WORLDS
        .iter()
        .map(|world| graph.add_node(frame.successors(*world).any(|w| w == *world)))
        .collect::<Vec<_>>();

    for relation in frame.relations() {
        if relation.from() != relation.to() {
            graph.add_edge(nodes[relation.from().index()], nodes[relation.to().index()], ());
        }
    }
    graph
}

mod basic {
    use super::*;

    #[test]
    fn count() {
        assert_eq!(all_canonical_ids().len(), 3044);
        assert_eq!(canonical_db().orbit_count(), 3044);
    }

    #[test]
    fn ids_round_trip() {
        for id in 0..FRAME_COUNT {
            let frame = Frame::decode(id).expect("id");
            assert_eq!(usize::from(frame.id()), id);
        }
        assert!(Frame::decode(FRAME_COUNT).is_err());
    }

    #[test]
    fn canonical_is_least_in_orbit() {
        let db = canonical_db();
        for id in 0..FRAME_COUNT {
            let id = id as FrameId;
            let canonical = canonical_id(id);
            assert_eq!(canonical_id(canonical), canonical);

            let frame = Frame::from(id);
            for permutation in db.permutations() {
                let relabelled = frame.permuted(permutation).id();
                assert!(canonical <= relabelled);
                assert_eq!(canonical_id(relabelled), canonical);
            }
        }
    }

    #[test]
    fn canonicals_ascend() {
        let ids = all_canonical_ids();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ids.first(), Some(&0));
        assert_eq!(ids.last(), Some(&FrameId::MAX));
        assert!(ids.iter().all(|id| canonical_id(*id) == *id));
    }

    #[test]
    fn orbits_partition() {
        let db = canonical_db();
        let total = all_canonical_ids()
            .iter()
            .map(|id| db.orbit(*id).len())
            .sum::<usize>();
        assert_eq!(total, FRAME_COUNT);
    }

    #[test]
    fn relabelled_guess() {
        let hidden = parse_frame("aRb, bRc, cRa, dRd").expect("frame");
        for permutation in canonical_db().permutations() {
            let guess = parse_frame(&hidden.permuted(permutation).to_string()).expect("frame");
            assert_eq!(canonical_id(guess.id()), canonical_id(hidden.id()));
        }

        let reversed = parse_frame("bRa, cRb, aRc, dRd").expect("frame");
        assert_eq!(canonical_id(reversed.id()), canonical_id(hidden.id()));

        let moved_loop = parse_frame("aRb, bRc, cRa, aRa").expect("frame");
        assert_ne!(canonical_id(moved_loop.id()), canonical_id(hidden.id()));
    }

    #[test]
    fn agrees_with_isomorphism() {
        let db = canonical_db();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..400 {
            let a = rng.gen::<FrameId>();
            let b = match rng.gen_bool(0.5) {
                true => {
                    let index = rng.gen_range(0..db.permutations().len());
                    Frame::from(a).permuted(&db.permutations()[index]).id()
                }
                false => rng.gen::<FrameId>(),
            };

            let isomorphic = is_isomorphic_matching(
                &looped_graph(&Frame::from(a)),
                &looped_graph(&Frame::from(b)),
                |x, y| x == y,
                |_, _| true,
            );
            assert_eq!(db.equivalent(a, b), isomorphic, "{a} {b}");
        }
    }
}

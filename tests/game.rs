use kripke_guess::{
    config::Config,
    db::canonical::canonical_id,
    game::Game,
    reports::{GuessReport, QueryReport},
    structures::{
        frame::{Frame, FrameId},
        world::World,
    },
};

fn seeded(seed: u64, turns: u32) -> Game {
    let mut config = Config::default();
    config.seed = Some(seed);
    config.turns.set(turns).expect("turns");
    Game::from_config(config)
}

/// Some frame which is not the hidden frame, up to relabelling.
fn wrong_frame(game: &Game) -> Frame {
    let full = Frame::from(FrameId::MAX);
    match canonical_id(game.frame().id()) == canonical_id(full.id()) {
        true => Frame::default(),
        false => full,
    }
}

mod basic {
    use super::*;

    #[test]
    fn seeds_repeat() {
        let a = seeded(3, 10);
        let b = seeded(3, 10);
        assert_eq!(a.frame(), b.frame());
        assert_eq!(canonical_id(a.frame().id()), a.frame().id());
    }

    #[test]
    fn queries_use_turns() {
        let mut game = seeded(5, 10);
        assert_eq!(game.query_str("T"), Ok(QueryReport::Valid));
        assert_eq!(game.query_str("F"), Ok(QueryReport::Invalid));
        assert_eq!(game.remaining(), 8);

        assert!(game.query_str("p ->").is_err());
        assert!(game.query_str("").is_err());
        assert_eq!(game.remaining(), 8);
    }

    #[test]
    fn guesses() {
        let mut game = seeded(9, 10);

        assert!(game.guess_str("aRz").is_err());
        assert_eq!(game.remaining(), 10);

        let wrong = wrong_frame(&game);
        assert_eq!(game.guess(&wrong), GuessReport::Incorrect);
        assert_eq!(game.remaining(), 9);

        let hidden = game.frame().clone();
        let guess = hidden.permuted(&[World::D, World::C, World::B, World::A]);
        assert_eq!(game.guess(&guess), GuessReport::Correct(hidden));
        assert_eq!(game.remaining(), 10);
    }

    #[test]
    fn exhaustion() {
        let mut game = seeded(1, 3);
        assert!(!game.exhausted());

        let _ = game.query_str("Lp -> p");
        let wrong = wrong_frame(&game);
        let _ = game.guess(&wrong);
        let _ = game.query_str("MT");
        assert!(game.exhausted());
        assert_eq!(game.remaining(), 0);

        game.reset();
        assert_eq!(game.remaining(), 3);
    }
}

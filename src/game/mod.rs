/*!
A game of guessing a hidden frame.

A game hides a frame, sampled uniformly from the [canonical ids](crate::db::canonical), and allows some count of turns to find the frame.
Each turn is either:
- A query, which reports at how many worlds of the hidden frame a formula is valid.
- A guess, which reports whether a frame is the hidden frame, up to relabelling of worlds.

Queries and incorrect guesses use a turn, while a correct guess ends the game and hides a fresh frame.
Text which fails to parse does not use a turn.
When no turns remain the game is [exhausted](Game::exhausted), and it is for the caller to [reset](Game::reset) the game.

```rust
# use kripke_guess::{config::Config, game::Game, reports::QueryReport};
let mut config = Config::default();
config.seed = Some(7);
let mut game = Game::from_config(config);

assert_eq!(game.remaining(), 10);
assert_eq!(game.query_str("T"), Ok(QueryReport::Valid));
assert_eq!(game.remaining(), 9);

assert!(game.query_str("T ->").is_err());
assert_eq!(game.remaining(), 9);
```
*/

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    config::Config,
    db::canonical::{self},
    misc::log::targets::{self},
    parse::{parse_formula, parse_frame},
    reports::{GuessReport, QueryReport},
    structures::{formula::Formula, frame::Frame},
    types::err::{self},
};

/// A game, with a hidden frame and a count of remaining turns.
pub struct Game<R: Rng = StdRng> {
    config: Config,
    rng: R,
    frame: Frame,
    remaining: u32,
}

impl Game<StdRng> {
    /// A game using the seed of the config, if given, and otherwise a seed from the system.
    pub fn from_config(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Game::with_rng(config, rng)
    }
}

impl<R: Rng> Game<R> {
    /// A game sampling frames with `rng`.
    pub fn with_rng(config: Config, rng: R) -> Self {
        let mut game = Game {
            config,
            rng,
            frame: Frame::default(),
            remaining: 0,
        };
        game.reset();
        game
    }

    /// Hides a fresh frame and restores the count of turns.
    pub fn reset(&mut self) -> &Frame {
        let id = canonical::all_canonical_ids()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();

        self.frame = Frame::from(id);
        self.remaining = self.config.turns.value;

        log::info!(target: targets::GAME, "Hid frame {id} with {} relations", self.frame.relation_count());
        &self.frame
    }

    /// The hidden frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A count of the remaining turns.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether every turn has been used.
    pub fn exhausted(&self) -> bool {
        self.remaining == 0
    }

    fn use_turn(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Queries `formula` on the hidden frame, using a turn.
    pub fn query(&mut self, formula: &Formula) -> QueryReport {
        let report = QueryReport::from_count(self.frame.valid_worlds(formula).len());
        self.use_turn();

        log::info!(target: targets::GAME, "Query {formula}: {report:?}, {} turns remain", self.remaining);
        report
    }

    /// Queries the formula written in `text` on the hidden frame.
    ///
    /// A turn is used only if `text` is a formula.
    pub fn query_str(&mut self, text: &str) -> Result<QueryReport, err::ErrorKind> {
        let formula = parse_formula(text)?;
        Ok(self.query(&formula))
    }

    /// Guesses `frame` is the hidden frame.
    ///
    /// A correct guess hides a fresh frame, while an incorrect guess uses a turn.
    pub fn guess(&mut self, frame: &Frame) -> GuessReport {
        let correct = canonical::canonical_db().equivalent(frame.id(), self.frame.id());

        let report = match correct {
            true => {
                let solved = self.frame.clone();
                self.reset();
                GuessReport::Correct(solved)
            }
            false => {
                self.use_turn();
                GuessReport::Incorrect
            }
        };

        log::info!(target: targets::GAME, "Guess {frame}: {report}, {} turns remain", self.remaining);
        report
    }

    /// Guesses the frame specified in `text` is the hidden frame.
    ///
    /// A turn is used only if `text` specifies an incorrect frame.
    pub fn guess_str(&mut self, text: &str) -> Result<GuessReport, err::ErrorKind> {
        let frame = parse_frame(text)?;
        Ok(self.guess(&frame))
    }
}

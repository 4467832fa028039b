//! A library for reasoning about Kripke frames on four worlds, developed to support a game of guessing a frame by querying modal formulas.
//!
//! A frame is hidden, and a player submits formulas of modal logic to learn about the frame.
//! Each formula is reported as valid at every world of the frame, at some worlds, or at none.
//! Eventually, the player guesses the frame, and the guess is correct if the frame guessed is the hidden frame up to relabelling of worlds.
//!
//! # Orientation
//!
//! The library is built of three parts:
//!
//! - [Parsers](crate::parse) for [formulas](crate::structures::formula) and frame specifications, each accepting a handful of spellings for each symbol.
//! - Procedures for [satisfaction](crate::procedures::satisfaction) and [validity](crate::procedures::validity), read on [models](crate::structures::model) and [frames](crate::structures::frame).
//! - A [database](crate::db::canonical) partitioning the 2¹⁶ frames on four worlds into orbits under relabelling, with a canonical id for each orbit.
//!
//! The [game] ties these together, and the `kripke_cli` binary offers the game on the command line.
//!
//! Useful starting points, then, may be:
//! - The [structures] to familiarise yourself with worlds, relations, frames, valuations, and formulas.
//! - The [grammar of formulas](crate::parse::formula) to see what may be written.
//! - The [canonical database](crate::db::canonical) to see how frames are compared.
//!
//! # Examples
//!
//! + Find the worlds of a frame at which a formula is valid.
//!
//! ```rust
//! # use kripke_guess::parse::{parse_formula, parse_frame};
//! # use kripke_guess::structures::world::World;
//! let frame = parse_frame("aRa, aRb, bRb").expect("frame");
//! let formula = parse_formula("Lp -> p").expect("formula");
//!
//! // Only a and b are reflexive.
//! assert_eq!(frame.valid_worlds(&formula), vec![World::A, World::B]);
//! ```
//!
//! + Compare frames up to relabelling.
//!
//! ```rust
//! # use kripke_guess::db::canonical::canonical_id;
//! # use kripke_guess::parse::parse_frame;
//! let hidden = parse_frame("aRb, bRb").expect("frame");
//! let guess = parse_frame("cRc, dRc").expect("frame");
//! let wrong = parse_frame("bRb, bRa").expect("frame");
//!
//! assert_eq!(canonical_id(guess.id()), canonical_id(hidden.id()));
//! assert_ne!(canonical_id(wrong.id()), canonical_id(hidden.id()));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with a handful of targets, listed in [misc::log].
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/) logs related to the canonical database can be filtered with `RUST_LOG=canonical …`.

pub mod config;
pub mod db;
pub mod game;
pub mod generic;
pub mod misc;
pub mod parse;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

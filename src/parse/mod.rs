//! Parsers for formulas and frame specifications.
//!
//! Both parsers read tokens from a [lexer](lexer), which pairs each kind of token with every spelling of the kind.
//! The grammars are then given in terms of kinds of token.
//!
//! - [parse_formula] reads a [formula](crate::structures::formula), e.g. `Mp -> LMp`.
//! - [parse_frame] reads a [frame](crate::structures::frame), e.g. `aRa, aRb, bRb`.
//!
//! Parsing stops at the first error, which is returned.
//! No attempt is made to recover from an error.

pub mod formula;
pub mod frame;
pub mod lexer;

pub use formula::parse_formula;
pub use frame::parse_frame;

//! Key structures, such as worlds, frames, and formulas.
//!
//! # Frames
//!
//! A [frame](frame) is a set of [relations](relation) over a fixed collection of four [worlds](world).
//! Each frame is identified with a sixteen bit [id](frame::FrameId), and [canonical ids](crate::db::canonical) identify frames up to a relabelling of worlds.
//!
//! # Models
//!
//! A [valuation] makes some [atoms](atom) true at some worlds, and a [model] pairs a frame with a valuation.
//!
//! # Formulas
//!
//! A [formula] is built from atoms, the constants ⊤ and ⊥, negation, the modalities □ and ⋄, and the binary connectives ∧, ∨, →, and ↔.
//! Formulas are read at a world of a model, and are valid on a frame when read as true at every world of every model built on the frame.

pub mod atom;
pub mod formula;
pub mod frame;
pub mod model;
pub mod relation;
pub mod valuation;
pub mod world;

//! Procedures for reading formulas on models and frames.
//!
//! - [satisfaction] decides whether a formula is true at a world of a [model](crate::structures::model).
//! - [validity] lifts satisfaction to models and [frames](crate::structures::frame), by quantifying over worlds and valuations.
//!
//! Each procedure is pure, and is implemented as methods on the structures involved.

pub mod satisfaction;
pub mod validity;

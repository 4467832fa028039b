//! Databases built once and read throughout.
//!
//! At present there is a single database, the [canonical](canonical) database, which partitions frames by relabelling of worlds.

pub mod canonical;

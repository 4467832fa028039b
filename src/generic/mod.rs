//! Generic structures and procedures, independent of frames or formulas.

pub mod permutation;

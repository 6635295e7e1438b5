//! Generic structures, not specific to logic.

pub mod random;

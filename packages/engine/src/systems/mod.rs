//! Systems - the per-apple and per-pair rules

pub mod body;
pub mod collision;
pub mod input;

//! Utilities shared by every layer (console logging macros)

#[macro_use]
mod log;

//! Turn-based territory-conquest game library
//!
//! Re-exports modules for use by the binary and tests.

pub mod combat;
pub mod game;
pub mod map;
pub mod mission;
pub mod setup;

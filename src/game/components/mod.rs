//! Board components
//!
//! Components are pure data structures with no logic.

pub mod board;

pub use board::*;

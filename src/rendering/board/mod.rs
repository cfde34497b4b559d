//! Board rendering module

pub mod board;

pub use board::*;

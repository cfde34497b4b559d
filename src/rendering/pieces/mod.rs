//! Piece rendering module

pub mod pieces;

pub use pieces::*;

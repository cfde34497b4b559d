//! Pure board logic - no ECS types
//!
//! - [`types`] - colors, pieces, parsed cell codes, positions
//! - [`grid`] - fixed-size row-major grid and pick id mapping
//! - [`snapshot`] - engine list syntax to grid and back
//! - [`model`] - the local board mirror and its orphans
//! - [`diff`] - per-cell transitions between two boards

pub mod diff;
pub mod grid;
pub mod model;
pub mod snapshot;
pub mod types;

pub use diff::{CellInstruction, DiffAction};
pub use grid::Grid;
pub use model::{BoardModel, Cell, Orphan, OrphanId, PieceCounts};
pub use types::{CellCode, Piece, PieceColor, Position};

//! Board entity markers
//!
//! Every cell is drawn as two entities: the space itself and the piece that
//! may rest on it. Orphans get an entity of their own while they exist.

use crate::game::board::{OrphanId, Position};
use bevy::prelude::*;

/// A board space
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSpace {
    pub position: Position,
}

/// The piece slot on top of a space; hidden while the cell is empty
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacePiece {
    pub position: Position,
}

/// A piece travelling between cells while its move is confirmed
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrphanPiece {
    pub id: OrphanId,
}

//! Messages exchanged between the board-sync systems

use crate::game::board::PieceColor;
use bevy::prelude::*;

/// A cell (or the piece on it) was clicked
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPicked {
    pub cell_id: usize,
    pub has_piece: bool,
}

/// Snapshot text arriving from outside a move round trip
/// (initial board, new game, an observer feed)
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct SnapshotArrived {
    pub text: String,
    /// Treat as the starting board: removals tear down instead of springing out
    pub starting: bool,
}

/// The engine accepted a move and the resulting board was applied
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveConfirmed {
    pub player: PieceColor,
}

/// A move request failed; its orphan stays parked until the next snapshot
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct MoveUnresolved {
    pub reason: String,
}

/// The round ran out and the turn passed to `next`
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnExpired {
    pub next: PieceColor,
}

/// Start over, optionally from a given starting board
#[derive(Message, Debug, Clone, PartialEq, Eq, Default)]
pub struct NewGame {
    pub starting: Option<String>,
}

//! In-flight engine round trip

use crate::game::board::PieceColor;
use crate::game::error::SyncResult;
use crate::game::protocol::RequestTicket;
use bevy::prelude::*;
use bevy::tasks::Task;

/// Resource holding the async transport task for the outstanding move request
///
/// Inserted when a request is handed to the transport and removed once the
/// task is polled to completion. The ticket routes the reply back to the
/// session, which drops it if the session was reset in the meantime.
/// `player` is the side that made the move, fixed when it was sent.
#[derive(Resource)]
pub struct PendingMoveRequest {
    pub ticket: RequestTicket,
    pub player: PieceColor,
    pub task: Task<SyncResult<String>>,
}

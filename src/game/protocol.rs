//! Move-request protocol
//!
//! Builds the engine call for a move and keeps track of the single request
//! that may be in flight. The call has a fixed argument order:
//!
//! ```text
//! movePiece(<grid>,<fromRow>,<fromCol>,<toRow>,<toCol>,<blackPlayer|whitePlayer>)
//! ```
//!
//! The reply is a plain snapshot handed back to the session for diffing.

use crate::game::board::snapshot::serialize;
use crate::game::board::{CellCode, Grid, PieceColor};
use crate::game::error::{SyncError, SyncResult};
use crate::game::resources::selection::MoveRequest;

/// Engine predicate that validates and applies a move
pub const MOVE_PREDICATE: &str = "movePiece";

/// Identifies one issued request; replies carrying an old ticket are stale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

/// A request ready to hand to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub ticket: RequestTicket,
    pub request: MoveRequest,
    pub player: PieceColor,
    pub text: String,
}

/// Render the engine call for `request` on `grid`, played by `player`
pub fn format_request(grid: &Grid<CellCode>, request: &MoveRequest, player: PieceColor) -> String {
    format!(
        "{MOVE_PREDICATE}({},{},{},{},{},{})",
        serialize(grid),
        request.from.row,
        request.from.col,
        request.to.row,
        request.to.col,
        player.player_atom()
    )
}

#[derive(Debug, Default)]
pub struct MoveRequestProtocol {
    next_ticket: u64,
    outstanding: Option<RequestTicket>,
}

impl MoveRequestProtocol {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_outstanding(&self) -> bool {
        self.outstanding.is_some()
    }

    /// Issue a request; only one may be in flight at a time
    pub fn begin(
        &mut self,
        grid: &Grid<CellCode>,
        request: MoveRequest,
        player: PieceColor,
    ) -> SyncResult<OutboundRequest> {
        if self.outstanding.is_some() {
            return Err(SyncError::RequestOutstanding);
        }
        let ticket = RequestTicket(self.next_ticket);
        self.next_ticket += 1;
        self.outstanding = Some(ticket);

        Ok(OutboundRequest {
            ticket,
            request,
            player,
            text: format_request(grid, &request, player),
        })
    }

    /// Close the request identified by `ticket`
    ///
    /// Returns `false` for a stale ticket (issued before a reset, or already
    /// finished); its reply must be ignored.
    pub fn finish(&mut self, ticket: RequestTicket) -> bool {
        if self.outstanding == Some(ticket) {
            self.outstanding = None;
            true
        } else {
            false
        }
    }

    /// Forget the outstanding request; its reply will be treated as stale
    pub fn cancel(&mut self) {
        self.outstanding = None;
    }
}

//! Board session - one game's synchronization state
//!
//! Owns the board mirror, the animation scheduler, the selection controller
//! and the request protocol, and wires them together:
//!
//! ```text
//! pick ──► SelectionController ──► spawn orphan + Displace ──► OutboundRequest
//! snapshot text ──► parse ──► diff ──► schedule + reconcile ──► codes replaced
//! tick(dt) ──► scheduler.advance ──► terminal effects ──► prune orphans
//! ```
//!
//! The session is single-owner and never blocks. The transport round trip
//! happens elsewhere; its reply comes back through
//! [`BoardSession::complete_request`] with the ticket it was issued under.

use super::selection::{MoveRequest, PickOutcome, SelectionController, SelectionState};
use super::turn::TurnFlag;
use crate::game::animation::{
    orphan_transform, AnimationCatalog, AnimationKind, AnimationScheduler, AnimationTarget,
    BoardLayout, CellTransforms, CompletedAnimation, LocalTransform, RemoveStyle, TerminalEffect,
};
use crate::game::board::diff::{self, CellInstruction, DiffAction};
use crate::game::board::snapshot;
use crate::game::board::{BoardModel, OrphanId, Piece, PieceColor, PieceCounts, Position};
use crate::game::error::{SyncError, SyncResult};
use crate::game::protocol::{MoveRequestProtocol, OutboundRequest, RequestTicket};
use bevy::prelude::Resource;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, warn};

/// What a pick did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResult {
    /// Board not loaded yet or the id is off the board
    Ignored,
    /// Valid pick that changed nothing but the bounce
    NoOp,
    Selected(Position),
    /// Request ready for the transport; the orphan is already in flight
    MoveRequested(OutboundRequest),
    /// A request is still outstanding; this move was discarded
    Rejected(MoveRequest),
}

/// Result of applying a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotOutcome {
    pub instructions: Vec<CellInstruction>,
    /// Authoritative codes differ from the previous ones
    pub changed: bool,
}

/// Result of completing a move request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestCompletion {
    Applied(SnapshotOutcome),
    /// Reply to a request issued before a reset; ignored
    Stale,
}

/// Everything that happened during one tick
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TickReport {
    pub completed: Vec<CompletedAnimation>,
    pub pruned: Vec<OrphanId>,
}

/// Animation playing on an entity, for the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationView {
    pub kind: AnimationKind,
    pub progress: f32,
}

/// Render view of one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellView {
    pub position: Position,
    pub pick_id: usize,
    /// Piece owned by the cell
    pub piece: Option<PieceColor>,
    /// Piece to draw: the owned one, or the one being inserted
    pub shown: Option<PieceColor>,
    pub animation: Option<AnimationView>,
    pub transforms: CellTransforms,
}

/// Render view of one orphan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrphanView {
    pub id: OrphanId,
    pub color: PieceColor,
    pub from: Position,
    pub to: Position,
    pub progress: f32,
    pub transform: LocalTransform,
}

#[derive(Resource, Debug)]
pub struct BoardSession {
    model: BoardModel,
    scheduler: AnimationScheduler,
    selection: SelectionController,
    protocol: MoveRequestProtocol,
    catalog: AnimationCatalog,
    layout: BoardLayout,
    turn: TurnFlag,
}

impl BoardSession {
    /// Session showing the default Morelli scene until the engine's first board
    pub fn new(layout: BoardLayout, catalog: AnimationCatalog, turn: TurnFlag) -> Self {
        let model = BoardModel::morelli_default(layout.rows, layout.cols);
        Self::with_board(model, layout, catalog, turn)
    }

    /// Session over an existing board; `layout` must match its dimensions
    pub fn with_board(
        model: BoardModel,
        layout: BoardLayout,
        catalog: AnimationCatalog,
        turn: TurnFlag,
    ) -> Self {
        Self {
            model,
            scheduler: AnimationScheduler::new(),
            selection: SelectionController::new(),
            protocol: MoveRequestProtocol::new(),
            catalog,
            layout,
            turn,
        }
    }

    pub fn model(&self) -> &BoardModel {
        &self.model
    }

    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    pub fn selection(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn has_outstanding_request(&self) -> bool {
        self.protocol.is_outstanding()
    }

    pub fn piece_counts(&self) -> PieceCounts {
        self.model.piece_counts()
    }

    /// Whether the cell behind `cell_id` shows a piece, counting one that is
    /// still inserting
    pub fn pick_has_piece(&self, cell_id: usize) -> bool {
        self.model
            .cells()
            .position_for_pick(cell_id)
            .and_then(|pos| self.shown_at(pos))
            .is_some()
    }

    /// Color drawn at `pos`: the model's piece, or the one an insert brings in
    fn shown_at(&self, pos: Position) -> Option<PieceColor> {
        let piece = self.model.piece_at(pos).map(|p| p.color);
        match self.scheduler.get(AnimationTarget::Cell(pos)).map(|a| a.kind) {
            Some(AnimationKind::Insert(color)) if piece.is_none() => Some(color),
            _ => piece,
        }
    }

    /// Feed one pick event `(cell_id, has_piece)` into the session
    pub fn pick(&mut self, cell_id: usize, has_piece: bool) -> PickResult {
        if !self.model.is_initialized() {
            debug!("[SELECTION] Pick {} before the first board; ignored", cell_id);
            return PickResult::Ignored;
        }
        let position = match self.resolve_pick(cell_id) {
            Ok(position) => position,
            Err(e) => {
                debug!("[SELECTION] {}", e);
                return PickResult::Ignored;
            }
        };

        self.scheduler
            .start(AnimationTarget::Cell(position), self.catalog.pick_bounce());

        match self.selection.handle_pick(position, has_piece) {
            PickOutcome::NoOp => PickResult::NoOp,
            PickOutcome::SelectionUpdated(pos) => {
                debug!("[SELECTION] Selected {}", pos);
                PickResult::Selected(pos)
            }
            PickOutcome::MoveRequestReady(request) => self.request_move(request),
        }
    }

    fn resolve_pick(&self, cell_id: usize) -> SyncResult<Position> {
        self.model
            .cells()
            .position_for_pick(cell_id)
            .ok_or(SyncError::InvalidPick { cell_id })
    }

    fn request_move(&mut self, request: MoveRequest) -> PickResult {
        let player = self.turn.current();
        let outbound = match self.protocol.begin(self.model.codes(), request, player) {
            Ok(outbound) => outbound,
            Err(e) => {
                warn!(
                    "[SELECTION] Move {} -> {} discarded: {}",
                    request.from, request.to, e
                );
                return PickResult::Rejected(request);
            }
        };

        if let Some(id) = self.model.spawn_orphan(request.from, request.to, player) {
            self.scheduler.start(
                AnimationTarget::Orphan(id),
                self.catalog.animation(AnimationKind::Displace {
                    from: request.from,
                    to: request.to,
                }),
            );
        }

        info!(
            "[SELECTION] {:?} requests {} -> {}",
            player, request.from, request.to
        );
        PickResult::MoveRequested(outbound)
    }

    /// Diff `text` against the board, schedule transitions and adopt it
    ///
    /// On any error the board, animations and orphans are left untouched.
    pub fn apply_snapshot(&mut self, text: &str, starting: bool) -> SyncResult<SnapshotOutcome> {
        let snapshot = snapshot::parse(text)?;
        let instructions = diff::diff(self.model.cells(), &snapshot, starting)?;

        for instruction in &instructions {
            self.schedule(instruction);
        }

        let instructed: HashSet<Position> = instructions.iter().map(|i| i.position).collect();

        // Destinations of orphans still in the air get their piece on landing
        let mut deferred = HashSet::new();
        let in_flight: Vec<OrphanId> = self
            .model
            .orphans()
            .iter()
            .filter(|o| !o.finished)
            .map(|o| o.id)
            .collect();
        for id in in_flight {
            if let Some(orphan) = self.model.orphan_mut(id) {
                orphan.landing = snapshot.get(orphan.to).and_then(|code| code.piece_color());
                if !instructed.contains(&orphan.to) {
                    deferred.insert(orphan.to);
                }
            }
        }

        let mut reconciled = 0;
        for (pos, code) in snapshot.iter() {
            if instructed.contains(&pos) || deferred.contains(&pos) {
                continue;
            }
            let wanted = code.piece_color();
            if self.model.piece_at(pos).map(|p| p.color) != wanted {
                self.model.replace_cell(pos, wanted.map(Piece::new));
                reconciled += 1;
            }
        }

        let changed = self.model.codes() != &snapshot;
        self.model.resolve_orphans();
        self.model.set_codes(snapshot);

        info!(
            "[SNAPSHOT] Applied ({}): {} transitions, {} cells reconciled",
            if starting { "starting" } else { "update" },
            instructions.len(),
            reconciled
        );
        Ok(SnapshotOutcome {
            instructions,
            changed,
        })
    }

    fn schedule(&mut self, instruction: &CellInstruction) {
        let pos = instruction.position;
        let animation = match instruction.action {
            DiffAction::Flip(color) => self.catalog.animation(AnimationKind::Flip(color)),
            DiffAction::Capture => {
                self.model.replace_cell(pos, None);
                self.catalog.capture_spring()
            }
            DiffAction::Teardown => {
                self.catalog.animation(AnimationKind::Remove(RemoveStyle::Teardown))
            }
            DiffAction::Insert(color) => self.catalog.animation(AnimationKind::Insert(color)),
        };

        let target = AnimationTarget::Cell(pos);
        // Same transition already playing; let it finish instead of restarting
        if self.scheduler.get(target).map(|a| a.kind) == Some(animation.kind) {
            return;
        }
        self.scheduler.start(target, animation);
    }

    /// Bulk-load a board without any animation
    pub fn initialize_starting(&mut self, text: &str) -> SyncResult<()> {
        let codes = snapshot::parse(text)?;
        self.model.initialize_starting(codes)?;
        info!("[SNAPSHOT] Board loaded without animation");
        Ok(())
    }

    /// Hand the transport's reply for `ticket` back to the session
    ///
    /// A failed or malformed reply leaves the orphan parked where it is until
    /// a later snapshot resolves it; the request slot is freed either way so
    /// the player can try again.
    pub fn complete_request(
        &mut self,
        ticket: RequestTicket,
        reply: SyncResult<String>,
    ) -> SyncResult<RequestCompletion> {
        if !self.protocol.finish(ticket) {
            debug!("[NETWORK] Stale reply for {:?} ignored", ticket);
            return Ok(RequestCompletion::Stale);
        }
        let text = reply?;
        self.apply_snapshot(&text, false)
            .map(RequestCompletion::Applied)
    }

    /// Advance animations by `delta`, apply what finished, prune orphans
    pub fn tick(&mut self, delta: Duration) -> TickReport {
        let completed = self.scheduler.advance(delta);
        for done in &completed {
            self.apply_terminal(done);
        }
        let pruned = self.model.prune_finished_orphans();
        TickReport { completed, pruned }
    }

    fn apply_terminal(&mut self, done: &CompletedAnimation) {
        match (done.target, done.kind.terminal_effect()) {
            (AnimationTarget::Cell(pos), TerminalEffect::SetColor(color)) => {
                self.model.replace_cell(pos, Some(Piece::new(color)));
            }
            (AnimationTarget::Cell(pos), TerminalEffect::ClearPiece) => {
                self.model.replace_cell(pos, None);
            }
            (AnimationTarget::Orphan(id), TerminalEffect::Land) => {
                let Some(orphan) = self.model.orphan_mut(id) else {
                    return;
                };
                orphan.finished = true;
                let to = orphan.to;
                if let Some(color) = orphan.landing.take() {
                    self.model.replace_cell(to, Some(Piece::new(color)));
                }
            }
            _ => {}
        }
    }

    /// Start over: drop orphans and animations (no terminal effects),
    /// clear the selection and orphan any outstanding request
    pub fn reset(&mut self) {
        self.scheduler.clear();
        self.model.clear_orphans();
        self.selection.reset();
        self.protocol.cancel();
        info!("[SESSION] Reset");
    }

    pub fn cell_views(&self) -> Vec<CellView> {
        self.model
            .cells()
            .iter()
            .map(|(position, cell)| {
                let animation = self
                    .scheduler
                    .get(AnimationTarget::Cell(position))
                    .map(|a| AnimationView {
                        kind: a.kind,
                        progress: a.progress(),
                    });
                CellView {
                    position,
                    pick_id: self.model.cells().pick_id(position),
                    piece: cell.piece.map(|p| p.color),
                    shown: self.shown_at(position),
                    animation,
                    transforms: CellTransforms::compute(
                        &self.layout,
                        position,
                        animation.as_ref().map(|a| (&a.kind, a.progress)),
                    ),
                }
            })
            .collect()
    }

    pub fn orphan_views(&self) -> Vec<OrphanView> {
        self.model
            .orphans()
            .iter()
            .map(|orphan| {
                let progress = if orphan.finished {
                    1.0
                } else {
                    self.scheduler
                        .progress(AnimationTarget::Orphan(orphan.id))
                        .unwrap_or(1.0)
                };
                OrphanView {
                    id: orphan.id,
                    color: orphan.piece.color,
                    from: orphan.from,
                    to: orphan.to,
                    progress,
                    transform: orphan_transform(&self.layout, orphan.from, orphan.to, progress),
                }
            })
            .collect()
    }
}

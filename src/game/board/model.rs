//! Local board mirror
//!
//! Holds the grid of cells the player sees, the last authoritative codes the
//! engine sent, and the orphans: pieces in transit between two cells that
//! belong to no cell until the engine confirms where they end up.

use super::grid::Grid;
use super::types::{CellCode, Piece, PieceColor, Position};
use crate::game::error::{SyncError, SyncResult};
use tracing::debug;

/// Identifier of a live orphan, unique within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrphanId(pub u64);

/// One board space; holds at most one piece
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub piece: Option<Piece>,
}

/// A piece displaced from its cell, in flight toward `to`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orphan {
    pub id: OrphanId,
    pub piece: Piece,
    pub from: Position,
    pub to: Position,
    /// Color the engine placed at `to` while this orphan was still moving;
    /// set down when it lands
    pub landing: Option<PieceColor>,
    /// Displacement animation has ended
    pub finished: bool,
    /// A snapshot arrived after this orphan was spawned
    pub resolved: bool,
}

/// Pieces of each color on the authoritative grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceCounts {
    pub black: usize,
    pub white: usize,
}

#[derive(Debug, Clone)]
pub struct BoardModel {
    cells: Grid<Cell>,
    codes: Grid<CellCode>,
    orphans: Vec<Orphan>,
    next_orphan: u64,
    initialized: bool,
}

impl BoardModel {
    /// Empty board of the given size
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Grid::filled(rows, cols, Cell::default()),
            codes: Grid::filled(rows, cols, CellCode::Empty),
            orphans: Vec::new(),
            next_orphan: 0,
            initialized: false,
        }
    }

    /// Scene shown before the engine sends its first board:
    /// black pieces on every border cell
    pub fn morelli_default(rows: usize, cols: usize) -> Self {
        let codes = Grid::from_fn(rows, cols, |pos| {
            let border = pos.row == 0 || pos.col == 0 || pos.row + 1 == rows || pos.col + 1 == cols;
            if border {
                CellCode::Black
            } else {
                CellCode::Empty
            }
        });
        let mut model = Self::new(rows, cols);
        model.load_codes(codes);
        model
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dimensions()
    }

    pub fn cells(&self) -> &Grid<Cell> {
        &self.cells
    }

    /// Last codes received from the engine
    pub fn codes(&self) -> &Grid<CellCode> {
        &self.codes
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.cells.get(pos).and_then(|cell| cell.piece)
    }

    /// Set or clear the piece at `pos`; animations are left alone
    pub fn replace_cell(&mut self, pos: Position, piece: Option<Piece>) -> bool {
        match self.cells.get_mut(pos) {
            Some(cell) => {
                cell.piece = piece;
                true
            }
            None => false,
        }
    }

    /// Lift the piece off `from` and put it in flight toward `to`
    ///
    /// The source cell is empty from here on. If it held nothing, a fresh
    /// piece of `fallback` is used so the move still shows.
    pub fn spawn_orphan(
        &mut self,
        from: Position,
        to: Position,
        fallback: PieceColor,
    ) -> Option<OrphanId> {
        if !self.cells.contains(to) {
            return None;
        }
        let cell = self.cells.get_mut(from)?;
        let piece = cell.piece.take().unwrap_or_else(|| Piece::new(fallback));

        let id = OrphanId(self.next_orphan);
        self.next_orphan += 1;
        self.orphans.push(Orphan {
            id,
            piece,
            from,
            to,
            landing: None,
            finished: false,
            resolved: false,
        });
        debug!("[BOARD] Orphan {:?} lifted from {} toward {}", id, from, to);
        Some(id)
    }

    pub fn orphans(&self) -> &[Orphan] {
        &self.orphans
    }

    pub fn orphan(&self, id: OrphanId) -> Option<&Orphan> {
        self.orphans.iter().find(|o| o.id == id)
    }

    pub fn orphan_mut(&mut self, id: OrphanId) -> Option<&mut Orphan> {
        self.orphans.iter_mut().find(|o| o.id == id)
    }

    /// Mark every live orphan as answered by the engine
    pub fn resolve_orphans(&mut self) {
        for orphan in &mut self.orphans {
            orphan.resolved = true;
        }
    }

    /// Drop orphans whose flight ended and whose move the engine answered
    ///
    /// An orphan whose request never got an answer stays parked at its
    /// destination until a later snapshot resolves it.
    pub fn prune_finished_orphans(&mut self) -> Vec<OrphanId> {
        let mut pruned = Vec::new();
        self.orphans.retain(|orphan| {
            let done = orphan.finished && orphan.resolved;
            if done {
                pruned.push(orphan.id);
            }
            !done
        });
        pruned
    }

    pub fn clear_orphans(&mut self) {
        self.orphans.clear();
    }

    /// Bulk-load pieces and codes without animating anything
    pub fn initialize_starting(&mut self, codes: Grid<CellCode>) -> SyncResult<()> {
        if codes.dimensions() != self.dimensions() {
            return Err(SyncError::DimensionMismatch {
                expected: self.dimensions(),
                found: codes.dimensions(),
            });
        }
        self.load_codes(codes);
        self.initialized = true;
        Ok(())
    }

    fn load_codes(&mut self, codes: Grid<CellCode>) {
        self.cells = codes.map(|code| Cell {
            piece: code.piece_color().map(Piece::new),
        });
        self.codes = codes;
    }

    /// Record the latest authoritative codes
    pub(crate) fn set_codes(&mut self, codes: Grid<CellCode>) {
        self.codes = codes;
        self.initialized = true;
    }

    /// Whether an engine board has been applied yet; picks wait for it
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn piece_counts(&self) -> PieceCounts {
        self.codes
            .iter()
            .fold(PieceCounts::default(), |mut counts, (_, code)| {
                match code.piece_color() {
                    Some(PieceColor::Black) => counts.black += 1,
                    Some(PieceColor::White) => counts.white += 1,
                    None => {}
                }
                counts
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_has_black_border() {
        //! 13x13 Morelli setup: 48 border pieces, empty interior
        let model = BoardModel::morelli_default(13, 13);
        assert_eq!(model.piece_counts(), PieceCounts { black: 48, white: 0 });
        assert_eq!(model.piece_at(Position::new(0, 5)).map(|p| p.color), Some(PieceColor::Black));
        assert_eq!(model.piece_at(Position::new(6, 6)), None);
        assert!(!model.is_initialized());
    }

    #[test]
    fn test_spawn_orphan_transfers_ownership() {
        let mut model = BoardModel::morelli_default(5, 5);
        let id = model
            .spawn_orphan(Position::new(0, 2), Position::new(2, 2), PieceColor::White)
            .unwrap();

        assert_eq!(model.piece_at(Position::new(0, 2)), None, "source must be empty at once");
        let orphan = model.orphan(id).unwrap();
        assert_eq!(orphan.piece.color, PieceColor::Black, "orphan carries the lifted piece");
        assert_eq!(orphan.to, Position::new(2, 2));
    }

    #[test]
    fn test_spawn_orphan_from_empty_cell_uses_fallback() {
        let mut model = BoardModel::new(3, 3);
        let id = model
            .spawn_orphan(Position::new(1, 1), Position::new(0, 0), PieceColor::White)
            .unwrap();
        assert_eq!(model.orphan(id).unwrap().piece.color, PieceColor::White);
    }

    #[test]
    fn test_spawn_orphan_out_of_range() {
        let mut model = BoardModel::new(3, 3);
        assert!(model
            .spawn_orphan(Position::new(3, 0), Position::new(0, 0), PieceColor::Black)
            .is_none());
        assert!(model
            .spawn_orphan(Position::new(0, 0), Position::new(0, 3), PieceColor::Black)
            .is_none());
        assert!(model.orphans().is_empty());
    }

    #[test]
    fn test_prune_requires_finished_and_resolved() {
        let mut model = BoardModel::new(3, 3);
        let a = model
            .spawn_orphan(Position::new(0, 0), Position::new(0, 1), PieceColor::Black)
            .unwrap();
        let b = model
            .spawn_orphan(Position::new(1, 0), Position::new(1, 1), PieceColor::Black)
            .unwrap();

        model.orphan_mut(a).unwrap().finished = true;
        assert!(model.prune_finished_orphans().is_empty(), "unanswered orphans stay parked");

        model.resolve_orphans();
        assert_eq!(model.prune_finished_orphans(), vec![a]);
        assert!(model.orphan(b).is_some());
    }

    #[test]
    fn test_initialize_starting_checks_dimensions() {
        let mut model = BoardModel::new(2, 2);
        let wrong = Grid::filled(3, 2, CellCode::Black);
        assert!(matches!(
            model.initialize_starting(wrong),
            Err(SyncError::DimensionMismatch { expected: (2, 2), found: (3, 2) })
        ));

        let codes = Grid::from_fn(2, 2, |pos| {
            if pos.row == 0 {
                CellCode::White
            } else {
                CellCode::Other(-1)
            }
        });
        model.initialize_starting(codes).unwrap();
        assert!(model.is_initialized());
        assert_eq!(model.piece_counts(), PieceCounts { black: 0, white: 2 });
        assert_eq!(model.piece_at(Position::new(1, 0)), None);
    }
}

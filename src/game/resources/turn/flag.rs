//! Shared "whose turn" flag
//!
//! The turn clock flips it when a round runs out and hands it to the opponent
//! when a move is confirmed. The board session only reads it when filling in
//! the player of a move request. Clones share one flag.

use crate::game::board::PieceColor;
use bevy::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Resource, Debug, Clone, Default)]
pub struct TurnFlag {
    // false = Black, who opens a Morelli game
    white: Arc<AtomicBool>,
}

impl TurnFlag {
    pub fn new(color: PieceColor) -> Self {
        let flag = Self::default();
        flag.set(color);
        flag
    }

    pub fn current(&self) -> PieceColor {
        if self.white.load(Ordering::Acquire) {
            PieceColor::White
        } else {
            PieceColor::Black
        }
    }

    pub fn set(&self, color: PieceColor) {
        self.white.store(color == PieceColor::White, Ordering::Release);
    }

    /// Hand the turn to the other player, returning the new holder
    pub fn flip(&self) -> PieceColor {
        let was_white = self.white.fetch_xor(true, Ordering::AcqRel);
        if was_white {
            PieceColor::Black
        } else {
            PieceColor::White
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_opens() {
        assert_eq!(TurnFlag::default().current(), PieceColor::Black);
    }

    #[test]
    fn test_clones_share_state() {
        let flag = TurnFlag::default();
        let reader = flag.clone();
        assert_eq!(flag.flip(), PieceColor::White);
        assert_eq!(reader.current(), PieceColor::White);
        reader.set(PieceColor::Black);
        assert_eq!(flag.current(), PieceColor::Black);
    }
}

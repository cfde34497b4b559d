//! Round countdown
//!
//! Each player gets a fixed round (30 seconds by default). When it runs out
//! the turn passes to the other player and a new round starts. A confirmed
//! move also passes the turn and restarts the round.
//!
//! The countdown starts one second above the round length so the display
//! shows the full round (e.g. "30") for a whole second before ticking down.

use super::flag::TurnFlag;
use crate::game::board::PieceColor;
use bevy::prelude::*;
use std::time::Duration;

#[derive(Resource, Debug, Clone)]
pub struct TurnClock {
    round: Duration,
    remaining: Duration,
}

impl Default for TurnClock {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

impl TurnClock {
    pub fn new(round: Duration) -> Self {
        Self {
            round,
            remaining: round + Duration::from_secs(1),
        }
    }

    pub fn round(&self) -> Duration {
        self.round
    }

    /// Whole seconds left to show on the countdown
    pub fn seconds_left(&self) -> u64 {
        self.remaining.as_secs().min(self.round.as_secs())
    }

    pub fn restart(&mut self) {
        self.remaining = self.round + Duration::from_secs(1);
    }

    /// Count down by `delta`; on expiry flip `flag` and start a new round
    ///
    /// Returns the player who now holds the turn when the round expired.
    pub fn advance(&mut self, delta: Duration, flag: &TurnFlag) -> Option<PieceColor> {
        self.remaining = self.remaining.saturating_sub(delta);
        if !self.remaining.is_zero() {
            return None;
        }
        let next = flag.flip();
        self.restart();
        Some(next)
    }

    /// `mover` made a move: the opponent starts a fresh round
    ///
    /// The turn is set from the mover, not flipped, so an expiry that fired
    /// while the move was in flight cannot hand the turn back to the mover.
    pub fn pass_turn(&mut self, mover: PieceColor, flag: &TurnFlag) -> PieceColor {
        self.restart();
        let next = mover.opposite();
        flag.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_starts_full() {
        let clock = TurnClock::default();
        assert_eq!(clock.seconds_left(), 30);
    }

    #[test]
    fn test_expiry_flips_once() {
        //! Running out the clock hands the turn over exactly once per round
        let flag = TurnFlag::default();
        let mut clock = TurnClock::new(Duration::from_secs(2));

        assert_eq!(clock.advance(Duration::from_millis(2500), &flag), None);
        assert_eq!(clock.seconds_left(), 0);
        assert_eq!(clock.advance(Duration::from_millis(600), &flag), Some(PieceColor::White));
        assert_eq!(flag.current(), PieceColor::White);
        assert_eq!(clock.seconds_left(), 2, "a new round starts after expiry");
        assert_eq!(clock.advance(Duration::from_millis(100), &flag), None);
    }

    #[test]
    fn test_pass_turn_restarts_round() {
        let flag = TurnFlag::default();
        let mut clock = TurnClock::new(Duration::from_secs(10));
        clock.advance(Duration::from_secs(8), &flag);
        assert_eq!(clock.pass_turn(PieceColor::Black, &flag), PieceColor::White);
        assert_eq!(clock.seconds_left(), 10);
    }

    #[test]
    fn test_pass_turn_after_expiry_goes_to_opponent() {
        //! The round ran out while Black's move was in flight
        let flag = TurnFlag::default();
        let mut clock = TurnClock::new(Duration::from_secs(1));
        assert_eq!(clock.advance(Duration::from_secs(3), &flag), Some(PieceColor::White));

        assert_eq!(clock.pass_turn(PieceColor::Black, &flag), PieceColor::White);
        assert_eq!(flag.current(), PieceColor::White);
    }
}

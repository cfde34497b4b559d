//! Animation kinds and their duration catalog
//!
//! Every transient visual on the board is one of a small closed set of kinds.
//! Each kind knows what it does to the board when it finishes; the scheduler
//! only tracks time.

use crate::game::board::{PieceColor, Position};
use std::time::Duration;

/// How a leaving piece is shown
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemoveStyle {
    /// Steady-state capture: the piece is already gone, the empty space springs
    SpringOut { amplitude: f32 },
    /// Starting-mode teardown: the piece stays visible until the animation ends
    Teardown,
}

/// Closed set of board animations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationKind {
    /// A piece of this color pops into an empty cell
    Insert(PieceColor),
    /// A piece leaves its cell
    Remove(RemoveStyle),
    /// The piece on the cell turns over to this color
    Flip(PieceColor),
    /// An orphan travels between two cells
    Displace { from: Position, to: Position },
    /// Cosmetic pick feedback; vertical offset peaks at `amplitude`
    Bounce { amplitude: f32 },
}

/// What applying a finished animation does to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEffect {
    None,
    /// Cell ends up holding a piece of this color
    SetColor(PieceColor),
    /// Cell ends up empty
    ClearPiece,
    /// Orphan reached its destination
    Land,
}

impl AnimationKind {
    pub fn terminal_effect(&self) -> TerminalEffect {
        match *self {
            AnimationKind::Insert(color) | AnimationKind::Flip(color) => {
                TerminalEffect::SetColor(color)
            }
            AnimationKind::Remove(RemoveStyle::Teardown) => TerminalEffect::ClearPiece,
            // The piece was cleared when the removal was scheduled; a later
            // snapshot may already have put a new one there.
            AnimationKind::Remove(RemoveStyle::SpringOut { .. }) => TerminalEffect::None,
            AnimationKind::Displace { .. } => TerminalEffect::Land,
            AnimationKind::Bounce { .. } => TerminalEffect::None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnimationKind::Insert(_) => "insert",
            AnimationKind::Remove(_) => "remove",
            AnimationKind::Flip(_) => "flip",
            AnimationKind::Displace { .. } => "displace",
            AnimationKind::Bounce { .. } => "bounce",
        }
    }
}

/// One running animation
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub kind: AnimationKind,
    pub elapsed: Duration,
    pub duration: Duration,
}

impl Animation {
    pub fn new(kind: AnimationKind, duration: Duration) -> Self {
        Self {
            kind,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Fraction of the animation played, clamped to `[0, 1]`
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Durations and amplitudes for every animation kind
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationCatalog {
    pub insert: Duration,
    pub remove: Duration,
    pub flip: Duration,
    pub displace: Duration,
    pub bounce: Duration,
    /// Bounce played on every pick
    pub pick_amplitude: f32,
    /// Spring played on a cell whose piece was captured
    pub capture_amplitude: f32,
}

impl Default for AnimationCatalog {
    fn default() -> Self {
        Self {
            insert: Duration::from_secs(1),
            remove: Duration::from_secs(1),
            flip: Duration::from_secs(1),
            displace: Duration::from_secs(1),
            bounce: Duration::from_millis(500),
            pick_amplitude: -0.5,
            capture_amplitude: -0.4,
        }
    }
}

impl AnimationCatalog {
    pub fn duration_of(&self, kind: &AnimationKind) -> Duration {
        match kind {
            AnimationKind::Insert(_) => self.insert,
            AnimationKind::Remove(_) => self.remove,
            AnimationKind::Flip(_) => self.flip,
            AnimationKind::Displace { .. } => self.displace,
            AnimationKind::Bounce { .. } => self.bounce,
        }
    }

    pub fn animation(&self, kind: AnimationKind) -> Animation {
        Animation::new(kind, self.duration_of(&kind))
    }

    pub fn pick_bounce(&self) -> Animation {
        self.animation(AnimationKind::Bounce {
            amplitude: self.pick_amplitude,
        })
    }

    pub fn capture_spring(&self) -> Animation {
        self.animation(AnimationKind::Remove(RemoveStyle::SpringOut {
            amplitude: self.capture_amplitude,
        }))
    }
}

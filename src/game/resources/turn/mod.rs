//! Turn resources: the shared turn flag and the round countdown

pub mod clock;
pub mod flag;

pub use clock::TurnClock;
pub use flag::TurnFlag;

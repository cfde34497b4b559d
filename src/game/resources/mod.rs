//! Board-sync resources
//!
//! - [`BoardSession`] - the board mirror, animations, selection and request slot
//! - [`PendingMoveRequest`] - transport task for the outstanding request
//! - [`TurnFlag`] / [`TurnClock`] - whose turn it is and the round countdown
//! - [`SelectionController`] - two-click move selection

pub mod pending;
pub mod selection;
pub mod session;
pub mod turn;

pub use pending::*;
pub use selection::*;
pub use session::*;
pub use turn::*;

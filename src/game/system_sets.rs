//! System organization using SystemSets
//!
//! Systems run in this order each frame:
//! 1. **Input** - pick messages into the session, new-game requests
//! 2. **Network** - hand requests to the transport, poll replies, apply snapshots
//! 3. **Animation** - advance animations and the turn clock
//! 4. **Visual** - copy session views onto entities

use bevy::prelude::*;

/// System execution order for board sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum BoardSystems {
    /// Pick handling and session resets
    Input,

    /// Transport round trips and snapshot application
    Network,

    /// Animation clock and turn countdown
    Animation,

    /// Transforms and materials
    Visual,
}

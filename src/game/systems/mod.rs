//! Board-sync systems
//!
//! ```text
//! ┌─────────────────┐
//! │ Input           │  Clicks → CellPicked → session.pick
//! │ (Observers)     │  → move request handed to the transport
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ Network         │  Poll the engine reply, apply snapshots
//! │                 │  → diff, schedule, reconcile
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ Animation       │  Advance animations, apply terminal effects,
//! │                 │  count the round down
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ Visual          │  Session views → Transforms, visibility, materials
//! └─────────────────┘
//! ```

pub mod animation;
pub mod input;
pub mod network_move;
pub mod visual;

pub use animation::*;
pub use input::*;
pub use network_move::*;
pub use visual::*;

//! Morelli board sync
//!
//! The board shown to the player is a mirror of the logic engine's board.
//! Every engine reply is a full snapshot; the session diffs it against what is
//! on screen and animates the difference.
//!
//! # Module Organization
//!
//! - `board` - grid, cell codes, snapshot codec, board model with orphans, diff
//! - `animation` - animation kinds, the per-entity scheduler, local transforms
//! - `protocol` - move-request text and the single outstanding request
//! - `resources` - the session, selection, turn flag and clock, pending request
//! - `systems` / `plugin` - the Bevy wiring, ordered by [`BoardSystems`]
//!
//! The first four are plain Rust and can be driven without an `App`.

pub mod animation;
pub mod board;
pub mod components;
pub mod error;
pub mod events;
pub mod plugin;
pub mod protocol;
pub mod resources;
pub mod system_sets;
pub mod systems;

pub use error::{SyncError, SyncResult};
pub use plugin::BoardSyncPlugin;
pub use system_sets::BoardSystems;

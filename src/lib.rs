pub mod core;
pub mod game;
pub mod networking;
pub mod rendering;

pub use game::{BoardSyncPlugin, BoardSystems, SyncError, SyncResult};
pub use rendering::BoardRenderPlugin;

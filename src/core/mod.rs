//! Core module - settings and their persistence
//!
//! - [`BoardSettings`] - grid size, layout, animation timing, round length, engine endpoint
//! - [`load_settings`] / [`save_settings`] - JSON file in the user's config directory
//! - [`CoreError`] - settings I/O and validation failures

pub mod error;
pub mod settings;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use settings::{AnimationSettings, BoardSettings, EngineSettings, DEFAULT_ENGINE_URL};
pub use settings_persistence::{load_settings, read_settings, save_settings, settings_path};

//! Board settings
//!
//! Everything tunable about a session: grid size, layout, animation timing,
//! the round length and where the logic engine lives. Missing fields in a
//! settings file fall back to the defaults below.

use super::error::{CoreError, CoreResult};
use crate::game::animation::{AnimationCatalog, BoardLayout};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default engine endpoint (the logic engine's HTTP server)
pub const DEFAULT_ENGINE_URL: &str = "http://localhost:8081";

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub rows: usize,
    pub cols: usize,
    /// Distance between neighbouring cell centres, in world units
    pub spacing: f32,
    pub animation: AnimationSettings,
    /// Seconds each player gets before the turn passes
    pub round_secs: u64,
    pub engine: EngineSettings,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            rows: 13,
            cols: 13,
            spacing: 2.0,
            animation: AnimationSettings::default(),
            round_secs: 30,
            engine: EngineSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub insert_ms: u64,
    pub remove_ms: u64,
    pub flip_ms: u64,
    pub displace_ms: u64,
    pub bounce_ms: u64,
    pub pick_amplitude: f32,
    pub capture_amplitude: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            insert_ms: 1000,
            remove_ms: 1000,
            flip_ms: 1000,
            displace_ms: 1000,
            bounce_ms: 500,
            pick_amplitude: -0.5,
            capture_amplitude: -0.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENGINE_URL.to_string(),
            timeout_ms: 5000,
        }
    }
}

impl EngineSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl BoardSettings {
    /// Reject settings no board can be built from
    pub fn validate(&self) -> CoreResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(CoreError::InvalidSettings {
                message: format!(
                    "board must have at least one cell, got {}x{}",
                    self.rows, self.cols
                ),
            });
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(CoreError::InvalidSettings {
                message: format!("cell spacing must be positive, got {}", self.spacing),
            });
        }
        if self.engine.base_url.trim().is_empty() {
            return Err(CoreError::InvalidSettings {
                message: "engine base_url is empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn layout(&self) -> BoardLayout {
        BoardLayout::new(self.rows, self.cols, self.spacing)
    }

    pub fn catalog(&self) -> AnimationCatalog {
        let a = &self.animation;
        AnimationCatalog {
            insert: Duration::from_millis(a.insert_ms),
            remove: Duration::from_millis(a.remove_ms),
            flip: Duration::from_millis(a.flip_ms),
            displace: Duration::from_millis(a.displace_ms),
            bounce: Duration::from_millis(a.bounce_ms),
            pick_amplitude: a.pick_amplitude,
            capture_amplitude: a.capture_amplitude,
        }
    }

    pub fn round(&self) -> Duration {
        Duration::from_secs(self.round_secs)
    }
}

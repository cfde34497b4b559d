//! Engine transport
//!
//! The logic engine is reached through one call: send the move-request text,
//! receive snapshot text. [`HttpEngineTransport`] speaks the engine's HTTP
//! server protocol, where the request is the path of a plain GET and the
//! response body is the snapshot.

use crate::core::EngineSettings;
use crate::game::error::{SyncError, SyncResult};
use bevy::prelude::*;
use std::sync::Arc;
use std::time::Duration;

/// Sends a request to the logic engine and returns its reply text
///
/// Calls block; they are always made off the main thread.
pub trait EngineTransport: Send + Sync + 'static {
    fn send(&self, request: &str) -> SyncResult<String>;
}

/// Shared handle to the configured transport
#[derive(Resource, Clone)]
pub struct EngineLink(pub Arc<dyn EngineTransport>);

impl EngineLink {
    pub fn new(transport: impl EngineTransport) -> Self {
        Self(Arc::new(transport))
    }
}

/// `GET {base_url}/{request}` against the engine's HTTP server
pub struct HttpEngineTransport {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpEngineTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> SyncResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SyncError::transport(format!("client setup failed: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &EngineSettings) -> SyncResult<Self> {
        Self::new(settings.base_url.clone(), settings.timeout())
    }

    pub fn request_url(&self, request: &str) -> String {
        format!("{}/{}", self.base_url, request)
    }
}

impl EngineTransport for HttpEngineTransport {
    fn send(&self, request: &str) -> SyncResult<String> {
        let url = self.request_url(request);
        debug!("[NETWORK] GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| SyncError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SyncError::transport(format!(
                "Request failed ({}): {}",
                status, body
            )));
        }
        response
            .text()
            .map_err(|e| SyncError::transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_goes_in_the_path() {
        let transport =
            HttpEngineTransport::new("http://localhost:8081/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            transport.request_url("movePiece([[1]],0,0,0,0,blackPlayer)"),
            "http://localhost:8081/movePiece([[1]],0,0,0,0,blackPlayer)"
        );
    }

    #[test]
    fn test_unreachable_engine_is_transport_failure() {
        // Port 9 (discard) on loopback is closed on any sane test machine
        let transport =
            HttpEngineTransport::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        assert!(matches!(
            transport.send("movePiece([[1]],0,0,0,0,blackPlayer)"),
            Err(SyncError::TransportFailure { .. })
        ));
    }
}

//! Networking - the link to the logic engine

pub mod transport;

pub use transport::{EngineLink, EngineTransport, HttpEngineTransport};

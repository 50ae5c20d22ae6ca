use tracing::debug;

use crate::errors::CoreError;
use crate::models::session::Session;

/// High-level storage operations: save/load the session to/from JSON
/// bytes or a file on disk.
///
/// This is the durable-client-storage analogue of the original app's
/// localStorage: one token string plus the recent-search history. The
/// payload is plain JSON — nothing in it is readable back without also
/// being usable, so there is no cipher layer.
pub struct SessionStore;

impl SessionStore {
    /// Serialize a session to raw bytes (portable, platform-independent).
    /// Use this on WASM / embedded hosts where the frontend owns file I/O.
    pub fn save_to_bytes(session: &Session) -> Result<Vec<u8>, CoreError> {
        serde_json::to_vec(session)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize session: {e}")))
    }

    /// Deserialize a session from raw bytes.
    pub fn load_from_bytes(data: &[u8]) -> Result<Session, CoreError> {
        serde_json::from_slice(data)
            .map_err(|e| CoreError::Deserialization(format!("Failed to parse session: {e}")))
    }

    /// Save the session to a file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(session: &Session, path: &str) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(session)?;
        std::fs::write(path, bytes)?;
        debug!(path, "session saved");
        Ok(())
    }

    /// Load the session from a file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Session, CoreError> {
        let bytes = std::fs::read(path)?;
        let session = Self::load_from_bytes(&bytes)?;
        debug!(path, authenticated = session.is_authenticated(), "session loaded");
        Ok(session)
    }
}

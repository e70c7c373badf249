//! Serialized form of the resume state.
//!
//! A single storage entry holds `{ "state": { resumeStyle, resumeData },
//! "version": N }`. The bundled template uses the same envelope.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ResumeState;
use crate::storage::{KeyValueStorage, StorageError};

/// Storage key the document store persists under unless configured otherwise.
pub const STORAGE_KEY: &str = "resume-setting";

/// Envelope version written by this crate.
pub const STATE_VERSION: u32 = 0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub state: ResumeState,
    #[serde(default)]
    pub version: u32,
}

#[derive(Serialize)]
struct PersistedStateRef<'a> {
    state: &'a ResumeState,
    version: u32,
}

#[derive(Error, Debug)]
pub enum PersistError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Malformed persisted state: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("Unsupported persisted state version {0}")]
    UnsupportedVersion(u32),
}

/// Reads the state stored under `key`.
///
/// Returns `Ok(None)` if nothing has been persisted yet.
pub fn load_state<S: KeyValueStorage>(
    storage: &S,
    key: &str,
) -> Result<Option<ResumeState>, PersistError> {
    let Some(bytes) = storage.load(key)? else {
        return Ok(None);
    };

    let persisted: PersistedState = serde_json::from_slice(&bytes)?;
    if persisted.version != STATE_VERSION {
        return Err(PersistError::UnsupportedVersion(persisted.version));
    }

    Ok(Some(persisted.state))
}

/// Writes `state` under `key`, replacing whatever was there.
pub fn save_state<S: KeyValueStorage>(
    storage: &S,
    key: &str,
    state: &ResumeState,
) -> Result<(), PersistError> {
    let bytes = serde_json::to_vec(&PersistedStateRef {
        state,
        version: STATE_VERSION,
    })?;
    storage.save(key, &bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::template::template_state;

    #[test]
    fn test_load_missing_returns_none() {
        let storage = MemoryStorage::new();
        assert!(load_state(&storage, STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let storage = MemoryStorage::new();
        let state = template_state();

        save_state(&storage, STORAGE_KEY, &state).unwrap();
        let loaded = load_state(&storage, STORAGE_KEY).unwrap().unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_saved_envelope_shape() {
        let storage = MemoryStorage::new();
        save_state(&storage, STORAGE_KEY, &template_state()).unwrap();

        let bytes = storage.load(STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["version"], 0);
        assert!(value["state"]["resumeStyle"].is_object());
        assert!(value["state"]["resumeData"].is_array());
    }

    #[test]
    fn test_malformed_state_is_codec_error() {
        let storage = MemoryStorage::new();
        storage.save(STORAGE_KEY, b"{not json").unwrap();

        let result = load_state(&storage, STORAGE_KEY);
        assert!(matches!(result, Err(PersistError::Codec(_))));
    }

    #[test]
    fn test_future_version_rejected() {
        let storage = MemoryStorage::new();
        let state = serde_json::to_value(template_state()).unwrap();
        let envelope = serde_json::json!({ "state": state, "version": 3 });
        storage
            .save(STORAGE_KEY, &serde_json::to_vec(&envelope).unwrap())
            .unwrap();

        let result = load_state(&storage, STORAGE_KEY);
        assert!(matches!(result, Err(PersistError::UnsupportedVersion(3))));
    }
}

//! Preference store errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned by a [`PreferenceStore`](super::PreferenceStore).
///
/// The theme resolver never surfaces these; a store that cannot be read is
/// treated as holding no preference, and a failed write is logged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("preference store at '{}' is not accessible: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backing file exists but is not a JSON object of strings
    #[error("preference store at '{}' is malformed: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

//! Durable session storage.
//!
//! The authenticated user is persisted as a single JSON file, read once at
//! startup (before any command dispatch) and removed on logout.

use std::fs;
use std::path::{Path, PathBuf};

use eventy_core::auth::Session;

use crate::error::Result;

/// File-backed store for the current session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location, honoring
    /// `EVENTY_SESSION_FILE`.
    pub fn open_default() -> Self {
        if let Ok(path) = std::env::var("EVENTY_SESSION_FILE") {
            return Self::new(path);
        }
        let base = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        Self::new(base.join("eventy").join("session.json"))
    }

    /// Path of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restore the persisted session, if any.
    ///
    /// A missing or unreadable file restores to "not logged in" rather than
    /// failing startup.
    pub fn load(&self) -> Option<Session> {
        let contents = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "discarding unreadable session file"
                );
                None
            }
        }
    }

    /// Persist the session, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        Ok(())
    }

    /// Remove the persisted session. Removing an absent session is not an
    /// error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::auth::{Profile, UserRole};

/// Session file name in the data directory
const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub profile: Profile,
    pub signed_in_at: chrono::DateTime<chrono::Utc>,
}

/// The locally persisted sign-in state.
///
/// Holds the profile returned by the auth provider so the app can start
/// offline with the right role and user id. Signing out clears the file.
pub struct Session {
    data_dir: PathBuf,
    pub data: Option<SessionData>,
}

impl Session {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            data: None,
        }
    }

    /// Load the persisted session from disk. Returns whether one was found.
    pub fn load(&mut self) -> Result<bool> {
        let path = self.session_path();
        if path.exists() {
            let contents =
                std::fs::read_to_string(&path).context("Failed to read session file")?;
            let data: SessionData =
                serde_json::from_str(&contents).context("Failed to parse session file")?;
            self.data = Some(data);
            return Ok(true);
        }
        Ok(false)
    }

    /// Save the current session to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(ref data) = self.data {
            let path = self.session_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let contents = serde_json::to_string_pretty(data)?;
            std::fs::write(path, contents)?;
        }
        Ok(())
    }

    /// Clear session state, both in memory and on disk.
    pub fn clear(&mut self) -> Result<()> {
        self.data = None;
        let path = self.session_path();
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Replace the session with a freshly signed-in profile.
    pub fn update(&mut self, profile: Profile) {
        self.data = Some(SessionData {
            profile,
            signed_in_at: chrono::Utc::now(),
        });
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.data.as_ref().map(|d| &d.profile)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.profile().map(|p| p.id.as_str())
    }

    pub fn role(&self) -> Option<UserRole> {
        self.profile().map(|p| p.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.data.is_some()
    }

    fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE)
    }
}

//! Session persistence.
//!
//! The portal trusts a single durable key-value entry holding the serialized
//! user: presence restores the session without re-authentication, absence
//! means logged out. There is no credential check anywhere — logins are
//! mock. A real deployment must replace this with a signed, verified token.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub email: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to persist session: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed session store.
///
/// Holds the current user in memory and mirrors it to a single JSON file so
/// a restart restores the session. A corrupt or unreadable file is treated
/// as "no session" — restore never fails loudly.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    current: RwLock<Option<User>>,
}

impl SessionStore {
    /// Open the store and restore any persisted session.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let current = restore_from(&path);
        SessionStore {
            path,
            current: RwLock::new(current),
        }
    }

    /// Synthesize a user for the given role and persist it. No credentials
    /// are involved; the display name and email are role defaults.
    pub fn login(&self, role: Role) -> Result<User, SessionError> {
        let user = User {
            id: synth_user_id(),
            name: role.default_display_name().to_string(),
            role,
            email: format!("{}@medicore.example", role.as_str()),
        };

        self.persist(&user)?;
        *self.current.write().unwrap() = Some(user.clone());
        info!(role = role.as_str(), "session started");
        Ok(user)
    }

    /// Clear the session in memory and on disk. Callers are expected to
    /// navigate back to the public entry route afterwards.
    pub fn logout(&self) {
        *self.current.write().unwrap() = None;
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                warn!("failed to remove session file: {}", e);
            }
        }
        info!("session cleared");
    }

    pub fn current_user(&self) -> Option<User> {
        self.current.read().unwrap().clone()
    }

    // Write to a temporary file first, then rename into place so a crash
    // mid-write can never leave a half-written session behind.
    fn persist(&self, user: &User) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_vec_pretty(user)?;
        let temp_path = self.path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(&serialized)?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

fn restore_from(path: &Path) -> Option<User> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return None,
    };

    match serde_json::from_str(&contents) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("discarding corrupt session payload: {}", e);
            None
        }
    }
}

fn synth_user_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("usr-{}", &uuid[..8])
}

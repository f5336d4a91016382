//! Session context: the signed-in user, bearer token, and last selections.
//!
//! An explicit object handed to whatever needs it (API client, views), not
//! a module-level singleton. Restore/persist are the serialize/deserialize
//! lifecycle hooks, bound to a JSON file in the platform config directory.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::{EntityId, User};

/// Current session state. Everything here is client-side convenience;
/// authorization is enforced by the server on every call.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    token: Option<String>,
    user: Option<User>,
    /// Workspace the user last worked in, restored across launches.
    pub active_workspace: Option<EntityId>,
}

/// On-disk form of the session.
#[derive(Debug, Serialize, Deserialize)]
struct SessionSnapshot {
    token: Option<String>,
    user_id: Option<EntityId>,
    user_email: Option<String>,
    user_name: Option<String>,
    active_workspace: Option<EntityId>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a fresh token and user after login.
    pub fn begin(&mut self, token: String, user: User) {
        log::info!("Session started for {}", user.email);
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Drop the session on sign-out.
    pub fn end(&mut self) {
        log::info!("Session ended");
        self.token = None;
        self.user = None;
        self.active_workspace = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Restore the previous session from disk, or start signed out if there
    /// is none (or it cannot be read).
    pub fn restore() -> Self {
        let Some(path) = session_file_path() else {
            return Self::new();
        };
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(_) => return Self::new(),
        };
        match serde_json::from_str::<SessionSnapshot>(&data) {
            Ok(snapshot) => {
                log::info!("Restored session from {:?}", path);
                let user = match (snapshot.user_id, snapshot.user_email) {
                    (Some(id), Some(email)) => Some(User {
                        id,
                        email,
                        name: snapshot.user_name.unwrap_or_default(),
                    }),
                    _ => None,
                };
                Self {
                    token: snapshot.token,
                    user,
                    active_workspace: snapshot.active_workspace,
                }
            }
            Err(e) => {
                log::warn!("Discarding unreadable session file: {}", e);
                Self::new()
            }
        }
    }

    /// Write the session to disk. Failures are logged and otherwise
    /// ignored; losing the session only costs a re-login.
    pub fn persist(&self) {
        let Some(path) = session_file_path() else {
            return;
        };
        let snapshot = SessionSnapshot {
            token: self.token.clone(),
            user_id: self.user.as_ref().map(|user| user.id),
            user_email: self.user.as_ref().map(|user| user.email.clone()),
            user_name: self.user.as_ref().map(|user| user.name.clone()),
            active_workspace: self.active_workspace,
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::warn!("Could not create session directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => {
                if let Err(e) = fs::write(&path, json) {
                    log::warn!("Could not persist session: {}", e);
                }
            }
            Err(e) => log::warn!("Could not serialize session: {}", e),
        }
    }
}

/// Location of the session file under the platform config directory.
fn session_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("visiondesk").join("session.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_and_end() {
        let mut session = SessionContext::new();
        assert!(!session.is_authenticated());

        session.begin(
            "tok-123".to_string(),
            User {
                id: 1,
                email: "user@example.com".to_string(),
                name: "User".to_string(),
            },
        );
        session.active_workspace = Some(7);
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok-123"));

        session.end();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(session.active_workspace.is_none());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let snapshot = SessionSnapshot {
            token: Some("tok".to_string()),
            user_id: Some(4),
            user_email: Some("a@b.c".to_string()),
            user_name: Some("A".to_string()),
            active_workspace: Some(2),
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.token.as_deref(), Some("tok"));
        assert_eq!(back.user_id, Some(4));
        assert_eq!(back.active_workspace, Some(2));
    }
}

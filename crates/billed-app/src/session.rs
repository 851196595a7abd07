//! Session storage.
//!
//! The logged-in user lives as one JSON record in a file, the durable
//! rendition of the "user" key the web client kept in local storage. The
//! submission workflow consumes it read-only through the `SessionStore`
//! trait; only the login/logout plumbing writes it.

use std::fs;
use std::io;
use std::path::PathBuf;

use billed_core::models::SessionUser;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No user is logged in (session file {} is missing)", .0.display())]
    NotLoggedIn(PathBuf),

    #[error("Session record is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Session I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Read access to the logged-in user. Injected into the services rather
/// than read from ambient global state.
pub trait SessionStore: Send + Sync {
    fn current_user(&self) -> Result<SessionUser, SessionError>;
}

/// Session store backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Persist the user record, creating parent directories as needed.
    pub fn login(&self, user: &SessionUser) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let record = serde_json::to_string(user)?;
        fs::write(&self.path, record)?;
        Ok(())
    }

    /// Remove the session record. Logging out twice is fine.
    pub fn logout(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn current_user(&self) -> Result<SessionUser, SessionError> {
        let record = match fs::read_to_string(&self.path) {
            Ok(record) => record,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(SessionError::NotLoggedIn(self.path.clone()))
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&record)?)
    }
}

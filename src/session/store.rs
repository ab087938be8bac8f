//! Session store implementation
//!
//! Provides file-based session persistence with atomic writes.

use super::types::{Session, SessionFile};
use crate::error::{Error, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Store for persisting and loading a session
#[derive(Debug)]
pub struct SessionStore {
    /// Path to the session file
    path: PathBuf,
    /// Current session (cached)
    session: Arc<RwLock<Session>>,
    /// Whether to auto-save on every update
    auto_save: bool,
}

impl SessionStore {
    /// Create a new store with the given path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            session: Arc::new(RwLock::new(Session::default())),
            auto_save: true,
        }
    }

    /// Create a store with auto-save disabled
    pub fn without_auto_save(path: impl AsRef<Path>) -> Self {
        Self {
            auto_save: false,
            ..Self::new(path)
        }
    }

    /// Create an in-memory store (no file persistence)
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::new(),
            session: Arc::new(RwLock::new(Session::default())),
            auto_save: false,
        }
    }

    /// Create a store from a file, loading the existing session if present
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let session = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| Error::session(format!("Failed to read session file: {e}")))?;
            parse_session(&contents)?
        } else {
            Session::default()
        };

        Ok(Self {
            path,
            session: Arc::new(RwLock::new(session)),
            auto_save: true,
        })
    }

    /// Create an in-memory store from inline JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            path: PathBuf::new(),
            session: Arc::new(RwLock::new(parse_session(json)?)),
            auto_save: false,
        })
    }

    /// Path of the session file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the store has no backing file
    pub fn is_in_memory(&self) -> bool {
        self.path.as_os_str().is_empty()
    }

    /// Load the session from file, replacing the cached one
    pub async fn load(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::session(format!("Failed to read session file: {e}")))?;
        let loaded = parse_session(&contents)?;

        *self.session.write().await = loaded;
        Ok(())
    }

    /// Save the current session to file
    pub async fn save(&self) -> Result<()> {
        if self.is_in_memory() {
            return Ok(());
        }
        self.save_to_file(&self.path).await
    }

    /// Save the current session to a specific file path
    pub async fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = self.to_json_pretty().await?;

        // Write to temp file first, then rename for atomicity
        let path = path.as_ref();
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, &contents)
            .await
            .map_err(|e| Error::session(format!("Failed to write session file: {e}")))?;
        tokio::fs::rename(&temp_path, path)
            .await
            .map_err(|e| Error::session(format!("Failed to rename session file: {e}")))?;

        tracing::debug!(path = %path.display(), "Saved session");
        Ok(())
    }

    /// Snapshot of the current session
    pub async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Get a read lock on the current session
    pub async fn session(&self) -> tokio::sync::RwLockReadGuard<'_, Session> {
        self.session.read().await
    }

    /// Apply an edit to the session, saving afterwards when auto-save is on
    pub async fn update<T>(&self, edit: impl FnOnce(&mut Session) -> T) -> Result<T> {
        let out = {
            let mut session = self.session.write().await;
            edit(&mut session)
        };

        if self.auto_save {
            self.save().await?;
        }
        Ok(out)
    }

    /// Replace the document text
    pub async fn set_json(&self, json: impl Into<String>) -> Result<()> {
        let json = json.into();
        self.update(|s| s.json = json).await
    }

    /// Export the session as a pretty-printed JSON string
    pub async fn to_json_pretty(&self) -> Result<String> {
        let file = SessionFile {
            session: self.session.read().await.clone(),
            saved_at: Some(Utc::now()),
        };
        serde_json::to_string_pretty(&file)
            .map_err(|e| Error::session(format!("Failed to serialize session: {e}")))
    }
}

fn parse_session(contents: &str) -> Result<Session> {
    let file: SessionFile = serde_json::from_str(contents)
        .map_err(|e| Error::session(format!("Failed to parse session: {e}")))?;
    Ok(file.session)
}

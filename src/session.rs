//! Session persistence.
//!
//! The session store is the single source of truth for "are we
//! authenticated" and holds the minimal payload needed to render UI without
//! a round trip: the bearer token plus cached user and wallet mirrors.
//!
//! Access is synchronous. Only [`AuthClient`](crate::client::AuthClient)
//! login/register ever write a session; the gateway re-reads the store on
//! every attempt, so once `clear` runs no later request can carry the old
//! token, and an in-flight request finishing after the clear cannot
//! resurrect it either.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::{fs, io};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::objects::auth::User;
use crate::objects::wallet::Wallet;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "access_token";
/// Storage key for the serialized user object.
pub const USER_KEY: &str = "user";
/// Storage key for the serialized wallet object.
pub const WALLET_KEY: &str = "wallet";

/// The authenticated state persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: User,
    pub wallet: Option<Wallet>,
}

/// Errors produced while persisting a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pluggable session persistence.
///
/// `save` is all-or-nothing: if any part of the session fails to persist,
/// the store must not report a session afterwards. `clear` is idempotent
/// and infallible; clearing an empty store is a no-op.
pub trait SessionStore: Send + Sync {
    fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    fn load(&self) -> Option<Session>;

    fn clear(&self);

    /// The current bearer token, if a session is stored.
    fn token(&self) -> Option<String> {
        self.load().map(|session| session.access_token)
    }
}

// ---------------------------------------------------------------------------
// MemorySessionStore
// ---------------------------------------------------------------------------

/// In-memory store, for tests and short-lived embedders.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(session.clone());
        Ok(())
    }

    fn load(&self) -> Option<Session> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn clear(&self) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }
}

// ---------------------------------------------------------------------------
// FileSessionStore
// ---------------------------------------------------------------------------

/// Durable store keeping the session under three fixed keys in a directory,
/// the same layout the browser build keeps in local storage: the raw token
/// under [`TOKEN_KEY`] and the user/wallet mirrors as JSON files.
///
/// No schema versioning is applied; an incompatible backend change requires
/// a coordinated client update.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_KEY)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(format!("{USER_KEY}.json"))
    }

    fn wallet_path(&self) -> PathBuf {
        self.dir.join(format!("{WALLET_KEY}.json"))
    }

    fn try_write(&self, session: &Session) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.user_path(), serde_json::to_vec(&session.user)?)?;
        match &session.wallet {
            Some(wallet) => fs::write(self.wallet_path(), serde_json::to_vec(wallet)?)?,
            None => remove_if_exists(&self.wallet_path()),
        }
        // Token last: its presence is what makes a stored session loadable,
        // so a write that dies midway never yields a valid session.
        fs::write(self.token_path(), session.access_token.as_bytes())?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let result = self.try_write(session);
        if result.is_err() {
            self.clear();
        }
        result
    }

    fn load(&self) -> Option<Session> {
        let access_token = fs::read_to_string(self.token_path()).ok()?;
        if access_token.is_empty() {
            return None;
        }
        let user = fs::read(self.user_path())
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())?;
        let wallet = fs::read(self.wallet_path())
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok());
        Some(Session {
            access_token,
            user,
            wallet,
        })
    }

    fn clear(&self) {
        remove_if_exists(&self.token_path());
        remove_if_exists(&self.user_path());
        remove_if_exists(&self.wallet_path());
    }
}

fn remove_if_exists(path: &Path) {
    if let Err(err) = fs::remove_file(path) {
        if err.kind() != io::ErrorKind::NotFound {
            warn!(path = %path.display(), error = %err, "failed to remove session file");
        }
    }
}

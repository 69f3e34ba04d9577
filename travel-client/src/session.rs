//! Session state and lifecycle events.
//!
//! A [`Session`] is the token plus the cached user record, kept in a
//! [`SessionStorage`]. It is handed to the client at construction and can be
//! cloned by the host; every clone sees the same storage and event channel.
//!
//! Lifecycle:
//! - `Anonymous -> Authenticated` on successful login
//! - `Authenticated -> Anonymous` on logout or on any `401` response

use std::sync::Arc;

use shared::client::LoginResponse;
use shared::models::User;
use tokio::sync::broadcast;

use crate::error::{ClientError, ClientResult};
use crate::storage::{MemoryStorage, SessionStorage, TOKEN_KEY, USER_KEY};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Whether a token is currently stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// Session lifecycle notifications.
///
/// The client never navigates anywhere itself; hosts subscribe and decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Login succeeded and the session was persisted
    LoggedIn { username: String },
    /// Logout finished; the session is gone regardless of the backend outcome
    LoggedOut,
    /// A `401` was observed and the session was torn down.
    /// Emitted once per such response.
    Expired { redirect_to: String },
}

/// Authentication session backed by persistent storage
#[derive(Debug, Clone)]
pub struct Session {
    storage: Arc<dyn SessionStorage>,
    events: broadcast::Sender<SessionEvent>,
}

impl Session {
    /// Creates a session over the given storage
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self::from_shared(Arc::new(storage))
    }

    /// Creates a session over storage the caller keeps a handle to
    pub fn from_shared(storage: Arc<dyn SessionStorage>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { storage, events }
    }

    /// Creates a session that lives only in memory
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Returns the stored bearer token, read fresh from storage
    pub fn token(&self) -> ClientResult<Option<String>> {
        Ok(self.storage.get(TOKEN_KEY)?)
    }

    /// Returns the cached user record
    pub fn user(&self) -> ClientResult<Option<User>> {
        match self.storage.get(USER_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub fn state(&self) -> ClientResult<SessionState> {
        Ok(match self.token()? {
            Some(_) => SessionState::Authenticated,
            None => SessionState::Anonymous,
        })
    }

    /// Checks if a token is stored. Storage failures count as anonymous.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state(), Ok(SessionState::Authenticated))
    }

    /// Persists token and user after a successful login.
    ///
    /// Both entries are written or neither is: a failed write clears whatever
    /// was stored before returning the error.
    pub fn store_login(&self, login: &LoginResponse) -> ClientResult<()> {
        let user = serde_json::to_string(&login.user)?;
        let stored = self
            .storage
            .set(USER_KEY, &user)
            .and_then(|_| self.storage.set(TOKEN_KEY, &login.token));

        if let Err(e) = stored {
            if let Err(clear_err) = self.clear() {
                tracing::error!(error = %clear_err, "Failed to roll back partial login");
            }
            return Err(e.into());
        }
        Ok(())
    }

    /// Removes token and user. Both removals are attempted even if one fails.
    pub fn clear(&self) -> ClientResult<()> {
        let token = self.storage.remove(TOKEN_KEY);
        let user = self.storage.remove(USER_KEY);
        token.and(user).map_err(ClientError::from)
    }

    /// Subscribes to session lifecycle events
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub(crate) fn emit(&self, event: SessionEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }

    /// Tears the session down after a `401` and announces it
    pub(crate) fn expire(&self, redirect_to: &str) {
        if let Err(e) = self.clear() {
            tracing::error!(error = %e, "Failed to clear session storage after 401");
        }
        self.emit(SessionEvent::Expired {
            redirect_to: redirect_to.to_string(),
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::in_memory()
    }
}

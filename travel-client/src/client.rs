//! `TravelClient` definition and builder.
//!
//! Resource operations live in [`crate::api`], one file per backend resource.

use std::sync::Arc;
use std::time::Duration;

use shared::models::User;
use tokio::sync::broadcast;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::NetworkHttpClient;
use crate::session::{Session, SessionEvent, SessionState};
use crate::storage::SessionStorage;

// ============================================================================
// Core TravelClient Definition
// ============================================================================

/// Typed client for the travel booking backend.
///
/// Cheap to clone; clones share the connection pool and the session.
///
/// # Example
///
/// ```no_run
/// use travel_client::{ClientConfig, LoginRequest, Session, TravelClient};
///
/// # async fn example() -> Result<(), travel_client::ClientError> {
/// let session = Session::in_memory();
/// let client = TravelClient::new(ClientConfig::from_env(), session.clone())?;
///
/// let mut events = session.subscribe();
/// client.login(&LoginRequest::new("hanako", "secret")).await?;
/// let tours = client.list_available_tours().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TravelClient {
    pub(crate) http: NetworkHttpClient,
}

impl TravelClient {
    /// Creates a client over an explicit session
    pub fn new(config: ClientConfig, session: Session) -> ClientResult<Self> {
        Ok(Self {
            http: NetworkHttpClient::new(&config, session)?,
        })
    }

    /// Creates a builder
    pub fn builder() -> TravelClientBuilder {
        TravelClientBuilder::new()
    }

    /// Returns the session this client authenticates with
    pub fn session(&self) -> &Session {
        self.http.session()
    }

    /// Subscribes to session lifecycle events (login, logout, expiry)
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.session().subscribe()
    }

    pub fn state(&self) -> ClientResult<SessionState> {
        self.session().state()
    }

    /// Checks if a token is currently stored
    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    /// Returns the cached user record. No request is made.
    pub fn current_user(&self) -> ClientResult<Option<User>> {
        self.session().user()
    }

    /// Returns the base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`TravelClient`].
///
/// # Example
///
/// ```no_run
/// use travel_client::{FileStorage, TravelClient};
///
/// let client = TravelClient::builder()
///     .base_url("https://travel.example.com/api")
///     .storage(FileStorage::new("./.travel-session"))
///     .build()
///     .expect("Failed to build client");
/// ```
#[derive(Debug, Default)]
pub struct TravelClientBuilder {
    config: ClientConfig,
    session: Option<Session>,
}

impl TravelClientBuilder {
    /// Creates a builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.with_base_url(url);
        self
    }

    pub fn login_route(mut self, route: impl Into<String>) -> Self {
        self.config = self.config.with_login_route(route);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Uses an existing session (shared with the host)
    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Creates a fresh session over `storage`
    pub fn storage(mut self, storage: impl SessionStorage + 'static) -> Self {
        self.session = Some(Session::new(storage));
        self
    }

    /// Creates a fresh session over storage the caller keeps a handle to
    pub fn shared_storage(mut self, storage: Arc<dyn SessionStorage>) -> Self {
        self.session = Some(Session::from_shared(storage));
        self
    }

    /// Builds the client. Without a session, an in-memory one is used.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the base URL does not parse.
    pub fn build(self) -> ClientResult<TravelClient> {
        let session = self.session.unwrap_or_default();
        TravelClient::new(self.config, session)
    }
}

// ========== Auth API ==========

use shared::client::{LoginRequest, LoginResponse};

use crate::client::TravelClient;
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::session::SessionEvent;

impl TravelClient {
    /// Login with username and password.
    ///
    /// On success the token and user are persisted in the session and
    /// [`SessionEvent::LoggedIn`] is emitted. Invalid credentials surface as
    /// the backend's HTTP error (see [`ClientError::is_unauthorized`]).
    ///
    /// [`ClientError::is_unauthorized`]: crate::ClientError::is_unauthorized
    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<LoginResponse> {
        let response: LoginResponse = self.http.post("/auth/login", credentials).await?;

        self.session().store_login(&response)?;
        tracing::info!(username = %response.user.username, "Logged in");
        self.session().emit(SessionEvent::LoggedIn {
            username: response.user.username.clone(),
        });

        Ok(response)
    }

    /// Logout.
    ///
    /// Notifies the backend, then clears the session whatever the outcome.
    /// A backend failure is returned only after the session is gone.
    pub async fn logout(&self) -> ClientResult<()> {
        let notified = self.http.post_empty("/auth/logout").await;
        if let Err(e) = &notified {
            tracing::warn!(error = %e, "Backend logout failed, clearing session anyway");
        }

        let cleared = self.session().clear();
        tracing::info!("Logged out");
        self.session().emit(SessionEvent::LoggedOut);

        cleared.and(notified)
    }
}

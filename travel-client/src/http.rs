//! HTTP client for network-based API calls
//!
//! Every request passes through two hooks:
//! - outgoing: the token is read from the session *at send time* and attached
//!   as `Authorization: Bearer <token>` when present;
//! - incoming: a `401` clears the session and emits
//!   [`SessionEvent::Expired`](crate::SessionEvent::Expired) before the error
//!   is returned. Other statuses pass through untouched.

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::Session;

/// HTTP verb surface used by the resource operations
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    async fn get_with_query<T: DeserializeOwned + Send, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T>;
    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    /// POST without body, response body ignored
    async fn post_empty(&self, path: &str) -> ClientResult<()>;
    /// POST without body, response body returned as-is
    async fn post_text(&self, path: &str) -> ClientResult<String>;
    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    /// PATCH without body, response body ignored
    async fn patch_empty(&self, path: &str) -> ClientResult<()>;
    async fn delete(&self, path: &str) -> ClientResult<()>;
    /// GET with the response body returned as-is
    async fn get_text(&self, path: &str) -> ClientResult<String>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    login_route: String,
    session: Session,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig, session: Session) -> ClientResult<Self> {
        Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL {:?}: {}", config.base_url, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            login_route: config.login_route.clone(),
            session,
        })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Outgoing-request hook
    fn authorize(&self, request: RequestBuilder) -> ClientResult<RequestBuilder> {
        Ok(match self.session.token()? {
            Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        })
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let request = self.authorize(request)?.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = self.client.execute(request).await.map_err(|e| {
            tracing::debug!(%method, %path, error = %e, "API request failed without response");
            e
        })?;

        tracing::debug!(%method, %path, status = %response.status(), "API request");
        self.handle_response(response).await
    }

    /// Incoming-response hook
    async fn handle_response(&self, response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(redirect_to = %self.login_route, "Received 401, clearing session");
            self.session.expire(&self.login_route);
        }

        // An unreadable body is reported as empty; the status still carries the error
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(%status, error = %e, "Failed to read error response body");
                String::new()
            }
        };
        Err(ClientError::Status { status, body })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Self::decode(response).await
    }

    async fn get_with_query<T: DeserializeOwned + Send, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let response = self
            .send(self.request(Method::GET, path).query(query))
            .await?;
        Self::decode(response).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .send(self.request(Method::POST, path).json(body))
            .await?;
        Self::decode(response).await
    }

    async fn post_empty(&self, path: &str) -> ClientResult<()> {
        self.send(self.request(Method::POST, path)).await?;
        Ok(())
    }

    async fn post_text(&self, path: &str) -> ClientResult<String> {
        let response = self.send(self.request(Method::POST, path)).await?;
        Ok(response.text().await?)
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .send(self.request(Method::PUT, path).json(body))
            .await?;
        Self::decode(response).await
    }

    async fn patch_empty(&self, path: &str) -> ClientResult<()> {
        self.send(self.request(Method::PATCH, path)).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    async fn get_text(&self, path: &str) -> ClientResult<String> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Ok(response.text().await?)
    }
}

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::session::Session;
use crate::config::Config;
use crate::error::ApiError;

/// JSON-over-HTTP client for the attendance service.
///
/// Requests other than login carry the session's bearer token; a client
/// without a session refuses them with `ApiError::Unauthorized`.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Option<Session>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Self::with_timeout(&config.api_base_url, config.request_timeout)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session: None,
        })
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn session(&self) -> Result<&Session, ApiError> {
        self.session.as_ref().ok_or(ApiError::Unauthorized)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Request without credentials (login only).
    pub(crate) fn public(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    pub(crate) fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let session = self.session()?;
        Ok(self
            .http
            .request(method, self.url(path))
            .header(reqwest::header::AUTHORIZATION, session.bearer()))
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, ApiError> {
        let resp = Self::send(req).await?;
        Ok(resp.json::<T>().await?)
    }

    pub(crate) async fn send_empty(req: RequestBuilder) -> Result<(), ApiError> {
        Self::send(req).await.map(|_| ())
    }

    /// Sends and turns non-2xx replies into `ApiError`.
    pub(crate) async fn send(req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        debug!(url = %resp.url(), status = status.as_u16(), "api response");

        if status.is_success() {
            return Ok(resp);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        let body = match resp.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                debug!(error = %e, status = status.as_u16(), "could not read error body");
                None
            }
        };
        Err(status_error(status, body.as_deref()))
    }
}

/// Builds the error for a non-success reply, falling back to the canonical
/// reason when the body is unreadable or carries no message.
pub(crate) fn status_error(status: StatusCode, body: Option<&str>) -> ApiError {
    ApiError::Status {
        status: status.as_u16(),
        message: body
            .and_then(server_message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string()),
    }
}

/// Pulls `message` (or `error`) out of a JSON error body.
pub(crate) fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

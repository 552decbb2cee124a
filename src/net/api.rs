//! JSON REST client for the remote API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every outbound call goes through [`ApiClient`], which reads the bearer token
//! from the session store before sending and wipes the session when the server
//! answers 401.
//!
//! ERROR HANDLING
//! ==============
//! Failures are returned as [`ApiError`] without translation; pages decide what
//! the user sees. The 401 cleanup is local and best-effort: reactive auth
//! state elsewhere is not touched here (see `AuthProvider::resync`).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, ErrorBody};
use super::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::config::ApiConfig;
use crate::state::session::SessionStore;
use crate::util::storage::KeyValueStore;

/// Bearer-authenticated JSON client.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    config: ApiConfig,
    transport: T,
    session: SessionStore<S>,
}

impl<T: HttpTransport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(config: ApiConfig, transport: T, session: SessionStore<S>) -> Self {
        Self { config, transport, session }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET path` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let resp = self.dispatch(self.build(HttpMethod::Get, path, None)).await?;
        decode(&resp)
    }

    /// `POST path` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// unencodable/undecodable payload.
    pub async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let body = encode(body)?;
        let resp = self.dispatch(self.build(HttpMethod::Post, path, Some(body))).await?;
        decode(&resp)
    }

    /// `PUT path` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::post`].
    pub async fn put<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let body = encode(body)?;
        let resp = self.dispatch(self.build(HttpMethod::Put, path, Some(body))).await?;
        decode(&resp)
    }

    /// `DELETE path`; any response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.dispatch(self.build(HttpMethod::Delete, path, None)).await?;
        Ok(())
    }

    fn build(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        HttpRequest { method, url: self.config.endpoint(path), headers, body }
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let resp = self.transport.send(request).await?;
        if resp.status == 401 {
            leptos::logging::warn!("unauthorized response; clearing stored session");
            self.session.clear();
        }
        if !resp.is_success() {
            return Err(ApiError::Status { status: resp.status, body: ErrorBody::parse(&resp.body) });
        }
        Ok(resp)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(resp: &HttpResponse) -> Result<R, ApiError> {
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}

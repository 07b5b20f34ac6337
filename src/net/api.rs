//! REST client for the academic backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and host tests: every call returns
//! [`ApiError::Unavailable`], since the views only talk to the backend from
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` and decide how to render the failure.
//! Nothing here retries, deduplicates or times out requests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, ErrorBody};
use super::types::decode_list;
use crate::config::ApiConfig;

/// HTTP verbs used by the views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// REST collections exposed by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Instructors,
    Students,
    Cohorts,
    /// Read-only cohort listing used by the student form.
    CohortLookup,
    TeachingSpaces,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Self::Instructors => "/formateurs/",
            Self::Students => "/etudiants/",
            Self::Cohorts => "/promotion/",
            Self::CohortLookup => "/promotions/",
            Self::TeachingSpaces => "/espace-pedagogique/espaces/",
        }
    }

    /// Verb used to update an existing record.
    pub fn update_method(self) -> Method {
        match self {
            Self::Cohorts => Method::Put,
            _ => Method::Patch,
        }
    }
}

/// Handle shared through Leptos context by every view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Method and URL for a write: `POST` on the collection without an id,
    /// the resource's update verb on the item otherwise.
    pub fn write_target(&self, resource: Resource, id: Option<&str>) -> (Method, String) {
        match id {
            None => (Method::Post, self.config.endpoint(resource.path())),
            Some(id) => (resource.update_method(), self.config.item(resource.path(), id)),
        }
    }

    /// `GET` a collection and normalize the list envelope.
    ///
    /// # Errors
    ///
    /// Returns the transport/status error, or [`ApiError::Decode`] when the
    /// body is not a recognizable list.
    pub async fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, ApiError> {
        let url = self.config.endpoint(resource.path());
        let body = send(Method::Get, &url, None).await?;
        decode_list(&body).map_err(|e| {
            log::warn!("list decode failed: url={url} error={e}");
            ApiError::Decode(e)
        })
    }

    /// Create (`id == None`) or update a record, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Returns the transport or status error.
    pub async fn save<P: Serialize>(&self, resource: Resource, id: Option<&str>, payload: &P) -> Result<(), ApiError> {
        let (method, url) = self.write_target(resource, id);
        let body = encode(payload)?;
        send(method, &url, Some(body)).await.map(|_| ())
    }

    /// `POST` a new record and decode the created representation.
    ///
    /// # Errors
    ///
    /// Returns the transport/status error, or [`ApiError::Decode`] when the
    /// response is not the expected record.
    pub async fn create<P: Serialize, T: DeserializeOwned>(&self, resource: Resource, payload: &P) -> Result<T, ApiError> {
        let (method, url) = self.write_target(resource, None);
        let body = encode(payload)?;
        let raw = send(method, &url, Some(body)).await?;
        decode_record(&url, &raw)
    }

    /// Partially update a record with `PATCH`, whatever the resource's usual verb.
    ///
    /// # Errors
    ///
    /// Returns the transport or status error.
    pub async fn patch<P: Serialize>(&self, resource: Resource, id: &str, payload: &P) -> Result<(), ApiError> {
        let url = self.config.item(resource.path(), id);
        let body = encode(payload)?;
        send(Method::Patch, &url, Some(body)).await.map(|_| ())
    }

    /// `DELETE` a record.
    ///
    /// # Errors
    ///
    /// Returns the transport or status error.
    pub async fn delete(&self, resource: Resource, id: &str) -> Result<(), ApiError> {
        let url = self.config.item(resource.path(), id);
        send(Method::Delete, &url, None).await.map(|_| ())
    }
}

fn encode<P: Serialize>(payload: &P) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| {
        log::warn!("payload encode failed: {e}");
        ApiError::Decode(e.to_string())
    })
}

fn decode_record<T: DeserializeOwned>(url: &str, raw: &str) -> Result<T, ApiError> {
    serde_json::from_str(raw).map_err(|e| {
        log::warn!("record decode failed: url={url} error={e}");
        ApiError::Decode(e.to_string())
    })
}

/// Map the body read of a completed response to its text or an error. An
/// unreadable body is a network failure whatever the status.
#[cfg(any(test, feature = "hydrate"))]
fn read_response<E: std::fmt::Display>(url: &str, status: u16, body: Result<String, E>) -> Result<String, ApiError> {
    let body = body.map_err(|e| {
        log::warn!("{url} body read failed: status={status} error={e}");
        ApiError::Network(e.to_string())
    })?;
    check_response(status, body)
}

/// Map a completed response to its body or a status error.
#[cfg(any(test, feature = "hydrate"))]
fn check_response(status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::Status { status, body: ErrorBody::from_raw(&body) })
    }
}

#[cfg(feature = "hydrate")]
async fn send(method: Method, url: &str, body: Option<String>) -> Result<String, ApiError> {
    use gloo_net::http::Request;

    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    }
    .header("Accept", "application/json");

    let request = match body {
        Some(json) => builder.header("Content-Type", "application/json").body(json),
        None => builder.build(),
    }
    .map_err(|e| {
        log::warn!("{} {url} request build failed: {e}", method.as_str());
        ApiError::Network(e.to_string())
    })?;

    let resp = request.send().await.map_err(|e| {
        log::warn!("{} {url} failed: {e}", method.as_str());
        ApiError::Network(e.to_string())
    })?;
    let status = resp.status();
    let text = resp.text().await;
    read_response(url, status, text).inspect_err(|err| {
        log::warn!("{} {url} returned {status}: {err}", method.as_str());
    })
}

#[cfg(not(feature = "hydrate"))]
async fn send(method: Method, url: &str, body: Option<String>) -> Result<String, ApiError> {
    let _ = (method, url, body);
    Err(ApiError::Unavailable)
}

/// Resource client for the feedback backend. Single point of contact with the
/// REST API: classifies outcomes, never retries, never recovers.
use gloo_net::http::{Request, Response};
use leptos::logging::{error, log};
use serde_json::Value;
use thiserror::Error;

use crate::models::feedback::{Feedback, FeedbackDraft, ListResponse, Page};
use crate::validation::FieldErrors;

/// Used when `FEEDBACKWARE_API_URL` was not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No usable response came back: connectivity failure, or a success
    /// response whose body could not be decoded.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered 404 for the requested record.
    #[error("feedback not found")]
    NotFound,
    /// The backend rejected a write with a field-keyed 400 body.
    #[error("validation rejected by server")]
    Validation(FieldErrors),
    /// Any other non-2xx status.
    #[error("server error (status {0})")]
    Server(u16),
}

/// Maps a non-2xx status with no field-error body to an error kind.
pub fn status_error(status: u16) -> ApiError {
    if status == 404 {
        ApiError::NotFound
    } else {
        ApiError::Server(status)
    }
}

/// Normalizes a 400 body into field -> message. DRF reports each field as a
/// list of messages; those are joined into one line. A body that is not a
/// JSON object yields `None` and the caller falls back to a plain server
/// error.
pub fn field_errors_from_value(value: &Value) -> Option<FieldErrors> {
    let object = value.as_object()?;
    let mut errors = FieldErrors::new();
    for (field, messages) in object {
        let message = match messages {
            Value::String(message) => message.clone(),
            Value::Array(parts) => parts
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" "),
            other => other.to_string(),
        };
        errors.insert(field.clone(), message);
    }
    Some(errors)
}

/// Filter criteria for the list endpoint. Blank values are left out of the
/// query entirely; `rating` keeps the select's string value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilters {
    pub name: String,
    pub rating: String,
}

#[derive(Clone, PartialEq)]
pub struct FeedbackApi {
    base_url: String,
}

impl FeedbackApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        FeedbackApi {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL baked in at build time, like the original deployment's
    /// environment-driven API host.
    pub fn from_env() -> Self {
        FeedbackApi::new(option_env!("FEEDBACKWARE_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn list_url(&self, filters: &ListFilters, page: u32) -> String {
        let mut url = format!("{}/feedback/?page={}", self.base_url, page);
        let name = filters.name.trim();
        if !name.is_empty() {
            url.push_str("&name=");
            url.push_str(&urlencoding::encode(name));
        }
        if !filters.rating.is_empty() {
            url.push_str("&rating=");
            url.push_str(&filters.rating);
        }
        url
    }

    pub fn record_url(&self, id: u64) -> String {
        format!("{}/feedback/{}/", self.base_url, id)
    }

    /// One page of feedback, newest first as delivered by the backend.
    pub async fn list(&self, filters: &ListFilters, page: u32) -> Result<Page<Feedback>, ApiError> {
        let url = self.list_url(filters, page);
        log!("[API] GET {}", url);
        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(transport_error)?;
        if !response.ok() {
            return Err(logged(status_error(response.status()), "list", &url));
        }
        response
            .json::<ListResponse>()
            .await
            .map(Page::from)
            .map_err(transport_error)
    }

    pub async fn get(&self, id: u64) -> Result<Feedback, ApiError> {
        let url = self.record_url(id);
        log!("[API] GET {}", url);
        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(transport_error)?;
        if !response.ok() {
            return Err(logged(status_error(response.status()), "get", &url));
        }
        response.json::<Feedback>().await.map_err(transport_error)
    }

    pub async fn create(&self, draft: &FeedbackDraft) -> Result<Feedback, ApiError> {
        let url = format!("{}/feedback/", self.base_url);
        log!("[API] POST {}", url);
        let response = Request::post(&url)
            .json(draft)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        Self::record_from_write(response, "create", &url).await
    }

    pub async fn update(&self, id: u64, draft: &FeedbackDraft) -> Result<Feedback, ApiError> {
        let url = self.record_url(id);
        log!("[API] PUT {}", url);
        let response = Request::put(&url)
            .json(draft)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        Self::record_from_write(response, "update", &url).await
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let url = self.record_url(id);
        log!("[API] DELETE {}", url);
        let response = Request::delete(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(transport_error)?;
        if !response.ok() {
            return Err(logged(status_error(response.status()), "delete", &url));
        }
        Ok(())
    }

    /// Shared tail of create and update: 2xx carries the saved record, 400
    /// carries field errors when the body is a JSON object.
    async fn record_from_write(
        response: Response,
        operation: &str,
        url: &str,
    ) -> Result<Feedback, ApiError> {
        if response.ok() {
            return response.json::<Feedback>().await.map_err(transport_error);
        }
        if response.status() == 400 {
            if let Ok(body) = response.json::<Value>().await {
                if let Some(errors) = field_errors_from_value(&body) {
                    return Err(logged(ApiError::Validation(errors), operation, url));
                }
            }
            return Err(logged(ApiError::Server(400), operation, url));
        }
        Err(logged(status_error(response.status()), operation, url))
    }
}

fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn logged(err: ApiError, operation: &str, url: &str) -> ApiError {
    error!("[API] {} {} failed: {}", operation, url, err);
    err
}

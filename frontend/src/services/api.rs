use gloo::net::http::Request;
use shared::UserDto;
use thiserror::Error;

/// Failures surfaced to the views. Nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The API answered with a non-success status
    #[error("Error fetching user with ID {id}: {status_text}")]
    Fetch { id: i64, status_text: String },
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// API client for communicating with the Contoso web API
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_url(&self, id: i64) -> String {
        format!("{}/user/{}", self.base_url, id)
    }

    /// Fetch a single user
    pub async fn get_user_by_id(&self, id: i64) -> Result<UserDto, ApiError> {
        let response = Request::get(&self.user_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Fetch {
                id,
                status_text: response.status_text(),
            });
        }

        response
            .json::<UserDto>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

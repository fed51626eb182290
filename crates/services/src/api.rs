use std::env;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::debug;

use profile_core::model::{Profile, ProfileUpdate, ProgressEntry};

use crate::auth_session::BearerToken;
use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3000/api";

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `PROFILE_API_URL`, falling back to [`Self::DEFAULT_BASE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("PROFILE_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.into());
        Self { base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Backend calls used by the profile page.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// `GET /auth/profile`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` for non-success responses and
    /// `ApiError::Http` for transport or decode failures.
    async fn fetch_profile(&self, token: &BearerToken) -> Result<Profile, ApiError>;

    /// `PUT /auth/profile`, returning the server's copy of the updated profile.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` for non-success responses and
    /// `ApiError::Http` for transport or decode failures.
    async fn update_profile(
        &self,
        token: &BearerToken,
        update: &ProfileUpdate,
    ) -> Result<Profile, ApiError>;

    /// `GET /progress/user`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` for non-success responses and
    /// `ApiError::Http` for transport or decode failures.
    async fn fetch_progress(&self, token: &BearerToken) -> Result<Vec<ProgressEntry>, ApiError>;
}

#[derive(Clone)]
pub struct HttpProfileApi {
    client: Client,
    config: ApiConfig,
}

impl HttpProfileApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ProfileApi for HttpProfileApi {
    async fn fetch_profile(&self, token: &BearerToken) -> Result<Profile, ApiError> {
        let url = self.config.endpoint("auth/profile");
        debug!(%url, "fetching profile");
        let response = self
            .client
            .get(url)
            .bearer_auth(token.as_str())
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn update_profile(
        &self,
        token: &BearerToken,
        update: &ProfileUpdate,
    ) -> Result<Profile, ApiError> {
        let url = self.config.endpoint("auth/profile");
        debug!(%url, username = %update.username, "updating profile");
        let response = self
            .client
            .put(url)
            .bearer_auth(token.as_str())
            .json(update)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let body: UpdateResponse = response.json().await?;
        Ok(body.user)
    }

    async fn fetch_progress(&self, token: &BearerToken) -> Result<Vec<ProgressEntry>, ApiError> {
        let url = self.config.endpoint("progress/user");
        debug!(%url, "fetching progress");
        let response = self
            .client
            .get(url)
            .bearer_auth(token.as_str())
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    // The error body is optional and may not be JSON at all.
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.is_empty());
    Err(ApiError::Status { status, message })
}

#[derive(Debug, Deserialize)]
struct UpdateResponse {
    user: Profile,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use reqwest::StatusCode;

    const PROFILE_JSON: &str = r#"{
        "username": "ana",
        "email": "a@x.com",
        "bio": null,
        "level": "beginner",
        "created_at": "2024-01-15T00:00:00Z"
    }"#;

    fn token() -> BearerToken {
        BearerToken::new("tok-123")
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ApiConfig::new("http://host/api/");
        assert_eq!(config.endpoint("/auth/profile"), "http://host/api/auth/profile");
        let config = ApiConfig::new("http://host/api");
        assert_eq!(config.endpoint("progress/user"), "http://host/api/progress/user");
    }

    #[tokio::test]
    async fn fetch_profile_sends_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/auth/profile")
            .match_header("authorization", "Bearer tok-123")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(PROFILE_JSON)
            .create_async()
            .await;

        let api = HttpProfileApi::new(ApiConfig::new(server.url()));
        let profile = api.fetch_profile(&token()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(profile.username, "ana");
        assert_eq!(profile.level.as_str(), "beginner");
    }

    #[tokio::test]
    async fn update_profile_puts_payload_and_unwraps_user() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/auth/profile")
            .match_header("authorization", "Bearer tok-123")
            .match_body(Matcher::Json(serde_json::json!({
                "username": "ana2",
                "bio": "hello",
                "profile_photo": null
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(
                r#"{{"message":"ok","user":{}}}"#,
                PROFILE_JSON.replace("\"ana\"", "\"ana2\"")
            ))
            .create_async()
            .await;

        let api = HttpProfileApi::new(ApiConfig::new(server.url()));
        let update = ProfileUpdate {
            username: "ana2".into(),
            bio: "hello".into(),
            profile_photo: None,
        };
        let profile = api.update_profile(&token(), &update).await.unwrap();

        mock.assert_async().await;
        assert_eq!(profile.username, "ana2");
    }

    #[tokio::test]
    async fn error_body_message_is_kept() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PUT", "/auth/profile")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"Username taken"}"#)
            .create_async()
            .await;

        let api = HttpProfileApi::new(ApiConfig::new(server.url()));
        let update = ProfileUpdate {
            username: "bob".into(),
            bio: String::new(),
            profile_photo: None,
        };
        let err = api.update_profile(&token(), &update).await.unwrap_err();
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message.as_deref(), Some("Username taken"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_has_no_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/progress/user")
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let api = HttpProfileApi::new(ApiConfig::new(server.url()));
        let err = api.fetch_progress(&token()).await.unwrap_err();
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, None);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_progress_decodes_entries() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/progress/user")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"completed":true,"score":80},{"completed":false,"score":null}]"#)
            .create_async()
            .await;

        let api = HttpProfileApi::new(ApiConfig::new(server.url()));
        let entries = api.fetch_progress(&token()).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].completed);
        assert_eq!(entries[1].score, None);
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        let api = HttpProfileApi::new(ApiConfig::new("http://127.0.0.1:1"));
        let err = api.fetch_profile(&token()).await.unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
    }
}

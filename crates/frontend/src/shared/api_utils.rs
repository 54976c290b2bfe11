//! HTTP helpers shared by every `api.rs` module.
//!
//! Each helper takes the API configuration and the current session
//! explicitly; nothing here reads the token from storage.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config::ApiConfig;
use crate::system::auth::session::Session;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Session expirée, veuillez vous reconnecter")]
    NotAuthenticated,

    #[error("Erreur réseau : {0}")]
    Network(String),

    #[error("Erreur serveur ({status}) : {message}")]
    Status { status: u16, message: String },

    #[error("Requête invalide : {0}")]
    Encode(String),

    #[error("Réponse invalide : {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(api: &ApiConfig, path: &str) -> String {
    format!("{}{}", api.base_url.trim_end_matches('/'), path)
}

/// Path segment safe for ids that are not plain numbers
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Turn a non-2xx response into an error
pub async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    if status == 401 {
        return Err(ApiError::NotAuthenticated);
    }
    let message = response.text().await.unwrap_or_default();
    let message = if message.trim().is_empty() {
        response.status_text()
    } else {
        message
    };
    Err(ApiError::Status { status, message })
}

pub async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(
    api: &ApiConfig,
    session: &Session,
    path: &str,
) -> Result<T, ApiError> {
    let response = Request::get(&api_url(api, path))
        .header("Authorization", &session.bearer())
        .send()
        .await?;
    decode_json(ensure_ok(response).await?).await
}

pub async fn post_json<B: Serialize>(
    api: &ApiConfig,
    session: &Session,
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let response = Request::post(&api_url(api, path))
        .header("Authorization", &session.bearer())
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;
    ensure_ok(response).await.map(|_| ())
}

pub async fn put_json<B: Serialize>(
    api: &ApiConfig,
    session: &Session,
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let response = Request::put(&api_url(api, path))
        .header("Authorization", &session.bearer())
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;
    ensure_ok(response).await.map(|_| ())
}

pub async fn post_empty(api: &ApiConfig, session: &Session, path: &str) -> Result<(), ApiError> {
    let response = Request::post(&api_url(api, path))
        .header("Authorization", &session.bearer())
        .send()
        .await?;
    ensure_ok(response).await.map(|_| ())
}

pub async fn delete(api: &ApiConfig, session: &Session, path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(api, path))
        .header("Authorization", &session.bearer())
        .send()
        .await?;
    ensure_ok(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let api = ApiConfig {
            base_url: "https://localhost:44396/".to_string(),
        };
        assert_eq!(api_url(&api, "/api/Timesheet"), "https://localhost:44396/api/Timesheet");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ApiError::Status { status: 500, message: "boom".into() }.to_string(),
            "Erreur serveur (500) : boom"
        );
        assert_eq!(path_segment("a b/c"), "a%20b%2Fc");
    }
}

use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, decode_json, ensure_ok, ApiError};
use crate::shared::config::ApiConfig;

/// Login with user name and password
pub async fn login(api: &ApiConfig, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let response = Request::post(&api_url(api, "/api/Account/Login"))
        .json(request)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await?;

    decode_json(ensure_ok(response).await?).await
}

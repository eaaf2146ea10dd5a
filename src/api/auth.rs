//! OAuth token-exchange endpoint.
//!
//! The browser obtains an authorization code from the identity
//! provider's redirect and posts it here. The handler exchanges the
//! code for an access token, fetches the user's profile and returns a
//! normalized payload for the client to populate its auth store with.
//! Upstream failure detail is logged but never returned; clients only
//! see the generic single-field error shape.

use crate::AppResources;
use crate::error::ProviderError;
use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct CallbackRequest {
    pub code: Option<String>,
}

/// Normalized user info returned to the client.
///
/// `cpf` is filled from the provider's subject identifier, which for
/// this provider typically (not guaranteed) holds the national
/// identifier.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    pub cpf: String,
}

/// Single-field error shape used by every failure response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("Authorization code missing from request")]
    MissingCode,
    #[error("Code exchange failed: {0}")]
    Exchange(ProviderError),
    #[error("Profile fetch failed: {0}")]
    Profile(ProviderError),
}

impl IntoResponse for CallbackError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CallbackError::MissingCode => (
                StatusCode::BAD_REQUEST,
                "authorization code is required",
            ),
            CallbackError::Exchange(e) => {
                tracing::error!(error = %e, "Authorization code exchange failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to exchange authorization code",
                )
            }
            CallbackError::Profile(e) => {
                tracing::error!(error = %e, "User profile fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to fetch user profile",
                )
            }
        };
        (
            status,
            Json(ErrorBody {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// `POST /api/auth/callback`
///
/// Performs exactly two outbound calls, strictly in sequence; a missing
/// code fails before any outbound call is made.
#[tracing::instrument(skip(resources, body))]
pub async fn callback(
    Extension(resources): Extension<AppResources>,
    Json(body): Json<CallbackRequest>,
) -> Result<Json<UserInfo>, CallbackError> {
    let code = body
        .code
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or(CallbackError::MissingCode)?;

    let grant = resources
        .provider
        .exchange_code(code)
        .await
        .map_err(CallbackError::Exchange)?;

    let profile = resources
        .provider
        .fetch_profile(&grant.access_token)
        .await
        .map_err(CallbackError::Profile)?;

    Ok(Json(UserInfo {
        name: profile.name,
        email: profile.email,
        phone_number: profile.phone_number,
        cpf: profile.sub,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_code_maps_to_bad_request() {
        let response = CallbackError::MissingCode.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_failures_map_to_server_error() {
        let exchange = CallbackError::Exchange(ProviderError::Http {
            status: StatusCode::BAD_GATEWAY,
            context: "token endpoint".into(),
        });
        assert_eq!(
            exchange.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let profile = CallbackError::Profile(ProviderError::Http {
            status: StatusCode::FORBIDDEN,
            context: "user-info endpoint".into(),
        });
        assert_eq!(
            profile.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn user_info_serializes_with_camel_case_phone_number() {
        let info = UserInfo {
            name: Some("Maria".into()),
            email: Some("maria@example.org".into()),
            phone_number: Some("+5511999990000".into()),
            cpf: "12345678900".into(),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["phoneNumber"], "+5511999990000");
        assert_eq!(json["cpf"], "12345678900");
        assert!(json.get("phone_number").is_none());
    }
}

//! Outbound client for the external identity provider.
//!
//! Two calls, always in sequence: a form-encoded code-for-token exchange
//! against the token endpoint, then a bearer-authenticated fetch of the
//! user's profile from the user-info endpoint. No retries and no
//! caching; each sign-in performs exactly these two requests.

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use serde::Deserialize;

/// Successful token-endpoint response. Only the access token is used;
/// the provider's expiry and scope fields are ignored.
#[derive(Debug, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
}

/// Profile attributes as the provider returns them.
///
/// `sub` typically (not guaranteed) holds the user's CPF for this
/// provider, which is why the portal repurposes it as the national
/// identifier downstream.
#[derive(Debug, Deserialize)]
pub struct ProviderProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub sub: String,
}

#[derive(Clone)]
pub struct IdentityProvider {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl IdentityProvider {
    pub fn new(http: reqwest::Client, config: ProviderConfig) -> Self {
        Self { http, config }
    }

    /// Exchange an authorization code for an access token.
    #[tracing::instrument(skip(self, code))]
    pub async fn exchange_code(&self, code: &str) -> Result<TokenGrant, ProviderError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Http {
                status: response.status(),
                context: "token endpoint".into(),
            });
        }

        response
            .json::<TokenGrant>()
            .await
            .map_err(|e| ProviderError::InvalidJson {
                context: "token endpoint".into(),
                message: e.to_string(),
            })
    }

    /// Fetch the user's profile with the access token as bearer credential.
    #[tracing::instrument(skip(self, access_token))]
    pub async fn fetch_profile(&self, access_token: &str) -> Result<ProviderProfile, ProviderError> {
        let response = self
            .http
            .get(&self.config.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Http {
                status: response.status(),
                context: "user-info endpoint".into(),
            });
        }

        response
            .json::<ProviderProfile>()
            .await
            .map_err(|e| ProviderError::InvalidJson {
                context: "user-info endpoint".into(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_deserializes_with_missing_optional_fields() {
        let profile: ProviderProfile =
            serde_json::from_str(r#"{"sub":"12345678900"}"#).expect("deserialize");
        assert_eq!(profile.sub, "12345678900");
        assert!(profile.name.is_none());
        assert!(profile.email.is_none());
        assert!(profile.phone_number.is_none());
    }

    #[test]
    fn token_grant_ignores_extra_fields() {
        let grant: TokenGrant = serde_json::from_str(
            r#"{"access_token":"tok","token_type":"Bearer","expires_in":3600}"#,
        )
        .expect("deserialize");
        assert_eq!(grant.access_token, "tok");
    }
}

use crate::store::theme::Theme;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration build error: {0}")]
    Build(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// External identity provider endpoints and credentials.
///
/// The token and user-info URLs are fixed per deployment; the redirect
/// URI must match the one registered with the provider or the code
/// exchange is rejected upstream.
#[derive(Clone, Debug, Deserialize)]
pub struct ProviderConfig {
    pub token_url: String,
    pub userinfo_url: String,
    pub redirect_uri: String,
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    pub provider: ProviderConfig,
    /// Theme stamped on the document root until a visitor picks one.
    #[serde(default)]
    pub default_theme: Theme,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

/// Load application configuration from `config.yaml` + environment overrides.
///
/// Environment variable override convention: any var matching the key path
/// separated by double underscores (e.g. `PROVIDER__CLIENT_SECRET`)
/// overrides the file value.
///
/// Returns a `ConfigError` instead of panicking so the caller can decide
/// how to fail.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use config::{Config, Environment, File};
    let cfg = Config::builder()
        .add_source(File::with_name("config.yaml"))
        .add_source(Environment::default().separator("__"))
        .build()?;

    let app: AppConfig = cfg.try_deserialize()?;
    validate(&app)?;
    Ok(app)
}

fn validate(app: &AppConfig) -> Result<(), ConfigError> {
    let p = &app.provider;
    for (name, value) in [
        ("provider.token_url", &p.token_url),
        ("provider.userinfo_url", &p.userinfo_url),
        ("provider.redirect_uri", &p.redirect_uri),
        ("provider.client_id", &p.client_id),
        ("provider.client_secret", &p.client_secret),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{name} must not be empty")));
        }
    }
    for (name, value) in [
        ("provider.token_url", &p.token_url),
        ("provider.userinfo_url", &p.userinfo_url),
    ] {
        if !value.starts_with("http://") && !value.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "{name} must be an http(s) URL"
            )));
        }
    }
    Ok(())
}

/// Convenience helper for binaries wanting panic-on-error behaviour.
pub fn load_config_or_panic() -> AppConfig {
    match load_config() {
        Ok(c) => c,
        Err(e) => panic!("Failed to load configuration: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        AppConfig {
            bind_addr: default_bind_addr(),
            provider: ProviderConfig {
                token_url: "https://id.example.org/oauth/token".into(),
                userinfo_url: "https://id.example.org/oauth/userinfo".into(),
                redirect_uri: "https://portal.example.org/callback".into(),
                client_id: "portal".into(),
                client_secret: "s3cret".into(),
            },
            default_theme: Theme::default(),
        }
    }

    #[test]
    fn accepts_complete_provider_config() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn rejects_empty_client_secret() {
        let mut cfg = valid_config();
        cfg.provider.client_secret = "  ".into();
        let err = validate(&cfg).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("client_secret"));
    }

    #[test]
    fn rejects_non_http_token_url() {
        let mut cfg = valid_config();
        cfg.provider.token_url = "ftp://id.example.org/token".into();
        assert!(matches!(
            validate(&cfg),
            Err(ConfigError::Validation(msg)) if msg.contains("token_url")
        ));
    }

    #[test]
    fn default_bind_addr_is_all_interfaces() {
        assert_eq!(default_bind_addr(), "0.0.0.0:8080");
    }
}

//! Backend for a small donation-campaign portal.
//!
//! The portal delegates sign-in to an external identity provider: the
//! browser obtains an authorization code from the provider redirect and
//! posts it to this server, which exchanges it for an access token,
//! fetches the user's profile and returns a normalized user-info payload.
//! The crate also ships the client-facing state stores (authentication
//! and theme) used by the portal front-end.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::provider::IdentityProvider;
use crate::store::theme::ThemeStore;
use tokio::sync::RwLock;

pub mod api;
pub mod config;
pub mod error;
pub mod provider;
pub mod store;

/// Shared resources handed to every request handler via `axum::Extension`.
#[derive(Clone)]
pub struct AppResources {
    pub config: Arc<AppConfig>,
    pub provider: IdentityProvider,
    pub theme: Arc<RwLock<ThemeStore>>,
}

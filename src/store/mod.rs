//! Client-facing state stores for the portal front-end.
//!
//! - `auth` - signed-in user, bearer token and session flags, with a
//!   persisted subset surviving restarts
//! - `theme` - light/dark preference and the provider that reflects it
//!   onto the document root

pub mod auth;
pub mod theme;

pub use auth::{AuthStore, User};
pub use theme::{Theme, ThemeProvider, ThemeStore};

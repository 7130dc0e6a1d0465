//! OAuth2 sign-in for porter.
//!
//! This crate provides:
//! - The `/oauth/<provider>/<step>` login, callback and logout flow
//! - A Google provider and a mock provider (with the `mock` feature)
//! - In-memory session storage
//! - An Axum extractor for the current session

mod config;
mod cookies;
mod error;
mod extractors;
mod handlers;
mod providers;
mod sessions;
mod state;

pub use config::{AuthConfig, ProviderConfig};
pub use error::AuthError;
pub use extractors::CurrentSession;
pub use handlers::auth_routes;
pub use providers::GoogleProvider;
#[cfg(any(test, feature = "mock"))]
pub use providers::MockProvider;
pub use sessions::InMemorySessionStore;
pub use state::AuthState;

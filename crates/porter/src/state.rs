//! Shared application state.

use std::path::PathBuf;

use axum::extract::FromRef;
use porter_auth::AuthState;

/// Shared application state.
///
/// Cloned for each request handler; the session store inside `auth` is shared
/// by every clone.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    /// Directory static assets are served from.
    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn new(auth: AuthState, assets_dir: PathBuf) -> Self {
        Self { auth, assets_dir }
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

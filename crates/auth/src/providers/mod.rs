//! Identity provider implementations.
//!
//! This module contains implementations of `IdentityProvider` for:
//! - Google
//! - A mock provider for tests and local development (with `mock` feature)

mod google;
#[cfg(any(test, feature = "mock"))]
mod mock;

pub use google::GoogleProvider;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockProvider;

//! Functional core for porter.
//!
//! Types, traits and pure functions shared by the auth shell and the web
//! binary. Nothing in here performs I/O.

pub mod assets;
pub mod auth;

//! Common test utilities and helpers
//!
//! - `app` - router fixture over the in-memory store
//! - `auth_helpers` - registering users and minting tokens

#![allow(dead_code)]

pub mod app;
pub mod auth_helpers;

pub use app::*;
pub use auth_helpers::*;

//! Core components for pre-signing object storage URLs.
//!
//! This crate provides the foundational types and traits shared by the
//! s3presign services and the `s3-signed-url` binary.
//!
//! ## Overview
//!
//! - **Context**: a container that holds the environment implementation, so
//!   that only the outermost layer ever touches the process environment.
//! - **Traits**: [`ProvideCredential`] for credential loading and
//!   [`SigningCredential`] for validating loaded credentials.
//! - **Error**: a single [`Error`] type with an [`ErrorKind`] that callers
//!   can match on to pick an exit status.
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use s3presign_core::{Context, StaticEnv};
//!
//! let ctx = Context::new().with_env(StaticEnv {
//!     envs: HashMap::from([("AWS_ACCESS_KEY_ID".to_string(), "AKID".to_string())]),
//! });
//! assert_eq!(ctx.env_var("AWS_ACCESS_KEY_ID").as_deref(), Some("AKID"));
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC and base64 helpers
//! - [`time`]: wall clock helpers
//! - [`utils`]: data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
mod env;
pub use env::{Env, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, SigningCredential};
mod error;
pub use error::{Error, ErrorKind, Result};

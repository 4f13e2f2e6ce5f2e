//! Error types and the records produced when building them.
//!
//! This module provides the decorated [`AppError`], its aggregate payload
//! [`AppErrors`], the per-error [`ErrorConfig`] and the client-facing
//! [`ErrorInfo`] that a build produces.
//!
//! # Examples
//!
//! ```
//! use app_errors::{AppError, BaseError, Language};
//!
//! let err = AppError::new(BaseError::shared("ErrUserNotFound"))
//!     .with_param("id", 42);
//!
//! let result = err.build(&Language::EN, &[]);
//! assert_eq!(result.error_info.status, 500);
//! assert_eq!(result.error_info.code, "ErrUserNotFound");
//! ```
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::error::Error;
use std::sync::Arc;

pub mod app_error;
pub mod app_errors;
pub mod base_error;
pub mod error_config;
pub mod error_info;
pub mod language;
pub mod multi_error;
pub mod stack;
pub mod translation;
pub mod validation_error;

pub use app_error::*;
pub use app_errors::*;
pub use base_error::*;
pub use error_config::*;
pub use error_info::*;
pub use language::*;
pub use multi_error::*;
pub use stack::*;
pub use translation::*;
pub use validation_error::*;

/// SmallVec-backed collection used for children and unwrap results.
///
/// Uses inline storage for 1 element since most chains are single-step.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Reference-counted error whose address is its identity.
///
/// Base errors are passed around as `SharedError` so that the global
/// registry can key configurations by the error object itself rather than
/// by its message.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// Message substitution parameters handed to the translation function.
pub type Params = BTreeMap<String, serde_json::Value>;

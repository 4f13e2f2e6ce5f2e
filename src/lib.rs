//! Application errors enriched with status, code, translation and debug
//! metadata, rendered into client-facing [`ErrorInfo`].
//!
//! Base errors are registered once with their [`ErrorConfig`] in the
//! [`registry`]; anywhere in the application they are decorated as
//! [`AppError`]s; at the edge they are built into an [`ErrorInfo`] in the
//! language of the client.
//!
//! # Examples
//!
//! ## Registering and building
//!
//! ```
//! use app_errors::{config, registry, translation_fn, AppError, Config, ErrorConfig, Language};
//!
//! config::init(Config {
//!     translation_fn: Some(translation_fn(|lang, key, params| {
//!         Ok(match params.get("id") {
//!             Some(id) => format!("[{lang}] {key} #{id}"),
//!             None => format!("[{lang}] {key}"),
//!         })
//!     })),
//!     ..Default::default()
//! });
//!
//! let err_order_not_found =
//!     registry::create("ErrOrderNotFound", ErrorConfig::default().with_status(404));
//!
//! let result = AppError::new(err_order_not_found.clone())
//!     .with_param("id", 12)
//!     .build(&Language::FR, &[]);
//!
//! assert_eq!(result.error_info.status, 404);
//! assert_eq!(result.error_info.code, "ErrOrderNotFound");
//! assert_eq!(result.error_info.message, "[fr] ErrOrderNotFound #12");
//! assert_eq!(result.error_info.title, "[fr] Not Found #12");
//! assert!(result.trans_missing_keys.is_empty());
//! ```
//!
//! ## Validation errors
//!
//! ```
//! use app_errors::{new_validation_error, AppError, BaseError, BuildOption, Language};
//!
//! let err = new_validation_error([
//!     AppError::new(BaseError::shared("ErrEmailInvalid")),
//!     AppError::new(BaseError::shared("ErrPasswordShort")),
//! ])
//! .unwrap();
//!
//! let json = serde_json::to_value(
//!     err.build(&Language::EN, &[BuildOption::no_translation()]).error_info,
//! )
//! .unwrap();
//! assert_eq!(json["status"], 400);
//! assert_eq!(json["code"], "ErrValidation");
//! assert_eq!(json["errors"][1]["code"], "ErrPasswordShort");
//! ```

/// Helpers walking error chains by identity
pub mod chain;
/// Process-wide configuration
pub mod config;
/// Building the info of arbitrary errors
pub mod dispatch;
/// Macros for wrapping and decorating errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Process-wide mapping from base errors to their configs
pub mod registry;
/// Capability traits
pub mod traits;
/// Error types and build records
pub mod types;

pub use config::{wrap_fn, Config, WrapFn};
pub use dispatch::build;
pub use traits::*;
pub use types::*;

//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use app_errors::prelude::*;
//!
//! fn find_user(id: u64) -> AppResult<String> {
//!     Err(app_error!(BaseError::shared("ErrUserNotFound")).with_param("id", id))
//! }
//!
//! let err = find_user(7).unwrap_err();
//! let info = err.build(&Language::EN, &[BuildOption::no_translation()]).error_info;
//! assert_eq!(info.code, "ErrUserNotFound");
//! ```

// Macros
pub use crate::{app_error, wrapf};

// Core types
pub use crate::types::{
    AppError, BaseError, BuildOption, BuildResult, ErrorConfig, ErrorInfo, Language, LogLevel,
    SharedError,
};

// Traits
pub use crate::traits::{Buildable, ResultExt};

/// Result whose error side is a decorated error.
pub type AppResult<T> = Result<T, AppError>;

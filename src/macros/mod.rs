//! Shorthands for wrapping and decorating errors.
//!
//! - [`macro@crate::wrapf`] - Formats a message into a new stack-wrapped error, or
//!   prefixes an existing error with it.
//! - [`macro@crate::app_error`] - Decorates an error, optionally appending a
//!   formatted debug message.
//!
//! # Examples
//!
//! ```
//! use app_errors::{app_error, wrapf, BaseError};
//!
//! let root = BaseError::shared("ErrConnRefused");
//! let err = app_error!(wrapf!(root.clone(), "dialing {}", "10.0.0.7:5432"), "attempt {}", 3);
//!
//! assert_eq!(err.to_string(), "dialing 10.0.0.7:5432: ErrConnRefused");
//! assert!(err.is(&*root));
//! ```

/// Creates a stack-wrapped error from a format string, or prefixes an
/// existing [`SharedError`](crate::SharedError) with a formatted message.
///
/// # Examples
///
/// ```
/// use app_errors::{wrapf, BaseError};
///
/// let err = wrapf!("shard {} unavailable", 4);
/// assert_eq!(err.to_string(), "shard 4 unavailable");
///
/// let err = wrapf!(BaseError::shared("ErrTimeout"), "calling {}", "billing");
/// assert_eq!(err.to_string(), "calling billing: ErrTimeout");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($fmt:literal $($arg:tt)*) => {
        $crate::wrap($crate::BaseError::shared(format!($fmt $($arg)*)))
    };
    ($err:expr, $($arg:tt)+) => {
        $crate::wrap_context($err, format_args!($($arg)+))
    };
}

/// Wraps a [`SharedError`](crate::SharedError) in an [`AppError`](crate::AppError).
///
/// Extra arguments are formatted into the debug trail, which is only kept in
/// debug mode.
///
/// # Examples
///
/// ```
/// use app_errors::{app_error, BaseError};
///
/// let err = app_error!(BaseError::shared("ErrRateLimited"), "client {}", "c-42");
/// assert_eq!(err.to_string(), "ErrRateLimited");
/// assert!(err.debug().is_empty());
/// ```
#[macro_export]
macro_rules! app_error {
    ($err:expr $(,)?) => {
        $crate::AppError::new($err)
    };
    ($err:expr, $($arg:tt)+) => {
        $crate::AppError::new($err).with_debug(format_args!($($arg)+))
    };
}

//! Extension trait decorating the error side of a `Result`.

use crate::types::AppError;
use std::error::Error;

/// Converts `Result<T, E>` into `Result<T, AppError>`.
///
/// # Examples
///
/// ```
/// use app_errors::ResultExt;
///
/// fn parse_port(raw: &str) -> Result<u16, app_errors::AppError> {
///     raw.parse::<u16>().app_err_with(|err| err.with_param("raw", raw))
/// }
///
/// let err = parse_port("http").unwrap_err();
/// assert_eq!(err.params()["raw"], "http");
/// assert_eq!(parse_port("8080").unwrap(), 8080);
/// ```
pub trait ResultExt<T, E> {
    /// Wraps the error in a fresh [`AppError`].
    fn app_err(self) -> Result<T, AppError>;

    /// Wraps the error in a fresh [`AppError`] and decorates it with `f`.
    ///
    /// `f` only runs on the error path.
    fn app_err_with<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(AppError) -> AppError;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn app_err(self) -> Result<T, AppError> {
        self.map_err(AppError::from_error)
    }

    #[inline]
    fn app_err_with<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(AppError) -> AppError,
    {
        self.map_err(|err| f(AppError::from_error(err)))
    }
}

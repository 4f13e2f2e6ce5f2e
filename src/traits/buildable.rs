use crate::dispatch;
use crate::types::{AppError, BuildOption, BuildResult, Language, SharedError};

/// Values whose [`ErrorInfo`](crate::ErrorInfo) can be built in a language.
///
/// # Examples
///
/// ```
/// use app_errors::{AppError, BaseError, Buildable, BuildOption, Language, SharedError};
///
/// fn status_of(err: &dyn Buildable) -> u16 {
///     err.build(&Language::EN, &[BuildOption::no_translation()]).error_info.status
/// }
///
/// let raw: SharedError = BaseError::shared("ErrBroken");
/// assert_eq!(status_of(&raw), 500);
/// assert_eq!(status_of(&AppError::new(raw.clone())), 500);
/// ```
pub trait Buildable {
    fn build(&self, language: &Language, options: &[BuildOption]) -> BuildResult;
}

impl Buildable for AppError {
    #[inline]
    fn build(&self, language: &Language, options: &[BuildOption]) -> BuildResult {
        AppError::build(self, language, options)
    }
}

impl Buildable for SharedError {
    #[inline]
    fn build(&self, language: &Language, options: &[BuildOption]) -> BuildResult {
        dispatch::build(self, language, options)
    }
}

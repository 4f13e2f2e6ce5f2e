//! Building the info of any error.

use crate::chain;
use crate::types::{AppError, BuildOption, BuildResult, Language, SharedError};

/// Builds the info of `err`, whatever its type.
///
/// The nearest [`AppError`] in the `source()` chain of `err` is built with
/// `options`. Without one, `err` is decorated on the fly and built.
///
/// # Examples
///
/// ```
/// use app_errors::{build, wrap_context, AppError, BaseError, BuildOption, Language};
/// use std::sync::Arc;
///
/// let options = [BuildOption::no_translation()];
///
/// // a foreign error
/// let io: app_errors::SharedError = Arc::new(std::io::Error::other("disk unplugged"));
/// let info = build(&io, &Language::EN, &options).error_info;
/// assert_eq!(info.status, 500);
/// assert_eq!(info.message, "disk unplugged");
///
/// // a decorated error behind another layer
/// let inner = AppError::new(BaseError::shared("ErrQuotaExceeded")).with_param("limit", 10);
/// let outer = wrap_context(Arc::new(inner), "uploading");
/// let info = build(&outer, &Language::EN, &options).error_info;
/// assert_eq!(info.code, "ErrQuotaExceeded");
/// assert_eq!(info.message, "ErrQuotaExceeded");
/// ```
pub fn build(err: &SharedError, language: &Language, options: &[BuildOption]) -> BuildResult {
    match chain::find::<AppError>(&**err) {
        Some(app_error) => app_error.build(language, options),
        None => AppError::new(err.clone()).build(language, options),
    }
}

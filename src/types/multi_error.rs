//! Aggregate errors: one decorated error over an ordered set of others.

use crate::types::{AppError, AppErrors, BuildConfig, BuildResult, Language};

/// Creates an aggregate over `errors`, or `None` when there are none.
///
/// The aggregate never takes its config from the registry; set one with
/// [`AppError::with_custom_config`] if needed. Its message falls back to the
/// children's messages when its own key cannot be translated.
///
/// # Examples
///
/// ```
/// use app_errors::{new_multi_error, AppError, BaseError};
///
/// let name = BaseError::shared("ErrNameRequired");
/// let email = BaseError::shared("ErrEmailInvalid");
/// let err = new_multi_error([AppError::new(name.clone()), AppError::new(email)]).unwrap();
///
/// assert!(err.is_multi());
/// assert_eq!(err.inner_errors().map(|e| e.len()), Some(2));
/// assert!(err.is(&*name));
///
/// assert!(new_multi_error(Vec::new()).is_none());
/// ```
pub fn new_multi_error<I>(errors: I) -> Option<AppError>
where
    I: IntoIterator<Item = AppError>,
{
    let errors: AppErrors = errors.into_iter().collect();
    (!errors.is_empty()).then(|| AppError::multi(errors))
}

/// Builds each child in `language`, appending to the aggregate's `result`.
///
/// Children use their own resolution; the aggregate's options are not
/// forwarded. When the aggregate's own key is missing its message becomes
/// the children's messages joined with the build separator.
pub(crate) fn build_children(
    children: &AppErrors,
    language: &Language,
    build_config: &BuildConfig,
    result: &mut BuildResult,
) {
    result.error_info.inner_errors.reserve(children.len());
    for child in children {
        let child_result = child.build(language, &[]);
        result.trans_missing_keys.extend(child_result.trans_missing_keys);
        result.error_info.inner_errors.push(child_result.error_info);
    }

    if result.trans_missing_main_key {
        let messages: Vec<&str> =
            result.error_info.inner_errors.iter().map(|info| info.message.as_str()).collect();
        result.error_info.message = messages.join(build_config.separator.as_str());
    }
}

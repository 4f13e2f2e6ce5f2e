use crate::config;
use crate::types::{new_multi_error, AppError, ErrorConfig, InfoBuilderFn, SharedError};

/// Creates an aggregate with the process validation status and code.
///
/// Returns `None` when `errors` is empty.
///
/// # Examples
///
/// ```
/// use app_errors::{new_validation_error, AppError, BaseError, BuildOption, Language};
///
/// let err = new_validation_error([
///     AppError::new(BaseError::shared("ErrNameRequired")),
///     AppError::new(BaseError::shared("ErrAgeNegative")),
/// ])
/// .unwrap();
///
/// let info = err.build(&Language::EN, &[BuildOption::no_translation()]).error_info;
/// assert_eq!(info.status, 400);
/// assert_eq!(info.code, "ErrValidation");
/// assert_eq!(info.inner_errors.len(), 2);
/// ```
pub fn new_validation_error<I>(errors: I) -> Option<AppError>
where
    I: IntoIterator<Item = AppError>,
{
    let process = config::current();
    let validation_config = ErrorConfig {
        status: process.default_validation_error_status,
        code: process.default_validation_error_code.clone(),
        ..Default::default()
    };
    new_multi_error(errors).map(|err| err.with_custom_config(validation_config))
}

/// Creates a validation error whose children all use `builder`.
///
/// Each raw error is decorated first. A `None` builder leaves the children
/// on the standard build algorithm.
pub fn new_validation_error_with_builder<I>(
    builder: Option<InfoBuilderFn>,
    errors: I,
) -> Option<AppError>
where
    I: IntoIterator<Item = SharedError>,
{
    new_validation_error(
        errors.into_iter().map(|err| AppError::new(err).with_custom_builder(builder.clone())),
    )
}

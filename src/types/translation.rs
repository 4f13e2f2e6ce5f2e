//! Contract of the externally supplied translation function.

use crate::types::{Language, Params};
use std::sync::Arc;

/// Failure reported by a translation function.
///
/// A failure never aborts a build: the key is recorded in
/// [`BuildResult::trans_missing_keys`](crate::types::BuildResult) and the
/// fallback policy decides the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationError {
    #[error("missing translation for `{key}` in `{language}`")]
    MissingKey { language: Language, key: String },
    #[error("failed to translate `{key}`: {reason}")]
    Failed { key: String, reason: String },
}

impl TranslationError {
    #[inline]
    pub fn missing<S: Into<String>>(language: &Language, key: S) -> Self {
        Self::MissingKey { language: language.clone(), key: key.into() }
    }
}

/// Translates `key` into `language`, substituting `params`.
pub type TranslationFn =
    Arc<dyn Fn(&Language, &str, &Params) -> Result<String, TranslationError> + Send + Sync>;

/// Boxes a closure as a [`TranslationFn`].
///
/// # Examples
///
/// ```
/// use app_errors::{translation_fn, Language, Params};
///
/// let translate = translation_fn(|lang, key, _params| Ok(format!("({key})-in-{lang}")));
/// assert_eq!(translate(&Language::EN, "ErrX", &Params::new()).unwrap(), "(ErrX)-in-en");
/// ```
#[inline]
pub fn translation_fn<F>(f: F) -> TranslationFn
where
    F: Fn(&Language, &str, &Params) -> Result<String, TranslationError> + Send + Sync + 'static,
{
    Arc::new(f)
}

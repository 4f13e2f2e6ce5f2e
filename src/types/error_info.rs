//! Client-facing error info and the configuration used to build it.

use crate::types::{
    AppError, ErrorConfig, Language, LogLevel, Params, TranslationError, TranslationFn,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Information about an error that can be returned to a client.
///
/// Every field is omitted from the encoding when empty. `cause` and `debug`
/// are only ever filled in debug mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub status: u16,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cause: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub debug: String,
    #[serde(default, skip_serializing_if = "LogLevel::is_none")]
    pub log_level: LogLevel,
    #[serde(rename = "errors", default, skip_serializing_if = "Vec::is_empty")]
    pub inner_errors: Vec<ErrorInfo>,

    /// The decorated error this info was built from.
    #[serde(skip)]
    pub associated_error: Option<Box<AppError>>,
}

#[inline]
fn is_zero(status: &u16) -> bool {
    *status == 0
}

/// Outcome of a build: the info plus translation diagnostics.
#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    pub error_info: ErrorInfo,
    /// Keys the translation function failed on, across all children.
    pub trans_missing_keys: Vec<String>,
    /// Set when the key of the error's own message failed to translate.
    pub trans_missing_main_key: bool,
}

impl BuildResult {
    #[inline]
    pub fn new(error_info: ErrorInfo) -> Self {
        Self { error_info, ..Default::default() }
    }
}

impl From<ErrorInfo> for BuildResult {
    fn from(error_info: ErrorInfo) -> Self {
        Self::new(error_info)
    }
}

/// Replaces the whole build algorithm of an error.
pub type InfoBuilderFn = Arc<dyn Fn(&AppError, &BuildConfig) -> BuildResult + Send + Sync>;

/// Boxes a closure as an [`InfoBuilderFn`].
#[inline]
pub fn info_builder<F>(f: F) -> InfoBuilderFn
where
    F: Fn(&AppError, &BuildConfig) -> BuildResult + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Everything a build needs, resolved before the build starts.
#[derive(Clone)]
pub struct BuildConfig {
    pub error_config: ErrorConfig,
    pub builder: Option<InfoBuilderFn>,
    pub language: Language,
    pub separator: String,
    pub translation_fn: Option<TranslationFn>,
    pub fallback_to_error_content: bool,
}

impl BuildConfig {
    /// Translates `key` with the configured function, if any.
    pub fn translate(
        &self,
        key: &str,
        params: &Params,
    ) -> Option<Result<String, TranslationError>> {
        self.translation_fn.as_ref().map(|translate| translate(&self.language, key, params))
    }
}

impl fmt::Debug for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildConfig")
            .field("error_config", &self.error_config)
            .field("builder", &self.builder.is_some())
            .field("language", &self.language)
            .field("separator", &self.separator)
            .field("translation_fn", &self.translation_fn.is_some())
            .field("fallback_to_error_content", &self.fallback_to_error_content)
            .finish()
    }
}

/// Per-call override of a [`BuildConfig`] field, applied in order.
///
/// # Examples
///
/// ```
/// use app_errors::{AppError, BaseError, BuildOption, Language};
///
/// let err = AppError::new(BaseError::shared("ErrQuota"));
/// let result = err.build(
///     &Language::EN,
///     &[BuildOption::custom(|cfg| cfg.error_config.status = 429)],
/// );
/// assert_eq!(result.error_info.status, 429);
/// ```
#[derive(Clone)]
pub enum BuildOption {
    Builder(Option<InfoBuilderFn>),
    Config(ErrorConfig),
    Translation(Option<TranslationFn>),
    Separator(String),
    FallbackContent(bool),
    Custom(Arc<dyn Fn(&mut BuildConfig) + Send + Sync>),
}

impl BuildOption {
    /// Replaces the whole build algorithm.
    #[inline]
    pub fn custom_builder(builder: InfoBuilderFn) -> Self {
        Self::Builder(Some(builder))
    }

    /// Replaces the resolved error config as is, without defaults.
    #[inline]
    pub fn custom_config(config: ErrorConfig) -> Self {
        Self::Config(config)
    }

    #[inline]
    pub fn translation_fn(translate: TranslationFn) -> Self {
        Self::Translation(Some(translate))
    }

    /// Disables translation for this build.
    #[inline]
    pub fn no_translation() -> Self {
        Self::Translation(None)
    }

    #[inline]
    pub fn separator<S: Into<String>>(separator: S) -> Self {
        Self::Separator(separator.into())
    }

    #[inline]
    pub fn fallback_content(fallback: bool) -> Self {
        Self::FallbackContent(fallback)
    }

    #[inline]
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&mut BuildConfig) + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    pub fn apply(&self, config: &mut BuildConfig) {
        match self {
            Self::Builder(builder) => config.builder = builder.clone(),
            Self::Config(error_config) => config.error_config = error_config.clone(),
            Self::Translation(translate) => config.translation_fn = translate.clone(),
            Self::Separator(separator) => config.separator = separator.clone(),
            Self::FallbackContent(fallback) => config.fallback_to_error_content = *fallback,
            Self::Custom(f) => f(config),
        }
    }
}

impl fmt::Debug for BuildOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builder(builder) => f.debug_tuple("Builder").field(&builder.is_some()).finish(),
            Self::Config(config) => f.debug_tuple("Config").field(config).finish(),
            Self::Translation(translate) => {
                f.debug_tuple("Translation").field(&translate.is_some()).finish()
            }
            Self::Separator(separator) => f.debug_tuple("Separator").field(separator).finish(),
            Self::FallbackContent(fallback) => {
                f.debug_tuple("FallbackContent").field(fallback).finish()
            }
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

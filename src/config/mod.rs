//! Process-wide configuration.
//!
//! One [`Config`] is active at a time. It is installed with [`init`] and read
//! as an immutable snapshot with [`current`]; builds take a single snapshot
//! so a concurrent [`init`] never mixes two configs within one build.
//!
//! # Examples
//!
//! ```
//! use app_errors::{config, translation_fn, Config};
//!
//! config::init(Config {
//!     debug: true,
//!     translation_fn: Some(translation_fn(|lang, key, _| Ok(format!("{key}@{lang}")))),
//!     multi_error_separator: "; ".into(),
//!     ..Default::default()
//! });
//! assert_eq!(config::current().default_error_status, 500);
//! assert_eq!(config::current().multi_error_separator, "; ");
//!
//! config::reset();
//! assert!(!config::current().debug);
//! ```

use crate::types::{Language, LogLevel, SharedError, TranslationFn};
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::debug;

pub const DEFAULT_MAX_STACK_DEPTH: usize = 50;
pub const DEFAULT_ERROR_SEPARATOR: &str = "\n";
pub const DEFAULT_ERROR_STATUS: u16 = 500;
pub const DEFAULT_VALIDATION_ERROR_STATUS: u16 = 400;
pub const DEFAULT_VALIDATION_ERROR_CODE: &str = "ErrValidation";

/// Replaces the default stack capture when wrapping root errors.
pub type WrapFn = Arc<dyn Fn(SharedError) -> SharedError + Send + Sync>;

/// Boxes a closure as a [`WrapFn`].
#[inline]
pub fn wrap_fn<F>(f: F) -> WrapFn
where
    F: Fn(SharedError) -> SharedError + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Settings shared by every error of the process.
///
/// Zero values (`0`, empty strings and [`LogLevel::None`]) are replaced by
/// the defaults when the config is installed with [`init`].
#[derive(Clone)]
pub struct Config {
    /// Enables the debug trail and exposes `debug`/`cause` in built info.
    pub debug: bool,

    /// Custom stack wrapping; when set, `max_stack_depth` has no effect.
    pub wrap_fn: Option<WrapFn>,
    pub max_stack_depth: usize,

    pub default_language: Language,
    /// Translation is disabled when absent.
    pub translation_fn: Option<TranslationFn>,
    /// Use the error content as message when its key fails to translate,
    /// otherwise leave the message empty.
    pub fallback_to_error_content: bool,
    pub multi_error_separator: String,

    pub default_error_status: u16,
    pub default_validation_error_status: u16,
    pub default_validation_error_code: String,
    pub default_log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            wrap_fn: None,
            max_stack_depth: DEFAULT_MAX_STACK_DEPTH,
            default_language: Language::EN,
            translation_fn: None,
            fallback_to_error_content: true,
            multi_error_separator: DEFAULT_ERROR_SEPARATOR.to_owned(),
            default_error_status: DEFAULT_ERROR_STATUS,
            default_validation_error_status: DEFAULT_VALIDATION_ERROR_STATUS,
            default_validation_error_code: DEFAULT_VALIDATION_ERROR_CODE.to_owned(),
            default_log_level: LogLevel::None,
        }
    }
}

impl Config {
    /// Replaces zero values with the defaults.
    pub fn normalize(&mut self) {
        if self.max_stack_depth == 0 {
            self.max_stack_depth = DEFAULT_MAX_STACK_DEPTH;
        }
        if self.default_language.is_empty() {
            self.default_language = Language::EN;
        }
        if self.multi_error_separator.is_empty() {
            self.multi_error_separator = DEFAULT_ERROR_SEPARATOR.to_owned();
        }
        if self.default_error_status == 0 {
            self.default_error_status = DEFAULT_ERROR_STATUS;
        }
        if self.default_validation_error_status == 0 {
            self.default_validation_error_status = DEFAULT_VALIDATION_ERROR_STATUS;
        }
        if self.default_validation_error_code.is_empty() {
            self.default_validation_error_code = DEFAULT_VALIDATION_ERROR_CODE.to_owned();
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("debug", &self.debug)
            .field("wrap_fn", &self.wrap_fn.is_some())
            .field("max_stack_depth", &self.max_stack_depth)
            .field("default_language", &self.default_language)
            .field("translation_fn", &self.translation_fn.is_some())
            .field("fallback_to_error_content", &self.fallback_to_error_content)
            .field("multi_error_separator", &self.multi_error_separator)
            .field("default_error_status", &self.default_error_status)
            .field("default_validation_error_status", &self.default_validation_error_status)
            .field("default_validation_error_code", &self.default_validation_error_code)
            .field("default_log_level", &self.default_log_level)
            .finish()
    }
}

fn slot() -> &'static RwLock<Arc<Config>> {
    static CONFIG: OnceLock<RwLock<Arc<Config>>> = OnceLock::new();
    CONFIG.get_or_init(|| RwLock::new(Arc::new(Config::default())))
}

/// Normalizes `config` and makes it the process config.
pub fn init(mut config: Config) {
    config.normalize();
    debug!(config = ?config, "error config initialized");
    *slot().write().unwrap_or_else(PoisonError::into_inner) = Arc::new(config);
}

/// Restores the default process config.
pub fn reset() {
    debug!("error config reset");
    *slot().write().unwrap_or_else(PoisonError::into_inner) = Arc::new(Config::default());
}

/// Returns a snapshot of the process config.
#[inline]
pub fn current() -> Arc<Config> {
    slot().read().unwrap_or_else(PoisonError::into_inner).clone()
}

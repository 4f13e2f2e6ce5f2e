use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Log level attached to an error, for the consuming layer to act upon.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    None,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration used when building the info of an error.
///
/// Zero values mean "unset": status `0` falls back to the process default,
/// an empty `code` to the root error message, an empty `title` to the
/// status reason phrase and an empty `trans_key` to the code.
///
/// # Examples
///
/// ```
/// use app_errors::{ErrorConfig, LogLevel};
///
/// let cfg = ErrorConfig {
///     status: 404,
///     code: "ErrUserNotFound".into(),
///     log_level: LogLevel::Info,
///     ..Default::default()
/// };
/// assert!(cfg.trans_key.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorConfig {
    pub status: u16,
    pub code: String,
    pub title: String,
    pub log_level: LogLevel,
    pub trans_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

impl ErrorConfig {
    #[inline]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    #[inline]
    pub fn with_code<S: Into<String>>(mut self, code: S) -> Self {
        self.code = code.into();
        self
    }

    #[inline]
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    #[inline]
    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    #[inline]
    pub fn with_trans_key<S: Into<String>>(mut self, trans_key: S) -> Self {
        self.trans_key = trans_key.into();
        self
    }

    #[inline]
    pub fn with_extra(mut self, extra: serde_json::Value) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Fills `code` from the error message and `trans_key` from `code`.
    ///
    /// Applied once, when the config is registered.
    pub(crate) fn normalize_for(&mut self, message: &str) {
        if self.code.is_empty() {
            self.code = message.to_owned();
        }
        if self.trans_key.is_empty() {
            self.trans_key = self.code.clone();
        }
    }
}

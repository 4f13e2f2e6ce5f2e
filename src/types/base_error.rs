use crate::types::SharedError;
use std::borrow::Cow;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Plain message error, usually the root of a decorated error.
///
/// Every call to [`BaseError::shared`] yields a new identity, even for an
/// identical message.
///
/// # Examples
///
/// ```
/// use app_errors::BaseError;
///
/// let a = BaseError::shared("ErrTokenInvalid");
/// let b = BaseError::shared("ErrTokenInvalid");
/// assert_eq!(a.to_string(), b.to_string());
/// assert!(!std::sync::Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseError {
    message: Cow<'static, str>,
}

impl BaseError {
    #[inline]
    pub fn new<S: Into<Cow<'static, str>>>(message: S) -> Self {
        Self { message: message.into() }
    }

    /// Creates the error behind a fresh [`SharedError`].
    #[inline]
    pub fn shared<S: Into<Cow<'static, str>>>(message: S) -> SharedError {
        Arc::new(Self::new(message))
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for BaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for BaseError {}

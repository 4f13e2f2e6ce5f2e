//! Decorated error type carrying the metadata needed to build error info.
//!
//! This module provides [`AppError`], a wrapper that enriches a root error with:
//! - A cause, kept apart from the unwrap chain
//! - Plain and translated message parameters
//! - A debug trail, only recorded in debug mode
//! - Optional per-instance config and builder overrides

use crate::chain;
use crate::config;
use crate::types::{stack, AppErrors, ErrorConfig, InfoBuilderFn, Params, SharedError};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Write as _};
use std::sync::Arc;

mod build;
mod traits;

/// Error wrapper that carries status/code/translation metadata plus a
/// cause, parameters and a debug trail.
///
/// An `AppError` is either a single error or an aggregate (see
/// [`new_multi_error`](crate::new_multi_error)); the kind is fixed at
/// construction.
///
/// # Examples
///
/// ```
/// use app_errors::{AppError, BaseError};
///
/// let root = BaseError::shared("ErrOrderLocked");
/// let cause = BaseError::shared("row version mismatch");
/// let err = AppError::new(root.clone())
///     .with_param("order", "A-17")
///     .with_trans_param("state", "StateShipped")
///     .with_cause(cause.clone());
///
/// assert_eq!(err.to_string(), "ErrOrderLocked");
/// assert!(err.is(&*root));
/// assert!(err.is(&*cause));
/// ```
#[must_use]
#[derive(Clone)]
pub struct AppError {
    pub(crate) err: SharedError,
    pub(crate) inner_errors: Option<Arc<AppErrors>>,
    pub(crate) cause: Option<SharedError>,
    pub(crate) params: Params,
    pub(crate) trans_params: BTreeMap<String, String>,
    pub(crate) debug: String,
    pub(crate) custom_config: Option<Arc<ErrorConfig>>,
    pub(crate) custom_builder: Option<InfoBuilderFn>,
    pub(crate) disallow_global_config_mapping: bool,
}

impl AppError {
    /// Wraps `err` (with stack context, see [`wrap`](crate::wrap)).
    #[inline]
    pub fn new(err: SharedError) -> Self {
        Self::with_parts(stack::wrap(err), None)
    }

    /// Wraps any error value.
    #[inline]
    pub fn from_error<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::new(Arc::new(err))
    }

    /// Creates an aggregate over `errors`.
    ///
    /// Aggregates never take their config from the registry.
    pub(crate) fn multi(errors: AppErrors) -> Self {
        let errors = Arc::new(errors);
        let payload: SharedError = errors.clone();
        let mut err = Self::with_parts(stack::wrap(payload), Some(errors));
        err.disallow_global_config_mapping = true;
        err
    }

    fn with_parts(err: SharedError, inner_errors: Option<Arc<AppErrors>>) -> Self {
        Self {
            err,
            inner_errors,
            cause: None,
            params: Params::new(),
            trans_params: BTreeMap::new(),
            debug: String::new(),
            custom_config: None,
            custom_builder: None,
            disallow_global_config_mapping: false,
        }
    }

    /// Returns the wrapped error (stack context included).
    #[inline]
    pub fn inner(&self) -> &SharedError {
        &self.err
    }

    /// Returns the children when this is an aggregate.
    #[inline]
    pub fn inner_errors(&self) -> Option<&AppErrors> {
        self.inner_errors.as_deref()
    }

    #[inline]
    pub fn is_multi(&self) -> bool {
        self.inner_errors.is_some()
    }

    #[inline]
    pub fn params(&self) -> &Params {
        &self.params
    }

    #[inline]
    pub fn trans_params(&self) -> &BTreeMap<String, String> {
        &self.trans_params
    }

    #[inline]
    pub fn cause(&self) -> Option<&SharedError> {
        self.cause.as_ref()
    }

    #[inline]
    pub fn debug(&self) -> &str {
        &self.debug
    }

    #[inline]
    pub fn custom_config(&self) -> Option<&ErrorConfig> {
        self.custom_config.as_deref()
    }

    #[inline]
    pub fn custom_builder(&self) -> Option<&InfoBuilderFn> {
        self.custom_builder.as_ref()
    }

    /// Sets a parameter passed to the translation function as is.
    #[inline]
    pub fn with_param<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Sets a parameter whose value is itself a translation key.
    #[inline]
    pub fn with_trans_param<K, V>(mut self, key: K, trans_key: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.trans_params.insert(key.into(), trans_key.into());
        self
    }

    #[inline]
    pub fn with_cause(mut self, cause: SharedError) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Appends to the debug trail; a no-op outside debug mode.
    ///
    /// Consecutive messages are joined with the multi-error separator.
    /// Takes any `Display`, so `format_args!` is only rendered when kept.
    pub fn with_debug<M: Display>(mut self, message: M) -> Self {
        let config = config::current();
        if !config.debug {
            return self;
        }
        if !self.debug.is_empty() {
            self.debug.push_str(&config.multi_error_separator);
        }
        let _ = write!(self.debug, "{message}");
        self
    }

    /// Sets (or clears, with `None`) the config overriding the registry.
    #[inline]
    pub fn with_custom_config<C: Into<Option<ErrorConfig>>>(mut self, config: C) -> Self {
        self.custom_config = config.into().map(Arc::new);
        self
    }

    /// Sets (or clears, with `None`) the builder replacing the build algorithm.
    #[inline]
    pub fn with_custom_builder<B: Into<Option<InfoBuilderFn>>>(mut self, builder: B) -> Self {
        self.custom_builder = builder.into();
        self
    }

    /// Returns the custom config if set, otherwise the registry entry.
    ///
    /// Aggregates only ever return their custom config.
    pub fn config(&self) -> Option<Arc<ErrorConfig>> {
        if self.disallow_global_config_mapping || self.custom_config.is_some() {
            return self.custom_config.clone();
        }
        crate::registry::get_error_config(&*self.err)
    }

    /// Returns `true` if `target` is in the unwrap tree or the cause chain.
    #[inline]
    pub fn is(&self, target: &(dyn Error + 'static)) -> bool {
        chain::is(self, target)
    }
}

//! Stack-trace wrapping of root errors.
//!
//! Every decorated error wraps its root through [`wrap`], which either calls
//! the configured wrap function or captures a backtrace.

use crate::chain;
use crate::config;
use crate::types::SharedError;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Wraps an error together with the call stack captured when it was wrapped.
///
/// Displays exactly as the inner error and exposes it as its `source()`, so
/// registry lookups and root resolution see straight through it.
#[derive(Debug)]
pub struct StackError {
    inner: SharedError,
    backtrace: Backtrace,
    max_depth: usize,
}

impl StackError {
    /// Captures the current stack, keeping at most `max_depth` frames.
    pub fn capture(inner: SharedError, max_depth: usize) -> Self {
        Self { inner, backtrace: Backtrace::force_capture(), max_depth }
    }

    #[inline]
    pub fn inner(&self) -> &SharedError {
        &self.inner
    }

    #[inline]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// Returns the captured frames (symbol names), innermost first.
    pub fn frames(&self) -> Vec<String> {
        if self.backtrace.status() != BacktraceStatus::Captured {
            return Vec::new();
        }
        let rendered = self.backtrace.to_string();
        rendered
            .lines()
            .filter_map(frame_symbol)
            .skip_while(|symbol| is_wrapping_frame(symbol))
            .take(self.max_depth)
            .map(String::from)
            .collect()
    }
}

const CRATE_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::");

/// Frames of the backtrace machinery and of this crate's wrapping path.
fn is_wrapping_frame(symbol: &str) -> bool {
    let path = symbol.trim_start_matches('<');
    path.starts_with("std::backtrace") || path.starts_with(CRATE_PREFIX)
}

/// Extracts the symbol of a rendered frame line such as `  3: my_crate::run`.
fn frame_symbol(line: &str) -> Option<&str> {
    let (index, symbol) = line.trim_start().split_once(": ")?;
    (!index.is_empty() && index.bytes().all(|b| b.is_ascii_digit())).then_some(symbol.trim())
}

impl Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl Error for StackError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.inner)
    }
}

/// Error prefixed with a message, rendered as `"{message}: {source}"`.
#[derive(Debug)]
pub struct ContextError {
    message: String,
    source: SharedError,
}

impl ContextError {
    pub fn new<S: Into<String>>(source: SharedError, message: S) -> Self {
        Self { message: message.into(), source }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.source)
    }
}

impl Error for ContextError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}

/// Wraps `err` with stack context as configured.
///
/// The configured wrap function wins when present. Otherwise an error that
/// already carries a stack is returned unchanged and anything else gets a
/// freshly captured [`StackError`].
///
/// # Examples
///
/// ```
/// use app_errors::{stack_trace, wrap, BaseError};
///
/// let root = BaseError::shared("ErrTest");
/// let wrapped = wrap(root.clone());
/// assert_eq!(wrapped.to_string(), "ErrTest");
/// assert!(!stack_trace(&*wrapped).is_empty());
/// assert!(stack_trace(&*root).is_empty());
/// ```
pub fn wrap(err: SharedError) -> SharedError {
    let config = config::current();
    if let Some(wrap_fn) = &config.wrap_fn {
        return wrap_fn(err);
    }
    if err.is::<StackError>() {
        return err;
    }
    Arc::new(StackError::capture(err, config.max_stack_depth))
}

/// Prefixes `err` with `message` and wraps the result with stack context.
///
/// See also the [`wrapf!`](crate::wrapf) macro.
pub fn wrap_context<M: Display>(err: SharedError, message: M) -> SharedError {
    wrap(Arc::new(ContextError::new(err, message.to_string())))
}

/// Returns the frames of the first [`StackError`] in the chain of `err`.
pub fn stack_trace(err: &(dyn Error + 'static)) -> Vec<String> {
    chain::find::<StackError>(err).map(StackError::frames).unwrap_or_default()
}

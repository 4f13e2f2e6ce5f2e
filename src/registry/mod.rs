//! Process-wide mapping from base errors to their [`ErrorConfig`].
//!
//! Entries are keyed by the identity (address) of the error value, never by
//! its message, and live until [`remove`]d. Each entry keeps its error alive
//! so an address is never reused while registered.
//!
//! # Examples
//!
//! ```
//! use app_errors::{registry, AppError, ErrorConfig, Language};
//!
//! let err_token_invalid =
//!     registry::create("ErrTokenInvalid", ErrorConfig::default().with_status(401));
//!
//! let cfg = registry::get_error_config(&*err_token_invalid).unwrap();
//! assert_eq!(cfg.code, "ErrTokenInvalid");
//! assert_eq!(cfg.trans_key, "ErrTokenInvalid");
//!
//! let info = AppError::new(err_token_invalid.clone()).build(&Language::EN, &[]).error_info;
//! assert_eq!(info.status, 401);
//!
//! registry::remove(&err_token_invalid);
//! assert!(registry::get_error_config(&*err_token_invalid).is_none());
//! ```

use crate::chain;
use crate::types::{BaseError, ErrorConfig, SharedError};
use std::collections::HashMap;
use std::error::Error;
use std::iter;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::{debug, error};

struct Entry {
    // Pins the address used as key.
    _err: SharedError,
    config: Arc<ErrorConfig>,
}

type Table = HashMap<usize, Entry>;

fn table() -> &'static RwLock<Table> {
    static TABLE: OnceLock<RwLock<Table>> = OnceLock::new();
    TABLE.get_or_init(|| RwLock::new(HashMap::with_capacity(50)))
}

fn insert(err: &SharedError, config: ErrorConfig) {
    let key = chain::address(&**err);
    debug!(error = %err, code = %config.code, status = config.status, "error config registered");
    let entry = Entry { _err: err.clone(), config: Arc::new(config) };
    table().write().unwrap_or_else(PoisonError::into_inner).insert(key, entry);
}

/// Registers `config` for `err` and returns `err`.
///
/// An empty `code` becomes the error message and an empty `trans_key`
/// becomes the code. Suited to errors created outside the application:
///
/// ```
/// use app_errors::{registry, BaseError, ErrorConfig};
///
/// let err_key_not_found = registry::add(
///     BaseError::shared("key not found"),
///     ErrorConfig::default().with_status(404).with_code("ErrKeyNotFound"),
/// );
/// let cfg = registry::get_error_config(&*err_key_not_found).unwrap();
/// assert_eq!(cfg.trans_key, "ErrKeyNotFound");
/// ```
pub fn add(err: SharedError, mut config: ErrorConfig) -> SharedError {
    config.normalize_for(&err.to_string());
    insert(&err, config);
    err
}

/// Creates a new error with message `code`, registers `config` for it and
/// returns it.
///
/// # Panics
///
/// Panics if `code` is empty.
pub fn create(code: &str, mut config: ErrorConfig) -> SharedError {
    if code.is_empty() {
        error!("attempt to register an error with an empty code");
        panic!("error code must not be empty");
    }
    let err = BaseError::shared(code.to_owned());
    config.normalize_for(code);
    insert(&err, config);
    err
}

/// Unregisters `err`; unknown errors are ignored.
pub fn remove(err: &SharedError) {
    let removed = table()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(&chain::address(&**err))
        .is_some();
    if removed {
        debug!(error = %err, "error config removed");
    }
}

/// Returns the config of the first registered error in the chain of `err`.
///
/// The lookup starts at `err` itself and follows `source()` to the root.
pub fn get_error_config(err: &(dyn Error + 'static)) -> Option<Arc<ErrorConfig>> {
    let table = table().read().unwrap_or_else(PoisonError::into_inner);
    if table.is_empty() {
        return None;
    }
    let config = iter::successors(Some(err), |&current| current.source())
        .find_map(|e| table.get(&chain::address(e)))
        .map(|entry| entry.config.clone());
    config
}

//! Walking error chains by identity.
//!
//! Aggregates (an [`AppError`] built by [`new_multi_error`](crate::new_multi_error)
//! and [`AppErrors`] itself) unwrap to all of their children; every other
//! error unwraps to its `source()`. Identity means address: two distinct
//! errors with the same message never match.
//!
//! # Examples
//!
//! ```
//! use app_errors::{chain, wrap_context, AppError, BaseError};
//!
//! let root = BaseError::shared("ErrDiskFull");
//! let err = AppError::new(wrap_context(root.clone(), "saving report"));
//!
//! assert_eq!(chain::unwrap_to_root(&err).to_string(), "ErrDiskFull");
//! assert!(chain::is(&err, &*root));
//! assert!(!chain::is(&err, &*BaseError::shared("ErrDiskFull")));
//! ```

use crate::types::{AppError, AppErrors, ErrorVec};
use std::error::Error;
use std::iter;

/// Returns the next errors in the unwrap tree of `err`.
///
/// Aggregates yield their children in order, a single-step error yields its
/// source, anything else yields nothing.
pub fn unwrap_multi<'a>(err: &'a (dyn Error + 'static)) -> ErrorVec<&'a (dyn Error + 'static)> {
    if let Some(children) = children_of(err) {
        return children.iter().map(|child| child as &(dyn Error + 'static)).collect();
    }
    err.source().into_iter().collect()
}

fn children_of<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a AppErrors> {
    if let Some(app_error) = err.downcast_ref::<AppError>() {
        return app_error.inner_errors();
    }
    err.downcast_ref::<AppErrors>()
}

/// Follows the first unwrap target until there is none.
///
/// Returns `err` itself when it does not unwrap.
pub fn unwrap_to_root<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    let mut current = err;
    while let Some(next) = unwrap_multi(current).first().copied() {
        current = next;
    }
    current
}

/// Returns `true` if `target` is `err` itself or anywhere in its unwrap tree.
///
/// The cause of a decorated error is searched as well.
pub fn is(err: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    if same(err, target) {
        return true;
    }
    if let Some(cause) = err.downcast_ref::<AppError>().and_then(AppError::cause) {
        if is(&**cause, target) {
            return true;
        }
    }
    unwrap_multi(err).into_iter().any(|next| is(next, target))
}

/// Returns the first error of type `T` in the single-step chain of `err`.
pub fn find<'a, T>(err: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    iter::successors(Some(err), |&current| current.source()).find_map(|e| e.downcast_ref::<T>())
}

/// Compares two errors by address, ignoring vtables.
#[inline]
pub(crate) fn same(a: &(dyn Error + 'static), b: &(dyn Error + 'static)) -> bool {
    std::ptr::addr_eq(a, b)
}

/// Address identifying an error value.
#[inline]
pub(crate) fn address(err: &(dyn Error + 'static)) -> usize {
    (err as *const (dyn Error + 'static)).cast::<()>() as usize
}

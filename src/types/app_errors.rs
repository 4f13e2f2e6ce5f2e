use crate::chain;
use crate::config;
use crate::types::{AppError, ErrorVec};
use std::error::Error;
use std::fmt::{self, Display};

/// Ordered collection of decorated errors, the payload of an aggregate.
///
/// Displays as the children joined with the process multi-error separator.
#[derive(Debug, Clone, Default)]
pub struct AppErrors {
    items: ErrorVec<AppError>,
}

impl AppErrors {
    #[inline]
    pub fn new() -> Self {
        Self { items: ErrorVec::new() }
    }

    #[inline]
    pub fn push(&mut self, err: AppError) {
        self.items.push(err);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&AppError> {
        self.items.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, AppError> {
        self.items.iter()
    }

    /// Returns `true` if any child is, wraps, or was caused by `target`.
    pub fn is(&self, target: &(dyn Error + 'static)) -> bool {
        self.iter().any(|err| chain::is(err, target))
    }
}

impl FromIterator<AppError> for AppErrors {
    fn from_iter<I: IntoIterator<Item = AppError>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl Extend<AppError> for AppErrors {
    fn extend<I: IntoIterator<Item = AppError>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for &'a AppErrors {
    type Item = &'a AppError;
    type IntoIter = std::slice::Iter<'a, AppError>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Display for AppErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = config::current();
        for (i, err) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(&config.multi_error_separator)?;
            }
            Display::fmt(err, f)?;
        }
        Ok(())
    }
}

impl Error for AppErrors {}

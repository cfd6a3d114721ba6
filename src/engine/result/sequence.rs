use std::fmt;

use crate::engine::errors::FinalizeError;

/// Single-pass lazy stream of results.
///
/// Nothing is evaluated until the consumer pulls an item; an error ends the
/// element it belongs to but leaves earlier items untouched.
pub struct Sequence<T> {
    inner: Box<dyn Iterator<Item = Result<T, FinalizeError>> + Send>,
}

impl<T: Send + 'static> Sequence<T> {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Result<T, FinalizeError>>,
        I::IntoIter: Send + 'static,
    {
        Self {
            inner: Box::new(items.into_iter()),
        }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self::new(items.into_iter().map(Ok))
    }

    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    pub fn failed(err: FinalizeError) -> Self {
        Self::new(std::iter::once(Err(err)))
    }

    /// Lazily applies `f` to each successful item. Upstream errors pass through.
    pub fn map<U, F>(self, mut f: F) -> Sequence<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> Result<U, FinalizeError> + Send + 'static,
    {
        Sequence::new(self.inner.map(move |item| item.and_then(&mut f)))
    }

    pub fn flat_map<U, F>(self, mut f: F) -> Sequence<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> Sequence<U> + Send + 'static,
    {
        Sequence::new(self.inner.flat_map(move |item| match item {
            Ok(value) => f(value),
            Err(err) => Sequence::failed(err),
        }))
    }

    /// Drains the sequence, stopping at the first error.
    pub fn to_vec(self) -> Result<Vec<T>, FinalizeError> {
        self.collect()
    }
}

impl<T> Iterator for Sequence<T> {
    type Item = Result<T, FinalizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence").finish_non_exhaustive()
    }
}

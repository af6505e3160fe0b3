//! Query string tokenizer.

use super::error::HttpError;
use super::request_line::Span;
use crate::log::warning;
use heapless::{String, Vec};

/// Ordered name/value pairs parsed from a query string.
///
/// The table keeps its own copy of the query string (up to `N` bytes) and at
/// most `V` variables. Names and values are spans into that copy, so lookups
/// hand out slices without copying.
///
/// Order and duplicates are preserved. A variable written without `=` (a
/// flag such as `?debug`) has no value. Nothing is percent-decoded.
#[derive(Debug, Clone)]
pub struct QueryTable<const N: usize, const V: usize> {
    text: String<N>,
    names: Vec<Span, V>,
    values: Vec<Option<Span>, V>,
}

impl<const N: usize, const V: usize> QueryTable<N, V> {
    /// Creates an empty table.
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            names: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Forgets every variable and the copied query string.
    pub fn clear(&mut self) {
        self.names.clear();
        self.values.clear();
        self.text.clear();
    }

    /// Replaces the table contents with the variables of `query`.
    ///
    /// `query` is the raw text after `?`. It is split on `&`, then each token
    /// once on its first `=`. Empty tokens (`a=1&&b=2`) become variables with
    /// an empty name.
    ///
    /// # Errors
    ///
    /// [`HttpError::UriTooLong`] if `query` is longer than `N` bytes or holds
    /// more than `V` variables. The table is left empty in that case.
    pub fn parse(&mut self, query: &str) -> Result<(), HttpError> {
        self.clear();
        if query.is_empty() {
            return Ok(());
        }
        self.text.push_str(query).map_err(|_| HttpError::UriTooLong)?;

        let mut start = 0;
        let mut overflow = false;
        for token in self.text.split('&') {
            if self.names.is_full() {
                overflow = true;
                break;
            }
            let end = start + token.len();
            let (name, value) = match token.find('=') {
                Some(eq) => (
                    Span {
                        start,
                        end: start + eq,
                    },
                    Some(Span {
                        start: start + eq + 1,
                        end,
                    }),
                ),
                None => (Span { start, end }, None),
            };
            // Both vectors share the capacity checked above.
            let _ = self.names.push(name);
            let _ = self.values.push(value);
            start = end + 1;
        }

        if overflow {
            warning!("more than {} query variables", V);
            self.clear();
            return Err(HttpError::UriTooLong);
        }
        Ok(())
    }

    /// Value of the last variable called `name`.
    ///
    /// Returns `None` when no variable has that name, or when the last one
    /// was written without `=`.
    pub fn get(&self, name: &str) -> Option<&str> {
        let text = self.text.as_bytes();
        let mut found = None;
        for (key, value) in self.names.iter().zip(self.values.iter()) {
            if key.as_str(text) == name {
                found = Some(*value);
            }
        }
        found.flatten().map(|span| span.as_str(text))
    }

    /// Whether any variable is called `name`, with or without a value.
    pub fn contains(&self, name: &str) -> bool {
        let text = self.text.as_bytes();
        self.names.iter().any(|key| key.as_str(text) == name)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the query string held no variables.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over `(name, value)` pairs in query string order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        let text = self.text.as_bytes();
        self.names
            .iter()
            .zip(self.values.iter())
            .map(move |(key, value)| (key.as_str(text), value.map(|span| span.as_str(text))))
    }

    /// The copied query string.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl<const N: usize, const V: usize> Default for QueryTable<N, V> {
    fn default() -> Self {
        Self::new()
    }
}

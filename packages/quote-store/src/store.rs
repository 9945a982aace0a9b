//! Ordered in-memory quote store.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Result, StoreError};
use crate::picker::{IndexPicker, ThreadRngPicker};
use crate::quote::{seed_quotes, Quote, QuoteInput, QuoteUpdate};

/// Ordered collection of quotes behind a single lock.
///
/// Lookups are linear scans for the first matching id. New ids are
/// `len + 1`, so an id freed by a delete can be handed out again while an
/// older record still carries it; lookups then act on the first match.
pub struct QuoteStore {
    quotes: RwLock<Vec<Quote>>,
    picker: Arc<dyn IndexPicker>,
}

impl QuoteStore {
    /// Creates a store holding the two seed quotes.
    pub fn new() -> Self {
        Self::with_quotes(seed_quotes())
    }

    /// Creates a store with no quotes.
    pub fn empty() -> Self {
        Self::with_quotes(Vec::new())
    }

    /// Creates a store over the given records, kept in order.
    pub fn with_quotes(quotes: Vec<Quote>) -> Self {
        Self {
            quotes: RwLock::new(quotes),
            picker: Arc::new(ThreadRngPicker),
        }
    }

    /// Replaces the random index picker.
    pub fn with_picker(mut self, picker: impl IndexPicker + 'static) -> Self {
        self.picker = Arc::new(picker);
        self
    }

    pub fn len(&self) -> usize {
        self.quotes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.read().is_empty()
    }

    /// Returns a snapshot of every quote in store order.
    pub fn list(&self) -> Vec<Quote> {
        self.quotes.read().clone()
    }

    /// Returns the quote at a picker-drawn index.
    ///
    /// # Errors
    /// `StoreError::NoQuotes` when the store is empty.
    pub fn pick_random(&self) -> Result<Quote> {
        let quotes = self.quotes.read();
        if quotes.is_empty() {
            return Err(StoreError::NoQuotes);
        }
        let index = self.picker.pick(quotes.len()).min(quotes.len() - 1);
        Ok(quotes[index].clone())
    }

    /// Finds the first quote with the given id.
    pub fn find_by_id(&self, id: i64) -> Result<Quote> {
        self.quotes
            .read()
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or(StoreError::QuoteNotFound { id })
    }

    /// Appends a quote with id `len + 1` and returns it.
    pub fn create(&self, input: QuoteInput) -> Quote {
        let mut quotes = self.quotes.write();
        let id = quotes.len() as i64 + 1;
        let quote = input.into_quote(id);
        quotes.push(quote.clone());
        tracing::debug!(id, total = quotes.len(), "Quote created");
        quote
    }

    /// Writes the fields present in `update` into the first quote with `id`.
    /// The id never changes.
    pub fn update(&self, id: i64, update: QuoteUpdate) -> Result<Quote> {
        self.update_with(id, || Ok(update))
    }

    /// Like [`QuoteStore::update`], but builds the update only after the
    /// quote is found, under the same write guard.
    ///
    /// A missing id is reported before `build` runs, so a caller parsing a
    /// request body sees "not found" ahead of any parse error.
    pub fn update_with<E, F>(&self, id: i64, build: F) -> std::result::Result<Quote, E>
    where
        F: FnOnce() -> std::result::Result<QuoteUpdate, E>,
        E: From<StoreError>,
    {
        let mut quotes = self.quotes.write();
        let slot = quotes
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(StoreError::QuoteNotFound { id })?;
        build()?.apply_to(slot);
        tracing::debug!(id, "Quote updated");
        Ok(slot.clone())
    }

    /// Removes the first quote with `id`, shifting later quotes down.
    pub fn delete(&self, id: i64) -> Result<Quote> {
        let mut quotes = self.quotes.write();
        let index = quotes
            .iter()
            .position(|q| q.id == id)
            .ok_or(StoreError::QuoteNotFound { id })?;
        let removed = quotes.remove(index);
        tracing::debug!(id, total = quotes.len(), "Quote deleted");
        Ok(removed)
    }
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for QuoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteStore")
            .field("quotes", &*self.quotes.read())
            .finish_non_exhaustive()
    }
}

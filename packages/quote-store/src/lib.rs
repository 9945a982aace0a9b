//! In-memory quote collection.
//!
//! Provides the quote model, the ordered store with linear-scan lookups,
//! and the pluggable index picker used for random selection.

pub mod error;
pub mod picker;
pub mod quote;
pub mod store;

pub use error::StoreError;
pub use picker::{FixedIndexPicker, IndexPicker, ThreadRngPicker};
pub use quote::{Quote, QuoteInput, QuoteUpdate};
pub use store::QuoteStore;

//! zumic - a chained hash table with incremental rehashing, paired with
//! a generic doubly linked list.
//!
//! Main modules:
//! - `config` — sizing-policy settings, loaded the same way as the rest of this codebase
//! - `database` — `Dict` (incremental-rehash hash table) and `List` (slot-arena linked list)
//! - `error` — `DictError`/`DictResult`
//! - `logging` — structured logging (formatting, filters, sinks)

/// Sizing-policy settings loading.
pub mod config;
/// `Dict` and `List`, this crate's two data structures.
pub mod database;
/// `DictError`/`DictResult`.
pub mod error;
/// Structured logging (formatting, filters, sinks).
pub mod logging;

/// The chained hash table with incremental rehashing.
pub use database::dict::Dict;
/// The slot-arena doubly linked list.
pub use database::list::List;

/// Sizing-policy settings.
pub use config::DictSettings;

/// Dict's recoverable error type.
pub use error::{DictError, DictResult};

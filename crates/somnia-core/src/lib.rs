//! Record store, query engine, and CSV export for the Somnia dream journal.

pub mod draft;
pub mod error;
pub mod export;
pub mod model;
pub mod query;
pub mod slot;
pub mod store;

/// Draft validation bounds and checks.
pub use draft::{MAX_DESCRIPTION_CHARS, MIN_DESCRIPTION_CHARS, validate_draft};
/// Journal error type.
pub use error::JournalError;
/// CSV encoding and export file naming.
pub use export::{encode_csv, export_file_name};
/// Dream record model.
pub use model::{DreamDraft, DreamRecord, Emotion};
/// Filtering, sorting, and month grouping.
pub use query::{DreamFilter, MonthGroup, SortDirection, filter_dreams, group_by_month};
/// Journal slot abstraction and backends.
pub use slot::{FileJournalSlot, JOURNAL_FILE_NAME, JournalSlot, MemoryJournalSlot};
/// Record store over the journal slot.
pub use store::DreamStore;

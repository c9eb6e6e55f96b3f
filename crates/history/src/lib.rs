pub mod record;
pub mod store;

// Re-export commonly used types
pub use record::{record_id, ConversionRecord, NewConversion};
pub use store::{paginate, HistoryPage, HistoryQuery, HistoryStore, MemoryHistory, Pagination};

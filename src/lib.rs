// Pocketbook - Core Library
// Two independent utilities behind one CLI: a JSON-backed budget ledger
// and a coin/dice randomness simulator with text reporting

pub mod error;
pub mod report;
pub mod simulate;
pub mod store;
pub mod transaction;

// Re-export commonly used types
pub use error::{PocketbookError, Result};
pub use report::{append_results, expected_report, format_results, summary_stats, text_histogram};
pub use simulate::{coin_counts, dice_counts, OutcomeTable};
pub use store::{default_storage_path, TransactionStore};
pub use transaction::Transaction;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Transaction store - JSON-backed ledger
// Whole-file rewrite on save; single process, single invocation

use crate::error::{PocketbookError, Result};
use crate::transaction::Transaction;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default ledger location under the user's home directory.
///
/// Falls back to the current directory when no home is resolvable
/// (containers, stripped-down CI environments).
pub fn default_storage_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pocketbook.json")
}

/// Owns the in-memory transaction sequence and its backing JSON file.
///
/// The file is optional: a missing file means an empty ledger, not an
/// error. `add` never persists on its own; callers decide when to `save`.
pub struct TransactionStore {
    storage_path: PathBuf,
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        TransactionStore {
            storage_path: storage_path.into(),
            transactions: Vec::new(),
        }
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Replaces the in-memory sequence with the contents of the storage
    /// file. Missing file leaves the store empty. A file that exists but
    /// does not parse as a transaction array is `MalformedStorage`.
    pub fn load(&mut self) -> Result<()> {
        if !self.storage_path.exists() {
            self.transactions.clear();
            return Ok(());
        }

        let raw = fs::read_to_string(&self.storage_path).map_err(|e| {
            PocketbookError::MalformedStorage {
                path: self.storage_path.clone(),
                reason: format!("unreadable: {}", e),
            }
        })?;

        let parsed: Vec<Transaction> =
            serde_json::from_str(&raw).map_err(|e| PocketbookError::MalformedStorage {
                path: self.storage_path.clone(),
                reason: e.to_string(),
            })?;

        self.transactions = parsed;
        info!(
            count = self.transactions.len(),
            path = %self.storage_path.display(),
            "loaded ledger"
        );
        Ok(())
    }

    /// Rewrites the storage file with the full in-memory sequence.
    ///
    /// Writes to a sibling temp file and renames it into place, so a crash
    /// mid-save leaves either the old file or the new one, never a torn
    /// half-write.
    pub fn save(&self) -> Result<()> {
        let payload = serde_json::to_string_pretty(&self.transactions).map_err(|e| {
            PocketbookError::FileWriteFailure {
                path: self.storage_path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            }
        })?;

        let tmp_path = self.storage_path.with_extension("json.tmp");
        fs::write(&tmp_path, payload).map_err(|e| PocketbookError::FileWriteFailure {
            path: tmp_path.clone(),
            source: e,
        })?;
        fs::rename(&tmp_path, &self.storage_path).map_err(|e| {
            PocketbookError::FileWriteFailure {
                path: self.storage_path.clone(),
                source: e,
            }
        })?;

        info!(
            count = self.transactions.len(),
            path = %self.storage_path.display(),
            "saved ledger"
        );
        Ok(())
    }

    /// Appends to the in-memory sequence only. Call `save` to persist.
    pub fn add(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Snapshot of the current sequence in insertion order. The returned
    /// vector is owned; mutating it does not touch the store.
    pub fn list_transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Sum of amounts per category. Categories with no transactions are
    /// absent, not zero-valued.
    pub fn summary_by_category(&self) -> HashMap<String, f64> {
        let mut summary: HashMap<String, f64> = HashMap::new();
        for tx in &self.transactions {
            *summary.entry(tx.category.clone()).or_insert(0.0) += tx.amount;
        }
        summary
    }

    /// Sum of all transaction amounts; 0.0 for an empty store.
    pub fn balance(&self) -> f64 {
        self.transactions.iter().map(|tx| tx.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

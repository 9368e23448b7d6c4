// src/history/mod.rs
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::models::{PasswordCheckRecord, Strength};

pub mod csv_store;
pub mod memory;

pub use csv_store::CsvHistoryStore;
pub use memory::MemoryHistoryStore;

/// Column names of the persisted history, in order.
pub const HISTORY_COLUMNS: [&str; 3] = ["timestamp", "password", "strength"];

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("History format error at line {0}: {1}")]
    FormatError(usize, String),
}

pub type Result<T> = std::result::Result<T, HistoryError>;

/// Append-only log of password checks.
///
/// Reads never fail: an unreadable store is reported as empty history.
/// Writes and clears surface their errors to the caller.
pub trait HistoryStore: Send + Sync {
    fn load(&self) -> Vec<PasswordCheckRecord>;

    /// Record a check stamped with the current local time and return the stored record.
    fn append(&self, password: &str, strength: Strength) -> Result<PasswordCheckRecord>;

    /// Remove the whole history.
    fn clear(&self) -> Result<()>;

    /// Backing file, if the store has one.
    fn location(&self) -> Option<&Path> {
        None
    }
}

pub(crate) fn current_timestamp() -> chrono::NaiveDateTime {
    use chrono::SubsecRound;
    chrono::Local::now().naive_local().trunc_subsecs(0)
}

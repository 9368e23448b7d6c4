// src/history/memory.rs
use std::sync::Mutex;

use crate::models::{PasswordCheckRecord, Strength};
use super::{current_timestamp, HistoryStore, Result};

/// History kept in process memory. Lost on exit.
#[derive(Default)]
pub struct MemoryHistoryStore {
    records: Mutex<Vec<PasswordCheckRecord>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Vec<PasswordCheckRecord> {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn append(&self, password: &str, strength: Strength) -> Result<PasswordCheckRecord> {
        let record = PasswordCheckRecord {
            timestamp: current_timestamp(),
            password: password.to_string(),
            strength,
        };
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(record.clone());
        Ok(record)
    }

    fn clear(&self) -> Result<()> {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).clear();
        Ok(())
    }
}

// src/core/meter.rs
use std::sync::Arc;

use thiserror::Error;

use crate::generators::{GeneratorError, PasswordGenerator};
use crate::history::{HistoryError, HistoryStore};
use crate::models::{PasswordCheckRecord, PasswordGenerationOptions, ScoreResult};
use crate::strength;

#[derive(Debug, Error)]
pub enum MeterError {
    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("{0}")]
    Generator(#[from] GeneratorError),
}

pub type Result<T> = std::result::Result<T, MeterError>;

/// Entry point for every front end: scoring, generation and history.
pub struct PasswordMeter {
    history: Arc<dyn HistoryStore>,
    generator: PasswordGenerator,
}

impl PasswordMeter {
    pub fn new(history: Arc<dyn HistoryStore>) -> Self {
        Self {
            history,
            generator: PasswordGenerator::new(),
        }
    }

    /// Score a password and, unless it is blacklisted, record it in history.
    pub fn check_password(&self, password: &str) -> Result<ScoreResult> {
        let result = strength::score(password);
        log::debug!(
            "Checked password: score={} blacklisted={}",
            result.score,
            result.is_blacklisted
        );

        if !result.is_blacklisted {
            self.history.append(password, strength::classify(result.score))?;
        }

        Ok(result)
    }

    /// Generate a password. It is not recorded in history.
    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        let password = self.generator.generate_password(options)?;
        log::debug!("Generated password of length {}", password.chars().count());
        Ok(password)
    }

    /// All recorded checks, oldest first. Passwords are in plaintext.
    pub fn get_history(&self) -> Vec<PasswordCheckRecord> {
        self.history.load()
    }

    pub fn clear_history(&self) -> Result<()> {
        self.history.clear()?;
        Ok(())
    }

    pub fn history_store(&self) -> &dyn HistoryStore {
        self.history.as_ref()
    }
}

// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::{PasswordCheckRecord, Strength};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Success message (only present on success)
    pub message: Option<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Strength check
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CheckPasswordRequest {
    /// Password to evaluate
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CheckPasswordResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Normalized score (0-5)
    pub score: u8,
    /// Strength label derived from the score
    pub strength: Option<Strength>,
    /// Progress bar color for the strength label
    pub color: Option<String>,
    /// Whether the password is on the common-password blacklist
    pub is_blacklisted: bool,
    /// Improvement suggestions, empty once the score reaches 5
    pub feedback: Vec<String>,
    /// Human-readable summary
    pub message: Option<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

impl CheckPasswordResponse {
    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            score: 0,
            strength: None,
            color: None,
            is_blacklisted: false,
            feedback: Vec::new(),
            message: None,
            error: Some(error),
        }
    }
}

// Generator
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Password length, 8-32 (default: 12)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include numbers (default: true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Score of the generated password (0-5)
    pub score: Option<u8>,
    /// Strength label of the generated password
    pub strength: Option<Strength>,
    /// True when the generated password scores 5/5
    pub is_strong: bool,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

impl PasswordGenerationResponse {
    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            password: None,
            score: None,
            strength: None,
            is_strong: false,
            error: Some(error),
        }
    }
}

// History
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Recorded checks, newest first, passwords masked
    pub entries: Vec<PasswordCheckRecord>,
}

// System
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SystemStatusResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Application version
    pub version: String,
    /// Backing history file, if any
    pub history_file: Option<String>,
    /// Number of recorded checks
    pub history_count: usize,
}

// src/models.rs
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Format used for history timestamps, both on disk and over the API.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder shown instead of a stored password.
pub const PASSWORD_MASK: &str = "••••••••";

/// Coarse strength label derived from the normalized 0-5 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Strength::Weak,
            3..=4 => Strength::Moderate,
            _ => Strength::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        }
    }

    /// Progress bar color used by the web form.
    pub fn color(&self) -> &'static str {
        match self {
            Strength::Weak => "#FF0000",
            Strength::Moderate => "#FFA500",
            Strength::Strong => "#32CD32",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strength label '{0}'")]
pub struct ParseStrengthError(pub String);

impl FromStr for Strength {
    type Err = ParseStrengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Weak" => Ok(Strength::Weak),
            "Moderate" => Ok(Strength::Moderate),
            "Strong" => Ok(Strength::Strong),
            other => Err(ParseStrengthError(other.to_string())),
        }
    }
}

/// One row of the check history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordCheckRecord {
    #[serde(with = "timestamp_format")]
    #[schema(value_type = String, example = "2025-03-14 09:26:53")]
    pub timestamp: NaiveDateTime,
    pub password: String,
    pub strength: Strength,
}

impl PasswordCheckRecord {
    /// Copy of the record with the password replaced by the display mask.
    pub fn masked(&self) -> Self {
        Self {
            timestamp: self.timestamp,
            password: PASSWORD_MASK.to_string(),
            strength: self.strength,
        }
    }
}

/// Outcome of scoring a single password. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreResult {
    /// Normalized score, 0 to 5
    pub score: u8,
    /// Improvement hints in the order the checks ran
    pub feedback: Vec<String>,
    pub is_blacklisted: bool,
}

impl ScoreResult {
    pub fn strength(&self) -> Strength {
        Strength::from_score(self.score)
    }

    /// Fraction of the maximum score, for progress bars.
    pub fn progress(&self) -> f32 {
        f32::from(self.score) / 5.0
    }

    pub fn summary(&self) -> &'static str {
        if self.is_blacklisted {
            return "This password is blacklisted and extremely common. Please choose a more secure password.";
        }
        match self.strength() {
            Strength::Strong => "Awesome! Your password is strong.",
            Strength::Moderate => "Your password is moderate. Follow the suggestions below to make it stronger.",
            Strength::Weak => "Your password is weak. Follow the suggestions below to improve it.",
        }
    }
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl PasswordGenerationOptions {
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 32;
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_labels_follow_score_bands() {
        for score in 0..=2 {
            assert_eq!(Strength::from_score(score), Strength::Weak);
        }
        assert_eq!(Strength::from_score(3), Strength::Moderate);
        assert_eq!(Strength::from_score(4), Strength::Moderate);
        assert_eq!(Strength::from_score(5), Strength::Strong);
    }

    #[test]
    fn strength_parses_only_known_labels() {
        assert_eq!("Moderate".parse::<Strength>(), Ok(Strength::Moderate));
        assert!("moderate".parse::<Strength>().is_err());
        assert!("".parse::<Strength>().is_err());
    }

    #[test]
    fn masked_record_hides_password_only() {
        let timestamp = NaiveDateTime::parse_from_str("2025-01-02 03:04:05", TIMESTAMP_FORMAT).unwrap();
        let record = PasswordCheckRecord {
            timestamp,
            password: "hunter2".to_string(),
            strength: Strength::Weak,
        };
        let masked = record.masked();
        assert_eq!(masked.password, PASSWORD_MASK);
        assert_eq!(masked.timestamp, timestamp);
        assert_eq!(masked.strength, Strength::Weak);
    }

    #[test]
    fn record_serializes_timestamp_as_plain_string() {
        let record = PasswordCheckRecord {
            timestamp: NaiveDateTime::parse_from_str("2025-01-02 03:04:05", TIMESTAMP_FORMAT).unwrap(),
            password: "x".to_string(),
            strength: Strength::Strong,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["timestamp"], "2025-01-02 03:04:05");
        assert_eq!(json["strength"], "Strong");
    }
}

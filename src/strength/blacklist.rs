// src/strength/blacklist.rs
use std::collections::HashSet;

use lazy_static::lazy_static;

/// Any password containing this (case-insensitive) is rejected.
const BLACKLISTED_FRAGMENT: &str = "password123";

lazy_static! {
    static ref COMMON_PASSWORDS: HashSet<&'static str> = [
        "password", "123456", "12345678", "1234", "qwerty",
        "letmein", "admin", "welcome", "password1", "12345",
    ]
    .into_iter()
    .collect();
}

/// Check a candidate against the fixed list of common passwords.
///
/// Matching is case-insensitive. The empty string is not on the list.
pub fn is_blacklisted(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS.contains(lowered.as_str()) || lowered.contains(BLACKLISTED_FRAGMENT)
}

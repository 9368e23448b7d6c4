// src/strength/scorer.rs
use crate::models::{ScoreResult, Strength};
use super::is_blacklisted;

const MAX_RAW_SCORE: f64 = 4.5;
const MIN_LENGTH: usize = 8;

/// Characters that count as "special" when scoring. The generator draws from its own pool.
const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+{}[]:;,.<>?/\\|`~-";

const COMMON_SEQUENCES: [&str; 3] = ["123", "abc", "qwe"];

pub const BLACKLISTED_MESSAGE: &str = "This password is blacklisted and extremely common.";
pub const LENGTH_MESSAGE: &str = "Password should be at least 8 characters long.";
pub const UPPERCASE_MESSAGE: &str = "Add uppercase letters (A-Z).";
pub const LOWERCASE_MESSAGE: &str = "Add lowercase letters (a-z).";
pub const DIGIT_MESSAGE: &str = "Add numbers (0-9).";
pub const SPECIAL_MESSAGE: &str = "Add special characters (!@#$%^&*).";
pub const REPEAT_MESSAGE: &str = "Avoid repeating characters (aaa, 111).";
pub const SEQUENCE_MESSAGE: &str = "Avoid common sequences (123, abc).";

/// Score a password on a 0-5 scale and collect improvement hints.
///
/// Blacklisted passwords short-circuit to 0. Otherwise each composition rule
/// either adds points or appends its hint, then the two pattern checks may add
/// hints of their own without touching the score.
pub fn score(password: &str) -> ScoreResult {
    if is_blacklisted(password) {
        return ScoreResult {
            score: 0,
            feedback: vec![BLACKLISTED_MESSAGE.to_string()],
            is_blacklisted: true,
        };
    }

    let mut raw = 0.0;
    let mut feedback = Vec::new();

    let rules: [(bool, f64, &str); 5] = [
        (password.chars().count() >= MIN_LENGTH, 1.0, LENGTH_MESSAGE),
        (password.chars().any(|c| c.is_ascii_uppercase()), 0.5, UPPERCASE_MESSAGE),
        (password.chars().any(|c| c.is_ascii_lowercase()), 0.5, LOWERCASE_MESSAGE),
        (password.chars().any(|c| c.is_ascii_digit()), 1.0, DIGIT_MESSAGE),
        (password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)), 1.5, SPECIAL_MESSAGE),
    ];

    for (satisfied, points, message) in rules {
        if satisfied {
            raw += points;
        } else {
            feedback.push(message.to_string());
        }
    }

    let lowered = password.to_lowercase();
    if has_repeated_run(&lowered, 3) {
        feedback.push(REPEAT_MESSAGE.to_string());
    }
    if COMMON_SEQUENCES.iter().any(|seq| lowered.contains(seq)) {
        feedback.push(SEQUENCE_MESSAGE.to_string());
    }

    ScoreResult {
        score: normalize(raw),
        feedback,
        is_blacklisted: false,
    }
}

/// Map a normalized score to its label.
pub fn classify(score: u8) -> Strength {
    Strength::from_score(score)
}

fn normalize(raw: f64) -> u8 {
    ((raw / MAX_RAW_SCORE) * 5.0).round().clamp(0.0, 5.0) as u8
}

// Newlines never start or extend a run.
fn has_repeated_run(text: &str, run: usize) -> bool {
    let mut previous = None;
    let mut count = 0;
    for c in text.chars() {
        if c == '\n' {
            previous = None;
            count = 0;
            continue;
        }
        if Some(c) == previous {
            count += 1;
        } else {
            previous = Some(c);
            count = 1;
        }
        if count >= run {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blacklisted_password_short_circuits() {
        let result = score("LetMeIn");
        assert_eq!(result.score, 0);
        assert!(result.is_blacklisted);
        assert_eq!(result.feedback, vec![BLACKLISTED_MESSAGE.to_string()]);

        let result = score("Xx-PassWord123-!!");
        assert!(result.is_blacklisted);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn empty_password_gets_every_composition_hint() {
        let result = score("");
        assert_eq!(result.score, 0);
        assert!(!result.is_blacklisted);
        assert_eq!(
            result.feedback,
            vec![LENGTH_MESSAGE, UPPERCASE_MESSAGE, LOWERCASE_MESSAGE, DIGIT_MESSAGE, SPECIAL_MESSAGE]
        );
    }

    #[test]
    fn full_composition_scores_five() {
        let result = score("Abcdef1!");
        assert_eq!(result.score, 5);
        assert_eq!(classify(result.score), Strength::Strong);
        // "abc" still triggers the sequence hint
        assert_eq!(result.feedback, vec![SEQUENCE_MESSAGE]);
    }

    #[test]
    fn lowercase_only_is_weak() {
        // length + lower = 1.5 -> 1.67 -> 2
        let result = score("abcdefgh");
        assert_eq!(result.score, 2);
        assert_eq!(classify(result.score), Strength::Weak);
        assert_eq!(
            result.feedback,
            vec![UPPERCASE_MESSAGE, DIGIT_MESSAGE, SPECIAL_MESSAGE, SEQUENCE_MESSAGE]
        );
    }

    #[test]
    fn partial_scores_round_to_nearest() {
        // length + lower + digit = 2.5 -> 2.78 -> 3
        assert_eq!(score("zxcvbnm9").score, 3);
        // length + upper + lower + digit = 3.0 -> 3.33 -> 3
        assert_eq!(score("Zxcvbnm9").score, 3);
        // upper + lower + digit + special, too short = 3.5 -> 3.89 -> 4
        assert_eq!(score("Zx9!").score, 4);
        // special only = 1.5 -> 1.67 -> 2
        assert_eq!(score("!!").score, 2);
        // lower only = 0.5 -> 0.56 -> 1
        assert_eq!(score("z").score, 1);
    }

    #[test]
    fn repeats_are_case_insensitive() {
        let result = score("xAaA-Zq9w!");
        assert!(result.feedback.contains(&REPEAT_MESSAGE.to_string()));

        let result = score("aa-Aq9w!zx");
        assert!(!result.feedback.contains(&REPEAT_MESSAGE.to_string()));
    }

    #[test]
    fn newline_breaks_repeat_runs() {
        assert!(!has_repeated_run("\n\n\n", 3));
        assert!(!has_repeated_run("aa\na", 3));
        assert!(has_repeated_run("111", 3));
    }

    #[test]
    fn sequences_are_case_insensitive() {
        let result = score("zQWErty9!");
        assert!(result.feedback.contains(&SEQUENCE_MESSAGE.to_string()));
        let result = score("x1234y");
        assert!(result.feedback.contains(&SEQUENCE_MESSAGE.to_string()));
    }

    #[test]
    fn advisory_checks_do_not_change_score() {
        assert_eq!(score("Zxcvbn1!").score, score("Zaaabn1!").score);
    }

    #[test]
    fn equals_sign_is_not_special() {
        // '=' is not a scoring special character
        let result = score("Zxcvbnm9=");
        assert!(result.feedback.contains(&SPECIAL_MESSAGE.to_string()));
        assert_eq!(result.score, 3);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let result = score("ééééééé");
        assert!(result.feedback.contains(&LENGTH_MESSAGE.to_string()));
    }
}

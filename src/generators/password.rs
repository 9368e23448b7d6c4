// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::models::PasswordGenerationOptions;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
// Repeated symbols are intentional, they weight the draw.
const SPECIAL: &[u8] = b"!@#$%^&*()_+{}:><?[]$%^&#*&";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Please select at least one character type.")]
    NoCharacterClassSelected,
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String, GeneratorError> {
        self.generate_with_rng(options, &mut rand::thread_rng())
    }

    /// Build a password containing at least one character of every enabled class.
    ///
    /// When `length` is below the number of enabled classes the result is one
    /// character per class, so it comes out longer than asked.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        options: &PasswordGenerationOptions,
        rng: &mut R,
    ) -> Result<String, GeneratorError> {
        let pools = enabled_pools(options);
        if pools.is_empty() {
            return Err(GeneratorError::NoCharacterClassSelected);
        }

        let mut password: Vec<u8> = pools
            .iter()
            .map(|pool| pool[rng.gen_range(0..pool.len())])
            .collect();

        let all_chars: Vec<u8> = pools.concat();
        let dist = Uniform::from(0..all_chars.len());
        let remaining = options.length.saturating_sub(password.len());
        password.extend((0..remaining).map(|_| all_chars[dist.sample(rng)]));

        password.shuffle(rng);

        Ok(password.into_iter().map(char::from).collect())
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn enabled_pools(options: &PasswordGenerationOptions) -> Vec<&'static [u8]> {
    let mut pools = Vec::with_capacity(4);
    if options.include_lowercase {
        pools.push(LOWERCASE);
    }
    if options.include_uppercase {
        pools.push(UPPERCASE);
    }
    if options.include_numbers {
        pools.push(DIGITS);
    }
    if options.include_symbols {
        pools.push(SPECIAL);
    }
    pools
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn options(length: usize, upper: bool, lower: bool, digits: bool, special: bool) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: digits,
            include_symbols: special,
        }
    }

    fn contains_from(password: &str, pool: &[u8]) -> bool {
        password.bytes().any(|b| pool.contains(&b))
    }

    #[test]
    fn every_enabled_class_is_present() {
        let generator = PasswordGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for length in [8, 12, 20, 32] {
            for _ in 0..50 {
                let pwd = generator
                    .generate_with_rng(&options(length, true, true, true, true), &mut rng)
                    .unwrap();
                assert_eq!(pwd.len(), length);
                assert!(contains_from(&pwd, LOWERCASE));
                assert!(contains_from(&pwd, UPPERCASE));
                assert!(contains_from(&pwd, DIGITS));
                assert!(contains_from(&pwd, SPECIAL));
            }
        }
    }

    #[test]
    fn disabled_classes_never_appear() {
        let generator = PasswordGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let pwd = generator
                .generate_with_rng(&options(16, false, true, true, false), &mut rng)
                .unwrap();
            assert!(pwd.bytes().all(|b| LOWERCASE.contains(&b) || DIGITS.contains(&b)));
            assert!(contains_from(&pwd, LOWERCASE));
            assert!(contains_from(&pwd, DIGITS));
        }
    }

    #[test]
    fn no_class_selected_is_an_error() {
        let generator = PasswordGenerator::new();
        let result = generator.generate_password(&options(12, false, false, false, false));
        assert_eq!(result, Err(GeneratorError::NoCharacterClassSelected));
        assert_eq!(
            GeneratorError::NoCharacterClassSelected.to_string(),
            "Please select at least one character type."
        );
    }

    #[test]
    fn short_length_yields_one_char_per_class() {
        let generator = PasswordGenerator::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let pwd = generator
            .generate_with_rng(&options(2, true, true, true, true), &mut rng)
            .unwrap();
        assert_eq!(pwd.len(), 4);
    }

    #[test]
    fn generated_password_with_all_classes_scores_well() {
        let generator = PasswordGenerator::new();
        let pwd = generator.generate_password(&PasswordGenerationOptions::default()).unwrap();
        assert_eq!(pwd.len(), 12);
        // Length, upper, lower and digit are guaranteed. The generator pool is
        // a subset of the scorer's special set, so special is too.
        assert!(crate::strength::score(&pwd).score >= 4);
    }
}

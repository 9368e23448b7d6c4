// src/strength/mod.rs

pub mod blacklist;
pub mod scorer;

pub use blacklist::is_blacklisted;
pub use scorer::{classify, score};

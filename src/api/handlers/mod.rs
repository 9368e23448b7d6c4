// src/api/handlers/mod.rs

pub mod meter;
pub mod generator;
pub mod history;
pub mod system;
pub mod web;

// src/config/mod.rs
//! Configuration system for cetele-credentials
//!
//! Central, lazy-loaded deployment config with TOML + env overrides.

pub use app::{load, Config, Features, Hashing};

mod app;
mod defaults;

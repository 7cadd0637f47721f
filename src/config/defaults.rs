// src/config/defaults.rs
use crate::config::app::{Features, Hashing};
use crate::consts::PBKDF2_ITERATIONS;

pub fn default_hashing() -> Hashing {
    Hashing {
        iterations: PBKDF2_ITERATIONS,
    }
}

pub fn default_features() -> Features {
    Features {
        skip_kdf_slowdown: false,
    }
}

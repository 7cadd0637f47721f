// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::consts::TEST_KDF_ITERATIONS;
use crate::core::hasher::HasherConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub hashing: Hashing,
    pub features: Features,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hashing {
    pub iterations: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    pub skip_kdf_slowdown: bool,
}

impl Config {
    /// Project the deployment config into the hasher's immutable work-factor
    /// configuration. Test mode drops the iteration count so suites stay fast.
    pub fn hasher_config(&self) -> HasherConfig {
        if self.features.skip_kdf_slowdown {
            HasherConfig::with_iterations(TEST_KDF_ITERATIONS)
        } else {
            HasherConfig::with_iterations(self.hashing.iterations)
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut conf = read_config_file();

        // Test mode override
        if std::env::var("CETELE_CREDENTIALS_TEST_MODE").is_ok() {
            conf.features.skip_kdf_slowdown = true;
        }

        conf
    })
}

/// Search order: explicit env path, working directory, platform config dir.
fn read_config_file() -> Config {
    let explicit = std::env::var("CETELE_CREDENTIALS_CONFIG")
        .ok()
        .map(PathBuf::from);

    let candidates = explicit
        .into_iter()
        .chain(Some(PathBuf::from("cetele-credentials.toml")))
        .chain(platform_config_path());

    for path in candidates {
        if path.exists() {
            let content = std::fs::read_to_string(&path).expect("Failed to read config file");
            return toml::from_str(&content).expect("Invalid TOML in config file");
        }
    }

    tracing::warn!("no config file found — using built-in defaults");
    Config {
        hashing: default_hashing(),
        features: default_features(),
    }
}

fn platform_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cetele").join("credentials.toml"))
}

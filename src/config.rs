//! Shell configuration from environment variables.
//!
//! - `BLOCKFALL_SEED`: piece generator seed (default: derived from the clock)
//! - `BLOCKFALL_FRAME_MS`: frame period in milliseconds (default: 16)
//! - `BLOCKFALL_LOG_PATH`: write logs to this file (default: logging off)
//!
//! The gravity interval is not configurable.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub frame_ms: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            frame_ms: TICK_MS,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup. Unset or blank keys fall
    /// back to defaults; malformed numbers are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(v) = get("BLOCKFALL_SEED") {
            config.seed = v
                .parse()
                .map_err(|_| anyhow!("config: invalid BLOCKFALL_SEED value: {}", v))?;
        }

        if let Some(v) = get("BLOCKFALL_FRAME_MS") {
            config.frame_ms = v
                .parse()
                .ok()
                .filter(|&ms: &u32| ms > 0)
                .ok_or_else(|| anyhow!("config: invalid BLOCKFALL_FRAME_MS value: {}", v))?;
        }

        config.log_path = get("BLOCKFALL_LOG_PATH").map(PathBuf::from);

        Ok(config)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = RunConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.frame_ms, TICK_MS);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn reads_all_keys() {
        let config = RunConfig::from_lookup(lookup_from(&[
            ("BLOCKFALL_SEED", "42"),
            ("BLOCKFALL_FRAME_MS", " 33 "),
            ("BLOCKFALL_LOG_PATH", "/tmp/blockfall.log"),
        ]))
        .unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.frame_ms, 33);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/blockfall.log")));
    }

    #[test]
    fn blank_values_fall_back() {
        let config =
            RunConfig::from_lookup(lookup_from(&[("BLOCKFALL_LOG_PATH", "  ")])).unwrap();
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = RunConfig::from_lookup(lookup_from(&[("BLOCKFALL_SEED", "abc")])).unwrap_err();
        assert!(err.to_string().contains("BLOCKFALL_SEED"));

        assert!(RunConfig::from_lookup(lookup_from(&[("BLOCKFALL_FRAME_MS", "0")])).is_err());
        assert!(RunConfig::from_lookup(lookup_from(&[("BLOCKFALL_FRAME_MS", "-5")])).is_err());
    }
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::watch::RESYNC_INTERVAL_SECS;
use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// How often the full namespace list is re-synchronized
    pub resync_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resync_interval: Duration::from_secs(RESYNC_INTERVAL_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let resync_secs = match lookup("RESYNC_INTERVAL_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("RESYNC_INTERVAL_SECS is not a number: {}", value))?,
            None => RESYNC_INTERVAL_SECS,
        };

        if resync_secs == 0 {
            bail!("RESYNC_INTERVAL_SECS must be greater than zero");
        }

        Ok(Config {
            resync_interval: Duration::from_secs(resync_secs),
        })
    }
}

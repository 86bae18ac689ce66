use crate::bounds::within;
use crate::{ConfigError, ConfigErrorResult};

use std::ops::RangeInclusive;

use serde::Deserialize;

pub const RATE_LIMIT_MESSAGES: RangeInclusive<u32> = 1..=100_000;
pub const RATE_LIMIT_WINDOW_SECS: RangeInclusive<u64> = 1..=3600;

/// Outbound message budget, tracked separately for every tenant.
///
/// The budget refills evenly over `window_secs`, so a tenant that has spent
/// it recovers one message every `window_secs / max_messages` seconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_messages: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_messages: 120,
            window_secs: 60,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        within(
            "rate_limit.max_messages",
            self.max_messages,
            RATE_LIMIT_MESSAGES,
        )
        .and_then(|()| {
            within(
                "rate_limit.window_secs",
                self.window_secs,
                RATE_LIMIT_WINDOW_SECS,
            )
        })
        .map_err(ConfigError::rate_limit)
    }
}

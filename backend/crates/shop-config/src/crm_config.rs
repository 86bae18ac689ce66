use crate::bounds::within;
use crate::{ConfigError, ConfigErrorResult};

use std::ops::RangeInclusive;

use serde::Deserialize;

pub const CONTENT_LENGTH: RangeInclusive<usize> = 1..=65_536;
pub const IDENTIFIER_LENGTH: RangeInclusive<usize> = 16..=2048;
pub const METADATA_ENTRIES: RangeInclusive<usize> = 0..=1024;

/// Field limits for CRM request bodies.
///
/// Applied while validating conversation and message payloads, before any
/// handler logic runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrmConfig {
    /// Maximum characters in a message body
    pub max_content_length: usize,
    /// Maximum characters in channel user ids, usernames, customer ids and media URLs
    pub max_identifier_length: usize,
    /// Maximum keys in conversation metadata
    pub max_metadata_entries: usize,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            max_content_length: 4096,
            max_identifier_length: 255,
            max_metadata_entries: 64,
        }
    }
}

impl CrmConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        [
            (
                "crm.max_content_length",
                self.max_content_length,
                CONTENT_LENGTH,
            ),
            (
                "crm.max_identifier_length",
                self.max_identifier_length,
                IDENTIFIER_LENGTH,
            ),
            (
                "crm.max_metadata_entries",
                self.max_metadata_entries,
                METADATA_ENTRIES,
            ),
        ]
        .into_iter()
        .try_for_each(|(key, value, bounds)| within(key, value, bounds))
        .map_err(ConfigError::crm)
    }
}

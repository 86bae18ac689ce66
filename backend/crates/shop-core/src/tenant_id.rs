use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identifier of an isolated customer account.
///
/// Always strictly positive. Every store access is keyed by exactly one
/// `TenantId`, so a value of this type is proof that the request has been
/// scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TenantId(i64);

impl TenantId {
    #[track_caller]
    pub fn new(value: i64) -> CoreErrorResult<Self> {
        if value <= 0 {
            return Err(CoreError::InvalidTenantId {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for TenantId {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: i64) -> CoreErrorResult<Self> {
        Self::new(value)
    }
}

impl From<TenantId> for i64 {
    fn from(tenant_id: TenantId) -> Self {
        tenant_id.0
    }
}

impl FromStr for TenantId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let value = s.parse::<i64>().map_err(|_| CoreError::InvalidTenantId {
            value: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Self::new(value)
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

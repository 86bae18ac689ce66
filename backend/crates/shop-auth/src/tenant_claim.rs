use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tenant identifier exactly as it arrived in the token.
///
/// Issuers disagree on whether the claim is a string or a number, so both
/// are accepted; anything else is kept verbatim so the token still decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TenantClaim {
    Integer(i64),
    Text(String),
    Other(Value),
}

impl TenantClaim {
    /// Text is parsed as base-10, integers pass through unchanged.
    pub fn normalize(&self) -> RawTenantId {
        match self {
            Self::Integer(n) => RawTenantId::Number(*n),
            Self::Text(s) => s
                .parse::<i64>()
                .map(RawTenantId::Number)
                .unwrap_or(RawTenantId::NotANumber),
            Self::Other(Value::Number(n)) => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    RawTenantId::Number(f as i64)
                }
                _ => RawTenantId::NotANumber,
            },
            Self::Other(_) => RawTenantId::NotANumber,
        }
    }
}

impl fmt::Display for TenantClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

/// Tenant id after normalization but before any validation.
///
/// `NotANumber` is what an absent or unparseable claim turns into. Nothing
/// here rejects it; `resolve_tenant_id` is the fail-fast path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawTenantId {
    Number(i64),
    /// Serialized as `null`
    NotANumber,
}

impl RawTenantId {
    pub fn as_option(self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(n),
            Self::NotANumber => None,
        }
    }

    pub fn is_nan(self) -> bool {
        self == Self::NotANumber
    }
}

impl fmt::Display for RawTenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::NotANumber => write!(f, "NaN"),
        }
    }
}

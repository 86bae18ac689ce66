use error_location::ErrorLocation;
use thiserror::Error;

/// Failures while turning a request into a tenant-scoped identity.
///
/// Variants are grouped by the stage that raises them: parsing the
/// `Authorization` header, verifying the token, then resolving the tenant.
/// An absent header is not an error here; the resolvers report it as
/// `Unauthenticated` once a route actually needs an identity.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authorization header is not a Bearer credential {location}")]
    InvalidScheme { location: ErrorLocation },

    /// Unusable header value or verification key
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signature or structure rejected: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    /// Signature was fine but a claim is not acceptable
    #[error("Claim '{claim}' rejected: {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    /// A tenant-scoped route was reached without any identity
    #[error("Request carries no identity {location}")]
    Unauthenticated { location: ErrorLocation },

    /// `value` is the claim as received, or `<missing>`
    #[error("Tenant claim {value} is not a positive integer {location}")]
    BadTenantId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Tenant {tenant_id} sent more than {limit} messages in {window_secs}s {location}")]
    RateLimitExceeded {
        tenant_id: i64,
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable code rendered in error bodies and used as a metric label
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::Unauthenticated { .. } => "UNAUTHORIZED",
            Self::BadTenantId { .. } => "BAD_TENANT_ID",
            Self::RateLimitExceeded { .. } => "RATE_LIMIT_EXCEEDED",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;

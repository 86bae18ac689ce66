use crate::{AuthError, Claims, JwtKey, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};

/// Clock skew tolerance applied to `exp`/`nbf`
const LEEWAY_SECS: u64 = 30;

/// Verifies bearer tokens for a single key and returns their claims
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Fails only when an RSA key is not valid PEM
    #[track_caller]
    pub fn new(key: &JwtKey) -> AuthErrorResult<Self> {
        let decoding_key = match key {
            JwtKey::SharedSecret(secret) => DecodingKey::from_secret(secret),
            JwtKey::RsaPublicPem(pem) => {
                DecodingKey::from_rsa_pem(pem.as_bytes()).map_err(|e| AuthError::InvalidToken {
                    message: format!("Invalid RSA public key: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?
            }
        };

        Ok(Self {
            decoding_key,
            validation: validation_for(key.algorithm()),
        })
    }

    /// Shorthand for a shared-secret validator, which cannot fail to build
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation: validation_for(Algorithm::HS256),
        }
    }

    /// Verify signature and expiry, then the claims themselves
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let location = ErrorLocation::from(Location::caller());

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired { location },
                _ => AuthError::JwtDecode {
                    source: e,
                    location,
                },
            })?;

        claims.validate()?;
        Ok(claims)
    }

    /// Algorithm name for startup logging
    pub fn algorithm(&self) -> &'static str {
        match self.validation.algorithms.first() {
            Some(Algorithm::HS256) => "HS256",
            Some(Algorithm::RS256) => "RS256",
            _ => "unknown",
        }
    }
}

fn validation_for(algorithm: Algorithm) -> Validation {
    let mut validation = Validation::new(algorithm);
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.leeway = LEEWAY_SECS;
    validation
}

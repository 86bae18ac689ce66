use jsonwebtoken::Algorithm;

/// Key material token signatures are verified against.
///
/// The variant decides the algorithm; tokens signed with anything else are
/// rejected.
#[derive(Debug, Clone)]
pub enum JwtKey {
    /// Shared secret, verified with HS256
    SharedSecret(Vec<u8>),
    /// PEM-encoded RSA public key, verified with RS256
    RsaPublicPem(String),
}

impl JwtKey {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::SharedSecret(_) => Algorithm::HS256,
            Self::RsaPublicPem(_) => Algorithm::RS256,
        }
    }
}

// crates/core/src/token.rs
//! Signed session tokens (HS256 JWT with `sub` and `exp` claims).
//!
//! The token is self-contained: expiry is embedded in the claims and nothing is
//! tracked on the side. `issue_at`/`verify_at` take the current time explicitly
//! so expiry can be tested without sleeping.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Lifetime of an access token: 30 minutes.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 30 * 60;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Claim set carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    /// Unix seconds.
    pub exp: i64,
}

/// Issues and verifies session tokens with a symmetric key.
#[derive(Clone)]
pub struct SessionTokens {
    keys: Option<(EncodingKey, DecodingKey)>,
}

impl SessionTokens {
    /// `None` leaves the issuer unkeyed: every `issue`/`verify` call fails with
    /// [`AuthError::MissingSigningKey`].
    pub fn new(secret: Option<&str>) -> Self {
        let keys = secret.map(|s| {
            (
                EncodingKey::from_secret(s.as_bytes()),
                DecodingKey::from_secret(s.as_bytes()),
            )
        });
        Self { keys }
    }

    pub fn has_key(&self) -> bool {
        self.keys.is_some()
    }

    /// Mint a token for `username` valid for [`ACCESS_TOKEN_TTL_SECS`].
    pub fn issue(&self, username: &str) -> Result<String, AuthError> {
        self.issue_at(username, Utc::now().timestamp())
    }

    pub fn issue_at(&self, username: &str, now: i64) -> Result<String, AuthError> {
        let (encoding_key, _) = self.keys.as_ref().ok_or(AuthError::MissingSigningKey)?;
        let claims = Claims {
            sub: username.to_string(),
            exp: now + ACCESS_TOKEN_TTL_SECS,
        };
        encode(&Header::new(ALGORITHM), &claims, encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Check signature and expiry, returning the `sub` claim.
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    pub fn verify_at(&self, token: &str, now: i64) -> Result<String, AuthError> {
        self.decode_claims(token, now).map(|claims| claims.sub)
    }

    /// Decode and check a token, returning the full claim set.
    pub fn decode_claims(&self, token: &str, now: i64) -> Result<Claims, AuthError> {
        let (_, decoding_key) = self.keys.as_ref().ok_or(AuthError::MissingSigningKey)?;

        // Expiry is checked below against `now` with zero leeway.
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<Claims>(token, decoding_key, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        if data.claims.exp <= now {
            return Err(AuthError::Expired);
        }
        Ok(data.claims)
    }
}

impl std::fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokens")
            .field("has_key", &self.has_key())
            .finish()
    }
}

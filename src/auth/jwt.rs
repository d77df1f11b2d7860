//! JWT issue and validation.

use chrono::Utc;
use jsonwebtoken::errors::Result as JwtResult;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub authorized: bool,
    pub user: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Clone)]
pub struct JwtSecret {
    secret: String,
    user: String,
    ttl: Duration,
}

impl JwtSecret {
    pub fn new(secret: String, user: String, ttl: Duration) -> Self {
        Self { secret, user, ttl }
    }

    /// Sign an HS256 token for the configured demo user.
    pub fn issue(&self) -> JwtResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            authorized: true,
            user: self.user.clone(),
            exp: now + self.ttl.as_secs() as i64,
            iat: now,
        };
        self.sign(&Header::new(Algorithm::HS256), &claims)
    }

    fn sign(&self, header: &Header, claims: &Claims) -> JwtResult<String> {
        encode(
            header,
            claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Accepts any HMAC-signed token (HS256/384/512) that has not expired.
    pub fn validate(&self, token: &str) -> JwtResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.validate_exp = true;
        validation.leeway = 0;
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )?;
        Ok(data.claims)
    }
}

// src/services/auth.rs
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::warn;
use serde::{Deserialize, Serialize};
use std::env;

/// The admin panel ships with this password; deployments override it
/// through ADMIN_PASSWORD.
const DEFAULT_PASSWORD: &str = "admin@1234";
const DEFAULT_TOKEN_SECRET: &str = "bank-certificates-dev-secret";
const TOKEN_LIFETIME_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Single shared admin password gating the catalog mutation routes.
/// A correct password buys an HS256 bearer token good for 24 hours.
pub struct AdminAuth {
    password: String,
    secret: String,
}

impl AdminAuth {
    pub fn new(password: impl Into<String>, secret: impl Into<String>) -> Self {
        AdminAuth {
            password: password.into(),
            secret: secret.into(),
        }
    }

    pub fn from_env() -> Self {
        let password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
            warn!("$ADMIN_PASSWORD not set, using the built-in default");
            DEFAULT_PASSWORD.to_string()
        });
        let secret = env::var("ADMIN_TOKEN_SECRET").unwrap_or_else(|_| {
            warn!("$ADMIN_TOKEN_SECRET not set, using the built-in dev secret");
            DEFAULT_TOKEN_SECRET.to_string()
        });
        AdminAuth::new(password, secret)
    }

    /// Issue a token for the given password, or nothing if it is wrong.
    pub fn login(&self, password: &str) -> Option<String> {
        if password != self.password {
            return None;
        }

        let iat = Utc::now();
        let exp = iat + Duration::hours(TOKEN_LIFETIME_HOURS);
        let claims = Claims {
            sub: "admin".to_string(),
            iat: iat.timestamp(),
            exp: exp.timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .ok()
    }

    /// Check signature and expiry of a bearer token.
    pub fn verify(&self, token: &str) -> bool {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AdminAuth {
        AdminAuth::new("admin@1234", "test-secret")
    }

    #[test]
    fn correct_password_yields_verifiable_token() {
        let auth = auth();
        let token = auth.login("admin@1234").unwrap();
        assert!(auth.verify(&token));
    }

    #[test]
    fn wrong_password_yields_no_token() {
        assert!(auth().login("letmein").is_none());
    }

    #[test]
    fn garbage_token_does_not_verify() {
        assert!(!auth().verify("not-a-token"));
    }

    #[test]
    fn token_from_another_secret_does_not_verify() {
        let other = AdminAuth::new("admin@1234", "different-secret");
        let token = other.login("admin@1234").unwrap();
        assert!(!auth().verify(&token));
    }
}

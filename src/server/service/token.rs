//! Issuing and verifying access tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: i32,
    pub email: String,
    /// Issued at, unix seconds.
    pub iat: i64,
    /// Expiry, unix seconds.
    pub exp: i64,
}

/// Signs and verifies HS256 access tokens with the configured secret.
///
/// Cloned into the application state; the keys are derived once at startup.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret shared by signing and verification
    /// - `ttl_days` - Lifetime of issued tokens in days
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
            ttl: Duration::days(ttl_days),
        }
    }

    /// Issues a signed token for a user.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token valid for the configured lifetime
    /// - `Err(AppError::InternalError)` - Signing failed
    pub fn issue(&self, user: &entity::user::Model) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to sign access token: {}", e)))
    }

    /// Verifies a token's signature and expiry.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Claims of a valid token
    /// - `Err(AuthError::InvalidToken)` - Malformed, tampered with or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::sea_orm_active_enums::ItemStatus;

    fn user() -> entity::user::Model {
        let now = Utc::now();
        entity::user::Model {
            id: 7,
            full_name: None,
            email: "cutter@example.com".to_string(),
            password: String::new(),
            avatar: None,
            phone: None,
            otp: None,
            work_description: None,
            birthday: None,
            access_token: None,
            status: ItemStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn issued_token_verifies() {
        let service = TokenService::new("test-secret", 7);

        let token = service.issue(&user()).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "cutter@example.com");
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = TokenService::new("one", 7).issue(&user()).unwrap();

        let result = TokenService::new("two", 7).verify(&token);

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn rejects_expired_token() {
        let service = TokenService::new("test-secret", 7);
        let past = Utc::now() - Duration::days(1);
        let claims = Claims {
            sub: 7,
            email: "cutter@example.com".to_string(),
            iat: (past - Duration::days(7)).timestamp(),
            exp: past.timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(service.verify(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn rejects_garbage() {
        let service = TokenService::new("test-secret", 7);

        assert!(service.verify("not.a.token").is_err());
    }
}

//! Bearer-token authentication.
//!
//! Tokens are HS256 JWTs issued by the identity service; this API only
//! verifies them. Handlers take [`AuthUser`] as an extractor argument.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    pub exp: usize,
}

/// Verifies bearer tokens against the shared secret.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                warn!("Token verification failed: {e}");
                AppError::Unauthorized
            })
    }
}

/// The authenticated caller.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let header = match parts.headers.get(AUTHORIZATION) {
            Some(value) => value.to_str().map_err(|_| {
                warn!("Authorization header is not valid ASCII");
                AppError::Unauthorized
            })?,
            None => {
                warn!("Missing Authorization header");
                return Err(AppError::Unauthorized);
            }
        };

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Invalid Authorization header format");
            AppError::Unauthorized
        })?;

        let claims = state.tokens.verify(token)?;
        debug!("Authenticated user {} ({})", claims.sub, claims.email);

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}

#[cfg(test)]
pub fn sign_test_token(secret: &str, user_id: Uuid, exp: usize) -> String {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let claims = Claims {
        sub: user_id,
        email: "jordan@example.com".to_string(),
        role: Some("job_seeker".to_string()),
        exp,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

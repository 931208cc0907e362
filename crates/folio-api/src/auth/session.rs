use std::sync::Arc;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::HttpAppError;
use crate::state::AppState;
use folio_core::AppError;

/// JWT claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: i64,
}

/// The authenticated user performing a request. Extracted once per request;
/// submission code receives it by value instead of reading shared session
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub id: Uuid,
    pub email: Option<String>,
}

/// Verify a bearer token and return the owner identity.
pub fn verify_token(token: &str, secret: &str) -> Result<Owner, AppError> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| AppError::Unauthorized(format!("Invalid session token: {}", e)))?;

    Ok(Owner {
        id: data.claims.sub,
        email: data.claims.email,
    })
}

/// Mint a session token. Used by tests and operational tooling; production
/// tokens come from the identity provider.
pub fn issue_token(
    owner_id: Uuid,
    email: Option<String>,
    secret: &str,
    expires_in: Duration,
) -> Result<String, AppError> {
    let claims = Claims {
        sub: owner_id,
        email,
        exp: (Utc::now() + expires_in).timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
}

impl FromRequestParts<Arc<AppState>> for Owner {
    type Rejection = HttpAppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                HttpAppError(AppError::Unauthorized(
                    "Missing authorization header".to_string(),
                ))
            })?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            HttpAppError(AppError::Unauthorized(
                "Invalid authorization header format".to_string(),
            ))
        })?;

        verify_token(token, state.config.jwt_secret()).map_err(HttpAppError)
    }
}

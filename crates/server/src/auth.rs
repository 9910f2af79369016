//! Password login issuing short-lived HS256 tokens, plus the request
//! extractors enforcing the access policy: `AuthedUser` accepts any valid
//! token, `AdminUser` additionally requires the admin role claim.

use std::env;
use std::time::SystemTime;

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use log::warn;
use models::access::{ReviewPolicy, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_TOKEN_TTL_SECONDS: u64 = 6 * 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iat: usize,
    pub exp: usize,
}

pub struct AuthConfig {
    admin_password: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_seconds: u64,
    pub review_policy: ReviewPolicy,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
            warn!("ADMIN_PASSWORD is not set; using the development default");
            DEFAULT_ADMIN_PASSWORD.to_string()
        });

        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET is not set; using an ephemeral secret (tokens reset on restart)");
            format!("{}{}", Uuid::new_v4(), Uuid::new_v4())
        });

        let token_ttl_seconds = env::var("TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_SECONDS);

        let review_policy = env::var("REVIEW_POLICY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self::new(admin_password, &secret, token_ttl_seconds, review_policy)
    }

    pub fn new(
        admin_password: String,
        secret: &str,
        token_ttl_seconds: u64,
        review_policy: ReviewPolicy,
    ) -> Self {
        Self {
            admin_password,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl_seconds,
            review_policy,
        }
    }

    pub fn verify_password(&self, provided: &str) -> bool {
        constant_time_eq(self.admin_password.as_bytes(), provided.as_bytes())
    }

    pub fn issue_admin_token(&self) -> Result<String, ApiError> {
        let now = now_epoch_seconds();
        let claims = Claims {
            sub: "admin".to_string(),
            role: Role::Admin,
            iat: now,
            exp: now.saturating_add(self.token_ttl_seconds as usize),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|err| {
            warn!("failed to sign token: {err}");
            ApiError::Internal
        })
    }

    pub fn decode_token(&self, token: &str) -> Result<Claims, ApiError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|err| ApiError::unauthorized(format!("invalid token: {err}")))
    }

    pub fn claims_from_headers(&self, headers: &HeaderMap) -> Result<Claims, ApiError> {
        let authorization = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("missing bearer token"))?;

        let token = authorization
            .strip_prefix("Bearer ")
            .or_else(|| authorization.strip_prefix("bearer "))
            .ok_or_else(|| ApiError::unauthorized("missing bearer token"))?;

        self.decode_token(token)
    }

    /// Gate for review submission per the configured policy
    pub fn authorize_review_submission(&self, headers: &HeaderMap) -> Result<(), ApiError> {
        match self.review_policy {
            ReviewPolicy::Public => Ok(()),
            ReviewPolicy::Authenticated => self.claims_from_headers(headers).map(|_| ()),
        }
    }
}

/// Any request carrying a valid token
pub struct AuthedUser(pub Claims);

impl FromRequestParts<AppState> for AuthedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = state.auth.claims_from_headers(&parts.headers)?;
        Ok(Self(claims))
    }
}

/// A request whose token carries the admin role
pub struct AdminUser(pub Claims);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = state.auth.claims_from_headers(&parts.headers)?;
        if !claims.role.is_admin() {
            return Err(ApiError::forbidden("admin role required"));
        }
        Ok(Self(claims))
    }
}

fn now_epoch_seconds() -> usize {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as usize
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for i in 0..a.len() {
        diff |= a[i] ^ b[i];
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig::new(
            "hunter2".to_string(),
            "test-secret-key",
            3600,
            ReviewPolicy::Public,
        )
    }

    #[test]
    fn test_password_verification_is_exact() {
        let config = test_config();
        assert!(config.verify_password("hunter2"));
        assert!(!config.verify_password("hunter"));
        assert!(!config.verify_password("hunter22"));
        assert!(!config.verify_password(""));
    }

    #[test]
    fn test_issued_tokens_round_trip() {
        let config = test_config();
        let token = config.issue_admin_token().unwrap();

        let claims = config.decode_token(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, Role::Admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tokens_from_another_secret_are_rejected() {
        let config = test_config();
        let other = AuthConfig::new(
            "hunter2".to_string(),
            "different-secret",
            3600,
            ReviewPolicy::Public,
        );

        let token = other.issue_admin_token().unwrap();
        assert!(config.decode_token(&token).is_err());
    }

    #[test]
    fn test_bearer_header_extraction() {
        let config = test_config();
        let token = config.issue_admin_token().unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        assert!(config.claims_from_headers(&headers).is_ok());

        let mut bad = HeaderMap::new();
        bad.insert(header::AUTHORIZATION, "Basic abc".parse().unwrap());
        assert!(config.claims_from_headers(&bad).is_err());

        assert!(config.claims_from_headers(&HeaderMap::new()).is_err());
    }

    #[test]
    fn test_review_policy_gates_submission() {
        let public = test_config();
        assert!(public
            .authorize_review_submission(&HeaderMap::new())
            .is_ok());

        let gated = AuthConfig::new(
            "hunter2".to_string(),
            "test-secret-key",
            3600,
            ReviewPolicy::Authenticated,
        );
        assert!(gated
            .authorize_review_submission(&HeaderMap::new())
            .is_err());

        let token = gated.issue_admin_token().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        assert!(gated.authorize_review_submission(&headers).is_ok());
    }
}

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::auth::AuthedUser;
use crate::dtos::auth::{ClaimsResponse, LoginRequest, LoginResponse, PingResponse, WhoAmIResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Exchange the admin password for a bearer token
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 401, description = "Wrong password")
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if body.password.trim().is_empty() || !state.auth.verify_password(&body.password) {
        return Err(ApiError::unauthorized("wrong password"));
    }

    let token = state.auth.issue_admin_token()?;
    Ok(Json(LoginResponse { token }))
}

/// Describe the identity behind the presented token
#[utoipa::path(
    get,
    path = "/auth/whoami",
    responses(
        (status = 200, description = "Token is valid", body = WhoAmIResponse),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("jwt" = [])),
    tag = "Authentication"
)]
pub async fn whoami(AuthedUser(claims): AuthedUser) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        name: claims.sub.clone(),
        role: claims.role.to_string(),
        claims: ClaimsResponse {
            sub: claims.sub,
            role: claims.role.to_string(),
            iat: claims.iat as u64,
            exp: claims.exp as u64,
        },
    })
}

/// Liveness check that needs no credentials
#[utoipa::path(
    get,
    path = "/auth/ping",
    responses(
        (status = 200, description = "Service is up", body = PingResponse)
    ),
    tag = "Authentication"
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        ok: true,
        time: Utc::now(),
    })
}

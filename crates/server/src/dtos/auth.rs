use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClaimsResponse {
    pub sub: String,
    pub role: String,
    pub iat: u64,
    pub exp: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WhoAmIResponse {
    pub name: String,
    pub role: String,
    pub claims: ClaimsResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PingResponse {
    pub ok: bool,
    pub time: DateTime<Utc>,
}

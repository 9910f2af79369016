use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Value/label pair for UI select inputs
#[derive(Debug, Serialize, ToSchema)]
pub struct OptionResponse {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProgramOptionsParams {
    /// Restrict to programs of one faculty, by faculty code
    pub faculty_code: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFacultyRequest {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFacultyRequest {
    pub code: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgramRequest {
    pub faculty_id: Uuid,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgramRequest {
    pub faculty_id: Option<Uuid>,
    pub code: Option<String>,
    pub name: Option<String>,
}

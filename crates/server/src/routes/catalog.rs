use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use database::services::catalog::{CatalogService, UpdateFaculty, UpdateProgram};
use sea_orm::prelude::Uuid;

use crate::auth::AdminUser;
use crate::dtos::CreatedResponse;
use crate::dtos::catalog::{
    CreateFacultyRequest, CreateProgramRequest, OptionResponse, ProgramOptionsParams,
    UpdateFacultyRequest, UpdateProgramRequest,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Get faculties as value/label options, ordered by name
#[utoipa::path(
    get,
    path = "/faculties/options",
    responses(
        (status = 200, description = "Faculty options retrieved successfully", body = [OptionResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Catalog"
)]
pub async fn get_faculty_options(
    State(state): State<AppState>,
) -> Result<Json<Vec<OptionResponse>>, ApiError> {
    let faculties = CatalogService::faculty_options(&state.db).await?;

    Ok(Json(
        faculties
            .into_iter()
            .map(|f| OptionResponse {
                value: f.code,
                label: f.name,
            })
            .collect(),
    ))
}

/// Get study programs as value/label options, optionally filtered by faculty code
#[utoipa::path(
    get,
    path = "/programs/options",
    params(ProgramOptionsParams),
    responses(
        (status = 200, description = "Program options retrieved successfully", body = [OptionResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Catalog"
)]
pub async fn get_program_options(
    State(state): State<AppState>,
    Query(params): Query<ProgramOptionsParams>,
) -> Result<Json<Vec<OptionResponse>>, ApiError> {
    let programs = CatalogService::program_options(&state.db, params.faculty_code).await?;

    Ok(Json(
        programs
            .into_iter()
            .map(|(program, faculty)| OptionResponse {
                value: program.id.to_string(),
                label: format!("{}/{} — {}", faculty.code, program.code, program.name),
            })
            .collect(),
    ))
}

/// Create a faculty (admin only)
#[utoipa::path(
    post,
    path = "/faculties",
    request_body = CreateFacultyRequest,
    responses(
        (status = 201, description = "Faculty created", body = CreatedResponse),
        (status = 400, description = "Invalid input or duplicate code"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Catalog"
)]
pub async fn create_faculty(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(body): Json<CreateFacultyRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = CatalogService::create_faculty(&state.db, body.code, body.name).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Update a faculty, applying only the supplied fields (admin only)
#[utoipa::path(
    put,
    path = "/faculties/{id}",
    params(
        ("id" = Uuid, Path, description = "Faculty ID")
    ),
    request_body = UpdateFacultyRequest,
    responses(
        (status = 204, description = "Faculty updated"),
        (status = 404, description = "Faculty not found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Catalog"
)]
pub async fn update_faculty(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateFacultyRequest>,
) -> Result<StatusCode, ApiError> {
    CatalogService::update_faculty(
        &state.db,
        id,
        UpdateFaculty {
            code: body.code,
            name: body.name,
        },
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a faculty and its programs (admin only)
#[utoipa::path(
    delete,
    path = "/faculties/{id}",
    params(
        ("id" = Uuid, Path, description = "Faculty ID")
    ),
    responses(
        (status = 204, description = "Faculty deleted"),
        (status = 404, description = "Faculty not found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Catalog"
)]
pub async fn delete_faculty(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    CatalogService::delete_faculty(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a study program under a faculty (admin only)
#[utoipa::path(
    post,
    path = "/programs",
    request_body = CreateProgramRequest,
    responses(
        (status = 201, description = "Program created", body = CreatedResponse),
        (status = 400, description = "Invalid input or duplicate code"),
        (status = 404, description = "Faculty not found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Catalog"
)]
pub async fn create_program(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(body): Json<CreateProgramRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id =
        CatalogService::create_program(&state.db, body.faculty_id, body.code, body.name).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Update a study program, applying only the supplied fields (admin only)
#[utoipa::path(
    put,
    path = "/programs/{id}",
    params(
        ("id" = Uuid, Path, description = "Program ID")
    ),
    request_body = UpdateProgramRequest,
    responses(
        (status = 204, description = "Program updated"),
        (status = 404, description = "Program not found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Catalog"
)]
pub async fn update_program(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProgramRequest>,
) -> Result<StatusCode, ApiError> {
    CatalogService::update_program(
        &state.db,
        id,
        UpdateProgram {
            faculty_id: body.faculty_id,
            code: body.code,
            name: body.name,
        },
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a study program, detaching its courses (admin only)
#[utoipa::path(
    delete,
    path = "/programs/{id}",
    params(
        ("id" = Uuid, Path, description = "Program ID")
    ),
    responses(
        (status = 204, description = "Program deleted"),
        (status = 404, description = "Program not found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Catalog"
)]
pub async fn delete_program(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    CatalogService::delete_program(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

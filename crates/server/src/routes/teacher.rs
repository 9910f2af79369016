use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use database::services::review::{NewTeacherReview, ReviewService};
use database::services::teacher::{CreateTeacher, TeacherService, UpdateTeacher};
use sea_orm::prelude::Uuid;

use crate::auth::AdminUser;
use crate::dtos::CreatedResponse;
use crate::dtos::review::{
    CreateTeacherReviewRequest, CreatedReviewResponse, TeacherReviewResponse, teacher_averages,
};
use crate::dtos::teacher::{
    CreateTeacherRequest, TeacherDetailResponse, TeacherResponse, UpdateTeacherRequest,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Get all teachers in insertion order
#[utoipa::path(
    get,
    path = "/teachers",
    responses(
        (status = 200, description = "List of teachers retrieved successfully", body = [TeacherResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn get_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeacherResponse>>, ApiError> {
    let items = TeacherService::list_teachers(&state.db).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Get a teacher with taught courses, reviews and rating averages
#[utoipa::path(
    get,
    path = "/teachers/{id}",
    params(
        ("id" = Uuid, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher found", body = TeacherDetailResponse),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn get_teacher_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeacherDetailResponse>, ApiError> {
    let (teacher, courses, reviews) = TeacherService::get_teacher_detail(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("teacher"))?;

    let averages = teacher_averages(&reviews);

    Ok(Json(TeacherDetailResponse {
        teacher: teacher.into(),
        courses: courses.into_iter().map(Into::into).collect(),
        reviews: reviews.into_iter().map(Into::into).collect(),
        averages,
    }))
}

/// Create a teacher (admin only)
#[utoipa::path(
    post,
    path = "/teachers",
    request_body = CreateTeacherRequest,
    responses(
        (status = 201, description = "Teacher created", body = CreatedResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Teachers"
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(body): Json<CreateTeacherRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = TeacherService::create_teacher(
        &state.db,
        CreateTeacher {
            full_name: body.full_name,
            display_name: body.display_name,
            bio: body.bio,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Update a teacher, applying only the supplied fields (admin only)
#[utoipa::path(
    put,
    path = "/teachers/{id}",
    params(
        ("id" = Uuid, Path, description = "Teacher ID")
    ),
    request_body = UpdateTeacherRequest,
    responses(
        (status = 204, description = "Teacher updated"),
        (status = 404, description = "Teacher not found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Teachers"
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTeacherRequest>,
) -> Result<StatusCode, ApiError> {
    TeacherService::update_teacher(
        &state.db,
        id,
        UpdateTeacher {
            full_name: body.full_name,
            display_name: body.display_name,
            bio: body.bio,
        },
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a teacher and their reviews (admin only)
#[utoipa::path(
    delete,
    path = "/teachers/{id}",
    params(
        ("id" = Uuid, Path, description = "Teacher ID")
    ),
    responses(
        (status = 204, description = "Teacher deleted"),
        (status = 404, description = "Teacher not found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Teachers"
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    TeacherService::delete_teacher(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get reviews of a teacher, newest first
#[utoipa::path(
    get,
    path = "/teachers/{id}/reviews",
    params(
        ("id" = Uuid, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Reviews retrieved successfully", body = [TeacherReviewResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teachers"
)]
pub async fn get_reviews_for_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<TeacherReviewResponse>>, ApiError> {
    let items = ReviewService::teacher_reviews_for(&state.db, id).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Submit a review for a teacher
#[utoipa::path(
    post,
    path = "/teachers/{id}/reviews",
    params(
        ("id" = Uuid, Path, description = "Teacher ID")
    ),
    request_body = CreateTeacherReviewRequest,
    responses(
        (status = 201, description = "Review created", body = CreatedReviewResponse),
        (status = 400, description = "Invalid ratings or teacherId mismatch"),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers"
)]
pub async fn create_review_for_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<CreateTeacherReviewRequest>,
) -> Result<(StatusCode, Json<CreatedReviewResponse>), ApiError> {
    state.auth.authorize_review_submission(&headers)?;

    // Guard against a body that disagrees with the path
    if body.teacher_id != id {
        return Err(ApiError::validation("teacherId mismatch"));
    }

    let review_id = ReviewService::create_teacher_review(
        &state.db,
        NewTeacherReview {
            teacher_id: id,
            scores: body.scores(),
            comment: body.comment,
            author: body.author,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedReviewResponse { id: review_id }),
    ))
}

/// Delete a review of a teacher (admin only)
#[utoipa::path(
    delete,
    path = "/teachers/{id}/reviews/{review_id}",
    params(
        ("id" = Uuid, Path, description = "Teacher ID"),
        ("review_id" = i64, Path, description = "Review ID")
    ),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "Review not found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Teachers"
)]
pub async fn delete_review_for_teacher(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path((id, review_id)): Path<(Uuid, i64)>,
) -> Result<StatusCode, ApiError> {
    ReviewService::delete_teacher_review_for(&state.db, id, review_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

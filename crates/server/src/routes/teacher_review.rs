use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use database::services::review::{NewTeacherReview, ReviewService};

use crate::auth::AdminUser;
use crate::dtos::review::{
    CreateTeacherReviewRequest, CreatedReviewResponse, PaginatedTeacherReviewsResponse,
    TeacherReviewQueryParams, TeacherReviewResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Get paginated teacher reviews, newest first, optionally filtered by teacher
#[utoipa::path(
    get,
    path = "/teacher-reviews",
    params(TeacherReviewQueryParams),
    responses(
        (status = 200, description = "Reviews retrieved successfully", body = PaginatedTeacherReviewsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Teacher reviews"
)]
pub async fn get_teacher_reviews(
    State(state): State<AppState>,
    Query(params): Query<TeacherReviewQueryParams>,
) -> Result<Json<PaginatedTeacherReviewsResponse>, ApiError> {
    let (items, total) = ReviewService::list_teacher_reviews(
        &state.db,
        params.teacher_id,
        params.page,
        params.page_size,
    )
    .await?;

    Ok(Json(PaginatedTeacherReviewsResponse {
        total,
        items: items.into_iter().map(Into::into).collect(),
    }))
}

/// Get a single teacher review
#[utoipa::path(
    get,
    path = "/teacher-reviews/{id}",
    params(
        ("id" = i64, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review found", body = TeacherReviewResponse),
        (status = 404, description = "Review not found")
    ),
    tag = "Teacher reviews"
)]
pub async fn get_teacher_review_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TeacherReviewResponse>, ApiError> {
    let review = ReviewService::get_teacher_review(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("teacher review"))?;

    Ok(Json(review.into()))
}

/// Submit a teacher review
#[utoipa::path(
    post,
    path = "/teacher-reviews",
    request_body = CreateTeacherReviewRequest,
    responses(
        (status = 201, description = "Review created", body = CreatedReviewResponse),
        (status = 400, description = "Invalid ratings"),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teacher reviews"
)]
pub async fn create_teacher_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateTeacherReviewRequest>,
) -> Result<(StatusCode, Json<CreatedReviewResponse>), ApiError> {
    state.auth.authorize_review_submission(&headers)?;

    let review_id = ReviewService::create_teacher_review(
        &state.db,
        NewTeacherReview {
            teacher_id: body.teacher_id,
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

/// Delete a teacher review (admin only)
#[utoipa::path(
    delete,
    path = "/teacher-reviews/{id}",
    params(
        ("id" = i64, Path, description = "Review ID")
    ),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "Review not found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Teacher reviews"
)]
pub async fn delete_teacher_review(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    ReviewService::delete_teacher_review(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

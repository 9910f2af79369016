use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use database::services::review::{NewCourseReview, ReviewService};

use crate::auth::AdminUser;
use crate::dtos::review::{
    CourseReviewQueryParams, CourseReviewResponse, CreateCourseReviewRequest,
    CreatedReviewResponse, PaginatedCourseReviewsResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Get paginated course reviews, newest first, optionally filtered by course
#[utoipa::path(
    get,
    path = "/course-reviews",
    params(CourseReviewQueryParams),
    responses(
        (status = 200, description = "Reviews retrieved successfully", body = PaginatedCourseReviewsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Course reviews"
)]
pub async fn get_course_reviews(
    State(state): State<AppState>,
    Query(params): Query<CourseReviewQueryParams>,
) -> Result<Json<PaginatedCourseReviewsResponse>, ApiError> {
    let (items, total) = ReviewService::list_course_reviews(
        &state.db,
        params.course_id,
        params.page,
        params.page_size,
    )
    .await?;

    Ok(Json(PaginatedCourseReviewsResponse {
        total,
        items: items.into_iter().map(Into::into).collect(),
    }))
}

/// Get a single course review
#[utoipa::path(
    get,
    path = "/course-reviews/{id}",
    params(
        ("id" = i64, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review found", body = CourseReviewResponse),
        (status = 404, description = "Review not found")
    ),
    tag = "Course reviews"
)]
pub async fn get_course_review_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CourseReviewResponse>, ApiError> {
    let review = ReviewService::get_course_review(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("course review"))?;

    Ok(Json(review.into()))
}

/// Submit a course review
#[utoipa::path(
    post,
    path = "/course-reviews",
    request_body = CreateCourseReviewRequest,
    responses(
        (status = 201, description = "Review created", body = CreatedReviewResponse),
        (status = 400, description = "Invalid ratings"),
        (status = 404, description = "Course not found")
    ),
    tag = "Course reviews"
)]
pub async fn create_course_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateCourseReviewRequest>,
) -> Result<(StatusCode, Json<CreatedReviewResponse>), ApiError> {
    state.auth.authorize_review_submission(&headers)?;

    let review_id = ReviewService::create_course_review(
        &state.db,
        NewCourseReview {
            course_id: body.course_id,
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

/// Delete a course review (admin only)
#[utoipa::path(
    delete,
    path = "/course-reviews/{id}",
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
    tag = "Course reviews"
)]
pub async fn delete_course_review(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    ReviewService::delete_course_review(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use database::services::course::{CourseService, CreateCourse, UpdateCourse};
use database::services::link::LinkService;
use database::services::review::{NewCourseReview, ReviewService};
use sea_orm::prelude::Uuid;

use crate::auth::AdminUser;
use crate::dtos::CreatedResponse;
use crate::dtos::course::{
    CourseDetailResponse, CourseQueryParams, CreateCourseRequest, LinkTeacherRequest,
    PaginatedCoursesResponse, UpdateCourseRequest,
};
use crate::dtos::review::{
    CourseReviewResponse, CreateCourseReviewRequest, CreatedReviewResponse, course_averages,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Get paginated list of courses
#[utoipa::path(
    get,
    path = "/courses",
    params(CourseQueryParams),
    responses(
        (status = 200, description = "List of courses retrieved successfully", body = PaginatedCoursesResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseQueryParams>,
) -> Result<Json<PaginatedCoursesResponse>, ApiError> {
    let (items, total) =
        CourseService::list_courses(&state.db, params.q, params.page, params.page_size).await?;

    Ok(Json(PaginatedCoursesResponse {
        total,
        items: items.into_iter().map(Into::into).collect(),
    }))
}

/// Get a course with its teachers, reviews and rating averages
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseDetailResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseDetailResponse>, ApiError> {
    let (course, teachers, reviews) = CourseService::get_course_detail(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("course"))?;

    let averages = course_averages(&reviews);

    Ok(Json(CourseDetailResponse {
        course: course.into(),
        teachers: teachers.into_iter().map(Into::into).collect(),
        reviews: reviews.into_iter().map(Into::into).collect(),
        averages,
    }))
}

/// Create a course (admin only)
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CreatedResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(body): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = CourseService::create_course(
        &state.db,
        CreateCourse {
            name: body.name,
            description: body.description,
            year: body.year,
            semester: body.semester,
            program_id: body.program_id,
            code: body.code,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Update a course, applying only the supplied fields (admin only)
#[utoipa::path(
    put,
    path = "/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    request_body = UpdateCourseRequest,
    responses(
        (status = 204, description = "Course updated"),
        (status = 404, description = "Course not found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCourseRequest>,
) -> Result<StatusCode, ApiError> {
    CourseService::update_course(
        &state.db,
        id,
        UpdateCourse {
            name: body.name,
            description: body.description,
            year: body.year,
            semester: body.semester,
            program_id: body.program_id,
            code: body.code,
        },
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a course and its reviews (admin only)
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    CourseService::delete_course(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Link a teacher to a course; linking an already linked pair is a no-op (admin only)
#[utoipa::path(
    post,
    path = "/courses/{id}/teachers",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    request_body = LinkTeacherRequest,
    responses(
        (status = 204, description = "Teacher linked"),
        (status = 404, description = "Course or teacher not found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn link_teacher(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(body): Json<LinkTeacherRequest>,
) -> Result<StatusCode, ApiError> {
    LinkService::link_teacher_to_course(&state.db, id, body.teacher_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Unlink a teacher from a course (admin only)
#[utoipa::path(
    delete,
    path = "/courses/{id}/teachers/{teacher_id}",
    params(
        ("id" = Uuid, Path, description = "Course ID"),
        ("teacher_id" = Uuid, Path, description = "Teacher ID")
    ),
    responses(
        (status = 204, description = "Teacher unlinked"),
        (status = 404, description = "Association not found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn unlink_teacher(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path((id, teacher_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    LinkService::unlink_teacher_from_course(&state.db, id, teacher_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get reviews of a course, newest first
#[utoipa::path(
    get,
    path = "/courses/{id}/reviews",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Reviews retrieved successfully", body = [CourseReviewResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_reviews_for_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<CourseReviewResponse>>, ApiError> {
    let items = ReviewService::course_reviews_for(&state.db, id).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Submit a review for a course
#[utoipa::path(
    post,
    path = "/courses/{id}/reviews",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    request_body = CreateCourseReviewRequest,
    responses(
        (status = 201, description = "Review created", body = CreatedReviewResponse),
        (status = 400, description = "Invalid ratings or courseId mismatch"),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses"
)]
pub async fn create_review_for_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<CreateCourseReviewRequest>,
) -> Result<(StatusCode, Json<CreatedReviewResponse>), ApiError> {
    state.auth.authorize_review_submission(&headers)?;

    // Guard against a body that disagrees with the path
    if body.course_id != id {
        return Err(ApiError::validation("courseId mismatch"));
    }

    let review_id = ReviewService::create_course_review(
        &state.db,
        NewCourseReview {
            course_id: id,
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

/// Delete a review of a course (admin only)
#[utoipa::path(
    delete,
    path = "/courses/{id}/reviews/{review_id}",
    params(
        ("id" = Uuid, Path, description = "Course ID"),
        ("review_id" = i64, Path, description = "Review ID")
    ),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "Review not found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn delete_review_for_course(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path((id, review_id)): Path<(Uuid, i64)>,
) -> Result<StatusCode, ApiError> {
    ReviewService::delete_course_review_for(&state.db, id, review_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

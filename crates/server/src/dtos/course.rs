use database::entities::courses;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::dtos::review::{CourseAveragesResponse, CourseReviewResponse};
use crate::dtos::teacher::TeacherSummaryResponse;
use crate::dtos::{default_page, default_page_size};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub year: i32,
    pub semester: i32,
    pub code: Option<String>,
    pub program_id: Option<Uuid>,
}

impl From<courses::Model> for CourseResponse {
    fn from(course: courses::Model) -> Self {
        Self {
            id: course.id,
            name: course.name,
            description: course.description,
            year: course.year,
            semester: course.semester,
            code: course.code,
            program_id: course.program_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedCoursesResponse {
    pub total: u64,
    pub items: Vec<CourseResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseDetailResponse {
    pub course: CourseResponse,
    pub teachers: Vec<TeacherSummaryResponse>,
    pub reviews: Vec<CourseReviewResponse>,
    pub averages: Option<CourseAveragesResponse>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CourseQueryParams {
    /// Case-insensitive substring filter on the course name
    pub q: Option<String>,

    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub name: String,
    pub description: Option<String>,
    pub year: i32,
    pub semester: i32,
    pub program_id: Option<Uuid>,
    pub code: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub semester: Option<i32>,
    pub program_id: Option<Uuid>,
    pub code: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkTeacherRequest {
    pub teacher_id: Uuid,
}

use database::entities::teachers;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dtos::course::CourseResponse;
use crate::dtos::review::{TeacherAveragesResponse, TeacherReviewResponse};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherResponse {
    pub id: Uuid,
    pub full_name: String,
    pub display_name: String,
    pub bio: Option<String>,
}

impl From<teachers::Model> for TeacherResponse {
    fn from(teacher: teachers::Model) -> Self {
        Self {
            id: teacher.id,
            full_name: teacher.full_name,
            display_name: teacher.display_name,
            bio: teacher.bio,
        }
    }
}

/// Compact teacher projection embedded in course details
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSummaryResponse {
    pub id: Uuid,
    pub full_name: String,
    pub display_name: String,
}

impl From<teachers::Model> for TeacherSummaryResponse {
    fn from(teacher: teachers::Model) -> Self {
        Self {
            id: teacher.id,
            full_name: teacher.full_name,
            display_name: teacher.display_name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherDetailResponse {
    pub teacher: TeacherResponse,
    pub courses: Vec<CourseResponse>,
    pub reviews: Vec<TeacherReviewResponse>,
    pub averages: Option<TeacherAveragesResponse>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeacherRequest {
    pub full_name: String,
    pub display_name: String,
    pub bio: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeacherRequest {
    pub full_name: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
}

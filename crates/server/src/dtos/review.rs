use chrono::NaiveDateTime;
use database::entities::{course_reviews, teacher_reviews};
use models::averages::{CourseAverages, TeacherAverages};
use models::rating::{CourseScores, TeacherScores};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::dtos::{default_page, default_page_size};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseReviewResponse {
    pub id: i64,
    pub course_id: Uuid,
    pub overall: i32,
    pub leniency: i32,
    pub usefulness: i32,
    pub interest: i32,
    pub comment: Option<String>,
    pub author: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<course_reviews::Model> for CourseReviewResponse {
    fn from(review: course_reviews::Model) -> Self {
        Self {
            id: review.id,
            course_id: review.course_id,
            overall: review.overall,
            leniency: review.leniency,
            usefulness: review.usefulness,
            interest: review.interest,
            comment: review.comment,
            author: review.author,
            created_at: review.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherReviewResponse {
    pub id: i64,
    pub teacher_id: Uuid,
    pub overall: i32,
    pub leniency: i32,
    pub knowledge: i32,
    pub communication: i32,
    pub comment: Option<String>,
    pub author: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<teacher_reviews::Model> for TeacherReviewResponse {
    fn from(review: teacher_reviews::Model) -> Self {
        Self {
            id: review.id,
            teacher_id: review.teacher_id,
            overall: review.overall,
            leniency: review.leniency,
            knowledge: review.knowledge,
            communication: review.communication,
            comment: review.comment,
            author: review.author,
            created_at: review.created_at,
        }
    }
}

/// Recomputed from the review list on every request, never stored
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseAveragesResponse {
    pub overall: f64,
    pub leniency: f64,
    pub usefulness: f64,
    pub interest: f64,
    pub count: u64,
}

impl From<CourseAverages> for CourseAveragesResponse {
    fn from(avg: CourseAverages) -> Self {
        Self {
            overall: avg.overall,
            leniency: avg.leniency,
            usefulness: avg.usefulness,
            interest: avg.interest,
            count: avg.count,
        }
    }
}

/// Recomputed from the review list on every request, never stored
#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherAveragesResponse {
    pub overall: f64,
    pub leniency: f64,
    pub knowledge: f64,
    pub communication: f64,
    pub count: u64,
}

impl From<TeacherAverages> for TeacherAveragesResponse {
    fn from(avg: TeacherAverages) -> Self {
        Self {
            overall: avg.overall,
            leniency: avg.leniency,
            knowledge: avg.knowledge,
            communication: avg.communication,
            count: avg.count,
        }
    }
}

/// Course review averages from raw review rows
pub fn course_averages(reviews: &[course_reviews::Model]) -> Option<CourseAveragesResponse> {
    let scores: Vec<CourseScores> = reviews
        .iter()
        .map(|r| CourseScores {
            overall: r.overall,
            leniency: r.leniency,
            usefulness: r.usefulness,
            interest: r.interest,
        })
        .collect();
    CourseAverages::from_scores(&scores).map(Into::into)
}

/// Teacher review averages from raw review rows
pub fn teacher_averages(reviews: &[teacher_reviews::Model]) -> Option<TeacherAveragesResponse> {
    let scores: Vec<TeacherScores> = reviews
        .iter()
        .map(|r| TeacherScores {
            overall: r.overall,
            leniency: r.leniency,
            knowledge: r.knowledge,
            communication: r.communication,
        })
        .collect();
    TeacherAverages::from_scores(&scores).map(Into::into)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedCourseReviewsResponse {
    pub total: u64,
    pub items: Vec<CourseReviewResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedTeacherReviewsResponse {
    pub total: u64,
    pub items: Vec<TeacherReviewResponse>,
}

/// Body of a 201 response for a stored review
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedReviewResponse {
    pub id: i64,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CourseReviewQueryParams {
    pub course_id: Option<Uuid>,

    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct TeacherReviewQueryParams {
    pub teacher_id: Option<Uuid>,

    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseReviewRequest {
    pub course_id: Uuid,
    pub overall: i32,
    pub leniency: i32,
    pub usefulness: i32,
    pub interest: i32,
    pub comment: Option<String>,
    pub author: Option<String>,
}

impl CreateCourseReviewRequest {
    pub fn scores(&self) -> CourseScores {
        CourseScores {
            overall: self.overall,
            leniency: self.leniency,
            usefulness: self.usefulness,
            interest: self.interest,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeacherReviewRequest {
    pub teacher_id: Uuid,
    pub overall: i32,
    pub leniency: i32,
    pub knowledge: i32,
    pub communication: i32,
    pub comment: Option<String>,
    pub author: Option<String>,
}

impl CreateTeacherReviewRequest {
    pub fn scores(&self) -> TeacherScores {
        TeacherScores {
            overall: self.overall,
            leniency: self.leniency,
            knowledge: self.knowledge,
            communication: self.communication,
        }
    }
}

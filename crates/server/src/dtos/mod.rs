pub mod auth;
pub mod catalog;
pub mod course;
pub mod review;
pub mod teacher;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Body of a 201 response for catalog entities
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: Uuid,
}

pub(crate) fn default_page() -> u64 {
    1
}

pub(crate) fn default_page_size() -> u64 {
    models::pagination::DEFAULT_PAGE_SIZE
}

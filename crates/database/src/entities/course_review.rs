use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A student rating of a course. Keyed by a monotonic integer so "newest
/// first" listings can order by identifier instead of wall-clock time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: Uuid,
    pub overall: i32,
    pub leniency: i32,
    pub usefulness: i32,
    pub interest: i32,
    pub comment: Option<String>,
    pub author: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

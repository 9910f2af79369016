use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub program_id: Option<Uuid>,
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub year: i32,
    pub semester: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::study_program::Entity",
        from = "Column::ProgramId",
        to = "super::study_program::Column::Id"
    )]
    StudyProgram,
    #[sea_orm(has_many = "super::course_review::Entity")]
    CourseReviews,
    #[sea_orm(has_many = "super::course_teacher::Entity")]
    CourseTeachers,
}

impl Related<super::study_program::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyProgram.def()
    }
}

impl Related<super::course_review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseReviews.def()
    }
}

impl Related<super::course_teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseTeachers.def()
    }
}

// Many-to-many relationship with teachers
impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_teacher::Relation::Teacher.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_teacher::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

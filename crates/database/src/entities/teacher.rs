use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub full_name: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::teacher_review::Entity")]
    TeacherReviews,
    #[sea_orm(has_many = "super::course_teacher::Entity")]
    CourseTeachers,
}

impl Related<super::teacher_review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherReviews.def()
    }
}

impl Related<super::course_teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseTeachers.def()
    }
}

// Many-to-many relationship with courses
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_teacher::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_teacher::Relation::Teacher.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

use crate::entities::{course_teachers, courses, teachers};
use crate::error::ServiceError;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    SqlErr,
};
use uuid::Uuid;

pub struct LinkService;

impl LinkService {
    /// Associates a teacher with a course. Idempotent: linking an already
    /// linked pair succeeds without inserting a second row.
    pub async fn link_teacher_to_course(
        db: &DatabaseConnection,
        course_id: Uuid,
        teacher_id: Uuid,
    ) -> Result<(), ServiceError> {
        let course_exists = courses::Entity::find_by_id(course_id).count(db).await? > 0;
        let teacher_exists = teachers::Entity::find_by_id(teacher_id).count(db).await? > 0;
        if !course_exists || !teacher_exists {
            return Err(ServiceError::NotFound("course or teacher"));
        }

        let already_linked = course_teachers::Entity::find()
            .filter(course_teachers::Column::CourseId.eq(course_id))
            .filter(course_teachers::Column::TeacherId.eq(teacher_id))
            .count(db)
            .await?
            > 0;
        if already_linked {
            return Ok(());
        }

        let link = course_teachers::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            teacher_id: Set(teacher_id),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        // Two concurrent calls can both pass the existence check. The unique
        // pair index catches the loser, and a duplicate insert still counts
        // as a successful link.
        match course_teachers::Entity::insert(link).exec(db).await {
            Ok(_) => Ok(()),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn unlink_teacher_from_course(
        db: &DatabaseConnection,
        course_id: Uuid,
        teacher_id: Uuid,
    ) -> Result<(), ServiceError> {
        let result = course_teachers::Entity::delete_many()
            .filter(course_teachers::Column::CourseId.eq(course_id))
            .filter(course_teachers::Column::TeacherId.eq(teacher_id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("course teacher link"));
        }
        Ok(())
    }
}

use crate::entities::{course_teachers, courses, teacher_reviews, teachers};
use crate::error::ServiceError;
use crate::services::normalize_text;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use uuid::Uuid;

pub struct CreateTeacher {
    pub full_name: String,
    pub display_name: String,
    pub bio: Option<String>,
}

/// Partial update: `None` fields are left untouched
#[derive(Default)]
pub struct UpdateTeacher {
    pub full_name: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
}

/// A teacher together with taught courses and reviews, newest review first
pub type TeacherDetail = (
    teachers::Model,
    Vec<courses::Model>,
    Vec<teacher_reviews::Model>,
);

pub struct TeacherService;

impl TeacherService {
    pub async fn create_teacher(
        db: &DatabaseConnection,
        input: CreateTeacher,
    ) -> Result<Uuid, ServiceError> {
        let full_name = input.full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(ServiceError::validation("fullName is required"));
        }
        let display_name = input.display_name.trim().to_string();
        if display_name.is_empty() {
            return Err(ServiceError::validation("displayName is required"));
        }

        let id = Uuid::new_v4();
        let teacher = teachers::ActiveModel {
            id: Set(id),
            full_name: Set(full_name),
            display_name: Set(display_name),
            bio: Set(normalize_text(input.bio)),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        teachers::Entity::insert(teacher).exec(db).await?;

        Ok(id)
    }

    pub async fn update_teacher(
        db: &DatabaseConnection,
        id: Uuid,
        input: UpdateTeacher,
    ) -> Result<(), ServiceError> {
        let teacher = teachers::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("teacher"))?;

        let mut teacher: teachers::ActiveModel = teacher.into();
        let mut changed = false;

        // Blank required names are treated as "not supplied"
        if let Some(full_name) = input.full_name {
            let full_name = full_name.trim().to_string();
            if !full_name.is_empty() {
                teacher.full_name = Set(full_name);
                changed = true;
            }
        }
        if let Some(display_name) = input.display_name {
            let display_name = display_name.trim().to_string();
            if !display_name.is_empty() {
                teacher.display_name = Set(display_name);
                changed = true;
            }
        }
        if input.bio.is_some() {
            teacher.bio = Set(normalize_text(input.bio));
            changed = true;
        }

        if changed {
            teachers::Entity::update(teacher).exec(db).await?;
        }
        Ok(())
    }

    /// Removes the teacher together with their reviews and course links.
    /// All three deletes commit together or not at all.
    pub async fn delete_teacher(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
        let txn = db.begin().await?;

        let teacher = teachers::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::NotFound("teacher"))?;

        teacher_reviews::Entity::delete_many()
            .filter(teacher_reviews::Column::TeacherId.eq(id))
            .exec(&txn)
            .await?;
        course_teachers::Entity::delete_many()
            .filter(course_teachers::Column::TeacherId.eq(id))
            .exec(&txn)
            .await?;
        teachers::Entity::delete_by_id(teacher.id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    /// All teachers in insertion order
    pub async fn list_teachers(
        db: &DatabaseConnection,
    ) -> Result<Vec<teachers::Model>, ServiceError> {
        let items = teachers::Entity::find()
            .order_by_asc(teachers::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(items)
    }

    /// Get a single teacher with taught courses and reviews
    pub async fn get_teacher_detail(
        db: &DatabaseConnection,
        teacher_id: Uuid,
    ) -> Result<Option<TeacherDetail>, ServiceError> {
        let teacher = match teachers::Entity::find_by_id(teacher_id).one(db).await? {
            Some(teacher) => teacher,
            None => return Ok(None),
        };

        let links = course_teachers::Entity::find()
            .filter(course_teachers::Column::TeacherId.eq(teacher_id))
            .find_also_related(courses::Entity)
            .all(db);
        let reviews = teacher_reviews::Entity::find()
            .filter(teacher_reviews::Column::TeacherId.eq(teacher_id))
            .order_by_desc(teacher_reviews::Column::Id)
            .all(db);
        let (links, reviews) = futures::try_join!(links, reviews)?;

        let taught_courses = links.into_iter().filter_map(|(_, course)| course).collect();

        Ok(Some((teacher, taught_courses, reviews)))
    }
}

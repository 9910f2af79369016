use crate::entities::{course_reviews, courses, teacher_reviews, teachers};
use crate::error::ServiceError;
use crate::services::normalize_text;
use models::pagination::PageParams;
use models::rating::{CourseScores, TeacherScores};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct NewCourseReview {
    pub course_id: Uuid,
    pub scores: CourseScores,
    pub comment: Option<String>,
    pub author: Option<String>,
}

pub struct NewTeacherReview {
    pub teacher_id: Uuid,
    pub scores: TeacherScores,
    pub comment: Option<String>,
    pub author: Option<String>,
}

pub struct ReviewService;

impl ReviewService {
    /// Stores a course review after validating the ratings and the course.
    /// Nothing is written when validation fails.
    pub async fn create_course_review(
        db: &DatabaseConnection,
        input: NewCourseReview,
    ) -> Result<i64, ServiceError> {
        input
            .scores
            .validate()
            .map_err(|err| ServiceError::validation(err.to_string()))?;

        let course_exists = courses::Entity::find_by_id(input.course_id)
            .count(db)
            .await?
            > 0;
        if !course_exists {
            return Err(ServiceError::NotFound("course"));
        }

        let review = course_reviews::ActiveModel {
            course_id: Set(input.course_id),
            overall: Set(input.scores.overall),
            leniency: Set(input.scores.leniency),
            usefulness: Set(input.scores.usefulness),
            interest: Set(input.scores.interest),
            comment: Set(normalize_text(input.comment)),
            author: Set(normalize_text(input.author)),
            created_at: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };
        let result = course_reviews::Entity::insert(review).exec(db).await?;

        Ok(result.last_insert_id)
    }

    /// Course reviews, newest first, optionally scoped to one course
    pub async fn list_course_reviews(
        db: &DatabaseConnection,
        course_id: Option<Uuid>,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<course_reviews::Model>, u64), ServiceError> {
        let pages = PageParams::clamped(page, page_size);

        let mut condition = Condition::all();
        if let Some(course_id) = course_id {
            condition = condition.add(course_reviews::Column::CourseId.eq(course_id));
        }

        let query = course_reviews::Entity::find()
            .filter(condition)
            .order_by_desc(course_reviews::Column::Id);

        let total_items = query.clone().count(db).await?;
        let paginator = query.paginate(db, pages.page_size());
        let items = paginator.fetch_page(pages.zero_based_page()).await?;

        Ok((items, total_items))
    }

    /// All reviews of one course, newest first
    pub async fn course_reviews_for(
        db: &DatabaseConnection,
        course_id: Uuid,
    ) -> Result<Vec<course_reviews::Model>, ServiceError> {
        Ok(course_reviews::Entity::find()
            .filter(course_reviews::Column::CourseId.eq(course_id))
            .order_by_desc(course_reviews::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get_course_review(
        db: &DatabaseConnection,
        id: i64,
    ) -> Result<Option<course_reviews::Model>, ServiceError> {
        Ok(course_reviews::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn delete_course_review(
        db: &DatabaseConnection,
        id: i64,
    ) -> Result<(), ServiceError> {
        let result = course_reviews::Entity::delete_many()
            .filter(course_reviews::Column::Id.eq(id))
            .exec(db)
            .await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("course review"));
        }
        Ok(())
    }

    /// Deletes a review only when it belongs to the given course
    pub async fn delete_course_review_for(
        db: &DatabaseConnection,
        course_id: Uuid,
        review_id: i64,
    ) -> Result<(), ServiceError> {
        let result = course_reviews::Entity::delete_many()
            .filter(course_reviews::Column::Id.eq(review_id))
            .filter(course_reviews::Column::CourseId.eq(course_id))
            .exec(db)
            .await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("course review"));
        }
        Ok(())
    }

    /// Stores a teacher review after validating the ratings and the teacher.
    /// Nothing is written when validation fails.
    pub async fn create_teacher_review(
        db: &DatabaseConnection,
        input: NewTeacherReview,
    ) -> Result<i64, ServiceError> {
        input
            .scores
            .validate()
            .map_err(|err| ServiceError::validation(err.to_string()))?;

        let teacher_exists = teachers::Entity::find_by_id(input.teacher_id)
            .count(db)
            .await?
            > 0;
        if !teacher_exists {
            return Err(ServiceError::NotFound("teacher"));
        }

        let review = teacher_reviews::ActiveModel {
            teacher_id: Set(input.teacher_id),
            overall: Set(input.scores.overall),
            leniency: Set(input.scores.leniency),
            knowledge: Set(input.scores.knowledge),
            communication: Set(input.scores.communication),
            comment: Set(normalize_text(input.comment)),
            author: Set(normalize_text(input.author)),
            created_at: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };
        let result = teacher_reviews::Entity::insert(review).exec(db).await?;

        Ok(result.last_insert_id)
    }

    /// Teacher reviews, newest first, optionally scoped to one teacher
    pub async fn list_teacher_reviews(
        db: &DatabaseConnection,
        teacher_id: Option<Uuid>,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<teacher_reviews::Model>, u64), ServiceError> {
        let pages = PageParams::clamped(page, page_size);

        let mut condition = Condition::all();
        if let Some(teacher_id) = teacher_id {
            condition = condition.add(teacher_reviews::Column::TeacherId.eq(teacher_id));
        }

        let query = teacher_reviews::Entity::find()
            .filter(condition)
            .order_by_desc(teacher_reviews::Column::Id);

        let total_items = query.clone().count(db).await?;
        let paginator = query.paginate(db, pages.page_size());
        let items = paginator.fetch_page(pages.zero_based_page()).await?;

        Ok((items, total_items))
    }

    /// All reviews of one teacher, newest first
    pub async fn teacher_reviews_for(
        db: &DatabaseConnection,
        teacher_id: Uuid,
    ) -> Result<Vec<teacher_reviews::Model>, ServiceError> {
        Ok(teacher_reviews::Entity::find()
            .filter(teacher_reviews::Column::TeacherId.eq(teacher_id))
            .order_by_desc(teacher_reviews::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get_teacher_review(
        db: &DatabaseConnection,
        id: i64,
    ) -> Result<Option<teacher_reviews::Model>, ServiceError> {
        Ok(teacher_reviews::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn delete_teacher_review(
        db: &DatabaseConnection,
        id: i64,
    ) -> Result<(), ServiceError> {
        let result = teacher_reviews::Entity::delete_many()
            .filter(teacher_reviews::Column::Id.eq(id))
            .exec(db)
            .await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("teacher review"));
        }
        Ok(())
    }

    /// Deletes a review only when it belongs to the given teacher
    pub async fn delete_teacher_review_for(
        db: &DatabaseConnection,
        teacher_id: Uuid,
        review_id: i64,
    ) -> Result<(), ServiceError> {
        let result = teacher_reviews::Entity::delete_many()
            .filter(teacher_reviews::Column::Id.eq(review_id))
            .filter(teacher_reviews::Column::TeacherId.eq(teacher_id))
            .exec(db)
            .await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("teacher review"));
        }
        Ok(())
    }
}

use crate::entities::{course_reviews, course_teachers, courses, study_programs, teachers};
use crate::error::ServiceError;
use crate::services::normalize_text;
use models::pagination::PageParams;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

pub struct CreateCourse {
    pub name: String,
    pub description: Option<String>,
    pub year: i32,
    pub semester: i32,
    pub program_id: Option<Uuid>,
    pub code: Option<String>,
}

/// Partial update: `None` fields are left untouched
#[derive(Default)]
pub struct UpdateCourse {
    pub name: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub semester: Option<i32>,
    pub program_id: Option<Uuid>,
    pub code: Option<String>,
}

/// A course together with its teachers and reviews, newest review first
pub type CourseDetail = (
    courses::Model,
    Vec<teachers::Model>,
    Vec<course_reviews::Model>,
);

pub struct CourseService;

impl CourseService {
    pub async fn create_course(
        db: &DatabaseConnection,
        input: CreateCourse,
    ) -> Result<Uuid, ServiceError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(ServiceError::validation("name is required"));
        }

        if let Some(program_id) = input.program_id {
            let program_exists = study_programs::Entity::find_by_id(program_id)
                .count(db)
                .await?
                > 0;
            if !program_exists {
                return Err(ServiceError::NotFound("study program"));
            }
        }

        let id = Uuid::new_v4();
        let course = courses::ActiveModel {
            id: Set(id),
            program_id: Set(input.program_id),
            code: Set(normalize_text(input.code)),
            name: Set(name),
            description: Set(normalize_text(input.description)),
            year: Set(input.year),
            semester: Set(input.semester),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        courses::Entity::insert(course).exec(db).await?;

        Ok(id)
    }

    pub async fn update_course(
        db: &DatabaseConnection,
        id: Uuid,
        input: UpdateCourse,
    ) -> Result<(), ServiceError> {
        let course = courses::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("course"))?;

        let mut course: courses::ActiveModel = course.into();
        let mut changed = false;

        // A blank name is treated as "not supplied"; the other text fields
        // are normalized to None when blank.
        if let Some(name) = input.name {
            let name = name.trim().to_string();
            if !name.is_empty() {
                course.name = Set(name);
                changed = true;
            }
        }
        if input.description.is_some() {
            course.description = Set(normalize_text(input.description));
            changed = true;
        }
        if let Some(year) = input.year {
            course.year = Set(year);
            changed = true;
        }
        if let Some(semester) = input.semester {
            course.semester = Set(semester);
            changed = true;
        }
        if let Some(program_id) = input.program_id {
            let program_exists = study_programs::Entity::find_by_id(program_id)
                .count(db)
                .await?
                > 0;
            if !program_exists {
                return Err(ServiceError::NotFound("study program"));
            }
            course.program_id = Set(Some(program_id));
            changed = true;
        }
        if input.code.is_some() {
            course.code = Set(normalize_text(input.code));
            changed = true;
        }

        if changed {
            courses::Entity::update(course).exec(db).await?;
        }
        Ok(())
    }

    /// Removes the course together with its reviews and teacher links.
    /// All three deletes commit together or not at all.
    pub async fn delete_course(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
        let txn = db.begin().await?;

        let course = courses::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(ServiceError::NotFound("course"))?;

        course_reviews::Entity::delete_many()
            .filter(course_reviews::Column::CourseId.eq(id))
            .exec(&txn)
            .await?;
        course_teachers::Entity::delete_many()
            .filter(course_teachers::Column::CourseId.eq(id))
            .exec(&txn)
            .await?;
        courses::Entity::delete_by_id(course.id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Query courses with pagination and case-insensitive name filtering
    pub async fn list_courses(
        db: &DatabaseConnection,
        search: Option<String>,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<courses::Model>, u64), ServiceError> {
        let pages = PageParams::clamped(page, page_size);

        let mut condition = Condition::all();
        if let Some(search) = search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() {
                condition = condition.add(
                    Expr::expr(Func::lower(Expr::col((
                        courses::Entity,
                        courses::Column::Name,
                    ))))
                    .like(format!("%{needle}%")),
                );
            }
        }

        let query = courses::Entity::find()
            .filter(condition)
            .order_by_asc(courses::Column::Name);

        let total_items = query.clone().count(db).await?;
        let paginator = query.paginate(db, pages.page_size());
        let items = paginator.fetch_page(pages.zero_based_page()).await?;

        Ok((items, total_items))
    }

    /// Get a single course with its teachers and reviews
    pub async fn get_course_detail(
        db: &DatabaseConnection,
        course_id: Uuid,
    ) -> Result<Option<CourseDetail>, ServiceError> {
        let course = match courses::Entity::find_by_id(course_id).one(db).await? {
            Some(course) => course,
            None => return Ok(None),
        };

        let links = course_teachers::Entity::find()
            .filter(course_teachers::Column::CourseId.eq(course_id))
            .find_also_related(teachers::Entity)
            .all(db);
        let reviews = course_reviews::Entity::find()
            .filter(course_reviews::Column::CourseId.eq(course_id))
            .order_by_desc(course_reviews::Column::Id)
            .all(db);
        let (links, reviews) = futures::try_join!(links, reviews)?;

        let linked_teachers = links
            .into_iter()
            .filter_map(|(_, teacher)| teacher)
            .collect();

        Ok(Some((course, linked_teachers, reviews)))
    }
}

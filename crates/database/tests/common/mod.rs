use database::services::course::{CourseService, CreateCourse};
use database::services::teacher::{CreateTeacher, TeacherService};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use uuid::Uuid;

/// Fresh in-memory database with the full schema applied
pub async fn setup() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory sqlite");
    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");
    db
}

#[allow(dead_code)]
pub async fn create_course(db: &DatabaseConnection, name: &str) -> Uuid {
    CourseService::create_course(
        db,
        CreateCourse {
            name: name.to_string(),
            description: None,
            year: 2025,
            semester: 1,
            program_id: None,
            code: None,
        },
    )
    .await
    .expect("failed to create course")
}

#[allow(dead_code)]
pub async fn create_teacher(db: &DatabaseConnection, full_name: &str, display_name: &str) -> Uuid {
    TeacherService::create_teacher(
        db,
        CreateTeacher {
            full_name: full_name.to_string(),
            display_name: display_name.to_string(),
            bio: None,
        },
    )
    .await
    .expect("failed to create teacher")
}

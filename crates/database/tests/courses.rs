mod common;

use common::{create_course, create_teacher, setup};
use database::entities::{course_reviews, courses};
use database::error::ServiceError;
use database::services::course::{CourseService, CreateCourse, UpdateCourse};
use database::services::link::LinkService;
use database::services::review::{NewCourseReview, ReviewService};
use database::services::teacher::TeacherService;
use models::rating::CourseScores;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

#[tokio::test]
async fn create_requires_a_name() {
    let db = setup().await;

    let result = CourseService::create_course(
        &db,
        CreateCourse {
            name: "   ".to_string(),
            description: None,
            year: 2025,
            semester: 1,
            program_id: None,
            code: None,
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn create_rejects_unknown_program() {
    let db = setup().await;

    let result = CourseService::create_course(
        &db,
        CreateCourse {
            name: "Algorithms".to_string(),
            description: None,
            year: 2025,
            semester: 1,
            program_id: Some(Uuid::new_v4()),
            code: None,
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn create_trims_optional_text_to_none() {
    let db = setup().await;

    let id = CourseService::create_course(
        &db,
        CreateCourse {
            name: "  Algorithms  ".to_string(),
            description: Some("   ".to_string()),
            year: 2025,
            semester: 1,
            program_id: None,
            code: Some("  ALG101 ".to_string()),
        },
    )
    .await
    .unwrap();

    let course = courses::Entity::find_by_id(id).one(&db).await.unwrap().unwrap();
    assert_eq!(course.name, "Algorithms");
    assert_eq!(course.description, None);
    assert_eq!(course.code, Some("ALG101".to_string()));
}

#[tokio::test]
async fn list_filters_case_insensitively_and_orders_by_name() {
    let db = setup().await;
    create_course(&db, "Geometry").await;
    create_course(&db, "Algorithms").await;
    create_course(&db, "Databases").await;

    let (all, total) = CourseService::list_courses(&db, None, 1, 50).await.unwrap();
    assert_eq!(total, 3);
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Algorithms", "Databases", "Geometry"]);

    let (hits, total) = CourseService::list_courses(&db, Some("ALG".to_string()), 1, 50)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(hits[0].name, "Algorithms");
}

#[tokio::test]
async fn list_clamps_pagination_input() {
    let db = setup().await;
    create_course(&db, "Geometry").await;
    create_course(&db, "Algorithms").await;
    create_course(&db, "Databases").await;

    // page 0 and an oversized page size are pulled into range
    let (items, total) = CourseService::list_courses(&db, None, 0, 5000).await.unwrap();
    assert_eq!(total, 3);
    assert_eq!(items.len(), 3);

    // a single-row page works
    let (items, _) = CourseService::list_courses(&db, None, 2, 1).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Databases");

    // a page past the end is empty, not an error
    let (items, _) = CourseService::list_courses(&db, None, 99, 50).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn update_applies_only_supplied_fields() {
    let db = setup().await;
    let id = create_course(&db, "Algorithms").await;

    CourseService::update_course(
        &db,
        id,
        UpdateCourse {
            year: Some(2026),
            description: Some("Updated".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let course = courses::Entity::find_by_id(id).one(&db).await.unwrap().unwrap();
    assert_eq!(course.name, "Algorithms");
    assert_eq!(course.year, 2026);
    assert_eq!(course.semester, 1);
    assert_eq!(course.description, Some("Updated".to_string()));
}

#[tokio::test]
async fn update_ignores_blank_name() {
    let db = setup().await;
    let id = create_course(&db, "Algorithms").await;

    CourseService::update_course(
        &db,
        id,
        UpdateCourse {
            name: Some("  ".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let course = courses::Entity::find_by_id(id).one(&db).await.unwrap().unwrap();
    assert_eq!(course.name, "Algorithms");
}

#[tokio::test]
async fn update_unknown_course_is_not_found() {
    let db = setup().await;

    let result = CourseService::update_course(&db, Uuid::new_v4(), UpdateCourse::default()).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn delete_cascades_reviews_and_links() {
    let db = setup().await;
    let course_id = create_course(&db, "Algorithms").await;
    let teacher_id = create_teacher(&db, "Ada Lovelace", "A. Lovelace").await;
    LinkService::link_teacher_to_course(&db, course_id, teacher_id)
        .await
        .unwrap();

    for overall in [6, 7, 8] {
        ReviewService::create_course_review(
            &db,
            NewCourseReview {
                course_id,
                scores: CourseScores {
                    overall,
                    leniency: 5,
                    usefulness: 5,
                    interest: 5,
                },
                comment: None,
                author: None,
            },
        )
        .await
        .unwrap();
    }

    CourseService::delete_course(&db, course_id).await.unwrap();

    assert!(courses::Entity::find_by_id(course_id)
        .one(&db)
        .await
        .unwrap()
        .is_none());
    let orphaned = course_reviews::Entity::find()
        .filter(course_reviews::Column::CourseId.eq(course_id))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(orphaned, 0);

    // the teacher survives, only the link goes away
    let (_, taught, _) = TeacherService::get_teacher_detail(&db, teacher_id)
        .await
        .unwrap()
        .unwrap();
    assert!(taught.is_empty());
}

#[tokio::test]
async fn delete_unknown_course_is_not_found() {
    let db = setup().await;

    let result = CourseService::delete_course(&db, Uuid::new_v4()).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

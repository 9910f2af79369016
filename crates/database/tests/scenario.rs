mod common;

use common::setup;
use database::services::catalog::CatalogService;
use database::services::course::{CourseService, CreateCourse};
use database::services::link::LinkService;
use database::services::review::{NewCourseReview, ReviewService};
use database::services::teacher::{CreateTeacher, TeacherService};
use models::averages::CourseAverages;
use models::rating::CourseScores;

// Full catalog walk-through: faculty -> program -> course -> teacher ->
// link -> review, then read the course detail back.
#[tokio::test]
async fn full_catalog_scenario() {
    let db = setup().await;

    let faculty_id = CatalogService::create_faculty(
        &db,
        "FCS".to_string(),
        "Faculty of Computer Science".to_string(),
    )
    .await
    .unwrap();

    let program_id = CatalogService::create_program(
        &db,
        faculty_id,
        "PMI".to_string(),
        "Applied Mathematics and Informatics".to_string(),
    )
    .await
    .unwrap();

    let course_id = CourseService::create_course(
        &db,
        CreateCourse {
            name: "Algorithms".to_string(),
            description: None,
            year: 2025,
            semester: 1,
            program_id: Some(program_id),
            code: None,
        },
    )
    .await
    .unwrap();

    let teacher_id = TeacherService::create_teacher(
        &db,
        CreateTeacher {
            full_name: "A B".to_string(),
            display_name: "A.B.".to_string(),
            bio: None,
        },
    )
    .await
    .unwrap();

    LinkService::link_teacher_to_course(&db, course_id, teacher_id)
        .await
        .unwrap();

    ReviewService::create_course_review(
        &db,
        NewCourseReview {
            course_id,
            scores: CourseScores {
                overall: 8,
                leniency: 6,
                usefulness: 9,
                interest: 7,
            },
            comment: None,
            author: None,
        },
    )
    .await
    .unwrap();

    let (course, teachers, reviews) = CourseService::get_course_detail(&db, course_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(course.program_id, Some(program_id));
    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0].id, teacher_id);
    assert_eq!(teachers[0].full_name, "A B");
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].overall, 8);

    let scores: Vec<CourseScores> = reviews
        .iter()
        .map(|r| CourseScores {
            overall: r.overall,
            leniency: r.leniency,
            usefulness: r.usefulness,
            interest: r.interest,
        })
        .collect();
    let averages = CourseAverages::from_scores(&scores).unwrap();
    assert_eq!(averages.overall, 8.0);
    assert_eq!(averages.count, 1);
}

#[tokio::test]
async fn program_options_filter_by_faculty_code() {
    let db = setup().await;

    let fcs = CatalogService::create_faculty(
        &db,
        "FCS".to_string(),
        "Faculty of Computer Science".to_string(),
    )
    .await
    .unwrap();
    let fes = CatalogService::create_faculty(
        &db,
        "FES".to_string(),
        "Faculty of Economic Sciences".to_string(),
    )
    .await
    .unwrap();

    CatalogService::create_program(&db, fcs, "PMI".to_string(), "Applied Mathematics".to_string())
        .await
        .unwrap();
    CatalogService::create_program(&db, fes, "ECO".to_string(), "Economics".to_string())
        .await
        .unwrap();

    let all = CatalogService::program_options(&db, None).await.unwrap();
    assert_eq!(all.len(), 2);
    // ordered by program code
    assert_eq!(all[0].0.code, "ECO");
    assert_eq!(all[1].0.code, "PMI");

    let scoped = CatalogService::program_options(&db, Some("FCS".to_string()))
        .await
        .unwrap();
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].0.code, "PMI");
    assert_eq!(scoped[0].1.code, "FCS");
}

#[tokio::test]
async fn duplicate_faculty_codes_are_rejected() {
    let db = setup().await;

    CatalogService::create_faculty(&db, "FCS".to_string(), "Computer Science".to_string())
        .await
        .unwrap();
    let result =
        CatalogService::create_faculty(&db, "FCS".to_string(), "Another Name".to_string()).await;

    assert!(matches!(
        result,
        Err(database::error::ServiceError::Validation(_))
    ));
}

#[tokio::test]
async fn deleting_a_program_detaches_its_courses() {
    let db = setup().await;

    let faculty_id =
        CatalogService::create_faculty(&db, "FCS".to_string(), "Computer Science".to_string())
            .await
            .unwrap();
    let program_id = CatalogService::create_program(
        &db,
        faculty_id,
        "PMI".to_string(),
        "Applied Mathematics".to_string(),
    )
    .await
    .unwrap();
    let course_id = CourseService::create_course(
        &db,
        CreateCourse {
            name: "Algorithms".to_string(),
            description: None,
            year: 2025,
            semester: 1,
            program_id: Some(program_id),
            code: None,
        },
    )
    .await
    .unwrap();

    CatalogService::delete_program(&db, program_id).await.unwrap();

    let (course, _, _) = CourseService::get_course_detail(&db, course_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(course.program_id, None);

    let options = CatalogService::program_options(&db, None).await.unwrap();
    assert!(options.is_empty());
}

#[tokio::test]
async fn deleting_a_faculty_removes_its_programs() {
    let db = setup().await;

    let faculty_id =
        CatalogService::create_faculty(&db, "FCS".to_string(), "Computer Science".to_string())
            .await
            .unwrap();
    CatalogService::create_program(
        &db,
        faculty_id,
        "PMI".to_string(),
        "Applied Mathematics".to_string(),
    )
    .await
    .unwrap();

    CatalogService::delete_faculty(&db, faculty_id).await.unwrap();

    assert!(CatalogService::faculty_options(&db).await.unwrap().is_empty());
    assert!(CatalogService::program_options(&db, None).await.unwrap().is_empty());
}

mod common;

use common::{create_course, create_teacher, setup};
use database::error::ServiceError;
use database::services::review::{NewCourseReview, NewTeacherReview, ReviewService};
use models::rating::{CourseScores, TeacherScores};
use uuid::Uuid;

fn course_review(course_id: Uuid, overall: i32) -> NewCourseReview {
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
    }
}

#[tokio::test]
async fn ratings_must_be_within_bounds() {
    let db = setup().await;
    let course_id = create_course(&db, "Algorithms").await;

    let result = ReviewService::create_course_review(&db, course_review(course_id, 0)).await;
    assert!(matches!(result, Err(ServiceError::Validation(_))));

    let result = ReviewService::create_course_review(&db, course_review(course_id, 11)).await;
    assert!(matches!(result, Err(ServiceError::Validation(_))));

    let result = ReviewService::create_course_review(&db, course_review(course_id, 10)).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn rejected_reviews_are_never_stored() {
    let db = setup().await;
    let course_id = create_course(&db, "Algorithms").await;

    let _ = ReviewService::create_course_review(&db, course_review(course_id, 11)).await;

    let (items, total) = ReviewService::list_course_reviews(&db, Some(course_id), 1, 50)
        .await
        .unwrap();
    assert_eq!(total, 0);
    assert!(items.is_empty());
}

#[tokio::test]
async fn review_for_unknown_course_is_not_found() {
    let db = setup().await;

    let result = ReviewService::create_course_review(&db, course_review(Uuid::new_v4(), 8)).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn blank_comment_and_author_become_null() {
    let db = setup().await;
    let course_id = create_course(&db, "Algorithms").await;

    let id = ReviewService::create_course_review(
        &db,
        NewCourseReview {
            course_id,
            scores: CourseScores {
                overall: 8,
                leniency: 6,
                usefulness: 9,
                interest: 7,
            },
            comment: Some("   ".to_string()),
            author: Some("  anon  ".to_string()),
        },
    )
    .await
    .unwrap();

    let review = ReviewService::get_course_review(&db, id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(review.comment, None);
    assert_eq!(review.author, Some("anon".to_string()));
}

#[tokio::test]
async fn reviews_list_newest_first() {
    let db = setup().await;
    let course_id = create_course(&db, "Algorithms").await;

    for overall in [4, 6, 8] {
        ReviewService::create_course_review(&db, course_review(course_id, overall))
            .await
            .unwrap();
    }

    let (items, total) = ReviewService::list_course_reviews(&db, Some(course_id), 1, 50)
        .await
        .unwrap();
    assert_eq!(total, 3);
    let overalls: Vec<i32> = items.iter().map(|r| r.overall).collect();
    assert_eq!(overalls, vec![8, 6, 4]);
    assert!(items[0].id > items[1].id && items[1].id > items[2].id);
}

#[tokio::test]
async fn review_list_is_scoped_by_course() {
    let db = setup().await;
    let algorithms = create_course(&db, "Algorithms").await;
    let databases = create_course(&db, "Databases").await;

    ReviewService::create_course_review(&db, course_review(algorithms, 8))
        .await
        .unwrap();
    ReviewService::create_course_review(&db, course_review(databases, 4))
        .await
        .unwrap();

    let (items, total) = ReviewService::list_course_reviews(&db, Some(algorithms), 1, 50)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].overall, 8);

    let (_, unscoped_total) = ReviewService::list_course_reviews(&db, None, 1, 50)
        .await
        .unwrap();
    assert_eq!(unscoped_total, 2);
}

#[tokio::test]
async fn deleting_reviews_checks_ownership() {
    let db = setup().await;
    let algorithms = create_course(&db, "Algorithms").await;
    let databases = create_course(&db, "Databases").await;

    let review_id = ReviewService::create_course_review(&db, course_review(algorithms, 8))
        .await
        .unwrap();

    // wrong parent course: nothing deleted
    let result = ReviewService::delete_course_review_for(&db, databases, review_id).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));

    ReviewService::delete_course_review_for(&db, algorithms, review_id)
        .await
        .unwrap();
    assert!(ReviewService::get_course_review(&db, review_id)
        .await
        .unwrap()
        .is_none());

    let result = ReviewService::delete_course_review(&db, review_id).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn teacher_reviews_mirror_course_review_rules() {
    let db = setup().await;
    let teacher_id = create_teacher(&db, "Ada Lovelace", "A. Lovelace").await;

    let bad = ReviewService::create_teacher_review(
        &db,
        NewTeacherReview {
            teacher_id,
            scores: TeacherScores {
                overall: 0,
                leniency: 5,
                knowledge: 5,
                communication: 5,
            },
            comment: None,
            author: None,
        },
    )
    .await;
    assert!(matches!(bad, Err(ServiceError::Validation(_))));

    let id = ReviewService::create_teacher_review(
        &db,
        NewTeacherReview {
            teacher_id,
            scores: TeacherScores {
                overall: 9,
                leniency: 7,
                knowledge: 10,
                communication: 8,
            },
            comment: Some("Great lectures".to_string()),
            author: None,
        },
    )
    .await
    .unwrap();

    let review = ReviewService::get_teacher_review(&db, id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(review.knowledge, 10);
    assert_eq!(review.comment, Some("Great lectures".to_string()));

    ReviewService::delete_teacher_review(&db, id).await.unwrap();
    let result = ReviewService::delete_teacher_review(&db, id).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

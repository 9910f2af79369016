mod common;

use common::{create_course, create_teacher, setup};
use database::entities::course_teachers;
use database::error::ServiceError;
use database::services::course::CourseService;
use database::services::link::LinkService;
use sea_orm::{EntityTrait, PaginatorTrait};
use uuid::Uuid;

#[tokio::test]
async fn linking_twice_leaves_one_row() {
    let db = setup().await;
    let course_id = create_course(&db, "Algorithms").await;
    let teacher_id = create_teacher(&db, "Ada Lovelace", "A. Lovelace").await;

    LinkService::link_teacher_to_course(&db, course_id, teacher_id)
        .await
        .unwrap();
    LinkService::link_teacher_to_course(&db, course_id, teacher_id)
        .await
        .unwrap();

    let rows = course_teachers::Entity::find().count(&db).await.unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn linking_unknown_ids_is_not_found() {
    let db = setup().await;
    let course_id = create_course(&db, "Algorithms").await;

    let result = LinkService::link_teacher_to_course(&db, course_id, Uuid::new_v4()).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));

    let teacher_id = create_teacher(&db, "Ada Lovelace", "A. Lovelace").await;
    let result = LinkService::link_teacher_to_course(&db, Uuid::new_v4(), teacher_id).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn unlinking_a_missing_pair_is_not_found() {
    let db = setup().await;
    let course_id = create_course(&db, "Algorithms").await;
    let teacher_id = create_teacher(&db, "Ada Lovelace", "A. Lovelace").await;

    let result = LinkService::unlink_teacher_from_course(&db, course_id, teacher_id).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn unlink_removes_the_association() {
    let db = setup().await;
    let course_id = create_course(&db, "Algorithms").await;
    let teacher_id = create_teacher(&db, "Ada Lovelace", "A. Lovelace").await;

    LinkService::link_teacher_to_course(&db, course_id, teacher_id)
        .await
        .unwrap();
    LinkService::unlink_teacher_from_course(&db, course_id, teacher_id)
        .await
        .unwrap();

    let rows = course_teachers::Entity::find().count(&db).await.unwrap();
    assert_eq!(rows, 0);

    let (_, teachers, _) = CourseService::get_course_detail(&db, course_id)
        .await
        .unwrap()
        .unwrap();
    assert!(teachers.is_empty());
}

#[tokio::test]
async fn links_are_scoped_to_their_pair() {
    let db = setup().await;
    let algorithms = create_course(&db, "Algorithms").await;
    let databases = create_course(&db, "Databases").await;
    let teacher_id = create_teacher(&db, "Ada Lovelace", "A. Lovelace").await;

    LinkService::link_teacher_to_course(&db, algorithms, teacher_id)
        .await
        .unwrap();
    LinkService::link_teacher_to_course(&db, databases, teacher_id)
        .await
        .unwrap();

    LinkService::unlink_teacher_from_course(&db, algorithms, teacher_id)
        .await
        .unwrap();

    let (_, teachers, _) = CourseService::get_course_detail(&db, databases)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0].id, teacher_id);
}

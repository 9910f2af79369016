use crate::entities::{course_teachers, courses, faculties, study_programs, teachers};
use log::info;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

/// Seeds a minimal demo dataset: one faculty, one program, one teacher and
/// one course linked to that teacher. Idempotent: each block checks for
/// existing rows before inserting.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let now = chrono::Utc::now().naive_utc();

    let faculty_id = match faculties::Entity::find().one(db).await? {
        Some(faculty) => faculty.id,
        None => {
            let id = Uuid::new_v4();
            faculties::Entity::insert(faculties::ActiveModel {
                id: Set(id),
                code: Set("FCS".to_string()),
                name: Set("Faculty of Computer Science".to_string()),
                created_at: Set(now),
            })
            .exec(db)
            .await?;
            info!("seeded demo faculty FCS");
            id
        }
    };

    let program_id = match study_programs::Entity::find().one(db).await? {
        Some(program) => program.id,
        None => {
            let id = Uuid::new_v4();
            study_programs::Entity::insert(study_programs::ActiveModel {
                id: Set(id),
                faculty_id: Set(faculty_id),
                code: Set("PMI".to_string()),
                name: Set("Applied Mathematics and Informatics".to_string()),
                created_at: Set(now),
            })
            .exec(db)
            .await?;
            info!("seeded demo study program PMI");
            id
        }
    };

    let teacher_id = match teachers::Entity::find().one(db).await? {
        Some(teacher) => teacher.id,
        None => {
            let id = Uuid::new_v4();
            teachers::Entity::insert(teachers::ActiveModel {
                id: Set(id),
                full_name: Set("Ivan Ivanovich Ivanov".to_string()),
                display_name: Set("Ivanov I.I.".to_string()),
                bio: Set(Some("Associate professor".to_string())),
                created_at: Set(now),
            })
            .exec(db)
            .await?;
            info!("seeded demo teacher");
            id
        }
    };

    if courses::Entity::find().one(db).await?.is_none() {
        let course_id = Uuid::new_v4();
        courses::Entity::insert(courses::ActiveModel {
            id: Set(course_id),
            program_id: Set(Some(program_id)),
            code: Set(Some("ALG101".to_string())),
            name: Set("Algorithms".to_string()),
            description: Set(Some("Introductory algorithms course".to_string())),
            year: Set(2025),
            semester: Set(1),
            created_at: Set(now),
        })
        .exec(db)
        .await?;

        let already_linked = course_teachers::Entity::find()
            .filter(course_teachers::Column::CourseId.eq(course_id))
            .filter(course_teachers::Column::TeacherId.eq(teacher_id))
            .one(db)
            .await?
            .is_some();
        if !already_linked {
            course_teachers::Entity::insert(course_teachers::ActiveModel {
                id: Set(Uuid::new_v4()),
                course_id: Set(course_id),
                teacher_id: Set(teacher_id),
                created_at: Set(now),
            })
            .exec(db)
            .await?;
        }
        info!("seeded demo course with teacher link");
    }

    Ok(())
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Faculty and program codes are unique across the catalog
        manager
            .create_index(
                Index::create()
                    .name("uq_faculties_code")
                    .table(Faculties::Table)
                    .col(Faculties::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_study_programs_code")
                    .table(StudyPrograms::Table)
                    .col(StudyPrograms::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_study_programs_faculty_id")
                    .table(StudyPrograms::Table)
                    .col(StudyPrograms::FacultyId)
                    .to_owned(),
            )
            .await?;

        // Indexes on courses for list filtering and program lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_name")
                    .table(Courses::Table)
                    .col(Courses::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_program_id")
                    .table(Courses::Table)
                    .col(Courses::ProgramId)
                    .to_owned(),
            )
            .await?;

        // Indexes on course_teachers for many-to-many lookups. The unique
        // pair index is also the backstop for concurrent link calls: two
        // racing inserts cannot both land.
        manager
            .create_index(
                Index::create()
                    .name("uq_course_teachers_pair")
                    .table(CourseTeachers::Table)
                    .col(CourseTeachers::CourseId)
                    .col(CourseTeachers::TeacherId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_teachers_teacher_id")
                    .table(CourseTeachers::Table)
                    .col(CourseTeachers::TeacherId)
                    .to_owned(),
            )
            .await?;

        // Review lookups are always scoped to the parent entity
        manager
            .create_index(
                Index::create()
                    .name("idx_course_reviews_course_id")
                    .table(CourseReviews::Table)
                    .col(CourseReviews::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teacher_reviews_teacher_id")
                    .table(TeacherReviews::Table)
                    .col(TeacherReviews::TeacherId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(
                Index::drop()
                    .name("idx_teacher_reviews_teacher_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_course_reviews_course_id").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_teachers_teacher_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("uq_course_teachers_pair").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_courses_program_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_courses_name").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_study_programs_faculty_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("uq_study_programs_code").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("uq_faculties_code").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Faculties {
    Table,
    Code,
}

#[derive(Iden)]
enum StudyPrograms {
    Table,
    FacultyId,
    Code,
}

#[derive(Iden)]
enum Courses {
    Table,
    Name,
    ProgramId,
}

#[derive(Iden)]
enum CourseTeachers {
    Table,
    CourseId,
    TeacherId,
}

#[derive(Iden)]
enum CourseReviews {
    Table,
    CourseId,
}

#[derive(Iden)]
enum TeacherReviews {
    Table,
    TeacherId,
}

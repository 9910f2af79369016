use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create faculties table
        manager
            .create_table(
                Table::create()
                    .table(Faculties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Faculties::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Faculties::Code).string_len(32).not_null())
                    .col(ColumnDef::new(Faculties::Name).string_len(256).not_null())
                    .col(ColumnDef::new(Faculties::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create study_programs table
        manager
            .create_table(
                Table::create()
                    .table(StudyPrograms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudyPrograms::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudyPrograms::FacultyId).uuid().not_null())
                    .col(
                        ColumnDef::new(StudyPrograms::Code)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudyPrograms::Name)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudyPrograms::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-study_programs-faculty_id")
                            .from(StudyPrograms::Table, StudyPrograms::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::ProgramId).uuid())
                    .col(ColumnDef::new(Courses::Code).string_len(64))
                    .col(ColumnDef::new(Courses::Name).string_len(256).not_null())
                    .col(ColumnDef::new(Courses::Description).text())
                    .col(ColumnDef::new(Courses::Year).integer().not_null())
                    .col(ColumnDef::new(Courses::Semester).integer().not_null())
                    .col(ColumnDef::new(Courses::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-program_id")
                            .from(Courses::Table, Courses::ProgramId)
                            .to(StudyPrograms::Table, StudyPrograms::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create teachers table
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::FullName)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Teachers::DisplayName)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Teachers::Bio).text())
                    .col(ColumnDef::new(Teachers::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create course_teachers junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(CourseTeachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseTeachers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseTeachers::CourseId).uuid().not_null())
                    .col(ColumnDef::new(CourseTeachers::TeacherId).uuid().not_null())
                    .col(
                        ColumnDef::new(CourseTeachers::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_teachers-course_id")
                            .from(CourseTeachers::Table, CourseTeachers::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_teachers-teacher_id")
                            .from(CourseTeachers::Table, CourseTeachers::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_reviews table
        manager
            .create_table(
                Table::create()
                    .table(CourseReviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseReviews::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseReviews::CourseId).uuid().not_null())
                    .col(ColumnDef::new(CourseReviews::Overall).integer().not_null())
                    .col(ColumnDef::new(CourseReviews::Leniency).integer().not_null())
                    .col(
                        ColumnDef::new(CourseReviews::Usefulness)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseReviews::Interest).integer().not_null())
                    .col(ColumnDef::new(CourseReviews::Comment).string_len(4000))
                    .col(ColumnDef::new(CourseReviews::Author).string_len(128))
                    .col(
                        ColumnDef::new(CourseReviews::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_reviews-course_id")
                            .from(CourseReviews::Table, CourseReviews::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create teacher_reviews table
        manager
            .create_table(
                Table::create()
                    .table(TeacherReviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherReviews::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TeacherReviews::TeacherId).uuid().not_null())
                    .col(ColumnDef::new(TeacherReviews::Overall).integer().not_null())
                    .col(
                        ColumnDef::new(TeacherReviews::Leniency)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherReviews::Knowledge)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherReviews::Communication)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TeacherReviews::Comment).string_len(4000))
                    .col(ColumnDef::new(TeacherReviews::Author).string_len(128))
                    .col(
                        ColumnDef::new(TeacherReviews::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-teacher_reviews-teacher_id")
                            .from(TeacherReviews::Table, TeacherReviews::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(TeacherReviews::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseReviews::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseTeachers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(StudyPrograms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Faculties::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Faculties {
    Table,
    Id,
    Code,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum StudyPrograms {
    Table,
    Id,
    FacultyId,
    Code,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    ProgramId,
    Code,
    Name,
    Description,
    Year,
    Semester,
    CreatedAt,
}

#[derive(Iden)]
enum Teachers {
    Table,
    Id,
    FullName,
    DisplayName,
    Bio,
    CreatedAt,
}

#[derive(Iden)]
enum CourseTeachers {
    Table,
    Id,
    CourseId,
    TeacherId,
    CreatedAt,
}

#[derive(Iden)]
enum CourseReviews {
    Table,
    Id,
    CourseId,
    Overall,
    Leniency,
    Usefulness,
    Interest,
    Comment,
    Author,
    CreatedAt,
}

#[derive(Iden)]
enum TeacherReviews {
    Table,
    Id,
    TeacherId,
    Overall,
    Leniency,
    Knowledge,
    Communication,
    Comment,
    Author,
    CreatedAt,
}

pub mod course;
pub mod course_review;
pub mod course_teacher;
pub mod faculty;
pub mod study_program;
pub mod teacher;
pub mod teacher_review;

pub use self::course as courses;
pub use self::course_review as course_reviews;
pub use self::course_teacher as course_teachers;
pub use self::faculty as faculties;
pub use self::study_program as study_programs;
pub use self::teacher as teachers;
pub use self::teacher_review as teacher_reviews;

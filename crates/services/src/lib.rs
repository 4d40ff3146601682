#![forbid(unsafe_code)]

pub mod course_progress;
pub mod directory;
pub mod error;

pub use course_progress::CourseProgressService;
pub use directory::{
    CourseDirectory, CourseProgressRow, DirectoryConfig, EnrollmentRow, HttpCourseDirectory,
};
pub use error::DirectoryError;

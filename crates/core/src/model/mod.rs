mod course;
mod ids;
mod summary;

pub use course::{Course, CourseLevel};
pub use ids::CourseId;
pub use summary::CourseSummary;

#![forbid(unsafe_code)]

pub mod model;

pub use model::{Course, CourseId, CourseLevel, CourseSummary};

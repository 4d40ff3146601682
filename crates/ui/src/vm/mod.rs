mod course_vm;

pub use course_vm::{CourseCardVm, level_badge_class, map_course_cards};

mod course_progress;
mod home;
mod state;

#[cfg(test)]
mod view_smoke;

pub use course_progress::CourseProgressView;
pub use home::HomeView;
pub use state::{ViewState, view_state_from_resource};

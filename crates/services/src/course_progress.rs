use std::sync::Arc;

use coursedesk_core::model::{Course, CourseId, CourseLevel, CourseSummary};

use crate::directory::{CourseDirectory, CourseProgressRow};
use crate::error::DirectoryError;

/// Presentation-facing course statistics facade that hides the directory
/// client from the UI.
///
/// This service owns repository-style access to the backend; it does **not**
/// own UI formatting (rounding, badge styling) — that lives in view models.
#[derive(Clone)]
pub struct CourseProgressService {
    directory: Arc<dyn CourseDirectory>,
}

impl CourseProgressService {
    #[must_use]
    pub fn new(directory: Arc<dyn CourseDirectory>) -> Self {
        Self { directory }
    }

    /// Fetch all courses and derive per-course enrollment statistics.
    ///
    /// Summaries are computed fresh from the returned snapshot and keep the
    /// order of the upstream response. No retry, caching, or timeout is
    /// applied here.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError` when the directory read fails.
    pub async fn course_summaries(&self) -> Result<Vec<CourseSummary>, DirectoryError> {
        let rows = self.directory.fetch_course_progress().await?;
        Ok(rows.iter().map(summarize_row).collect())
    }
}

fn summarize_row(row: &CourseProgressRow) -> CourseSummary {
    let course = Course::new(
        CourseId::new(row.id.clone()),
        row.title.clone(),
        CourseLevel::parse(&row.level),
        row.duration,
    );
    let progress: Vec<f64> = row.enrollments.iter().map(|e| e.progress).collect();
    CourseSummary::from_progress(course, &progress)
}

use coursedesk_core::model::{CourseLevel, CourseSummary};

/// Pre-formatted card fields for the course progress panel.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseCardVm {
    pub id: String,
    pub title: String,
    pub level_label: String,
    pub level_class: &'static str,
    pub total_enrollments: u32,
    pub duration_minutes: u32,
    /// Rounded for display only; the summary keeps the unrounded value.
    pub completion_label: i64,
    /// Unrounded; drives the progress bar's filled width.
    pub avg_progress_pct: f64,
    pub avg_progress_label: i64,
}

/// Badge class per level. Unrecognized levels get the plain badge with no
/// distinguishing modifier.
#[must_use]
pub fn level_badge_class(level: &CourseLevel) -> &'static str {
    match level {
        CourseLevel::Beginner => "level-badge level-beginner",
        CourseLevel::Intermediate => "level-badge level-intermediate",
        CourseLevel::Advanced => "level-badge level-advanced",
        CourseLevel::Other(_) => "level-badge",
    }
}

impl From<&CourseSummary> for CourseCardVm {
    #[allow(clippy::cast_possible_truncation)]
    fn from(summary: &CourseSummary) -> Self {
        let course = &summary.course;
        Self {
            id: course.id().as_str().to_string(),
            title: course.title().to_string(),
            level_label: course.level().label().to_string(),
            level_class: level_badge_class(course.level()),
            total_enrollments: summary.total_enrollments,
            duration_minutes: course.duration_minutes(),
            completion_label: summary.completion_rate.round() as i64,
            avg_progress_pct: summary.avg_progress,
            avg_progress_label: summary.avg_progress.round() as i64,
        }
    }
}

#[must_use]
pub fn map_course_cards(items: &[CourseSummary]) -> Vec<CourseCardVm> {
    items.iter().map(CourseCardVm::from).collect()
}

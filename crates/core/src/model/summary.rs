use crate::model::course::Course;

/// Aggregated enrollment statistics for one course.
///
/// Derived fresh from each fetch snapshot; never persisted and never mutated
/// independently of the list it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    pub course: Course,
    /// Number of enrollments at fetch time. 0 when the relation is empty.
    pub total_enrollments: u32,
    /// Arithmetic mean of the enrollments' progress values, 0 with none.
    pub avg_progress: f64,
    /// Percent of enrollments whose progress is exactly 100, 0 with none.
    pub completion_rate: f64,
}

impl CourseSummary {
    /// Aggregate a course's enrollment progress values.
    ///
    /// With zero enrollments the divisor is substituted with 1, so both
    /// statistics come out as exactly 0 rather than a division fault.
    /// Progress values are taken as-is; out-of-range upstream data is not
    /// clamped.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn from_progress(course: Course, progress: &[f64]) -> Self {
        let total = progress.len();
        let divisor = total.max(1) as f64;
        let sum: f64 = progress.iter().sum();
        #[allow(clippy::float_cmp)] // completion is defined as exactly 100
        let completed = progress.iter().filter(|value| **value == 100.0).count();

        Self {
            course,
            total_enrollments: total as u32,
            avg_progress: sum / divisor,
            completion_rate: completed as f64 / divisor * 100.0,
        }
    }
}

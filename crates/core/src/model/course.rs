use crate::model::ids::CourseId;

/// Difficulty category of a course.
///
/// The backend stores the level as a free-form string. The three recognized
/// categories get their own variants so presentation code can match on them
/// exhaustively; anything else is carried through verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
    Other(String),
}

impl CourseLevel {
    /// Total parse from the wire string. Unknown values are not an error.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the display label, which round-trips the wire string.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Other(raw) => raw,
        }
    }
}

/// A course as known to the backend, read-only in this application.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    id: CourseId,
    title: String,
    level: CourseLevel,
    duration_minutes: u32,
}

impl Course {
    #[must_use]
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        level: CourseLevel,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            level,
            duration_minutes,
        }
    }

    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn level(&self) -> &CourseLevel {
        &self.level
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::DirectoryError;

/// Raw course row as returned by the backend: one entry per course with the
/// enrollment progress relation embedded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseProgressRow {
    pub id: String,
    pub title: String,
    pub level: String,
    pub duration: u32,
    /// An absent relation deserializes as an empty list.
    #[serde(default)]
    pub enrollments: Vec<EnrollmentRow>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnrollmentRow {
    pub progress: f64,
}

/// Read-only client for the hosted course directory.
///
/// One capability: fetch every course together with its enrollments'
/// progress values. The trait is the injection seam that lets services and
/// views run against test doubles instead of the live backend.
#[async_trait]
pub trait CourseDirectory: Send + Sync {
    /// Fetch all courses with their embedded enrollment progress values,
    /// in the order the backend returns them.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError` on transport, authorization, or decode
    /// failures.
    async fn fetch_course_progress(&self) -> Result<Vec<CourseProgressRow>, DirectoryError>;
}

/// Connection settings for the hosted backend's REST surface.
#[derive(Clone, Debug)]
pub struct DirectoryConfig {
    pub base_url: String,
    pub api_key: String,
}

/// The embedded-relation select sent to the backend. Enrollment rows are
/// narrowed to the `progress` column; nothing else is read.
const COURSE_PROGRESS_SELECT: &str =
    "id,title,level,duration,enrollments:course_enrollments(progress)";

/// `CourseDirectory` backed by the hosted backend over HTTP.
#[derive(Clone)]
pub struct HttpCourseDirectory {
    client: Client,
    config: DirectoryConfig,
}

impl HttpCourseDirectory {
    #[must_use]
    pub fn new(config: DirectoryConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl CourseDirectory for HttpCourseDirectory {
    async fn fetch_course_progress(&self) -> Result<Vec<CourseProgressRow>, DirectoryError> {
        let url = format!(
            "{}/rest/v1/courses",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .get(url)
            .query(&[("select", COURSE_PROGRESS_SELECT)])
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DirectoryError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An exercise from the backend catalog.
///
/// `id` is absent on creation payloads; the backend assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "muscleGroup")]
    pub muscle_group: Option<String>,
    pub difficulty: Option<String>,
    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,
    #[serde(rename = "createdBy")]
    pub created_by: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

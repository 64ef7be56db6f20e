//! Goal records and the in-memory collection.
//!
//! The server owns the durable copy; the client holds a disposable
//! snapshot that is replaced wholesale after every mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SksError};

/// Platform suggestions offered by the add form. Free text is still
/// accepted; this list only seeds the picker.
pub const PLATFORMS: &[&str] = &[
    "Udemy",
    "YouTube",
    "Coursera",
    "edX",
    "Pluralsight",
    "LinkedIn Learning",
    "Skillshare",
    "FreeCodeCamp",
    "Khan Academy",
    "Other",
];

/// Kind of learning resource a goal tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Course,
    Video,
    Article,
    Book,
    Tutorial,
    Certification,
}

impl ResourceType {
    pub const ALL: [Self; 6] = [
        Self::Course,
        Self::Video,
        Self::Article,
        Self::Book,
        Self::Tutorial,
        Self::Certification,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::Video => "video",
            Self::Article => "article",
            Self::Book => "book",
            Self::Tutorial => "tutorial",
            Self::Certification => "certification",
        }
    }
}

impl std::str::FromStr for ResourceType {
    type Err = SksError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "course" => Ok(Self::Course),
            "video" => Ok(Self::Video),
            "article" => Ok(Self::Article),
            "book" => Ok(Self::Book),
            "tutorial" => Ok(Self::Tutorial),
            "certification" => Ok(Self::Certification),
            _ => Err(SksError::ValidationFailed(format!(
                "invalid resource type: {s} (expected course, video, article, book, tutorial, or certification)"
            ))),
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Progress state of a goal. The wire strings are exactly `started`,
/// `in-progress`, and `completed`; nothing else is displayed or filtered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressStatus {
    #[default]
    #[serde(rename = "started")]
    Started,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl ProgressStatus {
    pub const ALL: [Self; 3] = [Self::Started, Self::InProgress, Self::Completed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Cycle to the next status, wrapping around. Used by form pickers.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Started => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::Started,
        }
    }
}

impl std::str::FromStr for ProgressStatus {
    type Err = SksError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "started" => Ok(Self::Started),
            "in-progress" | "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(SksError::ValidationFailed(format!(
                "invalid progress status: {s} (expected started, in-progress, or completed)"
            ))),
        }
    }
}

impl std::fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A tracked learning goal as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub id: i64,
    pub skill_name: String,
    pub resource_type: ResourceType,
    pub platform: String,
    #[serde(default)]
    pub progress_status: ProgressStatus,
    #[serde(default)]
    pub hours_spent: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "default_difficulty")]
    pub difficulty_rating: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const fn default_difficulty() -> u8 {
    1
}

/// Request body for creating a goal. The server assigns id and
/// timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGoal {
    pub skill_name: String,
    pub resource_type: ResourceType,
    pub platform: String,
    pub progress_status: ProgressStatus,
    pub hours_spent: f64,
    pub notes: String,
    pub difficulty_rating: u8,
}

impl Default for NewGoal {
    fn default() -> Self {
        Self {
            skill_name: String::new(),
            resource_type: ResourceType::Course,
            platform: String::new(),
            progress_status: ProgressStatus::Started,
            hours_spent: 0.0,
            notes: String::new(),
            difficulty_rating: 1,
        }
    }
}

impl NewGoal {
    /// Client-side validation. A goal that fails here is never sent.
    pub fn validate(&self) -> Result<()> {
        if self.skill_name.trim().is_empty() {
            return Err(SksError::InvalidGoal("skill name cannot be empty".to_string()));
        }
        if self.platform.trim().is_empty() {
            return Err(SksError::InvalidGoal("platform must be selected".to_string()));
        }
        if !(1..=5).contains(&self.difficulty_rating) {
            return Err(SksError::InvalidGoal(format!(
                "difficulty rating must be 1-5, got {}",
                self.difficulty_rating
            )));
        }
        if self.hours_spent < 0.0 {
            return Err(SksError::InvalidGoal("hours spent cannot be negative".to_string()));
        }
        Ok(())
    }
}

/// Partial update body. Only touched fields are serialized, so the
/// server leaves the rest alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_status: Option<ProgressStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_spent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_rating: Option<u8>,
}

impl GoalPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.progress_status.is_none()
            && self.hours_spent.is_none()
            && self.notes.is_none()
            && self.difficulty_rating.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(rating) = self.difficulty_rating {
            if !(1..=5).contains(&rating) {
                return Err(SksError::InvalidGoal(format!(
                    "difficulty rating must be 1-5, got {rating}"
                )));
            }
        }
        if let Some(hours) = self.hours_spent {
            if hours < 0.0 {
                return Err(SksError::InvalidGoal("hours spent cannot be negative".to_string()));
            }
        }
        Ok(())
    }
}

/// Session-local snapshot of the goal collection.
///
/// Insertion order is the server-returned order. The only mutation is a
/// full atomic swap; add/update/delete go through the store and are
/// followed by a refresh, so no merge logic ever runs client-side.
#[derive(Debug, Default, Clone)]
pub struct SkillCollection {
    records: Vec<SkillRecord>,
}

impl SkillCollection {
    #[must_use]
    pub const fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Swap in a fresh snapshot. Never partially visible.
    pub fn replace_all(&mut self, records: Vec<SkillRecord>) {
        self.records = records;
    }

    /// Read-only view of the current snapshot.
    #[must_use]
    pub fn current(&self) -> &[SkillRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

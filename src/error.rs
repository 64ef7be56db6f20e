use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SksError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("{op} failed: {detail}")]
    Transport { op: &'static str, detail: String },

    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    #[error("Goal not found: {0}")]
    GoalNotFound(i64),

    #[error("Dashboard aggregate unavailable: {0}")]
    DashboardUnavailable(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl SksError {
    /// Build a transport error for a named store operation.
    pub fn transport(op: &'static str, detail: impl std::fmt::Display) -> Self {
        Self::Transport {
            op,
            detail: detail.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SksError>;

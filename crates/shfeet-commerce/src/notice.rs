//! User-facing notices raised by cart and checkout operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Destructive,
}

/// A short message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub level: NoticeLevel,
}

impl Notice {
    fn build(level: NoticeLevel, title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
            level,
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::build(NoticeLevel::Info, title, None)
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::build(NoticeLevel::Success, title, None)
    }

    pub fn destructive(title: impl Into<String>) -> Self {
        Self::build(NoticeLevel::Destructive, title, None)
    }

    /// Attach a longer description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{}: {}", self.title, description),
            None => write!(f, "{}", self.title),
        }
    }
}

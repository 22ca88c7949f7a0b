//! Study workspace types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A study document accepted by the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedDocument {
    pub id: String,
    pub file_name: String,
    pub subject: String,
    pub content_type: String,
    /// Size in bytes
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
    pub owner_id: String,
}

/// Kind of study material to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Summary,
    Notes,
    Questions,
    Predictions,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Summary,
        ContentKind::Notes,
        ContentKind::Questions,
        ContentKind::Predictions,
    ];
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Summary => write!(f, "summary"),
            ContentKind::Notes => write!(f, "notes"),
            ContentKind::Questions => write!(f, "questions"),
            ContentKind::Predictions => write!(f, "predictions"),
        }
    }
}

impl std::str::FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "summary" => Ok(ContentKind::Summary),
            "notes" => Ok(ContentKind::Notes),
            "questions" => Ok(ContentKind::Questions),
            "predictions" => Ok(ContentKind::Predictions),
            _ => Err(format!("Invalid content kind: {}", s)),
        }
    }
}

/// Generated study material for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub document_id: String,
    pub kind: ContentKind,
    pub content: String,
    pub generated_at: DateTime<Utc>,
}

//! Dream record model shared by the store, query engine, and exporter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Emotion tags available when capturing a dream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Scared,
    Confused,
    Excited,
    Peaceful,
    Anxious,
    Nostalgic,
}

impl Emotion {
    /// All emotion tags in picker order.
    pub const ALL: [Emotion; 8] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Scared,
        Emotion::Confused,
        Emotion::Excited,
        Emotion::Peaceful,
        Emotion::Anxious,
        Emotion::Nostalgic,
    ];

    /// Lowercase name used on the wire and in exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Scared => "scared",
            Emotion::Confused => "confused",
            Emotion::Excited => "excited",
            Emotion::Peaceful => "peaceful",
            Emotion::Anxious => "anxious",
            Emotion::Nostalgic => "nostalgic",
        }
    }

    /// Capitalized label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Scared => "Scared",
            Emotion::Confused => "Confused",
            Emotion::Excited => "Excited",
            Emotion::Peaceful => "Peaceful",
            Emotion::Anxious => "Anxious",
            Emotion::Nostalgic => "Nostalgic",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Emotion::Happy),
            "sad" => Ok(Emotion::Sad),
            "scared" => Ok(Emotion::Scared),
            "confused" => Ok(Emotion::Confused),
            "excited" => Ok(Emotion::Excited),
            "peaceful" => Ok(Emotion::Peaceful),
            "anxious" => Ok(Emotion::Anxious),
            "nostalgic" => Ok(Emotion::Nostalgic),
            _ => Err(format!("unknown emotion: {s}")),
        }
    }
}

/// Persisted dream journal entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DreamRecord {
    /// Record identifier.
    pub id: Uuid,
    /// Free-text dream description.
    pub description: String,
    /// Capture timestamp.
    pub timestamp: DateTime<Utc>,
    /// Emotion tags felt during the dream.
    pub emotions: Vec<Emotion>,
    /// Realism rating from 1 to 5.
    pub rating: u8,
}

/// Dream entry awaiting an identifier, supplied whole to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct DreamDraft {
    /// Free-text dream description.
    pub description: String,
    /// Emotion tags felt during the dream.
    pub emotions: Vec<Emotion>,
    /// Realism rating from 1 to 5.
    pub rating: u8,
    /// Capture timestamp.
    pub timestamp: DateTime<Utc>,
}

impl DreamDraft {
    /// Create a draft timestamped at the current instant.
    pub fn new(description: impl Into<String>, emotions: Vec<Emotion>, rating: u8) -> Self {
        Self {
            description: description.into(),
            emotions,
            rating,
            timestamp: Utc::now(),
        }
    }
}

//! Search/media result records consumed by the share-of-voice engine.
//!
//! Records are read from and written to a JSON array. Field names from the
//! collector output (`views`, `href`, `youtube`, `google`) are accepted as
//! aliases so older dumps load unchanged.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::RecordsError;

/// Where a result record came from.
///
/// Only [`Source::Video`] carries a view-count engagement metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[serde(alias = "youtube")]
    Video,
    #[serde(alias = "google")]
    Web,
    #[default]
    #[serde(other)]
    Other,
}

impl Source {
    /// Whether records from this source report a view count.
    #[must_use]
    pub fn carries_view_metric(self) -> bool {
        matches!(self, Source::Video)
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Video => write!(f, "video"),
            Source::Web => write!(f, "web"),
            Source::Other => write!(f, "other"),
        }
    }
}

/// One retrieved search or media result.
///
/// Rank is not stored: it is the record's position in the sequence handed to
/// the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    /// Human-readable view count such as `"1.2M views"`. Numbers are accepted
    /// and kept in their decimal string form.
    #[serde(
        default,
        alias = "views",
        deserialize_with = "deserialize_view_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub raw_view_count: Option<String>,
    #[serde(default, alias = "href", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ResultRecord {
    #[must_use]
    pub fn new(source: Source) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    #[must_use]
    pub fn with_views(mut self, views: impl Into<String>) -> Self {
        self.raw_view_count = Some(views.into());
        self
    }

    /// Lowercased `title body channel`, missing fields as empty strings.
    ///
    /// Always contains the two separating spaces, even when fields are absent.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title.as_deref().unwrap_or(""),
            self.body.as_deref().unwrap_or(""),
            self.channel.as_deref().unwrap_or(""),
        )
        .to_lowercase()
    }
}

fn deserialize_view_count<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawViews {
        Text(String),
        Count(u64),
        Float(f64),
    }

    Ok(
        Option::<RawViews>::deserialize(deserializer)?.map(|raw| match raw {
            RawViews::Text(text) => text,
            RawViews::Count(n) => n.to_string(),
            RawViews::Float(f) => f.to_string(),
        }),
    )
}

/// Read a JSON array of records from `path`, preserving order.
///
/// # Errors
///
/// Returns [`RecordsError::Io`] if the file cannot be read and
/// [`RecordsError::Json`] if it is not a JSON array of records.
pub fn load_records(path: &Path) -> Result<Vec<ResultRecord>, RecordsError> {
    let content = std::fs::read_to_string(path).map_err(|e| RecordsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| RecordsError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

/// Write `records` to `path` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`RecordsError::Json`] if serialization fails and
/// [`RecordsError::Io`] if the file cannot be written.
pub fn save_records(path: &Path, records: &[ResultRecord]) -> Result<(), RecordsError> {
    let json = serde_json::to_string_pretty(records).map_err(|e| RecordsError::Json {
        path: path.display().to_string(),
        source: e,
    })?;

    std::fs::write(path, json).map_err(|e| RecordsError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

use crate::types::Content;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Where a saved example ends up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveMode {
    #[default]
    Database,
    Json,
}

impl SaveMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SaveMode::Database => "database",
            SaveMode::Json => "json",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "json" => SaveMode::Json,
            _ => SaveMode::Database,
        }
    }
}

impl fmt::Display for SaveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body sent to the examples API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExamplePayload {
    pub name: String,
    pub description: String,
    pub messages: Vec<Content>,
    pub tags: Vec<String>,
    pub is_global: bool,
    pub is_eval: bool,
    pub readable_by_user_ids: Vec<String>,
    pub readable_by_group_ids: Vec<String>,
}

impl ExamplePayload {
    /// Builds a payload from dialog fields. Messages are filtered here, and a
    /// blank name falls back to a timestamped placeholder.
    pub fn build(name: &str, description: &str, tags: &[String], messages: &[Content]) -> Self {
        Self::build_at(name, description, tags, messages, current_millis())
    }

    pub fn build_at(
        name: &str,
        description: &str,
        tags: &[String],
        messages: &[Content],
        now_millis: i128,
    ) -> Self {
        let name = if name.trim().is_empty() {
            placeholder_name(now_millis)
        } else {
            name.to_string()
        };
        Self {
            name,
            description: description.to_string(),
            messages: filter_messages(messages),
            tags: tags.to_vec(),
            is_global: true,
            is_eval: false,
            readable_by_user_ids: Vec::new(),
            readable_by_group_ids: Vec::new(),
        }
    }
}

/// Drops chunks whose text is blank, then messages left without chunks.
pub fn filter_messages(messages: &[Content]) -> Vec<Content> {
    messages
        .iter()
        .filter_map(|message| {
            let chunks: Vec<_> = message
                .chunks
                .iter()
                .filter(|chunk| chunk.has_text())
                .cloned()
                .collect();
            if chunks.is_empty() {
                None
            } else {
                Some(Content { chunks })
            }
        })
        .collect()
}

/// Splits the comma-separated tags field. Order is preserved; duplicates are not merged.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn format_tags(tags: &[String]) -> String {
    tags.join(", ")
}

pub fn placeholder_name(now_millis: i128) -> String {
    format!("Example {}", now_millis)
}

fn current_millis() -> i128 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

/// Kind tag carried by every chunk.
///
/// Older conversation dumps store the kind as its ordinal, newer ones as the
/// upper-case label. Both forms are accepted on input; the label is always
/// written back out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    #[default]
    Content,
    ToolCall,
    ToolResult,
    Reasoning,
}

impl ChunkKind {
    pub const ALL: [ChunkKind; 4] = [
        ChunkKind::Content,
        ChunkKind::ToolCall,
        ChunkKind::ToolResult,
        ChunkKind::Reasoning,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChunkKind::Content => "CONTENT",
            ChunkKind::ToolCall => "TOOL_CALL",
            ChunkKind::ToolResult => "TOOL_RESULT",
            ChunkKind::Reasoning => "REASONING",
        }
    }

    pub fn ordinal(self) -> u64 {
        match self {
            ChunkKind::Content => 0,
            ChunkKind::ToolCall => 1,
            ChunkKind::ToolResult => 2,
            ChunkKind::Reasoning => 3,
        }
    }

    pub fn from_ordinal(ordinal: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.ordinal() == ordinal)
    }

    /// Human-facing name used by the conversation preview.
    pub fn display_name(self) -> &'static str {
        match self {
            ChunkKind::Content => "Content",
            ChunkKind::ToolCall => "Tool call",
            ChunkKind::ToolResult => "Tool result",
            ChunkKind::Reasoning => "Reasoning",
        }
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chunk kind: {0}")]
pub struct UnknownChunkKind(pub String);

impl FromStr for ChunkKind {
    type Err = UnknownChunkKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownChunkKind(trimmed.to_string()))
    }
}

impl Serialize for ChunkKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawChunkKind {
    Ordinal(u64),
    Label(String),
}

impl<'de> Deserialize<'de> for ChunkKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawChunkKind::deserialize(deserializer)? {
            RawChunkKind::Ordinal(ordinal) => ChunkKind::from_ordinal(ordinal).ok_or_else(|| {
                de::Error::custom(format!("unknown chunk kind ordinal: {}", ordinal))
            }),
            RawChunkKind::Label(label) => label.parse().map_err(de::Error::custom),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    #[serde(default)]
    pub kind: ChunkKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Chunk {
    pub fn new(kind: ChunkKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: Some(text.into()),
        }
    }

    pub fn content(text: impl Into<String>) -> Self {
        Self::new(ChunkKind::Content, text)
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// True when the chunk carries something other than whitespace.
    pub fn has_text(&self) -> bool {
        !self.text().trim().is_empty()
    }
}

/// One message of a conversation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub chunks: Vec<Chunk>,
}

impl Content {
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_accepts_label_and_ordinal() {
        let by_label: ChunkKind = serde_json::from_str(r#""TOOL_CALL""#).unwrap();
        let by_ordinal: ChunkKind = serde_json::from_str("1").unwrap();
        assert_eq!(by_label, ChunkKind::ToolCall);
        assert_eq!(by_ordinal, ChunkKind::ToolCall);
    }

    #[test]
    fn test_kind_label_is_case_insensitive() {
        let kind: ChunkKind = serde_json::from_str(r#""content""#).unwrap();
        assert_eq!(kind, ChunkKind::Content);
    }

    #[test]
    fn test_kind_rejects_unknown_values() {
        assert!(serde_json::from_str::<ChunkKind>("7").is_err());
        assert!(serde_json::from_str::<ChunkKind>(r#""IMAGE""#).is_err());
    }

    #[test]
    fn test_kind_serializes_as_label() {
        let json = serde_json::to_string(&ChunkKind::ToolResult).unwrap();
        assert_eq!(json, r#""TOOL_RESULT""#);
    }

    #[test]
    fn test_chunk_defaults_missing_fields() {
        let chunk: Chunk = serde_json::from_str("{}").unwrap();
        assert_eq!(chunk.kind, ChunkKind::Content);
        assert_eq!(chunk.text(), "");
        assert!(!chunk.has_text());
    }

    #[test]
    fn test_chunk_without_text_omits_field() {
        let chunk = Chunk {
            kind: ChunkKind::Reasoning,
            text: None,
        };
        let json = serde_json::to_value(&chunk).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "REASONING" }));
    }
}

use crate::types::Content;
use serde::Deserialize;
use serde_json::Value;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::Path};

/// A conversation loaded into the host view, plus the optional name and tags
/// that seed the save dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conversation {
    pub name: Option<String>,
    pub tags: Vec<String>,
    pub messages: Vec<Content>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConversationError {
    #[error("Conversation is empty")]
    Empty,

    #[error("Conversation must be a message list or an object with `messages`")]
    Shape,

    #[error("Invalid conversation JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read conversation file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Deserialize)]
struct ConversationDocument {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    messages: Vec<Content>,
}

/// Accepts a bare message list or an object carrying the messages.
pub fn parse_conversation(raw: &str) -> Result<Conversation, ConversationError> {
    if raw.trim().is_empty() {
        return Err(ConversationError::Empty);
    }

    let conversation = match serde_json::from_str::<Value>(raw)? {
        value @ Value::Array(_) => Conversation {
            messages: serde_json::from_value(value)?,
            ..Conversation::default()
        },
        value @ Value::Object(_) => {
            let document: ConversationDocument = serde_json::from_value(value)?;
            Conversation {
                name: document.name.filter(|n| !n.trim().is_empty()),
                tags: document.tags,
                messages: document.messages,
            }
        }
        _ => return Err(ConversationError::Shape),
    };
    Ok(conversation)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_conversation(path: &Path) -> Result<Conversation, ConversationError> {
    let raw = fs::read_to_string(path)?;
    let conversation = parse_conversation(&raw)?;
    tracing::info!(
        path = %path.display(),
        messages = conversation.messages.len(),
        "loaded conversation"
    );
    Ok(conversation)
}

/// Loads the conversation named by `TRAINER_CONVERSATION`, if any.
#[cfg(not(target_arch = "wasm32"))]
pub fn startup_conversation(path: Option<&Path>) -> anyhow::Result<Option<Conversation>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let conversation = load_conversation(path)
        .with_context(|| format!("loading startup conversation from {}", path.display()))?;
    Ok(Some(conversation))
}

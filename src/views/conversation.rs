use crate::conversation::{Conversation, parse_conversation};
use crate::types::{Chunk, Content};
use crate::views::shared::markdown_to_html;
use dioxus::{events::FormEvent, prelude::*};

/// Paste-in loader for conversation JSON.
#[component]
pub fn ConversationLoader(conversation: Signal<Conversation>) -> Element {
    let mut raw = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut conversation = conversation;

    let on_load = move |_| match parse_conversation(&raw()) {
        Ok(parsed) => {
            tracing::info!(messages = parsed.messages.len(), "conversation loaded from input");
            conversation.set(parsed);
            error.set(None);
            raw.set(String::new());
        }
        Err(err) => {
            tracing::warn!(error = %err, "rejected conversation input");
            error.set(Some(err.to_string()));
        }
    };

    rsx! {
        div { class: "loader",
            textarea {
                class: "loader-input",
                rows: "4",
                placeholder: "Paste conversation JSON",
                value: "{raw}",
                oninput: move |evt: FormEvent| raw.set(evt.value()),
            }
            div { class: "hstack", style: "gap: 0.5rem; justify-content: flex-end;",
                if let Some(message) = error() {
                    span { class: "loader-error", "{message}" }
                }
                button {
                    class: "btn",
                    r#type: "button",
                    disabled: raw().trim().is_empty(),
                    onclick: on_load,
                    "Load"
                }
            }
        }
    }
}

#[component]
pub fn ConversationView(messages: Vec<Content>) -> Element {
    if messages.is_empty() {
        return rsx! {
            p { class: "text-muted", "No conversation loaded yet. Paste one above to get started." }
        };
    }

    rsx! {
        div { class: "conversation",
            for (i, message) in messages.iter().enumerate() {
                div { key: "{i}", class: "message-card",
                    span { class: "message-index", "#{i + 1}" }
                    if message.chunks.is_empty() {
                        span { class: "chunk-empty", "Empty message" }
                    }
                    for (j, chunk) in message.chunks.iter().enumerate() {
                        ChunkView { key: "{i}-{j}", chunk: chunk.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ChunkView(chunk: Chunk) -> Element {
    let kind = chunk.kind;
    let class_suffix = if chunk.has_text() { "" } else { "chunk-blank" };

    rsx! {
        div { class: format_args!("chunk chunk-{} {}", kind.label().to_lowercase(), class_suffix),
            span { class: "tag-pill tag-pill-compact", "{kind.display_name()}" }
            if chunk.has_text() {
                div { class: "md", dangerous_inner_html: "{markdown_to_html(chunk.text())}" }
            } else {
                div { class: "chunk-empty", "No text (excluded when saving)" }
            }
        }
    }
}

use crate::conversation::Conversation;
use crate::toast::Toast;
use crate::views::{ConversationLoader, ConversationView, SaveDialog, Toaster};
use crate::views::shared::pluralize;
use dioxus::prelude::*;

const TRAINER_CSS: Asset = asset!("/assets/trainer.css");

#[component]
pub fn App() -> Element {
    let conversation = use_signal(initial_conversation);
    let toasts = use_signal(Vec::<Toast>::new);

    let current = conversation();
    let summary = pluralize(current.messages.len(), "message", "messages");

    rsx! {
        document::Link { rel: "stylesheet", href: TRAINER_CSS }
        AppHeader {
            title: current.name.clone().unwrap_or_else(|| "Untitled conversation".to_string()),
            summary,
        }
        div { class: "main-container",
            ConversationLoader { conversation }
            ConversationView { messages: current.messages.clone() }
            div { class: "actions-bar",
                SaveDialog {
                    messages: current.messages.clone(),
                    tags: current.tags.clone(),
                    example_name: current.name.clone().unwrap_or_default(),
                    toasts,
                }
            }
        }
        Toaster { toasts }
    }
}

#[component]
fn AppHeader(title: String, summary: String) -> Element {
    rsx! {
        div { class: "header no-divider",
            div { class: "header-content",
                h1 { class: "header-title", "Tool Trainer" }
                div { class: "header-meta",
                    span { class: "header-conversation", "{title}" }
                    span { class: "text-muted", "{summary}" }
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn initial_conversation() -> Conversation {
    let path = crate::config::settings().conversation_path.as_deref();
    match crate::conversation::startup_conversation(path) {
        Ok(conversation) => conversation.unwrap_or_default(),
        Err(err) => {
            tracing::warn!("could not load startup conversation: {:#}", err);
            Conversation::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn initial_conversation() -> Conversation {
    Conversation::default()
}

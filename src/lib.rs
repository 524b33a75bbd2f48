pub mod api;
pub mod config;
pub mod conversation;
pub mod dialog;
pub mod example;
pub mod toast;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;

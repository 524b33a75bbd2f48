pub mod conversation;
pub mod save_dialog;
pub mod shared;
pub mod toaster;

pub use conversation::{ConversationLoader, ConversationView};
pub use save_dialog::SaveDialog;
pub use toaster::Toaster;

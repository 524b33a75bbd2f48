//! Toast notifications raised by the dialog.

use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub created_at: OffsetDateTime,
}

impl Toast {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        variant: ToastVariant,
    ) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            title: title.into(),
            description: description.into(),
            variant,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn success(description: impl Into<String>) -> Self {
        Self::new("Success", description, ToastVariant::Default)
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self::new("Error", description, ToastVariant::Destructive)
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Fire-and-forget sink for toasts.
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

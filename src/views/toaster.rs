use crate::toast::{Notifier, Toast};
use crate::views::shared::format_local_time;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;

const TOAST_DISMISS_DELAY: Duration = Duration::from_secs(5);

impl Notifier for Signal<Vec<Toast>> {
    fn notify(&self, toast: Toast) {
        let mut queue = *self;
        queue.with_mut(|toasts| toasts.push(toast));
    }
}

#[component]
pub fn Toaster(toasts: Signal<Vec<Toast>>) -> Element {
    use_toast_dismiss(toasts);

    let snapshot = toasts();

    rsx! {
        div { class: "toaster", role: "status", aria_live: "polite",
            for toast in snapshot.iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: format_args!(
                        "toast {}",
                        if toast.is_destructive() { "toast-destructive" } else { "" }
                    ),
                    onclick: {
                        let id = toast.id;
                        let mut toasts = toasts;
                        move |_| toasts.with_mut(|list| list.retain(|t| t.id != id))
                    },
                    div { class: "toast-header",
                        strong { class: "toast-title", "{toast.title}" }
                        span { class: "toast-time", "{format_local_time(toast.created_at)}" }
                    }
                    p { class: "toast-description", "{toast.description}" }
                }
            }
        }
    }
}

// One timer per toast. A toast already dismissed by click makes its timer a
// no-op.
fn use_toast_dismiss(toasts: Signal<Vec<Toast>>) {
    let scheduled = use_hook(|| Rc::new(RefCell::new(HashSet::<u64>::new())));

    use_effect(move || {
        let ids: Vec<u64> = toasts.read().iter().map(|toast| toast.id).collect();
        for id in unscheduled(&mut scheduled.borrow_mut(), &ids) {
            let mut queue = toasts;
            spawn(async move {
                tokio::time::sleep(TOAST_DISMISS_DELAY).await;
                queue.with_mut(|list| list.retain(|toast| toast.id != id));
            });
        }
    });
}

/// Marks queued ids as scheduled and returns the ones that were not yet.
/// Ids no longer queued are forgotten.
fn unscheduled(scheduled: &mut HashSet<u64>, queued: &[u64]) -> Vec<u64> {
    scheduled.retain(|id| queued.contains(id));
    queued
        .iter()
        .copied()
        .filter(|id| scheduled.insert(*id))
        .collect()
}

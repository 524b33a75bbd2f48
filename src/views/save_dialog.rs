use crate::api::HttpExamplesApi;
use crate::dialog::{DialogSeed, SaveDialogState};
use crate::example::SaveMode;
use crate::toast::Toast;
use crate::types::Content;
use crate::views::shared::pluralize;
use dioxus::{events::FormEvent, prelude::*};

#[component]
pub fn SaveDialog(
    messages: Vec<Content>,
    #[props(default)] tags: Vec<String>,
    #[props(default)] example_name: String,
    toasts: Signal<Vec<Toast>>,
) -> Element {
    let seed = DialogSeed {
        example_name: Some(example_name.clone()),
        tags: Some(tags.clone()),
    };
    let mut dialog = use_signal(|| SaveDialogState::new(&seed));

    let state = dialog();
    let can_save = state.can_save(&messages);
    let message_count = pluralize(messages.len(), "message", "messages");

    let on_open = move |_| dialog.with_mut(|state| state.open(&seed));

    let on_save = {
        let messages = messages.clone();
        move |_| {
            let prepared = dialog.with_mut(|state| state.prepare_save(&messages, &toasts));
            let Ok(request) = prepared else {
                return;
            };
            let mut dialog = dialog;
            spawn(async move {
                let result = match HttpExamplesApi::from_env() {
                    Ok(api) => request.submit(&api).await,
                    Err(err) => Err(err),
                };
                if let Err(err) =
                    dialog.with_mut(|state| state.finish_save(&request, result, &toasts))
                {
                    tracing::debug!(error = %err, "save finished with error");
                }
            });
        }
    };

    rsx! {
        button {
            class: "btn btn-primary",
            r#type: "button",
            disabled: messages.is_empty(),
            onclick: on_open,
            "Save as Example"
        }
        if state.is_open {
            div { class: "dialog-overlay", role: "dialog", aria_modal: "true",
                onclick: move |_| dialog.with_mut(|state| state.close()),
                div {
                    class: "dialog-panel",
                    onclick: move |evt| evt.stop_propagation(),
                    header { class: "dialog-header",
                        h2 { class: "dialog-title", "Save Example" }
                        p { class: "text-muted", "Review and save {message_count} as a reusable example." }
                    }
                    div { class: "dialog-body",
                        div { class: "field",
                            label { for: "example-name", "Name" }
                            input {
                                id: "example-name",
                                r#type: "text",
                                placeholder: "Enter example name",
                                value: "{state.name}",
                                disabled: state.is_saving,
                                oninput: move |evt: FormEvent| dialog.with_mut(|state| state.name = evt.value()),
                            }
                        }
                        div { class: "field",
                            label { for: "example-description", "Description" }
                            textarea {
                                id: "example-description",
                                rows: "3",
                                placeholder: "Describe what this example demonstrates",
                                value: "{state.description}",
                                disabled: state.is_saving,
                                oninput: move |evt: FormEvent| dialog.with_mut(|state| state.description = evt.value()),
                            }
                        }
                        div { class: "field",
                            label { for: "example-tags", "Tags" }
                            input {
                                id: "example-tags",
                                r#type: "text",
                                placeholder: "Comma-separated tags",
                                value: "{state.tags_input()}",
                                disabled: state.is_saving,
                                onchange: move |evt: FormEvent| dialog.with_mut(|state| state.set_tags_input(&evt.value())),
                            }
                        }
                        div { class: "field",
                            label { for: "save-mode", "Save to" }
                            select {
                                id: "save-mode",
                                value: state.save_mode.as_str(),
                                disabled: state.is_saving,
                                onchange: move |evt: FormEvent| {
                                    let mode = SaveMode::from_value(&evt.value());
                                    dialog.with_mut(|state| state.save_mode = mode);
                                },
                                option { value: "database", "Database" }
                                option { value: "json", "JSON file" }
                            }
                        }
                        if state.needs_file_path() {
                            div { class: "field",
                                label { for: "example-file-path", "File path" }
                                input {
                                    id: "example-file-path",
                                    r#type: "text",
                                    placeholder: "examples/my_example.json",
                                    value: "{state.file_path}",
                                    disabled: state.is_saving,
                                    oninput: move |evt: FormEvent| dialog.with_mut(|state| state.file_path = evt.value()),
                                }
                            }
                        }
                    }
                    footer { class: "dialog-footer",
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            disabled: state.is_saving,
                            onclick: move |_| dialog.with_mut(|state| state.close()),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: !can_save,
                            onclick: on_save,
                            if state.is_saving { "Saving…" } else { "Save" }
                        }
                    }
                }
            }
        }
    }
}

//! Reusable form input components.

use dioxus::html::HasFileData;
use dioxus::prelude::*;

use crate::app::browser;
use crate::forms::{Field, ResumeFile};

const RESUME_INPUT_ID: &str = "resume";

/// A labeled single-line input bound to a draft field.
#[component]
pub fn TextField(
    /// Which draft field this edits; also the `id`/`name`
    field: Field,
    /// Input label
    label: &'static str,
    /// Current value
    value: String,
    /// HTML input type
    #[props(default = "text")]
    input_type: &'static str,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default = true)] required: bool,
    #[props(default = false)] disabled: bool,
    /// Called with the raw value on every keystroke
    on_input: EventHandler<String>,
) -> Element {
    let id = field.as_str();

    rsx! {
        div { class: "form-field",
            label { r#for: id, class: "form-label", "{label}" }
            input {
                id: id,
                name: id,
                class: "form-input",
                r#type: input_type,
                value: "{value}",
                maxlength: field.max_len() as i64,
                placeholder: placeholder,
                required: required,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

/// A labeled multi-line input bound to a draft field.
#[component]
pub fn TextAreaField(
    field: Field,
    label: &'static str,
    value: String,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default = 5)] rows: i64,
    #[props(default = false)] disabled: bool,
    on_input: EventHandler<String>,
) -> Element {
    let id = field.as_str();

    rsx! {
        div { class: "form-field",
            label { r#for: id, class: "form-label", "{label}" }
            textarea {
                id: id,
                name: id,
                class: "form-input",
                rows: rows,
                maxlength: field.max_len() as i64,
                placeholder: placeholder,
                required: true,
                disabled: disabled,
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

/// PDF picker with a drop zone. Only metadata is read; checks happen in the
/// draft. `on_select` reports whether the file was accepted; a rejected file
/// is cleared from the picker.
#[component]
pub fn ResumeUpload(
    label: &'static str,
    button_label: &'static str,
    drop_hint: &'static str,
    hint: &'static str,
    /// Name of the accepted file, empty when none
    file_name: String,
    #[props(default = false)] disabled: bool,
    on_select: Callback<ResumeFile, bool>,
) -> Element {
    let mut dragging = use_signal(|| false);

    let choose = move |file: ResumeFile| {
        if !on_select.call(file) {
            browser::clear_file_input(RESUME_INPUT_ID);
        }
    };

    let zone_class = if dragging() {
        "upload-zone is-dragging"
    } else {
        "upload-zone"
    };

    rsx! {
        div { class: "form-field",
            span { class: "form-label", "{label}" }
            div {
                class: zone_class,
                ondragover: move |evt| {
                    evt.prevent_default();
                    dragging.set(true);
                },
                ondragleave: move |_| dragging.set(false),
                ondrop: move |evt| {
                    evt.prevent_default();
                    dragging.set(false);
                    if let Some(file) = evt.files().into_iter().next() {
                        choose(ResumeFile::new(file.name(), file.content_type().as_deref(), file.size()));
                    }
                },
                label { r#for: RESUME_INPUT_ID, class: "upload-button",
                    span { "{button_label}" }
                    input {
                        id: RESUME_INPUT_ID,
                        name: RESUME_INPUT_ID,
                        r#type: "file",
                        accept: ".pdf",
                        class: "sr-only",
                        disabled: disabled,
                        onchange: move |evt| {
                            if let Some(file) = evt.files().into_iter().next() {
                                choose(ResumeFile::new(file.name(), file.content_type().as_deref(), file.size()));
                            }
                        },
                    }
                }
                span { class: "upload-hint", " {drop_hint}" }
                p { class: "upload-hint", "{hint}" }
                if !file_name.is_empty() {
                    p { class: "upload-file", "{file_name}" }
                }
            }
        }
    }
}

//! Careers page with the application form.

use dioxus::prelude::*;

use crate::app::components::{ErrorAlert, ResumeUpload, Reveal, TextAreaField, TextField};
use crate::app::language_context::use_language;
use crate::forms::{self, ApplicationDraft, Draft, Field, FormState, ResumeFile};
use crate::i18n::Text;

#[component]
pub fn Careers() -> Element {
    let lang = use_language();
    let mut form = use_signal(FormState::<ApplicationDraft>::new);
    let mut submit_failed = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        submit_failed.set(false);
        let Some(application) = form.write().begin_submit() else {
            return;
        };
        spawn(async move {
            let result = forms::submit(application).await;
            submit_failed.set(result.is_err());
            form.write().finish(result);
        });
    };

    let on_resume = move |file: ResumeFile| form.write().choose_resume(file);

    let state = form.read().clone();
    let busy = state.is_submitting();

    rsx! {
        section { class: "page careers",
            Reveal { class: "container container-narrow",
                div { class: "section-header",
                    h1 { {lang.text(Text::CareersHeading)} }
                    p { class: "section-intro", {lang.text(Text::CareersIntro)} }
                }

                if state.is_submitted() {
                    div { class: "thank-you", role: "status",
                        span { class: "thank-you-icon", "✓" }
                        h2 { {lang.text(Text::ThankYouTitle)} }
                        p { {lang.text(Text::ThankYouBody)} }
                    }
                } else {
                    form { class: "form card", onsubmit: onsubmit,
                        if let Some(error) = state.error() {
                            ErrorAlert {
                                message: lang.text(error.text()).to_string(),
                                on_dismiss: move |_| form.write().dismiss_error(),
                            }
                        }
                        if submit_failed() {
                            ErrorAlert {
                                message: lang.text(Text::SubmitFailed).to_string(),
                                on_dismiss: move |_| submit_failed.set(false),
                            }
                        }

                        TextField {
                            field: Field::Name,
                            label: lang.text(Text::FullNameRequired),
                            value: state.draft.value(Field::Name).to_string(),
                            disabled: busy,
                            on_input: move |value: String| form.write().input(Field::Name, &value),
                        }
                        TextField {
                            field: Field::Email,
                            label: lang.text(Text::EmailRequired),
                            input_type: "email",
                            value: state.draft.value(Field::Email).to_string(),
                            disabled: busy,
                            on_input: move |value: String| form.write().input(Field::Email, &value),
                        }
                        TextField {
                            field: Field::Linkedin,
                            label: lang.text(Text::LinkedinOptional),
                            input_type: "url",
                            value: state.draft.value(Field::Linkedin).to_string(),
                            placeholder: "https://linkedin.com/in/your-profile",
                            required: false,
                            disabled: busy,
                            on_input: move |value: String| form.write().input(Field::Linkedin, &value),
                        }
                        TextAreaField {
                            field: Field::Message,
                            label: lang.text(Text::MessageRequired),
                            value: state.draft.value(Field::Message).to_string(),
                            placeholder: lang.text(Text::MessagePlaceholder),
                            disabled: busy,
                            on_input: move |value: String| form.write().input(Field::Message, &value),
                        }
                        ResumeUpload {
                            label: lang.text(Text::UploadResume),
                            button_label: lang.text(Text::UploadFile),
                            drop_hint: lang.text(Text::DragAndDrop),
                            hint: lang.text(Text::ResumeHint),
                            file_name: state.draft.resume_name().to_string(),
                            disabled: busy,
                            on_select: on_resume,
                        }

                        button { r#type: "submit", class: "btn btn-primary btn-block", disabled: busy,
                            if busy {
                                {lang.text(Text::Submitting)}
                            } else {
                                {lang.text(Text::SubmitApplication)}
                            }
                        }
                    }
                }
            }
        }
    }
}

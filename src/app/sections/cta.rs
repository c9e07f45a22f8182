//! "Join Now" call to action and its contact modal.

use dioxus::prelude::*;

use crate::app::components::{ErrorAlert, Reveal, TextField};
use crate::app::language_context::use_language;
use crate::content::CTA_BENEFITS;
use crate::forms::{self, ContactDraft, Draft, Field, FormState};
use crate::i18n::Text;

#[component]
pub fn Cta() -> Element {
    let lang = use_language();
    let locale = lang.get();
    let mut show_modal = use_signal(|| false);

    rsx! {
        section { class: "section cta",
            Reveal { class: "container cta-inner",
                span { class: "cta-badge", {lang.text(Text::CtaBadge)} }
                h2 { class: "cta-heading",
                    {lang.text(Text::CtaHeadingLead)}
                    " "
                    span { class: "gradient-text", {lang.text(Text::CtaHeadingEmphasis)} }
                }
                p { class: "section-intro", {lang.text(Text::CtaBody)} }
                ul { class: "cta-benefits",
                    for benefit in CTA_BENEFITS.iter() {
                        li { key: "{benefit.en}", class: "cta-benefit", {benefit.get(locale)} }
                    }
                }
                p { class: "cta-ecosystem",
                    strong { {lang.text(Text::CtaEcosystemLead)} }
                    " "
                    {lang.text(Text::CtaEcosystemPoints)}
                }
                button { r#type: "button", class: "btn btn-primary btn-lg", onclick: move |_| show_modal.set(true),
                    {lang.text(Text::CtaJoinNow)}
                }
                p { class: "cta-pitch", {lang.text(Text::CtaJoinPitch)} }
            }
        }

        if show_modal() {
            JoinModal { on_close: move |_| show_modal.set(false) }
        }
    }
}

/// Contact form. The draft lives and dies with the modal.
#[component]
fn JoinModal(on_close: EventHandler<()>) -> Element {
    let lang = use_language();
    let mut form = use_signal(FormState::<ContactDraft>::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(request) = form.write().begin_submit() else {
            return;
        };
        spawn(async move {
            let result = forms::submit(request).await;
            let accepted = result.is_ok();
            form.write().finish(result);
            if accepted {
                on_close.call(());
            }
        });
    };

    let state = form.read().clone();
    let busy = state.is_submitting();

    rsx! {
        div { class: "modal-backdrop",
            div {
                class: "modal",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": "join-modal-title",
                button {
                    r#type: "button",
                    class: "modal-close",
                    "aria-label": lang.text(Text::CloseModal),
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                h3 { id: "join-modal-title", class: "modal-title", {lang.text(Text::ModalTitle)} }
                p { class: "modal-body", {lang.text(Text::ModalBody)} }

                if let Some(error) = state.error() {
                    ErrorAlert {
                        message: lang.text(error.text()).to_string(),
                        on_dismiss: move |_| form.write().dismiss_error(),
                    }
                }

                form { class: "form", onsubmit: onsubmit,
                    TextField {
                        field: Field::Name,
                        label: lang.text(Text::FullName),
                        value: state.draft.value(Field::Name).to_string(),
                        placeholder: "John Doe",
                        disabled: busy,
                        on_input: move |value: String| form.write().input(Field::Name, &value),
                    }
                    TextField {
                        field: Field::Email,
                        label: lang.text(Text::BusinessEmail),
                        input_type: "email",
                        value: state.draft.value(Field::Email).to_string(),
                        placeholder: "john@company.com",
                        disabled: busy,
                        on_input: move |value: String| form.write().input(Field::Email, &value),
                    }
                    TextField {
                        field: Field::Company,
                        label: lang.text(Text::CompanyName),
                        value: state.draft.value(Field::Company).to_string(),
                        placeholder: "Your Company",
                        disabled: busy,
                        on_input: move |value: String| form.write().input(Field::Company, &value),
                    }
                    button { r#type: "submit", class: "btn btn-primary btn-block", disabled: busy,
                        if busy {
                            {lang.text(Text::Submitting)}
                        } else {
                            {lang.text(Text::SubmitRequest)}
                        }
                    }
                }
            }
        }
    }
}

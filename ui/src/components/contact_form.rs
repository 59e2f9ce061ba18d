use dioxus::prelude::*;

use crate::site::use_site;

/// Contact form. Its state lives in the site context, so a submission that is
/// still running when the user navigates away completes anyway.
#[component]
pub fn ContactForm() -> Element {
    let site = use_site();
    let mut form = site.contact;

    let on_submit = {
        let site = site.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            site.submit_contact();
        }
    };

    let page = site.page.read();
    let heading = page.markup("contact-title");
    let intro = page.markup("contact-intro");
    let name_label = page.markup("form-name");
    let email_label = page.markup("form-email");
    let subject_label = page.markup("form-subject");
    let message_label = page.markup("form-message");
    let send_label = page.markup("form-send");
    drop(page);

    let state = form.read();
    let draft = state.draft.clone();
    let disabled = state.button.disabled();
    let button_label = state.button.label(&send_label).to_string();
    drop(state);

    rsx! {
        div { class: "contact",
            h2 { class: "contact__title", dangerous_inner_html: "{heading}" }
            p { class: "contact__intro", dangerous_inner_html: "{intro}" }

            form { id: "contactForm", class: "contact__form", onsubmit: on_submit,
                div { class: "contact__field",
                    label { r#for: "contact-name", dangerous_inner_html: "{name_label}" }
                    input {
                        id: "contact-name",
                        name: "name",
                        r#type: "text",
                        class: "form-control",
                        required: true,
                        value: "{draft.name}",
                        oninput: move |evt| form.with_mut(|f| f.draft.name = evt.value()),
                    }
                }
                div { class: "contact__field",
                    label { r#for: "contact-email", dangerous_inner_html: "{email_label}" }
                    input {
                        id: "contact-email",
                        name: "email",
                        r#type: "email",
                        class: "form-control",
                        required: true,
                        value: "{draft.email}",
                        oninput: move |evt| form.with_mut(|f| f.draft.email = evt.value()),
                    }
                }
                div { class: "contact__field",
                    label { r#for: "contact-subject", dangerous_inner_html: "{subject_label}" }
                    input {
                        id: "contact-subject",
                        name: "subject",
                        r#type: "text",
                        class: "form-control",
                        value: "{draft.subject}",
                        oninput: move |evt| form.with_mut(|f| f.draft.subject = evt.value()),
                    }
                }
                div { class: "contact__field",
                    label { r#for: "contact-message", dangerous_inner_html: "{message_label}" }
                    textarea {
                        id: "contact-message",
                        name: "message",
                        class: "form-control",
                        rows: "5",
                        required: true,
                        value: "{draft.message}",
                        oninput: move |evt| form.with_mut(|f| f.draft.message = evt.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary contact__submit",
                    disabled,
                    dangerous_inner_html: "{button_label}",
                }
            }
        }
    }
}

use log::{debug, info, warn};
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::IconSvg;
use crate::content::{ContactEntry, CONTACT_ENTRIES, CONTACT_INTRO, CONTACT_TITLE};
use crate::state::Section;

/// What the visitor has typed into the contact form so far.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactDraft {
    pub fn with_field(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Message => next.message = value,
        }
        next
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

/// There is no endpoint behind the form; a submission is only logged.
fn submit_draft(draft: &ContactDraft) {
    info!("Contact form submitted, no endpoint configured (complete: {})", draft.is_complete());
    match serde_json::to_string(draft) {
        Ok(payload) => debug!("Discarded contact payload: {}", payload),
        Err(e) => warn!("Could not serialize contact draft: {}", e),
    }
}

fn contact_entry(entry: &ContactEntry) -> Html {
    html! {
        <div key={entry.label} class="contact-entry">
            <div class="accent-purple">
                <IconSvg icon={entry.icon} />
            </div>
            <div>
                <div class="contact-entry__label">{entry.label}</div>
                <div class="contact-entry__value">{entry.value}</div>
            </div>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let draft = use_state(ContactDraft::default);

    let update = |field: ContactField| {
        let draft = draft.clone();
        Callback::from(move |value: String| draft.set(draft.with_field(field, value)))
    };

    let on_input = |field: ContactField| {
        let update = update(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update.emit(input.value());
        })
    };

    let on_message_input = {
        let update = update(ContactField::Message);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            update.emit(area.value());
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit_draft(&draft);
        })
    };

    html! {
        <section id={Section::Contact.id()} class="page-section page-section--tinted">
            <div class="section-inner section-inner--narrow">
                <div class="section-header">
                    <h2 class="gradient-text">{CONTACT_TITLE}</h2>
                    <p>{CONTACT_INTRO}</p>
                </div>

                <div class="contact-grid">
                    <div>
                        <h3 class="contact-heading">{"Get in Touch"}</h3>
                        <div class="contact-entries">
                            { for CONTACT_ENTRIES.iter().map(contact_entry) }
                        </div>
                    </div>

                    <form class="contact-form" onsubmit={onsubmit}>
                        <input
                            type="text"
                            placeholder="Your Name"
                            value={draft.name.clone()}
                            oninput={on_input(ContactField::Name)}
                        />
                        <input
                            type="email"
                            placeholder="Your Email"
                            value={draft.email.clone()}
                            oninput={on_input(ContactField::Email)}
                        />
                        <textarea
                            rows="5"
                            placeholder="Tell us about your project..."
                            value={draft.message.clone()}
                            oninput={on_message_input}
                        />
                        <button type="submit" class="contact-form__submit">{"Send Message"}</button>
                    </form>
                </div>
            </div>

            <style>
                {r#"
                .section-inner--narrow {
                    max-width: 56rem;
                }

                .contact-grid {
                    display: grid;
                    gap: 3rem;
                }

                .contact-heading {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin: 0 0 2rem;
                    color: #e2e8f0;
                }

                .contact-entries {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .contact-entry {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .contact-entry__label {
                    color: #94a3b8;
                    font-size: 0.875rem;
                }

                .contact-entry__value {
                    color: #e2e8f0;
                    font-weight: 500;
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .contact-form input,
                .contact-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    background: rgba(51, 65, 85, 0.5);
                    border: 1px solid #475569;
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    color: #e2e8f0;
                    font: inherit;
                    transition: border-color 0.2s ease;
                }

                .contact-form textarea {
                    resize: none;
                }

                .contact-form input::placeholder,
                .contact-form textarea::placeholder {
                    color: #94a3b8;
                }

                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: #c084fc;
                }

                .contact-form__submit {
                    width: 100%;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 8px;
                    background: linear-gradient(90deg, #9333ea, #db2777);
                    color: white;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .contact-form__submit:hover {
                    transform: scale(1.05);
                    background: linear-gradient(90deg, #7e22ce, #be185d);
                }

                @media (min-width: 768px) {
                    .contact-grid { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}

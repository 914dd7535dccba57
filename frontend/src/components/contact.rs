use yew::prelude::*;
use log::debug;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::components::notification::{Notice, Toast};
use crate::contact_form::{ContactForm, Field};
use crate::navigation::SectionId;
use crate::reveal::Reveal;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_state(ContactForm::default);
    let notice = use_state(|| None::<Notice>);
    let serial = use_state(|| 0u32);

    let update = {
        let form = form.clone();
        Callback::from(move |(field, value): (Field, String)| {
            let mut next = (*form).clone();
            next.update(field, value);
            form.set(next);
        })
    };

    // The browser has already checked the required fields at this point.
    let onsubmit = {
        let form = form.clone();
        let notice = notice.clone();
        let serial = serial.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            notice.set(Some(next.submit()));
            serial.set(*serial + 1);
            form.set(next);
            debug!("Booking request submitted");
        })
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    let field_input = |field: Field| {
        let update = update.clone();
        let value = form.get(field).to_string();
        let input = if field == Field::Message {
            html! {
                <textarea
                    id={field_id(field)}
                    value={value}
                    placeholder={field.placeholder()}
                    required={field.required()}
                    oninput={move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        update.emit((field, input.value()));
                    }}
                />
            }
        } else {
            html! {
                <input
                    id={field_id(field)}
                    type="text"
                    value={value}
                    placeholder={field.placeholder()}
                    required={field.required()}
                    oninput={move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        update.emit((field, input.value()));
                    }}
                />
            }
        };
        html! {
            <div class="form-field">
                <label for={field_id(field)}>{field.label()}</label>
                {input}
            </div>
        }
    };

    html! {
        <section id={SectionId::Contact.as_str()} class="section">
            <style>
                {r#"
                    .contact-card {
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .form-field {
                        margin-bottom: 1.5rem;
                    }
                    .form-field label {
                        display: block;
                        font-size: 0.9rem;
                        font-weight: 500;
                        margin-bottom: 0.5rem;
                    }
                    .form-field input,
                    .form-field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        border: 1px solid #e8e1d7;
                        border-radius: 12px;
                        font: inherit;
                        background: var(--background);
                    }
                    .form-field input {
                        height: 3rem;
                    }
                    .form-field textarea {
                        min-height: 8rem;
                        resize: vertical;
                    }
                    .submit-button {
                        width: 100%;
                    }
                "#}
            </style>
            <Reveal name="contact" class={classes!("container", "narrow")}>
                <h2 class="section-title">{"Book a session"}</h2>
                <p class="section-lead">
                    {"Leave a request and I will get back to you to find a convenient time"}
                </p>
                <div class="card contact-card">
                    <form onsubmit={onsubmit}>
                        { for Field::ALL.into_iter().map(field_input) }
                        <button type="submit" class="cta-button submit-button">
                            {"Send request"}
                        </button>
                    </form>
                </div>
            </Reveal>
            <Toast notice={*notice} serial={*serial} on_dismiss={on_dismiss} />
        </section>
    }
}

fn field_id(field: Field) -> &'static str {
    match field {
        Field::Name => "contact-name",
        Field::Phone => "contact-phone",
        Field::Message => "contact-message",
    }
}

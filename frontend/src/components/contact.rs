//! Contact section with the EmailJS-backed form.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use portfolio::contact::STATUS_RESET_MS;
use portfolio::{ContactFormState, Field, Section, SubmissionStatus};

use crate::config::dispatch_config;
use crate::services::send_contact;

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Your Name",
        Field::Email => "Your Email",
        Field::Subject => "Subject",
        Field::Message => "Your Message",
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let state = create_rw_signal(ContactFormState::default());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let config = dispatch_config();
        let Some(request) = state.try_update(|s| s.begin_submit(&config)).flatten() else {
            log::debug!("Contact form not sent: invalid or already sending");
            return;
        };

        spawn_local(async move {
            let outcome = send_contact(&config.endpoint, &request).await;
            let sent = outcome.is_ok();
            state.update(|s| s.finish(outcome));

            if sent {
                TimeoutFuture::new(STATUS_RESET_MS).await;
                state.update(ContactFormState::reset_status);
            }
        });
    };

    let sending = move || state.with(|s| s.status.is_sending());

    view! {
        <section id=Section::Contact.anchor() class="section">
            <h2 class="section-title">"Get In " <span class="highlight">"Touch"</span></h2>

            <form class="contact-form" on:submit=on_submit novalidate=true>
                <div class="form-row">
                    <FormField state=state field=Field::Name/>
                    <FormField state=state field=Field::Email/>
                </div>
                <FormField state=state field=Field::Subject/>
                <FormField state=state field=Field::Message/>

                {move || {
                    let status = state.with(|s| s.status);
                    status.banner().map(|text| {
                        view! {
                            <p
                                class="form-status"
                                class:success=status == SubmissionStatus::Success
                                class:error=status == SubmissionStatus::Error
                            >
                                {text}
                            </p>
                        }
                    })
                }}

                <button
                    type="submit"
                    class="btn btn-primary btn-block"
                    disabled=move || !state.with(ContactFormState::can_submit)
                >
                    {move || if sending() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </section>
    }
}

/// One labelled input bound to a form field, with its validation message.
#[component]
fn FormField(state: RwSignal<ContactFormState>, field: Field) -> impl IntoView {
    let value = move || state.with(|s| s.form.get(field).to_string());
    let on_input = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        state.update(|s| s.update_field(field, text));
    };

    let input = match field {
        Field::Message => view! {
            <textarea
                name=field.label()
                rows=6
                placeholder=placeholder(field)
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_view(),
        _ => view! {
            <input
                type=if field == Field::Email { "email" } else { "text" }
                name=field.label()
                placeholder=placeholder(field)
                prop:value=value
                on:input=on_input
            />
        }
        .into_view(),
    };

    view! {
        <div class="form-field" class:invalid=move || state.with(|s| s.error_for(field).is_some())>
            {input}
            {move || {
                state.with(|s| s.error_for(field).map(str::to_string)).map(|message| {
                    view! { <p class="field-error">{message}</p> }
                })
            }}
        </div>
    }
}

//! "Let's Talk" section: the lead-capture form and its result banners.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the shared `RwSignal<ConsultationState>`. The submit
//! handler spawns `state::consultation::submit` over the HTTP API; the
//! disabled button plus the `Submitting` guard keep at most one request in
//! flight.

#[cfg(test)]
#[path = "consultation_form_test.rs"]
mod consultation_form_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::InterestType;
use crate::state::consultation::{ConsultationState, FormField, SubmitPhase};
use crate::util::scroll::CONSULTATION_SECTION;

const INTEREST_FIELD: &str = "interest_type";
const INTEREST_PLACEHOLDER: &str = "Select an engagement type...";
const SUCCESS_TEXT: &str = "Your consultation request has been submitted. We'll be in touch shortly.";

fn submit_button_label(submitting: bool) -> &'static str {
    if submitting { "Submitting..." } else { "Request Consultation" }
}

fn interest_select_value(kind: Option<InterestType>) -> &'static str {
    kind.map_or("", InterestType::label)
}

/// Consultation form section anchored at `#consultation-form`.
#[component]
pub fn ConsultationFormSection() -> impl IntoView {
    let state = expect_context::<RwSignal<ConsultationState>>();
    let submitting = move || state.with(ConsultationState::is_submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting() {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::consultation::submit(state, &crate::net::api::HttpConsultationApi).await;
        });
    };

    let on_interest_change = move |ev: leptos::ev::Event| {
        let kind = InterestType::from_label(&event_target_value(&ev));
        state.update(|s| s.form.select_interest_type(kind));
    };

    view! {
        <section id=CONSULTATION_SECTION class="section section--bordered">
            <div class="container container--narrow">
                <div class="section-intro section-intro--centered">
                    <h2 class="section-title">"Let's Talk"</h2>
                    <p class="section-lead">
                        "Share your sustainability and operational challenges. We'll explore how we can help reduce your carbon footprint and optimize your operations."
                    </p>
                </div>

                <form class="consultation-form" on:submit=on_submit>
                    <TextField field=FormField::FullName label="Full Name" input_type="text" placeholder="John Doe"/>
                    <TextField field=FormField::CompanyName label="Company Name" input_type="text" placeholder="Acme Corp"/>
                    <TextField field=FormField::Email label="Email" input_type="email" placeholder="john@example.com"/>

                    <div class="form-field">
                        <FieldLabel field=FormField::ChallengeDescription label="Describe Your Challenge"/>
                        <textarea
                            id=FormField::ChallengeDescription.name()
                            name=FormField::ChallengeDescription.name()
                            class="form-input form-input--textarea"
                            placeholder="Tell us about your sustainability or operational challenges, and what you're hoping to achieve..."
                            required=true
                            prop:value=move || state.with(|s| s.form.challenge_description.clone())
                            on:input=move |ev| {
                                state.update(|s| s.form.update_field(FormField::ChallengeDescription, event_target_value(&ev)));
                            }
                        ></textarea>
                    </div>

                    <div class="form-field">
                        <label for=INTEREST_FIELD class="form-label">"What Are You Interested In?"</label>
                        <select
                            id=INTEREST_FIELD
                            name=INTEREST_FIELD
                            class="form-input"
                            prop:value=move || state.with(|s| interest_select_value(s.form.interest_type).to_owned())
                            on:change=on_interest_change
                        >
                            <option value="">{INTEREST_PLACEHOLDER}</option>
                            {InterestType::ALL
                                .into_iter()
                                .map(|kind| view! { <option value=kind.label()>{kind.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    {move || match state.with(|s| s.phase.clone()) {
                        SubmitPhase::Succeeded => view! {
                            <div class="banner banner--success" role="status">
                                <p class="banner__title">"Success!"</p>
                                <p class="banner__body">{SUCCESS_TEXT}</p>
                            </div>
                        }
                        .into_any(),
                        SubmitPhase::Failed(message) => view! {
                            <div class="banner banner--error" role="alert">
                                <p class="banner__title">"Something went wrong"</p>
                                <p class="banner__body">{message}</p>
                            </div>
                        }
                        .into_any(),
                        SubmitPhase::Idle | SubmitPhase::Submitting => ().into_any(),
                    }}

                    <button class="button button--primary button--block" type="submit" disabled=submitting>
                        {move || submit_button_label(submitting())}
                    </button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn FieldLabel(field: FormField, label: &'static str) -> impl IntoView {
    view! {
        <label for=field.name() class="form-label">
            {label}
            {field.is_required().then(|| view! { <span class="form-required">" *"</span> })}
        </label>
    }
}

#[component]
fn TextField(
    field: FormField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let state = expect_context::<RwSignal<ConsultationState>>();

    view! {
        <div class="form-field">
            <FieldLabel field=field label=label/>
            <input
                id=field.name()
                name=field.name()
                type=input_type
                class="form-input"
                placeholder=placeholder
                required=field.is_required()
                prop:value=move || state.with(|s| s.form.field(field).to_owned())
                on:input=move |ev| state.update(|s| s.form.update_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

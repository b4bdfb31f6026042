//! Lead-capture form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The consultation form component holds one `RwSignal<ConsultationState>`.
//! `submit` drives one attempt: `begin_submit` runs inside a signal update
//! before the request leaves, the single API call is awaited with no borrow
//! held, and `finish_submit` applies the outcome in a second update.
//!
//! DESIGN
//! ======
//! `SubmitPhase` replaces separate loading / status / message flags, so a
//! success can never carry a stale error message.

#[cfg(test)]
#[path = "consultation_test.rs"]
mod consultation_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::ConsultationApi;
use crate::net::types::{ConsultationRequest, InterestType};

/// Free-text fields of the form, addressed by their input `name`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    FullName,
    CompanyName,
    Email,
    ChallengeDescription,
}

impl FormField {
    /// Input `id`/`name` attribute, matching the stored column.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::CompanyName => "company_name",
            Self::Email => "email",
            Self::ChallengeDescription => "challenge_description",
        }
    }

    #[must_use]
    pub fn is_required(self) -> bool {
        !matches!(self, Self::CompanyName)
    }
}

/// Current field values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsultationForm {
    pub full_name: String,
    pub company_name: String,
    pub email: String,
    pub challenge_description: String,
    pub interest_type: Option<InterestType>,
}

impl ConsultationForm {
    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::CompanyName => &self.company_name,
            FormField::Email => &self.email,
            FormField::ChallengeDescription => &self.challenge_description,
        }
    }

    pub fn update_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::FullName => self.full_name = value,
            FormField::CompanyName => self.company_name = value,
            FormField::Email => self.email = value,
            FormField::ChallengeDescription => self.challenge_description = value,
        }
    }

    pub fn select_interest_type(&mut self, value: Option<InterestType>) {
        self.interest_type = value;
    }

    /// Required fields that are still empty, in form order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<FormField> {
        [FormField::FullName, FormField::Email, FormField::ChallengeDescription]
            .into_iter()
            .filter(|f| self.field(*f).is_empty())
            .collect()
    }

    /// Build the row to store; empty optional text becomes `None`.
    #[must_use]
    pub fn to_request(&self) -> ConsultationRequest {
        ConsultationRequest {
            full_name: self.full_name.clone(),
            company_name: Some(self.company_name.clone()),
            email: self.email.clone(),
            challenge_description: self.challenge_description.clone(),
            interest_type: self.interest_type,
        }
        .normalized()
    }
}

/// Where the form is in its submit lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Form values plus submit lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsultationState {
    pub form: ConsultationForm,
    pub phase: SubmitPhase,
}

impl ConsultationState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Error text to show, if the last attempt failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            SubmitPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Enter `Submitting` and hand back the request to send.
    ///
    /// Returns `None` without touching the phase when a submission is already
    /// in flight or a required field is empty.
    pub fn begin_submit(&mut self) -> Option<ConsultationRequest> {
        if self.is_submitting() || !self.form.missing_required().is_empty() {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        Some(self.form.to_request())
    }

    /// Apply the outcome of the request started by `begin_submit`.
    ///
    /// Success clears every field; failure keeps them so the user can retry.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => {
                self.form = ConsultationForm::default();
                self.phase = SubmitPhase::Succeeded;
            }
            Err(message) => self.phase = SubmitPhase::Failed(message),
        }
    }
}

/// Run one submit attempt against `api`.
///
/// Returns `false` without calling `api` when `begin_submit` refuses (empty
/// required field or a submission already in flight).
pub async fn submit<A: ConsultationApi + ?Sized>(state: RwSignal<ConsultationState>, api: &A) -> bool {
    let Some(request) = state.try_update(ConsultationState::begin_submit).flatten() else {
        return false;
    };
    let outcome = api.submit(&request).await;
    state.update(|s| s.finish_submit(outcome));
    true
}

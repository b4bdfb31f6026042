use super::*;
use crate::net::types::{STORE_FALLBACK_MESSAGE, UNEXPECTED_ERROR_MESSAGE};
use futures::executor::block_on;
use leptos::prelude::GetUntracked;
use leptos::reactive::owner::Owner;
use std::cell::RefCell;

// =============================================================
// Helpers
// =============================================================

fn filled_state() -> ConsultationState {
    let mut state = ConsultationState::default();
    state.form.update_field(FormField::FullName, "Jane Doe".to_owned());
    state.form.update_field(FormField::Email, "jane@x.com".to_owned());
    state
        .form
        .update_field(FormField::ChallengeDescription, "Reduce emissions".to_owned());
    state
}

// =============================================================
// Field bookkeeping
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = ConsultationState::default();
    assert_eq!(state.phase, SubmitPhase::Idle);
    assert_eq!(state.form, ConsultationForm::default());
    assert!(state.error_message().is_none());
}

#[test]
fn update_field_sets_only_the_named_field() {
    let mut form = ConsultationForm::default();
    form.update_field(FormField::CompanyName, "Acme Corp".to_owned());
    assert_eq!(form.company_name, "Acme Corp");
    assert_eq!(form.field(FormField::CompanyName), "Acme Corp");
    assert!(form.full_name.is_empty());
    assert!(form.email.is_empty());
}

#[test]
fn select_interest_type_sets_and_clears() {
    let mut form = ConsultationForm::default();
    form.select_interest_type(Some(InterestType::AiAutomation));
    assert_eq!(form.interest_type, Some(InterestType::AiAutomation));
    form.select_interest_type(None);
    assert_eq!(form.interest_type, None);
}

#[test]
fn field_names_match_columns() {
    assert_eq!(FormField::FullName.name(), "full_name");
    assert_eq!(FormField::ChallengeDescription.name(), "challenge_description");
    assert!(!FormField::CompanyName.is_required());
    assert!(FormField::Email.is_required());
}

#[test]
fn missing_required_lists_empty_required_fields_in_order() {
    let form = ConsultationForm::default();
    assert_eq!(
        form.missing_required(),
        vec![FormField::FullName, FormField::Email, FormField::ChallengeDescription]
    );
    assert!(filled_state().form.missing_required().is_empty());
}

#[test]
fn to_request_matches_jane_doe_scenario() {
    let request = filled_state().form.to_request();
    assert_eq!(request.full_name, "Jane Doe");
    assert_eq!(request.company_name, None);
    assert_eq!(request.email, "jane@x.com");
    assert_eq!(request.challenge_description, "Reduce emissions");
    assert_eq!(request.interest_type, None);
}

// =============================================================
// Submit lifecycle
// =============================================================

#[test]
fn begin_submit_with_empty_required_field_sends_nothing() {
    for field in [FormField::FullName, FormField::Email, FormField::ChallengeDescription] {
        let mut state = filled_state();
        state.form.update_field(field, String::new());
        assert!(state.begin_submit().is_none(), "{field:?} should block submit");
        assert_eq!(state.phase, SubmitPhase::Idle);
    }
}

#[test]
fn begin_submit_enters_submitting_and_clears_prior_error() {
    let mut state = filled_state();
    state.phase = SubmitPhase::Failed("old".to_owned());
    let request = state.begin_submit();
    assert!(request.is_some());
    assert!(state.is_submitting());
    assert!(state.error_message().is_none());
}

#[test]
fn begin_submit_refuses_reentry_while_submitting() {
    let mut state = filled_state();
    assert!(state.begin_submit().is_some());
    assert!(state.begin_submit().is_none());
    assert!(state.is_submitting());
}

#[test]
fn finish_submit_success_clears_all_fields() {
    let mut state = filled_state();
    state.form.update_field(FormField::CompanyName, "Acme".to_owned());
    state.form.select_interest_type(Some(InterestType::NotSure));
    state.begin_submit();
    state.finish_submit(Ok(()));
    assert_eq!(state.phase, SubmitPhase::Succeeded);
    assert_eq!(state.form, ConsultationForm::default());
}

#[test]
fn finish_submit_error_keeps_fields_and_message() {
    let mut state = filled_state();
    let before = state.form.clone();
    state.begin_submit();
    state.finish_submit(Err("new row violates row-level security policy".to_owned()));
    assert_eq!(state.error_message(), Some("new row violates row-level security policy"));
    assert_eq!(state.form, before);
    assert!(!state.is_submitting());
}

#[test]
fn failed_state_can_be_resubmitted() {
    let mut state = filled_state();
    state.begin_submit();
    state.finish_submit(Err(UNEXPECTED_ERROR_MESSAGE.to_owned()));
    assert!(state.begin_submit().is_some());
    state.finish_submit(Err(STORE_FALLBACK_MESSAGE.to_owned()));
    assert_eq!(state.error_message(), Some(STORE_FALLBACK_MESSAGE));
}

#[test]
fn success_after_failure_drops_error_message() {
    let mut state = filled_state();
    state.begin_submit();
    state.finish_submit(Err("boom".to_owned()));
    state.begin_submit();
    state.finish_submit(Ok(()));
    assert_eq!(state.phase, SubmitPhase::Succeeded);
    assert!(state.error_message().is_none());
}

// =============================================================
// submit (with MockApi)
// =============================================================

struct MockApi {
    outcome: Result<(), String>,
    sent: RefCell<Vec<ConsultationRequest>>,
}

impl MockApi {
    fn replying(outcome: Result<(), String>) -> Self {
        Self { outcome, sent: RefCell::new(Vec::new()) }
    }

    fn calls(&self) -> usize {
        self.sent.borrow().len()
    }
}

#[async_trait::async_trait(?Send)]
impl ConsultationApi for MockApi {
    async fn submit(&self, request: &ConsultationRequest) -> Result<(), String> {
        self.sent.borrow_mut().push(request.clone());
        self.outcome.clone()
    }
}

fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.set();
    f()
}

#[test]
fn submit_success_sends_once_and_clears_fields() {
    with_owner(|| {
        let state = RwSignal::new(filled_state());
        let api = MockApi::replying(Ok(()));

        assert!(block_on(submit(state, &api)));

        assert_eq!(api.calls(), 1);
        assert_eq!(api.sent.borrow()[0].company_name, None);
        let after = state.get_untracked();
        assert_eq!(after.phase, SubmitPhase::Succeeded);
        assert_eq!(after.form, ConsultationForm::default());
    });
}

#[test]
fn submit_with_empty_required_field_makes_no_call() {
    with_owner(|| {
        let mut initial = filled_state();
        initial.form.update_field(FormField::Email, String::new());
        let state = RwSignal::new(initial.clone());
        let api = MockApi::replying(Ok(()));

        assert!(!block_on(submit(state, &api)));

        assert_eq!(api.calls(), 0);
        assert_eq!(state.get_untracked(), initial);
    });
}

#[test]
fn submit_while_in_flight_makes_no_call() {
    with_owner(|| {
        let mut initial = filled_state();
        initial.phase = SubmitPhase::Submitting;
        let state = RwSignal::new(initial);
        let api = MockApi::replying(Ok(()));

        assert!(!block_on(submit(state, &api)));
        assert_eq!(api.calls(), 0);
    });
}

#[test]
fn submit_store_message_is_shown_and_fields_kept() {
    with_owner(|| {
        let state = RwSignal::new(filled_state());
        let before = state.get_untracked().form;
        let api = MockApi::replying(Err("duplicate key value".to_owned()));

        block_on(submit(state, &api));

        assert_eq!(api.calls(), 1);
        let after = state.get_untracked();
        assert_eq!(after.error_message(), Some("duplicate key value"));
        assert_eq!(after.form, before);
    });
}

#[test]
fn submit_surfaces_fallback_and_generic_messages_verbatim() {
    with_owner(|| {
        for message in [STORE_FALLBACK_MESSAGE, UNEXPECTED_ERROR_MESSAGE] {
            let state = RwSignal::new(filled_state());
            let api = MockApi::replying(Err(message.to_owned()));

            block_on(submit(state, &api));

            assert_eq!(api.calls(), 1);
            assert_eq!(state.get_untracked().error_message(), Some(message));
        }
    });
}

#[test]
fn submit_retry_after_failure_sends_again() {
    with_owner(|| {
        let state = RwSignal::new(filled_state());
        let failing = MockApi::replying(Err(UNEXPECTED_ERROR_MESSAGE.to_owned()));
        block_on(submit(state, &failing));

        let ok = MockApi::replying(Ok(()));
        assert!(block_on(submit(state, &ok)));
        assert_eq!(ok.calls(), 1);
        assert_eq!(state.get_untracked().phase, SubmitPhase::Succeeded);
    });
}

//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! `ConsultationRequest` is both the body of `POST /api/consultations` and the
//! row shape inserted into the `consultation_requests` collection, so the
//! server forwards it to the store without a second mapping layer. Optional
//! columns serialize as JSON `null`, never as empty strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Shown when the store endpoint or key is missing.
pub const CONFIG_ERROR_MESSAGE: &str = "The consultation service is not configured. Please set SUPABASE_URL and SUPABASE_ANON_KEY environment variables.";

/// Shown when the store reports a failure without a message of its own.
pub const STORE_FALLBACK_MESSAGE: &str = "Failed to submit consultation request.";

/// Shown for transport failures and anything else nobody anticipated.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Shown when a request reaches the server with a required field left empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Engagement type offered by the form's select control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterestType {
    #[serde(rename = "Sustainability Advisory")]
    SustainabilityAdvisory,
    #[serde(rename = "AI Automation")]
    AiAutomation,
    #[serde(rename = "Hybrid (Sustainability + AI)")]
    Hybrid,
    #[serde(rename = "Not Sure")]
    NotSure,
}

impl InterestType {
    /// Every selectable value, in display order.
    pub const ALL: [Self; 4] = [Self::SustainabilityAdvisory, Self::AiAutomation, Self::Hybrid, Self::NotSure];

    /// Literal label, identical to the stored column value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SustainabilityAdvisory => "Sustainability Advisory",
            Self::AiAutomation => "AI Automation",
            Self::Hybrid => "Hybrid (Sustainability + AI)",
            Self::NotSure => "Not Sure",
        }
    }

    /// Parse a `<select>` value. The empty placeholder and anything outside
    /// the closed set map to `None`.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == raw)
    }
}

/// One consultation request as sent to the server and stored as a row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    pub full_name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    pub email: String,
    pub challenge_description: String,
    #[serde(default)]
    pub interest_type: Option<InterestType>,
}

impl ConsultationRequest {
    /// Collapse empty optional text to `None` so the store sees `null`.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.company_name.as_deref().is_some_and(str::is_empty) {
            self.company_name = None;
        }
        self
    }

    /// True when any of `full_name`, `email`, `challenge_description` is empty.
    ///
    /// Mirrors the browser's `required` check, which accepts whitespace.
    #[must_use]
    pub fn is_missing_required(&self) -> bool {
        self.full_name.is_empty() || self.email.is_empty() || self.challenge_description.is_empty()
    }
}

/// Body returned by `POST /api/consultations`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    #[must_use]
    pub fn success() -> Self {
        Self { ok: true, error: None }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self { ok: false, error: Some(message.into()) }
    }
}

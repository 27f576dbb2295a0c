//! The response envelope shared by every endpoint.
//!
//! ```json
//! {
//!     "message": "Employee retrieved successfully",
//!     "code": 200,
//!     "data": { ... },
//!     "subCode": "0",
//!     "errors": null
//! }
//! ```
//!
//! `code` is chosen by the caller and is not tied to the HTTP status of the
//! response carrying it. Handlers keep the two in step.

use serde::{Deserialize, Serialize};

use crate::validation::FieldErrors;

/// Sub-code used when the caller has nothing more specific to say.
pub const DEFAULT_SUB_CODE: &str = "0";

/// Uniform wrapper around every response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub code: u16,
    pub data: Option<T>,
    #[serde(rename = "subCode")]
    pub sub_code: String,
    pub errors: Option<EnvelopeErrors>,
}

/// The `errors` member of an envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvelopeErrors {
    /// `{"detail": "..."}` for errors that are not about a particular field.
    Detail { detail: String },
    /// `{"field": ["message", ...]}` for validation failures.
    Fields(FieldErrors),
}

impl EnvelopeErrors {
    /// Creates a `{"detail": ...}` error body.
    pub fn detail(detail: impl Into<String>) -> Self {
        Self::Detail {
            detail: detail.into(),
        }
    }

    /// The detail text, if this is a detail error.
    pub fn detail_text(&self) -> Option<&str> {
        match self {
            Self::Detail { detail } => Some(detail),
            Self::Fields(_) => None,
        }
    }

    /// The field map, if this is a validation error.
    pub fn fields(&self) -> Option<&FieldErrors> {
        match self {
            Self::Fields(fields) => Some(fields),
            Self::Detail { .. } => None,
        }
    }
}

impl From<FieldErrors> for EnvelopeErrors {
    fn from(errors: FieldErrors) -> Self {
        Self::Fields(errors)
    }
}

impl std::fmt::Display for EnvelopeErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Detail { detail } => write!(f, "{}", detail),
            Self::Fields(fields) => write!(f, "{}", fields),
        }
    }
}

impl<T> Envelope<T> {
    /// Builds an envelope from all five members.
    pub fn new(
        message: impl Into<String>,
        code: u16,
        data: Option<T>,
        sub_code: impl Into<String>,
        errors: Option<EnvelopeErrors>,
    ) -> Self {
        Self {
            message: message.into(),
            code,
            data,
            sub_code: sub_code.into(),
            errors,
        }
    }

    /// Envelope carrying a payload and no errors.
    pub fn success(message: impl Into<String>, code: u16, data: T) -> Self {
        Self::new(message, code, Some(data), DEFAULT_SUB_CODE, None)
    }

    /// Envelope carrying errors and no payload.
    pub fn failure(message: impl Into<String>, code: u16, errors: EnvelopeErrors) -> Self {
        Self::new(message, code, None, DEFAULT_SUB_CODE, Some(errors))
    }

    /// Envelope with neither payload nor errors.
    pub fn empty(message: impl Into<String>, code: u16) -> Self {
        Self::new(message, code, None, DEFAULT_SUB_CODE, None)
    }

    /// Replaces the sub-code.
    pub fn with_sub_code(mut self, sub_code: impl Into<String>) -> Self {
        self.sub_code = sub_code.into();
        self
    }

    /// True when `code` is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Converts the payload, keeping every other member.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            message: self.message,
            code: self.code,
            data: self.data.map(f),
            sub_code: self.sub_code,
            errors: self.errors,
        }
    }
}

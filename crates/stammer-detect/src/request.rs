// Request/response boundary contract.
//
// The detector itself is total and never fails; input validation is the
// boundary layer's job. This module is the contract that layer consumes:
// a validated request, the serializable response shape, and the error a
// transport can map to a client error (HTTP 400 or similar).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::detector::detect_stammering;

/// Validation failure for a stammering check request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// A required text field was empty.
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),
}

/// A stammering check request: one source sentence and its translation.
#[derive(Debug, Clone, Deserialize)]
pub struct StammerRequest {
    pub source_sentence: String,
    pub translated_sentence: String,
}

impl StammerRequest {
    pub fn new(source_sentence: impl Into<String>, translated_sentence: impl Into<String>) -> Self {
        Self {
            source_sentence: source_sentence.into(),
            translated_sentence: translated_sentence.into(),
        }
    }

    /// Require both fields to be non-empty (at least one character).
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.source_sentence.is_empty() {
            return Err(RequestError::EmptyField("source_sentence"));
        }
        if self.translated_sentence.is_empty() {
            return Err(RequestError::EmptyField("translated_sentence"));
        }
        Ok(())
    }
}

/// The response body shape of the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StammerResponse {
    pub has_stammer: bool,
}

/// Validate a request and run the default detector.
pub fn handle_request(request: &StammerRequest) -> Result<StammerResponse, RequestError> {
    request.validate()?;
    Ok(StammerResponse {
        has_stammer: detect_stammering(&request.source_sentence, &request.translated_sentence),
    })
}

// ============================================================================
// Tests
// ============================================================================

//! Response envelope.
//!
//! ```text
//! {
//!   "status":    "success" | "error",   derived from error_msg
//!   "error_msg": [ ... ],               always present, insertion order
//!   "data":      { ... },               omitted when empty
//!   "response":  ...                    omitted when empty or unset
//! }
//! ```

use crate::error::EnvelopeResult;
use crate::normalize::normalize_data;
use crate::value::{DataMap, Value};
use serde::Serialize;

/// Export status. Never stored, always derived from the error list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Error,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Error => "error",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exported shape of an envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub status: Status,
    pub error_msg: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseEnvelope {
    data: DataMap,
    errors: Vec<String>,
    response: Option<Value>,
}

impl ResponseEnvelope {
    /// Create an envelope; `data` is normalized like [`Self::set_data`].
    pub fn new(data: DataMap) -> Self {
        let mut envelope = Self::default();
        envelope.set_data(data);
        envelope
    }

    pub fn data(&self) -> &DataMap {
        &self.data
    }

    /// Replace the data wholesale, trimming strings and coercing
    /// `"true"`/`"false"` (see [`crate::normalize`]).
    pub fn set_data(&mut self, data: DataMap) {
        self.data = normalize_data(data);
    }

    pub fn clear_data(&mut self) {
        self.data.clear();
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Replace the whole error list.
    pub fn set_errors(&mut self, errors: Vec<String>) {
        self.errors = errors;
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn status(&self) -> Status {
        if self.is_success() {
            Status::Success
        } else {
            Status::Error
        }
    }

    pub fn response(&self) -> Option<&Value> {
        self.response.as_ref()
    }

    pub fn set_response(&mut self, response: impl Into<Value>) {
        self.response = Some(response.into());
    }

    /// Export as a structured [`Response`], dropping empty `data`/`response`.
    pub fn to_response(&self) -> Response {
        Response {
            status: self.status(),
            error_msg: self.errors.clone(),
            data: (!self.data.is_empty()).then(|| self.data.clone()),
            response: self.response.clone().filter(|r| !r.is_empty()),
        }
    }

    /// Export as JSON text.
    ///
    /// Fails with [`crate::EnvelopeError::Serialization`] when `data` or
    /// `response` holds bytes that are not UTF-8 or a non-finite number.
    pub fn to_json(&self) -> EnvelopeResult<String> {
        let response = self.to_response();
        match serde_json::to_string(&response) {
            Ok(json) => Ok(json),
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode response envelope");
                Err(e.into())
            }
        }
    }
}

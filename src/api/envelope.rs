use crate::ScraperError;
use serde::{Deserialize, Serialize};

/// Transport-level response wrapper
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub status: bool,
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful response carrying `data`
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            code: 200,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Failed response; validation errors map to 400, everything else to 500
    pub fn from_error(error: &ScraperError) -> Self {
        Self {
            status: false,
            code: error.status_code(),
            message: error.to_string(),
            data: None,
        }
    }

    /// Returns true if the response reports success
    pub fn is_success(&self) -> bool {
        self.status
    }
}

//! JSON payloads exchanged with the chat backend
//!
//! Transport adapters decode these and hand the contents to the session
//! through [`crate::runtime::HistoryProvider`] and
//! [`crate::runtime::AnswerService`].

use crate::error::ServiceError;
use serde::{Deserialize, Serialize};

/// Response of the history endpoint: raw records, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub messages: Vec<String>,
}

/// Body sent to ask a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

/// Answer returned for a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
}

/// Decode a history response body into raw records.
///
/// # Errors
///
/// [`ServiceError`] with kind `InvalidResponse` if the body is not the
/// expected JSON.
pub fn decode_history(body: &str) -> Result<Vec<String>, ServiceError> {
    let payload: HistoryResponse = serde_json::from_str(body)?;
    Ok(payload.messages)
}

/// Decode an answer body.
///
/// # Errors
///
/// [`ServiceError`] with kind `InvalidResponse` if the body is not the
/// expected JSON.
pub fn decode_answer(body: &str) -> Result<String, ServiceError> {
    let payload: AskResponse = serde_json::from_str(body)?;
    Ok(payload.response)
}

/// Encode the request body for a question.
///
/// # Errors
///
/// Only if serialization itself fails.
pub fn encode_ask(question: &str) -> Result<String, ServiceError> {
    Ok(serde_json::to_string(&AskRequest {
        query: question.to_string(),
    })?)
}

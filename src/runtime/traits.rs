//! Trait abstractions for the session's collaborators
//!
//! These traits keep transport out of the session and let tests drive it
//! with mock implementations.

use crate::error::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;

/// Source of prior transcript records
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch raw records, oldest first, each in the
    /// `"Query: ...\nResponse: ..."` shape or a bare string
    async fn fetch(&self) -> Result<Vec<String>, ServiceError>;
}

/// Remote service that answers questions
#[async_trait]
pub trait AnswerService: Send + Sync {
    async fn ask(&self, question: &str) -> Result<String, ServiceError>;
}

// ============================================================================
// Arc implementations for trait objects
// ============================================================================

#[async_trait]
impl<T: HistoryProvider + ?Sized> HistoryProvider for Arc<T> {
    async fn fetch(&self) -> Result<Vec<String>, ServiceError> {
        (**self).fetch().await
    }
}

#[async_trait]
impl<T: AnswerService + ?Sized> AnswerService for Arc<T> {
    async fn ask(&self, question: &str) -> Result<String, ServiceError> {
        (**self).ask(question).await
    }
}

// ============================================================================
// Adapters
// ============================================================================

/// History provider for sessions that start empty
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

#[async_trait]
impl HistoryProvider for NoHistory {
    async fn fetch(&self) -> Result<Vec<String>, ServiceError> {
        Ok(Vec::new())
    }
}

/// Logging wrapper for answer services
pub struct LoggingAnswerService<A> {
    inner: A,
}

impl<A: AnswerService> LoggingAnswerService<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

#[async_trait]
impl<A: AnswerService> AnswerService for LoggingAnswerService<A> {
    async fn ask(&self, question: &str) -> Result<String, ServiceError> {
        let start = std::time::Instant::now();
        let result = self.inner.ask(question).await;
        let duration = start.elapsed();

        match &result {
            Ok(answer) => {
                tracing::info!(
                    duration_ms = %duration.as_millis(),
                    question_chars = question.chars().count(),
                    answer_chars = answer.chars().count(),
                    "Answer request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    duration_ms = %duration.as_millis(),
                    error = %e.message,
                    kind = e.kind.as_str(),
                    "Answer request failed"
                );
            }
        }

        result
    }
}

use crate::core::errors::StoreError;
use crate::core::types::{ErrorAnalysis, ErrorLog, LogQuery};
use async_trait::async_trait;

/// Per-project error history.
///
/// Implementations may be remote; callers treat every failure as recoverable.
#[async_trait]
pub trait ErrorLogStore: Send + Sync {
    /// Insert a new log entry keyed by its id
    async fn put(&self, log: ErrorLog) -> Result<(), StoreError>;

    async fn get(&self, id: &str) -> Result<Option<ErrorLog>, StoreError>;

    /// Logs of `project_id` that satisfy `query`, newest first
    async fn list(&self, project_id: &str, query: &LogQuery) -> Result<Vec<ErrorLog>, StoreError>;

    /// Flip `resolved` to true. Fails with [`StoreError::LogNotFound`] for unknown ids.
    async fn mark_resolved(&self, id: &str) -> Result<(), StoreError>;
}

/// Completed analyses, keyed by analysis id. Entries are never updated in place.
#[async_trait]
pub trait AnalysisCache: Send + Sync {
    async fn insert(&self, analysis: ErrorAnalysis) -> Result<(), StoreError>;

    async fn get(&self, id: &str) -> Result<Option<ErrorAnalysis>, StoreError>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

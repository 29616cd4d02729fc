use super::traits::{AnalysisCache, ErrorLogStore};
use crate::core::config::HasCacheConfig;
use crate::core::errors::StoreError;
use crate::core::types::{ErrorAnalysis, ErrorLog, LogQuery};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct CacheState {
    analyses: HashMap<String, ErrorAnalysis>,
    /// Insertion order, oldest first
    order: VecDeque<String>,
}

/// Bounded in-memory analysis cache; evicts the oldest analysis when full.
#[derive(Debug)]
pub struct MemoryAnalysisCache {
    state: RwLock<CacheState>,
    max_analyses: usize,
}

impl MemoryAnalysisCache {
    pub fn new(max_analyses: usize) -> Self {
        Self {
            state: RwLock::new(CacheState::default()),
            max_analyses: max_analyses.max(1),
        }
    }

    pub fn from_config(config: &impl HasCacheConfig) -> Self {
        Self::new(config.cache_config().max_analyses)
    }

    pub fn with_defaults() -> Self {
        Self::new(1000)
    }

    fn evict_if_needed(state: &mut CacheState, max_analyses: usize) {
        while state.analyses.len() > max_analyses {
            let Some(oldest) = state.order.pop_front() else {
                break;
            };
            state.analyses.remove(&oldest);
            tracing::debug!(id = %oldest, "evicted analysis from cache");
        }
    }
}

#[async_trait]
impl AnalysisCache for MemoryAnalysisCache {
    async fn insert(&self, analysis: ErrorAnalysis) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let id = analysis.id.clone();
        if state.analyses.insert(id.clone(), analysis).is_none() {
            state.order.push_back(id);
        }
        Self::evict_if_needed(&mut state, self.max_analyses);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<ErrorAnalysis>, StoreError> {
        Ok(self.state.read().await.analyses.get(id).cloned())
    }

    async fn len(&self) -> usize {
        self.state.read().await.analyses.len()
    }
}

/// In-memory error log store. Entries keep insertion order.
#[derive(Debug, Default)]
pub struct MemoryErrorLogStore {
    logs: RwLock<Vec<ErrorLog>>,
}

impl MemoryErrorLogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ErrorLogStore for MemoryErrorLogStore {
    async fn put(&self, log: ErrorLog) -> Result<(), StoreError> {
        self.logs.write().await.push(log);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<ErrorLog>, StoreError> {
        Ok(self.logs.read().await.iter().find(|l| l.id == id).cloned())
    }

    async fn list(&self, project_id: &str, query: &LogQuery) -> Result<Vec<ErrorLog>, StoreError> {
        let logs = self.logs.read().await;
        // Reverse insertion order first so equal timestamps stay newest first
        let mut matching: Vec<ErrorLog> = logs
            .iter()
            .rev()
            .filter(|l| l.project_id == project_id && query.matches(l))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        if let Some(limit) = query.limit {
            matching.truncate(limit);
        }
        Ok(matching)
    }

    async fn mark_resolved(&self, id: &str) -> Result<(), StoreError> {
        let mut logs = self.logs.write().await;
        let log = logs
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| StoreError::LogNotFound { id: id.to_string() })?;
        log.resolved = true;
        Ok(())
    }
}

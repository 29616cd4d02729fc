//! # Engine and Store Integration Tests
//!
//! History, resolution and related-error linking through `RecoveryEngine`,
//! including behavior when the log store is unavailable.

use async_trait::async_trait;
use faultline::core::errors::{EngineError, StoreError};
use faultline::core::types::{AnalysisContext, ErrorInput, ErrorLog, LogLevel, LogQuery};
use faultline::store::{ErrorLogStore, MemoryAnalysisCache};
use faultline::{EngineConfig, RecoveryEngine};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn in_project(project: &str) -> AnalysisContext {
    AnalysisContext::new().with_project(project)
}

/// Log store whose backend is always down
struct UnavailableStore;

#[async_trait]
impl ErrorLogStore for UnavailableStore {
    async fn put(&self, _log: ErrorLog) -> Result<(), StoreError> {
        Err(unavailable("put"))
    }

    async fn get(&self, _id: &str) -> Result<Option<ErrorLog>, StoreError> {
        Err(unavailable("get"))
    }

    async fn list(&self, _project_id: &str, _query: &LogQuery) -> Result<Vec<ErrorLog>, StoreError> {
        Err(unavailable("list"))
    }

    async fn mark_resolved(&self, _id: &str) -> Result<(), StoreError> {
        Err(unavailable("mark_resolved"))
    }
}

fn unavailable(operation: &str) -> StoreError {
    StoreError::Unavailable {
        operation: operation.to_string(),
        reason: "connection refused".to_string(),
    }
}

#[tokio::test]
async fn test_analysis_logged_under_project() {
    let engine = RecoveryEngine::in_memory(EngineConfig::testing());
    let input = ErrorInput::from("Error: Cannot find module 'lodash'\n    at load (/app/src/index.js:1:1)");
    let analysis = engine.analyze_error(&input, Some(&in_project("web"))).await;

    let logs = engine.get_error_logs("web", &LogQuery::default()).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].level, LogLevel::Error);
    assert_eq!(logs[0].message, "Cannot find module 'lodash'");
    assert_eq!(logs[0].stack.as_deref(), Some("    at load (/app/src/index.js:1:1)"));
    assert!(!logs[0].resolved);
    assert_eq!(logs[0].analysis.as_ref(), Some(&analysis));

    assert!(engine
        .get_error_logs("other", &LogQuery::default())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_unresolved_filter_never_returns_resolved_logs() {
    let engine = RecoveryEngine::in_memory(EngineConfig::testing());
    let mut ids = Vec::new();
    for i in 0..4 {
        let id = engine
            .log_error("api", LogLevel::Warn, &format!("slow query {i}"), None)
            .await
            .unwrap();
        ids.push(id);
    }
    engine.resolve_error(&ids[1]).await.unwrap();
    engine.resolve_error(&ids[3]).await.unwrap();

    let unresolved = engine.get_error_logs("api", &LogQuery::unresolved()).await.unwrap();
    assert_eq!(unresolved.len(), 2);
    assert!(unresolved.iter().all(|log| !log.resolved));

    let resolved = engine
        .get_error_logs(
            "api",
            &LogQuery {
                resolved: Some(true),
                ..LogQuery::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(resolved.len(), 2);

    let limited = engine
        .get_error_logs("api", &LogQuery::default().with_limit(3))
        .await
        .unwrap();
    assert_eq!(limited.len(), 3);
    assert!(limited.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
}

#[tokio::test]
async fn test_level_filter() {
    let engine = RecoveryEngine::in_memory(EngineConfig::testing());
    engine.log_error("api", LogLevel::Info, "started", None).await.unwrap();
    engine.log_error("api", LogLevel::Error, "crashed", None).await.unwrap();

    let errors = engine
        .get_error_logs(
            "api",
            &LogQuery {
                level: Some(LogLevel::Error),
                ..LogQuery::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "crashed");
}

#[tokio::test]
async fn test_resolving_unknown_log_fails() {
    let engine = RecoveryEngine::in_memory(EngineConfig::testing());
    let err = engine.resolve_error("no-such-id").await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::Store(StoreError::LogNotFound { ref id }) if id == "no-such-id"
    ));
}

#[tokio::test]
async fn test_related_errors_link_unresolved_history() {
    let engine = RecoveryEngine::in_memory(EngineConfig::testing());
    let ctx = in_project("web");
    let input = ErrorInput::from("Error: Cannot find module 'lodash'");

    let first = engine.analyze_error(&input, Some(&ctx)).await;
    assert!(first.related_error_ids.is_empty());
    let first_log = engine.get_error_logs("web", &LogQuery::default()).await.unwrap()[0]
        .id
        .clone();

    // Different pattern in the same project is not related
    engine
        .analyze_error(&ErrorInput::from("Error: connect ECONNREFUSED 10.0.0.1:80"), Some(&ctx))
        .await;

    let second = engine.analyze_error(&input, Some(&ctx)).await;
    assert_eq!(second.related_error_ids.len(), 1);
    assert!(second.related_error_ids.contains(&first_log));

    // Same error in another project is not related
    let elsewhere = engine.analyze_error(&input, Some(&in_project("api"))).await;
    assert!(elsewhere.related_error_ids.is_empty());

    // Resolved history drops out
    engine.resolve_error(&first_log).await.unwrap();
    let third = engine.analyze_error(&input, Some(&ctx)).await;
    assert!(!third.related_error_ids.contains(&first_log));
    assert_eq!(third.related_error_ids.len(), 1);
}

#[tokio::test]
async fn test_unavailable_store_does_not_block_analysis() {
    let config = EngineConfig::testing();
    let cache = Arc::new(MemoryAnalysisCache::from_config(&config));
    let engine = RecoveryEngine::new(config, cache, Arc::new(UnavailableStore));

    let analysis = engine
        .analyze_error(
            &ErrorInput::from("TypeError: Cannot read properties of undefined (reading 'id')"),
            Some(&in_project("web")),
        )
        .await;

    assert!(analysis.related_error_ids.is_empty());
    assert_eq!(engine.get_analysis(&analysis.id).await, Some(analysis));

    assert!(matches!(
        engine.get_error_logs("web", &LogQuery::default()).await,
        Err(EngineError::Store(StoreError::Unavailable { .. }))
    ));
    assert!(engine
        .log_error("web", LogLevel::Info, "hello", None)
        .await
        .is_err());
}

#[tokio::test]
async fn test_cache_evicts_oldest_analysis() {
    let mut config = EngineConfig::testing();
    config.cache.max_analyses = 2;
    let engine = RecoveryEngine::in_memory(config);

    let mut ids = Vec::new();
    for i in 0..3 {
        let analysis = engine
            .analyze_error(&ErrorInput::from(format!("Error: failure {i}")), None)
            .await;
        ids.push(analysis.id);
    }

    assert!(engine.get_analysis(&ids[0]).await.is_none());
    assert!(engine.get_analysis(&ids[1]).await.is_some());
    assert!(engine.get_analysis(&ids[2]).await.is_some());
}

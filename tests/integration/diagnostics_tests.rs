//! # Diagnostics Integration Tests
//!
//! Health scoring over realistic source blobs through the engine facade.

use faultline::core::types::{ErrorCategory, Severity};
use faultline::{EngineConfig, RecoveryEngine};
use pretty_assertions::assert_eq;

const SERVICE_SOURCE: &str = r#"
import { db } from "./db";

const apiKey = "sk-live-4f9a2b";

export async function loadOrders(userId: string) {
    console.log("loading orders", userId);
    // TODO: paginate
    return await db.orders.find({ userId });
}
"#;

#[tokio::test]
async fn test_secret_debug_print_and_todo_score_86() {
    let engine = RecoveryEngine::in_memory(EngineConfig::testing());
    let report = engine
        .run_diagnostics("shop", SERVICE_SOURCE, &["src/orders.ts".to_string()])
        .await;

    assert_eq!(report.project_id, "shop");
    assert_eq!(report.health_score, 86);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.warnings.len(), 2);

    let secret = &report.errors[0];
    assert_eq!(secret.category, ErrorCategory::Authentication);
    assert_eq!(secret.severity, Severity::Critical);
    assert_eq!(secret.error.file.as_deref(), Some("src/orders.ts"));
    assert!(secret.error.message.contains("apiKey"));

    // Secret analyses are retrievable from the cache afterwards
    assert_eq!(engine.get_analysis(&secret.id).await.as_ref(), Some(secret));
}

#[tokio::test]
async fn test_every_check_fires() {
    let source = r#"
const password = "hunter2";
console.debug(x);
// TODO: tighten types
let payload: any = {};
async function noop() { return 1; }
"#;
    let engine = RecoveryEngine::in_memory(EngineConfig::testing());
    let report = engine.run_diagnostics("p", source, &[]).await;

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.warnings.len(), 4);
    assert_eq!(report.health_score, 100 - 10 - 2 * 4);
}

#[tokio::test]
async fn test_custom_penalties_apply() {
    let mut config = EngineConfig::testing();
    config.diagnostics.warning_penalty = 25;
    let engine = RecoveryEngine::in_memory(config);

    let report = engine
        .run_diagnostics("p", "console.log(1);\n// TODO: x\n", &[])
        .await;
    assert_eq!(report.health_score, 50);
}

#[tokio::test]
async fn test_report_is_not_logged() {
    let engine = RecoveryEngine::in_memory(EngineConfig::testing());
    engine
        .run_diagnostics("p", "const secret = 'abc';", &[])
        .await;

    let logs = engine
        .get_error_logs("p", &Default::default())
        .await
        .unwrap();
    assert!(logs.is_empty());
}

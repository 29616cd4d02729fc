//! # Quick Fix Integration Tests
//!
//! Analyze an error against a real file, then apply the synthesized fix.

use faultline::core::errors::FixError;
use faultline::core::types::{AnalysisContext, ErrorInput};
use faultline::quick_fix::FixApplicationEngine;
use faultline::{EngineConfig, RecoveryEngine};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tokio::fs;

const PROFILE_SOURCE: &str = "export function render(user) {\n  const label = user.name;\n  return label;\n}\n";

async fn analyze_file(engine: &RecoveryEngine, path: &str, code: &str) -> faultline::ErrorAnalysis {
    let context = AnalysisContext::new().with_file(path).with_line(2).with_code(code);
    engine
        .analyze_error(
            &ErrorInput::from("TypeError: Cannot read properties of undefined (reading 'name')"),
            Some(&context),
        )
        .await
}

#[tokio::test]
async fn test_apply_synthesized_fix() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("profile.js");
    fs::write(&path, PROFILE_SOURCE).await.unwrap();
    let path_str = path.to_string_lossy().into_owned();

    let engine = RecoveryEngine::in_memory(EngineConfig::testing());
    let analysis = analyze_file(&engine, &path_str, PROFILE_SOURCE).await;
    let fix = analysis.code_fix().expect("fix for unguarded access").clone();
    assert_eq!(fix.old_code, "  const label = user.name;");
    assert_eq!(fix.new_code, "  const label = user?.name;");

    // Analysis alone never touches the file
    assert_eq!(fs::read_to_string(&path).await.unwrap(), PROFILE_SOURCE);

    assert!(engine.apply_fix(&fix).await);
    assert_eq!(
        fs::read_to_string(&path).await.unwrap(),
        "export function render(user) {\n  const label = user?.name;\n  return label;\n}\n"
    );

    // The line no longer holds the analyzed code
    assert!(!engine.apply_fix(&fix).await);
}

#[tokio::test]
async fn test_crlf_line_endings_preserved() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("profile.js");
    let source = PROFILE_SOURCE.replace('\n', "\r\n");
    fs::write(&path, &source).await.unwrap();

    let engine = RecoveryEngine::in_memory(EngineConfig::testing());
    let analysis = analyze_file(&engine, &path.to_string_lossy(), &source).await;
    let fix = analysis.code_fix().expect("fix").clone();

    assert!(engine.apply_fix(&fix).await);
    assert_eq!(
        fs::read_to_string(&path).await.unwrap(),
        source.replace("user.name", "user?.name")
    );
}

#[tokio::test]
async fn test_backup_restores_original() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("profile.js");
    fs::write(&path, PROFILE_SOURCE).await.unwrap();

    let engine = RecoveryEngine::in_memory(EngineConfig::testing());
    let analysis = analyze_file(&engine, &path.to_string_lossy(), PROFILE_SOURCE).await;
    let fix = analysis.code_fix().expect("fix");

    let fixer = FixApplicationEngine::new().with_backups(true);
    let result = fixer.apply_code_fix(fix).await.unwrap();
    assert_eq!(result.modified_files, vec![path.clone()]);

    let backup = result.backup.expect("backup");
    assert_eq!(backup.original_content, PROFILE_SOURCE);
    fixer.restore(&backup).await.unwrap();
    assert_eq!(fs::read_to_string(&path).await.unwrap(), PROFILE_SOURCE);
}

#[tokio::test]
async fn test_oversized_file_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("profile.js");
    fs::write(&path, PROFILE_SOURCE).await.unwrap();

    let engine = RecoveryEngine::in_memory(EngineConfig::testing());
    let analysis = analyze_file(&engine, &path.to_string_lossy(), PROFILE_SOURCE).await;
    let fix = analysis.code_fix().expect("fix");

    let err = FixApplicationEngine::new()
        .with_max_file_size(8)
        .apply_code_fix(fix)
        .await
        .unwrap_err();
    assert!(matches!(err, FixError::FileTooLarge { limit: 8, .. }));
    assert_eq!(fs::read_to_string(&path).await.unwrap(), PROFILE_SOURCE);
}

#[tokio::test]
async fn test_missing_file_yields_false() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("gone.js");

    let engine = RecoveryEngine::in_memory(EngineConfig::testing());
    let analysis = analyze_file(&engine, &missing.to_string_lossy(), PROFILE_SOURCE).await;
    let fix = analysis.code_fix().expect("fix");

    assert!(!engine.apply_fix(fix).await);
    assert!(!missing.exists());
}

#[tokio::test]
async fn test_rejected_fix_yields_false_and_leaves_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("profile.js");
    fs::write(&path, PROFILE_SOURCE).await.unwrap();

    let engine = RecoveryEngine::in_memory(EngineConfig::testing());
    let analysis = analyze_file(&engine, &path.to_string_lossy(), PROFILE_SOURCE).await;
    let mut fix = analysis.code_fix().expect("fix").clone();
    fix.line = 40;

    assert!(!engine.apply_fix(&fix).await);
    assert_eq!(fs::read_to_string(&path).await.unwrap(), PROFILE_SOURCE);

    // Same fix on its real line goes through
    fix.line = 2;
    assert!(engine.apply_fix(&fix).await);
}

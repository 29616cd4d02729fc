use crate::analyzers::ErrorAnalyzer;
use crate::core::config::EngineConfig;
use crate::core::errors::EngineResult;
use crate::core::types::{
    AnalysisContext, CodeFix, DiagnosticReport, ErrorAnalysis, ErrorInput, ErrorLog, LogLevel,
    LogQuery,
};
use crate::diagnostics::DiagnosticsRunner;
use crate::quick_fix::FixApplicationEngine;
use crate::store::{AnalysisCache, ErrorLogStore, MemoryAnalysisCache, MemoryErrorLogStore};
use chrono::Utc;
use std::collections::BTreeSet;
use std::sync::Arc;
use uuid::Uuid;

/// Store-backed entry point for analysis, history and diagnostics.
///
/// Analysis always completes in memory before any store is touched, so a
/// failing or slow store can delay but never corrupt or prevent a result.
pub struct RecoveryEngine {
    analyzer: ErrorAnalyzer,
    fixer: FixApplicationEngine,
    cache: Arc<dyn AnalysisCache>,
    logs: Arc<dyn ErrorLogStore>,
    config: EngineConfig,
}

impl RecoveryEngine {
    pub fn new(
        config: EngineConfig,
        cache: Arc<dyn AnalysisCache>,
        logs: Arc<dyn ErrorLogStore>,
    ) -> Self {
        Self {
            analyzer: ErrorAnalyzer::new(),
            fixer: FixApplicationEngine::from_config(&config),
            cache,
            logs,
            config,
        }
    }

    /// Engine with fresh in-memory stores sized from `config`.
    pub fn in_memory(config: EngineConfig) -> Self {
        let cache = Arc::new(MemoryAnalysisCache::from_config(&config));
        let logs = Arc::new(MemoryErrorLogStore::new());
        Self::new(config, cache, logs)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze one error, cache the result and, when the context names a
    /// project, link related history and append an error log.
    pub async fn analyze_error(
        &self,
        input: &ErrorInput,
        context: Option<&AnalysisContext>,
    ) -> ErrorAnalysis {
        let mut analysis = self.analyzer.analyze(input, context);
        let project_id = context.and_then(|ctx| ctx.project_id.as_deref());

        if let Some(project_id) = project_id {
            analysis.related_error_ids = self.related_errors(project_id, &analysis).await;
        }

        self.cache_analysis(&analysis).await;

        if let Some(project_id) = project_id {
            let log = ErrorLog {
                id: Uuid::new_v4().to_string(),
                project_id: project_id.to_string(),
                timestamp: Utc::now(),
                level: LogLevel::Error,
                message: analysis.error.message.clone(),
                stack: stack_text(input),
                resolved: false,
                analysis: Some(analysis.clone()),
            };
            if let Err(e) = self.logs.put(log).await {
                tracing::warn!(project_id, error = %e, "failed to append error log");
            }
        }

        tracing::info!(
            id = %analysis.id,
            category = %analysis.category,
            severity = %analysis.severity,
            "error analyzed"
        );
        analysis
    }

    /// Cached analysis by id. Store failures read as a miss.
    pub async fn get_analysis(&self, id: &str) -> Option<ErrorAnalysis> {
        match self.cache.get(id).await {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::warn!(id, error = %e, "analysis cache lookup failed");
                None
            }
        }
    }

    /// Logs of a project matching `query`, newest first.
    pub async fn get_error_logs(
        &self,
        project_id: &str,
        query: &LogQuery,
    ) -> EngineResult<Vec<ErrorLog>> {
        let mut logs = self.logs.list(project_id, query).await?;

        // Re-applied so the contract holds for any store implementation
        logs.retain(|log| log.project_id == project_id && query.matches(log));
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        if let Some(limit) = query.limit {
            logs.truncate(limit);
        }
        Ok(logs)
    }

    pub async fn resolve_error(&self, id: &str) -> EngineResult<()> {
        self.logs.mark_resolved(id).await?;
        tracing::info!(id, "error log resolved");
        Ok(())
    }

    /// Record a log entry without analyzing it. Returns the new log id.
    pub async fn log_error(
        &self,
        project_id: &str,
        level: LogLevel,
        message: &str,
        stack: Option<String>,
    ) -> EngineResult<String> {
        let id = Uuid::new_v4().to_string();
        self.logs
            .put(ErrorLog {
                id: id.clone(),
                project_id: project_id.to_string(),
                timestamp: Utc::now(),
                level,
                message: message.to_string(),
                stack,
                resolved: false,
                analysis: None,
            })
            .await?;
        Ok(id)
    }

    /// Scan source text and cache every analysis in the report. The report
    /// itself is not stored.
    pub async fn run_diagnostics(
        &self,
        project_id: &str,
        source: &str,
        files: &[String],
    ) -> DiagnosticReport {
        let report = DiagnosticsRunner::new(&self.analyzer, &self.config).run(project_id, source, files);
        for analysis in &report.errors {
            self.cache_analysis(analysis).await;
        }
        report
    }

    /// Apply a proposed fix. Rejections and IO failures yield `false`.
    pub async fn apply_fix(&self, fix: &CodeFix) -> bool {
        match self.fixer.apply_code_fix(fix).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(file = %fix.file, line = fix.line, error = %e, "fix not applied");
                false
            }
        }
    }

    async fn cache_analysis(&self, analysis: &ErrorAnalysis) {
        if let Err(e) = self.cache.insert(analysis.clone()).await {
            tracing::warn!(id = %analysis.id, error = %e, "failed to cache analysis");
        }
    }

    /// Unresolved logs of the project that share this analysis' pattern, or,
    /// with no pattern, its category and error name.
    async fn related_errors(&self, project_id: &str, analysis: &ErrorAnalysis) -> BTreeSet<String> {
        let logs = match self.logs.list(project_id, &LogQuery::unresolved()).await {
            Ok(logs) => logs,
            Err(e) => {
                tracing::warn!(project_id, error = %e, "related error lookup failed");
                return BTreeSet::new();
            }
        };

        logs.into_iter()
            .filter(|log| !log.resolved)
            .filter(|log| {
                log.analysis
                    .as_ref()
                    .is_some_and(|previous| is_related(previous, analysis))
            })
            .map(|log| log.id)
            .collect()
    }
}

fn is_related(previous: &ErrorAnalysis, current: &ErrorAnalysis) -> bool {
    match (&previous.root_cause.matched_pattern, &current.root_cause.matched_pattern) {
        (Some(a), Some(b)) => a == b,
        (None, None) => {
            previous.category == current.category && previous.error.name == current.error.name
        }
        _ => false,
    }
}

/// Raw trace text as supplied, without the header line.
fn stack_text(input: &ErrorInput) -> Option<String> {
    match input {
        ErrorInput::Text(text) => text
            .split_once('\n')
            .map(|(_, rest)| rest.to_string())
            .filter(|rest| !rest.trim().is_empty()),
        ErrorInput::Exception { stack, .. } => stack.clone(),
    }
}

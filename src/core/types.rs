use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Error categories produced by the categorizer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Syntax,
    Type,
    Runtime,
    Network,
    Database,
    Authentication,
    Permission,
    Configuration,
    Dependency,
    Build,
    Deployment,
    Memory,
    Timeout,
    Unknown,
}

impl ErrorCategory {
    pub const ALL: [ErrorCategory; 14] = [
        Self::Syntax,
        Self::Type,
        Self::Runtime,
        Self::Network,
        Self::Database,
        Self::Authentication,
        Self::Permission,
        Self::Configuration,
        Self::Dependency,
        Self::Build,
        Self::Deployment,
        Self::Memory,
        Self::Timeout,
        Self::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Type => "type",
            Self::Runtime => "runtime",
            Self::Network => "network",
            Self::Database => "database",
            Self::Authentication => "authentication",
            Self::Permission => "permission",
            Self::Configuration => "configuration",
            Self::Dependency => "dependency",
            Self::Build => "build",
            Self::Deployment => "deployment",
            Self::Memory => "memory",
            Self::Timeout => "timeout",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// One call frame extracted from a stack trace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StackFrame {
    pub function: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    /// Runtime or standard-library frame
    pub is_internal: bool,
    /// Third-party dependency frame
    pub is_library: bool,
}

impl StackFrame {
    /// User code is anything that is neither runtime-internal nor a dependency.
    pub fn is_user_code(&self) -> bool {
        !self.is_internal && !self.is_library
    }
}

/// Structured form of a raw error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedError {
    pub name: String,
    pub message: String,
    pub stack: Vec<StackFrame>,
    /// Verbatim input, kept so patterns can be re-matched against the raw text
    pub original_text: String,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

/// Raw error input accepted by the analyzer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ErrorInput {
    /// `"<Name>: <message>\n<stack...>"`
    Text(String),
    /// Exception-like value with separate fields
    Exception {
        name: String,
        message: String,
        stack: Option<String>,
    },
}

impl From<&str> for ErrorInput {
    fn from(value: &str) -> Self {
        ErrorInput::Text(value.to_string())
    }
}

impl From<String> for ErrorInput {
    fn from(value: String) -> Self {
        ErrorInput::Text(value)
    }
}

/// Optional caller-supplied context for an analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisContext {
    pub file: Option<String>,
    /// 1-based line override, used when the trace carries no location
    pub line: Option<u32>,
    /// Full source text of `file`
    pub code: Option<String>,
    pub project_id: Option<String>,
}

impl AnalysisContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RootCause {
    pub description: String,
    /// Always within [0, 1]
    pub confidence: f32,
    pub evidence: Vec<String>,
    /// Id of the registry pattern that matched, if any
    pub matched_pattern: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    CodeFix,
    ConfigChange,
    DependencyUpdate,
    ManualAction,
}

/// A single-line textual substitution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeFix {
    pub file: String,
    /// 1-based
    pub line: u32,
    pub old_code: String,
    pub new_code: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecoverySuggestion {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Lower is more important; 0 is reserved for synthesized code fixes
    pub priority: u32,
    pub kind: SuggestionKind,
    pub auto_fixable: bool,
    pub fix: Option<CodeFix>,
    pub commands: Option<Vec<String>>,
    pub steps: Option<Vec<String>>,
    pub confidence: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocLink {
    pub title: String,
    pub url: String,
    pub relevance: f32,
}

/// Immutable snapshot produced by one analysis call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorAnalysis {
    pub id: String,
    pub error: ParsedError,
    pub category: ErrorCategory,
    pub severity: Severity,
    pub root_cause: RootCause,
    pub suggestions: Vec<RecoverySuggestion>,
    pub related_error_ids: BTreeSet<String>,
    pub documentation: Vec<DocLink>,
    pub auto_fix_available: bool,
    pub created_at: DateTime<Utc>,
}

impl ErrorAnalysis {
    /// The synthesized code fix, if one was produced.
    pub fn code_fix(&self) -> Option<&CodeFix> {
        self.suggestions.iter().find_map(|s| s.fix.as_ref())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
}

/// Per-project error history entry. Only `resolved` changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorLog {
    pub id: String,
    pub project_id: String,
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub stack: Option<String>,
    pub resolved: bool,
    pub analysis: Option<ErrorAnalysis>,
}

/// Filter for error log retrieval.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogQuery {
    pub resolved: Option<bool>,
    pub limit: Option<usize>,
    pub level: Option<LogLevel>,
}

impl LogQuery {
    pub fn unresolved() -> Self {
        Self {
            resolved: Some(false),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, log: &ErrorLog) -> bool {
        self.resolved.map_or(true, |r| log.resolved == r)
            && self.level.map_or(true, |l| log.level == l)
    }
}

/// Project health report from a diagnostics run. Not persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub id: String,
    pub project_id: String,
    pub timestamp: DateTime<Utc>,
    pub errors: Vec<ErrorAnalysis>,
    pub warnings: Vec<String>,
    /// 0..=100
    pub health_score: u8,
    pub recommendations: Vec<String>,
}

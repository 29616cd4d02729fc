//! Line-oriented heuristic checks run over a block of source text.

use once_cell::sync::Lazy;
use regex::Regex;

static DEBUG_PRINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bconsole\.(?:log|debug)\s*\(").unwrap());
static TODO_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bTODO\b").unwrap());
static HARDCODED_SECRET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(api[_-]?key|password|secret)\s*[=:]\s*['"][^'"]+['"]"#).unwrap()
});
static LOOSE_TYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r":\s*any\b|\bas\s+any\b").unwrap());
// An async function head followed by its opening brace on the same line:
// `async function f(`, `async (`, `async x =>`, or a method `async name(`
static ASYNC_BODY_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\basync(?:[ \t]+function\b|[ \t]*\(|[ \t]+[\w$]+[ \t]*=>|[ \t]+[\w$]+[ \t]*\()[^{;\n]*\{",
    )
    .unwrap()
});
static AWAIT_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bawait\b").unwrap());

/// What a check found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Quality issue reported as a warning string
    Warning { check: DiagnosticCheck, message: String },
    /// Credential assigned a literal; `key` is the assigned name as written
    Secret { key: String },
}

/// The fixed checklist, in the order findings are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCheck {
    DebugPrint,
    UnresolvedTodo,
    HardcodedSecret,
    LooseTyping,
    AsyncWithoutAwait,
}

impl DiagnosticCheck {
    pub const ALL: [DiagnosticCheck; 5] = [
        DiagnosticCheck::DebugPrint,
        DiagnosticCheck::UnresolvedTodo,
        DiagnosticCheck::HardcodedSecret,
        DiagnosticCheck::LooseTyping,
        DiagnosticCheck::AsyncWithoutAwait,
    ];

    /// Run this check over `source`.
    ///
    /// Warning checks report presence once; the secret check reports every
    /// assignment it finds.
    pub fn scan(&self, source: &str) -> Vec<Finding> {
        match self {
            DiagnosticCheck::HardcodedSecret => HARDCODED_SECRET
                .captures_iter(source)
                .filter_map(|caps| caps.get(1))
                .map(|key| Finding::Secret {
                    key: key.as_str().to_string(),
                })
                .collect(),
            _ => {
                if self.detects(source) {
                    vec![Finding::Warning {
                        check: *self,
                        message: self.warning().to_string(),
                    }]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn detects(&self, source: &str) -> bool {
        match self {
            DiagnosticCheck::DebugPrint => DEBUG_PRINT.is_match(source),
            DiagnosticCheck::UnresolvedTodo => TODO_MARKER.is_match(source),
            DiagnosticCheck::HardcodedSecret => HARDCODED_SECRET.is_match(source),
            DiagnosticCheck::LooseTyping => LOOSE_TYPE.is_match(source),
            DiagnosticCheck::AsyncWithoutAwait => has_async_without_await(source),
        }
    }

    pub fn warning(&self) -> &'static str {
        match self {
            DiagnosticCheck::DebugPrint => "console.log statements found in source",
            DiagnosticCheck::UnresolvedTodo => "unresolved TODO comments found",
            DiagnosticCheck::HardcodedSecret => "hardcoded secret found",
            DiagnosticCheck::LooseTyping => "loosely typed 'any' annotations found",
            DiagnosticCheck::AsyncWithoutAwait => "async function without any await found",
        }
    }
}

/// Any `async` body whose braces enclose no `await`.
///
/// Bodies are delimited by brace counting; an unterminated body runs to the
/// end of the text. Braces inside strings are not special-cased.
fn has_async_without_await(source: &str) -> bool {
    ASYNC_BODY_START.find_iter(source).any(|m| {
        // The match ends just past the opening brace
        let body_start = m.end();
        let body = &source[body_start..body_end(source, body_start)];
        !AWAIT_KEYWORD.is_match(body)
    })
}

fn body_end(source: &str, body_start: usize) -> usize {
    let mut depth = 1usize;
    for (offset, ch) in source[body_start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return body_start + offset;
                }
            }
            _ => {}
        }
    }
    source.len()
}

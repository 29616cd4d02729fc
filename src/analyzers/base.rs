use once_cell::sync::Lazy;
use regex::Regex;

static MEMBER_ACCESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z_$][\w$]*(?:\(\))?\.[A-Za-z_$]").unwrap());
static AWAIT_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bawait\b").unwrap());
static ASYNC_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\basync\b").unwrap());
static MODULE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:Cannot find module|Module not found:.*?Can't resolve|Cannot resolve module)\s+['"]([^'"]+)['"]"#)
        .unwrap()
});
static EXPECTED_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"is not assignable to type '([^']+)'").unwrap());

/// Line-shape helpers shared by the root cause analyzer and the fix rules
pub trait AnalyzerBase {
    /// Extract quoted identifiers from the error message
    fn extract_identifiers(&self, message: &str) -> Vec<String> {
        MessagePatterns::extract_quoted_identifiers(message)
    }

    /// The 1-based `line` of `code`, if it exists
    fn source_line<'a>(&self, code: &'a str, line: u32) -> Option<&'a str> {
        let index = usize::try_from(line).ok()?.checked_sub(1)?;
        code.lines().nth(index)
    }

    /// `await` on a line that does not itself declare an async context
    fn uses_await_outside_async(&self, line: &str) -> bool {
        AWAIT_KEYWORD.is_match(line) && !ASYNC_KEYWORD.is_match(line)
    }

    /// Member access (`a.b`) with no optional chaining anywhere on the line
    fn has_unguarded_member_access(&self, line: &str) -> bool {
        !line.contains("?.") && MEMBER_ACCESS.is_match(line)
    }

    /// Clamp a score into [0, 1]
    fn clamp_confidence(&self, score: f32) -> f32 {
        if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, 1.0)
        }
    }
}

/// Message pattern extraction utilities
pub struct MessagePatterns;

impl MessagePatterns {
    /// Extract quoted identifiers from message (e.g., 'foo', "bar", `baz`)
    pub fn extract_quoted_identifiers(message: &str) -> Vec<String> {
        let mut identifiers = Vec::new();
        let mut current_quote = None;
        let mut current_identifier = String::new();

        for ch in message.chars() {
            match (ch, current_quote) {
                ('\'', None) | ('"', None) | ('`', None) => {
                    current_quote = Some(ch);
                    current_identifier.clear();
                }
                (quote_char, Some(expected)) if quote_char == expected => {
                    if !current_identifier.is_empty() {
                        identifiers.push(current_identifier.clone());
                    }
                    current_quote = None;
                    current_identifier.clear();
                }
                (ch, Some(_)) => {
                    current_identifier.push(ch);
                }
                _ => {}
            }
        }

        identifiers
    }

    /// Module specifier from a module resolution failure
    pub fn extract_module_name(message: &str) -> Option<String> {
        MODULE_NAME
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Installable package name for a module specifier.
    ///
    /// Relative and absolute paths are not packages. Deep imports are cut
    /// back to the package root (`lodash/fp` -> `lodash`, `@a/b/c` -> `@a/b`).
    pub fn package_name(specifier: &str) -> Option<String> {
        if specifier.is_empty()
            || specifier.starts_with('.')
            || specifier.starts_with('/')
            || specifier.starts_with("node:")
        {
            return None;
        }

        let mut parts = specifier.split('/');
        let first = parts.next()?;
        if first.starts_with('@') {
            let second = parts.next().filter(|s| !s.is_empty())?;
            Some(format!("{first}/{second}"))
        } else {
            Some(first.to_string())
        }
    }

    /// Target type from "is not assignable to type '<T>'"
    pub fn extract_expected_type(message: &str) -> Option<String> {
        EXPECTED_TYPE
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

//! Single-line code fix rules.
//!
//! Each rule inspects one source line plus the error message and either
//! produces a replacement line or declines with `None`. Rules are tried in
//! [`FixRule::ALL`] order and the first one that produces a change wins.

use crate::analyzers::base::{AnalyzerBase, MessagePatterns};
use once_cell::sync::Lazy;
use regex::Regex;

static NULLISH_MESSAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bundefined\b|\bnull\b").unwrap());
static ASYNC_MESSAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bpromise\b|\bawait\b").unwrap());
static READING_PROPERTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\(reading ['"]([^'"]+)['"]\)"#).unwrap());
static FIRST_MEMBER_ACCESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z_$][\w$]*(?:\(\))?)\.([A-Za-z_$])").unwrap());
// Call at the start of an expression, optionally behind a declaration,
// an assignment target or `return`. Groups: prefix, callee, open paren.
static LEADING_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\s*(?:(?:const|let|var)\s+[^=]+?=\s*|[\w$.\[\]]+\s*=\s*|return\s+)?)([A-Za-z_$][\w$.]*)(\s*\()",
    )
    .unwrap()
});
static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\s*(?:(?:const|let|var)\s+)?[\w$.]+(?:\s*:\s*[^=]+?)?\s*=\s*)([^=>\s].*?)(\s*;?\s*)$",
    )
    .unwrap()
});

/// Keywords that take a parenthesized operand but are not calls
const NON_CALLABLE_KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "function", "typeof", "return", "new", "do",
    "with", "await", "yield", "void", "delete", "super",
];

/// The closed set of single-line transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixRule {
    /// `a.b` -> `a?.b`
    GuardedAccess,
    /// `const x = load()` -> `const x = await load()`
    AwaitInsertion,
    /// `x = value` -> `x = (value as T)`
    TypeAssertion,
}

impl AnalyzerBase for FixRule {}

impl FixRule {
    pub const ALL: [FixRule; 3] = [
        FixRule::GuardedAccess,
        FixRule::AwaitInsertion,
        FixRule::TypeAssertion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FixRule::GuardedAccess => "guarded_access",
            FixRule::AwaitInsertion => "await_insertion",
            FixRule::TypeAssertion => "type_assertion",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FixRule::GuardedAccess => "Use optional chaining",
            FixRule::AwaitInsertion => "Await the asynchronous call",
            FixRule::TypeAssertion => "Add a type assertion",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            FixRule::GuardedAccess => {
                "Guard the member access so a null or undefined receiver yields undefined instead of throwing"
            }
            FixRule::AwaitInsertion => "Wait for the promise to settle before using its result",
            FixRule::TypeAssertion => "Assert the assigned value to the type the target expects",
        }
    }

    /// Replacement for `line`, or `None` when the rule does not apply.
    pub fn apply(&self, line: &str, message: &str) -> Option<String> {
        let rewritten = match self {
            FixRule::GuardedAccess => self.guard_access(line, message),
            FixRule::AwaitInsertion => self.insert_await(line, message),
            FixRule::TypeAssertion => Self::assert_type(line, message),
        }?;
        (rewritten != line).then_some(rewritten)
    }

    /// First rule in precedence order that rewrites `line`.
    pub fn first_applicable(line: &str, message: &str) -> Option<(FixRule, String)> {
        Self::ALL
            .iter()
            .find_map(|rule| rule.apply(line, message).map(|fixed| (*rule, fixed)))
    }

    fn guard_access(&self, line: &str, message: &str) -> Option<String> {
        if !NULLISH_MESSAGE.is_match(message) || !self.has_unguarded_member_access(line) {
            return None;
        }

        // Prefer the property the runtime reported, fall back to the first access
        let reported = READING_PROPERTY
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());

        if let Some(property) = reported {
            let targeted = Regex::new(&format!(r"([\w$\)\]])\.({})\b", regex::escape(property))).ok()?;
            if targeted.is_match(line) {
                return Some(targeted.replacen(line, 1, "$1?.$2").into_owned());
            }
        }

        Some(FIRST_MEMBER_ACCESS.replacen(line, 1, "$1?.$2").into_owned())
    }

    fn insert_await(&self, line: &str, message: &str) -> Option<String> {
        if !ASYNC_MESSAGE.is_match(message) || line.contains(".then(") {
            return None;
        }
        if self.uses_await_outside_async(line) || line.contains("await ") {
            return None;
        }

        let callee = LEADING_CALL.captures(line)?.get(2)?.as_str();
        if NON_CALLABLE_KEYWORDS.contains(&callee) {
            return None;
        }
        Some(LEADING_CALL.replacen(line, 1, "${1}await ${2}${3}").into_owned())
    }

    fn assert_type(line: &str, message: &str) -> Option<String> {
        let expected = MessagePatterns::extract_expected_type(message)?;
        let caps = ASSIGNMENT.captures(line)?;
        let prefix = caps.get(1)?.as_str();
        let value = caps.get(2)?.as_str();
        let suffix = caps.get(3)?.as_str();
        if value.ends_with(&format!(" as {expected}")) || value.ends_with(&format!(" as {expected})")) {
            return None;
        }

        // The pattern is anchored at both ends, so the captures cover the line
        Some(format!("{prefix}({value} as {expected}){suffix}"))
    }
}

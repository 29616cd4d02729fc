use super::stack_trace::StackTraceParser;
use crate::core::constants::error_names;
use crate::core::types::{AnalysisContext, ErrorInput, ParsedError, StackFrame};
use once_cell::sync::Lazy;
use regex::Regex;

static HEADER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w*Error|\w+Exception):\s*(.+)$").unwrap());

/// Turns raw error input into a [`ParsedError`].
///
/// Never fails: malformed input degrades to a `ParsedError` named `Error`
/// whose message is the first line and whose stack is empty.
pub struct ErrorParser;

impl ErrorParser {
    pub fn parse(input: &ErrorInput, context: Option<&AnalysisContext>) -> ParsedError {
        let mut parsed = match input {
            ErrorInput::Text(text) => Self::parse_text(text),
            ErrorInput::Exception {
                name,
                message,
                stack,
            } => Self::parse_exception(name, message, stack.as_deref()),
        };

        if let Some(ctx) = context {
            Self::apply_context(&mut parsed, ctx);
        }

        parsed
    }

    fn parse_text(text: &str) -> ParsedError {
        let mut lines = text.lines();
        let first = lines.next().unwrap_or_default().trim();
        let (name, message) = Self::split_header(first);
        let stack = StackTraceParser::parse(lines);

        Self::build(name, message, stack, text.to_string())
    }

    fn parse_exception(name: &str, message: &str, stack: Option<&str>) -> ParsedError {
        let name = if name.trim().is_empty() {
            error_names::DEFAULT.to_string()
        } else {
            name.trim().to_string()
        };
        let frames = stack.map(StackTraceParser::parse_str).unwrap_or_default();

        // Runtimes usually repeat "Name: message" as the first stack line
        let original_text = match stack {
            Some(trace) if trace.starts_with(&name) => trace.to_string(),
            Some(trace) => format!("{name}: {message}\n{trace}"),
            None => format!("{name}: {message}"),
        };

        Self::build(name, message.to_string(), frames, original_text)
    }

    fn split_header(line: &str) -> (String, String) {
        HEADER_PATTERN
            .captures(line)
            .and_then(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
            .map(|(name, message)| (name.to_string(), message.trim().to_string()))
            .unwrap_or_else(|| (error_names::DEFAULT.to_string(), line.to_string()))
    }

    fn build(
        name: String,
        message: String,
        stack: Vec<StackFrame>,
        original_text: String,
    ) -> ParsedError {
        let first = stack.first();
        ParsedError {
            file: first.map(|f| f.file.clone()),
            line: first.map(|f| f.line),
            column: first.map(|f| f.column),
            name,
            message,
            stack,
            original_text,
        }
    }

    /// Caller-supplied location wins over the trace-derived one.
    fn apply_context(parsed: &mut ParsedError, ctx: &AnalysisContext) {
        if let Some(file) = &ctx.file {
            parsed.file = Some(file.clone());
        }
        if let Some(line) = ctx.line {
            parsed.line = Some(line);
            parsed.column = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_text_with_stack() {
        let input = ErrorInput::from(
            "TypeError: Cannot read properties of undefined (reading 'name')\n    at render (/app/src/profile.js:12:20)\n    at /app/src/index.js:4:1",
        );
        let parsed = ErrorParser::parse(&input, None);

        assert_eq!(parsed.name, "TypeError");
        assert_eq!(
            parsed.message,
            "Cannot read properties of undefined (reading 'name')"
        );
        assert_eq!(parsed.stack.len(), 2);
        assert_eq!(parsed.file.as_deref(), Some("/app/src/profile.js"));
        assert_eq!(parsed.line, Some(12));
        assert_eq!(parsed.column, Some(20));
    }

    #[test]
    fn test_bare_error_header() {
        let parsed = ErrorParser::parse(&ErrorInput::from("Error: something broke"), None);
        assert_eq!(parsed.name, "Error");
        assert_eq!(parsed.message, "something broke");
    }

    #[test]
    fn test_unrecognized_header_falls_back() {
        let parsed = ErrorParser::parse(&ErrorInput::from("segfault at 0x0"), None);
        assert_eq!(parsed.name, "Error");
        assert_eq!(parsed.message, "segfault at 0x0");
        assert!(parsed.stack.is_empty());
        assert_eq!(parsed.file, None);
    }

    #[test]
    fn test_empty_input() {
        let parsed = ErrorParser::parse(&ErrorInput::from(""), None);
        assert_eq!(parsed.name, "Error");
        assert_eq!(parsed.message, "");
        assert!(parsed.stack.is_empty());
    }

    #[test]
    fn test_exception_input() {
        let input = ErrorInput::Exception {
            name: "ReferenceError".to_string(),
            message: "foo is not defined".to_string(),
            stack: Some("ReferenceError: foo is not defined\n    at run (/app/a.js:2:3)".to_string()),
        };
        let parsed = ErrorParser::parse(&input, None);

        assert_eq!(parsed.name, "ReferenceError");
        assert_eq!(parsed.message, "foo is not defined");
        assert_eq!(parsed.stack.len(), 1);
        assert!(parsed.original_text.starts_with("ReferenceError: foo"));
    }

    #[test]
    fn test_context_overrides_location() {
        let input = ErrorInput::from("Error: x\n    at f (/app/a.js:2:3)");
        let ctx = AnalysisContext::new().with_file("src/b.ts").with_line(9);
        let parsed = ErrorParser::parse(&input, Some(&ctx));

        assert_eq!(parsed.file.as_deref(), Some("src/b.ts"));
        assert_eq!(parsed.line, Some(9));
        assert_eq!(parsed.column, None);
        // The trace itself is untouched
        assert_eq!(parsed.stack[0].file, "/app/a.js");
    }
}

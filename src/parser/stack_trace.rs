use crate::core::constants::frames;
use crate::core::types::StackFrame;
use once_cell::sync::Lazy;
use regex::Regex;

// `at fn (file:line:col)` or `at file:line:col`
static FRAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*at\s+(?:(?:async\s+)?(.+?)\s+\()?(.+?):(\d+):(\d+)\)?\s*$").unwrap()
});

/// Best-effort extraction of call frames from a trace.
///
/// Lines that do not look like frames are skipped. Frames keep the order in
/// which the runtime printed them.
pub struct StackTraceParser;

impl StackTraceParser {
    pub fn parse<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<StackFrame> {
        lines
            .into_iter()
            .filter_map(|line| {
                let caps = FRAME_PATTERN.captures(line)?;
                let file = caps.get(2)?.as_str().to_string();
                let line_no = caps.get(3)?.as_str().parse().ok()?;
                let column = caps.get(4)?.as_str().parse().ok()?;
                let function = caps
                    .get(1)
                    .map(|m| m.as_str().trim())
                    .filter(|f| !f.is_empty())
                    .unwrap_or(frames::ANONYMOUS)
                    .to_string();

                Some(StackFrame {
                    function,
                    is_internal: Self::is_internal(&file),
                    is_library: Self::is_library(&file),
                    file,
                    line: line_no,
                    column,
                })
            })
            .collect()
    }

    /// Parse a whole trace string.
    pub fn parse_str(trace: &str) -> Vec<StackFrame> {
        Self::parse(trace.lines())
    }

    pub fn is_library(file: &str) -> bool {
        frames::LIBRARY_SEGMENTS.iter().any(|seg| file.contains(seg))
    }

    pub fn is_internal(file: &str) -> bool {
        frames::INTERNAL_PREFIXES
            .iter()
            .any(|prefix| file.starts_with(prefix))
    }
}

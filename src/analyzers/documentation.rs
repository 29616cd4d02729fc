use crate::core::types::{DocLink, ErrorCategory};

struct DocEntry {
    title: &'static str,
    url: &'static str,
    relevance: f32,
}

const fn doc(title: &'static str, url: &'static str, relevance: f32) -> DocEntry {
    DocEntry {
        title,
        url,
        relevance,
    }
}

/// Curated reference links, keyed by category. Bundled, never fetched.
const DOC_TABLE: &[(ErrorCategory, DocEntry)] = &[
    (
        ErrorCategory::Syntax,
        doc(
            "MDN: JavaScript error reference",
            "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Errors",
            0.8,
        ),
    ),
    (
        ErrorCategory::Type,
        doc(
            "TypeScript Handbook: Narrowing",
            "https://www.typescriptlang.org/docs/handbook/2/narrowing.html",
            0.9,
        ),
    ),
    (
        ErrorCategory::Type,
        doc(
            "MDN: Optional chaining (?.)",
            "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Operators/Optional_chaining",
            0.8,
        ),
    ),
    (
        ErrorCategory::Runtime,
        doc(
            "MDN: Control flow and error handling",
            "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide/Control_flow_and_error_handling",
            0.7,
        ),
    ),
    (
        ErrorCategory::Network,
        doc(
            "MDN: Using the Fetch API",
            "https://developer.mozilla.org/en-US/docs/Web/API/Fetch_API/Using_Fetch",
            0.8,
        ),
    ),
    (
        ErrorCategory::Authentication,
        doc(
            "MDN: HTTP authentication",
            "https://developer.mozilla.org/en-US/docs/Web/HTTP/Authentication",
            0.8,
        ),
    ),
    (
        ErrorCategory::Permission,
        doc(
            "Node.js: Common system errors",
            "https://nodejs.org/api/errors.html#common-system-errors",
            0.7,
        ),
    ),
    (
        ErrorCategory::Dependency,
        doc(
            "npm Docs: npm install",
            "https://docs.npmjs.com/cli/commands/npm-install",
            0.9,
        ),
    ),
    (
        ErrorCategory::Dependency,
        doc("Node.js: Modules", "https://nodejs.org/api/modules.html", 0.7),
    ),
    (
        ErrorCategory::Memory,
        doc(
            "Node.js: Command-line options (--max-old-space-size)",
            "https://nodejs.org/api/cli.html#--max-old-space-sizesize-in-megabytes",
            0.8,
        ),
    ),
    (
        ErrorCategory::Configuration,
        doc(
            "Node.js: process.env",
            "https://nodejs.org/api/process.html#processenv",
            0.7,
        ),
    ),
];

/// Static category to documentation lookup.
pub struct DocumentationLinker;

impl DocumentationLinker {
    /// Links for `category`; empty when nothing is curated for it.
    pub fn links_for(category: ErrorCategory) -> Vec<DocLink> {
        DOC_TABLE
            .iter()
            .filter(|(linked, _)| *linked == category)
            .map(|(_, entry)| DocLink {
                title: entry.title.to_string(),
                url: entry.url.to_string(),
                relevance: entry.relevance,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_are_well_formed() {
        for category in ErrorCategory::ALL {
            for link in DocumentationLinker::links_for(category) {
                assert!(link.url.starts_with("https://"), "{category}: {}", link.url);
                assert!((0.0..=1.0).contains(&link.relevance));
                assert!(!link.title.is_empty());
            }
        }
    }

    #[test]
    fn test_uncurated_categories_are_empty() {
        assert!(DocumentationLinker::links_for(ErrorCategory::Unknown).is_empty());
        assert!(DocumentationLinker::links_for(ErrorCategory::Database).is_empty());
        assert_eq!(DocumentationLinker::links_for(ErrorCategory::Type).len(), 2);
    }
}

//! Static table of known error signatures.
//!
//! Declaration order is precedence: the categorizer walks the registry top
//! to bottom and stops at the first match, so specific signatures must come
//! before the generic ones that would otherwise shadow them.

use super::rules::MatchRule;
use crate::core::types::{ErrorCategory, ParsedError};
use once_cell::sync::Lazy;

/// A known error signature with canned causes and remedies.
#[derive(Debug, Clone)]
pub struct ErrorPattern {
    pub id: &'static str,
    pub name: &'static str,
    pub matcher: MatchRule,
    pub category: ErrorCategory,
    pub common_causes: &'static [&'static str],
    pub solutions: &'static [&'static str],
}

impl ErrorPattern {
    pub fn matches(&self, error: &ParsedError) -> bool {
        self.matcher.matches(error)
    }
}

struct PatternDef {
    id: &'static str,
    name: &'static str,
    signature: &'static str,
    category: ErrorCategory,
    common_causes: &'static [&'static str],
    solutions: &'static [&'static str],
}

const PATTERN_DEFS: &[PatternDef] = &[
    PatternDef {
        id: "module_not_found",
        name: "Module Not Found",
        signature: r"Cannot find module|Module not found|Cannot resolve module|ERR_MODULE_NOT_FOUND",
        category: ErrorCategory::Dependency,
        common_causes: &[
            "Package is not installed or missing from package.json",
            "Import path is misspelled or points to a moved file",
            "Lockfile and node_modules are out of sync",
        ],
        solutions: &[
            "Install the missing package",
            "Verify the import path and file extension",
            "Delete node_modules and reinstall dependencies",
        ],
    },
    PatternDef {
        id: "undefined_property_access",
        name: "Undefined Property Access",
        signature: r"Cannot read propert(?:y|ies) of (?:undefined|null)|undefined is not an object",
        category: ErrorCategory::Type,
        common_causes: &[
            "Accessing a property on a value that is undefined or null",
            "Async data used before it finished loading",
            "Missing field in an API response",
        ],
        solutions: &[
            "Use optional chaining (?.) when accessing nested properties",
            "Check the value exists before accessing its properties",
            "Provide a default value with nullish coalescing (??)",
        ],
    },
    PatternDef {
        id: "not_a_function",
        name: "Not A Function",
        signature: r"is not a function",
        category: ErrorCategory::Type,
        common_causes: &[
            "Calling a value that is not a function",
            "Named and default import mixed up",
            "Method called on the wrong object type",
        ],
        solutions: &[
            "Check the value's type before calling it",
            "Verify the import matches how the module exports it",
        ],
    },
    PatternDef {
        id: "type_not_assignable",
        name: "Type Not Assignable",
        signature: r"is not assignable to (?:type|parameter of type)",
        category: ErrorCategory::Type,
        common_causes: &[
            "Value type does not match the declared type",
            "Function argument has the wrong type",
        ],
        solutions: &[
            "Convert the value to the expected type",
            "Update the declared type to accept the value",
            "Add a type assertion when the value is known to be correct",
        ],
    },
    PatternDef {
        id: "await_outside_async",
        name: "Await Outside Async",
        signature: r"await is only valid in async function|'await' expressions are only allowed",
        category: ErrorCategory::Syntax,
        common_causes: &["await used inside a function that is not declared async"],
        solutions: &[
            "Mark the enclosing function as async",
            "Use .then() to handle the promise instead of await",
        ],
    },
    PatternDef {
        id: "unexpected_token",
        name: "Unexpected Token",
        signature: r"Unexpected token|Unexpected end of (?:input|JSON)|Unexpected identifier|Unterminated string",
        category: ErrorCategory::Syntax,
        common_causes: &[
            "Missing or extra bracket, brace or parenthesis",
            "Invalid JSON payload parsed as JSON",
            "Syntax not supported by the current runtime or transpiler",
        ],
        solutions: &[
            "Check the reported line for unbalanced brackets",
            "Validate JSON input before parsing",
            "Verify the build target supports the syntax used",
        ],
    },
    PatternDef {
        id: "not_defined",
        name: "Reference Not Defined",
        signature: r"\b\w+ is not defined\b",
        category: ErrorCategory::Runtime,
        common_causes: &[
            "Variable or function used before it was declared",
            "Missing import",
            "Typo in the identifier name",
        ],
        solutions: &[
            "Import or declare the identifier",
            "Check the spelling of the identifier",
        ],
    },
    PatternDef {
        id: "stack_overflow",
        name: "Stack Overflow",
        signature: r"Maximum call stack size exceeded",
        category: ErrorCategory::Memory,
        common_causes: &["Unbounded recursion with no base case"],
        solutions: &[
            "Add or fix the recursion base case",
            "Rewrite deep recursion iteratively",
        ],
    },
    PatternDef {
        id: "heap_out_of_memory",
        name: "Heap Out Of Memory",
        signature: r"(?i)heap out of memory|allocation failed|out of memory",
        category: ErrorCategory::Memory,
        common_causes: &[
            "Process exceeded the runtime heap limit",
            "Memory leak from retained references or unbounded caches",
        ],
        solutions: &[
            "Increase the heap size limit",
            "Profile memory usage to find leaks",
            "Process large data in streams or batches",
        ],
    },
    PatternDef {
        id: "connection_refused",
        name: "Connection Refused",
        signature: r"ECONNREFUSED|ECONNRESET|ENOTFOUND|socket hang up",
        category: ErrorCategory::Network,
        common_causes: &[
            "Target service is not running",
            "Wrong host or port",
            "Firewall or DNS blocking the connection",
        ],
        solutions: &[
            "Verify the service is running and reachable",
            "Check host and port configuration",
        ],
    },
    PatternDef {
        id: "fetch_failed",
        name: "Fetch Failed",
        signature: r"Failed to fetch|NetworkError|CORS|Access-Control-Allow-Origin",
        category: ErrorCategory::Network,
        common_causes: &[
            "Request blocked by CORS policy",
            "Network unavailable or request aborted",
        ],
        solutions: &[
            "Configure CORS headers on the server",
            "Add error handling around network requests",
        ],
    },
    PatternDef {
        id: "operation_timeout",
        name: "Operation Timeout",
        signature: r"ETIMEDOUT|ESOCKETTIMEDOUT|(?i:timed? ?out after|operation timed out)",
        category: ErrorCategory::Timeout,
        common_causes: &[
            "Remote service responded too slowly",
            "Long-running operation exceeded its time budget",
        ],
        solutions: &[
            "Increase the timeout for this operation",
            "Add retries with exponential backoff",
        ],
    },
    PatternDef {
        id: "database_error",
        name: "Database Error",
        signature: r"SQLITE_[A-Z_]+|\bER_[A-Z_]+|duplicate key value|relation .+ does not exist|(?i:deadlock detected|connection pool)",
        category: ErrorCategory::Database,
        common_causes: &[
            "Database schema does not match the query",
            "Constraint violation on insert or update",
            "Database connection lost or pool exhausted",
        ],
        solutions: &[
            "Run pending migrations",
            "Check constraints and unique keys for the affected table",
            "Verify database connection settings",
        ],
    },
    PatternDef {
        id: "hardcoded_secret",
        name: "Hardcoded Secret",
        signature: r"(?i)hardcoded (?:credential|secret|api key|password)",
        category: ErrorCategory::Authentication,
        common_causes: &["Credential literal committed in source code"],
        solutions: &[
            "Move the secret into an environment variable or secret manager",
            "Rotate the exposed credential",
        ],
    },
    PatternDef {
        id: "unauthorized",
        name: "Unauthorized",
        signature: r"(?:status(?: code)?|HTTP) 401|Unauthorized|jwt expired|(?i:invalid token|invalid credentials)",
        category: ErrorCategory::Authentication,
        common_causes: &[
            "Missing or expired authentication token",
            "Invalid credentials",
        ],
        solutions: &[
            "Refresh the authentication token",
            "Verify credentials and authentication headers",
        ],
    },
    PatternDef {
        id: "permission_denied",
        name: "Permission Denied",
        signature: r"EACCES|EPERM|(?:status(?: code)?|HTTP) 403|Forbidden|(?i:permission denied)",
        category: ErrorCategory::Permission,
        common_causes: &[
            "Process lacks file system permissions",
            "User lacks the role required for the resource",
        ],
        solutions: &[
            "Check file ownership and permissions",
            "Grant the required role or scope",
        ],
    },
    PatternDef {
        id: "port_in_use",
        name: "Port In Use",
        signature: r"EADDRINUSE|(?i)address already in use",
        category: ErrorCategory::Deployment,
        common_causes: &["Another process is already listening on the port"],
        solutions: &[
            "Stop the process using the port",
            "Configure a different port",
        ],
    },
    PatternDef {
        id: "missing_env",
        name: "Missing Environment Variable",
        signature: r"(?i)(?:environment variable|env var)\S* .*(?:not set|missing|undefined|required)",
        category: ErrorCategory::Configuration,
        common_causes: &["Required environment variable is not set"],
        solutions: &[
            "Define the variable in the environment or .env file",
            "Add validation for required configuration at startup",
        ],
    },
    PatternDef {
        id: "build_failed",
        name: "Build Failed",
        signature: r"(?i)build failed|compilation failed|failed to compile",
        category: ErrorCategory::Build,
        common_causes: &[
            "Compilation error in source",
            "Stale build cache",
        ],
        solutions: &[
            "Fix the first reported compilation error",
            "Clear build caches and rebuild",
        ],
    },
];

/// The registry, compiled once in declaration order.
pub static PATTERN_REGISTRY: Lazy<Vec<ErrorPattern>> = Lazy::new(|| {
    PATTERN_DEFS
        .iter()
        .filter_map(|def| {
            MatchRule::signature(def.signature).map(|matcher| ErrorPattern {
                id: def.id,
                name: def.name,
                matcher,
                category: def.category,
                common_causes: def.common_causes,
                solutions: def.solutions,
            })
        })
        .collect()
});

/// Registry in precedence order.
pub fn patterns() -> &'static [ErrorPattern] {
    &PATTERN_REGISTRY
}

/// First pattern matching the error, if any.
pub fn find_match(error: &ParsedError) -> Option<&'static ErrorPattern> {
    patterns().iter().find(|p| p.matches(error))
}

pub fn get_pattern(id: &str) -> Option<&'static ErrorPattern> {
    patterns().iter().find(|p| p.id == id)
}

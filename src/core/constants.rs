//! String constants shared by the parser, analyzers and suggestion generator.

/// Stack frame classification markers
pub mod frames {
    /// Placeholder for frames with no function name
    pub const ANONYMOUS: &str = "<anonymous>";
    /// Path segment identifying third-party dependency code
    pub const LIBRARY_SEGMENTS: &[&str] = &["node_modules/", "node_modules\\"];
    /// Path prefixes identifying runtime-internal code
    pub const INTERNAL_PREFIXES: &[&str] = &["node:", "internal/"];
}

/// Error names produced by the parser when none can be read
pub mod error_names {
    pub const DEFAULT: &str = "Error";
    pub const TYPE_ERROR: &str = "TypeError";
}

/// Confidence values used when scoring root causes and suggestions
pub mod confidence {
    pub const PATTERN_MATCH: f32 = 0.7;
    pub const NO_PATTERN: f32 = 0.3;
    pub const USER_FRAME_BONUS: f32 = 0.1;
    pub const AWAIT_OUTSIDE_ASYNC: f32 = 0.9;
    pub const UNGUARDED_ACCESS: f32 = 0.6;
    pub const SYNTHESIZED_FIX: f32 = 0.8;
    pub const SOLUTION_BASE: f32 = 0.7;
    pub const SOLUTION_STEP: f32 = 0.1;
}

/// Root cause descriptions that are not taken from the pattern registry
pub mod root_causes {
    pub const UNDETERMINED: &str = "unable to determine root cause";
    pub const AWAIT_OUTSIDE_ASYNC: &str = "await used outside async function";
    pub const UNGUARDED_ACCESS: &str =
        "potential null/undefined access — consider optional chaining";
}

/// Package manager commands emitted by dependency, build and memory suggestions
pub mod commands {
    pub const NPM_INSTALL: &str = "npm install";
    pub const CLEAN_CACHES: &str = "rm -rf node_modules/.cache dist build";
    pub const REBUILD: &str = "npm run build";
    pub const RAISE_HEAP: &str = "export NODE_OPTIONS=--max-old-space-size=4096";
}

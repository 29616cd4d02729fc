pub mod checks;
pub mod runner;

pub use checks::{DiagnosticCheck, Finding};
pub use runner::DiagnosticsRunner;

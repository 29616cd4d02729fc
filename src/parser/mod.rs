pub mod error_parser;
pub mod stack_trace;

pub use error_parser::ErrorParser;
pub use stack_trace::StackTraceParser;

pub mod memory;
pub mod traits;

pub use memory::{MemoryAnalysisCache, MemoryErrorLogStore};
pub use traits::{AnalysisCache, ErrorLogStore};

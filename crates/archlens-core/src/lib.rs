//! ArchLens Core Library
//!
//! Domain models, the analysis service contract and blueprint rating rules.

pub mod analysis;
pub mod blueprint;
pub mod error;

pub use analysis::{AnalysisService, MemoryAnalysisService, SharedAnalysisService};
pub use error::{ArchLensError, ArchLensResult};

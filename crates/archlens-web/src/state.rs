//! Application state.

use archlens_core::SharedAnalysisService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: SharedAnalysisService,
}

impl AppState {
    pub fn new(service: SharedAnalysisService) -> Self {
        Self { service }
    }
}

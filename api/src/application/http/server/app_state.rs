use std::sync::Arc;

use snapchef_core::application::SnapChefService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SnapChefService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SnapChefService) -> Self {
        Self { args, service }
    }
}

use std::sync::Arc;

use fidofeed_core::application::FidoFeedService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FidoFeedService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FidoFeedService) -> Self {
        Self { args, service }
    }
}

use std::sync::Arc;

use crate::config::Config;
use crate::enhance::guard::PendingFields;
use crate::enhance::TextEnhancer;
use crate::layout::{a4_page_config, HeightMeasurer, MetricMeasurer, PageConfig};
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Pluggable rewrite backend. `LlmEnhancer` with an API key, `UnavailableEnhancer` without.
    pub enhancer: Arc<dyn TextEnhancer>,
    /// Fields with an enhancement in flight.
    pub pending_fields: PendingFields,
    /// Height measurement strategy for the layout pass.
    pub measurer: Arc<dyn HeightMeasurer>,
    pub config: Config,
    /// A4 geometry shared by pagination and the PDF export.
    pub page_config: PageConfig,
}

impl AppState {
    /// State with an empty session store, A4 geometry and the metric measurer.
    pub fn new(config: Config, enhancer: Arc<dyn TextEnhancer>) -> Self {
        let page_config = a4_page_config();
        let measurer = Arc::new(MetricMeasurer {
            content_width_pt: page_config.content_width(),
        });
        AppState {
            sessions: SessionStore::new(),
            enhancer,
            pending_fields: PendingFields::new(),
            measurer,
            config,
            page_config,
        }
    }
}

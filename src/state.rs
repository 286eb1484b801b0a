use crate::brick::BrickValidator;
use crate::config::AppConfig;
use crate::events::EventHub;
use crate::locks::PathLocks;

/// Shared application state passed to all API handlers via axum's State extractor.
pub struct AppState {
    pub config: AppConfig,
    pub event_hub: EventHub,
    pub(crate) validator: BrickValidator,
    /// Serializes validations of the same brick path.
    pub(crate) locks: PathLocks,
}

impl AppState {
    pub(crate) fn new(config: AppConfig, event_hub: EventHub, validator: BrickValidator) -> Self {
        Self { config, event_hub, validator, locks: PathLocks::new() }
    }
}

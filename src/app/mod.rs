pub mod run;

use perf_core::Predictor;

use crate::config::AppConfig;

/// Everything the screens need that outlives a single screen: the
/// resolved file paths and the once-loaded predictor.
pub struct AppContext {
    pub config: AppConfig,
    pub predictor: Predictor,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let predictor = Predictor::from_path(&config.model_path);
        Self { config, predictor }
    }
}

// Application state for HTTP handlers
use crate::application::trend_service::TrendService;
use crate::infrastructure::config::ChannelsConfig;

#[derive(Clone)]
pub struct AppState {
    pub trend_service: TrendService,
    pub channels_config: ChannelsConfig,
}

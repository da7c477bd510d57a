use crate::config::AppConfig;
use crate::services::BookingController;

pub struct AppState {
    pub config: AppConfig,
    pub controller: BookingController,
}

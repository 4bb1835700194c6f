use actix_web::http::header::{HeaderName, HeaderValue};
use crate::handler::enums::cache_status::CacheStatus;
use crate::stats::enums::stats_event::StatsEvent;

pub const CACHE_STATUS_HEADER: &str = "cache-status";

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "hit",
            CacheStatus::Miss => "miss",
            CacheStatus::Bypass => "bypass",
        }
    }

    pub fn header_name() -> HeaderName {
        HeaderName::from_static(CACHE_STATUS_HEADER)
    }

    pub fn header_value(&self) -> HeaderValue {
        HeaderValue::from_static(self.as_str())
    }

    pub fn stats_event(&self) -> StatsEvent {
        match self {
            CacheStatus::Hit => StatsEvent::Hit,
            CacheStatus::Miss => StatsEvent::Miss,
            CacheStatus::Bypass => StatsEvent::Bypass,
        }
    }
}

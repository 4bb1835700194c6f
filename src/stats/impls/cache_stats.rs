use std::sync::atomic::{AtomicU64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::cache_stats::CacheStats;
use crate::stats::structs::stats::Stats;

impl CacheStats {
    pub const PROMETHEUS_NAMESPACE: &'static str = "httpcache";

    pub fn new(handler_id: &str) -> CacheStats {
        CacheStats {
            handler_id: handler_id.to_string(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            bypasses: AtomicU64::new(0),
        }
    }

    pub fn get_stats(&self) -> Stats {
        Stats {
            hits: self.hits.load(Ordering::SeqCst),
            misses: self.misses.load(Ordering::SeqCst),
            bypasses: self.bypasses.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent) -> u64 {
        let counter = match event {
            StatsEvent::Hit => &self.hits,
            StatsEvent::Miss => &self.misses,
            StatsEvent::Bypass => &self.bypasses,
        };
        counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn prometheus(&self) -> String {
        let stats = self.get_stats();
        let mut string_output = String::new();
        string_output.push_str(&self.prom_generate_line("hits", stats.hits, "Responses served from the cache."));
        string_output.push_str(&self.prom_generate_line("misses", stats.misses, "Responses fetched downstream and stored."));
        string_output.push_str(&self.prom_generate_line("bypasses", stats.bypasses, "Requests that skipped the cache."));
        string_output
    }

    fn prom_generate_line(&self, metric: &str, value: u64, description: &str) -> String {
        let name = format!("{}_cache_{}_total", Self::PROMETHEUS_NAMESPACE, metric);
        format!(
            "# HELP {name} {description}\n# TYPE {name} counter\n{name}{{handler=\"{}\"}} {value}\n",
            self.handler_id
        )
    }
}

use crate::search::search_engines::SearchResult;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Optional wall-clock and memory bounds on a search, with periodic
/// progress logging.
#[derive(Debug)]
pub struct TerminationCondition {
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
    start_time: Instant,
    last_log_time: Instant,
    peak_memory_usage_mb: Option<usize>,
}

const LOG_INTERVAL: Duration = Duration::from_secs(10);

impl TerminationCondition {
    pub fn new(time_limit: Option<Duration>, memory_limit_mb: Option<usize>) -> Self {
        info!(
            time_limit = time_limit.map(|d| d.as_secs_f64()),
            memory_limit_mb = memory_limit_mb,
        );
        Self {
            time_limit,
            memory_limit_mb,
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            peak_memory_usage_mb: None,
        }
    }

    /// Checks the limits, sampling current memory usage. Also emits a
    /// progress line every [`LOG_INTERVAL`].
    pub fn should_terminate(&mut self) -> Option<SearchResult> {
        let memory_usage_mb = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage_mb);

        if self.last_log_time.elapsed() > LOG_INTERVAL {
            self.last_log_time = Instant::now();
            info!(
                memory_usage_mb = memory_usage_mb,
                time_elapsed = self.start_time.elapsed().as_secs_f64(),
            );
        }

        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let (Some(memory_limit_mb), Some(usage)) = (self.memory_limit_mb, memory_usage_mb) {
            if usage > memory_limit_mb {
                return Some(SearchResult::MemoryLimitExceeded);
            }
        }
        None
    }

    pub fn finalise(&self) {
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = self.start_time.elapsed().as_secs_f64(),
        );
    }
}

use serde::Serialize;

use crate::core::exit_code::{EXIT_FAILED, EXIT_PASSED};

use crate::models::http_error_stats::ErrorCount;
use crate::models::outcome::RequestOutcome;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub started_at: String,
    pub total_requests: u64,
    pub success_count: u64,
    pub failure_count: u64,
    pub success_rate: f64,
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
    pub mean_latency_ms: f64,
    pub median_latency_ms: u64,
    pub latency_95_ms: u64,
    pub latency_99_ms: u64,
    pub wall_clock_ms: u64,
    pub rps: f64,
    pub peak_in_flight: usize,
    pub probe_results: Vec<ProbeResult>,
    pub errors: Vec<ErrorCount>,
    /// 按完成顺序排列
    pub per_outcome: Vec<RequestOutcome>,
}

impl RunSummary {
    pub fn all_passed(&self) -> bool {
        self.total_requests > 0 && self.success_count == self.total_requests
    }

    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            EXIT_PASSED
        } else {
            EXIT_FAILED
        }
    }
}

/// 单个接口的汇总
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProbeResult {
    pub name: String,
    pub path: String,
    pub total_requests: u64,
    pub success_count: u64,
    pub failure_count: u64,
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
    pub mean_latency_ms: f64,
}

impl ProbeResult {
    pub fn passed(&self) -> bool {
        self.failure_count == 0 && self.total_requests > 0
    }
}

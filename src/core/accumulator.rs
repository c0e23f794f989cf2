use std::collections::HashMap;
use std::time::Duration;
use histogram::Histogram;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::debug;

use crate::models::http_error_stats::HttpErrorStats;
use crate::models::outcome::RequestOutcome;
use crate::models::probe::Probe;
use crate::models::result::{ProbeResult, RunSummary};

#[derive(Debug, Clone, Copy)]
struct LatencyStats {
    count: u64,
    success: u64,
    min: u64,
    max: u64,
    sum: u64,
}

impl Default for LatencyStats {
    fn default() -> Self {
        LatencyStats {
            count: 0,
            success: 0,
            min: u64::MAX,
            max: 0,
            sum: 0,
        }
    }
}

impl LatencyStats {
    fn record(&mut self, latency_ms: u64, succeeded: bool) {
        self.count += 1;
        if succeeded {
            self.success += 1;
        }
        self.min = self.min.min(latency_ms);
        self.max = self.max.max(latency_ms);
        self.sum += latency_ms;
    }

    fn min(&self) -> u64 {
        if self.count == 0 {
            0
        } else {
            self.min
        }
    }

    fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }
}

/// 运行期间唯一的统计对象，所有结果都经过 record_outcome 写入
pub struct SummaryAccumulator {
    started_at: OffsetDateTime,
    overall: LatencyStats,
    // 按目录顺序的接口统计
    probes: Vec<(Probe, LatencyStats)>,
    probe_positions: HashMap<String, usize>,
    http_errors: HttpErrorStats,
    outcomes: Vec<RequestOutcome>,
}

impl SummaryAccumulator {
    pub fn new(catalog: &[Probe]) -> Self {
        let probe_positions = catalog
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();
        SummaryAccumulator {
            started_at: OffsetDateTime::now_utc(),
            overall: LatencyStats::default(),
            probes: catalog
                .iter()
                .map(|p| (p.clone(), LatencyStats::default()))
                .collect(),
            probe_positions,
            http_errors: HttpErrorStats::new(),
            outcomes: Vec::new(),
        }
    }

    pub fn record_outcome(&mut self, outcome: RequestOutcome) {
        let succeeded = outcome.succeeded();
        self.overall.record(outcome.latency_ms, succeeded);
        if let Some(&position) = self.probe_positions.get(&outcome.probe.name) {
            self.probes[position].1.record(outcome.latency_ms, succeeded);
        }
        if let Some(ref error) = outcome.error {
            self.http_errors.increment(error, &outcome.probe.path);
        }
        self.outcomes.push(outcome);
    }

    pub fn completed(&self) -> usize {
        self.outcomes.len()
    }

    pub fn finish(self, wall_clock: Duration, peak_in_flight: usize) -> RunSummary {
        let total_requests = self.overall.count;
        let success_count = self.overall.success;
        let wall_clock_ms = wall_clock.as_millis() as u64;
        let wall_secs = wall_clock.as_secs_f64();
        let success_rate = if total_requests == 0 {
            0.0
        } else {
            success_count as f64 / total_requests as f64 * 100.0
        };
        let rps = if wall_secs > 0.0 {
            total_requests as f64 / wall_secs
        } else {
            0.0
        };
        let (median, p95, p99) = percentiles(&self.outcomes);
        let probe_results = self
            .probes
            .iter()
            .map(|(probe, stats)| ProbeResult {
                name: probe.name.clone(),
                path: probe.path.clone(),
                total_requests: stats.count,
                success_count: stats.success,
                failure_count: stats.count - stats.success,
                min_latency_ms: stats.min(),
                max_latency_ms: stats.max,
                mean_latency_ms: stats.mean(),
            })
            .collect();
        RunSummary {
            started_at: self.started_at.format(&Rfc3339).unwrap_or_default(),
            total_requests,
            success_count,
            failure_count: total_requests - success_count,
            success_rate,
            min_latency_ms: self.overall.min(),
            max_latency_ms: self.overall.max,
            mean_latency_ms: self.overall.mean(),
            median_latency_ms: median,
            latency_95_ms: p95,
            latency_99_ms: p99,
            wall_clock_ms,
            rps,
            peak_in_flight,
            probe_results,
            errors: self.http_errors.to_counts(),
            per_outcome: self.outcomes,
        }
    }
}

// 中位、95%、99% 响应时间，没有数据时为0
fn percentiles(outcomes: &[RequestOutcome]) -> (u64, u64, u64) {
    let mut histogram = match Histogram::new(7, 32) {
        Ok(h) => h,
        Err(e) => {
            debug!("histogram创建失败:{:?}", e);
            return (0, 0, 0);
        }
    };
    for outcome in outcomes {
        if let Err(e) = histogram.increment(outcome.latency_ms) {
            debug!("histogram设置数据错误:{:?}", e);
        }
    }
    let line = |p: f64| match histogram.percentile(p) {
        Ok(bucket) => *bucket.range().start(),
        Err(_) => 0,
    };
    (line(50.0), line(95.0), line(99.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::outcome::OutcomeError;

    fn outcome(index: usize, probe: &Probe, latency_ms: u64, error: Option<OutcomeError>) -> RequestOutcome {
        RequestOutcome {
            dispatch_index: index,
            probe: probe.clone(),
            status: if error.is_none() { Some(200) } else { None },
            latency_ms,
            error,
        }
    }

    #[test]
    fn test_record_and_finish() {
        let home = Probe::new("Home", "/");
        let cart = Probe::new("Cart", "/cart");
        let mut acc = SummaryAccumulator::new(&[home.clone(), cart.clone()]);
        acc.record_outcome(outcome(1, &cart, 30, None));
        acc.record_outcome(outcome(0, &home, 10, None));
        acc.record_outcome(outcome(2, &home, 5000, Some(OutcomeError::Timeout)));
        assert_eq!(acc.completed(), 3);

        let summary = acc.finish(Duration::from_millis(1500), 2);
        assert_eq!(summary.total_requests, 3);
        assert_eq!(summary.success_count, 2);
        assert_eq!(summary.failure_count, 1);
        assert_eq!(summary.success_count + summary.failure_count, summary.total_requests);
        assert_eq!(summary.min_latency_ms, 10);
        assert_eq!(summary.max_latency_ms, 5000);
        assert!((summary.mean_latency_ms - 1680.0).abs() < 1e-9);
        assert!((summary.rps - 2.0).abs() < 1e-9);
        assert_eq!(summary.peak_in_flight, 2);
        assert!(!summary.all_passed());
        assert_eq!(summary.exit_code(), 1);

        // 完成顺序
        let order: Vec<usize> = summary.per_outcome.iter().map(|o| o.dispatch_index).collect();
        assert_eq!(order, vec![1, 0, 2]);

        assert_eq!(summary.probe_results[0].name, "Home");
        assert_eq!(summary.probe_results[0].total_requests, 2);
        assert_eq!(summary.probe_results[0].failure_count, 1);
        assert!(!summary.probe_results[0].passed());
        assert!(summary.probe_results[1].passed());

        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].message, "timeout");
    }

    #[test]
    fn test_mean_within_bounds() {
        let home = Probe::new("Home", "/");
        let mut acc = SummaryAccumulator::new(&[home.clone()]);
        for (i, latency) in [3u64, 17, 250, 42, 9].iter().enumerate() {
            acc.record_outcome(outcome(i, &home, *latency, None));
        }
        let summary = acc.finish(Duration::from_millis(300), 1);
        assert!(summary.mean_latency_ms >= summary.min_latency_ms as f64);
        assert!(summary.mean_latency_ms <= summary.max_latency_ms as f64);
        assert!(summary.median_latency_ms <= summary.latency_99_ms);
        assert!(summary.all_passed());
    }

    #[test]
    fn test_empty_summary() {
        let acc = SummaryAccumulator::new(&[Probe::new("Home", "/")]);
        let summary = acc.finish(Duration::ZERO, 0);
        assert_eq!(summary.min_latency_ms, 0);
        assert_eq!(summary.rps, 0.0);
        assert_eq!(summary.exit_code(), 1);
    }
}

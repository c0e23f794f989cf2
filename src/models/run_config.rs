use std::time::Duration;

use crate::core::error::HarnessError;
use crate::models::probe::{Probe, SelectionMode};
use crate::models::target::TargetDescriptor;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target: TargetDescriptor,
    pub probes: Vec<Probe>,
    pub total_requests: usize,
    pub concurrency: usize,
    pub timeout: Duration,
    pub mode: SelectionMode,
    /// 固定随机种子，抽样结果可复现
    pub seed: Option<u64>,
    /// 是否逐条打印请求结果
    pub stream_outcomes: bool,
}

impl RunConfig {
    pub fn new(target: TargetDescriptor, probes: Vec<Probe>, mode: SelectionMode) -> Self {
        let total_requests = probes.len().max(1);
        RunConfig {
            target,
            probes,
            total_requests,
            concurrency: 1,
            timeout: Duration::from_secs(5),
            mode,
            seed: None,
            stream_outcomes: false,
        }
    }

    /// 请求数、并发数、超时时间都必须为正
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.total_requests == 0 {
            return Err(HarnessError::InvalidTotalRequests);
        }
        if self.concurrency == 0 {
            return Err(HarnessError::InvalidConcurrency);
        }
        if self.timeout.is_zero() {
            return Err(HarnessError::InvalidTimeout);
        }
        Ok(())
    }

    /// 并发数超过请求总数没有意义，截断到总数
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.min(self.total_requests)
    }
}

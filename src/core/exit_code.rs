use crate::core::error::HarnessError;
use crate::models::result::RunSummary;

// CI 依赖这几个退出码
pub const EXIT_PASSED: u8 = 0;
pub const EXIT_FAILED: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_UNREACHABLE: u8 = 3;

/// 一次运行的进程退出码
pub fn run_exit_code(result: &Result<RunSummary, HarnessError>) -> u8 {
    match result {
        Ok(summary) => summary.exit_code(),
        Err(e) => e.exit_code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use crate::core::accumulator::SummaryAccumulator;
    use crate::models::outcome::{OutcomeError, RequestOutcome};
    use crate::models::probe::Probe;

    fn summary(errors: Vec<Option<OutcomeError>>) -> RunSummary {
        let home = Probe::new("Home", "/");
        let mut acc = SummaryAccumulator::new(&[home.clone()]);
        for (i, error) in errors.into_iter().enumerate() {
            acc.record_outcome(RequestOutcome {
                dispatch_index: i,
                probe: home.clone(),
                status: Some(200),
                latency_ms: 10,
                error,
            });
        }
        acc.finish(Duration::from_millis(20), 1)
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(run_exit_code(&Ok(summary(vec![None, None]))), EXIT_PASSED);
        assert_eq!(
            run_exit_code(&Ok(summary(vec![None, Some(OutcomeError::Timeout)]))),
            EXIT_FAILED
        );
        assert_eq!(run_exit_code(&Err(HarnessError::EmptyCatalog)), EXIT_CONFIG_ERROR);
        assert_eq!(run_exit_code(&Err(HarnessError::InvalidConcurrency)), EXIT_CONFIG_ERROR);
        let unreachable = HarnessError::Unreachable {
            target: "http://127.0.0.1:9".to_string(),
            reason: "连接被拒绝".to_string(),
        };
        assert_eq!(run_exit_code(&Err(unreachable)), EXIT_UNREACHABLE);
    }
}

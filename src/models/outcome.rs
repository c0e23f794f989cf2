use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::models::probe::Probe;

/// 单个请求失败的原因
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    #[error("{0}")]
    Connect(String),
    #[error("timeout")]
    Timeout,
    #[error("HTTP 错误: 状态码 {0}")]
    UnexpectedStatus(u16),
    #[error("读取响应失败: {0}")]
    Body(String),
}

impl Serialize for OutcomeError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// 一次请求的结果，记录后不再修改
#[derive(Debug, Clone, Serialize)]
pub struct RequestOutcome {
    pub dispatch_index: usize,
    pub probe: Probe,
    pub status: Option<u16>,
    pub latency_ms: u64,
    pub error: Option<OutcomeError>,
}

impl RequestOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(OutcomeError::Timeout.to_string(), "timeout");
        assert_eq!(
            OutcomeError::UnexpectedStatus(404).to_string(),
            "HTTP 错误: 状态码 404"
        );
        let outcome = RequestOutcome {
            dispatch_index: 0,
            probe: Probe::new("Cart", "/cart"),
            status: None,
            latency_ms: 5000,
            error: Some(OutcomeError::Timeout),
        };
        assert!(!outcome.succeeded());
        assert_eq!(outcome.error_message().as_deref(), Some("timeout"));
    }
}

use std::collections::BTreeMap;
use serde::Serialize;

use crate::models::outcome::OutcomeError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorCount {
    /// 网络错误和超时没有状态码，记为 0
    pub status_code: u16,
    pub message: String,
    pub path: String,
    pub count: u32,
}

#[derive(Debug, Default)]
pub struct HttpErrorStats {
    // {(状态码, 错误信息, 路径): 次数}
    pub(crate) errors: BTreeMap<(u16, String, String), u32>,
}

impl HttpErrorStats {
    pub(crate) fn new() -> Self {
        HttpErrorStats {
            errors: BTreeMap::new(),
        }
    }

    // 增加一个错误和对应的出现次数
    pub(crate) fn increment(&mut self, error: &OutcomeError, path: &str) {
        let status_code = match error {
            OutcomeError::UnexpectedStatus(code) => *code,
            _ => 0,
        };
        *self
            .errors
            .entry((status_code, error.to_string(), path.to_string()))
            .or_insert(0) += 1;
    }

    /// 次数多的排在前面
    pub(crate) fn to_counts(&self) -> Vec<ErrorCount> {
        let mut counts: Vec<ErrorCount> = self
            .errors
            .iter()
            .map(|((status_code, message, path), count)| ErrorCount {
                status_code: *status_code,
                message: message.clone(),
                path: path.clone(),
                count: *count,
            })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }
}

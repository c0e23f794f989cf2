use thiserror::Error;

use crate::core::exit_code::{EXIT_CONFIG_ERROR, EXIT_UNREACHABLE};

/// 运行前就能发现的错误，出现时不会发出任何请求
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("接口目录不能为空")]
    EmptyCatalog,
    #[error("接口名称不能为空: {path}")]
    EmptyProbeName { path: String },
    #[error("重复的name: {0}")]
    DuplicateProbeName(String),
    #[error("接口路径必须以 / 开头: {0}")]
    InvalidProbePath(String),
    #[error("请求总数必须为正整数")]
    InvalidTotalRequests,
    #[error("并发数必须为正整数")]
    InvalidConcurrency,
    #[error("超时时间必须大于0")]
    InvalidTimeout,
    #[error("无效的目标地址 {url}: {reason}")]
    InvalidTarget { url: String, reason: String },
    #[error("构建http客户端失败: {0}")]
    Client(#[from] reqwest::Error),
    #[error("无法连接到 {target}: {reason}，请先启动目标服务（例如 npm run dev）")]
    Unreachable { target: String, reason: String },
}

impl HarnessError {
    /// 进程退出码
    pub fn exit_code(&self) -> u8 {
        match self {
            HarnessError::Unreachable { .. } => EXIT_UNREACHABLE,
            _ => EXIT_CONFIG_ERROR,
        }
    }
}

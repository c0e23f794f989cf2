use std::time::Duration;
use reqwest::redirect::Policy;
use reqwest::Client;
use tracing::{debug, info};

use crate::core::error::HarnessError;
use crate::models::target::TargetDescriptor;

/// 正式测试前先请求一次根路径，能拿到任意状态码就算连通
pub async fn check_reachable(target: &TargetDescriptor, timeout: Duration) -> Result<(), HarnessError> {
    let client = Client::builder()
        .timeout(timeout)
        .redirect(Policy::none())
        .build()?;
    match client.get(target.base_url()).send().await {
        Ok(response) => {
            info!(target_url = %target, status = response.status().as_u16(), "目标服务可以连接");
            Ok(())
        }
        Err(e) => {
            debug!(error = ?e, "连通性检查失败");
            let reason = if e.is_timeout() {
                "连接超时".to_string()
            } else if e.is_connect() {
                "连接被拒绝或域名无法解析".to_string()
            } else {
                e.to_string()
            };
            Err(HarnessError::Unreachable {
                target: target.to_string(),
                reason,
            })
        }
    }
}

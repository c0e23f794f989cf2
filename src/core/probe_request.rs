use std::error::Error as StdError;
use std::time::{Duration, Instant};
use reqwest::Client;
use tracing::{debug, warn};

use crate::models::outcome::{OutcomeError, RequestOutcome};
use crate::models::probe::Probe;
use crate::models::target::TargetDescriptor;

/// 发送一次 GET 请求并读完响应体。超时后丢弃请求，连接随之关闭
pub(crate) async fn send_probe(
    client: &Client,
    target: &TargetDescriptor,
    probe: &Probe,
    dispatch_index: usize,
    timeout: Duration,
) -> RequestOutcome {
    let url = target.url_for(&probe.path);
    debug!(dispatch_index, url = %url, "发送请求");
    // 记录开始时间
    let start = Instant::now();
    let (status, error) = match tokio::time::timeout(timeout, fetch(client, &url)).await {
        Ok((Some(status), None)) if !probe.accepts(status) => {
            (Some(status), Some(OutcomeError::UnexpectedStatus(status)))
        }
        Ok(result) => result,
        Err(_) => (None, Some(OutcomeError::Timeout)),
    };
    let latency_ms = start.elapsed().as_millis() as u64;
    if let Some(OutcomeError::Timeout) = error {
        warn!(dispatch_index, url = %url, latency_ms, "请求超时");
    }
    RequestOutcome {
        dispatch_index,
        probe: probe.clone(),
        status,
        latency_ms,
        error,
    }
}

async fn fetch(client: &Client, url: &str) -> (Option<u16>, Option<OutcomeError>) {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return (e.status().map(|s| s.as_u16()), Some(classify(&e))),
    };
    let status = response.status().as_u16();
    // 读完响应体才算完成
    match response.bytes().await {
        Ok(_) => (Some(status), None),
        Err(e) if e.is_timeout() => (Some(status), Some(OutcomeError::Timeout)),
        Err(e) => (Some(status), Some(OutcomeError::Body(describe(&e)))),
    }
}

fn classify(e: &reqwest::Error) -> OutcomeError {
    if e.is_timeout() {
        OutcomeError::Timeout
    } else {
        OutcomeError::Connect(describe(e))
    }
}

// reqwest的错误信息只有url，把底层原因拼上
fn describe(e: &reqwest::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

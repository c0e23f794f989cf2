use std::time::Instant;
use futures::future::join_all;
use parking_lot::Mutex;
use reqwest::redirect::Policy;
use reqwest::Client;
use tracing::{info, warn};

use crate::core::accumulator::SummaryAccumulator;
use crate::core::check_probe_catalog::check_probe_catalog;
use crate::core::dispatcher::Dispatcher;
use crate::core::error::HarnessError;
use crate::core::probe_request::send_probe;
use crate::core::selector::ProbeSelector;
use crate::core::show_result_with_table::print_outcome_line;
use crate::models::result::RunSummary;
use crate::models::run_config::RunConfig;

/// 用固定数量的 worker 发出 total_requests 个请求，全部完成后返回汇总。
///
/// worker 都在当前任务上轮询，不会 spawn；单个请求的失败只记入结果，
/// 只有配置错误会返回 Err，此时没有发出任何请求。
pub async fn run(config: &RunConfig) -> Result<RunSummary, HarnessError> {
    // 检查接口目录
    check_probe_catalog(&config.probes)?;
    config.validate()?;
    let concurrency = config.effective_concurrency();
    if concurrency < config.concurrency {
        warn!(
            requested = config.concurrency,
            concurrency, "并发数大于请求总数，已截断"
        );
    }
    // 所有 worker 共用一个客户端，不跟随重定向，判断的是被测路径本身的状态码
    let client = Client::builder().redirect(Policy::none()).build()?;
    let selector = ProbeSelector::new(&config.probes, config.mode, config.seed);
    let dispatcher = Dispatcher::new(config.total_requests);
    let accumulator = Mutex::new(SummaryAccumulator::new(&config.probes));

    info!(
        target_url = %config.target,
        total_requests = config.total_requests,
        concurrency,
        mode = ?config.mode,
        timeout_ms = config.timeout.as_millis() as u64,
        "开始测试"
    );
    // 开始测试时间
    let test_start = Instant::now();
    let workers = (0..concurrency)
        .map(|_| worker(&client, config, &selector, &dispatcher, &accumulator));
    join_all(workers).await;
    let wall_clock = test_start.elapsed();

    let accumulator = accumulator.into_inner();
    debug_assert_eq!(accumulator.completed(), config.total_requests);
    let summary = accumulator.finish(wall_clock, dispatcher.peak_in_flight());
    info!(
        success = summary.success_count,
        failure = summary.failure_count,
        wall_clock_ms = summary.wall_clock_ms,
        "测试完成"
    );
    Ok(summary)
}

// 每个 worker 不断领取下一个序号，直到全部派发完
async fn worker(
    client: &Client,
    config: &RunConfig,
    selector: &ProbeSelector<'_>,
    dispatcher: &Dispatcher,
    accumulator: &Mutex<SummaryAccumulator>,
) {
    while let Some(dispatch_index) = dispatcher.next_index() {
        let probe = selector.select(dispatch_index);
        let outcome = {
            let _slot = dispatcher.begin();
            send_probe(client, &config.target, probe, dispatch_index, config.timeout).await
        };
        if config.stream_outcomes {
            print_outcome_line(&outcome);
        }
        accumulator.lock().record_outcome(outcome);
    }
}

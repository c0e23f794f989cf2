use prettytable::{Cell, format, row, Row, Table};

use crate::models::outcome::RequestOutcome;
use crate::models::result::RunSummary;

pub fn format_outcome_line(outcome: &RequestOutcome) -> String {
    let marker = if outcome.succeeded() { "✔" } else { "✘" };
    let detail = match (&outcome.error, outcome.status) {
        (None, Some(status)) => status.to_string(),
        (Some(error), _) => error.to_string(),
        (None, None) => "-".to_string(),
    };
    format!(
        "{} [{}] {} -> {} ({} ms)",
        marker, outcome.probe.name, outcome.probe.path, detail, outcome.latency_ms
    )
}

// 按完成顺序逐条打印
pub(crate) fn print_outcome_line(outcome: &RequestOutcome) {
    println!("{}", format_outcome_line(outcome));
}

pub fn show_result_with_table(result: &RunSummary) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    table.add_row(row!["指标", "值"]);
    table.add_row(row!["总请求数", format!("{}", result.total_requests)]);
    table.add_row(row!["成功数量", format!("{}", result.success_count)]);
    table.add_row(row!["失败数量", format!("{}", result.failure_count)]);
    table.add_row(row!["成功率", format!("{:.1}%", result.success_rate)]);
    table.add_row(row!["最小响应时间", format!("{} ms", result.min_latency_ms)]);
    table.add_row(row!["最大响应时间", format!("{} ms", result.max_latency_ms)]);
    table.add_row(row!["平均响应时间", format!("{:.2} ms", result.mean_latency_ms)]);
    table.add_row(row!["中位响应时间", format!("{} ms", result.median_latency_ms)]);
    table.add_row(row!["95%响应时间", format!("{} ms", result.latency_95_ms)]);
    table.add_row(row!["99%响应时间", format!("{} ms", result.latency_99_ms)]);
    table.add_row(row!["总耗时", format!("{} ms", result.wall_clock_ms)]);
    table.add_row(row!["RPS", format!("{:.3}", result.rps)]);
    println!("测试结果:");
    table.printstd();

    let mut probe_table = Table::new();
    probe_table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    probe_table.add_row(row!["", "接口", "路径", "请求数", "失败数", "平均响应时间"]);
    for p in &result.probe_results {
        // 没有被抽到的接口不展示
        if p.total_requests == 0 {
            continue;
        }
        probe_table.add_row(Row::new(vec![
            Cell::new(if p.passed() { "✔" } else { "✘" }),
            Cell::new(&p.name),
            Cell::new(&p.path),
            Cell::new(&p.total_requests.to_string()),
            Cell::new(&p.failure_count.to_string()),
            Cell::new(&format!("{:.2} ms", p.mean_latency_ms)),
        ]));
    }
    println!("接口结果:");
    probe_table.printstd();

    if !result.errors.is_empty() {
        let mut errors_table = Table::new();
        errors_table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        errors_table.add_row(row!["错误代码", "错误信息", "路径", "次数"]);
        for e in &result.errors {
            errors_table.add_row(Row::new(vec![
                Cell::new(format!("{:03}", e.status_code).as_str()),
                Cell::new(&e.message).style_spec("R"),
                Cell::new(&e.path),
                Cell::new(format!("{}", e.count).as_str()),
            ]));
        }
        println!("错误统计:");
        errors_table.printstd();
    }
}

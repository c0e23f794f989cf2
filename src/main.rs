use std::process::ExitCode;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use storefront_probe::models::args::{Args, Command};
use storefront_probe::{check_reachable, run, run_exit_code, show_result_with_table, EXIT_CONFIG_ERROR};

fn init_tracing() {
    // 日志走stderr，stdout只留给报告
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Endpoints);
    let config = match args.common.to_run_config(command) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("配置错误: {:#}", e);
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };
    // 连不上目标时直接退出，不再逐个报错
    if !args.common.no_preflight {
        if let Err(e) = check_reachable(&config.target, config.timeout).await {
            eprintln!("{}", e);
            return ExitCode::from(e.exit_code());
        }
    }
    let result = run(&config).await;
    match result {
        Ok(ref summary) if args.common.json => match serde_json::to_string_pretty(summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("序列化结果失败: {}", e);
                return ExitCode::from(EXIT_CONFIG_ERROR);
            }
        },
        Ok(ref summary) => show_result_with_table(summary),
        Err(ref e) => eprintln!("Error: {}", e),
    }
    ExitCode::from(run_exit_code(&result))
}

use std::path::PathBuf;
use std::time::Duration;
use clap::{Parser, Subcommand};

use crate::core::load_probe_catalog::load_probe_catalog;
use crate::models::probe::{SelectionMode, STOREFRONT_PAGES, STRESS_PAGES};
use crate::models::run_config::RunConfig;
use crate::models::target::TargetDescriptor;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 逐个探测所有页面（默认）
    Endpoints,
    /// 随机抽取页面压测
    Stress,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CommonArgs {
    /// 目标地址
    #[arg(short, long, global = true, env = "TARGET_URL", default_value = "http://localhost:5173")]
    pub target: String,

    /// 请求总数，默认: endpoints 为目录长度，stress 为 1000
    #[arg(short = 'n', long, global = true, env = "TOTAL_REQUESTS")]
    pub total: Option<usize>,

    /// 并发数，默认: endpoints 为 4，stress 为 50
    #[arg(short, long, global = true, env = "CONCURRENCY")]
    pub concurrency: Option<usize>,

    /// 单个请求超时时间（毫秒）
    #[arg(long, global = true, env = "TIMEOUT_MS", default_value_t = 5000)]
    pub timeout_ms: u64,

    /// 从json文件加载接口目录
    #[arg(short, long, global = true, env = "PROBE_CATALOG")]
    pub probes: Option<PathBuf>,

    /// 随机种子
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// 不打印单个请求结果
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    /// 以json输出汇总
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// 跳过连通性检查
    #[arg(long, global = true, default_value_t = false)]
    pub no_preflight: bool,
}

impl CommonArgs {
    /// 按子命令补齐默认值，生成运行配置
    pub fn to_run_config(&self, command: Command) -> anyhow::Result<RunConfig> {
        let target = TargetDescriptor::parse(&self.target)?;
        let (mode, builtin, default_total, default_concurrency) = match command {
            Command::Endpoints => (SelectionMode::Exhaustive, STOREFRONT_PAGES.clone(), None, 4),
            Command::Stress => (SelectionMode::Sampled, STRESS_PAGES.clone(), Some(1000), 50),
        };
        let probes = match self.probes {
            Some(ref path) => load_probe_catalog(path)?,
            None => builtin,
        };
        let mut config = RunConfig::new(target, probes, mode);
        config.total_requests = self.total.or(default_total).unwrap_or(config.probes.len());
        config.concurrency = self.concurrency.unwrap_or(default_concurrency);
        config.timeout = Duration::from_millis(self.timeout_ms);
        config.seed = self.seed;
        // json模式下stdout只输出汇总
        config.stream_outcomes = !self.quiet && !self.json;
        Ok(config)
    }
}

use std::path::Path;
use anyhow::Context;

use crate::models::probe::Probe;

/// 从json文件加载接口目录，没写name的用path代替
pub fn load_probe_catalog(path: &Path) -> anyhow::Result<Vec<Probe>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("读取接口目录失败: {}", path.display()))?;
    let mut probes: Vec<Probe> = serde_json::from_str(&content)
        .with_context(|| format!("解析接口目录失败: {}", path.display()))?;
    for probe in probes.iter_mut() {
        if probe.name.is_empty() {
            probe.name = probe.path.clone();
        }
    }
    Ok(probes)
}

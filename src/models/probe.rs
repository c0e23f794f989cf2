use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// 一个待探测的接口
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Probe {
    pub path: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub expected_status: Option<u16>,
}

impl Probe {
    pub fn new(name: &str, path: &str) -> Self {
        Probe {
            path: path.to_string(),
            name: name.to_string(),
            expected_status: None,
        }
    }

    pub fn expecting(mut self, status: u16) -> Self {
        self.expected_status = Some(status);
        self
    }

    /// 配置了期望状态码时必须精确匹配，否则接受 2xx 和 3xx
    pub fn accepts(&self, status: u16) -> bool {
        match self.expected_status {
            Some(expected) => status == expected,
            None => (200..400).contains(&status),
        }
    }
}

/// 选择模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// 按目录顺序逐个探测，超出目录长度时回绕
    Exhaustive,
    /// 每个请求均匀随机选一个接口
    Sampled,
}

lazy_static! {
    // 冒烟测试用的全量页面
    pub static ref STOREFRONT_PAGES: Vec<Probe> = vec![
        Probe::new("Home", "/"),
        Probe::new("Products", "/products"),
        Probe::new("Product Detail", "/products/1"),
        Probe::new("Cart", "/cart"),
        Probe::new("Wishlist", "/wishlist"),
        Probe::new("Checkout", "/checkout"),
        Probe::new("Auth", "/auth"),
        Probe::new("Search", "/search?q=shirt"),
        Probe::new("Sitemap", "/sitemap.xml").expecting(200),
        Probe::new("Robots", "/robots.txt").expecting(200),
    ];

    // 压测时随机抽取的热点页面
    pub static ref STRESS_PAGES: Vec<Probe> = vec![
        Probe::new("Home", "/"),
        Probe::new("Products", "/products"),
        Probe::new("Cart", "/cart"),
        Probe::new("Checkout", "/checkout"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_acceptance() {
        let probe = Probe::new("Home", "/");
        assert!(probe.accepts(200));
        assert!(probe.accepts(204));
        assert!(probe.accepts(301));
        assert!(!probe.accepts(404));
        assert!(!probe.accepts(500));
    }

    #[test]
    fn test_expected_status() {
        let probe = Probe::new("Sitemap", "/sitemap.xml").expecting(200);
        assert!(probe.accepts(200));
        assert!(!probe.accepts(204));
        assert!(!probe.accepts(304));

        let gone = Probe::new("Legacy", "/old").expecting(404);
        assert!(gone.accepts(404));
        assert!(!gone.accepts(200));
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let probes: Vec<Probe> =
            serde_json::from_str(r#"[{"path": "/cart"}, {"path": "/x", "name": "X", "expected_status": 404}]"#)
                .unwrap();
        assert_eq!(probes[0].name, "");
        assert_eq!(probes[0].expected_status, None);
        assert_eq!(probes[1].expected_status, Some(404));
    }

    #[test]
    fn test_builtin_catalogs() {
        assert_eq!(STRESS_PAGES.len(), 4);
        assert!(STOREFRONT_PAGES.iter().all(|p| p.path.starts_with('/')));
    }
}

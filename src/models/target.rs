use reqwest::Url;
use serde::Serialize;

use crate::core::error::HarnessError;

/// 被测服务，整个运行期间不变
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetDescriptor {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl TargetDescriptor {
    pub fn parse(url: &str) -> Result<Self, HarnessError> {
        let parsed = Url::parse(url).map_err(|e| HarnessError::InvalidTarget {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let scheme = parsed.scheme().to_string();
        if scheme != "http" && scheme != "https" {
            return Err(HarnessError::InvalidTarget {
                url: url.to_string(),
                reason: format!("不支持的协议: {}", scheme),
            });
        }
        let host = match parsed.host_str() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => {
                return Err(HarnessError::InvalidTarget {
                    url: url.to_string(),
                    reason: "缺少主机名".to_string(),
                })
            }
        };
        // http/https 一定有默认端口
        let port = parsed.port_or_known_default().unwrap_or(80);
        Ok(TargetDescriptor { scheme, host, port })
    }

    pub fn base_url(&self) -> String {
        format!("{}://{}:{}/", self.scheme, self.host, self.port)
    }

    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}://{}:{}{}", self.scheme, self.host, self.port, path)
        } else {
            format!("{}://{}:{}/{}", self.scheme, self.host, self.port, path)
        }
    }
}

impl std::fmt::Display for TargetDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_port() {
        let target = TargetDescriptor::parse("http://localhost:5173").unwrap();
        assert_eq!(target.scheme, "http");
        assert_eq!(target.host, "localhost");
        assert_eq!(target.port, 5173);
        assert_eq!(target.url_for("/cart"), "http://localhost:5173/cart");
        assert_eq!(target.base_url(), "http://localhost:5173/");
    }

    #[test]
    fn test_parse_default_port() {
        let target = TargetDescriptor::parse("https://shop.example.com").unwrap();
        assert_eq!(target.port, 443);
        let target = TargetDescriptor::parse("http://127.0.0.1/").unwrap();
        assert_eq!(target.port, 80);
    }

    #[test]
    fn test_parse_rejects_bad_targets() {
        assert!(matches!(
            TargetDescriptor::parse("ftp://localhost:21"),
            Err(HarnessError::InvalidTarget { .. })
        ));
        assert!(matches!(
            TargetDescriptor::parse("not a url"),
            Err(HarnessError::InvalidTarget { .. })
        ));
    }
}

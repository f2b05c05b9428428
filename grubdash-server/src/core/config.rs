use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// 服务器配置 - GrubDash 服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时先读取 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | production 下为 true | JSON 日志 |
/// | LOG_DIR | (无) | 日志文件目录 |
/// | SEED_DATA | true | 启动时加载内置菜品/订单数据 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 SEED_DATA=false cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub http_host: IpAddr,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 日志文件目录 (None = 仅控制台)
    pub log_dir: Option<String>,
    /// 是否加载内置数据
    pub seed_data: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意 key/value 来源加载配置 (测试时避免修改进程环境变量)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".into());
        let is_production = environment == "production";

        Self {
            http_host: lookup("HTTP_HOST")
                .and_then(|h| h.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            http_port: lookup("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: lookup("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(is_production),
            log_dir: lookup("LOG_DIR").filter(|d| !d.is_empty()),
            seed_data: lookup("SEED_DATA")
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            environment,
        }
    }

    /// 使用自定义端口覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, seed_data: bool) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.seed_data = seed_data;
        config
    }

    /// 监听的 socket 地址
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http_host, self.http_port)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 登录与会话配置
    #[serde(default)]
    pub auth: AuthConfig,

    /// JSON API 配置
    #[serde(default)]
    pub api: ApiConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 登录与会话配置
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// 未登录时跳转的登录页
    #[serde(default = "default_login_url")]
    pub login_url: String,

    /// 会话 cookie 名称
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,

    /// 会话空闲超时（秒）
    #[serde(default = "default_session_idle_timeout_secs")]
    pub session_idle_timeout_secs: u64,

    /// 过期会话清理间隔（秒）
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,

    /// 允许登录的账户
    #[serde(default)]
    pub users: Vec<UserAccountConfig>,
}

/// 账户配置
#[derive(Debug, Clone, Deserialize)]
pub struct UserAccountConfig {
    pub id: i64,
    pub username: String,
    pub password: String,
}

fn default_login_url() -> String {
    "/webclient/login/".to_string()
}

fn default_session_cookie() -> String {
    "sessionid".to_string()
}

fn default_session_idle_timeout_secs() -> u64 {
    3600
}

fn default_sweep_interval_secs() -> u64 {
    300
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_url: default_login_url(),
            session_cookie: default_session_cookie(),
            session_idle_timeout_secs: default_session_idle_timeout_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
            users: Vec::new(),
        }
    }
}

/// JSON API 配置
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// 列表接口默认分页大小
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// 列表接口最大分页大小
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

fn default_limit() -> usize {
    200
}

fn default_max_limit() -> usize {
    500
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

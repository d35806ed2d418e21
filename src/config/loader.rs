//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `WEBGATEWAY_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `WEBGATEWAY_SERVER__HOST=127.0.0.1`
/// - `WEBGATEWAY_SERVER__PORT=8080`
/// - `WEBGATEWAY_AUTH__LOGIN_URL=/login/`
/// - `WEBGATEWAY_API__MAX_LIMIT=1000`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 4080)?
        .set_default("auth.login_url", "/webclient/login/")?
        .set_default("auth.session_cookie", "sessionid")?
        .set_default("auth.session_idle_timeout_secs", 3600_u64)?
        .set_default("auth.sweep_interval_secs", 300_u64)?
        .set_default("api.default_limit", 200_u64)?
        .set_default("api.max_limit", 500_u64)?
        .set_default("log.level", "info")?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级），例如 WEBGATEWAY_AUTH__SESSION_COOKIE=gw
    builder = builder.add_source(
        Environment::with_prefix("WEBGATEWAY")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.auth.login_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Login URL cannot be empty".to_string(),
        ));
    }

    if config.auth.session_cookie.is_empty() {
        return Err(ConfigError::ValidationError(
            "Session cookie name cannot be empty".to_string(),
        ));
    }

    if config.auth.session_idle_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Session idle timeout cannot be 0".to_string(),
        ));
    }

    if config.api.max_limit == 0 {
        return Err(ConfigError::ValidationError(
            "API max_limit cannot be 0".to_string(),
        ));
    }

    if config.api.default_limit > config.api.max_limit {
        return Err(ConfigError::ValidationError(format!(
            "API default_limit ({}) exceeds max_limit ({})",
            config.api.default_limit, config.api.max_limit
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Login URL: {}", config.auth.login_url);
    tracing::info!("Session Cookie: {}", config.auth.session_cookie);
    tracing::info!("Session Idle Timeout: {}s", config.auth.session_idle_timeout_secs);
    tracing::info!("Session Sweep Interval: {}s", config.auth.sweep_interval_secs);
    tracing::info!("Accounts: {}", config.auth.users.len());
    tracing::info!(
        "API Limits: default={} max={}",
        config.api.default_limit,
        config.api.max_limit
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_login_url() {
        let mut config = AppConfig::default();
        config.auth.login_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_default_limit_above_max() {
        let mut config = AppConfig::default();
        config.api.default_limit = 1000;
        config.api.max_limit = 10;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9090

[auth]
login_url = "/login/"

[[auth.users]]
id = 7
username = "alice"
password = "secret"
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.auth.login_url, "/login/");
        assert_eq!(config.auth.users.len(), 1);
        assert_eq!(config.auth.users[0].id, 7);
        assert_eq!(config.api.max_limit, 500);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_config_from_path(Some(Path::new("/nonexistent/webgateway.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}

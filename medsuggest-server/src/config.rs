//! 配置管理
//!
//! 配置按以下顺序叠加，后者覆盖前者：内置默认值、配置文件、
//! `MEDSUGGEST_` 前缀的环境变量（层级用 `__` 分隔，例如 `MEDSUGGEST_SERVER__PORT`）、命令行参数。

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;

/// 服务完整配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听主机
    pub host: String,
    /// 监听端口
    pub port: u16,
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// 连接字符串
    pub url: String,
    /// 最大连接数
    pub max_connections: u32,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别或过滤表达式
    pub level: String,
}

/// 命令行覆盖项
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
    pub log_level: Option<String>,
}

impl ServiceConfig {
    /// 加载配置
    pub fn load(config_path: Option<&str>, overrides: &Overrides) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("database.url", "sqlite::memory:")?
            .set_default("database.max_connections", 5_i64)?
            .set_default("logging.level", "info")?;

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix("MEDSUGGEST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", overrides.host.clone())?
            .set_override_option("server.port", overrides.port.map(i64::from))?
            .set_override_option("database.url", overrides.database_url.clone())?
            .set_override_option("logging.level", overrides.log_level.clone())?
            .build()
            .context("Failed to build configuration")?;

        let config: ServiceConfig = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// 验证配置
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            bail!("server.host must not be empty");
        }
        if self.server.port == 0 {
            bail!("server.port must not be 0");
        }
        if self.database.url.trim().is_empty() {
            bail!("database.url must not be empty");
        }
        if self.database.max_connections == 0 {
            bail!("database.max_connections must be at least 1");
        }
        Ok(())
    }

    /// 解析监听地址，主机名取第一个解析结果
    pub async fn listen_addr(&self) -> Result<SocketAddr> {
        let host = self.server.host.as_str();
        let port = self.server.port;

        tokio::net::lookup_host((host, port))
            .await
            .with_context(|| format!("failed to resolve listen address {}:{}", host, port))?
            .next()
            .with_context(|| format!("no address found for {}:{}", host, port))
    }
}

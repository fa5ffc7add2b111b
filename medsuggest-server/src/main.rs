//! 医生推荐服务主程序

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use medsuggest_database::{DatabasePool, DatabaseQueries};
use medsuggest_web::{ApiState, WebServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{Overrides, ServiceConfig};

/// 服务器命令行参数
#[derive(Parser, Debug)]
#[command(name = "medsuggest-server")]
#[command(about = "Doctor Suggestion API 服务器")]
struct Args {
    /// 监听主机
    #[arg(long)]
    host: Option<String>,

    /// 服务器端口
    #[arg(short, long)]
    port: Option<u16>,

    /// 数据库连接字符串，例如 sqlite://data/clinic.db
    #[arg(short, long)]
    database_url: Option<String>,

    /// 配置文件路径
    #[arg(short, long)]
    config: Option<String>,

    /// 日志级别
    #[arg(short, long)]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            database_url: self.database_url.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = ServiceConfig::load(args.config.as_deref(), &args.overrides())?;

    // 初始化日志，RUST_LOG 优先
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .context("invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("启动医生推荐服务...");
    info!("  监听地址: {}:{}", config.server.host, config.server.port);
    info!("  数据库: {}", config.database.url);

    let addr = config.listen_addr().await?;

    let pool = DatabasePool::connect(&config.database.url, config.database.max_connections).await?;
    let store = DatabaseQueries::new(pool.clone());
    store.create_tables().await?;

    let server = WebServer::new(addr, ApiState::new(store));

    if let Err(e) = server.run().await {
        error!("服务器运行失败: {}", e);
        pool.close().await;
        return Err(e.into());
    }

    pool.close().await;
    Ok(())
}

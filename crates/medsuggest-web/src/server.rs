//! Web服务器

use axum::{
    routing::{get, post},
    Router,
};
use medsuggest_core::Result;
use std::future::Future;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use crate::docs::api_docs;
use crate::handlers::{
    api_root, create_doctor, create_patient, delete_doctor, delete_patient, get_doctor,
    get_patient, health, suggest_doctor,
};
use crate::state::ApiState;

pub struct WebServer {
    addr: SocketAddr,
    app: Router,
}

impl WebServer {
    pub fn new(addr: SocketAddr, state: ApiState) -> Self {
        let app = Self::create_app(state);

        Self { addr, app }
    }

    pub fn create_app(state: ApiState) -> Router {
        Router::new()
            // 根路径
            .route("/", get(api_root))

            // 健康检查
            .route("/health", get(health))

            // API文档
            .route("/api-docs", get(api_docs))

            // API路由
            .nest("/api", api_routes())
            .with_state(state)

            // 全局中间件
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(
                        CorsLayer::new()
                            .allow_origin(Any)
                            .allow_methods(Any)
                            .allow_headers(Any),
                    ),
            )
    }

    /// 启动服务，收到Ctrl+C后优雅退出
    pub async fn run(self) -> Result<()> {
        info!("Starting web server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Web server stopped");
        Ok(())
    }
}

/// API 路由
fn api_routes() -> Router<ApiState> {
    Router::new()
        .route("/doctors", post(create_doctor))
        .route("/doctors/:id", get(get_doctor).delete(delete_doctor))
        .route("/patients", post(create_patient))
        .route("/patients/:id", get(get_patient).delete(delete_patient))
        .route("/suggest-doctor/:patient_id", get(suggest_doctor))
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await
}

/// 等待退出信号；信号监听安装失败时保持运行
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

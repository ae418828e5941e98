//! Web服务模块
//!
//! 提供项目管理的 HTTP API 接口和文档服务

use color_eyre::Result;
use database::{DatabasePool, ProjectRepository};
use services::{ProjectService, ProjectServiceTrait};
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod models;
pub mod routes;
pub mod services;

mod test_support;

/// 应用共享状态
///
/// 服务在整个进程生命周期内只创建一次，所有请求共享同一个实例
#[derive(Clone)]
pub struct AppState {
    pub project_service: Arc<dyn ProjectServiceTrait>,
}

impl AppState {
    /// 基于数据库连接池组装服务
    pub fn from_pool(pool: DatabasePool) -> Self {
        Self {
            project_service: Arc::new(ProjectService::new(ProjectRepository::new(pool))),
        }
    }
}

/// 启动 Web 服务
///
/// 收到 `shutdown_rx` 的变更（或发送端被丢弃）后优雅退出
pub async fn start_web_service(pool: DatabasePool, bind_addr: &str, mut shutdown_rx: Receiver<bool>) -> Result<()> {
    let router = routes::create_app_router(AppState::from_pool(pool));

    info!("🚀 启动 Web Service 在 {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            // 发送端被丢弃同样视为关闭信号
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}

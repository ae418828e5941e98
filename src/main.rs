use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use shared_lib::AppConfig;
use tokio::sync::watch;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load()?;

    tracing_subscriber::fmt().with_max_level(config.log_level).init();

    info!("🚀 启动 Projects Backend...");

    let pool = database::initialize_database(&config.database)
        .await
        .wrap_err("初始化数据库失败")?;

    // 关闭信号：收到 Ctrl+C 后通知 Web 服务优雅退出
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            // 无法监听信号时保持发送端存活，避免服务被立即关闭
            warn!("⚠️ 监听 Ctrl+C 失败: {}", e);
            std::future::pending::<()>().await;
        }
        info!("🛑 收到 Ctrl+C，准备关闭服务");
        let _ = shutdown_tx.send(true);
    });

    web_service::start_web_service(pool.clone(), &config.bind_addr, shutdown_rx).await?;

    pool.close().await;
    info!("👋 服务已退出");

    Ok(())
}

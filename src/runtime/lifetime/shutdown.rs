use tokio::signal;
use tracing::warn;

/// 等待进程终止信号，返回后由调用方触发优雅停机
///
/// 前台运行响应 Ctrl+C，容器或 systemd 部署响应 SIGTERM。
pub async fn listen_for_shutdown() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => warn!("Ctrl+C received, initiating graceful shutdown..."),
        _ = terminate => warn!("SIGTERM received, initiating graceful shutdown..."),
    }
}

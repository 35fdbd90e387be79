use anyhow::Context;
use employee_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env (可选)
    dotenv::dotenv().ok();

    // 2. 加载配置
    let config = Config::from_env();

    // 3. 日志
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Employee server starting...");

    // 4. 数据库 + 服务
    let state = ServerState::initialize(&config)
        .await
        .context("failed to initialize server state")?;

    // 5. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e).context("server terminated with an error");
    }

    Ok(())
}

use grubdash_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 日志)
    setup_environment()?;

    // 2. 加载配置
    let config = Config::from_env();

    // 生产环境输出 JSON 日志，不打印横幅
    if !config.is_production() {
        print_banner();
    }

    tracing::info!("🍽️ GrubDash server starting...");

    // 3. 初始化服务器状态 (种子数据)
    let state = ServerState::initialize(&config)?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

//! GrubDash Server - 外卖餐厅后端
//!
//! # 架构概述
//!
//! 一个 REST 服务，管理菜品 (dishes) 和订单 (orders)：
//!
//! - **数据库** (`db`): 进程内存储，可加载内置种子数据
//! - **HTTP API** (`api`): 每个写操作先经过一条有序的校验链
//! - **路由** (`routes`): 路由注册、405/404 处理和 tower-http 中间件
//!
//! # 模块结构
//!
//! ```text
//! grubdash-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 处理器和校验器
//! ├── routes/        # 路由组装
//! ├── middleware/    # 请求日志
//! ├── utils/         # 日志、ID、校验工具
//! └── db/            # 内存集合和仓库函数
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use db::MemoryDb;
pub use routes::{build_app, build_router};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 读取 `.env` 并初始化日志
pub fn setup_environment() -> anyhow::Result<()> {
    // .env 不存在时忽略
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______           __    ____             __
  / ____/______  __/ /_  / __ \____ ______/ /_
 / / __/ ___/ / / / __ \/ / / / __ `/ ___/ __ \
/ /_/ / /  / /_/ / /_/ / /_/ / /_/ (__  ) / / /
\____/_/   \__,_/_.___/_____/\__,_/____/_/ /_/
    "#
    );
}

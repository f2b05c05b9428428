use std::sync::Arc;

use crate::core::Config;
use crate::db::MemoryDb;
use crate::utils::AppResult;

/// 服务器状态 - 持有所有请求共享的资源
///
/// 使用 Arc 实现浅拷贝，每个请求 clone 一份的成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | db | MemoryDb | 内存中的菜品和订单集合 |
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: MemoryDb,
}

impl ServerState {
    pub fn new(config: Config, db: MemoryDb) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }

    /// 根据配置初始化状态
    ///
    /// `seed_data` 为 true 时加载内置菜品和订单，否则从空集合开始。
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let db = if config.seed_data {
            MemoryDb::seeded()?
        } else {
            tracing::info!("Starting with empty collections");
            MemoryDb::new()
        };
        Ok(Self::new(config.clone(), db))
    }
}

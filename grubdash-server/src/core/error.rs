//! 服务器级错误 (启动、监听、关闭)
//!
//! 请求级错误使用 [`AppError`](crate::utils::AppError)。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("无法绑定地址 {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;

//! 错误类型定义
//!
//! 只有调用方的错误（非法权重、矩阵不对称、输入格式错误）才会成为 `Error`；
//! 不可达、源点被排除、非欧拉图等都是正常的“无结果”，用空结构表示。

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("非法边权 {u} - {v}: {weight}（必须为有限正数）")]
    InvalidWeight { u: String, v: String, weight: f64 },

    #[error("不支持自环: {0}")]
    SelfLoop(String),

    #[error("最短路算法遇到负权边 {u} - {v}: {weight}")]
    NegativeWeight { u: String, v: String, weight: f64 },

    #[error("无向图邻接矩阵不对称: {u} - {v}")]
    AsymmetricMatrix { u: String, v: String },

    #[error("边计数不一致: 记录 {recorded}, 实际 {actual}")]
    EdgeCountMismatch { recorded: usize, actual: usize },

    #[error("解析错误 (第 {line} 行): {message}")]
    ParseError { line: usize, message: String },

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}

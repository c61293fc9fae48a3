//! UrbanNet - 城市基础设施网络分析
//!
//! 把电网、道路网和供水网建模为无向图，回答结构性问题：
//! - 连通性与故障顺序
//! - 最短路线与断点后的替代路线
//! - 最小生成森林
//! - 割点与桥
//! - 欧拉收集路线
//! - 最近水厂分配

pub mod algorithm;
pub mod analysis;
pub mod config;
pub mod error;
pub mod graph;
pub mod import;
pub mod types;

// 重导出常用类型
pub use config::Config;
pub use error::{Error, Result};
pub use graph::{Graph, GraphView, SharedGraph};
pub use types::{Edge, Weight, DEFAULT_WEIGHT};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! 图核心模块
//!
//! 定义图的只读能力接口、邻接矩阵存储和线程共享包装

mod graph;
mod shared;
mod view;

pub use graph::Graph;
pub use shared::SharedGraph;
pub use view::{edge_cost, sorted_vertices, GraphView};

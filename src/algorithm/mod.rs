//! 图算法模块
//!
//! 遍历、最短路、最小生成森林、关键点、欧拉路径和多源分配。
//! 所有算法都是 `GraphView` 上的纯函数，不修改图。

mod assignment;
mod critical;
mod euler;
mod frontier;
mod shortest_path;
mod spanning;
mod traversal;

pub use assignment::{assign_nearest, Assignment};
pub use critical::{critical_points, CriticalPoints};
pub use euler::eulerian_path;
pub use shortest_path::{dijkstra, reconstruct_path, ShortestPaths};
pub use spanning::{kruskal, prim, SpanningForest, UnionFind};
pub use traversal::{bfs, connected_components, dfs_preorder, BfsResult};

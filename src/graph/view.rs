//! 图只读能力接口
//!
//! 所有算法只通过 `GraphView` 读取图：枚举顶点、枚举邻居、查询边权。
//! 稠密矩阵存储之外的实现（例如邻接表）无需改动算法即可接入。

use crate::types::{Edge, Weight, DEFAULT_WEIGHT};
use std::collections::BTreeMap;

/// 无向图的只读视图
pub trait GraphView {
    /// 全部顶点，按插入顺序
    fn vertices(&self) -> Vec<&str>;

    /// 顶点的邻居；顶点不存在时返回空列表
    fn neighbors(&self, v: &str) -> Vec<&str>;

    /// 边权；没有这条边（或视图不带权）时返回 `None`
    fn weight(&self, _u: &str, _v: &str) -> Option<Weight> {
        None
    }

    fn contains_vertex(&self, v: &str) -> bool {
        self.vertices().contains(&v)
    }

    /// 度数（邻接表长度）
    fn degree(&self, v: &str) -> usize {
        self.neighbors(v).len()
    }

    /// 每条无向边恰好一次，较小标签在前
    fn edges(&self) -> Vec<Edge> {
        let mut out = Vec::new();
        for u in self.vertices() {
            for v in self.neighbors(u) {
                if u < v {
                    out.push(Edge::new(u, v, edge_cost(self, u, v)));
                }
            }
        }
        out
    }
}

/// 算法使用的边代价：视图不提供权重时按 1 计
pub fn edge_cost<G: GraphView + ?Sized>(graph: &G, u: &str, v: &str) -> Weight {
    graph.weight(u, v).unwrap_or(DEFAULT_WEIGHT)
}

/// 按标签升序排列的顶点，用于需要确定性起点的算法
pub fn sorted_vertices<G: GraphView + ?Sized>(graph: &G) -> Vec<&str> {
    let mut vs = graph.vertices();
    vs.sort_unstable();
    vs
}

/// 无权邻接表视图
///
/// 调用方需自行保证对称（`a` 在 `b` 的表中当且仅当 `b` 在 `a` 的表中）。
impl GraphView for BTreeMap<String, Vec<String>> {
    fn vertices(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn neighbors(&self, v: &str) -> Vec<&str> {
        self.get(v)
            .map(|ns| ns.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn contains_vertex(&self, v: &str) -> bool {
        self.contains_key(v)
    }
}

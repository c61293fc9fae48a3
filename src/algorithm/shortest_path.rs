//! 带权最短路（Dijkstra）
//!
//! 支持单源、可选单目标和顶点排除集合。边权必须非负；
//! 通过其他 `GraphView` 实现传入负权边时返回错误。

use super::frontier::Frontier;
use crate::error::{Error, Result};
use crate::graph::{edge_cost, GraphView};
use crate::types::Weight;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

/// 单源最短路结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShortestPaths {
    /// 累计代价；不在表中即不可达
    pub distance: IndexMap<String, Weight>,
    /// 最短路树中的父节点，源点为 `None`
    pub parent: IndexMap<String, Option<String>>,
}

impl ShortestPaths {
    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }

    /// 到 `target` 的距离，不可达时为 `+∞`
    pub fn distance_to(&self, target: &str) -> Weight {
        self.distance.get(target).copied().unwrap_or(Weight::INFINITY)
    }

    pub fn is_reachable(&self, target: &str) -> bool {
        self.distance.contains_key(target)
    }

    /// 源点到 `target` 的路径，不可达时为空
    pub fn path_to(&self, target: &str) -> Vec<String> {
        reconstruct_path(&self.parent, target)
    }
}

/// 沿父节点从 `target` 回溯到源点，再反转成正向路径
pub fn reconstruct_path(parent: &IndexMap<String, Option<String>>, target: &str) -> Vec<String> {
    if !parent.contains_key(target) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current = Some(target);
    while let Some(vertex) = current {
        path.push(vertex.to_string());
        current = parent.get(vertex).and_then(|p| p.as_deref());
    }
    path.reverse();
    path
}

/// Dijkstra 最短路
///
/// 源点被排除或不存在时返回空结果；给出 `target` 时在其出堆后停止，
/// 此时只有已出堆顶点的距离是最终值。
#[tracing::instrument(level = "debug", skip(graph, excluded))]
pub fn dijkstra<G: GraphView + ?Sized>(
    graph: &G,
    source: &str,
    target: Option<&str>,
    excluded: Option<&HashSet<String>>,
) -> Result<ShortestPaths> {
    let is_excluded = |v: &str| excluded.is_some_and(|set| set.contains(v));
    let mut result = ShortestPaths::default();
    if is_excluded(source) || !graph.contains_vertex(source) {
        return Ok(result);
    }

    let mut frontier = Frontier::new();
    result.distance.insert(source.to_string(), 0.0);
    result.parent.insert(source.to_string(), None);
    frontier.push(0.0, source);

    while let Some((cost, current)) = frontier.pop() {
        // 过期条目
        if cost > result.distance[current] {
            continue;
        }
        if target == Some(current) {
            break;
        }

        for neighbor in graph.neighbors(current) {
            if is_excluded(neighbor) {
                continue;
            }
            let weight = edge_cost(graph, current, neighbor);
            if weight < 0.0 {
                return Err(Error::NegativeWeight {
                    u: current.to_string(),
                    v: neighbor.to_string(),
                    weight,
                });
            }
            let candidate = cost + weight;
            let improves = result
                .distance
                .get(neighbor)
                .map_or(true, |&best| candidate < best);
            if improves {
                result.distance.insert(neighbor.to_string(), candidate);
                result
                    .parent
                    .insert(neighbor.to_string(), Some(current.to_string()));
                frontier.push(candidate, neighbor);
            }
        }
    }

    tracing::debug!(reached = result.distance.len(), "dijkstra finished");
    Ok(result)
}

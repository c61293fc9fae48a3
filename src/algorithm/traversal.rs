//! 图遍历
//!
//! 广度优先（跳数距离、父节点、访问顺序）、确定性的深度优先前序以及连通分量。

use super::shortest_path::reconstruct_path;
use crate::graph::{sorted_vertices, GraphView};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};

/// BFS 结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct BfsResult {
    /// 跳数距离；不在表中即不可达
    pub distance: IndexMap<String, usize>,
    /// 父节点，源点为 `None`
    pub parent: IndexMap<String, Option<String>>,
    /// 入队顺序
    pub order: Vec<String>,
}

impl BfsResult {
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn hops_to(&self, target: &str) -> Option<usize> {
        self.distance.get(target).copied()
    }

    /// 源点到 `target` 的路径，不可达时为空
    pub fn path_to(&self, target: &str) -> Vec<String> {
        reconstruct_path(&self.parent, target)
    }
}

/// 广度优先搜索
///
/// 源点被排除或不存在时返回空结果。给出 `target` 时在其出队后停止。
pub fn bfs<G: GraphView + ?Sized>(
    graph: &G,
    source: &str,
    target: Option<&str>,
    excluded: Option<&HashSet<String>>,
) -> BfsResult {
    let is_excluded = |v: &str| excluded.is_some_and(|set| set.contains(v));
    let mut result = BfsResult::default();
    if is_excluded(source) || !graph.contains_vertex(source) {
        return result;
    }

    let mut queue = VecDeque::new();
    result.distance.insert(source.to_string(), 0);
    result.parent.insert(source.to_string(), None);
    result.order.push(source.to_string());
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if target == Some(current) {
            break;
        }
        let hops = result.distance[current] + 1;
        for neighbor in graph.neighbors(current) {
            if is_excluded(neighbor) || result.distance.contains_key(neighbor) {
                continue;
            }
            result.distance.insert(neighbor.to_string(), hops);
            result
                .parent
                .insert(neighbor.to_string(), Some(current.to_string()));
            result.order.push(neighbor.to_string());
            queue.push_back(neighbor);
        }
    }

    result
}

/// 迭代式深度优先前序
///
/// 邻居按标签降序压栈，出栈即按升序访问，结果与邻接表顺序无关。
pub fn dfs_preorder<G: GraphView + ?Sized>(
    graph: &G,
    source: &str,
    excluded: Option<&HashSet<String>>,
) -> Vec<String> {
    let is_excluded = |v: &str| excluded.is_some_and(|set| set.contains(v));
    if is_excluded(source) || !graph.contains_vertex(source) {
        return Vec::new();
    }

    let mut visited = HashSet::new();
    let mut stack = vec![source];
    let mut preorder = Vec::new();
    visited.insert(source);

    while let Some(current) = stack.pop() {
        preorder.push(current.to_string());
        let mut neighbors = graph.neighbors(current);
        neighbors.sort_unstable_by(|a, b| b.cmp(a));
        for neighbor in neighbors {
            if !is_excluded(neighbor) && visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    preorder
}

/// 连通分量
///
/// 按标签升序选取未访问的起点；每个分量内部升序排列，分量之间不保证顺序。
pub fn connected_components<G: GraphView + ?Sized>(graph: &G) -> Vec<Vec<String>> {
    let mut visited = HashSet::new();
    let mut components = Vec::new();

    for start in sorted_vertices(graph) {
        if !visited.insert(start) {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            component.push(current.to_string());
            for neighbor in graph.neighbors(current) {
                if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }

    tracing::debug!(components = components.len(), "connected components");
    components
}

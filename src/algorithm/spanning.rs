//! 最小生成森林
//!
//! 并查集、Kruskal（全局排序边）与 Prim（按分量扩展前沿）。
//! 两者在连通图上的总权重相同；图不连通时得到森林。

use super::frontier::Frontier;
use crate::graph::{edge_cost, sorted_vertices, GraphView};
use crate::types::{Edge, Weight};
use indexmap::IndexSet;
use serde::Serialize;
use std::collections::HashSet;

/// 并查集（按秩合并 + 路径压缩）
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// 查找代表元，并把路径上的节点直接挂到代表元下
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// 合并两个集合；已在同一集合时返回 `false`
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.rank[ra] < self.rank[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        if self.rank[ra] == self.rank[rb] {
            self.rank[ra] += 1;
        }
        true
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

/// 生成森林结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpanningForest {
    /// 选中的边（端点按标签升序）
    pub edges: Vec<Edge>,
    /// 选中边的权重和
    pub total_weight: Weight,
}

impl SpanningForest {
    fn accept(&mut self, edge: Edge) {
        self.total_weight += edge.weight;
        self.edges.push(edge);
    }

    /// 森林中树的数量（孤立顶点也算一棵树）
    pub fn tree_count(&self, vertex_count: usize) -> usize {
        vertex_count - self.edges.len()
    }
}

/// Kruskal 最小生成森林
///
/// 边按 `(权重, u, v)` 升序处理，等权边的选择因此是确定的。
pub fn kruskal<G: GraphView + ?Sized>(graph: &G) -> SpanningForest {
    let index: IndexSet<&str> = graph.vertices().into_iter().collect();
    let mut sets = UnionFind::new(index.len());

    let mut candidates = Vec::new();
    for &u in &index {
        for v in graph.neighbors(u) {
            if u < v {
                candidates.push(Edge::new(u, v, edge_cost(graph, u, v)));
            }
        }
    }
    candidates.sort_by(Edge::cmp_by_weight);

    let mut forest = SpanningForest::default();
    for edge in candidates {
        let (Some(a), Some(b)) = (
            index.get_index_of(edge.u.as_str()),
            index.get_index_of(edge.v.as_str()),
        ) else {
            continue;
        };
        if sets.union(a, b) {
            forest.accept(edge);
        }
    }

    tracing::debug!(
        edges = forest.edges.len(),
        total_weight = forest.total_weight,
        "kruskal finished"
    );
    forest
}

/// Prim 最小生成森林
///
/// 以标签升序的未访问顶点作为每个分量的起点，前沿按 `(权重, u, v)` 取最小边。
pub fn prim<G: GraphView + ?Sized>(graph: &G) -> SpanningForest {
    let mut visited = HashSet::new();
    let mut forest = SpanningForest::default();

    for start in sorted_vertices(graph) {
        if !visited.insert(start) {
            continue;
        }
        let mut frontier = Frontier::new();
        for v in graph.neighbors(start) {
            frontier.push(edge_cost(graph, start, v), (start, v));
        }

        while let Some((weight, (u, v))) = frontier.pop() {
            if !visited.insert(v) {
                continue;
            }
            forest.accept(Edge::new(u, v, weight));
            for next in graph.neighbors(v) {
                if !visited.contains(next) {
                    frontier.push(edge_cost(graph, v, next), (v, next));
                }
            }
        }
    }

    tracing::debug!(
        edges = forest.edges.len(),
        total_weight = forest.total_weight,
        "prim finished"
    );
    forest
}

//! 图数据结构
//!
//! 稠密邻接矩阵存储的无向带权图。`matrix[i][j] == 0` 表示没有边，
//! 因此无法表示零权边，插入零权边会直接报错。

use super::view::GraphView;
use crate::error::{Error, Result};
use crate::types::{Edge, Weight, DEFAULT_WEIGHT};
use indexmap::IndexSet;

/// 无向图（邻接矩阵）
///
/// 顶点按首次插入顺序编号。删除顶点会让之后的所有顶点下标前移，
/// 所以任何 `index_of` 得到的下标在下一次修改后都可能失效，调用方应按标签重新查找。
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 顶点标签（插入顺序即矩阵下标）
    vertices: IndexSet<String>,
    /// 权重矩阵，始终对称
    matrix: Vec<Vec<Weight>>,
    /// 无向边数量，每条边只计一次
    edge_count: usize,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 由带权边列表构建
    pub fn from_edges<'a, I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str, Weight)>,
    {
        let mut graph = Self::new();
        for (u, v, w) in edges {
            graph.add_edge(u, v, w)?;
        }
        Ok(graph)
    }

    /// 由无权边列表构建（权重均为 1）
    pub fn from_unit_edges<'a, I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::from_edges(edges.into_iter().map(|(u, v)| (u, v, DEFAULT_WEIGHT)))
    }

    fn ensure_vertex(&mut self, v: &str) -> usize {
        if let Some(idx) = self.vertices.get_index_of(v) {
            return idx;
        }
        let (idx, _) = self.vertices.insert_full(v.to_string());
        for row in &mut self.matrix {
            row.push(0.0);
        }
        self.matrix.push(vec![0.0; idx + 1]);
        idx
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，已存在时不做任何事；返回是否新插入
    pub fn add_vertex(&mut self, v: &str) -> bool {
        let before = self.vertices.len();
        self.ensure_vertex(v);
        self.vertices.len() > before
    }

    /// 删除顶点及其所有边，之后的顶点下标全部前移
    pub fn delete_vertex(&mut self, v: &str) -> bool {
        let Some(idx) = self.vertices.get_index_of(v) else {
            return false;
        };

        let incident = self.matrix[idx].iter().filter(|&&w| w != 0.0).count();
        self.edge_count -= incident;

        self.matrix.remove(idx);
        for row in &mut self.matrix {
            row.remove(idx);
        }
        self.vertices.shift_remove_index(idx);

        tracing::trace!(vertex = v, removed_edges = incident, "vertex deleted");
        true
    }

    /// 顶点数量
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// 顶点当前下标（下一次修改后失效）
    pub fn index_of(&self, v: &str) -> Option<usize> {
        self.vertices.get_index_of(v)
    }

    // ==================== 边操作 ====================

    /// 添加或更新边
    ///
    /// 缺失的端点会自动创建。边已存在时只覆盖权重，不增加边数。
    pub fn add_edge(&mut self, u: &str, v: &str, weight: Weight) -> Result<()> {
        if u == v {
            return Err(Error::SelfLoop(u.to_string()));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::InvalidWeight {
                u: u.to_string(),
                v: v.to_string(),
                weight,
            });
        }

        let i = self.ensure_vertex(u);
        let j = self.ensure_vertex(v);
        if self.matrix[i][j] == 0.0 {
            self.edge_count += 1;
        }
        self.matrix[i][j] = weight;
        self.matrix[j][i] = weight;
        Ok(())
    }

    /// 添加权重为 1 的边
    pub fn add_unit_edge(&mut self, u: &str, v: &str) -> Result<()> {
        self.add_edge(u, v, DEFAULT_WEIGHT)
    }

    /// 删除边；返回是否真的删除了
    pub fn delete_edge(&mut self, u: &str, v: &str) -> bool {
        let (Some(i), Some(j)) = (self.index_of(u), self.index_of(v)) else {
            return false;
        };
        if self.matrix[i][j] == 0.0 {
            return false;
        }
        self.matrix[i][j] = 0.0;
        self.matrix[j][i] = 0.0;
        self.edge_count -= 1;
        true
    }

    pub fn exists_edge(&self, u: &str, v: &str) -> bool {
        self.weight(u, v).is_some()
    }

    /// 边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    // ==================== 一致性检查 ====================

    /// 检查矩阵对称、对角线为零以及边计数与矩阵一致
    pub fn validate(&self) -> Result<()> {
        let n = self.order();
        let mut actual = 0;
        for i in 0..n {
            for j in i..n {
                let (a, b) = (self.matrix[i][j], self.matrix[j][i]);
                if a != b || (i == j && a != 0.0) {
                    return Err(Error::AsymmetricMatrix {
                        u: self.vertices[i].clone(),
                        v: self.vertices[j].clone(),
                    });
                }
                if i != j && a != 0.0 {
                    actual += 1;
                }
            }
        }
        if actual != self.edge_count {
            return Err(Error::EdgeCountMismatch {
                recorded: self.edge_count,
                actual,
            });
        }
        Ok(())
    }
}

impl GraphView for Graph {
    fn vertices(&self) -> Vec<&str> {
        self.vertices.iter().map(String::as_str).collect()
    }

    fn neighbors(&self, v: &str) -> Vec<&str> {
        let Some(i) = self.index_of(v) else {
            return Vec::new();
        };
        self.matrix[i]
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0.0)
            .map(|(j, _)| self.vertices[j].as_str())
            .collect()
    }

    fn weight(&self, u: &str, v: &str) -> Option<Weight> {
        let w = self.matrix[self.index_of(u)?][self.index_of(v)?];
        (w != 0.0).then_some(w)
    }

    fn contains_vertex(&self, v: &str) -> bool {
        self.vertices.contains(v)
    }

    fn edges(&self) -> Vec<Edge> {
        let n = self.order();
        let mut out = Vec::with_capacity(self.edge_count);
        for i in 0..n {
            for j in (i + 1)..n {
                let w = self.matrix[i][j];
                if w != 0.0 {
                    out.push(Edge::new(self.vertices[i].as_str(), self.vertices[j].as_str(), w));
                }
            }
        }
        out
    }
}

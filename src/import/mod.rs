//! 数据导入模块
//!
//! 从边表文本加载网络：
//!
//! ```text
//! # 注释
//! Centro Norte 5     带权边
//! Sur Oeste          单位权边
//! Isla               孤立顶点
//! ```

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphView};
use crate::types::{Weight, DEFAULT_WEIGHT};
use std::fs;
use std::path::Path;

/// 解析边表文本
pub fn parse_edge_list(text: &str) -> Result<Graph> {
    let mut graph = Graph::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split('#').next().unwrap_or_default();
        let tokens: Vec<&str> = content.split_whitespace().collect();

        let outcome = match tokens.as_slice() {
            [] => continue,
            [v] => {
                graph.add_vertex(v);
                Ok(())
            }
            [u, v] => {
                warn_on_override(&graph, line, u, v, DEFAULT_WEIGHT);
                graph.add_unit_edge(u, v)
            }
            [u, v, w] => {
                let weight: f64 = w.parse().map_err(|_| Error::ParseError {
                    line,
                    message: format!("无法解析边权: {}", w),
                })?;
                warn_on_override(&graph, line, u, v, weight);
                graph.add_edge(u, v, weight)
            }
            _ => {
                return Err(Error::ParseError {
                    line,
                    message: format!("期望 1 到 3 个字段, 实际为 {} 个", tokens.len()),
                })
            }
        };

        outcome.map_err(|e| Error::ParseError {
            line,
            message: e.to_string(),
        })?;
    }

    Ok(graph)
}

/// 重复出现的边以最后一行为准
fn warn_on_override(graph: &Graph, line: usize, u: &str, v: &str, weight: Weight) {
    if let Some(previous) = graph.weight(u, v) {
        if previous != weight {
            tracing::warn!(line, u, v, previous, weight, "edge redefined, weight overridden");
        }
    }
}

/// 从文件加载网络
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    let start = std::time::Instant::now();
    let text = fs::read_to_string(path)?;
    let graph = parse_edge_list(&text)?;

    tracing::info!(
        path = %path.display(),
        vertices = graph.order(),
        edges = graph.edge_count(),
        duration_ms = start.elapsed().as_millis() as u64,
        "network loaded"
    );
    Ok(graph)
}

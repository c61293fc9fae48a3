//! 关键点检测（Tarjan）
//!
//! 一次深度优先遍历计算发现时间与 low 值，得到割点与桥。
//! 使用显式栈，深度不受调用栈限制。

use crate::graph::{sorted_vertices, GraphView};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// 关键点结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CriticalPoints {
    /// 割点，按标签升序
    pub articulation_points: Vec<String>,
    /// 桥 `(较小标签, 较大标签)`，升序
    pub bridges: Vec<(String, String)>,
}

/// DFS 栈帧
struct Frame {
    vertex: usize,
    parent: Option<usize>,
    neighbors: Vec<usize>,
    next: usize,
    children: usize,
}

const UNVISITED: usize = usize::MAX;

/// 计算割点和桥
pub fn critical_points<G: GraphView + ?Sized>(graph: &G) -> CriticalPoints {
    let labels = sorted_vertices(graph);
    let position: HashMap<&str, usize> = labels.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let adjacency = |v: usize| -> Vec<usize> {
        graph
            .neighbors(labels[v])
            .into_iter()
            .filter_map(|n| position.get(n).copied())
            .collect()
    };

    let n = labels.len();
    let mut disc = vec![UNVISITED; n];
    let mut low = vec![UNVISITED; n];
    let mut time = 0;
    let mut articulation = BTreeSet::new();
    let mut bridges = BTreeSet::new();

    for root in 0..n {
        if disc[root] != UNVISITED {
            continue;
        }
        disc[root] = time;
        low[root] = time;
        time += 1;

        let mut stack = vec![Frame {
            vertex: root,
            parent: None,
            neighbors: adjacency(root),
            next: 0,
            children: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            if frame.next < frame.neighbors.len() {
                let v = frame.neighbors[frame.next];
                frame.next += 1;

                if disc[v] == UNVISITED {
                    // 树边
                    frame.children += 1;
                    disc[v] = time;
                    low[v] = time;
                    time += 1;
                    stack.push(Frame {
                        vertex: v,
                        parent: Some(u),
                        neighbors: adjacency(v),
                        next: 0,
                        children: 0,
                    });
                } else if Some(v) != frame.parent {
                    // 回边
                    low[u] = low[u].min(disc[v]);
                }
                continue;
            }

            let Some(Frame {
                vertex: v,
                parent,
                children,
                ..
            }) = stack.pop()
            else {
                break;
            };

            match parent {
                Some(p) => {
                    low[p] = low[p].min(low[v]);
                    let parent_is_root = stack.last().is_some_and(|f| f.parent.is_none());
                    if !parent_is_root && low[v] >= disc[p] {
                        articulation.insert(labels[p]);
                    }
                    if low[v] > disc[p] {
                        bridges.insert((labels[p].min(labels[v]), labels[p].max(labels[v])));
                    }
                }
                None => {
                    if children > 1 {
                        articulation.insert(labels[v]);
                    }
                }
            }
        }
    }

    tracing::debug!(
        articulation_points = articulation.len(),
        bridges = bridges.len(),
        "critical points"
    );

    CriticalPoints {
        articulation_points: articulation.into_iter().map(str::to_string).collect(),
        bridges: bridges
            .into_iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect(),
    }
}

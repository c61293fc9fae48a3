//! 欧拉路径（Hierholzer）
//!
//! 用于垃圾收集路线：每条边恰好经过一次。

use crate::graph::GraphView;
use std::collections::BTreeMap;

/// 构造欧拉回路或欧拉路径
///
/// 奇度顶点为 0 个时从有边的最小标签出发得到回路，为 2 个时从较小的奇度顶点出发得到路径，
/// 其余情况（以及边不在同一连通分量内）返回空序列。
/// 每一步都走向剩余邻居中标签最小的顶点，输出与插入顺序无关。
pub fn eulerian_path<G: GraphView + ?Sized>(graph: &G) -> Vec<String> {
    let edges = graph.edges();
    let mut adjacency: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for edge in &edges {
        adjacency.entry(&edge.u).or_default().push(&edge.v);
        adjacency.entry(&edge.v).or_default().push(&edge.u);
    }

    let odd: Vec<&str> = adjacency
        .iter()
        .filter(|(_, ns)| ns.len() % 2 == 1)
        .map(|(&v, _)| v)
        .collect();
    let start = match (odd.len(), adjacency.keys().next()) {
        (0, Some(&first)) => first,
        (2, _) => odd[0],
        _ => {
            tracing::debug!(odd_vertices = odd.len(), "no eulerian path");
            return Vec::new();
        }
    };

    // 降序排列，pop 取到的是最小邻居
    for neighbors in adjacency.values_mut() {
        neighbors.sort_unstable_by(|a, b| b.cmp(a));
    }

    let mut stack = vec![start];
    let mut path = Vec::with_capacity(edges.len() + 1);
    while let Some(&current) = stack.last() {
        let next = adjacency.get_mut(current).and_then(Vec::pop);
        match next {
            Some(next) => {
                // 同一条边必须从两端同时删除
                if let Some(back) = adjacency.get_mut(next) {
                    if let Some(pos) = back.iter().position(|&v| v == current) {
                        back.remove(pos);
                    }
                }
                stack.push(next);
            }
            None => {
                path.extend(stack.pop());
            }
        }
    }
    path.reverse();

    if path.len() != edges.len() + 1 {
        tracing::debug!(
            covered = path.len().saturating_sub(1),
            edges = edges.len(),
            "edges span several components"
        );
        return Vec::new();
    }
    path.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use std::collections::HashMap;

    fn assert_covers_every_edge(graph: &Graph, path: &[String]) {
        let mut used: HashMap<(String, String), usize> = HashMap::new();
        for w in path.windows(2) {
            assert!(graph.exists_edge(&w[0], &w[1]), "{} - {} 不是边", w[0], w[1]);
            let key = if w[0] < w[1] {
                (w[0].clone(), w[1].clone())
            } else {
                (w[1].clone(), w[0].clone())
            };
            *used.entry(key).or_default() += 1;
        }
        assert_eq!(used.len(), graph.edge_count());
        assert!(used.values().all(|&n| n == 1));
    }

    #[test]
    fn test_triangle_circuit() {
        let graph = Graph::from_unit_edges([("A", "B"), ("B", "C"), ("C", "A")]).unwrap();
        let path = eulerian_path(&graph);

        assert_eq!(path, vec!["A", "B", "C", "A"]);
        assert_covers_every_edge(&graph, &path);
    }

    #[test]
    fn test_open_path_starts_at_smallest_odd_vertex() {
        let graph =
            Graph::from_unit_edges([("C", "D"), ("B", "D"), ("A", "B"), ("B", "C")]).unwrap();
        let path = eulerian_path(&graph);

        assert_eq!(path.first().map(String::as_str), Some("A"));
        assert_eq!(path.last().map(String::as_str), Some("B"));
        assert_eq!(path.len(), 5);
        assert_covers_every_edge(&graph, &path);
    }

    #[test]
    fn test_circuit_ignores_isolated_vertices() {
        let mut graph = Graph::new();
        graph.add_vertex("A");
        for (u, v) in [("B", "C"), ("C", "D"), ("D", "B"), ("B", "E"), ("E", "F"), ("F", "B")] {
            graph.add_unit_edge(u, v).unwrap();
        }
        let path = eulerian_path(&graph);

        assert_eq!(path.first().map(String::as_str), Some("B"));
        assert_eq!(path.last().map(String::as_str), Some("B"));
        assert_covers_every_edge(&graph, &path);
    }

    #[test]
    fn test_no_eulerian_path() {
        // 星形：四个奇度叶子
        let star = Graph::from_unit_edges([("H", "A"), ("H", "B"), ("H", "C"), ("H", "D")]).unwrap();
        assert!(eulerian_path(&star).is_empty());

        // 两个互不相连的三角形，度数都为偶数
        let split = Graph::from_unit_edges([
            ("A", "B"),
            ("B", "C"),
            ("C", "A"),
            ("X", "Y"),
            ("Y", "Z"),
            ("Z", "X"),
        ])
        .unwrap();
        assert!(eulerian_path(&split).is_empty());

        let mut empty = Graph::new();
        empty.add_vertex("A");
        assert!(eulerian_path(&empty).is_empty());
    }
}

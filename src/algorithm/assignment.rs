//! 多源最近设施分配
//!
//! 所有设施同时以距离 0 入堆的 Dijkstra。距离相同时标签较小的设施胜出，
//! 无论竞争发生在初始化还是松弛阶段。

use super::frontier::Frontier;
use crate::error::{Error, Result};
use crate::graph::{edge_cost, GraphView};
use crate::types::Weight;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// 分配结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct Assignment {
    /// 每个顶点的归属设施；任何设施都不可达时为 `None`
    pub owner: IndexMap<String, Option<String>>,
    /// 到归属设施的距离，只包含已分配的顶点
    pub distance: IndexMap<String, Weight>,
}

impl Assignment {
    pub fn owner_of(&self, vertex: &str) -> Option<&str> {
        self.owner.get(vertex).and_then(|o| o.as_deref())
    }

    pub fn distance_to(&self, vertex: &str) -> Weight {
        self.distance.get(vertex).copied().unwrap_or(Weight::INFINITY)
    }

    /// 归属某设施的顶点，按标签升序
    pub fn assigned_to(&self, facility: &str) -> Vec<String> {
        let mut out: Vec<String> = self
            .owner
            .iter()
            .filter(|(_, o)| o.as_deref() == Some(facility))
            .map(|(v, _)| v.clone())
            .collect();
        out.sort_unstable();
        out
    }

    /// 未分配的顶点，按标签升序
    pub fn unassigned(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .owner
            .iter()
            .filter(|(_, o)| o.is_none())
            .map(|(v, _)| v.clone())
            .collect();
        out.sort_unstable();
        out
    }
}

/// 把每个顶点分配给最近的设施
///
/// 不在图中的设施会被忽略，重复的设施只算一次。
#[tracing::instrument(level = "debug", skip_all, fields(facilities = facilities.len()))]
pub fn assign_nearest<G, S>(graph: &G, facilities: &[S]) -> Result<Assignment>
where
    G: GraphView + ?Sized,
    S: AsRef<str>,
{
    let mut seeds = BTreeSet::new();
    for facility in facilities {
        let facility = facility.as_ref();
        if graph.contains_vertex(facility) {
            seeds.insert(facility);
        } else {
            tracing::warn!(facility, "facility is not a vertex, ignored");
        }
    }

    // 顶点 -> (最优距离, 归属设施)
    let mut best: HashMap<&str, (Weight, &str)> = HashMap::new();
    let mut frontier = Frontier::new();
    for &facility in &seeds {
        best.insert(facility, (0.0, facility));
        frontier.push(0.0, (facility, facility));
    }

    while let Some((cost, (facility, vertex))) = frontier.pop() {
        if best.get(vertex) != Some(&(cost, facility)) {
            continue;
        }
        for neighbor in graph.neighbors(vertex) {
            let weight = edge_cost(graph, vertex, neighbor);
            if weight < 0.0 {
                return Err(Error::NegativeWeight {
                    u: vertex.to_string(),
                    v: neighbor.to_string(),
                    weight,
                });
            }
            let candidate = cost + weight;
            let better = match best.get(neighbor) {
                None => true,
                Some(&(d, owner)) => candidate < d || (candidate == d && facility < owner),
            };
            if better {
                best.insert(neighbor, (candidate, facility));
                frontier.push(candidate, (facility, neighbor));
            }
        }
    }

    let mut result = Assignment::default();
    for vertex in graph.vertices() {
        match best.get(vertex) {
            Some(&(d, owner)) => {
                result.owner.insert(vertex.to_string(), Some(owner.to_string()));
                result.distance.insert(vertex.to_string(), d);
            }
            None => {
                result.owner.insert(vertex.to_string(), None);
            }
        }
    }

    tracing::debug!(
        assigned = result.distance.len(),
        unassigned = result.owner.len() - result.distance.len(),
        "assignment finished"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_nearest_plant() {
        // P1 - a - b - c - P2，c 更靠近 P2
        let graph = Graph::from_edges([
            ("P1", "a", 1.0),
            ("a", "b", 1.0),
            ("b", "c", 2.0),
            ("c", "P2", 1.0),
        ])
        .unwrap();
        let result = assign_nearest(&graph, &["P1", "P2"]).unwrap();

        assert_eq!(result.owner_of("a"), Some("P1"));
        assert_eq!(result.owner_of("b"), Some("P1"));
        assert_eq!(result.owner_of("c"), Some("P2"));
        assert_eq!(result.owner_of("P2"), Some("P2"));
        assert_eq!(result.distance_to("b"), 2.0);
        assert_eq!(result.assigned_to("P1"), vec!["P1", "a", "b"]);
    }

    #[test]
    fn test_tie_goes_to_smaller_label() {
        // m 与两座水厂等距
        let graph = Graph::from_unit_edges([("Zeta", "m"), ("m", "Alfa"), ("m", "n")]).unwrap();
        let result = assign_nearest(&graph, &["Zeta", "Alfa"]).unwrap();

        assert_eq!(result.owner_of("m"), Some("Alfa"));
        assert_eq!(result.owner_of("n"), Some("Alfa"));
        assert_eq!(result.distance_to("n"), 2.0);
    }

    #[test]
    fn test_tie_via_relaxation_order() {
        // Z 先以较短的第一跳到达 x，但最终等距时仍归 A
        let graph = Graph::from_edges([
            ("Z", "p", 1.0),
            ("p", "x", 3.0),
            ("A", "q", 3.0),
            ("q", "x", 1.0),
        ])
        .unwrap();
        let result = assign_nearest(&graph, &["Z", "A"]).unwrap();

        assert_eq!(result.distance_to("x"), 4.0);
        assert_eq!(result.owner_of("x"), Some("A"));
    }

    #[test]
    fn test_unreachable_and_unknown_facilities() {
        let mut graph = Graph::from_unit_edges([("P", "a"), ("b", "c")]).unwrap();
        graph.add_vertex("d");
        let result = assign_nearest(&graph, &["P", "P", "missing"]).unwrap();

        assert_eq!(result.owner_of("a"), Some("P"));
        assert_eq!(result.owner_of("b"), None);
        assert_eq!(result.distance_to("c"), f64::INFINITY);
        assert_eq!(result.unassigned(), vec!["b", "c", "d"]);
        assert_eq!(result.owner.len(), graph.order());
    }

    #[test]
    fn test_no_facilities() {
        let graph = Graph::from_unit_edges([("a", "b")]).unwrap();
        let result = assign_nearest::<_, &str>(&graph, &[]).unwrap();

        assert_eq!(result.unassigned(), vec!["a", "b"]);
    }
}

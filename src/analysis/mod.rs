//! 网络分析查询
//!
//! 面向三张城市网络（电网、道路、供水）的查询：故障顺序、连通分量、
//! 最短路线、断点模拟、距离矩阵、收集路线、水厂分配和关键点。
//! 每个查询都是图上的纯函数，结果可直接序列化输出。

use crate::algorithm::{
    assign_nearest, connected_components, critical_points, dijkstra, eulerian_path,
    CriticalPoints,
};
use crate::error::Result;
use crate::graph::GraphView;
use crate::types::Weight;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// 同一度数的顶点组
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeGroup {
    pub degree: usize,
    pub vertices: Vec<String>,
}

/// 两点间路线
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub from: String,
    pub to: String,
    /// 总代价；无路可走时为 `None`
    pub distance: Option<Weight>,
    pub path: Vec<String>,
}

/// 断点模拟结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutSimulation {
    /// 被切断的顶点，按标签升序
    pub cut: Vec<String>,
    /// 绕开切断点后的替代路线
    pub route: Route,
}

/// 垃圾收集路线
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionRoute {
    pub stops: Vec<String>,
    /// 起点与终点相同
    pub is_circuit: bool,
}

/// 水厂分配
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlantAssignment {
    /// 水厂 -> 负责的顶点（升序），包含没有分到顶点的水厂
    pub plants: BTreeMap<String, Vec<String>>,
    /// 无法从任何水厂到达的顶点
    pub unassigned: Vec<String>,
}

/// 距离矩阵：起点 -> 终点 -> 距离
pub type DistanceMatrix = BTreeMap<String, BTreeMap<String, Weight>>;

/// 故障顺序：度数越小越脆弱，按度数升序分组，组内按标签升序
pub fn failure_order<G: GraphView + ?Sized>(graph: &G) -> Vec<DegreeGroup> {
    let mut by_degree: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for v in graph.vertices() {
        by_degree
            .entry(graph.degree(v))
            .or_default()
            .push(v.to_string());
    }
    by_degree
        .into_iter()
        .map(|(degree, mut vertices)| {
            vertices.sort_unstable();
            DegreeGroup { degree, vertices }
        })
        .collect()
}

/// 连通分量：按大小降序，同样大小按首个标签升序
pub fn components<G: GraphView + ?Sized>(graph: &G) -> Vec<Vec<String>> {
    let mut components = connected_components(graph);
    components.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.first().cmp(&b.first())));
    components
}

/// 最短路线
pub fn route<G: GraphView + ?Sized>(graph: &G, from: &str, to: &str) -> Result<Route> {
    routed(graph, from, to, None)
}

/// 断点模拟：切断若干顶点后的替代路线
///
/// 起点或终点本身被切断时视为无路可走。
pub fn simulate_cut<G, S>(graph: &G, from: &str, to: &str, cut: &[S]) -> Result<CutSimulation>
where
    G: GraphView + ?Sized,
    S: AsRef<str>,
{
    let excluded: HashSet<String> = cut.iter().map(|c| c.as_ref().to_string()).collect();
    let route = routed(graph, from, to, Some(&excluded))?;

    let mut cut: Vec<String> = excluded.into_iter().collect();
    cut.sort_unstable();
    Ok(CutSimulation { cut, route })
}

fn routed<G: GraphView + ?Sized>(
    graph: &G,
    from: &str,
    to: &str,
    excluded: Option<&HashSet<String>>,
) -> Result<Route> {
    let paths = dijkstra(graph, from, Some(to), excluded)?;
    let reachable = paths.is_reachable(to);

    Ok(Route {
        from: from.to_string(),
        to: to.to_string(),
        distance: reachable.then(|| paths.distance_to(to)),
        path: if reachable { paths.path_to(to) } else { Vec::new() },
    })
}

/// 全源距离矩阵
///
/// 每个起点各跑一次 Dijkstra，起点之间并行。省略自身与不可达的终点。
pub fn distance_matrix<G: GraphView + Sync + ?Sized>(graph: &G) -> Result<DistanceMatrix> {
    let sources = graph.vertices();
    let matrix = sources
        .par_iter()
        .map(|&source| -> Result<(String, BTreeMap<String, Weight>)> {
            let paths = dijkstra(graph, source, None, None)?;
            let row: BTreeMap<String, Weight> = paths
                .distance
                .into_iter()
                .filter(|(target, _)| target != source)
                .collect();
            Ok((source.to_string(), row))
        })
        .collect::<Result<DistanceMatrix>>()?;

    tracing::debug!(sources = matrix.len(), "distance matrix computed");
    Ok(matrix)
}

/// 收集路线（欧拉路径）；不存在时为 `None`
pub fn collection_route<G: GraphView + ?Sized>(graph: &G) -> Option<CollectionRoute> {
    let stops = eulerian_path(graph);
    if stops.is_empty() {
        return None;
    }
    let is_circuit = stops.first() == stops.last();
    Some(CollectionRoute { stops, is_circuit })
}

/// 按最近水厂分配各顶点
pub fn plant_assignment<G, S>(graph: &G, plants: &[S]) -> Result<PlantAssignment>
where
    G: GraphView + ?Sized,
    S: AsRef<str>,
{
    let assignment = assign_nearest(graph, plants)?;

    let mut result = PlantAssignment {
        unassigned: assignment.unassigned(),
        ..Default::default()
    };
    for plant in plants {
        let plant = plant.as_ref();
        result
            .plants
            .insert(plant.to_string(), assignment.assigned_to(plant));
    }
    Ok(result)
}

/// 关键点（割点与桥）
pub fn critical<G: GraphView + ?Sized>(graph: &G) -> CriticalPoints {
    critical_points(graph)
}

//! 算法之间的一致性测试（随机图，固定种子）

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, HashMap};
use urbannet::algorithm::{
    assign_nearest, bfs, connected_components, critical_points, dijkstra, eulerian_path, kruskal,
    prim, UnionFind,
};
use urbannet::{Graph, GraphView};

fn label(i: usize) -> String {
    format!("v{:02}", i)
}

/// 随机图：整数权重保证浮点求和精确
fn random_graph(rng: &mut StdRng, n: usize, density: f64) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n {
        graph.add_vertex(&label(i));
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(density) {
                let w = rng.gen_range(1..=9) as f64;
                graph.add_edge(&label(i), &label(j), w).unwrap();
            }
        }
    }
    graph
}

fn unweighted(graph: &Graph) -> BTreeMap<String, Vec<String>> {
    graph
        .vertices()
        .into_iter()
        .map(|v| {
            let ns = graph.neighbors(v).into_iter().map(str::to_string).collect();
            (v.to_string(), ns)
        })
        .collect()
}

fn graphs() -> Vec<Graph> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..40)
        .map(|k| {
            let n = 2 + k % 12;
            let density = [0.15, 0.3, 0.6][k % 3];
            random_graph(&mut rng, n, density)
        })
        .collect()
}

#[test]
fn bfs_hops_equal_unit_weight_dijkstra() {
    for graph in graphs() {
        let unit = unweighted(&graph);
        for s in graph.vertices() {
            let hops = bfs(&graph, s, None, None);
            let paths = dijkstra(&unit, s, None, None).unwrap();
            for t in graph.vertices() {
                match hops.hops_to(t) {
                    Some(h) => assert_eq!(h as f64, paths.distance_to(t)),
                    None => assert!(!paths.is_reachable(t)),
                }
            }
        }
    }
}

#[test]
fn reconstructed_path_reproduces_distance() {
    for graph in graphs() {
        for s in graph.vertices() {
            let paths = dijkstra(&graph, s, None, None).unwrap();
            for (t, &d) in &paths.distance {
                let path = paths.path_to(t);
                assert_eq!(path.first().map(String::as_str), Some(s));
                assert_eq!(path.last(), Some(t));
                let walked: f64 = path
                    .windows(2)
                    .map(|w| graph.weight(&w[0], &w[1]).unwrap())
                    .sum();
                assert_eq!(walked, d);
            }
        }
    }
}

#[test]
fn early_exit_keeps_target_distance() {
    for graph in graphs() {
        let vs = graph.vertices();
        let s = vs[0];
        let full = dijkstra(&graph, s, None, None).unwrap();
        for &t in &vs {
            let partial = dijkstra(&graph, s, Some(t), None).unwrap();
            assert_eq!(partial.distance_to(t), full.distance_to(t));
        }
    }
}

#[test]
fn kruskal_and_prim_build_equal_forests() {
    for graph in graphs() {
        let components = connected_components(&graph).len();
        let k = kruskal(&graph);
        let p = prim(&graph);

        assert_eq!(k.total_weight, p.total_weight);
        for forest in [&k, &p] {
            assert_eq!(forest.tree_count(graph.order()), components);

            // 森林的树与图的连通分量一一对应
            let index: HashMap<&str, usize> =
                graph.vertices().into_iter().enumerate().map(|(i, v)| (v, i)).collect();
            let mut sets = UnionFind::new(graph.order());
            for e in &forest.edges {
                assert!(graph.exists_edge(&e.u, &e.v));
                assert!(sets.union(index[e.u.as_str()], index[e.v.as_str()]));
            }
            for comp in connected_components(&graph) {
                let first = index[comp[0].as_str()];
                assert!(comp.iter().all(|v| sets.same_set(first, index[v.as_str()])));
            }
        }
    }
}

#[test]
fn critical_points_match_removal() {
    for graph in graphs() {
        let before = connected_components(&graph).len();
        let result = critical_points(&graph);

        for v in graph.vertices() {
            let mut g = graph.clone();
            g.delete_vertex(v);
            let increases = connected_components(&g).len() > before;
            assert_eq!(
                increases,
                result.articulation_points.iter().any(|a| a == v),
                "vertex {}",
                v
            );
        }

        for e in graph.edges() {
            let mut g = graph.clone();
            g.delete_edge(&e.u, &e.v);
            let increases = connected_components(&g).len() > before;
            let reported = result.bridges.contains(&(e.u.clone(), e.v.clone()));
            assert_eq!(increases, reported, "edge {}", e);
        }
    }
}

#[test]
fn eulerian_path_iff_parity_and_connectivity() {
    let mut rng = StdRng::seed_from_u64(7);
    for k in 0..120 {
        let graph = random_graph(&mut rng, 2 + k % 7, 0.5);
        let odd = graph
            .vertices()
            .into_iter()
            .filter(|v| graph.degree(v) % 2 == 1)
            .count();
        let edge_components = connected_components(&graph)
            .into_iter()
            .filter(|c| c.len() > 1)
            .count();
        let expected = graph.edge_count() > 0 && edge_components == 1 && (odd == 0 || odd == 2);

        let path = eulerian_path(&graph);
        assert_eq!(!path.is_empty(), expected);
        if path.is_empty() {
            continue;
        }

        assert_eq!(path.len(), graph.edge_count() + 1);
        let mut remaining = graph.clone();
        for w in path.windows(2) {
            assert!(remaining.delete_edge(&w[0], &w[1]), "edge reused: {} - {}", w[0], w[1]);
        }
        assert_eq!(remaining.edge_count(), 0);

        let start = if odd == 2 {
            graph
                .vertices()
                .into_iter()
                .filter(|v| graph.degree(v) % 2 == 1)
                .min()
        } else {
            graph.vertices().into_iter().filter(|v| graph.degree(v) > 0).min()
        };
        assert_eq!(path.first().map(String::as_str), start);
    }
}

#[test]
fn assignment_matches_per_facility_search() {
    let mut rng = StdRng::seed_from_u64(42);
    for graph in graphs() {
        let vs = graph.vertices();
        let facilities: Vec<&str> = vs.iter().copied().filter(|_| rng.gen_bool(0.3)).collect();
        let result = assign_nearest(&graph, &facilities).unwrap();

        let runs: Vec<_> = facilities
            .iter()
            .map(|&f| (f, dijkstra(&graph, f, None, None).unwrap()))
            .collect();

        for &v in &vs {
            // (距离, 设施) 的字典序最小者
            let expected = runs
                .iter()
                .filter(|(_, paths)| paths.is_reachable(v))
                .map(|(f, paths)| (paths.distance_to(v), *f))
                .min_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(b.1)));

            match expected {
                Some((d, f)) => {
                    assert_eq!(result.owner_of(v), Some(f), "vertex {}", v);
                    assert_eq!(result.distance_to(v), d);
                }
                None => assert_eq!(result.owner_of(v), None),
            }
        }
    }
}

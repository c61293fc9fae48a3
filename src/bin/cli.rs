//! UrbanNet 命令行工具
//!
//! 加载一张网络（边表文件），执行一次分析并输出结果

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use urbannet::algorithm::{kruskal, prim};
use urbannet::analysis;
use urbannet::import::load_edge_list;
use urbannet::{Config, Graph, GraphView};

#[derive(Parser, Debug)]
#[command(name = "urbannet")]
#[command(about = "城市基础设施网络分析工具", version)]
struct Args {
    /// 网络文件（边表格式）
    network: PathBuf,

    /// 配置文件（JSON）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,

    /// 距离矩阵使用的线程数
    #[arg(short, long)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 连通分量
    Components,
    /// 按度数排列的故障顺序
    FailureOrder,
    /// 最短路线
    Route { from: String, to: String },
    /// 切断若干节点后的替代路线
    Cut {
        from: String,
        to: String,
        #[arg(required = true)]
        nodes: Vec<String>,
    },
    /// 最小生成森林
    Mst {
        /// 使用 Prim（默认 Kruskal）
        #[arg(long)]
        prim: bool,
    },
    /// 割点与桥
    Critical,
    /// 欧拉收集路线
    CollectionRoute,
    /// 最近水厂分配
    Assign {
        #[arg(required = true)]
        plants: Vec<String>,
    },
    /// 全源距离矩阵
    Matrix,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("读取配置失败: {}", path.display()))?,
        None => Config::default(),
    };
    config.json_output |= args.json;
    if args.threads.is_some() {
        config.threads = args.threads;
    }
    config.validate()?;

    init_tracing(&config);

    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("初始化线程池失败")?;
    }

    let graph = load_edge_list(&args.network)
        .with_context(|| format!("加载网络失败: {}", args.network.display()))?;

    run(&graph, &args.command, config.json_output)
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(graph: &Graph, command: &Command, json: bool) -> anyhow::Result<()> {
    match command {
        Command::Components => {
            let comps = analysis::components(graph);
            emit(json, &comps, || {
                for (i, comp) in comps.iter().enumerate() {
                    println!("分量 {} ({} 个节点): {}", i + 1, comp.len(), comp.join(", "));
                }
            })
        }
        Command::FailureOrder => {
            let groups = analysis::failure_order(graph);
            emit(json, &groups, || {
                for group in &groups {
                    println!(
                        "度数 {} ({} 个节点): {}",
                        group.degree,
                        group.vertices.len(),
                        group.vertices.join(", ")
                    );
                }
            })
        }
        Command::Route { from, to } => {
            require_vertices(graph, [from, to])?;
            let route = analysis::route(graph, from, to)?;
            emit(json, &route, || print_route(&route))
        }
        Command::Cut { from, to, nodes } => {
            require_vertices(graph, [from, to])?;
            let sim = analysis::simulate_cut(graph, from, to, nodes.as_slice())?;
            emit(json, &sim, || {
                println!("切断节点: {}", sim.cut.join(", "));
                print_route(&sim.route);
            })
        }
        Command::Mst { prim: use_prim } => {
            let forest = if *use_prim { prim(graph) } else { kruskal(graph) };
            emit(json, &forest, || {
                for edge in &forest.edges {
                    println!("  {}", edge);
                }
                println!("总权重: {}", forest.total_weight);
            })
        }
        Command::Critical => {
            let points = analysis::critical(graph);
            emit(json, &points, || {
                println!(
                    "割点 ({}): {}",
                    points.articulation_points.len(),
                    points.articulation_points.join(", ")
                );
                println!("桥 ({}):", points.bridges.len());
                for (u, v) in &points.bridges {
                    println!("  {} - {}", u, v);
                }
            })
        }
        Command::CollectionRoute => {
            let route = analysis::collection_route(graph);
            emit(json, &route, || match &route {
                Some(r) => {
                    println!(
                        "共 {} 站, 起点 {}, 终点 {}",
                        r.stops.len(),
                        r.stops[0],
                        r.stops[r.stops.len() - 1]
                    );
                    println!("  {}", r.stops.join(" -> "));
                }
                None => println!("不存在欧拉路径"),
            })
        }
        Command::Assign { plants } => {
            let result = analysis::plant_assignment(graph, plants.as_slice())?;
            emit(json, &result, || {
                for (plant, vertices) in &result.plants {
                    println!(
                        "水厂 {} ({} 个节点): {}",
                        plant,
                        vertices.len(),
                        vertices.join(", ")
                    );
                }
                if !result.unassigned.is_empty() {
                    println!("未分配: {}", result.unassigned.join(", "));
                }
            })
        }
        Command::Matrix => {
            let matrix = analysis::distance_matrix(graph)?;
            emit(json, &matrix, || {
                for (source, row) in &matrix {
                    let cells: Vec<String> =
                        row.iter().map(|(t, d)| format!("{}:{}", t, d)).collect();
                    println!("{}: {}", source, cells.join(", "));
                }
            })
        }
    }
}

/// 路线的起终点必须存在，否则多半是输入错误
fn require_vertices<'a>(
    graph: &Graph,
    labels: impl IntoIterator<Item = &'a String>,
) -> urbannet::Result<()> {
    for label in labels {
        if !graph.contains_vertex(label) {
            return Err(urbannet::Error::VertexNotFound(label.clone()));
        }
    }
    Ok(())
}

fn print_route(route: &analysis::Route) {
    match route.distance {
        Some(d) => {
            println!("{} -> {}: 距离 {}", route.from, route.to, d);
            println!("  {}", route.path.join(" -> "));
        }
        None => println!("{} -> {}: 无可用路线", route.from, route.to),
    }
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce()) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text();
    }
    Ok(())
}

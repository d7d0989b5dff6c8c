use std::path::Path;

use anyhow::Context;
use log::info;
use pathscope::{
    graph::{EdgeId, VertexId, WeightedGraph},
    shortest::{bellman_ford_with_observer, shortest_path, RelaxationObserver},
};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_graph, print_vertex_table, select_source, vertex_rows, Sample, VertexRow},
    output::print_output,
};

#[derive(Debug, Serialize)]
pub struct TraceStep {
    /// `initialized`, or the relaxed edge as `source -> target`.
    pub caption: String,
    pub vertices: Vec<VertexRow>,
}

#[derive(Debug, Serialize)]
pub struct BellmanFordReport {
    pub source: String,
    pub consistent: bool,
    pub vertices: Vec<VertexRow>,
    /// Shortest path per reachable vertex, `None` for vertices on a negative cycle.
    pub paths: Vec<(String, Option<Vec<String>>)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trace: Vec<TraceStep>,
}

/// Records violating edges, and with `trace` a vertex table snapshot per step.
#[derive(Default)]
struct ReportObserver {
    trace: bool,
    steps: Vec<TraceStep>,
    violations: Vec<String>,
}

impl ReportObserver {
    fn snapshot(&mut self, graph: &WeightedGraph, caption: String) {
        self.steps.push(TraceStep {
            caption,
            vertices: vertex_rows(graph),
        });
    }
}

impl RelaxationObserver for ReportObserver {
    fn on_initialized(&mut self, graph: &WeightedGraph) {
        if self.trace {
            self.snapshot(graph, "initialized".to_string());
        }
    }

    fn on_relaxed(&mut self, graph: &WeightedGraph, edge: EdgeId) {
        if self.trace {
            let caption = graph
                .edge(edge)
                .map(|e| {
                    let name = |v| graph.vertex(v).map_or("?", |v| v.id());
                    format!("{} -> {}", name(e.source()), name(e.target()))
                })
                .unwrap_or_default();
            self.snapshot(graph, caption);
        }
    }

    fn on_violation(&mut self, graph: &WeightedGraph, edge: EdgeId) {
        self.violations
            .push(graph.edge_label(edge).unwrap_or_else(|| edge.to_string()));
    }
}

fn path_names(graph: &WeightedGraph, target: VertexId) -> anyhow::Result<Option<Vec<String>>> {
    let path = shortest_path(graph, target)?;
    Ok(path.map(|path| {
        path.iter()
            .filter_map(|&v| graph.vertex(v).map(|v| v.id().to_string()))
            .collect()
    }))
}

/// Run Bellman-Ford from `source` over `graph` and collect the report.
pub fn compute(
    graph: &mut WeightedGraph,
    source: VertexId,
    trace: bool,
) -> anyhow::Result<BellmanFordReport> {
    let mut observer = ReportObserver {
        trace,
        ..ReportObserver::default()
    };
    let consistent = bellman_ford_with_observer(graph, source, &mut observer)
        .context("Bellman-Ford failed")?;

    let mut paths = Vec::new();
    for (id, vertex) in graph.vertices() {
        if vertex.distance().is_finite() {
            paths.push((vertex.id().to_string(), path_names(graph, id)?));
        }
    }

    Ok(BellmanFordReport {
        source: graph
            .vertex(source)
            .map(|v| v.id().to_string())
            .unwrap_or_default(),
        consistent,
        vertices: vertex_rows(graph),
        paths,
        violations: observer.violations,
        trace: observer.steps,
    })
}

pub fn run(
    path: Option<&Path>,
    source: Option<&str>,
    trace: bool,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let mut graph = load_graph(path, Sample::General)?;
    let source = select_source(&graph, source, path, Sample::General)?;

    let report = compute(&mut graph, source, trace)?;
    if !report.consistent {
        info!("negative-weight cycle reachable from {}", report.source);
    }

    print_output(&report, opts, |report| {
        for step in &report.trace {
            print_vertex_table(&step.caption, &step.vertices);
        }
        for violation in &report.violations {
            println!("False for: {violation}");
        }
        if !report.violations.is_empty() {
            println!();
        }

        print_vertex_table("Result:", &report.vertices);

        if report.consistent {
            for (target, path) in &report.paths {
                if let Some(path) = path {
                    println!("{target}: {}", path.join(" -> "));
                }
            }
            println!();
        }
        println!("Overall result: {}.", report.consistent);
    })
}

use std::path::Path;

use anyhow::{bail, Context};
use pathscope::{
    graph::{algorithms::is_acyclic, VertexId, WeightedGraph},
    shortest::dag_shortest_paths,
};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_graph, print_vertex_table, select_source, vertex_rows, Sample, VertexRow},
    output::print_output,
};

#[derive(Debug, Serialize)]
pub struct DagReport {
    pub source: String,
    pub order: Vec<String>,
    pub vertices: Vec<VertexRow>,
}

/// Run DAG shortest paths from `source`. Cyclic graphs are refused.
pub fn compute(graph: &mut WeightedGraph, source: VertexId) -> anyhow::Result<DagReport> {
    if !is_acyclic(&*graph) {
        bail!("graph contains a cycle; use bellman-ford for cyclic graphs");
    }

    let order = dag_shortest_paths(graph, source).context("DAG shortest paths failed")?;

    Ok(DagReport {
        source: graph
            .vertex(source)
            .map(|v| v.id().to_string())
            .unwrap_or_default(),
        order: order
            .iter()
            .filter_map(|&v| graph.vertex(v).map(|v| v.id().to_string()))
            .collect(),
        vertices: vertex_rows(graph),
    })
}

pub fn run(path: Option<&Path>, source: Option<&str>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let mut graph = load_graph(path, Sample::Acyclic)?;
    let source = select_source(&graph, source, path, Sample::Acyclic)?;

    let report = compute(&mut graph, source)?;

    print_output(&report, opts, |report| {
        println!("Topological order: {}", report.order.join(", "));
        println!();
        print_vertex_table("Result:", &report.vertices);
    })
}

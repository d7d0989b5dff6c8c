use std::path::Path;

use pathscope::graph::WeightedGraph;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_graph, vertex_name, Sample},
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct DfsRow {
    pub id: String,
    pub opened_at: usize,
    pub closed_at: usize,
    pub color: String,
    pub parent: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DfsReport {
    /// Vertices in the order they finished.
    pub finished: Vec<String>,
    pub vertices: Vec<DfsRow>,
}

pub fn compute(graph: &mut WeightedGraph) -> DfsReport {
    let mut finish_order = Vec::with_capacity(graph.vertex_count());
    graph.perform_dfs(|_| {}, |vertex| finish_order.push(vertex));
    let graph = &*graph;

    let vertices = graph
        .vertices()
        .map(|(_, vertex)| DfsRow {
            id: vertex.id().to_string(),
            opened_at: vertex.opened_at(),
            closed_at: vertex.closed_at(),
            color: vertex.color().to_string(),
            parent: vertex
                .predecessor()
                .map(|p| vertex_name(graph, Some(p))),
        })
        .collect();

    DfsReport {
        finished: finish_order
            .into_iter()
            .map(|v| vertex_name(graph, Some(v)))
            .collect(),
        vertices,
    }
}

pub fn run(path: Option<&Path>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let mut graph = load_graph(path, Sample::Acyclic)?;
    let report = compute(&mut graph);

    print_output(&report, opts, |report| {
        let mut tw = TabWriter::new(vec![
            ("V", Align::Left),
            ("Open", Align::Right),
            ("Close", Align::Right),
            ("Color", Align::Left),
            ("Parent", Align::Left),
        ]);
        for row in &report.vertices {
            tw.row(vec![
                row.id.clone(),
                row.opened_at.to_string(),
                row.closed_at.to_string(),
                row.color.clone(),
                row.parent.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }
        tw.print();
        println!();
        println!("Finish order: {}", report.finished.join(", "));
    })
}

use std::path::Path;

use anyhow::{bail, Context};
use pathscope::graph::{VertexId, WeightedGraph};
use serde::{Deserialize, Serialize};

use crate::output::{Align, TabWriter};

/// On-disk graph description.
///
/// ```json
/// { "vertices": ["s", "t"], "edges": [{ "source": "s", "target": "t", "weight": 6 }] }
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
    pub weight: i32,
}

impl GraphFile {
    /// Build the graph, adding vertices and edges in file order.
    pub fn build(&self) -> anyhow::Result<WeightedGraph> {
        let mut graph = WeightedGraph::with_capacity(self.vertices.len(), self.edges.len());
        for id in &self.vertices {
            graph
                .add_vertex(id.as_str())
                .with_context(|| format!("failed to add vertex '{id}'"))?;
        }
        for edge in &self.edges {
            graph
                .add_edge(edge.source.as_str(), edge.target.as_str(), edge.weight)
                .with_context(|| {
                    format!(
                        "failed to add edge ({}, {}) with weight {}",
                        edge.source, edge.target, edge.weight
                    )
                })?;
        }
        Ok(graph)
    }
}

/// Built-in sample graphs used when no `--graph` is given.
#[derive(Debug, Clone, Copy)]
pub enum Sample {
    /// General graph with negative weights and cycles, no negative cycle. Source `s`.
    General,
    /// Acyclic graph with negative weights. Source `r`.
    Acyclic,
}

impl Sample {
    pub fn source(self) -> &'static str {
        match self {
            Sample::General => "s",
            Sample::Acyclic => "r",
        }
    }

    pub fn graph_file(self) -> GraphFile {
        let (vertices, edges): (&[&str], &[(&str, &str, i32)]) = match self {
            Sample::General => (
                &["s", "y", "t", "x", "z"],
                &[
                    ("s", "t", 6),
                    ("s", "y", 7),
                    ("t", "x", 5),
                    ("t", "y", 8),
                    ("t", "z", -4),
                    ("y", "x", -3),
                    ("y", "z", 9),
                    ("x", "t", -2),
                    ("z", "s", 2),
                    ("z", "x", 7),
                ],
            ),
            Sample::Acyclic => (
                &["z", "y", "x", "t", "s", "r"],
                &[
                    ("y", "z", -2),
                    ("x", "z", 1),
                    ("x", "y", -1),
                    ("t", "x", 7),
                    ("t", "y", 4),
                    ("t", "z", 2),
                    ("s", "t", 2),
                    ("s", "x", 6),
                    ("r", "s", 5),
                    ("r", "t", 3),
                ],
            ),
        };

        GraphFile {
            vertices: vertices.iter().map(|id| id.to_string()).collect(),
            edges: edges
                .iter()
                .map(|&(source, target, weight)| EdgeSpec {
                    source: source.to_string(),
                    target: target.to_string(),
                    weight,
                })
                .collect(),
        }
    }
}

/// Parse a graph description from JSON text.
pub fn parse_graph(text: &str) -> anyhow::Result<WeightedGraph> {
    let file: GraphFile = serde_json::from_str(text).context("invalid graph description")?;
    file.build()
}

/// Load the graph at `path`, or the `sample` graph when no path is given.
pub fn load_graph(path: Option<&Path>, sample: Sample) -> anyhow::Result<WeightedGraph> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read graph: {}", path.display()))?;
            parse_graph(&text).with_context(|| format!("failed to load graph: {}", path.display()))
        }
        None => sample.graph_file().build(),
    }
}

/// Pick the source vertex: the explicit one, the sample default, or the first vertex of a
/// loaded graph.
pub fn select_source(
    graph: &WeightedGraph,
    explicit: Option<&str>,
    path: Option<&Path>,
    sample: Sample,
) -> anyhow::Result<VertexId> {
    let ident = match (explicit, path) {
        (Some(id), _) => id,
        (None, None) => sample.source(),
        (None, Some(_)) => match graph.vertices().next() {
            Some((_, vertex)) => vertex.id(),
            None => bail!("graph has no vertices to start from"),
        },
    };
    graph
        .resolve(ident)
        .with_context(|| format!("invalid source vertex '{ident}'"))
}

/// Identifier of `vertex`, or `-` for none.
pub fn vertex_name(graph: &WeightedGraph, vertex: Option<VertexId>) -> String {
    vertex
        .and_then(|v| graph.vertex(v))
        .map_or_else(|| "-".to_string(), |v| v.id().to_string())
}

/// Distance as printed in tables: integral values without a fraction, `inf` when unreached.
pub fn format_distance(distance: f64) -> String {
    if distance.is_infinite() {
        if distance > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        }
    } else {
        format!("{distance}")
    }
}

/// One row of the `V | D | P` result table.
#[derive(Debug, Clone, Serialize)]
pub struct VertexRow {
    pub id: String,
    /// `None` when unreached.
    pub distance: Option<f64>,
    pub predecessor: Option<String>,
}

/// Snapshot of the distance and predecessor of every vertex, in insertion order.
pub fn vertex_rows(graph: &WeightedGraph) -> Vec<VertexRow> {
    graph
        .vertices()
        .map(|(_, vertex)| VertexRow {
            id: vertex.id().to_string(),
            distance: Some(vertex.distance()).filter(|d| d.is_finite()),
            predecessor: vertex
                .predecessor()
                .and_then(|p| graph.vertex(p))
                .map(|p| p.id().to_string()),
        })
        .collect()
}

/// Print `rows` as a `V | D | P` table under `caption`.
pub fn print_vertex_table(caption: &str, rows: &[VertexRow]) {
    println!("{caption}");
    let mut tw = TabWriter::new(vec![
        ("V", Align::Left),
        ("D", Align::Right),
        ("P", Align::Left),
    ]);
    for row in rows {
        tw.row(vec![
            row.id.clone(),
            format_distance(row.distance.unwrap_or(f64::INFINITY)),
            row.predecessor.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    tw.print();
    println!();
}

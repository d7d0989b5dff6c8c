#![no_main]

use libfuzzer_sys::fuzz_target;
use pathscope::prelude::*;

// First byte: vertex count. Then (source, target, weight) triples. Edges are oriented from the
// higher to the lower index, so the graph is always acyclic.
fuzz_target!(|data: &[u8]| {
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let count = usize::from(count % 64) + 1;

    let mut graph = WeightedGraph::with_capacity(count, rest.len() / 3);
    for i in 0..count {
        let _ = graph.add_vertex(format!("v{i}"));
    }
    for chunk in rest.chunks_exact(3) {
        let a = usize::from(chunk[0]) % count;
        let b = usize::from(chunk[1]) % count;
        let weight = i32::from(chunk[2] as i8);
        if a == b {
            continue;
        }
        let (u, v) = if a > b { (a, b) } else { (b, a) };
        let _ = graph.add_edge(VertexId::new(u), VertexId::new(v), weight);
    }
    assert!(is_acyclic(&graph));

    let source = VertexId::new(count - 1);
    let mut general = graph.clone();
    let order = dag_shortest_paths(&mut graph, source).unwrap();
    assert_eq!(order.len(), count);
    assert!(bellman_ford(&mut general, source).unwrap());

    for ((_, a), (_, b)) in graph.vertices().zip(general.vertices()) {
        assert_eq!(a.distance(), b.distance());
    }
});

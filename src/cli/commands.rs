//! CLI command implementations.

use std::collections::HashMap;

use log::debug;

use crate::config::OutputFormat;
use crate::graph::{traverse, Graph, TraversalOrder, TraversalParams};
use crate::types::{GraphError, GraphResult, VertexId};

/// A graph whose vertices are named on the command line.
#[derive(Debug, Clone)]
pub struct NamedGraph {
    graph: Graph<String>,
    names: HashMap<String, VertexId>,
}

impl NamedGraph {
    /// Build a graph from comma-separated vertex names and `a-b` edge pairs.
    ///
    /// Repeated names refer to the same vertex. Names may not contain `-`,
    /// which separates edge endpoints. Edges whose endpoints are not listed
    /// as vertices are ignored, the same way `Graph::add_edge` ignores
    /// non-members.
    pub fn parse(vertices: &str, edges: Option<&str>) -> GraphResult<Self> {
        let mut graph = Graph::new();
        let mut names = HashMap::new();

        for name in split_list(vertices) {
            if name.contains('-') {
                return Err(GraphError::InvalidVertexName(name.to_string()));
            }
            names
                .entry(name.to_string())
                .or_insert_with(|| graph.insert_vertex(name.to_string()));
        }

        for spec in edges.map(split_list).into_iter().flatten() {
            let (a, b) = spec
                .split_once('-')
                .map(|(a, b)| (a.trim(), b.trim()))
                .filter(|(a, b)| !a.is_empty() && !b.is_empty() && !b.contains('-'))
                .ok_or_else(|| GraphError::InvalidEdgeSpec(spec.to_string()))?;
            match (names.get(a), names.get(b)) {
                (Some(&ia), Some(&ib)) => {
                    graph.add_edge(ia, ib);
                }
                _ => debug!("edge {a}-{b} ignored: endpoint not listed as a vertex"),
            }
        }

        Ok(Self { graph, names })
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// Handle for a vertex name.
    pub fn id(&self, name: &str) -> GraphResult<VertexId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(name.to_string()))
    }

    fn name(&self, id: VertexId) -> &str {
        self.graph.value(id).map(String::as_str).unwrap_or("?")
    }
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Options for the `traverse` command, already merged with the config.
#[derive(Debug, Clone, Copy)]
pub struct TraverseOptions {
    pub order: TraversalOrder,
    pub max_depth: u32,
    pub max_results: usize,
}

/// Render a traversal from `start`.
pub fn render_traverse(
    named: &NamedGraph,
    start: &str,
    options: TraverseOptions,
    format: OutputFormat,
) -> GraphResult<String> {
    let start_id = named.id(start)?;
    let params = TraversalParams {
        start: start_id,
        order: options.order,
        max_depth: options.max_depth,
        max_results: options.max_results,
    };
    let result = traverse(named.graph(), &params)?;

    let out = match format {
        OutputFormat::Json => {
            let visited: Vec<&str> = result.visited.iter().map(|&id| named.name(id)).collect();
            let depths: serde_json::Map<String, serde_json::Value> = result
                .visited
                .iter()
                .map(|id| {
                    let depth = result.depths.get(id).copied().unwrap_or(0);
                    (named.name(*id).to_string(), depth.into())
                })
                .collect();
            serde_json::to_string_pretty(&serde_json::json!({
                "start": start,
                "order": options.order.name(),
                "visited": visited,
                "depths": depths,
            }))?
        }
        OutputFormat::Text => {
            let mut out = format!("Traversal ({}) from {}:\n", options.order, start);
            for id in &result.visited {
                let depth = result.depths.get(id).copied().unwrap_or(0);
                out.push_str(&format!("  [depth {}] {}\n", depth, named.name(*id)));
            }
            out
        }
    };
    Ok(out)
}

/// Render vertex/edge counts and the adjacency of every vertex.
pub fn render_info(named: &NamedGraph, format: OutputFormat) -> GraphResult<String> {
    let graph = named.graph();
    let rows: Vec<(&str, usize, Vec<&str>)> = graph
        .vertices()
        .map(|id| {
            let neighbors = graph.neighbors(id).iter().map(|&n| named.name(n)).collect();
            (named.name(id), graph.degree(id).unwrap_or(0), neighbors)
        })
        .collect();

    let out = match format {
        OutputFormat::Json => {
            let vertices: Vec<serde_json::Value> = rows
                .iter()
                .map(|(name, degree, neighbors)| {
                    serde_json::json!({
                        "name": name,
                        "degree": degree,
                        "neighbors": neighbors,
                    })
                })
                .collect();
            serde_json::to_string_pretty(&serde_json::json!({
                "vertex_count": graph.vertex_count(),
                "edge_count": graph.edge_count(),
                "vertices": vertices,
            }))?
        }
        OutputFormat::Text => {
            let mut out = format!(
                "Vertices: {}\nEdges: {}\n",
                graph.vertex_count(),
                graph.edge_count()
            );
            for (name, degree, neighbors) in &rows {
                out.push_str(&format!(
                    "  {} (degree {}): {}\n",
                    name,
                    degree,
                    neighbors.join(", ")
                ));
            }
            out
        }
    };
    Ok(out)
}

/// Run a traversal and print it.
pub fn cmd_traverse(
    named: &NamedGraph,
    start: &str,
    options: TraverseOptions,
    format: OutputFormat,
) -> GraphResult<()> {
    print!("{}", render_traverse(named, start, options, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

/// Print graph statistics.
pub fn cmd_info(named: &NamedGraph, format: OutputFormat) -> GraphResult<()> {
    print!("{}", render_info(named, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unbounded(order: TraversalOrder) -> TraverseOptions {
        TraverseOptions {
            order,
            max_depth: u32::MAX,
            max_results: usize::MAX,
        }
    }

    #[test]
    fn parse_deduplicates_names() {
        let named = NamedGraph::parse("a, b, a,,c", Some("a-b")).unwrap();
        assert_eq!(named.graph().vertex_count(), 3);
        assert_eq!(named.graph().edge_count(), 1);
    }

    #[test]
    fn parse_rejects_malformed_edge() {
        for bad in ["ab", "a-", "-b", "a-b-c"] {
            match NamedGraph::parse("a,b", Some(bad)) {
                Err(GraphError::InvalidEdgeSpec(spec)) => assert_eq!(spec, bad),
                other => panic!("Expected InvalidEdgeSpec, got {:?}", other),
            }
        }
    }

    #[test]
    fn parse_rejects_dash_in_vertex_name() {
        match NamedGraph::parse("a-b,c", Some("a-b-c")) {
            Err(GraphError::InvalidVertexName(name)) => assert_eq!(name, "a-b"),
            other => panic!("Expected InvalidVertexName, got {:?}", other),
        }
    }

    #[test]
    fn parse_ignores_unlisted_endpoint() {
        let named = NamedGraph::parse("a,b", Some("a-b,a-z")).unwrap();
        assert_eq!(named.graph().edge_count(), 1);
        assert!(named.id("z").is_err());
    }

    #[test]
    fn traverse_text_lists_depths() {
        let named = NamedGraph::parse("a,b,c", Some("a-b,b-c")).unwrap();
        let out = render_traverse(
            &named,
            "a",
            unbounded(TraversalOrder::BreadthFirst),
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(
            out,
            "Traversal (bfs) from a:\n  [depth 0] a\n  [depth 1] b\n  [depth 2] c\n"
        );
    }

    #[test]
    fn traverse_json_has_visited_names() {
        let named = NamedGraph::parse("a,b,c,d", Some("a-b,a-c,a-d")).unwrap();
        let out = render_traverse(
            &named,
            "a",
            unbounded(TraversalOrder::DepthFirst),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["order"], "dfs");
        assert_eq!(value["visited"], serde_json::json!(["a", "b", "c", "d"]));
        assert_eq!(value["depths"]["d"], 1);
    }

    #[test]
    fn traverse_unknown_start_fails() {
        let named = NamedGraph::parse("a", None).unwrap();
        let err = render_traverse(
            &named,
            "nope",
            unbounded(TraversalOrder::DepthFirst),
            OutputFormat::Text,
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::UnknownVertex(_)));
    }

    #[test]
    fn info_counts_self_loop_twice_in_degree() {
        let named = NamedGraph::parse("a,b", Some("a-a,a-b")).unwrap();
        let out = render_info(&named, OutputFormat::Text).unwrap();
        assert!(out.starts_with("Vertices: 2\nEdges: 2\n"));
        assert!(out.contains("  a (degree 3): a, b\n"));
        assert!(out.contains("  b (degree 1): a\n"));
    }
}

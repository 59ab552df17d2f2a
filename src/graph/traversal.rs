//! Graph traversal algorithms (DFS, BFS).

use std::collections::{HashMap, VecDeque};

use log::trace;
use serde::Serialize;

use crate::types::{GraphError, GraphResult, VertexId, DEFAULT_MAX_DEPTH, DEFAULT_MAX_RESULTS};

use super::Graph;

/// Order in which a traversal visits vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// Depth-first pre-order.
    #[default]
    DepthFirst,
    /// Breadth-first, level by level.
    BreadthFirst,
}

impl TraversalOrder {
    /// Return a human-readable name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
        }
    }

    /// Parse a traversal order from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dfs" | "depth_first" | "depthfirst" => Some(Self::DepthFirst),
            "bfs" | "breadth_first" | "breadthfirst" => Some(Self::BreadthFirst),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for TraversalOrder {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| GraphError::UnknownOrder(s.to_string()))
    }
}

/// Parameters for a bounded traversal.
#[derive(Debug, Clone)]
pub struct TraversalParams {
    /// Vertex to start from.
    pub start: VertexId,
    /// Visiting order.
    pub order: TraversalOrder,
    /// Vertices further than this many edges from `start` are not visited.
    ///
    /// Distance is the shortest path length for both orders. Depth-first
    /// order still lists vertices in the order the search first reaches
    /// them.
    pub max_depth: u32,
    /// Stop after this many vertices have been visited.
    pub max_results: usize,
}

impl TraversalParams {
    /// Unbounded parameters for `start`.
    pub fn new(start: VertexId, order: TraversalOrder) -> Self {
        Self {
            start,
            order,
            max_depth: DEFAULT_MAX_DEPTH,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Result of a bounded traversal.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalResult {
    /// Visited vertices, in visiting order.
    pub visited: Vec<VertexId>,
    /// Edge distance at which each vertex was reached. Shortest distance for
    /// breadth-first order and for depth-bounded depth-first order, search
    /// tree depth for unbounded depth-first order.
    pub depths: HashMap<VertexId, u32>,
}

/// Depth-first pre-order of handles reachable from `start`.
///
/// Uses an explicit stack of `(vertex, next neighbor, depth)` frames, so the
/// visiting order is the same as the recursive formulation without growing
/// the call stack.
pub fn depth_first<T>(graph: &Graph<T>, start: VertexId) -> Vec<VertexId> {
    walk_depth_first(graph, start, DEFAULT_MAX_DEPTH, DEFAULT_MAX_RESULTS)
        .into_iter()
        .map(|(id, _)| id)
        .collect()
}

/// Breadth-first order of handles reachable from `start`.
///
/// Vertices are marked visited when enqueued, so none is enqueued twice.
pub fn breadth_first<T>(graph: &Graph<T>, start: VertexId) -> Vec<VertexId> {
    walk_breadth_first(graph, start, DEFAULT_MAX_DEPTH, DEFAULT_MAX_RESULTS)
        .into_iter()
        .map(|(id, _)| id)
        .collect()
}

/// Bounded traversal with depth and result limits.
///
/// Unlike the convenience searches on [`Graph`], an unknown start is an error.
pub fn traverse<T>(graph: &Graph<T>, params: &TraversalParams) -> GraphResult<TraversalResult> {
    if graph.vertex(params.start).is_none() {
        return Err(GraphError::VertexNotFound(params.start));
    }

    let steps = match params.order {
        TraversalOrder::DepthFirst => {
            walk_depth_first(graph, params.start, params.max_depth, params.max_results)
        }
        TraversalOrder::BreadthFirst => {
            walk_breadth_first(graph, params.start, params.max_depth, params.max_results)
        }
    };

    let depths = steps.iter().copied().collect();
    let visited = steps.into_iter().map(|(id, _)| id).collect();
    Ok(TraversalResult { visited, depths })
}

fn walk_depth_first<T>(
    graph: &Graph<T>,
    start: VertexId,
    max_depth: u32,
    max_results: usize,
) -> Vec<(VertexId, u32)> {
    if graph.vertex(start).is_none() || max_results == 0 {
        return Vec::new();
    }

    // Under a depth bound, a vertex first reached by a long path is expanded
    // again when a shorter one turns up, so the visited set matches BFS.
    let bounded = max_depth != DEFAULT_MAX_DEPTH;
    let mut best: Vec<Option<u32>> = vec![None; graph.arena_len()];
    let mut order: Vec<VertexId> = Vec::new();
    let mut stack: Vec<(VertexId, usize, u32)> = Vec::new();

    best[start.index()] = Some(0);
    order.push(start);
    stack.push((start, 0, 0));

    while let Some(&(vertex, cursor, depth)) = stack.last() {
        if order.len() >= max_results {
            break;
        }
        if depth >= max_depth {
            stack.pop();
            continue;
        }
        let Some(&next) = graph.neighbors(vertex).get(cursor) else {
            stack.pop();
            continue;
        };
        if let Some(top) = stack.last_mut() {
            top.1 += 1;
        }
        let reached = depth + 1;
        match best[next.index()] {
            None => {
                trace!("dfs: {vertex} -> {next} at depth {reached}");
                best[next.index()] = Some(reached);
                order.push(next);
                stack.push((next, 0, reached));
            }
            Some(seen) if bounded && reached < seen => {
                trace!("dfs: {vertex} -> {next} shortened to depth {reached}");
                best[next.index()] = Some(reached);
                stack.push((next, 0, reached));
            }
            Some(_) => {}
        }
    }

    order
        .into_iter()
        .map(|id| (id, best[id.index()].unwrap_or_default()))
        .collect()
}

fn walk_breadth_first<T>(
    graph: &Graph<T>,
    start: VertexId,
    max_depth: u32,
    max_results: usize,
) -> Vec<(VertexId, u32)> {
    let mut order = Vec::new();
    if graph.vertex(start).is_none() || max_results == 0 {
        return order;
    }

    let mut visited = vec![false; graph.arena_len()];
    let mut queue: VecDeque<(VertexId, u32)> = VecDeque::new();

    visited[start.index()] = true;
    queue.push_back((start, 0));

    while let Some((vertex, depth)) = queue.pop_front() {
        order.push((vertex, depth));
        if order.len() >= max_results {
            break;
        }
        if depth >= max_depth {
            continue;
        }
        for &next in graph.neighbors(vertex) {
            if visited[next.index()] {
                continue;
            }
            trace!("bfs: {vertex} -> {next} at depth {}", depth + 1);
            visited[next.index()] = true;
            queue.push_back((next, depth + 1));
        }
    }

    order
}

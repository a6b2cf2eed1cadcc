//! Shortest Path search on a [`SpatialGraph`].
//!
//! [`find_shortest_path`] is the entry point for single queries. [`find_shortest_paths`] answers
//! many queries against the same Graph at once.

mod a_star;
pub use a_star::{find_shortest_path, find_shortest_path_with, search_with_stats, SearchStats};

mod config;
pub use config::SearchConfig;

mod cost;
pub use cost::{distance, estimate, path_cost};

mod frontier;

use crate::{graph::SpatialGraph, NodeID, Path, Result};

/// Answers a list of independent `(start, goal)` queries against the same Graph.
///
/// The Graph is only ever read, so with the `parallel` feature (on by default) the queries are
/// distributed over the [`rayon`](https://docs.rs/rayon) thread pool. Without it they run one after
/// the other. Either way, the `n`-th result belongs to the `n`-th query.
///
/// ## Examples
/// ```
/// use route_planner::prelude::*;
///
/// let mut map = RoadMap::new();
/// let a = map.add_intersection((0.0, 0.0));
/// let b = map.add_intersection((1.0, 0.0));
/// let c = map.add_intersection((9.0, 9.0));
/// map.add_road(a, b).unwrap();
///
/// let results = find_shortest_paths(&map, &[(a, b), (b, c), (c, c)], &SearchConfig::default());
///
/// assert_eq!(results[0].as_ref().unwrap().cost(), 1.0);
/// assert_eq!(results[1], Err(PlannerError::NoPathFound { start: b, goal: c }));
/// assert_eq!(results[2].as_ref().unwrap().len(), 1);
/// ```
pub fn find_shortest_paths<G: SpatialGraph + Sync + ?Sized>(
	graph: &G,
	queries: &[(NodeID, NodeID)],
	config: &SearchConfig,
) -> Vec<Result<Path<NodeID>>> {
	re_debug!("answering {} queries", queries.len());
	answer_all(graph, queries, config)
}

#[cfg(feature = "parallel")]
fn answer_all<G: SpatialGraph + Sync + ?Sized>(
	graph: &G,
	queries: &[(NodeID, NodeID)],
	config: &SearchConfig,
) -> Vec<Result<Path<NodeID>>> {
	use rayon::prelude::*;
	queries
		.par_iter()
		.map(|&(start, goal)| find_shortest_path_with(graph, start, goal, config))
		.collect()
}

#[cfg(not(feature = "parallel"))]
fn answer_all<G: SpatialGraph + ?Sized>(
	graph: &G,
	queries: &[(NodeID, NodeID)],
	config: &SearchConfig,
) -> Vec<Result<Path<NodeID>>> {
	queries
		.iter()
		.map(|&(start, goal)| find_shortest_path_with(graph, start, goal, config))
		.collect()
}

use super::{
	cost::distance,
	frontier::{Frontier, Reached},
	SearchConfig,
};
use crate::{graph::SpatialGraph, node_id::*, NodeID, Path, PlannerError, Point, Result};

use std::time::{Duration, Instant};

/// Counters describing the work done by a single search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
	/// Nodes moved from the Frontier to the explored set
	pub expanded: usize,
	/// routes discarded because a cheaper route to the same Node was known
	pub pruned: usize,
	/// the largest number of Nodes in the Frontier at any time
	pub peak_frontier: usize,
	/// wall-clock time of the search
	pub elapsed: Duration,
}

/// Finds the cheapest Path from `start` to `goal` using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The Cost of a road is the Euclidean distance between its ends and the straight-line distance
/// to `goal` is the heuristic, so the returned Path is always optimal. Among several optimal
/// Paths the result is deterministic: whenever two candidates are equally promising, the one
/// with the lower NodeID is looked at first.
///
/// This is [`find_shortest_path_with`] using the default [`SearchConfig`], which puts no bounds
/// on the search.
///
/// ## Examples
/// Basic usage:
/// ```
/// use route_planner::prelude::*;
///
/// // D --- C
/// // |     |
/// // A --- B
/// let mut map = RoadMap::new();
/// let a = map.add_intersection((0.0, 0.0));
/// let b = map.add_intersection((1.0, 0.0));
/// let c = map.add_intersection((1.0, 1.0));
/// let d = map.add_intersection((0.0, 1.0));
/// for (x, y) in [(a, b), (b, c), (c, d), (d, a)] {
///     map.add_road(x, y).unwrap();
/// }
///
/// let path = find_shortest_path(&map, a, c).unwrap();
///
/// assert_eq!(path, vec![a, b, c]);
/// assert_eq!(path.cost(), 2.0);
/// ```
///
/// ## Errors
/// - [`UnknownNode`](PlannerError::UnknownNode) if `start` or `goal` is not in the Graph.
///   This is checked before searching.
/// - [`NoPathFound`](PlannerError::NoPathFound) if `goal` cannot be reached from `start`
/// - [`InvalidGraph`](PlannerError::InvalidGraph) if a road leads to a Node without coordinates
///
/// ```
/// use route_planner::prelude::*;
///
/// let mut map = RoadMap::new();
/// let a = map.add_intersection((0.0, 0.0));
/// let b = map.add_intersection((5.0, 0.0));
///
/// assert_eq!(
///     find_shortest_path(&map, a, b),
///     Err(PlannerError::NoPathFound { start: a, goal: b })
/// );
/// assert_eq!(find_shortest_path(&map, a, 17), Err(PlannerError::UnknownNode(17)));
/// ```
pub fn find_shortest_path<G: SpatialGraph + ?Sized>(
	graph: &G,
	start: NodeID,
	goal: NodeID,
) -> Result<Path<NodeID>> {
	find_shortest_path_with(graph, start, goal, &SearchConfig::default())
}

/// Same as [`find_shortest_path`], but bounded by `config`.
///
/// ## Errors
/// Everything [`find_shortest_path`] can fail with, plus
/// [`SearchAborted`](PlannerError::SearchAborted) if a bound of `config` was exceeded.
pub fn find_shortest_path_with<G: SpatialGraph + ?Sized>(
	graph: &G,
	start: NodeID,
	goal: NodeID,
	config: &SearchConfig,
) -> Result<Path<NodeID>> {
	search_with_stats(graph, start, goal, config).0
}

/// Same as [`find_shortest_path_with`], but also reports what the search did.
///
/// The [`SearchStats`] are returned whether the search succeeded or not.
pub fn search_with_stats<G: SpatialGraph + ?Sized>(
	graph: &G,
	start: NodeID,
	goal: NodeID,
	config: &SearchConfig,
) -> (Result<Path<NodeID>>, SearchStats) {
	let started_at = Instant::now();
	let mut stats = SearchStats::default();
	let mut frontier = Frontier::with_capacity(config.capacity() / 2);

	re_debug!("searching path from {} to {}", start, goal);
	let result = a_star(graph, start, goal, config, started_at, &mut frontier, &mut stats);

	stats.pruned = frontier.pruned();
	stats.elapsed = started_at.elapsed();

	#[cfg(feature = "log")]
	log_outcome(start, goal, &result, &stats);

	(result, stats)
}

#[cfg(feature = "log")]
fn log_outcome(start: NodeID, goal: NodeID, result: &Result<Path<NodeID>>, stats: &SearchStats) {
	match result {
		Ok(path) => log::debug!(
			"path from {} to {}: {} nodes, cost {:.3} ({:?})",
			start,
			goal,
			path.len(),
			path.cost(),
			stats
		),
		Err(err) => log::debug!("no path from {} to {}: {} ({:?})", start, goal, err, stats),
	}
}

fn a_star<G: SpatialGraph + ?Sized>(
	graph: &G,
	start: NodeID,
	goal: NodeID,
	config: &SearchConfig,
	started_at: Instant,
	frontier: &mut Frontier,
	stats: &mut SearchStats,
) -> Result<Path<NodeID>> {
	let start_pos = graph.position(start)?;
	let goal_pos = graph.position(goal)?;
	if start == goal {
		return Ok(Path::new(vec![start], 0.0));
	}

	// an unrepresentable deadline is as good as none
	let deadline = config
		.time_limit
		.and_then(|limit| started_at.checked_add(limit));

	let mut explored = node_id_map_with_cap(config.capacity());
	explored.insert(start, Reached { cost: 0.0, prev: start });

	for other_id in graph.neighbors(start)? {
		if other_id == start {
			continue;
		}
		let other_pos = road_end(graph, start, other_id)?;
		frontier.offer(
			other_id,
			distance(start_pos, other_pos),
			start,
			distance(other_pos, goal_pos),
		);
	}
	stats.peak_frontier = frontier.len();

	while let Some((current_id, current)) = frontier.pop() {
		if current_id == goal {
			return Ok(walk_back(&explored, start, goal, current));
		}

		let out_of_budget = config.max_expansions.map_or(false, |max| stats.expanded >= max)
			|| deadline.map_or(false, |deadline| Instant::now() >= deadline);
		if out_of_budget {
			return Err(PlannerError::SearchAborted {
				expanded: stats.expanded,
			});
		}

		explored.insert(current_id, current);
		stats.expanded += 1;
		re_trace!("expanding {} at cost {:.3}", current_id, current.cost);

		let current_pos = graph.position(current_id)?;
		for other_id in graph.neighbors(current_id)? {
			if explored.contains_key(&other_id) {
				continue;
			}
			let other_pos = road_end(graph, current_id, other_id)?;
			let _offer = frontier.offer(
				other_id,
				current.cost + distance(current_pos, other_pos),
				current_id,
				distance(other_pos, goal_pos),
			);
			re_trace!("  {} -> {}: {:?}", current_id, other_id, _offer);
		}
		stats.peak_frontier = stats.peak_frontier.max(frontier.len());
	}

	debug_assert!(frontier.is_empty());
	Err(PlannerError::NoPathFound { start, goal })
}

/// The position of the Node at the far end of a road, which has to exist.
fn road_end<G: SpatialGraph + ?Sized>(graph: &G, from: NodeID, to: NodeID) -> Result<Point> {
	graph.position(to).map_err(|_| {
		PlannerError::invalid_graph(from, format!("road to {} which has no coordinates", to))
	})
}

/// Follows the predecessors from `goal` back to `start`.
fn walk_back(
	explored: &NodeIDMap<Reached>,
	start: NodeID,
	goal: NodeID,
	reached: Reached,
) -> Path<NodeID> {
	let mut steps = vec![goal];
	let mut current = reached.prev;

	while current != start {
		steps.push(current);
		current = explored[&current].prev;
	}
	steps.push(start);
	steps.reverse();

	Path::new(steps, reached.cost)
}

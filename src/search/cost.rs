//! Distances between Nodes and along Paths.
//!
//! Roads carry no stored weight: the Cost of a road is the straight-line distance between its
//! ends. That makes the straight-line distance to the goal an admissible and consistent heuristic.

use crate::{graph::SpatialGraph, Cost, NodeID, PlannerError, Point, Result};

/// The Euclidean distance between two points.
///
/// ```
/// # use route_planner::search::distance;
/// assert_eq!(distance((0.0, 0.0), (3.0, 4.0)), 5.0);
/// ```
pub fn distance(a: Point, b: Point) -> Cost {
	(a.0 - b.0).hypot(a.1 - b.1)
}

/// The heuristic of the search: the straight-line distance between two Nodes.
///
/// Symmetric, never negative and never larger than the Cost of any Path between the two Nodes.
///
/// ## Errors
/// [`UnknownNode`](PlannerError::UnknownNode) if either Node is not in the Graph.
pub fn estimate<G: SpatialGraph + ?Sized>(graph: &G, n1: NodeID, n2: NodeID) -> Result<Cost> {
	Ok(distance(graph.position(n1)?, graph.position(n2)?))
}

/// The total Cost of walking along `path`, road by road.
///
/// Paths with less than two Nodes cost nothing.
///
/// ## Errors
/// - [`UnknownNode`](PlannerError::UnknownNode) if a Node is not in the Graph
/// - [`InvalidPath`](PlannerError::InvalidPath) if two consecutive Nodes are not connected by a road
///
/// ## Examples
/// ```
/// use route_planner::{search::path_cost, PlannerError, RoadMap};
///
/// let mut map = RoadMap::new();
/// let a = map.add_intersection((0.0, 0.0));
/// let b = map.add_intersection((3.0, 4.0));
/// let c = map.add_intersection((3.0, 5.0));
/// map.add_road(a, b).unwrap();
/// map.add_road(b, c).unwrap();
///
/// assert_eq!(path_cost(&map, &[a, b, c]), Ok(6.0));
/// assert_eq!(path_cost(&map, &[a, c]), Err(PlannerError::InvalidPath { from: a, to: c }));
/// ```
pub fn path_cost<G: SpatialGraph + ?Sized>(graph: &G, path: &[NodeID]) -> Result<Cost> {
	if let [single] = path {
		graph.position(*single)?;
	}
	let mut cost = 0.0;
	for pair in path.windows(2) {
		let (from, to) = (pair[0], pair[1]);
		let from_pos = graph.position(from)?;
		let to_pos = graph.position(to)?;
		if !graph.neighbors(from)?.any(|other| other == to) {
			return Err(PlannerError::InvalidPath { from, to });
		}
		cost += distance(from_pos, to_pos);
	}
	Ok(cost)
}

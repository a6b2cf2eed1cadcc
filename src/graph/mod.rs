//! The Graph side of the planner: what the search needs to know about a road network.

use crate::{NodeID, Point, Result};

mod intersection;
pub use intersection::Intersection;

mod road_map;
pub use road_map::RoadMap;

/// Read-only access to a spatial Graph.
///
/// This is everything [`find_shortest_path`](crate::find_shortest_path) asks of a Graph:
/// where a Node is, and which Nodes it is directly connected to. The Cost of a road is never
/// asked for, since it is always the Euclidean distance between the coordinates of its two ends.
///
/// Implementations must keep adjacency symmetric: if `b` is a neighbor of `a`, then `a` is a
/// neighbor of `b`. [`RoadMap`] is the implementation provided by this crate, but any other
/// storage (a kd-tree, a memory-mapped file, ...) works just as well.
///
/// The search only ever takes `&self`, so a Graph that is [`Sync`] can be shared by any number
/// of concurrent searches.
pub trait SpatialGraph {
	/// The coordinates of a Node.
	///
	/// Fails with [`UnknownNode`](crate::PlannerError::UnknownNode) if `id` is not in the Graph.
	fn position(&self, id: NodeID) -> Result<Point>;

	/// All Nodes directly connected to `id` by a road.
	///
	/// Fails with [`UnknownNode`](crate::PlannerError::UnknownNode) if `id` is not in the Graph.
	fn neighbors(&self, id: NodeID) -> Result<Box<dyn Iterator<Item = NodeID> + '_>>;

	/// `true` if `id` is a Node of the Graph.
	fn contains(&self, id: NodeID) -> bool {
		self.position(id).is_ok()
	}
}

impl<G: SpatialGraph + ?Sized> SpatialGraph for &G {
	fn position(&self, id: NodeID) -> Result<Point> {
		(**self).position(id)
	}
	fn neighbors(&self, id: NodeID) -> Result<Box<dyn Iterator<Item = NodeID> + '_>> {
		(**self).neighbors(id)
	}
	fn contains(&self, id: NodeID) -> bool {
		(**self).contains(id)
	}
}

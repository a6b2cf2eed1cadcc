use super::{Intersection, SpatialGraph};
use crate::{node_id::node_id_set_with_cap, NodeID, PlannerError, Point, Result};

/// An in-memory road network: Intersections with coordinates, connected by undirected roads.
///
/// NodeIDs index a dense table, so they should be kept reasonably compact (`0..n`).
/// [`add_intersection`](RoadMap::add_intersection) hands out the lowest free id and
/// [`from_parts`](RoadMap::from_parts) rejects ids that would leave the table mostly empty.
///
/// ## Examples
/// Basic usage:
/// ```
/// use route_planner::{RoadMap, SpatialGraph};
///
/// let mut map = RoadMap::new();
/// let a = map.add_intersection((0.0, 0.0));
/// let b = map.add_intersection((3.0, 4.0));
/// map.add_road(a, b).unwrap();
///
/// assert_eq!(map.position(b).unwrap(), (3.0, 4.0));
/// assert_eq!(map.neighbors(a).unwrap().collect::<Vec<_>>(), vec![b]);
/// assert_eq!(map.road_count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RoadMap {
	nodes: slab::Slab<Intersection>,
}

impl RoadMap {
	/// Creates an empty RoadMap
	pub fn new() -> RoadMap {
		RoadMap::default()
	}

	/// Creates an empty RoadMap with room for `capacity` Intersections
	pub fn with_capacity(capacity: usize) -> RoadMap {
		RoadMap {
			nodes: slab::Slab::with_capacity(capacity),
		}
	}

	/// Builds a RoadMap from a table of coordinates and a table of roads.
	///
	/// `roads` lists, for each Intersection, the Intersections it is connected to. Both
	/// directions of every road have to be listed, just like in an adjacency list.
	/// Intersections without any roads may be left out of `roads`.
	///
	/// Every id has to be below `max(1024, 4 * n)`, where `n` is the number of Intersections.
	///
	/// The result is checked with [`validate`](RoadMap::validate) before it is returned.
	///
	/// ## Examples
	/// ```
	/// use route_planner::{PlannerError, RoadMap};
	///
	/// let intersections = vec![(0, (0.0, 0.0)), (1, (1.0, 0.0)), (2, (1.0, 1.0))];
	///
	/// let map = RoadMap::from_parts(
	///     intersections.clone(),
	///     vec![(0, vec![1]), (1, vec![0, 2]), (2, vec![1])],
	/// );
	/// assert!(map.is_ok());
	///
	/// // the road 1 -> 2 has no way back
	/// let broken = RoadMap::from_parts(intersections, vec![(0, vec![1]), (1, vec![0, 2])]);
	/// assert!(matches!(broken, Err(PlannerError::InvalidGraph { .. })));
	/// ```
	pub fn from_parts<R>(
		intersections: impl IntoIterator<Item = (NodeID, Point)>,
		roads: impl IntoIterator<Item = (NodeID, R)>,
	) -> Result<RoadMap>
	where
		R: IntoIterator<Item = NodeID>,
	{
		let intersections: Vec<(NodeID, Point)> = intersections.into_iter().collect();
		let limit = id_limit(intersections.len());
		let mut seen = node_id_set_with_cap(intersections.len());
		for &(id, _) in &intersections {
			if id as usize >= limit {
				return Err(PlannerError::invalid_graph(
					id,
					format!("id too large for {} intersections", intersections.len()),
				));
			}
			if !seen.insert(id) {
				return Err(PlannerError::invalid_graph(id, "listed twice"));
			}
		}

		let mut nodes: slab::Slab<Intersection> = intersections
			.into_iter()
			.map(|(id, pos)| (id as usize, Intersection::new(pos)))
			.collect();

		for (id, targets) in roads {
			let node = nodes
				.get_mut(id as usize)
				.ok_or_else(|| PlannerError::invalid_graph(id, "roads listed without coordinates"))?;
			node.roads.extend(targets);
		}

		let map = RoadMap { nodes };
		map.validate()?;
		Ok(map)
	}

	/// the number of Intersections
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// `true` if there are no Intersections
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// the number of (undirected) roads
	pub fn road_count(&self) -> usize {
		self.nodes.iter().map(|(_, node)| node.roads.len()).sum::<usize>() / 2
	}

	/// Adds a new Intersection without any roads and returns its id
	pub fn add_intersection(&mut self, pos: Point) -> NodeID {
		self.nodes.insert(Intersection::new(pos)) as NodeID
	}

	/// Connects two Intersections with a road in both directions.
	///
	/// Adding a road that already exists does nothing.
	///
	/// ## Errors
	/// - [`UnknownNode`](PlannerError::UnknownNode) if either end is not in the map
	/// - [`InvalidGraph`](PlannerError::InvalidGraph) for a road from an Intersection to itself,
	///   or if either end has a coordinate that is not finite
	pub fn add_road(&mut self, a: NodeID, b: NodeID) -> Result<()> {
		let a_pos = self.intersection(a)?.pos;
		let b_pos = self.intersection(b)?.pos;
		if a == b {
			return Err(PlannerError::invalid_graph(a, "road leads back to itself"));
		}
		if !is_finite(a_pos) {
			return Err(PlannerError::invalid_graph(a, "coordinates are not finite"));
		}
		if !is_finite(b_pos) {
			return Err(PlannerError::invalid_graph(b, "coordinates are not finite"));
		}

		self.nodes[a as usize].roads.insert(b);
		self.nodes[b as usize].roads.insert(a);
		Ok(())
	}

	/// The Intersection with the given id, if there is one
	pub fn get(&self, id: NodeID) -> Option<&Intersection> {
		self.nodes.get(id as usize)
	}

	fn intersection(&self, id: NodeID) -> Result<&Intersection> {
		self.get(id).ok_or(PlannerError::UnknownNode(id))
	}

	/// Iterates over all Intersections together with their ids, in ascending id order
	pub fn iter(&self) -> impl Iterator<Item = (NodeID, &Intersection)> + '_ {
		self.nodes.iter().map(|(id, node)| (id as NodeID, node))
	}

	/// Checks the invariants every search relies on.
	///
	/// - every coordinate is finite
	/// - every road ends at an Intersection that exists
	/// - no road leads from an Intersection to itself
	/// - every road exists in both directions
	///
	/// Maps built only through [`add_intersection`](RoadMap::add_intersection) and
	/// [`add_road`](RoadMap::add_road) always pass.
	pub fn validate(&self) -> Result<()> {
		for (id, node) in self.iter() {
			if !is_finite(node.pos) {
				return Err(PlannerError::invalid_graph(id, "coordinates are not finite"));
			}
			for other_id in node.roads() {
				if other_id == id {
					return Err(PlannerError::invalid_graph(id, "road leads back to itself"));
				}
				let other = self.get(other_id).ok_or_else(|| {
					PlannerError::invalid_graph(id, format!("road to {} which has no coordinates", other_id))
				})?;
				if !other.has_road_to(id) {
					return Err(PlannerError::invalid_graph(
						id,
						format!("road to {} has no way back", other_id),
					));
				}
			}
		}
		Ok(())
	}
}

/// The smallest id `from_parts` refuses for `count` Intersections.
fn id_limit(count: usize) -> usize {
	count.saturating_mul(4).max(1024)
}

fn is_finite((x, y): Point) -> bool {
	x.is_finite() && y.is_finite()
}

impl SpatialGraph for RoadMap {
	fn position(&self, id: NodeID) -> Result<Point> {
		self.intersection(id).map(|node| node.pos)
	}
	fn neighbors(&self, id: NodeID) -> Result<Box<dyn Iterator<Item = NodeID> + '_>> {
		let node = self.intersection(id)?;
		Ok(Box::new(node.roads()))
	}
	fn contains(&self, id: NodeID) -> bool {
		self.nodes.contains(id as usize)
	}
}

use std::ops::Index;
impl Index<NodeID> for RoadMap {
	type Output = Intersection;
	#[track_caller]
	fn index(&self, index: NodeID) -> &Intersection {
		&self.nodes[index as usize]
	}
}

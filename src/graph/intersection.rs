use crate::{node_id::NodeIDSet, NodeID, Point};

/// A single Node of a [`RoadMap`](super::RoadMap): a coordinate and the roads leaving it.
#[derive(Clone, Debug)]
pub struct Intersection {
	pub(crate) pos: Point,
	pub(crate) roads: NodeIDSet,
}

impl Intersection {
	pub(crate) fn new(pos: Point) -> Intersection {
		Intersection {
			pos,
			roads: NodeIDSet::default(),
		}
	}

	/// the coordinates of the Intersection
	pub fn pos(&self) -> Point {
		self.pos
	}

	/// the Intersections directly connected to this one
	pub fn roads(&self) -> impl Iterator<Item = NodeID> + '_ {
		self.roads.iter().copied()
	}

	/// `true` if a road leads from here to `other`
	pub fn has_road_to(&self, other: NodeID) -> bool {
		self.roads.contains(&other)
	}
}

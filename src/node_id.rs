//! A Module with some utilities for working with NodeIDs

use crate::NodeID;
use std::hash::{BuildHasherDefault, Hasher};

/// A specialized [`HashMap`](hashbrown::HashMap) for NodeIDs with a faster Hasher
pub type NodeIDMap<V> = hashbrown::HashMap<NodeID, V, BuildNodeIDHasher>;
/// A specialized [`HashSet`](hashbrown::HashSet) for NodeIDs with a faster Hasher
pub type NodeIDSet = hashbrown::HashSet<NodeID, BuildNodeIDHasher>;

/// A [`BuildHasher`](std::hash::BuildHasher) specialized on NodeIDs
pub type BuildNodeIDHasher = BuildHasherDefault<NodeIDHasher>;

/// A [`Hasher`](Hasher) specialized on NodeIDs
///
/// NodeIDs are small, dense integers, so the id itself is already a good hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NodeIDHasher(u64);

impl Hasher for NodeIDHasher {
	/// panics, since only NodeIDs are supposed to be used
	fn write(&mut self, _: &[u8]) {
		unreachable!("This Hasher only works with NodeIDs")
	}
	/// Writes a single NodeID into this hasher.
	fn write_u32(&mut self, id: NodeID) {
		self.0 = id as u64
	}
	fn finish(&self) -> u64 {
		self.0
	}
}

/// create a new, empty [`NodeIDMap`]
pub fn node_id_map<V>() -> NodeIDMap<V> {
	NodeIDMap::default()
}
/// create a new, empty [`NodeIDSet`]
pub fn node_id_set() -> NodeIDSet {
	NodeIDSet::default()
}

/// create a new [`NodeIDMap`] with room for at least `capacity` entries
pub fn node_id_map_with_cap<V>(capacity: usize) -> NodeIDMap<V> {
	NodeIDMap::with_capacity_and_hasher(capacity, Default::default())
}
/// create a new [`NodeIDSet`] with room for at least `capacity` entries
pub fn node_id_set_with_cap(capacity: usize) -> NodeIDSet {
	NodeIDSet::with_capacity_and_hasher(capacity, Default::default())
}

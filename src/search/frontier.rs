//! The set of Nodes that were reached but not yet finalized.

use crate::{node_id::*, Cost, NodeID};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// The best known way to reach a Node: its Cost from the start and the Node before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Reached {
	pub cost: Cost,
	pub prev: NodeID,
}

/// What [`Frontier::offer`] did with a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Offer {
	/// the Node was not in the Frontier yet
	Inserted,
	/// the route is cheaper than the known one, which was discarded
	Replaced,
	/// the known route is at least as cheap, the offered one was discarded
	Dominated,
}

/// A heap entry: `(id, g, f)`.
///
/// Ordered so that [`BinaryHeap`] pops the lowest `f` first, and the lowest id among equal `f`.
#[derive(Clone, Copy, Debug)]
struct HeuristicElement(NodeID, Cost, Cost);

impl PartialEq for HeuristicElement {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}
impl Eq for HeuristicElement {}
impl PartialOrd for HeuristicElement {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for HeuristicElement {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.2.total_cmp(&self.2).then_with(|| rhs.0.cmp(&self.0))
	}
}

/// Frontier Store and Dominance Pruner in one.
///
/// `best` holds exactly one route per Node in the Frontier. The heap may hold older entries for
/// a Node whose route was replaced since; those are dropped when they come up in [`pop`](Frontier::pop).
#[derive(Debug)]
pub(crate) struct Frontier {
	heap: BinaryHeap<HeuristicElement>,
	best: NodeIDMap<Reached>,
	pruned: usize,
}

impl Frontier {
	pub fn with_capacity(capacity: usize) -> Frontier {
		Frontier {
			heap: BinaryHeap::with_capacity(capacity),
			best: node_id_map_with_cap(capacity),
			pruned: 0,
		}
	}

	/// the number of Nodes in the Frontier
	pub fn len(&self) -> usize {
		self.best.len()
	}

	pub fn is_empty(&self) -> bool {
		self.best.is_empty()
	}

	#[cfg(test)]
	pub fn get(&self, id: NodeID) -> Option<&Reached> {
		self.best.get(&id)
	}

	/// the number of routes discarded because a cheaper one was known
	pub fn pruned(&self) -> usize {
		self.pruned
	}

	/// Offers a route to `id` that costs `cost` and arrives from `prev`.
	///
	/// `heuristic` is the estimated remaining Cost from `id` to the goal.
	/// Of two routes to the same Node only the strictly cheaper one survives; on equal Cost the
	/// route that was there first is kept.
	pub fn offer(&mut self, id: NodeID, cost: Cost, prev: NodeID, heuristic: Cost) -> Offer {
		let offer = match self.best.get_mut(&id) {
			Some(known) if known.cost <= cost => {
				self.pruned += 1;
				return Offer::Dominated;
			}
			Some(known) => {
				*known = Reached { cost, prev };
				self.pruned += 1;
				Offer::Replaced
			}
			None => {
				self.best.insert(id, Reached { cost, prev });
				Offer::Inserted
			}
		};
		self.heap.push(HeuristicElement(id, cost, cost + heuristic));
		offer
	}

	/// Removes and returns the Node with the lowest `f = g + h`, lowest id first on ties.
	pub fn pop(&mut self) -> Option<(NodeID, Reached)> {
		while let Some(HeuristicElement(id, cost, _)) = self.heap.pop() {
			match self.best.get(&id) {
				Some(reached) if reached.cost.to_bits() == cost.to_bits() => {
					let reached = *reached;
					self.best.remove(&id);
					return Some((id, reached));
				}
				// replaced by a cheaper route, or already popped
				_ => continue,
			}
		}
		None
	}
}

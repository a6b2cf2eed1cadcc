use crate::NodeID;

/// Everything that can go wrong while building a [`RoadMap`](crate::RoadMap) or searching one.
///
/// None of these are fatal: every public function returns them through [`Result`](crate::Result)
/// and never hands out a partial Path.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
	/// The NodeID is not part of the Graph.
	///
	/// For searches this is checked for `start` and `goal` before any work is done.
	#[error("unknown node {0}")]
	UnknownNode(NodeID),

	/// The Graph breaks one of its invariants (asymmetric roads, missing coordinates, ...).
	#[error("invalid graph at node {id}: {reason}")]
	InvalidGraph {
		/// the Node where the problem was found
		id: NodeID,
		/// what exactly is wrong
		reason: String,
	},

	/// Two consecutive Nodes of a Path are not connected by a road.
	#[error("no road between {from} and {to}")]
	InvalidPath {
		/// the earlier Node in the Path
		from: NodeID,
		/// the Node that should follow it
		to: NodeID,
	},

	/// Every Node reachable from `start` was explored without finding `goal`.
	#[error("no path from {start} to {goal}")]
	NoPathFound {
		/// the start of the search
		start: NodeID,
		/// the unreachable goal
		goal: NodeID,
	},

	/// The search hit the expansion cap or time limit of its [`SearchConfig`](crate::SearchConfig).
	#[error("search aborted after expanding {expanded} nodes")]
	SearchAborted {
		/// how many Nodes were finalized before giving up
		expanded: usize,
	},
}

impl PlannerError {
	pub(crate) fn invalid_graph(id: NodeID, reason: impl Into<String>) -> PlannerError {
		PlannerError::InvalidGraph {
			id,
			reason: reason.into(),
		}
	}
}

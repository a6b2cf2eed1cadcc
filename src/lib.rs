#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find optimal routes on road networks.
//!
//! ## Introduction
//! A road network is a Graph of Intersections with 2-D coordinates, connected by roads. The
//! length of a road is never stored anywhere: it is always the straight-line (Euclidean)
//! distance between the two Intersections it connects. This keeps coordinates and Costs
//! consistent and gives A* a perfect heuristic to work with: the straight-line distance to
//! the goal never overestimates the remaining Cost and never decreases by more than the length
//! of a road. Every Path returned by this crate is therefore **optimal**.
//!
//! The search itself is a textbook A* with two additions:
//! - Ties are broken deterministically. When two Intersections look equally promising, the one
//!   with the lower [`NodeID`] is explored first, so the same query always yields the same Path.
//! - Searches can be bounded by a [`SearchConfig`], which matters when the goal turns out to be
//!   unreachable in a large network.
//!
//! ## Examples
//! Creating a map:
//! ```
//! use route_planner::prelude::*;
//!
//! //  3 ----- 2
//! //  |       |
//! //  |       |
//! //  0 ----- 1
//! let mut map = RoadMap::new();
//! let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
//! let ids: Vec<NodeID> = corners.iter().map(|&pos| map.add_intersection(pos)).collect();
//!
//! for i in 0..4 {
//!     map.add_road(ids[i], ids[(i + 1) % 4]).unwrap();
//! }
//! ```
//! The map does not have to be a [`RoadMap`]. Anything implementing [`SpatialGraph`] can be
//! searched, as long as it can tell where an Intersection is and which Intersections it is
//! connected to.
//!
//! ### Pathfinding
//! Finding the Path between two Intersections:
//! ```
//! # use route_planner::prelude::*;
//! #
//! # let mut map = RoadMap::new();
//! # let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
//! # let ids: Vec<NodeID> = corners.iter().map(|&pos| map.add_intersection(pos)).collect();
//! #
//! # for i in 0..4 {
//! #     map.add_road(ids[i], ids[(i + 1) % 4]).unwrap();
//! # }
//! #
//! let path = find_shortest_path(&map, ids[0], ids[2]).unwrap();
//!
//! // there is no diagonal road, so both ways around cost 2.
//! // 1 < 3, so the way over 1 is picked
//! assert_eq!(path, vec![ids[0], ids[1], ids[2]]);
//! assert_eq!(path.cost(), 2.0);
//! ```
//!
//! All failures are reported as a [`PlannerError`]:
//! ```
//! # use route_planner::prelude::*;
//! #
//! # let mut map = RoadMap::new();
//! # let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
//! # let ids: Vec<NodeID> = corners.iter().map(|&pos| map.add_intersection(pos)).collect();
//! #
//! # for i in 0..4 {
//! #     map.add_road(ids[i], ids[(i + 1) % 4]).unwrap();
//! # }
//! #
//! let island = map.add_intersection((5.0, 5.0));
//!
//! assert_eq!(
//!     find_shortest_path(&map, ids[0], island),
//!     Err(PlannerError::NoPathFound { start: ids[0], goal: island }),
//! );
//! assert_eq!(
//!     find_shortest_path(&map, ids[0], 99),
//!     Err(PlannerError::UnknownNode(99)),
//! );
//! ```
//!
//! ### Configuration
//! [`find_shortest_path_with`] takes a [`SearchConfig`] that can cap the number of explored
//! Intersections or the time spent on a single search:
//! ```
//! # use route_planner::prelude::*;
//! #
//! # let mut map = RoadMap::new();
//! # let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
//! # let ids: Vec<NodeID> = corners.iter().map(|&pos| map.add_intersection(pos)).collect();
//! #
//! # for i in 0..4 {
//! #     map.add_road(ids[i], ids[(i + 1) % 4]).unwrap();
//! # }
//! #
//! let result = find_shortest_path_with(
//!     &map,
//!     ids[0],
//!     ids[2],
//!     &SearchConfig::with_max_expansions(0),
//! );
//!
//! assert_eq!(result, Err(PlannerError::SearchAborted { expanded: 0 }));
//! ```
//!
//! ## Features
//! - `parallel` (default): [`find_shortest_paths`] spreads its queries over a `rayon` thread pool
//! - `log`: search statistics on the `debug` level and every expansion on the `trace` level

/// The Type used to reference an Intersection in the Graph
pub type NodeID = u32;

/// A shorthand for coordinates in the plane
pub type Point = (f64, f64);

/// A shorthand for results of this crate
pub type Result<T> = std::result::Result<T, PlannerError>;

#[macro_use]
mod logging;

mod error;
pub use self::error::PlannerError;

pub mod node_id;

mod path;
pub use self::path::{Cost, Path};

pub mod graph;
pub use self::graph::{Intersection, RoadMap, SpatialGraph};

pub mod search;
pub use self::search::{
	find_shortest_path, find_shortest_path_with, find_shortest_paths, search_with_stats,
	SearchConfig, SearchStats,
};

/// The prelude for this crate.
pub mod prelude {
	pub use crate::{
		find_shortest_path, find_shortest_path_with, find_shortest_paths, NodeID, Path,
		PlannerError, Point, RoadMap, SearchConfig, SpatialGraph,
	};
}

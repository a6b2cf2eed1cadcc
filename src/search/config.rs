use std::time::Duration;

/// Options for bounding a single search.
///
/// On a connected Graph the search always ends on its own, but a goal that sits in a different
/// component than the start forces it to explore everything reachable first. These bounds put a
/// limit on that. Exceeding either one fails the search with
/// [`SearchAborted`](crate::PlannerError::SearchAborted).
///
/// Default options:
/// ```
/// # use route_planner::SearchConfig;
/// assert_eq!(
/// 	SearchConfig {
/// 		max_expansions: None,
/// 		time_limit: None,
/// 		size_hint: 64,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// The maximum number of Nodes that may be finalized before giving up (defaults to `None`)
	pub max_expansions: Option<usize>,
	/// The maximum wall-clock time of a single search (defaults to `None`)
	pub time_limit: Option<Duration>,
	/// The number of Nodes the search expects to touch, used to pre-allocate (defaults to `64`).
	/// Hints above `65536` are treated as `65536`.
	pub size_hint: usize,
}

impl SearchConfig {
	/// no bounds at all, same as the default
	pub const UNBOUNDED: SearchConfig = SearchConfig {
		max_expansions: None,
		time_limit: None,
		size_hint: 64,
	};
	/// an example SearchConfig that gives up on pathological queries
	///
	/// Values:
	/// ```
	/// # use route_planner::SearchConfig;
	/// # use std::time::Duration;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		max_expansions: Some(1_000_000),
	/// 		time_limit: Some(Duration::from_secs(1)),
	/// 		size_hint: 1024,
	/// 	},
	/// 	SearchConfig::BOUNDED
	/// );
	/// ```
	pub const BOUNDED: SearchConfig = SearchConfig {
		max_expansions: Some(1_000_000),
		time_limit: Some(Duration::from_secs(1)),
		size_hint: 1024,
	};

	/// the default config, but with at most `max_expansions` Nodes finalized per search
	pub fn with_max_expansions(max_expansions: usize) -> SearchConfig {
		SearchConfig {
			max_expansions: Some(max_expansions),
			..Default::default()
		}
	}

	/// the default config, but with every search limited to `time_limit`
	pub fn with_time_limit(time_limit: Duration) -> SearchConfig {
		SearchConfig {
			time_limit: Some(time_limit),
			..Default::default()
		}
	}
}

/// the most Nodes a search pre-allocates room for
const MAX_PREALLOCATION: usize = 1 << 16;

impl SearchConfig {
	pub(crate) fn capacity(&self) -> usize {
		self.size_hint.min(MAX_PREALLOCATION)
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig::UNBOUNDED
	}
}

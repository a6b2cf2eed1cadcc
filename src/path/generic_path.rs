use super::Cost;

/// A sequence of Nodes together with the total Cost of travelling along them.
///
/// Paths returned by the search always start at the `start` and end at the `goal` of the query,
/// and every two consecutive Nodes are connected by a road.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
	path: Vec<P>,
	cost: Cost,
}

impl<P> Path<P> {
	/// creates a new Path with the given sequence of Nodes and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use route_planner::Path;
	/// let path = Path::new(vec![0, 3, 7], 4.5);
	///
	/// assert_eq!(path, vec![0, 3, 7]);
	/// assert_eq!(path.cost(), 4.5);
	/// ```
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path { path, cost }
	}

	/// the total Cost of the Path
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// the number of Nodes in the Path, including start and goal
	pub fn len(&self) -> usize {
		self.path.len()
	}

	/// `true` if the Path contains no Nodes at all
	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// the first Node of the Path
	pub fn first(&self) -> Option<&P> {
		self.path.first()
	}

	/// the last Node of the Path
	pub fn last(&self) -> Option<&P> {
		self.path.last()
	}

	/// Returns an Iterator over the Nodes of the Path
	pub fn iter(&self) -> std::slice::Iter<'_, P> {
		self.path.iter()
	}

	/// Consumes the Path, returning only the Nodes
	pub fn into_nodes(self) -> Vec<P> {
		self.path
	}
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.path[index]
	}
}

impl<P> Deref for Path<P> {
	type Target = [P];
	fn deref(&self) -> &[P] {
		&self.path
	}
}

impl<'a, P> IntoIterator for &'a Path<P> {
	type Item = &'a P;
	type IntoIter = std::slice::Iter<'a, P>;
	fn into_iter(self) -> Self::IntoIter {
		self.path.iter()
	}
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
	fn eq(&self, rhs: &Vec<P>) -> bool {
		self.path == *rhs
	}
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
	fn eq(&self, rhs: &&'a [P]) -> bool {
		self.path.as_slice() == *rhs
	}
}

use std::cmp::Ordering;

/// Paths are ordered by Cost first and by their Nodes among equal Costs.
impl<P: PartialOrd> PartialOrd for Path<P> {
	fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
		match self.cost.total_cmp(&other.cost) {
			Ordering::Equal => self.path.partial_cmp(&other.path),
			ord => Some(ord),
		}
	}
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {}", p)?;
			}
			Ok(())
		}
	}
}

use nanorand::{Rng, WyRand};
use route_planner::{
	prelude::*,
	search::{distance, estimate, path_cost},
};

fn init() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a random road network with `size` Intersections on a 100x100 square.
///
/// Every Intersection gets up to `roads` roads to random others, so some may end up isolated.
fn random_map(seed: u64, size: usize, roads: usize) -> RoadMap {
	let mut rng = WyRand::new_seed(seed);
	let mut map = RoadMap::with_capacity(size);
	for _ in 0..size {
		let x = rng.generate_range(0..10_000u32) as f64 / 100.0;
		let y = rng.generate_range(0..10_000u32) as f64 / 100.0;
		map.add_intersection((x, y));
	}
	for id in 0..size as NodeID {
		for _ in 0..rng.generate_range(0..=roads) {
			let other = rng.generate_range(0..size as NodeID);
			if other != id {
				map.add_road(id, other).unwrap();
			}
		}
	}
	map
}

/// Exhaustive Dijkstra over every Intersection, to compare against.
fn true_distance(map: &RoadMap, start: NodeID, goal: NodeID) -> Option<f64> {
	let n = map.len();
	let mut dist = vec![f64::INFINITY; n];
	let mut done = vec![false; n];
	dist[start as usize] = 0.0;

	loop {
		let next = (0..n)
			.filter(|&i| !done[i] && dist[i].is_finite())
			.min_by(|&a, &b| dist[a].total_cmp(&dist[b]));
		let current = match next {
			Some(current) => current,
			None => return None,
		};
		if current == goal as usize {
			return Some(dist[current]);
		}
		done[current] = true;

		let pos = map.position(current as NodeID).unwrap();
		for other in map.neighbors(current as NodeID).unwrap() {
			let cost = dist[current] + distance(pos, map.position(other).unwrap());
			if cost < dist[other as usize] {
				dist[other as usize] = cost;
			}
		}
	}
}

fn assert_close(a: f64, b: f64) {
	assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0), "{} != {}", a, b);
}

#[test]
fn square() {
	init();
	let mut map = RoadMap::new();
	let a = map.add_intersection((0.0, 0.0));
	let b = map.add_intersection((1.0, 0.0));
	let c = map.add_intersection((1.0, 1.0));
	let d = map.add_intersection((0.0, 1.0));
	for (x, y) in [(a, b), (b, c), (c, d), (d, a)] {
		map.add_road(x, y).unwrap();
	}

	let path = find_shortest_path(&map, a, c).unwrap();
	assert_eq!(path, vec![a, b, c]);
	assert_eq!(path.cost(), 2.0);

	let path = find_shortest_path(&map, c, a).unwrap();
	assert_eq!(path.len(), 3);
	assert_eq!(path.cost(), 2.0);
}

#[test]
fn start_is_goal() {
	init();
	let map = random_map(1, 20, 3);
	for id in 0..20 {
		let path = find_shortest_path(&map, id, id).unwrap();
		assert_eq!(path, vec![id]);
		assert_eq!(path.cost(), 0.0);
	}
}

#[test]
fn matches_dijkstra() {
	init();
	for seed in 0..8 {
		let map = random_map(seed, 60, 3);
		assert!(map.validate().is_ok());

		let mut rng = WyRand::new_seed(seed + 100);
		for _ in 0..40 {
			let start = rng.generate_range(0..60u32);
			let goal = rng.generate_range(0..60u32);

			match (find_shortest_path(&map, start, goal), true_distance(&map, start, goal)) {
				(Ok(path), Some(best)) => {
					assert_eq!(path.first(), Some(&start));
					assert_eq!(path.last(), Some(&goal));
					assert_eq!(path_cost(&map, &path), Ok(path.cost()));
					assert_close(path.cost(), best);
				}
				(Err(err), None) => {
					assert_eq!(err, PlannerError::NoPathFound { start, goal });
				}
				(result, best) => panic!(
					"{} -> {}: search gave {:?}, dijkstra gave {:?}",
					start, goal, result, best
				),
			}
		}
	}
}

#[test]
fn heuristic_is_admissible() {
	init();
	let map = random_map(42, 40, 4);
	for goal in 0..40 {
		for id in 0..40 {
			if let Some(best) = true_distance(&map, id, goal) {
				assert!(estimate(&map, id, goal).unwrap() <= best + 1e-9);
			}
		}
	}
}

#[test]
fn repeated_searches_agree() {
	init();
	let map = random_map(7, 80, 3);
	for (start, goal) in [(0, 79), (13, 2), (40, 41), (5, 66)] {
		let first = find_shortest_path(&map, start, goal);
		for _ in 0..5 {
			assert_eq!(find_shortest_path(&map, start, goal), first);
		}
	}
}

#[test]
fn batch_matches_single_queries() {
	init();
	let map = random_map(3, 100, 3);
	let queries: Vec<(NodeID, NodeID)> = (0..100).map(|i| (i, (i * 37 + 11) % 100)).collect();

	let results = find_shortest_paths(&map, &queries, &SearchConfig::default());

	assert_eq!(results.len(), queries.len());
	for (&(start, goal), result) in queries.iter().zip(results) {
		assert_eq!(result, find_shortest_path(&map, start, goal));
	}
}

#[test]
fn bounded_search_gives_up() {
	init();
	// a long corridor to an unreachable goal
	let mut map = RoadMap::new();
	let mut prev = map.add_intersection((0.0, 0.0));
	for x in 1..500 {
		let next = map.add_intersection((x as f64, 0.0));
		map.add_road(prev, next).unwrap();
		prev = next;
	}
	let island = map.add_intersection((-1.0, 0.0));

	let config = SearchConfig::with_max_expansions(100);
	assert_eq!(
		find_shortest_path_with(&map, 0, island, &config),
		Err(PlannerError::SearchAborted { expanded: 100 })
	);

	// unbounded, it walks the whole corridor and reports the truth
	assert_eq!(
		find_shortest_path(&map, 0, island),
		Err(PlannerError::NoPathFound { start: 0, goal: island })
	);

	// the goal is found well within the cap
	let path = find_shortest_path_with(&map, 0, 50, &config).unwrap();
	assert_eq!(path.len(), 51);
	assert_eq!(path.cost(), 50.0);
}

/// A Graph that is never stored: an endless lattice with unit roads between
/// horizontally or vertically adjacent points, limited to `size x size`.
#[derive(Debug)]
struct Lattice {
	size: NodeID,
}

impl SpatialGraph for Lattice {
	fn position(&self, id: NodeID) -> route_planner::Result<Point> {
		if id >= self.size * self.size {
			return Err(PlannerError::UnknownNode(id));
		}
		Ok(((id % self.size) as f64, (id / self.size) as f64))
	}
	fn neighbors(
		&self,
		id: NodeID,
	) -> route_planner::Result<Box<dyn Iterator<Item = NodeID> + '_>> {
		self.position(id)?;
		let size = self.size as i64;
		let (x, y) = (id as i64 % size, id as i64 / size);
		let iter = [(0i64, -1i64), (1, 0), (0, 1), (-1, 0)]
			.into_iter()
			.map(move |(dx, dy)| (x + dx, y + dy))
			.filter(move |&(x, y)| x >= 0 && y >= 0 && x < size && y < size)
			.map(move |(x, y)| (x + y * size) as NodeID);
		Ok(Box::new(iter))
	}
}

#[test]
fn custom_graph() {
	init();
	let lattice = Lattice { size: 5 };

	let path = find_shortest_path(&lattice, 0, 24).unwrap();
	assert_eq!(path.cost(), 8.0);
	assert_eq!(path.len(), 9);
	assert_eq!(path_cost(&lattice, &path), Ok(8.0));

	// all monotone paths cost the same, but only one is ever returned
	for _ in 0..3 {
		assert_eq!(find_shortest_path(&lattice, 0, 24).unwrap(), path);
	}

	assert_eq!(
		find_shortest_path(&lattice, 0, 25),
		Err(PlannerError::UnknownNode(25))
	);
}

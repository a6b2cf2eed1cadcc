extern crate route_planner;
use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use nanorand::{Rng, WyRand};
use route_planner::prelude::*;

/// A grid of Intersections with roads to the 4 direct neighbors, each Intersection jittered a
/// little so that Paths have distinct Costs.
fn jittered_grid(size: usize, seed: u64) -> RoadMap {
    let mut rng = WyRand::new_seed(seed);
    let mut map = RoadMap::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            let dx = rng.generate_range(0..400u32) as f64 / 1000.0;
            let dy = rng.generate_range(0..400u32) as f64 / 1000.0;
            map.add_intersection((x as f64 + dx, y as f64 + dy));
        }
    }
    let id = |x: usize, y: usize| (x + y * size) as NodeID;
    for y in 0..size {
        for x in 0..size {
            if x + 1 < size {
                map.add_road(id(x, y), id(x + 1, y)).unwrap();
            }
            if y + 1 < size {
                map.add_road(id(x, y), id(x, y + 1)).unwrap();
            }
        }
    }
    map
}

/// A grid where a random share of the roads is missing, which forces detours.
fn sparse_grid(size: usize, seed: u64) -> RoadMap {
    let mut rng = WyRand::new_seed(seed);
    let mut map = RoadMap::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            map.add_intersection((x as f64, y as f64));
        }
    }
    let id = |x: usize, y: usize| (x + y * size) as NodeID;
    for y in 0..size {
        for x in 0..size {
            if x + 1 < size && rng.generate_range(0..10u32) < 7 {
                map.add_road(id(x, y), id(x + 1, y)).unwrap();
            }
            if y + 1 < size && rng.generate_range(0..10u32) < 7 {
                map.add_road(id(x, y), id(x, y + 1)).unwrap();
            }
        }
    }
    map
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "debug") // Change this from debug to trace to log every expansion.
        .write_style_or("MY_LOG_STYLE", "always");

    env_logger::init_from_env(env);
    let _ = env_logger::builder().is_test(true).try_init();
}

fn bench_single_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Path");

    for size in [32, 128, 512] {
        let map = jittered_grid(size, 4);
        let goal = (size * size - 1) as NodeID;

        let id = format!("Corner to corner, Jittered Grid, Map Size: ({}, {})", size, size);
        group.bench_function(&id, |b| b.iter(|| find_shortest_path(&map, 0, goal)));
    }

    let size = 256;
    let map = sparse_grid(size, 4);
    let goal = (size * size - 1) as NodeID;
    let id = format!("Corner to corner, Sparse Grid, Map Size: ({}, {})", size, size);
    group.bench_function(&id, |b| b.iter(|| find_shortest_path(&map, 0, goal)));
}

fn bench_unreachable(c: &mut Criterion) {
    let mut group = c.benchmark_group("Unreachable Goal");
    group.sample_size(20);

    let size = 256;
    let mut map = jittered_grid(size, 4);
    let island = map.add_intersection((-10.0, -10.0));

    let id = format!("Unbounded, Map Size: ({}, {})", size, size);
    group.bench_function(&id, |b| b.iter(|| find_shortest_path(&map, 0, island)));

    let config = SearchConfig::with_max_expansions(1000);
    let id = format!("Max 1000 expansions, Map Size: ({}, {})", size, size);
    group.bench_function(&id, |b| {
        b.iter(|| find_shortest_path_with(&map, 0, island, &config))
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch");
    group.sample_size(10);

    let size = 256;
    let map = jittered_grid(size, 4);
    let mut rng = WyRand::new_seed(7);
    let nodes = (size * size) as NodeID;
    let queries: Vec<(NodeID, NodeID)> = (0..256)
        .map(|_| (rng.generate_range(0..nodes), rng.generate_range(0..nodes)))
        .collect();

    #[cfg(feature = "parallel")]
    let id = format!("256 random queries, Parallel, Map Size: ({}, {})", size, size);
    #[cfg(not(feature = "parallel"))]
    let id = format!("256 random queries, Single Threaded, Map Size: ({}, {})", size, size);

    group.bench_function(&id, |b| {
        b.iter(|| find_shortest_paths(&map, &queries, &SearchConfig::default()))
    });
}

criterion_group!(benches, bench_single_path, bench_unreachable, bench_batch);
criterion_main!(benches);

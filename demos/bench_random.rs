//! Times route finding on random 50×50 walled maps.
//!
//! Run: cargo run --release --bin bench-random [-- <seed>] [--diagonal]

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tilewalk_demos::{random_endpoints, random_walled_map};
use tilewalk_paths::find_path;

const SIZE: i32 = 50;
const DENSITY: f64 = 0.1;
const MARGIN: i32 = 5;
const RUNS: u32 = 10;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let diagonal = args.iter().any(|a| a == "--diagonal");
    let seed = args
        .iter()
        .find_map(|a| a.parse::<u64>().ok())
        .unwrap_or(42);

    let mut rng = StdRng::seed_from_u64(seed);
    let map = random_walled_map(&mut rng, SIZE, SIZE, DENSITY);
    println!("map {SIZE}x{SIZE}, seed {seed}, diagonal: {diagonal}");

    let mut total = Duration::ZERO;
    for i in 1..=RUNS {
        let Some((from, to)) = random_endpoints(&mut rng, &map, MARGIN) else {
            eprintln!("map has fewer than two walkable interior cells");
            std::process::exit(1);
        };

        let t0 = Instant::now();
        let result = find_path(from, to, &map, diagonal);
        let elapsed = t0.elapsed();
        total += elapsed;

        println!("run {i}: {from} -> {to}");
        match result {
            Ok(path) => println!(
                "  found, {} cells, {} expanded, {:.3} ms",
                path.len(),
                path.expanded(),
                elapsed.as_secs_f64() * 1e3
            ),
            Err(e) => println!("  {e}, {:.3} ms", elapsed.as_secs_f64() * 1e3),
        }
    }
    println!(
        "\nmean: {:.3} ms",
        total.as_secs_f64() * 1e3 / f64::from(RUNS)
    );
}

//! Runs the sample route-finding scenarios and prints each map with its
//! path.
//!
//! Run: cargo run --bin scenarios [-- --diagonal] [--plain]

use tilewalk_core::{Point, TileGrid};
use tilewalk_demos::{describe, impossible_map, mini_town, render_map, render_map_colored, simple_map};
use tilewalk_paths::find_path;

struct Scenario {
    title: &'static str,
    map: TileGrid,
    from: Point,
    to: Point,
}

fn scenarios() -> Vec<Scenario> {
    let p = Point::new;
    vec![
        Scenario { title: "straight line", map: simple_map(), from: p(0, 0), to: p(4, 0) },
        Scenario { title: "around a wall", map: simple_map(), from: p(0, 0), to: p(2, 2) },
        Scenario { title: "across several walls", map: simple_map(), from: p(0, 0), to: p(4, 4) },
        Scenario { title: "walled-in goal", map: impossible_map(), from: p(0, 0), to: p(2, 2) },
        Scenario { title: "same start and goal", map: simple_map(), from: p(2, 2), to: p(2, 2) },
        Scenario { title: "outdoors to indoors", map: mini_town(), from: p(0, 0), to: p(3, 3) },
        Scenario { title: "building to building", map: mini_town(), from: p(3, 3), to: p(5, 8) },
        Scenario { title: "long distance", map: mini_town(), from: p(2, 2), to: p(9, 9) },
    ]
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let diagonal = args.iter().any(|a| a == "--diagonal");
    let plain = args.iter().any(|a| a == "--plain");
    let render = if plain { render_map } else { render_map_colored };

    println!(
        "Route finding, {} movement\n",
        if diagonal { "8-directional" } else { "4-directional" }
    );
    for s in scenarios() {
        let result = find_path(s.from, s.to, &s.map, diagonal);
        println!("{} {} -> {}: {}", s.title, s.from, s.to, describe(&result));
        print!("{}", render(&s.map, result.as_ref().ok()));
        println!();
    }
}

//! downtown — end-to-end demo for the wayfind routing toolkit.
//!
//! Ingests a synthetic attributed graph description, loads a signal-delay
//! table from an embedded CSV, snaps coordinate queries to graph nodes, and
//! contrasts the random-sampling baseline against the exact engine under
//! both cost models.

mod network;

use std::io::Cursor;

use anyhow::Result;

use wayfind_core::{GeoPoint, SampleRng};
use wayfind_route::{
    AttrNames, DistanceCost, QueryPoint, TravelTimeCost, dash_joined, from_source,
    load_delays_reader, resolve, sample_route, shortest_path,
};

use network::downtown_source;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const TRIALS: u32 = 2_000;
const MAX_STEPS: u32 = 1_000;

// Signal waits: 12 s at the square intersection, plus a longer wait for the
// specific left-turn movement from market onto the square.
const DELAY_CSV: &str = "\
from,to,delay_secs\n\
square,,12\n\
market,square,25\n\
";

fn main() -> Result<()> {
    let graph = from_source(&downtown_source(), &AttrNames::default())?;
    let delays = load_delays_reader(Cursor::new(DELAY_CSV), &graph)?;
    println!(
        "downtown graph: {} nodes, {} directed edges",
        graph.node_count(),
        graph.edge_count()
    );

    // Coordinate queries, snapped to the nearest node within 20 m.
    let start = resolve(&graph, &QueryPoint::Coord(GeoPoint::new(30.6930, -88.0430)))?;
    let goal = resolve(&graph, &QueryPoint::Coord(GeoPoint::new(30.6880, -88.0370)))?;
    println!("query: {} -> {}", graph.node_id(start), graph.node_id(goal));

    // Random-sampling baseline.
    let mut rng = SampleRng::new(SEED);
    match sample_route(&graph, start, goal, TRIALS, MAX_STEPS, &mut rng) {
        Some(hit) => {
            println!("[sampling] path distance (m): {:.1}", hit.length_m);
            println!("[sampling] route: {}", dash_joined(&graph, &hit.nodes));
        }
        None => println!("[sampling] no path found within {TRIALS}x{MAX_STEPS} budget"),
    }

    // Exact engine, distance only.
    match shortest_path(&graph, &DistanceCost, start, goal) {
        Some(route) => {
            println!("[dijkstra] shortest distance (m): {:.1}", route.total_cost);
            println!("[dijkstra] route: {}", dash_joined(&graph, &route.nodes));
        }
        None => println!("[dijkstra] no path"),
    }

    // Exact engine, travel time with signal delays.
    match shortest_path(&graph, &TravelTimeCost::new(&delays), start, goal) {
        Some(route) => {
            println!("[dijkstra] travel time incl. signals (s): {:.1}", route.total_cost);
            println!("[dijkstra] route: {}", dash_joined(&graph, &route.nodes));
        }
        None => println!("[dijkstra] no path"),
    }

    Ok(())
}

//! Randomized path sampling — the comparison baseline.
//!
//! Bounded uniform random walks from the start node.  This is deliberately
//! not a shortest-path algorithm: its contract is "a best-effort path found
//! within a fixed trial/step budget", used to contrast against the exact
//! engine's output.  Walks may revisit nodes; the accepted walk is returned
//! as it was taken.

use wayfind_core::{NodeId, SampleRng};

use crate::network::RoadGraph;

/// A successful sampled walk: the node sequence from start to goal and its
/// total physical length in metres.
#[derive(Debug, Clone)]
pub struct SampledRoute {
    pub nodes: Vec<NodeId>,
    pub length_m: f64,
}

/// Run `trials` random walks of at most `max_steps` edges each and keep the
/// best walk that reached `to`: fewest nodes first, total length as the
/// tiebreaker.
///
/// Returns `None` when no trial reaches the goal within its step budget —
/// including always when `trials` or `max_steps` is 0.
pub fn sample_route(
    graph: &RoadGraph,
    from: NodeId,
    to: NodeId,
    trials: u32,
    max_steps: u32,
    rng: &mut SampleRng,
) -> Option<SampledRoute> {
    if trials == 0 || max_steps == 0 {
        return None;
    }

    let mut best: Option<SampledRoute> = None;

    for _ in 0..trials {
        let mut nodes = vec![from];
        let mut length_m = 0.0;
        let mut cur = from;

        for _ in 0..max_steps {
            if cur == to {
                break;
            }
            let degree = graph.out_degree(cur);
            if degree == 0 {
                break; // dead end, trial over
            }

            let edge = graph.nth_out_edge(cur, rng.gen_range(0..degree));
            length_m += graph.edge_length_m[edge.index()];
            cur = graph.edge_to[edge.index()];
            nodes.push(cur);
        }

        if cur != to {
            continue;
        }

        let better = match &best {
            None => true,
            Some(b) => {
                nodes.len() < b.nodes.len()
                    || (nodes.len() == b.nodes.len() && length_m < b.length_m)
            }
        };
        if better {
            best = Some(SampledRoute { nodes, length_m });
        }
    }

    best
}

//! Synthetic downtown graph description.
//!
//! An 8-node grid expressed as an attributed GraphML-style source, the same
//! shape an external markup parser would hand over: key definitions first,
//! then node and edge elements with raw string data entries.  A couple of
//! edges omit their length on purpose so ingestion derives it from the
//! endpoint coordinates, and one riverside segment is one-way.

use wayfind_route::source::{EdgeElement, GraphSource, KeyDef, NodeElement};

pub fn downtown_source() -> GraphSource {
    let mut src = GraphSource::new();

    src.keys = vec![
        KeyDef::new("k0", "lat"),
        KeyDef::new("k1", "lon"),
        KeyDef::new("k2", "length"),
        KeyDef::new("k3", "name"),
        KeyDef::new("k4", "oneway"),
    ];

    for (id, lat, lon) in [
        ("plaza", "30.6930", "-88.0430"),
        ("market", "30.6930", "-88.0400"),
        ("station", "30.6930", "-88.0370"),
        ("library", "30.6905", "-88.0430"),
        ("square", "30.6905", "-88.0400"),
        ("museum", "30.6905", "-88.0370"),
        ("harbor", "30.6880", "-88.0400"),
        ("terminal", "30.6880", "-88.0370"),
    ] {
        src.nodes.push(NodeElement::new(id).with_data("k0", lat).with_data("k1", lon));
    }

    let road = |s: &str, t: &str, len: &str, name: &str| {
        EdgeElement::new(s, t).with_data("k2", len).with_data("k3", name)
    };

    src.edges = vec![
        road("plaza", "market", "290.0", "Dauphin St"),
        road("market", "station", "290.0", "Dauphin St"),
        road("library", "square", "290.0", "Conti St"),
        road("square", "museum", "290.0", "Conti St"),
        road("plaza", "library", "280.0", "Jackson St"),
        road("market", "square", "280.0", "Joachim St"),
        road("station", "museum", "280.0", "Royal St"),
        road("square", "harbor", "280.0", "Joachim St"),
        road("museum", "terminal", "280.0", "Royal St"),
        // No declared length: derived from the endpoint coordinates.
        EdgeElement::new("harbor", "terminal").with_data("k3", "Water St"),
        // One-way riverside shortcut.
        EdgeElement::new("station", "terminal")
            .with_data("k2", "590.0")
            .with_data("k3", "Riverside Expy")
            .with_data("k4", "yes"),
    ];

    src
}

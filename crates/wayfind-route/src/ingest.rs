//! Attributed-tree ingestion: [`GraphSource`] → [`RoadGraph`].
//!
//! # Attribute resolution
//!
//! Key definitions are read first, so data entries resolve to semantic
//! attribute names by lookup, never by position.  The names the builder
//! looks for are configurable via [`AttrNames`]; the defaults match the
//! OSMnx GraphML convention (`lat`/`lon`/`length`/`name`/`oneway`, with
//! `y`/`x` accepted as coordinate aliases).
//!
//! Some exported documents omit key definitions entirely.  For those, the
//! conventional key ids `d4` (lat), `d5` (lon), `d16` (length) and `d13`
//! (name) are accepted as a compatibility fallback — consulted only when a
//! data entry's key id has no definition at all.
//!
//! # Typed parsing
//!
//! Numeric attributes are parsed exactly once, here.  A value that is
//! present but unparsable is an error ([`RouteError::BadAttribute`]); a
//! value that is absent falls back to a documented default (coordinate 0.0,
//! derived length).

use rustc_hash::FxHashMap;

use wayfind_core::GeoPoint;

use crate::error::RouteError;
use crate::network::{RoadGraph, RoadGraphBuilder};
use crate::source::GraphSource;

// Compatibility fallback key ids for documents without key definitions.
const FALLBACK_LAT: &str = "d4";
const FALLBACK_LON: &str = "d5";
const FALLBACK_LENGTH: &str = "d16";
const FALLBACK_NAME: &str = "d13";

/// Declarative table of the attribute names the builder resolves.
#[derive(Debug, Clone)]
pub struct AttrNames {
    pub lat: String,
    pub lon: String,
    pub length: String,
    pub name: String,
    pub oneway: String,
}

impl Default for AttrNames {
    fn default() -> Self {
        Self {
            lat: "lat".into(),
            lon: "lon".into(),
            length: "length".into(),
            name: "name".into(),
            oneway: "oneway".into(),
        }
    }
}

/// Build a [`RoadGraph`] from an attributed graph source.
///
/// - Node coordinates default to 0.0 when the attribute is absent.
/// - Edge lengths absent or non-finite in the source are derived as the
///   haversine distance between the endpoints.
/// - Edges referencing unknown endpoints are dropped, preserving the
///   invariant that every edge endpoint has a node.
/// - The reverse edge is added unless the edge carries a truthy `oneway`
///   attribute (`"true"`, `"yes"`, or `"1"`, case-insensitive).
///
/// # Errors
///
/// [`RouteError::EmptySource`] if the source has no node elements;
/// [`RouteError::BadAttribute`] if a numeric attribute value fails to parse.
pub fn from_source(source: &GraphSource, names: &AttrNames) -> Result<RoadGraph, RouteError> {
    if source.nodes.is_empty() {
        return Err(RouteError::EmptySource);
    }

    // ── Phase 1: key-id → attribute-name map, complete before elements ────
    let key_names: FxHashMap<&str, &str> = source
        .keys
        .iter()
        .map(|k| (k.id.as_str(), k.attr_name.as_str()))
        .collect();

    let mut builder = RoadGraphBuilder::with_capacity(source.nodes.len(), source.edges.len() * 2);

    // ── Phase 2: nodes ────────────────────────────────────────────────────
    for node in &source.nodes {
        let mut lat = 0.0;
        let mut lon = 0.0;

        for (key, value) in &node.data {
            let attr = key_names.get(key.as_str()).copied();
            if matches_attr(attr, key, &names.lat, "y", FALLBACK_LAT) {
                lat = parse_f64(&node.id, key, value)?;
            } else if matches_attr(attr, key, &names.lon, "x", FALLBACK_LON) {
                lon = parse_f64(&node.id, key, value)?;
            }
        }

        builder.add_node(node.id.as_str(), GeoPoint::new(lat, lon));
    }

    // ── Phase 3: edges ────────────────────────────────────────────────────
    for edge in &source.edges {
        // Unknown endpoints: drop the edge rather than invent a node.
        let (Some(from), Some(to)) = (builder.lookup(&edge.source), builder.lookup(&edge.target))
        else {
            continue;
        };

        let mut length: Option<f64> = None;
        let mut road_name = "";
        let mut oneway = false;

        for (key, value) in &edge.data {
            let attr = key_names.get(key.as_str()).copied();
            if matches_attr(attr, key, &names.length, &names.length, FALLBACK_LENGTH) {
                let element = format!("{} -> {}", edge.source, edge.target);
                length = Some(parse_f64(&element, key, value)?);
            } else if matches_attr(attr, key, &names.name, &names.name, FALLBACK_NAME) {
                road_name = value.as_str();
            } else if attr == Some(names.oneway.as_str()) {
                oneway = is_truthy(value);
            }
        }

        // Declared length wins when finite; otherwise derive from geometry.
        let length_m = match length {
            Some(l) if l.is_finite() && l >= 0.0 => l,
            _ => builder.node_pos(from).distance_m(builder.node_pos(to)),
        };

        builder.add_directed_edge(from, to, length_m, road_name);
        if !oneway {
            builder.add_directed_edge(to, from, length_m, road_name);
        }
    }

    Ok(builder.build())
}

/// An entry matches when its resolved attribute name equals `wanted` (or the
/// accepted alias), or — only if the key id is undefined — when the raw key
/// id equals the conventional fallback.
fn matches_attr(
    attr: Option<&str>,
    key: &str,
    wanted: &str,
    alias: &str,
    fallback_key: &str,
) -> bool {
    match attr {
        Some(a) => a == wanted || a == alias,
        None => key == fallback_key,
    }
}

fn parse_f64(element: &str, key: &str, value: &str) -> Result<f64, RouteError> {
    value.trim().parse::<f64>().map_err(|_| RouteError::BadAttribute {
        element: element.to_string(),
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn is_truthy(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
        || value.eq_ignore_ascii_case("yes")
        || value == "1"
}

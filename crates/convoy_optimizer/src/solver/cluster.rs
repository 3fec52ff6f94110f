use fxhash::FxHashMap;

use crate::problem::booking::Booking;

/// Region keywords matched case-insensitively against pickup locations.
/// First match wins; anything unmatched falls into [`FALLBACK_REGION`].
const REGIONS: &[(&str, &[&str])] = &[
    ("DELHI_CENTRAL", &["delhi", "connaught"]),
    ("GURGAON", &["gurgaon", "cyber"]),
    ("NOIDA", &["noida", "greater"]),
    ("BANGALORE", &["bangalore", "whitefield"]),
];

const FALLBACK_REGION: &str = "OTHER";

/// A group of bookings treated as one route-planning unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub key: &'static str,
    pub bookings: Vec<Booking>,
}

impl Cluster {
    pub fn total_load_kg(&self) -> f64 {
        self.bookings.iter().map(Booking::load_weight_kg).sum()
    }

    pub fn first_pickup(&self) -> Option<&str> {
        self.bookings.first().map(Booking::pickup_location)
    }
}

/// Partitions bookings into geographic buckets. Contract: bookings of the
/// same region land in the same bucket, and every booking lands in exactly
/// one bucket. Implementations may be swapped for true coordinate-based
/// clustering without touching the orchestrator.
pub trait Clusterer {
    fn cluster(&self, bookings: &[Booking]) -> Vec<Cluster>;
}

/// Coarse keyword matcher over the pickup-location string. Buckets come
/// back in fixed region-table order, fallback last, so downstream
/// processing is deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordClusterer;

impl Clusterer for KeywordClusterer {
    fn cluster(&self, bookings: &[Booking]) -> Vec<Cluster> {
        let mut buckets: FxHashMap<&'static str, Vec<Booking>> = FxHashMap::default();

        for booking in bookings {
            buckets
                .entry(region_for(booking.pickup_location()))
                .or_default()
                .push(booking.clone());
        }

        REGIONS
            .iter()
            .map(|(key, _)| *key)
            .chain(std::iter::once(FALLBACK_REGION))
            .filter_map(|key| buckets.remove(key).map(|bookings| Cluster { key, bookings }))
            .collect()
    }
}

fn region_for(location: &str) -> &'static str {
    let lowered = location.to_lowercase();

    REGIONS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(key, _)| *key)
        .unwrap_or(FALLBACK_REGION)
}

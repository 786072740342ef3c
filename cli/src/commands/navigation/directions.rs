//! # Navigation Directions Table
//!
//! File: cli/src/commands/navigation/directions.rs
//!
//! ## Overview
//!
//! Canned walking directions for each ride on the island. Nothing is
//! computed: a destination key maps to a fixed list of steps, and any other
//! destination gets `UNKNOWN_ROUTE`.
//!
use tracing::debug;

/// Destination reported when the request names none.
pub const UNKNOWN_DESTINATION: &str = "unknown";

/// Route returned for destinations the table does not know.
pub const UNKNOWN_ROUTE: &[&str] = &["Destination unknown"];

/// Destination key → ordered steps. Keys are lower-case.
#[derive(Debug)]
pub struct DestinationStepTable {
    entries: &'static [(&'static str, &'static [&'static str])],
}

/// Walking directions to every ride on the map.
pub static ISLAND_ROUTES: DestinationStepTable = DestinationStepTable::new(&[
    (
        "volcano",
        &[
            "Start at entrance",
            "Head north",
            "Follow the lava trail",
            "Arrive at Volcano Ride!",
        ],
    ),
    (
        "maze",
        &["Enter forest", "Turn left at ruins", "Arrive at Maze Garden!"],
    ),
    (
        "boat",
        &["Go south", "Cross stone bridge", "Dock at Pirate Ship Ride!"],
    ),
    (
        "resort",
        &[
            "Follow river east",
            "Pass glowing portals",
            "Welcome to Resort Towers!",
        ],
    ),
]);

impl DestinationStepTable {
    /// Wraps a static table. Keys must already be lower-case.
    pub const fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// Steps for `destination`, matched case-insensitively.
    pub fn lookup(&self, destination: &str) -> Option<&'static [&'static str]> {
        let key = destination.to_lowercase();
        let entries: &'static [(&'static str, &'static [&'static str])] = self.entries;
        entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, steps)| *steps)
    }

    /// Steps for `destination`, or `UNKNOWN_ROUTE`.
    pub fn route_to(&self, destination: &str) -> &'static [&'static str] {
        match self.lookup(destination) {
            Some(steps) => steps,
            None => {
                debug!("No route for destination '{}'", destination);
                UNKNOWN_ROUTE
            }
        }
    }
}

// src/core/entity/stats.rs

//! Database and daemon statistics, a flat last-write-wins accumulator.

use crate::core::protocol::Pair;
use tracing::debug;

/// The answer to a `stats` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub artists: Option<u32>,
    pub albums: Option<u32>,
    pub songs: Option<u32>,
    /// Daemon uptime in seconds.
    pub uptime: Option<u64>,
    /// Accumulated play time in seconds.
    pub playtime: Option<u64>,
    /// Total duration of all database songs in seconds.
    pub db_playtime: Option<u64>,
    /// Unix timestamp of the last database update.
    pub db_update: Option<u64>,
}

impl Stats {
    /// Absorbs one pair, overwriting any previous value for that field.
    pub fn absorb(&mut self, pair: &Pair) {
        let value = pair.value.as_str();
        match pair.name.as_str() {
            "artists" => self.artists = value.parse().ok(),
            "albums" => self.albums = value.parse().ok(),
            "songs" => self.songs = value.parse().ok(),
            "uptime" => self.uptime = value.parse().ok(),
            "playtime" => self.playtime = value.parse().ok(),
            "db_playtime" => self.db_playtime = value.parse().ok(),
            "db_update" => self.db_update = value.parse().ok(),
            other => debug!(name = other, "unmodeled stats field"),
        }
    }
}

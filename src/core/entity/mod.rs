// src/core/entity/mod.rs

//! Typed response payloads and their incremental builders.
//!
//! List responses arrive as one flat stream of `key: value` pairs with no
//! record delimiter. Every builder therefore reports whether it absorbed a
//! pair: a rejected pair means the field is already set and the pair opens
//! the next record (first-write-wins boundary detection).

pub mod idle;
pub mod listing;
pub mod song;
pub mod stats;
pub mod status;
pub mod tags;

pub use idle::IdleSubsystems;
pub use listing::{Directory, Entity, EntityList, PlaylistFile};
pub use song::{Song, SongList};
pub use stats::Stats;
pub use status::{PlayState, Status};
pub use tags::{TagList, TagValue};

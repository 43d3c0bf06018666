// src/core/entity/listing.rs

//! Directory listing records for `lsinfo` responses.
//!
//! A listing mixes three record shapes. Each record is opened by its
//! distinguishing key (`file`, `directory` or `playlist`); the same
//! first-write-wins discipline as songs segments the flat pair stream.

use super::song::Song;
use crate::core::protocol::Pair;
use tracing::warn;

/// A sub-directory of the music database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    pub path: String,
    pub last_modified: Option<String>,
}

/// A stored playlist file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistFile {
    pub path: String,
    pub last_modified: Option<String>,
}

/// One record of a directory listing.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Song(Box<Song>),
    Directory(Directory),
    Playlist(PlaylistFile),
}

impl Entity {
    /// Begins a new record when the pair carries a record-opening key.
    fn begin(pair: &Pair) -> Option<Entity> {
        match pair.name.as_str() {
            "file" => {
                let mut song = Song::default();
                song.absorb(pair);
                Some(Entity::Song(Box::new(song)))
            }
            "directory" => Some(Entity::Directory(Directory {
                path: pair.value.clone(),
                last_modified: None,
            })),
            "playlist" => Some(Entity::Playlist(PlaylistFile {
                path: pair.value.clone(),
                last_modified: None,
            })),
            _ => None,
        }
    }

    /// Absorbs one pair into the in-progress record; `false` marks the
    /// pair as not belonging to this record.
    fn absorb(&mut self, pair: &Pair) -> bool {
        // A record-opening key always belongs to the next record.
        if matches!(pair.name.as_str(), "file" | "directory" | "playlist") {
            return false;
        }
        match self {
            Entity::Song(song) => song.absorb(pair),
            Entity::Directory(dir) => absorb_metadata(&mut dir.last_modified, pair),
            Entity::Playlist(playlist) => absorb_metadata(&mut playlist.last_modified, pair),
        }
    }
}

fn absorb_metadata(last_modified: &mut Option<String>, pair: &Pair) -> bool {
    if pair.name != "Last-Modified" || last_modified.is_some() {
        return false;
    }
    *last_modified = Some(pair.value.clone());
    true
}

/// Accumulator for `lsinfo` responses.
#[derive(Debug, Default)]
pub struct EntityList {
    current: Option<Entity>,
    entities: Vec<Entity>,
}

impl EntityList {
    /// Feeds one pair, flushing the in-progress record when the pair opens
    /// the next one. A pair that neither fits the current record nor opens
    /// a new one is dropped with a warning.
    pub fn absorb(&mut self, pair: &Pair) {
        if let Some(mut entity) = self.current.take() {
            if entity.absorb(pair) {
                self.current = Some(entity);
                return;
            }
            match Entity::begin(pair) {
                Some(next) => {
                    self.entities.push(entity);
                    self.current = Some(next);
                }
                None => {
                    warn!(name = %pair.name, "pair belongs to no listing record");
                    self.current = Some(entity);
                }
            }
        } else {
            match Entity::begin(pair) {
                Some(entity) => self.current = Some(entity),
                None => warn!(name = %pair.name, "pair before any listing record"),
            }
        }
    }

    /// Moves the last in-progress record into the list.
    pub fn flush(&mut self) {
        if let Some(entity) = self.current.take() {
            self.entities.push(entity);
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }
}

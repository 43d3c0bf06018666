// src/core/entity/song.rs

//! Song records and the accumulator used to split multi-song responses
//! into individual entities.

use crate::core::protocol::Pair;
use tracing::warn;

/// One song of the database or the play queue. Every field is optional:
/// the server only sends the tags a song actually carries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Song {
    pub file: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub album_artist: Option<String>,
    pub title: Option<String>,
    pub track: Option<String>,
    pub name: Option<String>,
    pub genre: Option<String>,
    pub date: Option<String>,
    pub composer: Option<String>,
    /// Whole-second duration from the legacy `Time` field.
    pub time: Option<u64>,
    /// Sub-second duration from the `duration` field.
    pub duration: Option<f64>,
    /// Position within the play queue.
    pub pos: Option<u32>,
    /// Queue-wide stable identifier.
    pub id: Option<u32>,
    pub last_modified: Option<String>,
}

impl Song {
    /// Absorbs one pair. Returns `false` when the addressed field is
    /// already set, which marks the pair as the start of the next song.
    pub fn absorb(&mut self, pair: &Pair) -> bool {
        let value = pair.value.as_str();
        match pair.name.as_str() {
            "file" => set_string(&mut self.file, value),
            "Artist" => set_string(&mut self.artist, value),
            "Album" => set_string(&mut self.album, value),
            "AlbumArtist" => set_string(&mut self.album_artist, value),
            "Title" => set_string(&mut self.title, value),
            "Track" => set_string(&mut self.track, value),
            "Name" => set_string(&mut self.name, value),
            "Genre" => set_string(&mut self.genre, value),
            "Date" => set_string(&mut self.date, value),
            "Composer" => set_string(&mut self.composer, value),
            "Time" => set_parsed(&mut self.time, pair),
            "duration" => set_parsed(&mut self.duration, pair),
            "Pos" => set_parsed(&mut self.pos, pair),
            "Id" => set_parsed(&mut self.id, pair),
            "Last-Modified" => set_string(&mut self.last_modified, value),
            // Tags the client does not model are dropped without
            // disturbing boundary detection.
            _ => true,
        }
    }
}

fn set_string(slot: &mut Option<String>, value: &str) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value.to_string());
    true
}

fn set_parsed<T: std::str::FromStr>(slot: &mut Option<T>, pair: &Pair) -> bool {
    if slot.is_some() {
        return false;
    }
    match pair.value.parse() {
        Ok(parsed) => *slot = Some(parsed),
        Err(_) => warn!(name = %pair.name, value = %pair.value, "unparseable song field"),
    }
    true
}

/// Accumulator for multi-song responses (`playlistinfo`, `find`).
#[derive(Debug, Default)]
pub struct SongList {
    current: Option<Song>,
    songs: Vec<Song>,
}

impl SongList {
    /// Feeds one pair, flushing the in-progress song when the pair belongs
    /// to the next record.
    pub fn absorb(&mut self, pair: &Pair) {
        if let Some(mut song) = self.current.take() {
            if song.absorb(pair) {
                self.current = Some(song);
                return;
            }
            self.songs.push(song);
        }
        let mut song = Song::default();
        song.absorb(pair);
        self.current = Some(song);
    }

    /// Moves the last in-progress song into the list. Called once the
    /// response terminator arrives.
    pub fn flush(&mut self) {
        if let Some(song) = self.current.take() {
            self.songs.push(song);
        }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }
}

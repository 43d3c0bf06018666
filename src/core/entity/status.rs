// src/core/entity/status.rs

//! Player status, a flat last-write-wins accumulator.

use crate::core::protocol::Pair;
use strum_macros::EnumString;
use tracing::debug;

/// Playback state reported by the `state` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PlayState {
    Play,
    Stop,
    Pause,
}

/// The answer to a `status` command. Unlike song records, a repeated field
/// simply overwrites the previous value: the response is one flat set of
/// pairs, never a list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Status {
    pub volume: Option<i32>,
    pub repeat: bool,
    pub random: bool,
    pub single: bool,
    pub consume: bool,
    /// Version number of the play queue, from the `playlist` field.
    pub playlist_version: Option<u32>,
    pub playlist_length: Option<u32>,
    pub state: Option<PlayState>,
    pub song: Option<u32>,
    pub song_id: Option<u32>,
    pub next_song: Option<u32>,
    pub next_song_id: Option<u32>,
    /// Legacy `elapsed:total` whole-second pair from the `time` field.
    pub time: Option<(u64, u64)>,
    pub elapsed: Option<f64>,
    pub duration: Option<f64>,
    pub bitrate: Option<u32>,
    /// Crossfade length in seconds, from the `xfade` field.
    pub crossfade: Option<u32>,
    /// Raw `samplerate:bits:channels` description.
    pub audio: Option<String>,
    /// Job id of a database update in progress.
    pub updating_db: Option<u32>,
    pub error: Option<String>,
}

impl Status {
    /// Absorbs one pair, overwriting any previous value for that field.
    pub fn absorb(&mut self, pair: &Pair) {
        let value = pair.value.as_str();
        match pair.name.as_str() {
            "volume" => self.volume = value.parse().ok(),
            "repeat" => self.repeat = value == "1",
            "random" => self.random = value == "1",
            "single" => self.single = value == "1",
            "consume" => self.consume = value == "1",
            "playlist" => self.playlist_version = value.parse().ok(),
            "playlistlength" => self.playlist_length = value.parse().ok(),
            "state" => self.state = value.parse().ok(),
            "song" => self.song = value.parse().ok(),
            "songid" => self.song_id = value.parse().ok(),
            "nextsong" => self.next_song = value.parse().ok(),
            "nextsongid" => self.next_song_id = value.parse().ok(),
            "time" => self.time = parse_time(value),
            "elapsed" => self.elapsed = value.parse().ok(),
            "duration" => self.duration = value.parse().ok(),
            "bitrate" => self.bitrate = value.parse().ok(),
            "xfade" => self.crossfade = value.parse().ok(),
            "audio" => self.audio = Some(value.to_string()),
            "updating_db" => self.updating_db = value.parse().ok(),
            "error" => self.error = Some(value.to_string()),
            other => debug!(name = other, "unmodeled status field"),
        }
    }
}

fn parse_time(value: &str) -> Option<(u64, u64)> {
    let (elapsed, total) = value.split_once(':')?;
    Some((elapsed.parse().ok()?, total.parse().ok()?))
}

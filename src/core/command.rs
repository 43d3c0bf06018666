// src/core/command.rs

//! Command descriptors: one outstanding request, its wire verb, its
//! argument list, and the typed answer accumulated from the response body.

use crate::core::entity::{EntityList, IdleSubsystems, Song, SongList, Stats, Status, TagList};
use crate::core::protocol::Pair;
use strum_macros::IntoStaticStr;
use tracing::warn;

/// The closed set of request types the client can have in flight.
///
/// `None` is a sentinel for the server greeting: it is pre-seeded into the
/// pending queue at connect time and consumed by the very first line the
/// server sends. It never goes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum CommandKind {
    None,
    CurrentSong,
    Idle,
    Status,
    Stats,
    Play,
    Stop,
    Pause,
    Previous,
    Next,
    SeekCur,
    SetVol,
    PlaylistInfo,
    Close,
    List,
    LsInfo,
    Find,
    FindAdd,
    Add,
    Clear,
    Update,
    Save,
    Load,
    Delete,
    Move,
    #[strum(serialize = "rm")]
    RemovePlaylist,
}

impl CommandKind {
    /// The wire verb for this command type.
    pub fn verb(self) -> &'static str {
        self.into()
    }
}

/// The typed answer accumulated for one command. The variant is fixed when
/// the descriptor is created and never changes; exactly one shape exists
/// per command type.
#[derive(Debug)]
pub enum Answer {
    /// No structured payload expected (`play`, `stop`, `add`, ...).
    None,
    /// A single song, or nothing when the player is stopped.
    Song(Option<Song>),
    Status(Status),
    Stats(Stats),
    Idle(IdleSubsystems),
    Songs(SongList),
    Entities(EntityList),
    Tags(TagList),
}

/// One outstanding request. Lives in the pending queue from send until its
/// terminating response line arrives, then is finalized, dispatched and
/// dropped.
#[derive(Debug)]
pub struct Command {
    kind: CommandKind,
    args: Vec<String>,
    answer: Answer,
}

impl Command {
    /// The descriptor factory: binds the empty answer shape appropriate
    /// for `kind`, which in turn selects the pair-parsing and finalization
    /// behavior.
    pub fn new(kind: CommandKind, args: Vec<String>) -> Self {
        let answer = match kind {
            CommandKind::CurrentSong => Answer::Song(None),
            CommandKind::Status => Answer::Status(Status::default()),
            CommandKind::Stats => Answer::Stats(Stats::default()),
            CommandKind::Idle => Answer::Idle(IdleSubsystems::empty()),
            CommandKind::PlaylistInfo | CommandKind::Find => Answer::Songs(SongList::default()),
            CommandKind::LsInfo => Answer::Entities(EntityList::default()),
            CommandKind::List => Answer::Tags(TagList::default()),
            _ => Answer::None,
        };
        Self { kind, args, answer }
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    /// Feeds one response pair into the answer. Returns `false` when this
    /// command type takes no response body, leaving the caller to report
    /// the stray pair.
    pub fn consume_pair(&mut self, pair: &Pair) -> bool {
        match &mut self.answer {
            Answer::None => false,
            Answer::Song(slot) => {
                let song = slot.get_or_insert_with(Song::default);
                if !song.absorb(pair) {
                    // A single-song answer has no next record to open.
                    warn!(name = %pair.name, "duplicate field in single-song response");
                }
                true
            }
            Answer::Status(status) => {
                status.absorb(pair);
                true
            }
            Answer::Stats(stats) => {
                stats.absorb(pair);
                true
            }
            Answer::Idle(mask) => {
                if pair.name != "changed" {
                    return false;
                }
                match IdleSubsystems::from_changed(&pair.value) {
                    Some(flag) => *mask |= flag,
                    None => warn!(value = %pair.value, "unknown idle subsystem"),
                }
                true
            }
            Answer::Songs(list) => {
                list.absorb(pair);
                true
            }
            Answer::Entities(list) => {
                list.absorb(pair);
                true
            }
            Answer::Tags(list) => {
                list.absorb(pair);
                true
            }
        }
    }

    /// Completes the answer once the success terminator has arrived:
    /// flushes any in-progress record into its list. Runs before callback
    /// dispatch.
    pub fn finalize(&mut self) {
        match &mut self.answer {
            Answer::Songs(list) => list.flush(),
            Answer::Entities(list) => list.flush(),
            Answer::Tags(list) => list.flush(),
            _ => {}
        }
    }
}

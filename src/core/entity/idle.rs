// src/core/entity/idle.rs

//! The idle-change bitmask and the `changed:` vocabulary.

use bitflags::bitflags;

bitflags! {
    /// Subsystems an idle notification can report as changed. One flag per
    /// value of the protocol's `changed:` vocabulary; a single idle answer
    /// accumulates flags by OR-ing in every `changed` pair it receives.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct IdleSubsystems: u16 {
        const DATABASE        = 1 << 0;
        const UPDATE          = 1 << 1;
        const STORED_PLAYLIST = 1 << 2;
        const PLAYLIST        = 1 << 3;
        const PLAYER          = 1 << 4;
        const MIXER           = 1 << 5;
        const OUTPUT          = 1 << 6;
        const OPTIONS         = 1 << 7;
        const STICKER         = 1 << 8;
        const SUBSCRIPTION    = 1 << 9;
        const MESSAGE         = 1 << 10;
    }
}

impl IdleSubsystems {
    /// Maps one `changed:` value to its flag. The lowercase wire
    /// vocabulary is distinct from the flag identifiers, so this lookup is
    /// separate from the one `bitflags` generates.
    pub fn from_changed(name: &str) -> Option<Self> {
        Some(match name {
            "database" => Self::DATABASE,
            "update" => Self::UPDATE,
            "stored_playlist" => Self::STORED_PLAYLIST,
            "playlist" => Self::PLAYLIST,
            "player" => Self::PLAYER,
            "mixer" => Self::MIXER,
            "output" => Self::OUTPUT,
            "options" => Self::OPTIONS,
            "sticker" => Self::STICKER,
            "subscription" => Self::SUBSCRIPTION,
            "message" => Self::MESSAGE,
            _ => return None,
        })
    }
}

// src/core/entity/tags.rs

//! Grouped tag values for `list` responses (e.g. every artist, every album
//! of one artist).

use crate::core::protocol::Pair;

/// One value of a `list` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagValue {
    /// The tag the value belongs to (`Artist`, `Album`, `Genre`, ...).
    pub tag: String,
    pub value: String,
}

/// Accumulator for `list` responses. Every pair is one complete value, so
/// each incoming pair closes the previous record; the discipline is the
/// same first-write-wins segmentation as songs, degenerated to a single
/// field per record.
#[derive(Debug, Default)]
pub struct TagList {
    current: Option<TagValue>,
    values: Vec<TagValue>,
}

impl TagList {
    pub fn absorb(&mut self, pair: &Pair) {
        if let Some(previous) = self.current.take() {
            self.values.push(previous);
        }
        self.current = Some(TagValue {
            tag: pair.name.clone(),
            value: pair.value.clone(),
        });
    }

    /// Moves the last in-progress value into the list.
    pub fn flush(&mut self) {
        if let Some(value) = self.current.take() {
            self.values.push(value);
        }
    }

    pub fn values(&self) -> &[TagValue] {
        &self.values
    }
}

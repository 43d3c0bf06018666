// src/core/protocol/mod.rs

//! The MPD line protocol: per-line parser events and the framing codec.

mod codec;

pub use codec::{Ack, AckCode, Greeting, MpdCodec, Pair, ResponseLine, WireRequest};

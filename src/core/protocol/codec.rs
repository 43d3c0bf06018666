// src/core/protocol/codec.rs

//! Implements the MPD wire format and the corresponding `Encoder` and
//! `Decoder` for network communication.
//!
//! The protocol has no message-length framing: a response is a run of
//! `key: value` lines terminated by a single `OK` or `ACK` line. The
//! decoder therefore yields exactly one parser event per complete line and
//! buffers partial trailing data across reads. It knows nothing about
//! command types or response aggregation.

use crate::core::MpdError;
use bytes::{BufMut, BytesMut};
use strum_macros::FromRepr;
use tokio_util::codec::{Decoder, Encoder};

const LINE_TERMINATOR: u8 = b'\n';

// Protocol-level limit to prevent unbounded buffering on a garbage stream.
const MAX_LINE_LENGTH: usize = 64 * 1024;

/// One `key: value` line of a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub name: String,
    pub value: String,
}

impl Pair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The error codes a server can report in an `ACK` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u16)]
pub enum AckCode {
    NotList = 1,
    Argument = 2,
    Password = 3,
    Permission = 4,
    Unknown = 5,
    NoExist = 50,
    PlaylistMax = 51,
    System = 52,
    PlaylistLoad = 53,
    UpdateAlready = 54,
    PlayerSync = 55,
    Exist = 56,
}

/// A server-reported error terminator:
/// `ACK [<code>@<index>] {<verb>} <message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub code: u16,
    /// Position of the failing command within a command list.
    pub command_index: u32,
    /// The verb the server attributes the failure to.
    pub command: String,
    pub message: String,
}

impl Ack {
    /// The decoded error code, when it is one the client knows about.
    pub fn code(&self) -> Option<AckCode> {
        AckCode::from_repr(self.code)
    }

    fn parse(line: &str) -> Option<Ack> {
        let rest = line.strip_prefix("ACK [")?;
        let (code, rest) = rest.split_once('@')?;
        let (index, rest) = rest.split_once("] {")?;
        let (command, rest) = rest.split_once('}')?;
        let message = rest.strip_prefix(' ').unwrap_or(rest);
        Some(Ack {
            code: code.parse().ok()?,
            command_index: index.parse().ok()?,
            command: command.to_string(),
            message: message.to_string(),
        })
    }
}

/// The server greeting, `OK <name> <version>`, sent once immediately after
/// the connection is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub name: String,
    pub version: String,
}

impl Greeting {
    pub fn parse(line: &str) -> Option<Greeting> {
        let rest = line.strip_prefix("OK ")?;
        let (name, version) = rest.split_once(' ')?;
        if name.is_empty() || version.is_empty() {
            return None;
        }
        Some(Greeting {
            name: name.to_string(),
            version: version.to_string(),
        })
    }
}

/// One parser event derived from a complete response line.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseLine {
    /// The `OK` terminator: the current response completed normally.
    Ok,
    /// An `ACK` terminator: the server rejected the current command.
    Ack(Ack),
    /// One `key: value` pair of a response body.
    Pair(Pair),
    /// A line matching none of the above. Terminates the current response
    /// abnormally; the offending line is kept for diagnostics.
    Malformed(String),
}

/// A client-to-server line.
#[derive(Debug, Clone, PartialEq)]
pub enum WireRequest {
    /// A command verb followed by its quoted arguments.
    Command {
        verb: &'static str,
        args: Vec<String>,
    },
    /// The literal `noidle` token that interrupts an outstanding idle.
    NoIdle,
}

/// A `tokio_util::codec` implementation for the newline-delimited MPD
/// protocol.
#[derive(Debug, Default)]
pub struct MpdCodec;

impl Decoder for MpdCodec {
    type Item = ResponseLine;
    type Error = MpdError;

    /// Splits off one complete line, if available, and classifies it. No
    /// event is produced until the terminator byte has been received.
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let Some(pos) = src.iter().position(|&b| b == LINE_TERMINATOR) else {
            if src.len() > MAX_LINE_LENGTH {
                return Err(MpdError::LineTooLong(MAX_LINE_LENGTH));
            }
            return Ok(None);
        };
        if pos > MAX_LINE_LENGTH {
            return Err(MpdError::LineTooLong(MAX_LINE_LENGTH));
        }

        let line = src.split_to(pos + 1);
        let line = String::from_utf8_lossy(&line[..pos]);
        Ok(Some(classify_line(&line)))
    }
}

/// Classifies one complete line into exactly one parser event.
fn classify_line(line: &str) -> ResponseLine {
    if line == "OK" {
        return ResponseLine::Ok;
    }
    if line.starts_with("ACK") {
        return match Ack::parse(line) {
            Some(ack) => ResponseLine::Ack(ack),
            None => ResponseLine::Malformed(line.to_string()),
        };
    }
    if let Some((name, rest)) = line.split_once(':') {
        if !name.is_empty() {
            let value = rest.strip_prefix(' ').unwrap_or(rest);
            return ResponseLine::Pair(Pair::new(name, value));
        }
    }
    ResponseLine::Malformed(line.to_string())
}

impl Encoder<WireRequest> for MpdCodec {
    type Error = MpdError;

    /// Encodes a request line. Every argument is wrapped in double quotes
    /// with `"` and `\` backslash-escaped.
    fn encode(&mut self, item: WireRequest, dst: &mut BytesMut) -> Result<(), Self::Error> {
        match item {
            WireRequest::NoIdle => dst.extend_from_slice(b"noidle\n"),
            WireRequest::Command { verb, args } => {
                dst.extend_from_slice(verb.as_bytes());
                for arg in &args {
                    dst.extend_from_slice(b" \"");
                    for &byte in arg.as_bytes() {
                        if byte == b'"' || byte == b'\\' {
                            dst.put_u8(b'\\');
                        }
                        dst.put_u8(byte);
                    }
                    dst.put_u8(b'"');
                }
                dst.put_u8(LINE_TERMINATOR);
            }
        }
        Ok(())
    }
}

// src/client/session.rs

//! Synchronous response routing: pairs accumulate into the head of the
//! pending queue, terminators finalize and pop it.

use super::callbacks::{Callback, CallbackRegistry};
use super::queue::PendingQueue;
use crate::core::protocol::{Greeting, ResponseLine};
use crate::core::{Command, CommandKind};
use tracing::{debug, info, warn};

/// What the connection driver should do after a line has been routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    /// Keep reading.
    Continue,
    /// The queue just drained; send an `idle` so the server always has a
    /// live long poll to push change notifications into.
    StartIdle,
}

/// The synchronous half of the connection driver. Owns the pending queue
/// and the callback registry, performs no I/O, and is the only mutator of
/// either.
#[derive(Debug)]
pub struct Session {
    pending: PendingQueue,
    callbacks: CallbackRegistry,
    greeting: Option<Greeting>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session with the greeting sentinel already pending: the
    /// first line the server sends answers it.
    pub fn new() -> Self {
        let mut pending = PendingQueue::default();
        pending.push(Command::new(CommandKind::None, Vec::new()));
        Self {
            pending,
            callbacks: CallbackRegistry::default(),
            greeting: None,
        }
    }

    pub fn register(&mut self, kind: CommandKind, callback: Callback) {
        self.callbacks.register(kind, callback);
    }

    /// The protocol name and version from the greeting, once consumed.
    pub fn greeting(&self) -> Option<&Greeting> {
        self.greeting.as_ref()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push(command);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn tail_is_idle(&self) -> bool {
        self.pending.tail_is_idle()
    }

    /// Discards every pending descriptor without dispatching anything.
    /// Called on hang-up, transport error, and explicit teardown.
    pub fn abort_pending(&mut self) {
        let discarded = self.pending.len();
        self.pending.clear();
        if discarded > 0 {
            debug!(discarded, "discarded pending commands");
        }
    }

    /// Routes one parsed line against the head of the pending queue.
    pub fn handle_line(&mut self, line: ResponseLine) -> NextAction {
        // Greeting gate: while the sentinel is at the head, a line of the
        // form `OK <name> <version>` completes it no matter how the codec
        // classified it. A bare `OK` flows through the normal terminator
        // path and completes the sentinel the same way.
        if self.awaiting_greeting()
            && let Some(action) = self.try_complete_greeting(&line)
        {
            return action;
        }

        match line {
            ResponseLine::Pair(pair) => {
                match self.pending.head_mut() {
                    Some(command) => {
                        if !command.consume_pair(&pair) {
                            // Either a payload-free command or a pair
                            // outside the command's accepted vocabulary.
                            warn!(
                                command = command.kind().verb(),
                                name = %pair.name,
                                "pair rejected by the pending command"
                            );
                        }
                    }
                    None => warn!(name = %pair.name, "pair received with no pending command"),
                }
                NextAction::Continue
            }
            ResponseLine::Ok => {
                let Some(mut command) = self.pending.pop() else {
                    warn!("response terminator received with no pending command");
                    return NextAction::Continue;
                };
                command.finalize();
                debug!(command = command.kind().verb(), "command completed");
                self.callbacks
                    .dispatch(command.kind(), command.args(), command.answer());
                self.after_pop()
            }
            ResponseLine::Ack(ack) => {
                let Some(command) = self.pending.pop() else {
                    warn!(code = ack.code, message = %ack.message, "server error with no pending command");
                    return NextAction::Continue;
                };
                // The partially accumulated answer is discarded, not dispatched.
                warn!(
                    command = command.kind().verb(),
                    code = ack.code,
                    index = ack.command_index,
                    message = %ack.message,
                    "command rejected by server"
                );
                self.after_pop()
            }
            ResponseLine::Malformed(raw) => {
                let Some(command) = self.pending.pop() else {
                    warn!(line = %raw, "malformed line with no pending command");
                    return NextAction::Continue;
                };
                warn!(
                    command = command.kind().verb(),
                    line = %raw,
                    "malformed response line, abandoning command"
                );
                self.after_pop()
            }
        }
    }

    fn awaiting_greeting(&self) -> bool {
        self.pending
            .head()
            .is_some_and(|command| command.kind() == CommandKind::None)
    }

    fn try_complete_greeting(&mut self, line: &ResponseLine) -> Option<NextAction> {
        let ResponseLine::Malformed(raw) = line else {
            return None;
        };
        let greeting = Greeting::parse(raw)?;
        info!(name = %greeting.name, version = %greeting.version, "connected");
        self.greeting = Some(greeting);
        self.pending.pop();
        Some(self.after_pop())
    }

    fn after_pop(&mut self) -> NextAction {
        if self.pending.is_empty() {
            NextAction::StartIdle
        } else {
            NextAction::Continue
        }
    }
}

// src/client/queue.rs

//! The FIFO of in-flight commands.

use crate::core::{Command, CommandKind};
use std::collections::VecDeque;

/// Strict FIFO of command descriptors awaiting their responses. The server
/// answers requests in send order, so the head of the queue is always the
/// descriptor whose response is currently being accumulated; the queue is
/// never reordered.
#[derive(Debug, Default)]
pub struct PendingQueue {
    inner: VecDeque<Command>,
}

impl PendingQueue {
    /// Appends a freshly sent command to the tail.
    pub fn push(&mut self, command: Command) {
        self.inner.push_back(command);
    }

    /// The command whose response is currently being accumulated.
    pub fn head(&self) -> Option<&Command> {
        self.inner.front()
    }

    pub fn head_mut(&mut self) -> Option<&mut Command> {
        self.inner.front_mut()
    }

    /// Removes the head once its response has been finalized.
    pub fn pop(&mut self) -> Option<Command> {
        self.inner.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when the most recently sent command is an `idle` long poll,
    /// i.e. the next send must be preceded by a `noidle` interrupt.
    pub fn tail_is_idle(&self) -> bool {
        self.inner
            .back()
            .is_some_and(|command| command.kind() == CommandKind::Idle)
    }

    /// Discards every pending descriptor. Used on teardown; nothing is
    /// dispatched.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

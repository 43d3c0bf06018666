// src/client/callbacks.rs

//! Per-command-type subscriber lists.

use crate::core::{Answer, CommandKind};
use std::collections::HashMap;
use std::fmt;

/// A subscriber invoked after a command's answer has been finalized. It
/// receives the argument list the command was sent with and the finalized
/// answer. State the original would have passed as a context pointer lives
/// in the closure's captures.
pub type Callback = Box<dyn FnMut(&[String], &Answer) + Send>;

/// Ordered subscriber lists, one per command type. Callbacks run in
/// registration order, after the command's own finalizer.
#[derive(Default)]
pub struct CallbackRegistry {
    subscribers: HashMap<CommandKind, Vec<Callback>>,
}

impl CallbackRegistry {
    pub fn register(&mut self, kind: CommandKind, callback: Callback) {
        self.subscribers.entry(kind).or_default().push(callback);
    }

    pub fn dispatch(&mut self, kind: CommandKind, args: &[String], answer: &Answer) {
        if let Some(list) = self.subscribers.get_mut(&kind) {
            for callback in list.iter_mut() {
                callback(args, answer);
            }
        }
    }
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("command_kinds", &self.subscribers.len())
            .finish()
    }
}

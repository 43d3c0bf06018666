// src/client/mod.rs

//! Connection lifecycle: the driver task, its request channel, and the
//! handle application code talks to.

mod callbacks;
mod driver;
mod queue;
mod session;

pub use callbacks::{Callback, CallbackRegistry};
pub use driver::{Connection, Request};
pub use queue::PendingQueue;
pub use session::{NextAction, Session};

use crate::core::{CommandKind, MpdError};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const REQUEST_CHANNEL_CAPACITY: usize = 64;

/// A cloneable handle to a running connection task.
#[derive(Debug, Clone)]
pub struct MpdClient {
    requests: mpsc::Sender<Request>,
}

impl MpdClient {
    /// Queues one command for the connection task. Usage errors are
    /// returned directly; a driver that has already shut down reports
    /// [`MpdError::Closed`].
    pub async fn send(&self, kind: CommandKind, args: &[&str]) -> Result<(), MpdError> {
        if kind == CommandKind::None {
            return Err(MpdError::InvalidCommand(kind.verb().to_string()));
        }
        let args = args.iter().map(|s| s.to_string()).collect();
        self.requests
            .send(Request::Send { kind, args })
            .await
            .map_err(|_| MpdError::Closed)
    }

    /// Registers a subscriber for answers to commands of `kind`.
    pub async fn register(&self, kind: CommandKind, callback: Callback) -> Result<(), MpdError> {
        self.requests
            .send(Request::Register { kind, callback })
            .await
            .map_err(|_| MpdError::Closed)
    }

    /// Asks the connection task to tear the connection down.
    pub async fn close(&self) -> Result<(), MpdError> {
        self.requests
            .send(Request::Close)
            .await
            .map_err(|_| MpdError::Closed)
    }

    /// Starts playback, optionally at a queue position.
    pub async fn play(&self, pos: Option<u32>) -> Result<(), MpdError> {
        match pos {
            Some(pos) => self.send(CommandKind::Play, &[&pos.to_string()]).await,
            None => self.send(CommandKind::Play, &[]).await,
        }
    }

    /// Seeks within the current song.
    pub async fn seek(&self, seconds: u32) -> Result<(), MpdError> {
        self.send(CommandKind::SeekCur, &[&seconds.to_string()]).await
    }

    /// Sets the mixer volume, in percent.
    pub async fn set_volume(&self, percent: u8) -> Result<(), MpdError> {
        self.send(CommandKind::SetVol, &[&percent.to_string()]).await
    }
}

/// Spawns the driver task for `connection` and returns the handle used to
/// talk to it plus the task's join handle.
pub fn spawn<S>(connection: Connection<S>) -> (MpdClient, JoinHandle<Result<(), MpdError>>)
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel(REQUEST_CHANNEL_CAPACITY);
    let task = tokio::spawn(connection.run(rx));
    (MpdClient { requests: tx }, task)
}

// src/client/driver.rs

//! The connection driver: owns the socket and the framed codec, feeds
//! decoded lines to the session, and performs the idle-interrupt dance.

use super::callbacks::Callback;
use super::session::{NextAction, Session};
use crate::core::protocol::{Greeting, MpdCodec, ResponseLine, WireRequest};
use crate::core::{Command, CommandKind, MpdError};
use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_util::codec::Framed;
use tracing::{debug, info, warn};

/// Requests accepted by a running connection task.
pub enum Request {
    Send {
        kind: CommandKind,
        args: Vec<String>,
    },
    Register {
        kind: CommandKind,
        callback: Callback,
    },
    Close,
}

/// One duplex connection to the server. Generic over the transport so
/// tests can substitute a scripted stream; the socket, buffers and pending
/// queue are owned exclusively by this driver.
pub struct Connection<S> {
    framed: Framed<S, MpdCodec>,
    session: Session,
}

impl Connection<TcpStream> {
    /// Opens a TCP connection. The server's greeting is consumed as the
    /// first response, via the sentinel pre-seeded by `new`.
    pub async fn connect(host: &str, port: u16) -> Result<Self, MpdError> {
        let stream = TcpStream::connect((host, port)).await?;
        info!(host, port, "opened connection");
        Ok(Self::new(stream))
    }
}

impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
    pub fn new(stream: S) -> Self {
        Self {
            framed: Framed::new(stream, MpdCodec),
            session: Session::new(),
        }
    }

    /// Registers a subscriber notified whenever a command of `kind`
    /// completes, in addition to the command's own finalizer.
    pub fn register(&mut self, kind: CommandKind, callback: Callback) {
        self.session.register(kind, callback);
    }

    /// The protocol name and version from the greeting, once consumed.
    pub fn server_version(&self) -> Option<&Greeting> {
        self.session.greeting()
    }

    /// Serializes and sends one command, interrupting an outstanding idle
    /// first. The interrupted idle descriptor stays queued: the server
    /// answers it before this command, so FIFO order holds throughout.
    pub async fn send(&mut self, kind: CommandKind, args: &[&str]) -> Result<(), MpdError> {
        if kind == CommandKind::None {
            return Err(MpdError::InvalidCommand(kind.verb().to_string()));
        }
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        if self.session.tail_is_idle() {
            debug!("interrupting idle");
            self.framed.send(WireRequest::NoIdle).await?;
        }
        debug!(command = kind.verb(), ?args, "sending");
        self.framed
            .send(WireRequest::Command {
                verb: kind.verb(),
                args: args.clone(),
            })
            .await?;
        self.session.push(Command::new(kind, args));
        Ok(())
    }

    /// Reads and routes one response line. Returns `false` once the server
    /// has hung up, after discarding all pending commands.
    pub async fn dispatch(&mut self) -> Result<bool, MpdError> {
        let line = self.framed.next().await;
        self.route(line).await
    }

    /// Routes one decoded line (or stream end) and performs any follow-up
    /// write. Must run to completion once started: re-entering idle pairs
    /// a wire write with a queue push, and dropping the future between the
    /// two would desynchronize them.
    async fn route(
        &mut self,
        line: Option<Result<ResponseLine, MpdError>>,
    ) -> Result<bool, MpdError> {
        match line {
            Some(Ok(line)) => {
                debug!(?line, "received");
                if self.session.handle_line(line) == NextAction::StartIdle {
                    self.enter_idle().await?;
                }
                Ok(true)
            }
            Some(Err(e)) => {
                self.session.abort_pending();
                Err(e)
            }
            None => {
                info!("connection closed by server");
                self.session.abort_pending();
                Ok(false)
            }
        }
    }

    /// Puts the connection into its long-poll state so the server can push
    /// change notifications while nothing else is outstanding.
    async fn enter_idle(&mut self) -> Result<(), MpdError> {
        self.framed
            .send(WireRequest::Command {
                verb: CommandKind::Idle.verb(),
                args: Vec::new(),
            })
            .await?;
        self.session.push(Command::new(CommandKind::Idle, Vec::new()));
        Ok(())
    }

    /// Explicit teardown: best-effort `close` to the server, then every
    /// pending descriptor is discarded without dispatch.
    pub async fn close(&mut self) {
        let farewell = WireRequest::Command {
            verb: CommandKind::Close.verb(),
            args: Vec::new(),
        };
        if self.framed.send(farewell).await.is_err() {
            debug!("close command not delivered");
        }
        let _ = self.framed.close().await;
        self.session.abort_pending();
    }

    /// Drives the connection until the server hangs up, an I/O error
    /// occurs, or a `Close` request arrives. Requests and incoming lines
    /// are multiplexed on the same task; nothing else touches the socket.
    ///
    /// Only the cancel-safe read is raced in the select; routing and its
    /// follow-up writes run in the branch bodies, which a competing branch
    /// cannot cancel.
    pub async fn run(mut self, mut requests: mpsc::Receiver<Request>) -> Result<(), MpdError> {
        loop {
            tokio::select! {
                request = requests.recv() => match request {
                    Some(Request::Send { kind, args }) => {
                        let args: Vec<&str> = args.iter().map(String::as_str).collect();
                        match self.send(kind, &args).await {
                            Ok(()) => {}
                            Err(e @ MpdError::InvalidCommand(_)) => {
                                warn!(command = kind.verb(), error = %e, "send refused");
                            }
                            Err(e) => {
                                self.session.abort_pending();
                                return Err(e);
                            }
                        }
                    }
                    Some(Request::Register { kind, callback }) => self.register(kind, callback),
                    Some(Request::Close) | None => {
                        self.close().await;
                        return Ok(());
                    }
                },
                line = self.framed.next() => match self.route(line).await {
                    Ok(true) => {}
                    Ok(false) => return Ok(()),
                    Err(e) => return Err(e),
                },
            }
        }
    }
}

// src/main.rs

//! The demonstration binary: connects to a server, subscribes to status
//! and song answers, and logs change notifications until interrupted.

use anyhow::Result;
use cantata::client::{self, Connection};
use cantata::config::Config;
use cantata::core::{Answer, CommandKind};
use std::env;
use tracing::{error, info};
use tracing_subscriber::filter::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let args: Vec<String> = env::args().collect();

    if args.contains(&"--version".to_string()) {
        println!("cantata version {VERSION}");
        return Ok(());
    }

    // The configuration path can be provided via a --config flag;
    // otherwise it defaults to "cantata.toml".
    let config_path = args
        .iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
        .unwrap_or("cantata.toml");

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    let config = Config::from_file(config_path)?;
    info!(host = %config.host, port = config.port, "connecting");

    let mut connection = Connection::connect(&config.host, config.port).await?;

    connection.register(
        CommandKind::Status,
        Box::new(|_args, answer| {
            if let Answer::Status(status) = answer {
                info!(state = ?status.state, volume = ?status.volume, "status");
            }
        }),
    );
    connection.register(
        CommandKind::CurrentSong,
        Box::new(|_args, answer| {
            if let Answer::Song(Some(song)) = answer {
                info!(title = ?song.title, artist = ?song.artist, "current song");
            }
        }),
    );
    connection.register(
        CommandKind::PlaylistInfo,
        Box::new(|_args, answer| {
            if let Answer::Songs(list) = answer {
                info!(songs = list.songs().len(), "play queue");
            }
        }),
    );
    connection.register(
        CommandKind::Idle,
        Box::new(|_args, answer| {
            if let Answer::Idle(changed) = answer {
                info!(?changed, "server notification");
            }
        }),
    );

    let (handle, task) = client::spawn(connection);

    // The initial burst an interactive client issues on connect.
    handle.send(CommandKind::Status, &[]).await?;
    handle.send(CommandKind::PlaylistInfo, &[]).await?;
    handle.send(CommandKind::CurrentSong, &[]).await?;

    tokio::select! {
        result = task => {
            if let Ok(Err(e)) = result {
                error!("connection error: {e}");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted, closing connection");
            let _ = handle.close().await;
        }
    }

    Ok(())
}

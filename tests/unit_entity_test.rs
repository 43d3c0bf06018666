use cantata::core::entity::{IdleSubsystems, PlayState, Song, SongList, Stats, Status};
use cantata::core::protocol::Pair;

#[test]
fn test_song_is_first_write_wins() {
    let mut song = Song::default();
    assert!(song.absorb(&Pair::new("Title", "first")));
    assert!(!song.absorb(&Pair::new("Title", "second")));
    assert_eq!(song.title.as_deref(), Some("first"));
}

#[test]
fn test_song_ignores_unmodeled_tags() {
    let mut song = Song::default();
    assert!(song.absorb(&Pair::new("MUSICBRAINZ_TRACKID", "xyz")));
    assert!(song.absorb(&Pair::new("MUSICBRAINZ_TRACKID", "xyz")));
}

#[test]
fn test_song_numeric_fields() {
    let mut song = Song::default();
    song.absorb(&Pair::new("Time", "185"));
    song.absorb(&Pair::new("duration", "184.855"));
    song.absorb(&Pair::new("Pos", "3"));
    song.absorb(&Pair::new("Id", "27"));
    assert_eq!(song.time, Some(185));
    assert_eq!(song.duration, Some(184.855));
    assert_eq!(song.pos, Some(3));
    assert_eq!(song.id, Some(27));
}

#[test]
fn test_song_list_flush_is_idempotent() {
    let mut list = SongList::default();
    list.absorb(&Pair::new("file", "a.flac"));
    list.flush();
    list.flush();
    assert_eq!(list.songs().len(), 1);
}

#[test]
fn test_status_is_last_write_wins() {
    let mut status = Status::default();
    status.absorb(&Pair::new("volume", "50"));
    status.absorb(&Pair::new("volume", "60"));
    assert_eq!(status.volume, Some(60));
}

#[test]
fn test_status_fields() {
    let mut status = Status::default();
    for (name, value) in [
        ("volume", "80"),
        ("repeat", "1"),
        ("random", "0"),
        ("playlist", "31"),
        ("playlistlength", "12"),
        ("state", "play"),
        ("song", "3"),
        ("songid", "27"),
        ("time", "93:185"),
        ("elapsed", "92.648"),
        ("bitrate", "1017"),
        ("xfade", "2"),
        ("audio", "44100:16:2"),
    ] {
        status.absorb(&Pair::new(name, value));
    }
    assert_eq!(status.volume, Some(80));
    assert!(status.repeat);
    assert!(!status.random);
    assert_eq!(status.playlist_version, Some(31));
    assert_eq!(status.playlist_length, Some(12));
    assert_eq!(status.state, Some(PlayState::Play));
    assert_eq!(status.song, Some(3));
    assert_eq!(status.song_id, Some(27));
    assert_eq!(status.time, Some((93, 185)));
    assert_eq!(status.elapsed, Some(92.648));
    assert_eq!(status.bitrate, Some(1017));
    assert_eq!(status.crossfade, Some(2));
    assert_eq!(status.audio.as_deref(), Some("44100:16:2"));
}

#[test]
fn test_status_unknown_state_stays_unset() {
    let mut status = Status::default();
    status.absorb(&Pair::new("state", "warble"));
    assert_eq!(status.state, None);
}

#[test]
fn test_idle_subsystems_use_the_wire_vocabulary() {
    // The `changed:` values are lowercase protocol tokens, not the flag
    // identifiers.
    assert_eq!(
        IdleSubsystems::from_changed("player"),
        Some(IdleSubsystems::PLAYER)
    );
    assert_eq!(
        IdleSubsystems::from_changed("stored_playlist"),
        Some(IdleSubsystems::STORED_PLAYLIST)
    );
    assert_eq!(IdleSubsystems::from_changed("PLAYER"), None);
    assert_eq!(IdleSubsystems::from_changed("flux_capacitor"), None);
}

#[test]
fn test_stats_fields() {
    let mut stats = Stats::default();
    for (name, value) in [
        ("artists", "64"),
        ("albums", "128"),
        ("songs", "1024"),
        ("uptime", "3600"),
        ("db_playtime", "250000"),
        ("db_update", "1700000000"),
        ("playtime", "7200"),
    ] {
        stats.absorb(&Pair::new(name, value));
    }
    assert_eq!(stats.artists, Some(64));
    assert_eq!(stats.albums, Some(128));
    assert_eq!(stats.songs, Some(1024));
    assert_eq!(stats.uptime, Some(3600));
    assert_eq!(stats.db_playtime, Some(250_000));
    assert_eq!(stats.db_update, Some(1_700_000_000));
    assert_eq!(stats.playtime, Some(7200));
}

use cantata::core::entity::{Entity, IdleSubsystems};
use cantata::core::protocol::Pair;
use cantata::core::{Answer, Command, CommandKind};

#[test]
fn test_verbs_match_the_wire_vocabulary() {
    assert_eq!(CommandKind::CurrentSong.verb(), "currentsong");
    assert_eq!(CommandKind::SeekCur.verb(), "seekcur");
    assert_eq!(CommandKind::SetVol.verb(), "setvol");
    assert_eq!(CommandKind::PlaylistInfo.verb(), "playlistinfo");
    assert_eq!(CommandKind::LsInfo.verb(), "lsinfo");
    assert_eq!(CommandKind::FindAdd.verb(), "findadd");
    assert_eq!(CommandKind::RemovePlaylist.verb(), "rm");
    assert_eq!(CommandKind::Previous.verb(), "previous");
}

#[test]
fn test_factory_binds_answer_shape_by_kind() {
    assert!(matches!(
        Command::new(CommandKind::Status, Vec::new()).answer(),
        Answer::Status(_)
    ));
    assert!(matches!(
        Command::new(CommandKind::CurrentSong, Vec::new()).answer(),
        Answer::Song(None)
    ));
    assert!(matches!(
        Command::new(CommandKind::Idle, Vec::new()).answer(),
        Answer::Idle(_)
    ));
    assert!(matches!(
        Command::new(CommandKind::Find, Vec::new()).answer(),
        Answer::Songs(_)
    ));
    assert!(matches!(
        Command::new(CommandKind::Play, Vec::new()).answer(),
        Answer::None
    ));
}

#[test]
fn test_payload_free_command_rejects_pairs() {
    let mut command = Command::new(CommandKind::Play, Vec::new());
    assert!(!command.consume_pair(&Pair::new("volume", "50")));
}

#[test]
fn test_single_song_accumulates_fields() {
    let mut command = Command::new(CommandKind::CurrentSong, Vec::new());
    assert!(command.consume_pair(&Pair::new("file", "a.flac")));
    assert!(command.consume_pair(&Pair::new("Title", "A")));
    command.finalize();
    let Answer::Song(Some(song)) = command.answer() else {
        panic!("expected song answer");
    };
    assert_eq!(song.file.as_deref(), Some("a.flac"));
    assert_eq!(song.title.as_deref(), Some("A"));
}

#[test]
fn test_song_list_splits_on_repeated_field() {
    // Two songs with no delimiter between them: the second `Name` pair
    // collides with the first song and opens a new record.
    let mut command = Command::new(CommandKind::PlaylistInfo, Vec::new());
    command.consume_pair(&Pair::new("Name", "A"));
    command.consume_pair(&Pair::new("Name", "B"));
    command.finalize();
    let Answer::Songs(list) = command.answer() else {
        panic!("expected song list");
    };
    let songs = list.songs();
    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0].name.as_deref(), Some("A"));
    assert_eq!(songs[1].name.as_deref(), Some("B"));
}

#[test]
fn test_song_list_full_records() {
    let mut command = Command::new(CommandKind::PlaylistInfo, Vec::new());
    for (name, value) in [
        ("file", "a.flac"),
        ("Title", "A"),
        ("Pos", "0"),
        ("Id", "11"),
        ("file", "b.flac"),
        ("Title", "B"),
        ("Pos", "1"),
        ("Id", "12"),
    ] {
        command.consume_pair(&Pair::new(name, value));
    }
    command.finalize();
    let Answer::Songs(list) = command.answer() else {
        panic!("expected song list");
    };
    assert_eq!(list.songs().len(), 2);
    assert_eq!(list.songs()[1].pos, Some(1));
    assert_eq!(list.songs()[1].id, Some(12));
}

#[test]
fn test_idle_accumulates_bitmask() {
    let mut command = Command::new(CommandKind::Idle, Vec::new());
    assert!(command.consume_pair(&Pair::new("changed", "player")));
    assert!(command.consume_pair(&Pair::new("changed", "mixer")));
    command.finalize();
    let Answer::Idle(mask) = command.answer() else {
        panic!("expected idle answer");
    };
    assert_eq!(*mask, IdleSubsystems::PLAYER | IdleSubsystems::MIXER);
}

#[test]
fn test_idle_ignores_unknown_subsystem() {
    let mut command = Command::new(CommandKind::Idle, Vec::new());
    command.consume_pair(&Pair::new("changed", "player"));
    assert!(command.consume_pair(&Pair::new("changed", "flux_capacitor")));
    command.consume_pair(&Pair::new("changed", "mixer"));
    let Answer::Idle(mask) = command.answer() else {
        panic!("expected idle answer");
    };
    assert_eq!(*mask, IdleSubsystems::PLAYER | IdleSubsystems::MIXER);
}

#[test]
fn test_idle_rejects_non_changed_pair() {
    let mut command = Command::new(CommandKind::Idle, Vec::new());
    assert!(!command.consume_pair(&Pair::new("volume", "50")));
}

#[test]
fn test_listing_segments_mixed_entities() {
    let mut command = Command::new(CommandKind::LsInfo, Vec::new());
    for (name, value) in [
        ("directory", "Albums"),
        ("Last-Modified", "2024-01-01T00:00:00Z"),
        ("file", "a.flac"),
        ("Title", "A"),
        ("playlist", "favourites"),
        ("Last-Modified", "2024-02-02T00:00:00Z"),
    ] {
        command.consume_pair(&Pair::new(name, value));
    }
    command.finalize();
    let Answer::Entities(list) = command.answer() else {
        panic!("expected entity list");
    };
    let entities = list.entities();
    assert_eq!(entities.len(), 3);
    let Entity::Directory(dir) = &entities[0] else {
        panic!("expected directory first");
    };
    assert_eq!(dir.path, "Albums");
    assert_eq!(dir.last_modified.as_deref(), Some("2024-01-01T00:00:00Z"));
    let Entity::Song(song) = &entities[1] else {
        panic!("expected song second");
    };
    assert_eq!(song.title.as_deref(), Some("A"));
    let Entity::Playlist(playlist) = &entities[2] else {
        panic!("expected playlist third");
    };
    assert_eq!(playlist.path, "favourites");
}

#[test]
fn test_tag_listing_collects_values() {
    let mut command = Command::new(CommandKind::List, vec!["Artist".to_string()]);
    command.consume_pair(&Pair::new("Artist", "Abbess"));
    command.consume_pair(&Pair::new("Artist", "Bel Canto"));
    command.finalize();
    let Answer::Tags(list) = command.answer() else {
        panic!("expected tag list");
    };
    let values = list.values();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].tag, "Artist");
    assert_eq!(values[0].value, "Abbess");
    assert_eq!(values[1].value, "Bel Canto");
}

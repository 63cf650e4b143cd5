use std::path::Path;

use super::{NowPlaying, TagError, TagSnapshot, display_for};

fn full_snapshot() -> TagSnapshot {
    TagSnapshot {
        title: Some("Waltz No. 2".into()),
        artist: Some("Shostakovich".into()),
        artwork: Some(vec![0xFF, 0xD8]),
    }
}

#[test]
fn tagged_file_displays_tag_fields() {
    let np = display_for(Path::new("/music/waltz.mp3"), Ok(full_snapshot()));
    assert_eq!(np.title, "Waltz No. 2");
    assert_eq!(np.artist, "Shostakovich");
    assert_eq!(np.artwork, Some(vec![0xFF, 0xD8]));
}

#[test]
fn absent_tag_falls_back_to_file_name_for_both_fields() {
    let np = display_for(Path::new("/music/waltz.mp3"), Ok(TagSnapshot::default()));
    // Both fields fall back to the same raw file name, extension included.
    assert_eq!(np.title, "waltz.mp3");
    assert_eq!(np.artist, "waltz.mp3");
    assert_eq!(np.artwork, None);
}

#[test]
fn failed_read_renders_like_absent_tag() {
    let err = TagError::Read(id3::Error::new(
        id3::ErrorKind::Parsing,
        "truncated frame",
    ));
    let np = display_for(Path::new("/music/broken.mp3"), Err(err));
    assert_eq!(np.title, "broken.mp3");
    assert_eq!(np.artist, "broken.mp3");
    assert_eq!(np.artwork, None);
}

#[test]
fn partial_tag_mixes_fields_and_fallback() {
    let snapshot = TagSnapshot {
        title: Some("Waltz No. 2".into()),
        artist: None,
        artwork: None,
    };
    let np: NowPlaying = display_for(Path::new("/music/waltz.mp3"), Ok(snapshot));
    assert_eq!(np.title, "Waltz No. 2");
    assert_eq!(np.artist, "waltz.mp3");
}

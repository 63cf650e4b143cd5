use std::path::PathBuf;

use super::Playlist;

fn p(name: &str) -> PathBuf {
    PathBuf::from(format!("/music/{name}"))
}

#[test]
fn append_keeps_call_order_and_assigns_one_based_ordinals() {
    let mut pl = Playlist::new();
    pl.append(p("a.mp3"));
    pl.append(p("b.mp3"));
    pl.append(p("a.mp3")); // duplicates allowed

    let ordinals: Vec<u64> = pl.entries().map(|e| e.ordinal).collect();
    assert_eq!(ordinals, vec![1, 2, 3]);

    let names: Vec<String> = pl.entries().map(|e| e.label()).collect();
    assert_eq!(names, vec!["1. a.mp3", "2. b.mp3", "3. a.mp3"]);
}

#[test]
fn ordinals_keep_increasing_across_playback_interleaving() {
    let mut pl = Playlist::new();
    pl.append(p("a.mp3"));
    pl.advance(1);
    pl.append(p("b.mp3"));
    pl.set_cursor(1);
    pl.append(p("c.mp3"));

    let ordinals: Vec<u64> = pl.entries().map(|e| e.ordinal).collect();
    assert_eq!(ordinals, vec![1, 2, 3]);
}

#[test]
fn first_append_sets_cursor_and_reports_it() {
    let mut pl = Playlist::new();
    assert_eq!(pl.cursor(), None);

    assert!(pl.append(p("a.mp3")));
    assert_eq!(pl.cursor(), Some(0));

    // Later appends never move the cursor.
    assert!(!pl.append(p("b.mp3")));
    assert_eq!(pl.cursor(), Some(0));
}

#[test]
fn advance_wraps_forward_and_back() {
    let mut pl = Playlist::new();
    for name in ["a.mp3", "b.mp3", "c.mp3"] {
        pl.append(p(name));
    }

    assert_eq!(pl.advance(1), Some(1));
    assert_eq!(pl.advance(1), Some(2));
    assert_eq!(pl.advance(1), Some(0)); // wrap forward

    assert_eq!(pl.advance(-1), Some(2)); // wrap backward
}

#[test]
fn advancing_len_times_returns_to_start() {
    let mut pl = Playlist::new();
    for i in 0..5 {
        pl.append(p(&format!("{i}.mp3")));
    }
    pl.set_cursor(2);

    for _ in 0..pl.len() {
        pl.advance(1);
    }
    assert_eq!(pl.cursor(), Some(2));

    for _ in 0..pl.len() {
        pl.advance(-1);
    }
    assert_eq!(pl.cursor(), Some(2));
}

#[test]
fn advance_on_empty_is_a_noop() {
    let mut pl = Playlist::new();
    assert_eq!(pl.advance(1), None);
    assert_eq!(pl.advance(-1), None);
    assert_eq!(pl.cursor(), None);
}

#[test]
fn set_cursor_is_bounds_checked() {
    let mut pl = Playlist::new();
    pl.append(p("a.mp3"));

    assert!(pl.set_cursor(0).is_some());
    assert!(pl.set_cursor(1).is_none());
    assert_eq!(pl.cursor(), Some(0));
}

#[test]
fn get_and_current_are_bounds_checked_reads() {
    let mut pl = Playlist::new();
    assert!(pl.current().is_none());

    pl.append(p("a.mp3"));
    pl.append(p("b.mp3"));

    assert_eq!(pl.get(1).unwrap().ordinal, 2);
    assert!(pl.get(2).is_none());
    assert_eq!(pl.current().unwrap().ordinal, 1);
}

// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests driving the application update loop directly, the same
//! way the runtime delivers messages.

use iced::Point;
use iced_gallery::app::{App, Message};
use iced_gallery::config::SortOrder;
use iced_gallery::gallery::Gallery;
use iced_gallery::lightbox::Intent;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::{tempdir, TempDir};

fn create_test_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"fake image data").expect("failed to write test file");
    path
}

/// Builds an app with a three-image gallery (a.jpg, b.jpg, c.jpg) loaded.
fn app_with_gallery() -> (App, TempDir, Vec<PathBuf>) {
    let dir = tempdir().expect("failed to create temp dir");
    let paths = vec![
        create_test_image(dir.path(), "a.jpg"),
        create_test_image(dir.path(), "b.jpg"),
        create_test_image(dir.path(), "c.jpg"),
    ];

    let gallery =
        Gallery::scan_directory(dir.path(), SortOrder::Alphabetical).expect("scan failed");

    let mut app = App::default();
    let _ = app.update(Message::GalleryScanCompleted(Ok(gallery)));
    (app, dir, paths)
}

#[test]
fn opening_a_trigger_shows_its_content() {
    let (mut app, _dir, paths) = app_with_gallery();

    let _ = app.update(Message::Intent(Intent::Open(1)));

    assert!(app.lightbox().is_visible());
    let content = app.lightbox().content().expect("content missing");
    assert_eq!(content.source, paths[1]);
    assert_eq!(content.caption, "b");
}

#[test]
fn close_hides_but_content_stays_stale() {
    let (mut app, _dir, paths) = app_with_gallery();

    let _ = app.update(Message::Intent(Intent::Open(1)));
    let _ = app.update(Message::Intent(Intent::Close));

    assert!(!app.lightbox().is_visible());
    let content = app.lightbox().content().expect("content missing");
    assert_eq!(content.source, paths[1]);
}

#[test]
fn double_close_is_idempotent() {
    let (mut app, _dir, _paths) = app_with_gallery();

    let _ = app.update(Message::Intent(Intent::Open(0)));
    let _ = app.update(Message::Intent(Intent::Close));
    let _ = app.update(Message::Intent(Intent::Close));

    assert!(!app.lightbox().is_visible());
    assert!(!app.autoplay().is_running());
}

#[test]
fn out_of_range_trigger_is_ignored() {
    let (mut app, _dir, _paths) = app_with_gallery();

    let _ = app.update(Message::Intent(Intent::Open(42)));

    assert!(!app.lightbox().is_visible());
    assert_eq!(app.lightbox().content(), None);
}

#[test]
fn navigation_while_hidden_is_a_no_op() {
    let (mut app, _dir, _paths) = app_with_gallery();

    let _ = app.update(Message::Intent(Intent::Next));
    let _ = app.update(Message::Intent(Intent::Previous));

    assert!(!app.lightbox().is_visible());
    assert_eq!(app.lightbox().content(), None);
}

#[test]
fn next_and_previous_follow_gallery_order_with_wrap_around() {
    let (mut app, _dir, paths) = app_with_gallery();

    let _ = app.update(Message::Intent(Intent::Open(2)));
    let _ = app.update(Message::Intent(Intent::Next));
    assert_eq!(
        app.lightbox().content().map(|c| c.source.clone()),
        Some(paths[0].clone())
    );

    let _ = app.update(Message::Intent(Intent::Previous));
    assert_eq!(
        app.lightbox().content().map(|c| c.source.clone()),
        Some(paths[2].clone())
    );
}

#[test]
fn opening_starts_the_slideshow() {
    let (mut app, _dir, _paths) = app_with_gallery();

    assert!(!app.autoplay().is_running());
    let _ = app.update(Message::Intent(Intent::Open(0)));
    assert!(app.autoplay().is_running());
}

#[test]
fn surface_click_toggles_the_slideshow_off_the_timer_state() {
    let (mut app, _dir, _paths) = app_with_gallery();
    let _ = app.update(Message::Intent(Intent::Open(0)));

    let _ = app.update(Message::SurfacePressed);
    assert!(!app.autoplay().is_running());

    let _ = app.update(Message::SurfacePressed);
    assert!(app.autoplay().is_running());
}

#[test]
fn hover_pauses_and_resumes_the_slideshow() {
    let (mut app, _dir, _paths) = app_with_gallery();
    let _ = app.update(Message::Intent(Intent::Open(0)));

    let _ = app.update(Message::Intent(Intent::Pause));
    assert!(!app.autoplay().is_running());

    let _ = app.update(Message::Intent(Intent::Resume));
    assert!(app.autoplay().is_running());
}

#[test]
fn auto_advance_tick_moves_to_the_next_image() {
    let (mut app, _dir, paths) = app_with_gallery();
    let _ = app.update(Message::Intent(Intent::Open(0)));

    let _ = app.update(Message::AutoAdvanceTick(Instant::now()));
    assert_eq!(
        app.lightbox().content().map(|c| c.source.clone()),
        Some(paths[1].clone())
    );
}

#[test]
fn auto_advance_tick_after_close_changes_nothing() {
    let (mut app, _dir, paths) = app_with_gallery();
    let _ = app.update(Message::Intent(Intent::Open(0)));
    let _ = app.update(Message::Intent(Intent::Close));

    let _ = app.update(Message::AutoAdvanceTick(Instant::now()));

    assert!(!app.lightbox().is_visible());
    assert_eq!(
        app.lightbox().content().map(|c| c.source.clone()),
        Some(paths[0].clone())
    );
}

#[test]
fn a_left_swipe_advances_and_a_short_swipe_does_not() {
    let (mut app, _dir, paths) = app_with_gallery();
    let _ = app.update(Message::Intent(Intent::Open(0)));

    let _ = app.update(Message::TouchBegan(Point::new(200.0, 10.0)));
    let _ = app.update(Message::TouchEnded(Point::new(80.0, 12.0)));
    assert_eq!(
        app.lightbox().content().map(|c| c.source.clone()),
        Some(paths[1].clone())
    );

    let _ = app.update(Message::TouchBegan(Point::new(200.0, 10.0)));
    let _ = app.update(Message::TouchEnded(Point::new(180.0, 10.0)));
    assert_eq!(
        app.lightbox().content().map(|c| c.source.clone()),
        Some(paths[1].clone())
    );
}

#[test]
fn a_cancelled_touch_leaves_no_gesture_behind() {
    let (mut app, _dir, paths) = app_with_gallery();
    let _ = app.update(Message::Intent(Intent::Open(0)));

    let _ = app.update(Message::TouchBegan(Point::new(200.0, 10.0)));
    let _ = app.update(Message::TouchCancelled);
    let _ = app.update(Message::TouchEnded(Point::new(0.0, 10.0)));

    assert_eq!(
        app.lightbox().content().map(|c| c.source.clone()),
        Some(paths[0].clone())
    );
}

#[test]
fn scroll_offset_is_tracked_and_reset_by_a_new_scan() {
    let (mut app, dir, _paths) = app_with_gallery();

    let _ = app.update(Message::GalleryScrolled(
        iced::widget::scrollable::AbsoluteOffset { x: 0.0, y: 140.0 },
    ));
    assert_eq!(app.scroll_offset(), 140.0);

    let gallery =
        Gallery::scan_directory(dir.path(), SortOrder::Alphabetical).expect("scan failed");
    let _ = app.update(Message::GalleryScanCompleted(Ok(gallery)));
    assert_eq!(app.scroll_offset(), 0.0);
}

#[test]
fn failed_scan_keeps_the_previous_gallery() {
    let (mut app, _dir, _paths) = app_with_gallery();

    let result = Gallery::scan_directory(Path::new("/definitely/not/here"), SortOrder::Newest);
    let _ = app.update(Message::GalleryScanCompleted(result));

    assert_eq!(app.gallery().len(), 3);
}

#[test]
fn tagline_reveals_then_rotates() {
    let (mut app, _dir, _paths) = app_with_gallery();

    assert_eq!(app.tagline().current(), None);
    let _ = app.update(Message::TaglineRevealed);
    let first = app.tagline().current().expect("tagline hidden");

    let _ = app.update(Message::TaglineTick(Instant::now()));
    let second = app.tagline().current().expect("tagline hidden");
    assert_ne!(first, second);
}

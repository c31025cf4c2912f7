// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay state.
//!
//! The lightbox is a singleton surface with two states, hidden and visible,
//! plus a current-content slot. Content is only ever assigned while
//! transitioning to visible; closing hides the surface but deliberately
//! leaves the previous content in place until the next open.

pub mod autoplay;
pub mod gesture;

pub use autoplay::AutoAdvance;
pub use gesture::{classify_swipe, SwipeTracker};

use crate::gallery::GalleryItem;
use std::path::PathBuf;

/// The content currently occupying the lightbox: image source and caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub source: PathBuf,
    pub caption: String,
}

/// A normalized user action, independent of the input channel (pointer
/// click, key press, swipe, hover) that produced it. Consumed immediately
/// by the application update loop; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Open the lightbox on the gallery item at this index.
    Open(usize),
    Next,
    Previous,
    Close,
    Pause,
    Resume,
}

/// The modal overlay surface. Hidden by default; returns to hidden only
/// through an explicit close.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    visible: bool,
    content: Option<Content>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the content slot with the item's reference and shows the
    /// surface. Opening while already visible just swaps the content. The
    /// path is not validated here; a broken reference fails silently at the
    /// rendering layer.
    pub fn open(&mut self, item: &GalleryItem) {
        self.content = Some(Content {
            source: item.path.clone(),
            caption: item.caption.clone(),
        });
        self.visible = true;
    }

    /// Hides the surface. The content slot is intentionally left as-is;
    /// stale content is acceptable until the next open. Idempotent.
    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> GalleryItem {
        GalleryItem {
            path: PathBuf::from(format!("/photos/{}.jpg", name)),
            caption: name.to_string(),
        }
    }

    #[test]
    fn lightbox_starts_hidden_and_empty() {
        let lightbox = Lightbox::new();
        assert!(!lightbox.is_visible());
        assert_eq!(lightbox.content(), None);
    }

    #[test]
    fn open_sets_content_and_visibility_together() {
        let mut lightbox = Lightbox::new();
        lightbox.open(&item("sunset"));

        assert!(lightbox.is_visible());
        let content = lightbox.content().expect("content missing");
        assert_eq!(content.source, PathBuf::from("/photos/sunset.jpg"));
        assert_eq!(content.caption, "sunset");
    }

    #[test]
    fn close_hides_but_keeps_stale_content() {
        let mut lightbox = Lightbox::new();
        lightbox.open(&item("sunset"));
        lightbox.close();

        assert!(!lightbox.is_visible());
        assert_eq!(
            lightbox.content().map(|c| c.caption.as_str()),
            Some("sunset")
        );
    }

    #[test]
    fn close_is_idempotent() {
        let mut lightbox = Lightbox::new();
        lightbox.open(&item("sunset"));
        lightbox.close();
        let after_one = lightbox.clone();
        lightbox.close();
        assert_eq!(lightbox, after_one);
    }

    #[test]
    fn open_while_visible_replaces_content() {
        let mut lightbox = Lightbox::new();
        lightbox.open(&item("sunset"));
        lightbox.open(&item("harbor"));

        assert!(lightbox.is_visible());
        assert_eq!(
            lightbox.content().map(|c| c.caption.as_str()),
            Some("harbor")
        );
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::Gallery;
use crate::lightbox::Intent;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Point;
use std::path::PathBuf;
use std::time::Instant;

/// Messages consumed by `App::update`. Input channels that map one-to-one
/// onto a normalized intent carry it directly; channels that need per-event
/// state (touch) or a state-dependent decision (click-to-toggle) get their
/// own variant and are normalized inside the update loop.
#[derive(Debug, Clone)]
pub enum Message {
    /// A normalized user action from any input channel.
    Intent(Intent),
    /// Click on the lightbox image surface: toggles auto-advance, keyed off
    /// the timer's current running state.
    SurfacePressed,
    /// A finger went down on the lightbox at this position.
    TouchBegan(Point),
    /// A finger lifted at this position, completing a potential swipe.
    TouchEnded(Point),
    /// The touch sequence was lost; drop the in-flight gesture.
    TouchCancelled,
    /// Auto-advance timer tick.
    AutoAdvanceTick(Instant),
    /// Tagline rotation timer tick.
    TaglineTick(Instant),
    /// One-shot startup delay elapsed; show the tagline.
    TaglineRevealed,
    /// The gallery scrollable moved.
    GalleryScrolled(AbsoluteOffset),
    /// Back-to-top control pressed.
    BackToTopPressed,
    /// Result of the startup (or folder-picker) directory scan.
    GalleryScanCompleted(Result<Gallery, Error>),
    /// Open the folder picker from the empty state.
    OpenFolderDialog,
    /// Result from the folder picker.
    FolderSelected(Option<PathBuf>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Directory to scan for images at startup.
    pub directory: Option<PathBuf>,
    /// Override for the slideshow interval, in seconds.
    pub interval_secs: Option<u64>,
}

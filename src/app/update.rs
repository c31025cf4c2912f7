// SPDX-License-Identifier: MPL-2.0
//! Update logic: message handling and intent application.

use super::{App, Message};
use crate::gallery::Gallery;
use crate::lightbox::Intent;
use crate::ui::grid;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Intent(intent) => self.apply_intent(intent),
            Message::SurfacePressed => {
                // Toggle keyed off the timer's current state, not a flag.
                let intent = if self.autoplay.is_running() {
                    Intent::Pause
                } else {
                    Intent::Resume
                };
                self.apply_intent(intent)
            }
            Message::TouchBegan(position) => {
                // A new touch-start overwrites any stale accumulator.
                self.swipe.begin(position);
                Task::none()
            }
            Message::TouchEnded(position) => match self.swipe.finish(position) {
                Some(intent) => self.apply_intent(intent),
                None => Task::none(),
            },
            Message::TouchCancelled => {
                self.swipe.cancel();
                Task::none()
            }
            Message::AutoAdvanceTick(_) => {
                if self.lightbox.is_visible() && self.autoplay.is_running() {
                    self.apply_intent(Intent::Next)
                } else {
                    Task::none()
                }
            }
            Message::TaglineTick(_) => {
                self.tagline.advance();
                Task::none()
            }
            Message::TaglineRevealed => {
                self.tagline.reveal();
                Task::none()
            }
            Message::GalleryScrolled(offset) => {
                self.scroll_offset = offset.y;
                Task::none()
            }
            Message::BackToTopPressed => operation::snap_to(
                Id::new(grid::GALLERY_SCROLL_ID),
                RelativeOffset { x: 0.0, y: 0.0 },
            ),
            Message::GalleryScanCompleted(Ok(gallery)) => {
                self.gallery = gallery;
                self.scroll_offset = 0.0;
                Task::none()
            }
            Message::GalleryScanCompleted(Err(error)) => {
                // Non-fatal: the empty state stays up and the rest of the
                // application keeps working.
                eprintln!("Gallery scan failed: {}", error);
                Task::none()
            }
            Message::OpenFolderDialog => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_title("Choose an image folder")
                        .pick_folder()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::FolderSelected,
            ),
            Message::FolderSelected(Some(directory)) => {
                let sort_order = self.sort_order;
                Task::perform(
                    async move { Gallery::scan_directory(&directory, sort_order) },
                    Message::GalleryScanCompleted,
                )
            }
            Message::FolderSelected(None) => Task::none(),
        }
    }

    /// Applies a normalized intent to the lightbox and timer state. This is
    /// the single place where visibility and content change.
    fn apply_intent(&mut self, intent: Intent) -> Task<Message> {
        match intent {
            Intent::Open(index) => {
                if let Some(item) = self.gallery.select(index) {
                    self.lightbox.open(item);
                    self.autoplay.start();
                }
            }
            Intent::Next => {
                if self.lightbox.is_visible() {
                    if let Some(item) = self.gallery.advance_next() {
                        self.lightbox.open(item);
                    }
                }
            }
            Intent::Previous => {
                if self.lightbox.is_visible() {
                    if let Some(item) = self.gallery.advance_previous() {
                        self.lightbox.open(item);
                    }
                }
            }
            Intent::Close => {
                self.lightbox.close();
                self.autoplay.stop();
            }
            Intent::Pause => self.autoplay.stop(),
            Intent::Resume => self.autoplay.start(),
        }
        Task::none()
    }
}

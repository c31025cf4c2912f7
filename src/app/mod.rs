// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the gallery (the trigger collection, captured once
//! at startup), the lightbox overlay, the gesture accumulator, and the
//! auto-advance timer state, and translates messages into state
//! transitions. All input channels are normalized into intents before they
//! touch the lightbox, so keyboard, swipe, and pointer input share one code
//! path.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, SortOrder, DEFAULT_SLIDE_INTERVAL_SECS};
use crate::gallery::Gallery;
use crate::lightbox::{AutoAdvance, Lightbox, SwipeTracker};
use crate::ui::navbar::{self, Tagline};
use crate::ui::theme::ThemeMode;
use iced::{window, Task, Theme};
use std::time::Duration;

const WINDOW_DEFAULT_WIDTH: f32 = 1000.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 700.0;
const MIN_WINDOW_WIDTH: f32 = 480.0;
const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    gallery: Gallery,
    lightbox: Lightbox,
    swipe: SwipeTracker,
    autoplay: AutoAdvance,
    tagline: Tagline,
    /// Vertical offset of the gallery scrollable, tracked for the header
    /// shrink and the back-to-top reveal.
    scroll_offset: f32,
    theme_mode: ThemeMode,
    sort_order: SortOrder,
}

impl Default for App {
    fn default() -> Self {
        Self {
            gallery: Gallery::new(),
            lightbox: Lightbox::new(),
            swipe: SwipeTracker::new(),
            autoplay: AutoAdvance::new(Duration::from_secs(DEFAULT_SLIDE_INTERVAL_SECS)),
            tagline: Tagline::new(),
            scroll_offset: 0.0,
            theme_mode: ThemeMode::System,
            sort_order: SortOrder::Alphabetical,
        }
    }
}

impl App {
    /// Initializes application state from config and flags, and kicks off
    /// the startup directory scan and the delayed tagline reveal.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|e| {
            eprintln!("Failed to load configuration, using defaults: {}", e);
            config::Config::default()
        });

        let interval_secs = flags
            .interval_secs
            .or(config.slide_interval_secs)
            .unwrap_or(DEFAULT_SLIDE_INTERVAL_SECS)
            .max(1);

        let app = App {
            autoplay: AutoAdvance::new(Duration::from_secs(interval_secs)),
            theme_mode: config.theme.unwrap_or_default(),
            sort_order: config.sort_order.unwrap_or_default(),
            ..Self::default()
        };

        let reveal = Task::perform(
            tokio::time::sleep(navbar::TAGLINE_REVEAL_DELAY),
            |_| Message::TaglineRevealed,
        );

        let scan = match flags.directory {
            Some(directory) => {
                let sort_order = app.sort_order;
                Task::perform(
                    async move { Gallery::scan_directory(&directory, sort_order) },
                    Message::GalleryScanCompleted,
                )
            }
            None => Task::none(),
        };

        (app, Task::batch([reveal, scan]))
    }

    pub fn title(&self) -> String {
        String::from("Iced Gallery")
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn autoplay(&self) -> &AutoAdvance {
        &self.autoplay
    }

    pub fn tagline(&self) -> &Tagline {
        &self.tagline
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

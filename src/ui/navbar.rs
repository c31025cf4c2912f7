// SPDX-License-Identifier: MPL-2.0
//! Header bar with the application title and a rotating tagline.
//!
//! The bar renders in a compact form once the gallery has been scrolled
//! past [`COMPACT_SCROLL_OFFSET`]. The tagline stays hidden for a short
//! moment after startup, then alternates between two lines on a fixed
//! cadence driven by a timer subscription owned by the application.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};
use std::time::Duration;

/// Scroll offset (logical pixels) past which the header shrinks.
pub const COMPACT_SCROLL_OFFSET: f32 = 100.0;

/// Cadence of the tagline rotation.
pub const TAGLINE_INTERVAL: Duration = Duration::from_secs(4);

/// Delay before the tagline is first revealed after startup.
pub const TAGLINE_REVEAL_DELAY: Duration = Duration::from_millis(2500);

const TAGLINES: [&str; 2] = [
    "A folder of pictures, one lightbox away",
    "Arrow keys, swipes, and slideshows",
];

/// Which tagline is showing, and whether any is showing at all yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tagline {
    revealed: bool,
    alternate: bool,
}

impl Tagline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Makes the tagline visible, starting on the first line.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Swaps to the other line. Ignored until the tagline is revealed.
    pub fn advance(&mut self) {
        if self.revealed {
            self.alternate = !self.alternate;
        }
    }

    /// The line to display, or `None` before the initial reveal.
    pub fn current(&self) -> Option<&'static str> {
        if self.revealed {
            Some(if self.alternate {
                TAGLINES[1]
            } else {
                TAGLINES[0]
            })
        } else {
            None
        }
    }
}

/// Renders the header. Emits no messages of its own.
pub fn view<'a, Message: 'a>(compact: bool, tagline: &Tagline) -> Element<'a, Message> {
    let title_size = if compact {
        typography::TITLE_SM
    } else {
        typography::TITLE_LG
    };
    let padding = if compact { spacing::XS } else { spacing::LG };

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new("Iced Gallery").size(title_size));

    // The compact header drops the tagline entirely.
    if !compact {
        if let Some(line) = tagline.current() {
            column = column.push(Text::new(line).size(typography::BODY));
        }
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(padding)
        .style(styles::container_navbar)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Scrollable thumbnail grid.
//!
//! Each thumbnail is a trigger for the lightbox: pressing it emits
//! `Intent::Open` with the item's position in the gallery order. The grid
//! reports its scroll offset so the application can shrink the header and
//! reveal the back-to-top control; the control itself is simply not
//! rendered while below the reveal threshold.

use crate::app::Message;
use crate::gallery::GalleryItem;
use crate::lightbox::Intent;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::{Scrollable, Viewport};
use iced::widget::{button, stack, Column, Container, Row, Text};
use iced::{Element, Length};

/// Widget id of the gallery scrollable, used to snap back to the top.
pub const GALLERY_SCROLL_ID: &str = "gallery-scroll";

/// Scroll offset (logical pixels) past which the back-to-top control shows.
pub const BACK_TO_TOP_REVEAL: f32 = 20.0;

const COLUMNS: usize = 4;

pub fn view<'a>(items: &'a [GalleryItem], scroll_offset: f32) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::MD).padding(spacing::LG);

    for (row_index, chunk) in items.chunks(COLUMNS).enumerate() {
        let mut row = Row::new().spacing(spacing::MD);
        for (column_index, item) in chunk.iter().enumerate() {
            let index = row_index * COLUMNS + column_index;
            row = row.push(thumbnail(item, index));
        }
        grid = grid.push(row);
    }

    let scrollable = Scrollable::new(grid)
        .id(iced::widget::Id::new(GALLERY_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::GalleryScrolled(viewport.absolute_offset()));

    if scroll_offset > BACK_TO_TOP_REVEAL {
        stack([scrollable.into(), back_to_top()]).into()
    } else {
        scrollable.into()
    }
}

fn thumbnail(item: &GalleryItem, index: usize) -> Element<'_, Message> {
    let picture = Image::new(Handle::from_path(&item.path))
        .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT));

    let label = Text::new(item.caption.as_str()).size(typography::CAPTION);

    let cell = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(picture)
        .push(label);

    button(cell)
        .padding(spacing::XXS)
        .style(styles::button_thumbnail)
        .on_press(Message::Intent(Intent::Open(index)))
        .into()
}

fn back_to_top<'a>() -> Element<'a, Message> {
    let control = button(
        Text::new("\u{2191}")
            .size(typography::TITLE_MD)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(sizing::CONTROL))
    .height(Length::Fixed(sizing::CONTROL))
    .style(styles::button_overlay)
    .on_press(Message::BackToTopPressed);

    Container::new(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(spacing::LG)
        .into()
}

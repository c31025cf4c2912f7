// SPDX-License-Identifier: MPL-2.0
//! The lightbox card: current image, caption, and its controls.
//!
//! The image surface is wrapped in a mouse area so hovering pauses the
//! slideshow, leaving resumes it, and a plain click toggles it. The arrows
//! and the close control sit outside that area and emit their intents
//! directly. A missing or unreadable image source is handed to the image
//! widget as-is and simply renders blank.

use crate::app::Message;
use crate::lightbox::{Content, Intent};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, mouse_area, Column, Container, Row, Text};
use iced::{Element, Length};

pub fn view(content: Option<&Content>) -> Element<'_, Message> {
    let (picture, caption): (Element<'_, Message>, &str) = match content {
        Some(content) => (
            Image::new(Handle::from_path(&content.source))
                .width(Length::Fixed(sizing::LIGHTBOX_IMAGE_WIDTH))
                .height(Length::Fixed(sizing::LIGHTBOX_IMAGE_HEIGHT))
                .into(),
            content.caption.as_str(),
        ),
        // Visible with an empty content slot should not happen through the
        // public API, but render an empty surface instead of panicking.
        None => (
            iced::widget::Space::new()
                .width(Length::Fixed(sizing::LIGHTBOX_IMAGE_WIDTH))
                .height(Length::Fixed(sizing::LIGHTBOX_IMAGE_HEIGHT))
                .into(),
            "",
        ),
    };

    let surface = mouse_area(picture)
        .on_enter(Message::Intent(Intent::Pause))
        .on_exit(Message::Intent(Intent::Resume))
        .on_press(Message::SurfacePressed);

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(format!("More details about {}", caption))
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(control("\u{00d7}", Message::Intent(Intent::Close)));

    let body = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(control("\u{2039}", Message::Intent(Intent::Previous)))
        .push(surface)
        .push(control("\u{203a}", Message::Intent(Intent::Next)));

    let footer = Text::new(caption.to_string())
        .size(typography::BODY)
        .color(palette::GRAY_200);

    let card = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(header)
        .push(body)
        .push(footer);

    Container::new(card)
        .padding(spacing::LG)
        .style(styles::container_lightbox_card)
        .into()
}

fn control(glyph: &str, message: Message) -> Element<'_, Message> {
    button(
        Text::new(glyph.to_string())
            .size(typography::TITLE_MD)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(sizing::CONTROL))
    .height(Length::Fixed(sizing::CONTROL))
    .style(styles::button_overlay)
    .on_press(message)
    .into()
}

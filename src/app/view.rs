// SPDX-License-Identifier: MPL-2.0
//! View composition: header + gallery body, with the lightbox stacked on
//! top while visible. Hiding the lightbox means not rendering it at all;
//! there is no half-hidden state to get wrong.

use super::{App, Message};
use crate::lightbox::Intent;
use crate::ui::{empty_state, grid, lightbox_view, navbar, styles};
use iced::widget::{center, mouse_area, opaque, stack, Column};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let compact = self.scroll_offset >= navbar::COMPACT_SCROLL_OFFSET;
        let header = navbar::view(compact, &self.tagline);

        let body = if self.gallery.is_empty() {
            empty_state::view()
        } else {
            grid::view(self.gallery.items(), self.scroll_offset)
        };

        let base = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(header)
            .push(body);

        if self.lightbox.is_visible() {
            let card = lightbox_view::view(self.lightbox.content());

            // Dimmed, click-to-dismiss backdrop behind the card.
            let backdrop = mouse_area(center(opaque(card)).style(styles::container_backdrop))
                .on_press(Message::Intent(Intent::Close));

            stack([base.into(), opaque(backdrop)]).into()
        } else {
            base.into()
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Empty state shown when no gallery is loaded.

use crate::app::Message;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

pub fn view<'a>() -> Element<'a, Message> {
    let title = Text::new("No pictures yet")
        .size(typography::TITLE_MD)
        .color(palette::GRAY_400);

    let subtitle = Text::new("Pick a folder of images to browse it as a gallery")
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let open_button = button(Text::new("Open folder"))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button_primary)
        .on_press(Message::OpenFolderDialog);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

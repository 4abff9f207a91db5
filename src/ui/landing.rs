/// Header, footer and the upload landing page
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Border, Color, Element, Length, Theme};

use crate::Message;

pub fn header<'a>(model: &'a str) -> Element<'a, Message> {
    container(
        row![
            text("◎ Morpheum").size(22),
            Space::with_width(Length::Fill),
            container(text(format!("✨ Powered by {}", model)).size(13))
                .padding([4, 12])
                .style(container::rounded_box),
        ]
        .align_y(Alignment::Center),
    )
    .padding([16, 24])
    .width(Length::Fill)
    .into()
}

pub fn footer<'a>() -> Element<'a, Message> {
    container(text("© 2025 RealityEngine. Built with Gemini API & iced.").size(13))
        .padding(16)
        .center_x(Length::Fill)
        .into()
}

/// Landing page shown while no image is loaded
pub fn view<'a>(drop_hover: bool) -> Element<'a, Message> {
    let headline = column![
        text("Turn Game Specs into").size(48),
        text("Reality Specs").size(48).color(Color::from_rgb8(0xa7, 0x8b, 0xfa)),
        text(
            "Upload your game screenshots or photos and use AI to transform them into \
             photorealistic masterpieces, apply filters, or edit elements with simple text prompts."
        )
        .size(16),
    ]
    .spacing(12)
    .max_width(720)
    .align_x(Alignment::Center);

    let highlights = container(row![
        highlight("Game to Reality", "Transform low-poly or stylized game shots into 8k realistic photos."),
        highlight("Smart Editing", "Add or remove objects, change lighting, and apply styles with text."),
        highlight("Gemini 2.5 Flash", "Powered by Google's latest vision-language model for speed and accuracy."),
    ]
    .spacing(24))
    .max_width(900);

    container(
        column![headline, dropzone(drop_hover), highlights]
            .spacing(40)
            .align_x(Alignment::Center),
    )
    .center(Length::Fill)
    .into()
}

/// Upload target. Files can also be dropped anywhere on the window.
fn dropzone<'a>(drop_hover: bool) -> Element<'a, Message> {
    let title = if drop_hover {
        "Drop to upload"
    } else {
        "Upload or drop your image"
    };

    container(
        column![
            text(title).size(22),
            text("Supports JPG, PNG, WEBP. Best results with game screenshots or high-contrast photos.")
                .size(14),
            button("Select File").padding([8, 16]).on_press(Message::PickImage),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(48)
    .max_width(640)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(move |theme: &Theme| dropzone_style(theme, drop_hover))
    .into()
}

fn dropzone_style(theme: &Theme, drop_hover: bool) -> container::Style {
    let palette = theme.extended_palette();
    let border_color = if drop_hover {
        palette.primary.strong.color
    } else {
        palette.background.strong.color
    };

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 16.0.into(),
        },
        ..container::Style::default()
    }
}

fn highlight<'a>(title: &'a str, body: &'a str) -> Element<'a, Message> {
    container(
        column![text(title).size(16), text(body).size(12)]
            .spacing(8)
            .align_x(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}

/// Editor studio view
///
/// Top bar with Replace/Clear, the comparison area, the last error and the
/// prompt controls.
use iced::widget::{button, column, container, row, text, text_input, tooltip, Space};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::comparison::{self, ComparisonImages, ComparisonState};
use crate::state::edit::EditSession;
use crate::state::presets::PRESET_PROMPTS;
use crate::Message;

/// Label of the submit button
pub fn generate_label(session: &EditSession) -> &'static str {
    if session.is_loading {
        "Generating..."
    } else if session.result.is_some() {
        "Regenerate"
    } else {
        "Generate"
    }
}

/// Whether the submit button accepts a press
pub fn can_generate(session: &EditSession, prompt: &str) -> bool {
    !prompt.trim().is_empty() && !session.is_loading
}

pub fn view<'a>(
    session: &'a EditSession,
    original: &'a iced::widget::image::Handle,
    comparison: &ComparisonState,
    prompt: &'a str,
) -> Element<'a, Message> {
    let top_bar = row![
        text("Editor Studio").size(18),
        Space::with_width(Length::Fill),
        button(text("Replace").size(14))
            .style(button::text)
            .on_press(Message::ReplaceImage),
        button(text("Clear").size(14))
            .style(button::text)
            .on_press(Message::ClearImage),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let compare = container(comparison::view(
        comparison,
        ComparisonImages {
            original,
            original_size: session.source.dimensions,
            result: session.result.as_ref(),
            is_loading: session.is_loading,
        },
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container::bordered_box);

    let mut layout = column![top_bar, compare].spacing(16);

    if let Some(error) = &session.error {
        layout = layout.push(
            container(text(format!("Error: {}", error)).size(14).style(text::danger))
                .padding(12)
                .width(Length::Fill)
                .style(container::bordered_box),
        );
    }

    layout.push(controls(session, prompt)).into()
}

fn controls<'a>(session: &'a EditSession, prompt: &'a str) -> Element<'a, Message> {
    let chips: Vec<Element<'a, Message>> = PRESET_PROMPTS
        .iter()
        .enumerate()
        .map(|(index, preset)| {
            let chip = button(text(format!("{} {}", preset.icon.glyph(), preset.label)).size(12))
                .padding([6, 12])
                .style(button::secondary)
                .on_press(Message::PresetSelected(index));

            tooltip(
                chip,
                container(text(preset.prompt).size(12))
                    .padding(8)
                    .max_width(360)
                    .style(container::rounded_box),
                tooltip::Position::Top,
            )
            .into()
        })
        .collect();

    let input = text_input(
        "Describe how you want to transform the image (e.g., 'Make it look like a realistic 4k photo')",
        prompt,
    )
    .on_input(Message::PromptChanged)
    .on_submit(Message::Generate)
    .padding(14)
    .width(Length::Fill);

    let submit = button(text(generate_label(session)))
        .padding([14, 24])
        .style(button::primary)
        .on_press_maybe(can_generate(session, prompt).then_some(Message::Generate));

    let mut panel = column![Wrap::with_elements(chips).spacing(8.0).line_spacing(8.0)].spacing(16);

    if session.result.is_some() && !session.prompt.is_empty() {
        panel = panel.push(text(format!("Last prompt: {}", session.prompt)).size(12).style(text::secondary));
    }

    container(panel.push(row![input, submit].spacing(12).align_y(Alignment::Center)))
        .padding(20)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::DataUri;
    use crate::state::data::fixtures::source_image;
    use crate::state::edit::SessionController;

    fn session_with(controller: &SessionController) -> EditSession {
        controller.session().cloned().unwrap()
    }

    #[test]
    fn test_button_label_and_gate() {
        let mut controller = SessionController::new();
        controller.select_image(source_image("shot.png"));

        let idle = session_with(&controller);
        assert_eq!(generate_label(&idle), "Generate");
        assert!(!can_generate(&idle, "  "));
        assert!(can_generate(&idle, "sketch"));

        let job = controller.begin_generation("sketch").unwrap();
        let loading = session_with(&controller);
        assert_eq!(generate_label(&loading), "Generating...");
        assert!(!can_generate(&loading, "sketch"));

        controller.finish_generation(
            job.session_id,
            job.prompt,
            Ok(DataUri::from_base64(Some("image/png"), "AAAA")),
        );
        assert_eq!(generate_label(&session_with(&controller)), "Regenerate");
    }
}

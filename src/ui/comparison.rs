/// Before/after comparison area
///
/// Renders the original and the generated image as Split, Single or
/// Slider. The views only read the image handles; the mode and slider
/// position are UI state owned here.
use iced::widget::image::Handle;
use iced::widget::{
    button, canvas, center, column, container, image, row, stack, text, Space,
};
use iced::{Alignment, ContentFit, Element, Length};

use super::slider::{RevealSlider, NEUTRAL_POSITION};
use crate::state::data::{Dimensions, GeneratedImage};
use crate::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Original and result next to each other
    #[default]
    Split,
    /// Result only
    Single,
    /// Stacked with a draggable reveal
    Slider,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Split, ViewMode::Slider, ViewMode::Single];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Split => "Split",
            ViewMode::Single => "Single",
            ViewMode::Slider => "Slider",
        }
    }
}

/// UI-only comparison state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonState {
    pub mode: ViewMode,
    /// Slider clip boundary, 0..=100
    pub slider_position: f32,
}

impl Default for ComparisonState {
    fn default() -> Self {
        Self {
            mode: ViewMode::Split,
            slider_position: NEUTRAL_POSITION,
        }
    }
}

impl ComparisonState {
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn set_slider_position(&mut self, position: f32) {
        self.slider_position = position.clamp(0.0, 100.0);
    }

    /// Track whether a result exists; without one everything starts over
    pub fn sync_result(&mut self, has_result: bool) {
        if !has_result {
            *self = Self::default();
        }
    }
}

/// Everything the comparison area draws
pub struct ComparisonImages<'a> {
    pub original: &'a Handle,
    pub original_size: Option<Dimensions>,
    pub result: Option<&'a GeneratedImage>,
    pub is_loading: bool,
}

pub fn view<'a>(state: &ComparisonState, images: ComparisonImages<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match images.result {
        Some(result) if !images.is_loading => {
            let body = match state.mode {
                ViewMode::Split => split_view(images.original, result),
                ViewMode::Single => single_view(result),
                ViewMode::Slider => slider_view(
                    images.original,
                    images.original_size,
                    result,
                    state.slider_position,
                ),
            };

            stack![
                body,
                column![mode_toggles(state.mode), Space::with_height(Length::Fill), download_bar()]
                    .padding(16)
                    .width(Length::Fill)
                    .height(Length::Fill),
            ]
            .into()
        }
        _ => labelled(images.original, "Original", Alignment::Start),
    };

    if images.is_loading {
        stack![content, loading_overlay()].into()
    } else {
        content
    }
}

fn split_view<'a>(original: &'a Handle, result: &'a GeneratedImage) -> Element<'a, Message> {
    row![
        labelled(original, "Original", Alignment::Start),
        labelled(&result.handle, "Generated", Alignment::End),
    ]
    .spacing(1)
    .into()
}

fn single_view(result: &GeneratedImage) -> Element<'_, Message> {
    labelled(&result.handle, "Generated Result", Alignment::Start)
}

fn slider_view<'a>(
    original: &Handle,
    original_size: Option<Dimensions>,
    result: &GeneratedImage,
    position: f32,
) -> Element<'a, Message> {
    canvas(RevealSlider {
        original: original.clone(),
        original_size,
        result: result.handle.clone(),
        result_size: result.dimensions,
        position,
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// A contained image with a small badge in the top corner
fn labelled<'a>(handle: &Handle, label: &'a str, side: Alignment) -> Element<'a, Message> {
    let picture = image(handle.clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    let badge = container(container(text(label).size(12)).padding([4, 12]).style(container::rounded_box))
        .padding(16)
        .width(Length::Fill)
        .align_x(side);

    stack![container(picture).padding(16), badge]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn mode_toggles<'a>(active: ViewMode) -> Element<'a, Message> {
    let toggles = ViewMode::ALL.into_iter().map(|mode| {
        button(text(mode.label()).size(12))
            .padding([6, 12])
            .style(if mode == active { button::primary } else { button::secondary })
            .on_press(Message::ViewModeSelected(mode))
            .into()
    });

    container(row(toggles).spacing(4))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn download_bar<'a>() -> Element<'a, Message> {
    container(button("Download").padding([8, 16]).on_press(Message::Download))
        .width(Length::Fill)
        .align_x(Alignment::End)
        .into()
}

fn loading_overlay<'a>() -> Element<'a, Message> {
    center(
        column![
            text("Processing Image...").size(18),
            text("Powered by Gemini 2.5").size(12),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .style(container::dark)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_split_at_midpoint() {
        let state = ComparisonState::default();
        assert_eq!(state.mode, ViewMode::Split);
        assert_eq!(state.slider_position, 50.0);
    }

    #[test]
    fn test_mode_switch_keeps_slider_position() {
        let mut state = ComparisonState::default();
        state.set_mode(ViewMode::Slider);
        state.set_slider_position(20.0);

        state.set_mode(ViewMode::Single);
        state.set_mode(ViewMode::Slider);

        assert_eq!(state.slider_position, 20.0);
    }

    #[test]
    fn test_result_cleared_resets_everything() {
        let mut state = ComparisonState::default();
        state.set_mode(ViewMode::Slider);
        state.set_slider_position(80.0);

        state.sync_result(true);
        assert_eq!(state.mode, ViewMode::Slider);
        assert_eq!(state.slider_position, 80.0);

        state.sync_result(false);
        assert_eq!(state, ComparisonState::default());
    }

    #[test]
    fn test_slider_position_is_clamped() {
        let mut state = ComparisonState::default();

        state.set_slider_position(140.0);
        assert_eq!(state.slider_position, 100.0);

        state.set_slider_position(-3.0);
        assert_eq!(state.slider_position, 0.0);
    }
}

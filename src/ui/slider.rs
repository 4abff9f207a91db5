/// Drag-controlled before/after reveal
///
/// Both images are stacked; the original is clipped to the left part of
/// the container and a draggable handle moves the clip boundary.
use iced::alignment;
use iced::mouse::{self, Cursor};
use iced::touch;
use iced::widget::canvas::{self, Frame, Path, Program, Stroke, Text};
use iced::widget::image::Handle;
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use crate::state::data::Dimensions;
use crate::Message;

/// Handle position before the user touches it
pub const NEUTRAL_POSITION: f32 = 50.0;

/// Percentage of the container left of `pointer_x`, clamped to 0..=100
///
/// Returns `None` for a container without width.
pub fn position_for(pointer_x: f32, left: f32, width: f32) -> Option<f32> {
    if width <= 0.0 || !width.is_finite() {
        return None;
    }

    Some(((pointer_x - left) / width * 100.0).clamp(0.0, 100.0))
}

/// Largest rectangle with the image's aspect ratio that fits `container`,
/// centred. Unknown dimensions fill the container.
pub fn fit_contain(container: Size, image: Option<Dimensions>) -> Rectangle {
    let Some(dims) = image.filter(|d| d.width > 0 && d.height > 0) else {
        return Rectangle::new(Point::ORIGIN, container);
    };

    let scale = (container.width / dims.width as f32).min(container.height / dims.height as f32);
    let size = Size::new(dims.width as f32 * scale, dims.height as f32 * scale);

    Rectangle::new(
        Point::new(
            (container.width - size.width) / 2.0,
            (container.height - size.height) / 2.0,
        ),
        size,
    )
}

/// Drag gesture state
///
/// While `Dragging`, moves and releases are honoured anywhere, not just
/// over the container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

impl DragState {
    /// Pointer or finger went down. Starts a drag if it is inside `bounds`.
    pub fn press(&mut self, pointer: Point, bounds: Rectangle) -> Option<f32> {
        if !bounds.contains(pointer) {
            return None;
        }

        *self = DragState::Dragging;
        position_for(pointer.x, bounds.x, bounds.width)
    }

    /// Pointer or finger moved
    pub fn drag(&self, pointer: Point, bounds: Rectangle) -> Option<f32> {
        match self {
            DragState::Dragging => position_for(pointer.x, bounds.x, bounds.width),
            DragState::Idle => None,
        }
    }

    /// Pointer or finger went up. Returns true if a drag ended.
    pub fn release(&mut self) -> bool {
        let was_dragging = *self == DragState::Dragging;
        *self = DragState::Idle;
        was_dragging
    }
}

/// Canvas program drawing the reveal view
pub struct RevealSlider {
    pub original: Handle,
    pub original_size: Option<Dimensions>,
    pub result: Handle,
    pub result_size: Option<Dimensions>,
    /// Clip boundary in percent
    pub position: f32,
}

impl Program<Message> for RevealSlider {
    type State = DragState;

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();

        frame.fill_rectangle(Point::ORIGIN, size, Color::from_rgb8(0x13, 0x13, 0x15));

        // Generated image underneath
        frame.draw_image(
            fit_contain(size, self.result_size),
            canvas::Image::new(self.result.clone()),
        );

        // Original on top, clipped to the left of the handle
        let boundary = size.width * self.position / 100.0;
        let original_rect = fit_contain(size, self.original_size);
        frame.with_clip(
            Rectangle::new(Point::ORIGIN, Size::new(boundary, size.height)),
            |frame| {
                frame.draw_image(original_rect, canvas::Image::new(self.original.clone()));
            },
        );

        // Handle line and knob
        let line = Path::line(Point::new(boundary, 0.0), Point::new(boundary, size.height));
        frame.stroke(&line, Stroke::default().with_color(Color::WHITE).with_width(2.0));

        let center = Point::new(boundary, size.height / 2.0);
        frame.fill(&Path::circle(center, 16.0), Color::from_rgba(1.0, 1.0, 1.0, 0.15));
        frame.stroke(
            &Path::circle(center, 16.0),
            Stroke::default()
                .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.5))
                .with_width(1.0),
        );
        frame.fill_text(Text {
            content: "↔".to_string(),
            position: center,
            color: Color::WHITE,
            size: 14.0.into(),
            horizontal_alignment: alignment::Horizontal::Center,
            vertical_alignment: alignment::Vertical::Center,
            ..Text::default()
        });

        // Labels
        frame.fill_text(Text {
            content: "Original".to_string(),
            position: Point::new(16.0, 16.0),
            color: Color::WHITE,
            size: 12.0.into(),
            ..Text::default()
        });
        frame.fill_text(Text {
            content: "Generated".to_string(),
            position: Point::new(size.width - 16.0, 16.0),
            color: Color::from_rgb8(0xa5, 0xb4, 0xfc),
            size: 12.0.into(),
            horizontal_alignment: alignment::Horizontal::Right,
            ..Text::default()
        });

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            // Mouse button press - start dragging
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(pos) = cursor.position() {
                    if let Some(position) = state.press(pos, bounds) {
                        return (
                            canvas::event::Status::Captured,
                            Some(Message::SliderMoved(position)),
                        );
                    }
                }
            }
            canvas::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if let Some(position) = state.press(position, bounds) {
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::SliderMoved(position)),
                    );
                }
            }

            // Move - follow the pointer while dragging, even outside the container
            canvas::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if let Some(position) = state.drag(position, bounds) {
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::SliderMoved(position)),
                    );
                }
            }
            canvas::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                if let Some(position) = state.drag(position, bounds) {
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::SliderMoved(position)),
                    );
                }
            }

            // Release anywhere - stop dragging
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | canvas::Event::Touch(touch::Event::FingerLifted { .. })
            | canvas::Event::Touch(touch::Event::FingerLost { .. }) => {
                if state.release() {
                    return (canvas::event::Status::Captured, None);
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if *state == DragState::Dragging || cursor.is_over(bounds) {
            mouse::Interaction::ResizingHorizontally
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> Rectangle {
        Rectangle::new(Point::new(100.0, 50.0), Size::new(400.0, 300.0))
    }

    #[test]
    fn test_edges() {
        assert_eq!(position_for(100.0, 100.0, 400.0), Some(0.0));
        assert_eq!(position_for(500.0, 100.0, 400.0), Some(100.0));
        assert_eq!(position_for(300.0, 100.0, 400.0), Some(50.0));
    }

    #[test]
    fn test_out_of_bounds_is_clamped() {
        assert_eq!(position_for(-250.0, 100.0, 400.0), Some(0.0));
        assert_eq!(position_for(9000.0, 100.0, 400.0), Some(100.0));
    }

    #[test]
    fn test_zero_width_container() {
        assert_eq!(position_for(10.0, 0.0, 0.0), None);
    }

    #[test]
    fn test_press_outside_does_not_start_drag() {
        let mut state = DragState::default();

        assert_eq!(state.press(Point::new(10.0, 10.0), container()), None);
        assert_eq!(state, DragState::Idle);
        assert_eq!(state.drag(Point::new(300.0, 100.0), container()), None);
    }

    #[test]
    fn test_drag_cycle() {
        let mut state = DragState::default();

        assert_eq!(state.press(Point::new(200.0, 100.0), container()), Some(25.0));
        assert_eq!(state, DragState::Dragging);

        // Moves outside the container still update, clamped
        assert_eq!(state.drag(Point::new(900.0, 10.0), container()), Some(100.0));
        assert_eq!(state.drag(Point::new(0.0, 500.0), container()), Some(0.0));

        assert!(state.release());
        assert_eq!(state, DragState::Idle);
        assert_eq!(state.drag(Point::new(300.0, 100.0), container()), None);
        assert!(!state.release());
    }

    #[test]
    fn test_fit_contain_letterboxes() {
        let rect = fit_contain(
            Size::new(400.0, 400.0),
            Some(Dimensions { width: 200, height: 100 }),
        );

        assert_eq!(rect, Rectangle::new(Point::new(0.0, 100.0), Size::new(400.0, 200.0)));
    }

    #[test]
    fn test_fit_contain_unknown_size_fills() {
        let size = Size::new(300.0, 200.0);
        assert_eq!(fit_contain(size, None), Rectangle::new(Point::ORIGIN, size));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Spinning busy indicator drawn on a Canvas.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Stroke width relative to the diameter.
const STROKE_RATIO: f32 = 0.12;
const ARC_SEGMENTS: u16 = 24;

/// A half-circle arc rotating over a faint track.
pub struct ActivityIndicator {
    cache: Cache,
    rotation: f32,
    color: Color,
    diameter: f32,
}

impl ActivityIndicator {
    /// Creates an indicator of `diameter` at `rotation` radians.
    #[must_use]
    pub fn new(color: Color, diameter: f32, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            diameter,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.diameter;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for ActivityIndicator {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let stroke_width = self.diameter * STROKE_RATIO;
                let radius = frame.width().min(frame.height()) / 2.0 - stroke_width;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(stroke_width).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // Start at twelve o'clock.
                let start_angle = self.rotation - PI / 2.0;
                let mut arc = canvas::path::Builder::new();
                arc.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));
                for i in 1..=ARC_SEGMENTS {
                    let angle = start_angle + PI * f32::from(i) / f32::from(ARC_SEGMENTS);
                    arc.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc.build(),
                    Stroke::default()
                        .with_width(stroke_width)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

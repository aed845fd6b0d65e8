// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the banner card.
//!
//! Layout: `[icon] [message] [separator] [action] [second action] [indicator]`
//! on a rounded, shadowed, translucent card. Hidden elements are left out.

use super::appearance::FontSpec;
use super::banner::Banner;
use super::content::ContentElements;
use crate::application::port::{Event, ViewId};
use crate::domain::snackbar::ActionButton;
use crate::ui::design_tokens::{opacity, shadow, sizing, spacing};
use crate::ui::widgets::ActivityIndicator;
use iced::widget::image::Image;
use iced::widget::{button, container, mouse_area, text, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};

/// Interactions the card reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Tapped,
    ActionPressed(ActionButton),
}

impl From<Message> for Event {
    fn from(message: Message) -> Self {
        match message {
            Message::Tapped => Event::Tapped,
            Message::ActionPressed(button) => Event::ActionPressed(button),
        }
    }
}

impl Banner {
    /// Renders the built-in content. Empty while detached.
    pub fn view(&self) -> Element<'_, Message> {
        match self.rendered_elements() {
            Some(elements) if self.custom_content.is_none() => {
                self.card(built_in_row(elements, self.action_max_width.value()), elements)
            }
            Some(elements) => self.card(empty_row(), elements),
            None => empty(),
        }
    }

    /// Renders the card around caller-provided custom content.
    pub fn view_with_content<'a>(
        &'a self,
        custom: impl FnOnce(ViewId) -> Element<'a, Message>,
    ) -> Element<'a, Message> {
        match (self.rendered_elements(), self.custom_content) {
            (Some(elements), Some(content)) => {
                let row = Row::new()
                    .align_y(alignment::Vertical::Center)
                    .push(min_height_strut())
                    .push(custom(content));
                self.card(row, elements)
            }
            _ => self.view(),
        }
    }

    fn rendered_elements(&self) -> Option<&ContentElements> {
        self.elements
            .as_ref()
            .filter(|_| self.phase.is_attached())
    }

    fn card<'a>(
        &'a self,
        row: Row<'a, Message>,
        elements: &'a ContentElements,
    ) -> Element<'a, Message> {
        let insets = self.content_insets;
        let background = elements.content.appearance.background;
        let corner_radius = self.corner_radius.value();

        let card = Container::new(row)
            .width(Length::Fill)
            .padding(Padding {
                top: insets.top,
                right: insets.right,
                bottom: insets.bottom,
                left: insets.left,
            })
            .style(move |_theme: &Theme| banner_container_style(background, corner_radius));

        mouse_area(card).on_press(Message::Tapped).into()
    }
}

fn built_in_row(elements: &ContentElements, max_width: f32) -> Row<'_, Message> {
    let content = &elements.content;
    let appearance = &content.appearance;
    let visibility = elements.visibility;

    let mut row = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(min_height_strut());

    if let (true, Some(icon)) = (visibility.icon, content.icon.as_ref()) {
        row = row.push(
            Image::new(icon.clone())
                .content_fit(appearance.icon_mode.to_content_fit())
                .width(Length::Fixed(sizing::ICON_WIDTH)),
        );
    }

    let message_color = appearance.message_color;
    let message = styled_text(content.message.as_str(), appearance.message_font, message_color);
    row = row.push(
        Container::new(message)
            .width(Length::Fill)
            .align_x(appearance.message_alignment.to_horizontal()),
    );

    if visibility.separator {
        let separator_color = appearance.separator_color;
        row = row.push(
            Container::new(text(""))
                .width(Length::Fixed(sizing::SEPARATOR_WIDTH))
                .height(Length::Fixed(sizing::MIN_HEIGHT - 2.0 * spacing::XS))
                .style(move |_theme: &Theme| container::Style {
                    background: Some(Background::Color(separator_color)),
                    ..Default::default()
                }),
        );
    }

    let single_line = content.action_lines.value() == 1;
    if visibility.action {
        row = row.push(action_button(
            content.action_title.as_str(),
            appearance.action_font,
            appearance.action_color,
            ActionButton::Primary,
            max_width,
            single_line,
        ));
    }
    if visibility.second_action {
        row = row.push(action_button(
            content.second_action_title.as_str(),
            appearance.second_action_font,
            appearance.second_action_color,
            ActionButton::Secondary,
            max_width,
            single_line,
        ));
    }

    if visibility.indicator {
        row = row.push(
            ActivityIndicator::new(
                appearance.indicator_color,
                appearance.indicator_style.diameter(),
                elements.indicator_rotation,
            )
            .into_element(),
        );
    }

    row
}

fn empty_row<'a>() -> Row<'a, Message> {
    Row::new().push(min_height_strut())
}

fn empty<'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

/// Zero-width spacer holding the row at the minimum height.
fn min_height_strut<'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Fixed(0.0))
        .height(Length::Fixed(sizing::MIN_HEIGHT))
        .into()
}

fn styled_text(content: &str, font: FontSpec, color: Color) -> Text<'_> {
    Text::new(content)
        .font(font.font)
        .size(font.size)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
}

fn action_button<'a>(
    title: &'a str,
    font: FontSpec,
    color: Color,
    which: ActionButton,
    max_width: f32,
    single_line: bool,
) -> Element<'a, Message> {
    let mut label = styled_text(title, font, color);
    if single_line {
        label = label.wrapping(text::Wrapping::None);
    }
    let press = button(label)
        .on_press(Message::ActionPressed(which))
        .padding(spacing::XXS)
        .style(action_button_style);
    Container::new(press).max_width(max_width).into()
}

/// Style function for the banner card.
fn banner_container_style(background: Color, corner_radius: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: corner_radius.into(),
        },
        shadow: shadow::BANNER,
        ..Default::default()
    }
}

/// Style function for the action buttons. Text color comes from the label.
fn action_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let overlay = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..Color::WHITE
        }))
    };
    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => overlay(opacity::OVERLAY_SUBTLE / 2.0),
        button::Status::Pressed => overlay(opacity::OVERLAY_SUBTLE),
    };
    button::Style {
        background,
        text_color: Color::WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

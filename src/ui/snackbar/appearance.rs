// SPDX-License-Identifier: MPL-2.0
//! Visual properties of the banner card.

use crate::ui::design_tokens::{opacity, palette, sizing, typography};
use iced::{Color, ContentFit, Font};
use std::fmt;
use std::str::FromStr;

/// A font face plus point size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub font: Font,
    pub size: f32,
}

impl FontSpec {
    #[must_use]
    pub fn new(font: Font, size: f32) -> Self {
        Self { font, size }
    }

    /// Bold system font at `size`.
    #[must_use]
    pub fn bold(size: f32) -> Self {
        Self::new(
            Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            },
            size,
        )
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::bold(typography::BODY)
    }
}

/// Horizontal alignment of the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub const ALL: [TextAlign; 3] = [TextAlign::Left, TextAlign::Center, TextAlign::Right];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }

    #[must_use]
    pub fn to_horizontal(self) -> iced::alignment::Horizontal {
        match self {
            TextAlign::Left => iced::alignment::Horizontal::Left,
            TextAlign::Center => iced::alignment::Horizontal::Center,
            TextAlign::Right => iced::alignment::Horizontal::Right,
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        TextAlign::ALL
            .into_iter()
            .find(|align| align.as_str() == normalized)
            .ok_or_else(|| format!("invalid text alignment: {}", s))
    }
}

/// How the icon image is fitted into its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconContentMode {
    /// Natural size, centered. Never scaled.
    #[default]
    Center,
    /// Scaled down to fit, aspect ratio kept.
    ScaleAspectFit,
    /// Scaled to cover, aspect ratio kept.
    ScaleAspectFill,
    /// Stretched to the slot.
    ScaleToFill,
}

impl IconContentMode {
    pub const ALL: [IconContentMode; 4] = [
        IconContentMode::Center,
        IconContentMode::ScaleAspectFit,
        IconContentMode::ScaleAspectFill,
        IconContentMode::ScaleToFill,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IconContentMode::Center => "center",
            IconContentMode::ScaleAspectFit => "scale-aspect-fit",
            IconContentMode::ScaleAspectFill => "scale-aspect-fill",
            IconContentMode::ScaleToFill => "scale-to-fill",
        }
    }

    #[must_use]
    pub fn to_content_fit(self) -> ContentFit {
        match self {
            IconContentMode::Center => ContentFit::None,
            IconContentMode::ScaleAspectFit => ContentFit::Contain,
            IconContentMode::ScaleAspectFill => ContentFit::Cover,
            IconContentMode::ScaleToFill => ContentFit::Fill,
        }
    }
}

impl fmt::Display for IconContentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconContentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('_', "-");
        IconContentMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| format!("invalid icon content mode: {}", s))
    }
}

/// Size of the busy indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorStyle {
    #[default]
    Medium,
    Large,
}

impl IndicatorStyle {
    #[must_use]
    pub fn diameter(self) -> f32 {
        match self {
            IndicatorStyle::Medium => sizing::INDICATOR_MEDIUM,
            IndicatorStyle::Large => sizing::INDICATOR_LARGE,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IndicatorStyle::Medium => "medium",
            IndicatorStyle::Large => "large",
        }
    }
}

impl fmt::Display for IndicatorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "medium" => Ok(IndicatorStyle::Medium),
            "large" => Ok(IndicatorStyle::Large),
            _ => Err(format!("invalid indicator style: {}", s)),
        }
    }
}

/// Colors and fonts of the built-in content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub background: Color,
    pub message_color: Color,
    pub message_font: FontSpec,
    pub message_alignment: TextAlign,
    pub action_color: Color,
    pub action_font: FontSpec,
    pub second_action_color: Color,
    pub second_action_font: FontSpec,
    pub separator_color: Color,
    pub indicator_color: Color,
    pub indicator_style: IndicatorStyle,
    pub icon_mode: IconContentMode,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            background: Color {
                a: opacity::BANNER_BACKGROUND,
                ..palette::BLACK
            },
            message_color: palette::WHITE,
            message_font: FontSpec::default(),
            message_alignment: TextAlign::default(),
            action_color: palette::WHITE,
            action_font: FontSpec::default(),
            second_action_color: palette::WHITE,
            second_action_font: FontSpec::default(),
            separator_color: palette::GRAY_500,
            indicator_color: palette::WHITE,
            indicator_style: IndicatorStyle::default(),
            icon_mode: IconContentMode::default(),
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Style presets for banners, loaded from and saved to a `snackbar.toml`
//! file.
//!
//! # Configuration Sections
//!
//! - `[appearance]` - Colors, font size, alignment, icon fit, indicator
//! - `[layout]` - Margins, content insets, corner radius, action width
//! - `[animation]` - Animation type, transition timing, safe-area handling
//! - `[behavior]` - Display duration and swipe dismissal
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `SNACKBAR_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::config;
//! use iced_snackbar::ui::snackbar::Banner;
//!
//! // Load the preset (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let mut banner = Banner::from_config(&config);
//! banner.set_message("Saved");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::snackbar::{
    AnimationTiming, AnimationType, DisplayDuration, EdgeInsets, Margins,
};
use crate::error::{Error, Result};
use crate::ui::snackbar::{Banner, FontSpec, IconContentMode, IndicatorStyle, TextAlign};
use iced::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const CONFIG_FILE: &str = "snackbar.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Colors and text settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    #[serde(default = "default_background")]
    pub background: [f32; 4],

    #[serde(default = "default_text")]
    pub message_color: [f32; 4],

    #[serde(default = "default_text")]
    pub action_color: [f32; 4],

    #[serde(default = "default_text")]
    pub second_action_color: [f32; 4],

    #[serde(default = "default_separator")]
    pub separator_color: [f32; 4],

    #[serde(default = "default_indicator")]
    pub indicator_color: [f32; 4],

    /// Font size of message and action titles.
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    #[serde(
        default,
        deserialize_with = "deserialize_parsed",
        serialize_with = "serialize_display"
    )]
    pub message_alignment: TextAlign,

    #[serde(
        default,
        deserialize_with = "deserialize_parsed",
        serialize_with = "serialize_display"
    )]
    pub icon_content_mode: IconContentMode,

    #[serde(
        default,
        deserialize_with = "deserialize_parsed",
        serialize_with = "serialize_display"
    )]
    pub indicator_style: IndicatorStyle,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND_RGBA,
            message_color: DEFAULT_TEXT_RGBA,
            action_color: DEFAULT_TEXT_RGBA,
            second_action_color: DEFAULT_TEXT_RGBA,
            separator_color: DEFAULT_SEPARATOR_RGBA,
            indicator_color: DEFAULT_INDICATOR_RGBA,
            font_size: DEFAULT_FONT_SIZE,
            message_alignment: TextAlign::default(),
            icon_content_mode: IconContentMode::default(),
            indicator_style: IndicatorStyle::default(),
        }
    }
}

/// Geometry settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(default = "default_margin")]
    pub margin_left: f32,
    #[serde(default = "default_margin")]
    pub margin_right: f32,
    #[serde(default = "default_margin")]
    pub margin_top: f32,
    #[serde(default = "default_margin")]
    pub margin_bottom: f32,

    #[serde(default)]
    pub content_inset_top: f32,
    #[serde(default = "default_content_inset")]
    pub content_inset_left: f32,
    #[serde(default)]
    pub content_inset_bottom: f32,
    #[serde(default = "default_content_inset")]
    pub content_inset_right: f32,

    /// Floored at 0 when applied.
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f32,

    /// Raised to 44 when applied.
    #[serde(default = "default_action_max_width")]
    pub action_max_width: f32,

    /// Lines an action title may use, 0 = unlimited.
    #[serde(default = "default_action_lines")]
    pub action_line_count: u32,

    /// Keep left/right margins active around custom content.
    #[serde(default)]
    pub margins_on_custom_content: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin_left: DEFAULT_MARGIN,
            margin_right: DEFAULT_MARGIN,
            margin_top: DEFAULT_MARGIN,
            margin_bottom: DEFAULT_MARGIN,
            content_inset_top: 0.0,
            content_inset_left: DEFAULT_CONTENT_INSET_HORIZONTAL,
            content_inset_bottom: 0.0,
            content_inset_right: DEFAULT_CONTENT_INSET_HORIZONTAL,
            corner_radius: DEFAULT_CORNER_RADIUS,
            action_max_width: DEFAULT_ACTION_MAX_WIDTH,
            action_line_count: DEFAULT_ACTION_LINES,
            margins_on_custom_content: false,
        }
    }
}

/// Entrance/exit animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    #[serde(
        default,
        rename = "type",
        deserialize_with = "deserialize_parsed",
        serialize_with = "serialize_display"
    )]
    pub animation_type: AnimationType,

    /// Duration of one transition in milliseconds.
    #[serde(default = "default_animation_ms")]
    pub duration_ms: u64,

    #[serde(default = "default_spring_damping")]
    pub spring_damping: f32,

    #[serde(default = "default_initial_velocity")]
    pub initial_velocity: f32,

    /// Whether the bottom-to-top exit also clears the top safe-area inset.
    #[serde(default)]
    pub bottom_to_top_clears_safe_area: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            animation_type: AnimationType::default(),
            duration_ms: DEFAULT_ANIMATION_MS,
            spring_damping: DEFAULT_SPRING_DAMPING,
            initial_velocity: DEFAULT_INITIAL_VELOCITY,
            bottom_to_top_clears_safe_area: false,
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn timing(&self) -> AnimationTiming {
        AnimationTiming {
            duration: Duration::from_millis(self.duration_ms),
            spring_damping: self.spring_damping,
            initial_velocity: self.initial_velocity,
        }
    }
}

/// Dismissal behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(
        default,
        deserialize_with = "deserialize_parsed",
        serialize_with = "serialize_display"
    )]
    pub duration: DisplayDuration,

    #[serde(default)]
    pub dismiss_on_swipe: bool,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Banner style preset with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub appearance: AppearanceConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

impl Config {
    /// Applies the preset to `banner`. Content and callbacks are untouched.
    pub fn apply_to(&self, banner: &mut Banner) {
        let appearance = &self.appearance;
        let font = FontSpec::bold(appearance.font_size.max(MIN_FONT_SIZE));
        banner.set_background_color(rgba(appearance.background));
        banner.set_message_color(rgba(appearance.message_color));
        banner.set_action_color(rgba(appearance.action_color));
        banner.set_second_action_color(rgba(appearance.second_action_color));
        banner.set_separator_color(rgba(appearance.separator_color));
        banner.set_indicator_color(rgba(appearance.indicator_color));
        banner.set_message_font(font);
        banner.set_action_font(font);
        banner.set_second_action_font(font);
        banner.set_message_alignment(appearance.message_alignment);
        banner.set_icon_content_mode(appearance.icon_content_mode);
        banner.set_indicator_style(appearance.indicator_style);

        let layout = &self.layout;
        banner.set_margins(Margins {
            left: layout.margin_left,
            right: layout.margin_right,
            top: layout.margin_top,
            bottom: layout.margin_bottom,
        });
        banner.set_content_insets(EdgeInsets::new(
            layout.content_inset_top,
            layout.content_inset_left,
            layout.content_inset_bottom,
            layout.content_inset_right,
        ));
        banner.set_corner_radius(layout.corner_radius);
        banner.set_action_max_width(layout.action_max_width);
        banner.set_action_line_count(layout.action_line_count);
        banner.set_margins_on_custom_content(layout.margins_on_custom_content);

        let animation = &self.animation;
        banner.set_animation_type(animation.animation_type);
        banner.set_animation_timing(animation.timing());
        let mut policy = banner.safe_area_policy();
        policy.set(
            AnimationType::SlideFromBottomToTop,
            animation.bottom_to_top_clears_safe_area,
        );
        banner.set_safe_area_policy(policy);

        banner.set_duration(self.behavior.duration);
        banner.set_dismiss_on_swipe(self.behavior.dismiss_on_swipe);
    }
}

impl Banner {
    /// Creates an empty banner styled by `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut banner = Self::new();
        config.apply_to(&mut banner);
        banner
    }
}

fn rgba(components: [f32; 4]) -> Color {
    let [r, g, b, a] = components.map(|c| c.clamp(0.0, 1.0));
    Color::from_rgba(r, g, b, a)
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_background() -> [f32; 4] {
    DEFAULT_BACKGROUND_RGBA
}

fn default_text() -> [f32; 4] {
    DEFAULT_TEXT_RGBA
}

fn default_separator() -> [f32; 4] {
    DEFAULT_SEPARATOR_RGBA
}

fn default_indicator() -> [f32; 4] {
    DEFAULT_INDICATOR_RGBA
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

fn default_margin() -> f32 {
    DEFAULT_MARGIN
}

fn default_content_inset() -> f32 {
    DEFAULT_CONTENT_INSET_HORIZONTAL
}

fn default_corner_radius() -> f32 {
    DEFAULT_CORNER_RADIUS
}

fn default_action_max_width() -> f32 {
    DEFAULT_ACTION_MAX_WIDTH
}

fn default_action_lines() -> u32 {
    DEFAULT_ACTION_LINES
}

fn default_animation_ms() -> u64 {
    DEFAULT_ANIMATION_MS
}

fn default_spring_damping() -> f32 {
    DEFAULT_SPRING_DAMPING
}

fn default_initial_velocity() -> f32 {
    DEFAULT_INITIAL_VELOCITY
}

/// Reads a value from its string name via `FromStr`.
fn deserialize_parsed<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = String>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}

/// Writes a value as its string name.
fn serialize_display<S, T>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Display,
{
    serializer.collect_str(value)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the preset from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default preset with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the preset from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "invalid snackbar config");
                    return (
                        Config::default(),
                        Some(format!("{}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads a preset from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the preset to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the preset to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves a preset to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            appearance: AppearanceConfig {
                background: [0.1, 0.2, 0.3, 0.9],
                font_size: 16.0,
                message_alignment: TextAlign::Center,
                icon_content_mode: IconContentMode::ScaleAspectFit,
                indicator_style: IndicatorStyle::Large,
                ..AppearanceConfig::default()
            },
            layout: LayoutConfig {
                margin_bottom: 12.0,
                corner_radius: 8.0,
                action_line_count: 0,
                ..LayoutConfig::default()
            },
            animation: AnimationConfig {
                animation_type: AnimationType::SlideFromTopBackToTop,
                duration_ms: 250,
                bottom_to_top_clears_safe_area: true,
                ..AnimationConfig::default()
            },
            behavior: BehaviorConfig {
                duration: DisplayDuration::Forever,
                dismiss_on_swipe: true,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("snackbar.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn enums_are_written_as_kebab_case_names() {
        let config = Config {
            animation: AnimationConfig {
                animation_type: AnimationType::SlideFromLeftToRight,
                ..AnimationConfig::default()
            },
            ..Config::default()
        };
        let content = toml::to_string_pretty(&config).expect("serialize");
        assert!(content.contains("type = \"slide-from-left-to-right\""));
        assert!(content.contains("duration = \"short\""));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[behavior]\nduration = \"long\"\n").expect("parse");
        assert_eq!(config.behavior.duration, DisplayDuration::Long);
        assert_eq!(config.layout, LayoutConfig::default());
        assert_eq!(config.animation.timing(), AnimationTiming::default());
    }

    #[test]
    fn unknown_enum_name_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("snackbar.toml");
        fs::write(&config_path, "[animation]\ntype = \"bounce\"\n").expect("write");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("bounce")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_warns_and_falls_back_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_into_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("failed to save config");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn from_config_applies_and_clamps() {
        let config = Config {
            layout: LayoutConfig {
                corner_radius: -3.0,
                action_max_width: 20.0,
                margin_left: 16.0,
                ..LayoutConfig::default()
            },
            animation: AnimationConfig {
                animation_type: AnimationType::FadeInFadeOut,
                bottom_to_top_clears_safe_area: true,
                ..AnimationConfig::default()
            },
            behavior: BehaviorConfig {
                duration: DisplayDuration::Middle,
                dismiss_on_swipe: true,
            },
            ..Config::default()
        };
        let banner = Banner::from_config(&config);

        assert_eq!(banner.corner_radius(), 0.0);
        assert_eq!(banner.action_max_width(), 44.0);
        assert_eq!(banner.margins().left, 16.0);
        assert_eq!(banner.animation_type(), AnimationType::FadeInFadeOut);
        assert_eq!(banner.duration(), DisplayDuration::Middle);
        assert!(banner.dismiss_on_swipe());
        assert!(banner
            .safe_area_policy()
            .includes(AnimationType::SlideFromBottomToTop));
    }

    #[test]
    fn colors_are_clamped_into_range() {
        let color = rgba([2.0, -1.0, 0.5, 1.5]);
        assert_eq!(color, Color::from_rgba(1.0, 0.0, 0.5, 1.0));
    }
}

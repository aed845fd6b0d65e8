// SPDX-License-Identifier: MPL-2.0
//! Built-in content of the banner: icon, message, action buttons,
//! separator and busy indicator.
//!
//! [`Content`] is the buffered store the setters write to. The first `show`
//! snapshots it into [`ContentElements`], which the view renders and later
//! setters keep in sync.

use super::appearance::Appearance;
use crate::domain::snackbar::ActionLineCount;
use iced::widget::image::Handle;

/// Buffered content values.
#[derive(Debug, Clone, Default)]
pub struct Content {
    pub message: String,
    pub icon: Option<Handle>,
    pub action_title: String,
    pub action_icon: Option<Handle>,
    pub second_action_title: String,
    pub action_lines: ActionLineCount,
    pub appearance: Appearance,
}

/// Which elements are currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    pub icon: bool,
    pub action: bool,
    pub second_action: bool,
    pub separator: bool,
    pub indicator: bool,
    pub indicator_animating: bool,
}

impl Visibility {
    /// Resolves element visibility at show time.
    ///
    /// An action button only shows when it has something to display and
    /// something to call. The indicator always starts hidden.
    #[must_use]
    pub fn resolve(content: &Content, has_action: bool, has_second_action: bool) -> Self {
        let action = (!content.action_title.is_empty() || content.action_icon.is_some())
            && has_action;
        Self {
            icon: content.icon.is_some(),
            action,
            second_action: !content.second_action_title.is_empty() && has_second_action,
            separator: action,
            indicator: false,
            indicator_animating: false,
        }
    }
}

/// The element tree, built on first show.
#[derive(Debug, Clone)]
pub struct ContentElements {
    pub content: Content,
    pub visibility: Visibility,
    /// Busy indicator angle in radians.
    pub indicator_rotation: f32,
}

impl ContentElements {
    #[must_use]
    pub fn new(content: Content) -> Self {
        Self {
            content,
            visibility: Visibility::default(),
            indicator_rotation: 0.0,
        }
    }

    /// Hides both buttons and the separator, shows a spinning indicator.
    pub fn enter_busy(&mut self) {
        self.visibility.action = false;
        self.visibility.second_action = false;
        self.visibility.separator = false;
        self.visibility.indicator = true;
        self.visibility.indicator_animating = true;
    }

    /// Stops and hides the indicator.
    pub fn stop_indicator(&mut self) {
        self.visibility.indicator = false;
        self.visibility.indicator_animating = false;
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.visibility.indicator_animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_with_action(title: &str) -> Content {
        Content {
            action_title: title.to_string(),
            ..Content::default()
        }
    }

    #[test]
    fn empty_title_with_callback_hides_action() {
        let visibility = Visibility::resolve(&content_with_action(""), true, false);
        assert!(!visibility.action);
        assert!(!visibility.separator);
    }

    #[test]
    fn title_with_callback_shows_action() {
        let visibility = Visibility::resolve(&content_with_action("Undo"), true, false);
        assert!(visibility.action);
        assert!(visibility.separator);
    }

    #[test]
    fn title_without_callback_hides_action() {
        let visibility = Visibility::resolve(&content_with_action("Undo"), false, false);
        assert!(!visibility.action);
        assert!(!visibility.separator);
    }

    #[test]
    fn action_icon_alone_is_enough() {
        let content = Content {
            action_icon: Some(Handle::from_rgba(1, 1, vec![0, 0, 0, 255])),
            ..Content::default()
        };
        assert!(Visibility::resolve(&content, true, false).action);
    }

    #[test]
    fn second_action_needs_title_and_callback() {
        let content = Content {
            second_action_title: "Retry".into(),
            ..Content::default()
        };
        assert!(Visibility::resolve(&content, false, true).second_action);
        assert!(!Visibility::resolve(&content, false, false).second_action);
        assert!(!Visibility::resolve(&Content::default(), false, true).second_action);
    }

    #[test]
    fn icon_visible_iff_set() {
        assert!(!Visibility::resolve(&Content::default(), false, false).icon);
        let content = Content {
            icon: Some(Handle::from_rgba(1, 1, vec![255, 255, 255, 255])),
            ..Content::default()
        };
        assert!(Visibility::resolve(&content, false, false).icon);
    }

    #[test]
    fn busy_hides_buttons_and_shows_indicator() {
        let mut elements = ContentElements::new(content_with_action("Undo"));
        elements.visibility = Visibility::resolve(&elements.content, true, false);

        elements.enter_busy();
        assert!(elements.is_busy());
        assert!(!elements.visibility.action);
        assert!(!elements.visibility.separator);
        assert!(elements.visibility.indicator);

        elements.stop_indicator();
        assert!(!elements.is_busy());
        assert!(!elements.visibility.indicator);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! The banner aggregate: configuration store and constructors.
//!
//! Lifecycle, gesture dispatch and layout adaptation are implemented in
//! sibling modules as further `impl Banner` blocks.

use super::appearance::{FontSpec, IconContentMode, IndicatorStyle, TextAlign};
use super::content::{Content, ContentElements};
use crate::application::animation::SafeAreaPolicy;
use crate::application::port::{
    BannerId, Host, ObserverToken, TimerHandle, TransitionId, ViewId,
};
use crate::domain::layout::{ConstraintKind, ConstraintSet};
use crate::domain::snackbar::{
    ActionLineCount, ActionMaxWidth, AnimationTiming, AnimationType, CornerRadius,
    DisplayDuration, EdgeInsets, Margins, Phase, SwipeDirection,
};
use iced::widget::image::Handle;
use iced::Color;
use std::f32::consts::TAU;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Callback receiving the banner that fired it.
pub type Callback = Box<dyn FnMut(&mut Banner)>;

/// Swipe callback, also receiving the swipe direction.
pub type SwipeCallback = Box<dyn FnMut(&mut Banner, SwipeDirection)>;

/// Busy indicator angular speed, one turn per second.
const INDICATOR_RADIANS_PER_SECOND: f32 = TAU;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CallbackSlot {
    Tap,
    Action,
    SecondAction,
    Dismiss,
}

/// A transient notification banner.
///
/// Configure it, then [`show`](Banner::show) it on a [`Host`]. It dismisses
/// itself after its [`DisplayDuration`] unless that is `Forever`. All
/// further state changes arrive through [`update`](Banner::update).
pub struct Banner {
    pub(super) id: BannerId,
    pub(super) view: ViewId,
    pub(super) content_view: ViewId,
    pub(super) custom_content: Option<ViewId>,
    pub(super) container: Option<ViewId>,

    pub(super) content: Content,
    pub(super) duration: DisplayDuration,
    pub(super) animation_type: AnimationType,
    pub(super) timing: AnimationTiming,
    pub(super) margins: Margins,
    pub(super) content_insets: EdgeInsets,
    pub(super) corner_radius: CornerRadius,
    pub(super) action_max_width: ActionMaxWidth,
    pub(super) dismiss_on_swipe: bool,
    pub(super) margins_on_custom_content: bool,
    pub(super) safe_area: SafeAreaPolicy,

    pub(super) on_tap: Option<Callback>,
    pub(super) on_swipe: Option<SwipeCallback>,
    pub(super) on_action: Option<Callback>,
    pub(super) on_second_action: Option<Callback>,
    pub(super) on_dismiss: Option<Callback>,

    pub(super) host: Option<Rc<dyn Host>>,
    pub(super) attached_to: Option<ViewId>,
    pub(super) phase: Phase,
    pub(super) timer: Option<TimerHandle>,
    pub(super) transition: Option<TransitionId>,
    pub(super) observer: Option<ObserverToken>,
    pub(super) constraints: ConstraintSet,
    pub(super) elements: Option<ContentElements>,
    pub(super) message_wrap_width: f32,
}

impl Default for Banner {
    fn default() -> Self {
        Self::new()
    }
}

impl Banner {
    /// Creates an empty banner with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: BannerId::new(),
            view: ViewId::new(),
            content_view: ViewId::new(),
            custom_content: None,
            container: None,
            content: Content::default(),
            duration: DisplayDuration::default(),
            animation_type: AnimationType::default(),
            timing: AnimationTiming::default(),
            margins: Margins::default(),
            content_insets: EdgeInsets::content_default(),
            corner_radius: CornerRadius::default(),
            action_max_width: ActionMaxWidth::default(),
            dismiss_on_swipe: false,
            margins_on_custom_content: false,
            safe_area: SafeAreaPolicy::default(),
            on_tap: None,
            on_swipe: None,
            on_action: None,
            on_second_action: None,
            on_dismiss: None,
            host: None,
            attached_to: None,
            phase: Phase::Idle,
            timer: None,
            transition: None,
            observer: None,
            constraints: ConstraintSet::new(),
            elements: None,
            message_wrap_width: 0.0,
        }
    }

    #[must_use]
    pub fn with_message(message: impl Into<String>, duration: DisplayDuration) -> Self {
        let mut banner = Self::new();
        banner.content.message = message.into();
        banner.duration = duration;
        banner
    }

    /// Creates a banner displaying a host view instead of the built-in
    /// content layout.
    #[must_use]
    pub fn with_custom_content(content: ViewId, duration: DisplayDuration) -> Self {
        let mut banner = Self::new();
        banner.custom_content = Some(content);
        banner.duration = duration;
        banner
    }

    #[must_use]
    pub fn with_action(
        message: impl Into<String>,
        duration: DisplayDuration,
        action_title: impl Into<String>,
        on_action: impl FnMut(&mut Banner) + 'static,
    ) -> Self {
        let mut banner = Self::with_message(message, duration);
        banner.content.action_title = action_title.into();
        banner.on_action = Some(Box::new(on_action));
        banner
    }

    #[must_use]
    pub fn with_action_and_fonts(
        message: impl Into<String>,
        duration: DisplayDuration,
        action_title: impl Into<String>,
        message_font: FontSpec,
        action_font: FontSpec,
        on_action: impl FnMut(&mut Banner) + 'static,
    ) -> Self {
        let mut banner = Self::with_action(message, duration, action_title, on_action);
        banner.content.appearance.message_font = message_font;
        banner.content.appearance.action_font = action_font;
        banner
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn id(&self) -> BannerId {
        self.id
    }

    /// The banner's own view in the host tree.
    #[must_use]
    pub fn view_id(&self) -> ViewId {
        self.view
    }

    /// The view holding the built-in content elements.
    #[must_use]
    pub fn content_view_id(&self) -> ViewId {
        self.content_view
    }

    #[must_use]
    pub fn custom_content(&self) -> Option<ViewId> {
        self.custom_content
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The container the banner is attached to, if any.
    #[must_use]
    pub fn attached_to(&self) -> Option<ViewId> {
        self.attached_to
    }

    #[must_use]
    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    #[must_use]
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// The built content elements, `None` before the first show.
    #[must_use]
    pub fn elements(&self) -> Option<&ContentElements> {
        self.elements.as_ref()
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.content.message
    }

    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration
    }

    #[must_use]
    pub fn animation_type(&self) -> AnimationType {
        self.animation_type
    }

    #[must_use]
    pub fn animation_timing(&self) -> AnimationTiming {
        self.timing
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    #[must_use]
    pub fn content_insets(&self) -> EdgeInsets {
        self.content_insets
    }

    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius.value()
    }

    #[must_use]
    pub fn action_max_width(&self) -> f32 {
        self.action_max_width.value()
    }

    #[must_use]
    pub fn dismiss_on_swipe(&self) -> bool {
        self.dismiss_on_swipe
    }

    #[must_use]
    pub fn margins_on_custom_content(&self) -> bool {
        self.margins_on_custom_content
    }

    #[must_use]
    pub fn safe_area_policy(&self) -> SafeAreaPolicy {
        self.safe_area
    }

    /// Width the message text currently wraps at.
    #[must_use]
    pub fn message_wrap_width(&self) -> f32 {
        self.message_wrap_width
    }

    // =========================================================================
    // Behavior
    // =========================================================================

    /// Takes effect on the next show.
    pub fn set_duration(&mut self, duration: DisplayDuration) {
        self.duration = duration;
    }

    pub fn set_animation_type(&mut self, animation_type: AnimationType) {
        self.animation_type = animation_type;
    }

    pub fn set_animation_timing(&mut self, timing: AnimationTiming) {
        self.timing = timing;
    }

    pub fn set_dismiss_on_swipe(&mut self, dismiss: bool) {
        self.dismiss_on_swipe = dismiss;
    }

    /// Keeps the left/right margins active around custom content.
    pub fn set_margins_on_custom_content(&mut self, active: bool) {
        self.margins_on_custom_content = active;
    }

    pub fn set_safe_area_policy(&mut self, policy: SafeAreaPolicy) {
        self.safe_area = policy;
    }

    /// Container to show in instead of the host's main window.
    pub fn set_container(&mut self, container: Option<ViewId>) {
        self.container = container;
    }

    /// Replaces the built-in content layout. Takes effect on the next show.
    pub fn set_custom_content(&mut self, content: Option<ViewId>) {
        self.custom_content = content;
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
        let installed = [
            self.constraints.set_constant(ConstraintKind::Left, margins.left),
            self.constraints.set_constant(ConstraintKind::Right, -margins.right),
            self.constraints.set_constant(ConstraintKind::Top, margins.top),
            self.constraints.set_constant(ConstraintKind::Bottom, -margins.bottom),
        ];
        if installed.contains(&true) {
            self.relayout();
        }
    }

    pub fn set_content_insets(&mut self, insets: EdgeInsets) {
        self.content_insets = insets;
        let installed = [
            self.constraints.set_constant(ConstraintKind::ContentTop, insets.top),
            self.constraints.set_constant(ConstraintKind::ContentLeft, insets.left),
            self.constraints.set_constant(ConstraintKind::ContentBottom, -insets.bottom),
            self.constraints.set_constant(ConstraintKind::ContentRight, -insets.right),
        ];
        if installed.contains(&true) {
            self.relayout();
        }
    }

    /// Negative radii are floored at zero.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = CornerRadius::new(radius);
        if let Some(host) = self.attached_host() {
            host.set_corner_radius(self.view, self.corner_radius.value());
        }
    }

    /// Widths below the minimum touch target are raised to it.
    pub fn set_action_max_width(&mut self, width: f32) {
        self.action_max_width = ActionMaxWidth::new(width);
        let max = self.action_max_width.value();
        let Some(visibility) = self.elements.as_ref().map(|e| e.visibility) else {
            return;
        };
        let installed = [
            self.constraints.set_constant(
                ConstraintKind::ActionMaxWidth,
                if visibility.action { max } else { 0.0 },
            ),
            self.constraints.set_constant(
                ConstraintKind::SecondActionMaxWidth,
                if visibility.second_action { max } else { 0.0 },
            ),
        ];
        if installed.contains(&true) {
            self.relayout();
        }
    }

    // =========================================================================
    // Content
    // =========================================================================

    pub fn set_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.edit_content(|c| c.message.clone_from(&message));
    }

    pub fn set_message_color(&mut self, color: Color) {
        self.edit_content(|c| c.appearance.message_color = color);
    }

    pub fn set_message_font(&mut self, font: FontSpec) {
        self.edit_content(|c| c.appearance.message_font = font);
    }

    pub fn set_message_alignment(&mut self, alignment: TextAlign) {
        self.edit_content(|c| c.appearance.message_alignment = alignment);
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.edit_content(|c| c.appearance.background = color);
    }

    pub fn set_icon(&mut self, icon: Option<Handle>) {
        self.edit_content(|c| c.icon.clone_from(&icon));
    }

    pub fn set_icon_content_mode(&mut self, mode: IconContentMode) {
        self.edit_content(|c| c.appearance.icon_mode = mode);
    }

    pub fn set_action_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.edit_content(|c| c.action_title.clone_from(&title));
    }

    pub fn set_action_icon(&mut self, icon: Option<Handle>) {
        self.edit_content(|c| c.action_icon.clone_from(&icon));
    }

    pub fn set_second_action_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.edit_content(|c| c.second_action_title.clone_from(&title));
    }

    pub fn set_action_color(&mut self, color: Color) {
        self.edit_content(|c| c.appearance.action_color = color);
    }

    pub fn set_second_action_color(&mut self, color: Color) {
        self.edit_content(|c| c.appearance.second_action_color = color);
    }

    pub fn set_action_font(&mut self, font: FontSpec) {
        self.edit_content(|c| c.appearance.action_font = font);
    }

    pub fn set_second_action_font(&mut self, font: FontSpec) {
        self.edit_content(|c| c.appearance.second_action_font = font);
    }

    /// Zero lets action titles wrap onto as many lines as they need.
    pub fn set_action_line_count(&mut self, lines: u32) {
        self.edit_content(|c| c.action_lines = ActionLineCount::new(lines));
    }

    pub fn set_separator_color(&mut self, color: Color) {
        self.edit_content(|c| c.appearance.separator_color = color);
    }

    pub fn set_indicator_style(&mut self, style: IndicatorStyle) {
        self.edit_content(|c| c.appearance.indicator_style = style);
    }

    pub fn set_indicator_color(&mut self, color: Color) {
        self.edit_content(|c| c.appearance.indicator_color = color);
    }

    // =========================================================================
    // Callbacks
    // =========================================================================

    pub fn set_tap_callback(&mut self, callback: impl FnMut(&mut Banner) + 'static) {
        self.on_tap = Some(Box::new(callback));
    }

    pub fn set_swipe_callback(
        &mut self,
        callback: impl FnMut(&mut Banner, SwipeDirection) + 'static,
    ) {
        self.on_swipe = Some(Box::new(callback));
    }

    /// Needed for the primary action button to be shown.
    pub fn set_action_callback(&mut self, callback: impl FnMut(&mut Banner) + 'static) {
        self.on_action = Some(Box::new(callback));
    }

    pub fn set_second_action_callback(&mut self, callback: impl FnMut(&mut Banner) + 'static) {
        self.on_second_action = Some(Box::new(callback));
    }

    /// Runs once per dismissal, just before the banner detaches.
    pub fn set_dismiss_callback(&mut self, callback: impl FnMut(&mut Banner) + 'static) {
        self.on_dismiss = Some(Box::new(callback));
    }

    /// Drops every registered callback.
    pub fn clear_callbacks(&mut self) {
        self.on_tap = None;
        self.on_swipe = None;
        self.on_action = None;
        self.on_second_action = None;
        self.on_dismiss = None;
    }

    // =========================================================================
    // Busy indicator
    // =========================================================================

    /// Spins the busy indicator by `elapsed`. Does nothing unless busy.
    pub fn advance_indicator(&mut self, elapsed: Duration) {
        if let Some(elements) = self.elements.as_mut().filter(|e| e.is_busy()) {
            elements.indicator_rotation = (elements.indicator_rotation
                + elapsed.as_secs_f32() * INDICATOR_RADIANS_PER_SECOND)
                % TAU;
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// The host while attached.
    pub(super) fn attached_host(&self) -> Option<Rc<dyn Host>> {
        self.host.clone()
    }

    /// Pushes the constraint set to the host and lays out the container.
    pub(super) fn relayout(&self) {
        if let (Some(host), Some(container)) = (self.host.as_ref(), self.attached_to) {
            host.apply_constraints(self.view, &self.constraints);
            host.layout_if_needed(container);
        }
    }

    /// Writes to the buffered store and, once built, to the elements.
    fn edit_content(&mut self, edit: impl Fn(&mut Content)) {
        edit(&mut self.content);
        if let Some(elements) = self.elements.as_mut() {
            edit(&mut elements.content);
            if let Some(host) = self.host.as_ref() {
                host.content_changed(self.view);
            }
        }
    }

    fn callback_slot(&mut self, slot: CallbackSlot) -> &mut Option<Callback> {
        match slot {
            CallbackSlot::Tap => &mut self.on_tap,
            CallbackSlot::Action => &mut self.on_action,
            CallbackSlot::SecondAction => &mut self.on_second_action,
            CallbackSlot::Dismiss => &mut self.on_dismiss,
        }
    }

    /// Calls the callback in `slot` with the banner itself.
    ///
    /// A replacement registered from inside the callback wins over the
    /// original.
    pub(super) fn invoke(&mut self, slot: CallbackSlot) {
        let Some(mut callback) = self.callback_slot(slot).take() else {
            return;
        };
        callback(self);
        let current = self.callback_slot(slot);
        if current.is_none() {
            *current = Some(callback);
        }
    }

    pub(super) fn invoke_swipe(&mut self, direction: SwipeDirection) {
        let Some(mut callback) = self.on_swipe.take() else {
            return;
        };
        callback(self, direction);
        if self.on_swipe.is_none() {
            self.on_swipe = Some(callback);
        }
    }

    pub(super) fn has_callback(&self, slot: CallbackSlot) -> bool {
        match slot {
            CallbackSlot::Tap => self.on_tap.is_some(),
            CallbackSlot::Action => self.on_action.is_some(),
            CallbackSlot::SecondAction => self.on_second_action.is_some(),
            CallbackSlot::Dismiss => self.on_dismiss.is_some(),
        }
    }
}

impl fmt::Debug for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Banner")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("message", &self.content.message)
            .field("duration", &self.duration)
            .field("animation_type", &self.animation_type)
            .field("attached_to", &self.attached_to)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

impl Drop for Banner {
    fn drop(&mut self) {
        if self.phase.is_attached() {
            self.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn defaults_match_documented_values() {
        let banner = Banner::new();
        assert_eq!(banner.duration(), DisplayDuration::Short);
        assert_eq!(
            banner.animation_type(),
            AnimationType::SlideFromBottomBackToBottom
        );
        assert_eq!(banner.margins(), Margins::uniform(4.0));
        assert_eq!(banner.content_insets(), EdgeInsets::new(0.0, 4.0, 0.0, 4.0));
        assert_eq!(banner.corner_radius(), 4.0);
        assert_eq!(banner.action_max_width(), 64.0);
        assert!(!banner.dismiss_on_swipe());
        assert!(!banner.margins_on_custom_content());
        assert!(banner.phase().is_idle());
    }

    #[test]
    fn corner_radius_is_floored_at_zero() {
        let mut banner = Banner::new();
        banner.set_corner_radius(-5.0);
        assert_eq!(banner.corner_radius(), 0.0);
    }

    #[test]
    fn action_max_width_is_floored_at_touch_target() {
        let mut banner = Banner::new();
        banner.set_action_max_width(10.0);
        assert_eq!(banner.action_max_width(), 44.0);
    }

    #[test]
    fn content_is_buffered_before_first_show() {
        let mut banner = Banner::with_message("Saved", DisplayDuration::Middle);
        banner.set_message("Deleted");
        banner.set_action_title("Undo");
        assert!(banner.elements().is_none());
        assert_eq!(banner.message(), "Deleted");
        assert_eq!(banner.content().action_title, "Undo");
    }

    #[test]
    fn geometry_setters_on_detached_banner_install_nothing() {
        let mut banner = Banner::new();
        banner.set_margins(Margins::uniform(12.0));
        banner.set_content_insets(EdgeInsets::new(1.0, 2.0, 3.0, 4.0));
        assert!(banner.constraints().is_empty());
        assert_eq!(banner.margins().left, 12.0);
    }

    #[test]
    fn with_action_and_fonts_stores_fonts() {
        let font = FontSpec::bold(18.0);
        let banner = Banner::with_action_and_fonts(
            "Archived",
            DisplayDuration::Long,
            "Undo",
            font,
            FontSpec::bold(12.0),
            |_| {},
        );
        assert_eq!(banner.content().appearance.message_font, font);
        assert_eq!(banner.content().appearance.action_font.size, 12.0);
        assert!(banner.has_callback(CallbackSlot::Action));
    }

    #[test]
    fn callback_may_replace_itself() {
        let calls = Rc::new(Cell::new(0));
        let mut banner = Banner::new();
        let counter = Rc::clone(&calls);
        banner.set_tap_callback(move |banner| {
            counter.set(counter.get() + 1);
            let inner = Rc::clone(&counter);
            banner.set_tap_callback(move |_| inner.set(inner.get() + 100));
        });

        banner.invoke(CallbackSlot::Tap);
        banner.invoke(CallbackSlot::Tap);
        assert_eq!(calls.get(), 101);
    }

    #[test]
    fn callback_survives_invocation() {
        let calls = Rc::new(Cell::new(0));
        let mut banner = Banner::new();
        let counter = Rc::clone(&calls);
        banner.set_swipe_callback(move |_, direction| {
            assert_eq!(direction, SwipeDirection::Left);
            counter.set(counter.get() + 1);
        });

        banner.invoke_swipe(SwipeDirection::Left);
        banner.invoke_swipe(SwipeDirection::Left);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn indicator_only_spins_while_busy() {
        let mut banner = Banner::new();
        banner.advance_indicator(Duration::from_millis(250));
        assert!(banner.elements().is_none());

        let mut elements = ContentElements::new(Content::default());
        elements.enter_busy();
        banner.elements = Some(elements);
        banner.advance_indicator(Duration::from_millis(250));
        let rotation = banner.elements().map(|e| e.indicator_rotation);
        assert!(rotation.is_some_and(|r| (r - TAU / 4.0).abs() < 1e-4));
    }
}

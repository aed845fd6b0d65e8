// SPDX-License-Identifier: MPL-2.0
use iced::widget::image::Handle;
use iced_snackbar::application::port::{ViewId, ViewTree};
use iced_snackbar::domain::layout::ConstraintKind;
use iced_snackbar::domain::snackbar::{
    ActionButton, AnimationType, DisplayDuration, Margins, Phase, SwipeDirection,
};
use iced_snackbar::infrastructure::HeadlessHost;
use iced_snackbar::ui::snackbar::{Banner, Visibility};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

fn host() -> Rc<HeadlessHost> {
    Rc::new(HeadlessHost::new(320.0))
}

fn counter() -> (Rc<Cell<u32>>, impl FnMut(&mut Banner) + 'static) {
    let count = Rc::new(Cell::new(0));
    let seen = count.clone();
    (count, move |_: &mut Banner| seen.set(seen.get() + 1))
}

fn shown_visibility(mut banner: Banner) -> Visibility {
    let host = host();
    banner.show(host.clone());
    banner.elements().expect("elements are built on show").visibility
}

// =============================================================================
// Gestures
// =============================================================================

#[test]
fn tap_notifies_without_dismissing() {
    let host = host();
    let mut banner = Banner::with_message("Tap me", DisplayDuration::Forever);
    let (taps, on_tap) = counter();
    banner.set_tap_callback(on_tap);

    banner.show(host.clone());
    host.tap(banner.id());
    host.tap(banner.id());
    host.pump(&mut banner);

    assert_eq!(taps.get(), 2);
    assert_eq!(banner.phase(), Phase::Showing);
}

#[test]
fn swipe_left_leaves_to_the_left() {
    let host = host();
    let mut banner = Banner::with_message("Swipe me", DisplayDuration::Forever);
    banner.set_dismiss_on_swipe(true);
    let directions = Rc::new(RefCell::new(Vec::new()));
    let seen = directions.clone();
    banner.set_swipe_callback(move |_, direction| seen.borrow_mut().push(direction));
    let (dismissals, on_dismiss) = counter();
    banner.set_dismiss_callback(on_dismiss);

    banner.show(host.clone());
    host.swipe(banner.id(), SwipeDirection::Left);
    host.pump(&mut banner);

    assert_eq!(*directions.borrow(), vec![SwipeDirection::Left]);
    assert_eq!(banner.animation_type(), AnimationType::SlideFromRightToLeft);
    assert_eq!(banner.phase(), Phase::Dismissing);

    host.advance_and_pump(Duration::from_millis(300), &mut banner);
    assert_eq!(banner.phase(), Phase::Idle);
    assert_eq!(dismissals.get(), 1);
}

#[test]
fn vertical_swipe_leaves_through_the_top() {
    let host = host();
    let mut banner = Banner::with_message("Up", DisplayDuration::Forever);
    banner.set_dismiss_on_swipe(true);

    banner.show(host.clone());
    host.swipe(banner.id(), SwipeDirection::Down);
    host.pump(&mut banner);

    assert_eq!(banner.animation_type(), AnimationType::SlideFromTopBackToTop);
    let constraints = host.constraints_of(banner.view_id());
    assert!(constraints.is_active(ConstraintKind::Top));
    assert!(!constraints.is_active(ConstraintKind::Bottom));
}

#[test]
fn swipe_only_notifies_unless_enabled() {
    let host = host();
    let mut banner = Banner::with_message("Stay", DisplayDuration::Forever);
    let swipes = Rc::new(Cell::new(0));
    let seen = swipes.clone();
    banner.set_swipe_callback(move |_, _| seen.set(seen.get() + 1));

    banner.show(host.clone());
    host.swipe(banner.id(), SwipeDirection::Right);
    host.pump(&mut banner);

    assert_eq!(swipes.get(), 1);
    assert_eq!(banner.phase(), Phase::Showing);
    assert_eq!(
        banner.animation_type(),
        AnimationType::SlideFromBottomBackToBottom
    );
}

// =============================================================================
// Actions
// =============================================================================

#[test]
fn action_button_needs_a_title_or_icon_and_a_callback() {
    let message_only = Banner::with_message("Plain", DisplayDuration::Short);
    assert_eq!(shown_visibility(message_only), Visibility::default());

    let mut titled_without_callback = Banner::with_message("No call", DisplayDuration::Short);
    titled_without_callback.set_action_title("Undo");
    let visibility = shown_visibility(titled_without_callback);
    assert!(!visibility.action);
    assert!(!visibility.separator);

    let with_action = Banner::with_action("Deleted", DisplayDuration::Short, "Undo", |_| {});
    let visibility = shown_visibility(with_action);
    assert!(visibility.action);
    assert!(visibility.separator);
    assert!(!visibility.second_action);
    assert!(!visibility.indicator);

    let mut icon_action = Banner::with_message("Icon", DisplayDuration::Short);
    icon_action.set_action_icon(Some(Handle::from_path("undo.png")));
    icon_action.set_action_callback(|_| {});
    assert!(shown_visibility(icon_action).action);

    let mut both = Banner::with_action("Two", DisplayDuration::Short, "Undo", |_| {});
    both.set_second_action_title("Redo");
    both.set_second_action_callback(|_| {});
    let visibility = shown_visibility(both);
    assert!(visibility.action);
    assert!(visibility.second_action);
}

#[test]
fn icon_reserves_its_slot() {
    let host = host();
    let mut banner = Banner::with_message("With icon", DisplayDuration::Short);
    banner.set_icon(Some(Handle::from_path("info.png")));

    banner.show(host.clone());
    assert!(banner.elements().expect("elements").visibility.icon);
    assert_eq!(
        banner.constraints().constant(ConstraintKind::IconWidth),
        Some(32.0)
    );
}

#[test]
fn action_on_timed_banner_dismisses_after_callback() {
    let host = host();
    let (presses, on_action) = counter();
    let mut banner = Banner::with_action("Deleted", DisplayDuration::Long, "Undo", on_action);

    banner.show(host.clone());
    host.press(banner.id(), ActionButton::Primary);
    host.pump(&mut banner);

    assert_eq!(presses.get(), 1);
    assert_eq!(banner.phase(), Phase::Dismissing);
    assert!(!banner.is_timer_armed());
}

#[test]
fn action_on_forever_banner_enters_busy_state() {
    let host = host();
    let (presses, on_action) = counter();
    let mut banner = Banner::with_action("Retrying", DisplayDuration::Forever, "Retry", on_action);

    banner.show(host.clone());
    let revision = host.content_revision(banner.view_id());
    host.press(banner.id(), ActionButton::Primary);
    host.pump(&mut banner);

    assert_eq!(presses.get(), 1);
    assert_eq!(banner.phase(), Phase::Showing);
    let elements = banner.elements().expect("elements");
    assert!(elements.is_busy());
    assert!(elements.visibility.indicator);
    assert!(!elements.visibility.action);
    assert!(!elements.visibility.separator);
    assert!(host.content_revision(banner.view_id()) > revision);

    banner.advance_indicator(Duration::from_millis(250));
    assert!(banner.elements().expect("elements").indicator_rotation > 0.0);

    // The button is hidden now, so a second press goes nowhere.
    host.press(banner.id(), ActionButton::Primary);
    host.pump(&mut banner);
    assert_eq!(presses.get(), 1);

    banner.dismiss_now(true);
    let elements = banner.elements().expect("elements");
    assert!(!elements.is_busy());
    assert!(!elements.visibility.indicator);
}

#[test]
fn second_action_alone_dismisses_forever_banner() {
    let host = host();
    let mut banner = Banner::with_message("Second", DisplayDuration::Forever);
    let (presses, on_second) = counter();
    banner.set_second_action_title("Later");
    banner.set_second_action_callback(on_second);

    banner.show(host.clone());
    host.press(banner.id(), ActionButton::Secondary);
    host.pump(&mut banner);

    assert_eq!(presses.get(), 1);
    assert_eq!(banner.phase(), Phase::Dismissing);
}

#[test]
fn press_on_hidden_button_is_ignored() {
    let host = host();
    let mut banner = Banner::with_message("Hidden", DisplayDuration::Forever);
    banner.set_action_title("Undo");

    banner.show(host.clone());
    host.press(banner.id(), ActionButton::Primary);
    host.press(banner.id(), ActionButton::Secondary);
    host.pump(&mut banner);

    assert_eq!(banner.phase(), Phase::Showing);
    assert!(!banner.elements().expect("elements").is_busy());
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn vertical_anchor_constraints_are_exclusive() {
    let host = host();
    let mut bottom = Banner::with_message("Bottom", DisplayDuration::Short);
    bottom.show(host.clone());
    let constraints = host.constraints_of(bottom.view_id());
    assert!(constraints.is_active(ConstraintKind::Bottom));
    assert!(!constraints.is_active(ConstraintKind::Top));

    let mut top = Banner::with_message("Top", DisplayDuration::Short);
    top.set_animation_type(AnimationType::SlideFromTopToBottom);
    top.show(host.clone());
    let constraints = host.constraints_of(top.view_id());
    assert!(constraints.is_active(ConstraintKind::Top));
    assert!(!constraints.is_active(ConstraintKind::Bottom));
    assert_eq!(constraints.constant(ConstraintKind::Top), Some(4.0));
}

#[test]
fn geometry_setters_apply_while_attached() {
    let host = host();
    let mut banner = Banner::with_action("Resize", DisplayDuration::Forever, "Undo", |_| {});
    banner.show(host.clone());
    host.pump(&mut banner);
    // 312 wide card, minus insets and the 64 pt action slot.
    assert_eq!(banner.message_wrap_width(), 240.0);

    banner.set_margins(Margins::uniform(10.0));
    host.pump(&mut banner);
    let view = banner.view_id();
    assert_eq!(
        host.constraints_of(view).constant(ConstraintKind::Left),
        Some(10.0)
    );
    assert_eq!(host.width(view), 300.0);
    assert_eq!(banner.message_wrap_width(), 228.0);

    banner.set_action_max_width(100.0);
    host.pump(&mut banner);
    assert_eq!(banner.message_wrap_width(), 192.0);

    banner.set_corner_radius(-2.0);
    assert_eq!(host.corner_radius(view), 0.0);
    banner.set_corner_radius(12.0);
    assert_eq!(host.corner_radius(view), 12.0);
}

#[test]
fn action_max_width_is_raised_to_touch_target() {
    let mut banner = Banner::with_message("Narrow", DisplayDuration::Short);
    banner.set_action_max_width(10.0);
    assert_eq!(banner.action_max_width(), 44.0);
}

#[test]
fn custom_content_is_centered_without_margins() {
    let host = host();
    let custom = ViewId::new();
    let mut banner = Banner::with_custom_content(custom, DisplayDuration::Short);

    banner.show(host.clone());
    host.pump(&mut banner);

    assert!(host.children_of(banner.view_id()).contains(&custom));
    let constraints = banner.constraints();
    assert!(constraints.is_active(ConstraintKind::CenterX));
    assert!(!constraints.is_active(ConstraintKind::Left));
    assert!(!constraints.is_active(ConstraintKind::Right));
    assert!(constraints.get(ConstraintKind::IconWidth).is_none());
    assert_eq!(banner.message_wrap_width(), 0.0);
}

#[test]
fn custom_content_can_keep_margins() {
    let host = host();
    let mut banner = Banner::with_custom_content(ViewId::new(), DisplayDuration::Short);
    banner.set_margins_on_custom_content(true);

    banner.show(host.clone());
    let constraints = banner.constraints();
    assert!(constraints.is_active(ConstraintKind::Left));
    assert!(constraints.is_active(ConstraintKind::Right));
    assert!(constraints.is_active(ConstraintKind::CenterX));
}

#[test]
fn content_setters_reach_shown_elements() {
    let host = host();
    let mut banner = Banner::with_message("Before", DisplayDuration::Forever);
    banner.show(host.clone());
    let revision = host.content_revision(banner.view_id());

    banner.set_message("After");
    assert_eq!(banner.message(), "After");
    assert_eq!(
        banner.elements().expect("elements").content.message,
        "After"
    );
    assert_eq!(host.content_revision(banner.view_id()), revision + 1);
}

// SPDX-License-Identifier: MPL-2.0
//! Show and dismiss.
//!
//! `Idle` → `Showing` → `Dismissing` → `Idle`. The phase is the only guard:
//! whichever trigger (timer, swipe, action, manual call) first observes
//! `Showing` starts the dismissal, every later one is a no-op.

use super::banner::{Banner, CallbackSlot};
use super::content::{ContentElements, Visibility};
use crate::application::animation::{self, Geometry, Plan, Stage};
use crate::application::port::{Event, Host, RemoteDismiss, ViewId};
use crate::domain::layout::{Constraint, ConstraintKind, Priority};
use crate::domain::snackbar::Phase;
use crate::error::{Error, Result};
use crate::ui::design_tokens::sizing;
use std::rc::Rc;

impl Banner {
    /// Shows the banner on `host`.
    ///
    /// Does nothing if the banner is already showing or dismissing.
    ///
    /// # Panics
    ///
    /// Panics if no container is set and the host has no main window. Use
    /// [`try_show`](Banner::try_show) to handle that case.
    pub fn show(&mut self, host: Rc<dyn Host>) {
        if let Err(err) = self.try_show(host) {
            panic!("{err}");
        }
    }

    /// Shows the banner on `host`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoHost`] if no container is set and the host has no
    /// main window.
    pub fn try_show(&mut self, host: Rc<dyn Host>) -> Result<()> {
        if !self.phase.is_idle() {
            tracing::debug!(banner = self.id.raw(), phase = ?self.phase, "show ignored");
            return Ok(());
        }
        let container = self
            .container
            .or_else(|| host.main_window())
            .ok_or(Error::NoHost)?;

        self.timer = self
            .duration
            .auto_dismiss_after()
            .map(|after| host.schedule_once(self.id, after));

        let visibility = self.build_elements();
        self.install_constraints(visibility);

        let content = self.custom_content.unwrap_or(self.content_view);
        host.add_subview(self.view, content);
        host.add_subview(container, self.view);
        host.set_corner_radius(self.view, self.corner_radius.value());
        host.apply_constraints(self.view, &self.constraints);
        host.content_changed(self.view);
        self.observer = Some(host.add_observer(self.id));

        self.host = Some(host);
        self.attached_to = Some(container);
        self.phase = Phase::Showing;
        tracing::debug!(
            banner = self.id.raw(),
            container = container.raw(),
            duration = %self.duration,
            animation = %self.animation_type,
            "banner shown"
        );

        self.animate_in(container);
        Ok(())
    }

    /// Requests dismissal on the UI context.
    ///
    /// The request comes back through [`update`](Banner::update) as
    /// [`Event::DismissRequested`]. Does nothing while detached.
    pub fn dismiss(&self) {
        match self.host.as_ref() {
            Some(host) => host.post(self.id, Event::DismissRequested),
            None => tracing::trace!(banner = self.id.raw(), "dismiss while detached"),
        }
    }

    /// A handle other threads can use to request dismissal.
    ///
    /// `None` while the banner is not attached.
    #[must_use]
    pub fn remote_dismiss(&self) -> Option<RemoteDismiss> {
        self.host
            .as_ref()
            .map(|host| RemoteDismiss::new(self.id, host.remote()))
    }

    /// Dismisses right away. A no-op unless the banner is showing.
    ///
    /// With `animated` the dismiss callback runs once the exit transition
    /// finishes, otherwise before this returns.
    pub fn dismiss_now(&mut self, animated: bool) {
        if !self.phase.can_dismiss() {
            tracing::trace!(banner = self.id.raw(), phase = ?self.phase, "dismiss ignored");
            return;
        }
        let Some(host) = self.attached_host() else {
            return;
        };
        if let Some(timer) = self.timer.take() {
            host.invalidate(timer);
        }
        if let Some(elements) = self.elements.as_mut().filter(|e| e.is_busy()) {
            elements.stop_indicator();
            host.content_changed(self.view);
        }
        self.phase = Phase::Dismissing;
        tracing::debug!(banner = self.id.raw(), animated, "dismissing");

        match (animated, self.attached_to) {
            (true, Some(container)) => self.animate_out(host.as_ref(), container),
            _ => self.finish_dismissal(),
        }
    }

    /// Applies one event delivered by the host.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::TimerFired(handle) => {
                if self.timer == Some(handle) {
                    self.dismiss_now(true);
                } else {
                    tracing::trace!(banner = self.id.raw(), timer = handle.raw(), "stale timer");
                }
            }
            Event::DismissRequested => self.dismiss_now(true),
            Event::TransitionFinished(id) => {
                if self.transition != Some(id) {
                    tracing::trace!(banner = self.id.raw(), transition = id.raw(), "stale transition");
                    return;
                }
                self.transition = None;
                if self.phase.is_dismissing() {
                    self.finish_dismissal();
                }
            }
            Event::OrientationChanged => self.handle_orientation_changed(),
            Event::LayoutPassed => self.handle_layout_passed(),
            Event::Tapped => self.handle_tap(),
            Event::Swiped(direction) => self.handle_swipe(direction),
            Event::ActionPressed(button) => self.handle_action(button),
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Builds the elements on first use and resolves visibility.
    fn build_elements(&mut self) -> Visibility {
        let visibility = Visibility::resolve(
            &self.content,
            self.has_callback(CallbackSlot::Action),
            self.has_callback(CallbackSlot::SecondAction),
        );
        let elements = self
            .elements
            .get_or_insert_with(|| ContentElements::new(self.content.clone()));
        elements.visibility = visibility;
        elements.indicator_rotation = 0.0;
        visibility
    }

    fn install_constraints(&mut self, visibility: Visibility) {
        let margins = self.margins;
        let insets = self.content_insets;
        let custom = self.custom_content.is_some();
        let horizontal_margins = !custom || self.margins_on_custom_content;
        let edge = |constant: f32| Constraint::equal(constant).with_priority(Priority::HIGH);

        let set = &mut self.constraints;
        set.clear();
        set.insert(ConstraintKind::ContentTop, Constraint::equal(insets.top));
        set.insert(ConstraintKind::ContentLeft, Constraint::equal(insets.left));
        set.insert(ConstraintKind::ContentBottom, Constraint::equal(-insets.bottom));
        set.insert(ConstraintKind::ContentRight, Constraint::equal(-insets.right));

        set.insert(ConstraintKind::Left, edge(margins.left).with_active(horizontal_margins));
        set.insert(ConstraintKind::Right, edge(-margins.right).with_active(horizontal_margins));
        set.insert(ConstraintKind::Top, edge(margins.top).with_active(false));
        set.insert(ConstraintKind::Bottom, edge(-margins.bottom));
        set.insert(ConstraintKind::CenterX, edge(0.0).with_active(custom));
        set.insert(ConstraintKind::MinHeight, Constraint::at_least(sizing::MIN_HEIGHT));

        if !custom {
            let max_width = self.action_max_width.value();
            set.insert(
                ConstraintKind::IconWidth,
                Constraint::equal(if visibility.icon { sizing::ICON_WIDTH } else { 0.0 }),
            );
            set.insert(
                ConstraintKind::ActionMaxWidth,
                Constraint::at_most(if visibility.action { max_width } else { 0.0 }),
            );
            set.insert(
                ConstraintKind::SecondActionMaxWidth,
                Constraint::at_most(if visibility.second_action { max_width } else { 0.0 }),
            );
        }
    }

    fn stage(&self, container: ViewId) -> Stage {
        Stage {
            target: self.id,
            container,
            view: self.view,
        }
    }

    fn animate_in(&mut self, container: ViewId) {
        let Some(host) = self.attached_host() else {
            return;
        };
        let host_width = host.width(container);
        let height = host.fitting_height(
            self.view,
            host_width - self.margins.horizontal(),
            sizing::MIN_HEIGHT,
        );
        let geometry = Geometry {
            height,
            host_width,
            margins: self.margins,
            safe_area: host.safe_area_insets(container),
        };
        let plan = Plan::entrance(self.animation_type, &geometry);
        self.transition = Some(animation::run(
            host.as_ref(),
            self.stage(container),
            &mut self.constraints,
            &plan,
            self.timing,
        ));
    }

    fn animate_out(&mut self, host: &dyn Host, container: ViewId) {
        let geometry = Geometry {
            height: host.frame_height(self.view),
            host_width: host.width(container),
            margins: self.margins,
            safe_area: host.safe_area_insets(container),
        };
        let plan = Plan::exit(self.animation_type, &geometry, &self.safe_area);
        self.transition = Some(animation::run(
            host,
            self.stage(container),
            &mut self.constraints,
            &plan,
            self.timing,
        ));
    }

    fn finish_dismissal(&mut self) {
        self.invoke(CallbackSlot::Dismiss);
        self.detach();
    }

    /// Leaves the host and returns to `Idle`.
    pub(super) fn detach(&mut self) {
        if let Some(host) = self.host.take() {
            host.remove_from_superview(self.view);
            if let Some(token) = self.observer.take() {
                host.remove_observer(token);
            }
            if let Some(timer) = self.timer.take() {
                host.invalidate(timer);
            }
        }
        self.constraints.clear();
        self.attached_to = None;
        self.transition = None;
        self.phase = Phase::Idle;
        tracing::debug!(banner = self.id.raw(), "banner detached");
    }
}

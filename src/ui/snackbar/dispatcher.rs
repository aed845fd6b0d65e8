// SPDX-License-Identifier: MPL-2.0
//! Gesture and action routing.

use super::banner::{Banner, CallbackSlot};
use crate::domain::snackbar::{ActionButton, AnimationType, SwipeDirection};

impl Banner {
    /// Taps only notify; they never dismiss.
    pub(super) fn handle_tap(&mut self) {
        if !self.phase.is_showing() {
            return;
        }
        self.invoke(CallbackSlot::Tap);
    }

    pub(super) fn handle_swipe(&mut self, direction: SwipeDirection) {
        if !self.phase.is_showing() {
            return;
        }
        self.invoke_swipe(direction);
        if self.dismiss_on_swipe {
            self.animation_type = AnimationType::for_swipe(direction);
            self.dismiss();
        }
    }

    /// Runs the button's callback, then either enters the busy state
    /// (forever banners with a visible primary button) or dismisses.
    pub(super) fn handle_action(&mut self, button: ActionButton) {
        if !self.phase.is_showing() {
            return;
        }
        let Some(visibility) = self.elements.as_ref().map(|e| e.visibility) else {
            return;
        };
        let (slot, visible) = match button {
            ActionButton::Primary => (CallbackSlot::Action, visibility.action),
            ActionButton::Secondary => (CallbackSlot::SecondAction, visibility.second_action),
        };
        if !visible {
            tracing::trace!(banner = self.id.raw(), ?button, "press on hidden button");
            return;
        }

        self.invoke(slot);

        let primary_visible = self.elements.as_ref().is_some_and(|e| e.visibility.action);
        if self.duration.is_forever() && primary_visible {
            if !self.phase.is_showing() {
                return;
            }
            if let Some(elements) = self.elements.as_mut() {
                elements.enter_busy();
            }
            if let Some(host) = self.attached_host() {
                host.content_changed(self.view);
            }
            tracing::debug!(banner = self.id.raw(), "busy");
        } else {
            self.dismiss_now(true);
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Keeps the message wrap width in step with its laid-out width.

use super::banner::Banner;

impl Banner {
    /// After a layout pass, adopt the message's frame width as its wrap
    /// width and lay out again if it moved.
    pub(super) fn handle_layout_passed(&mut self) {
        if self.custom_content.is_some() {
            return;
        }
        let Some(host) = self.attached_host() else {
            return;
        };
        let frame_width = host.message_frame_width(self.view);
        if (frame_width - self.message_wrap_width).abs() > f32::EPSILON {
            self.message_wrap_width = frame_width;
            host.set_message_wrap_width(self.view, frame_width);
            host.set_needs_layout(self.view);
        }
    }

    pub(super) fn handle_orientation_changed(&mut self) {
        let Some(host) = self.attached_host() else {
            return;
        };
        let frame_width = host.message_frame_width(self.view);
        self.message_wrap_width = frame_width;
        host.set_message_wrap_width(self.view, frame_width);
        host.layout_if_needed(self.view);
        tracing::trace!(banner = self.id.raw(), frame_width, "orientation changed");
    }
}

// SPDX-License-Identifier: MPL-2.0
//! In-memory host.
//!
//! Implements the full [`Host`](crate::application::port::Host) port
//! without a window system: a view tree, per-view constraint storage, a
//! virtual clock driving timers and transitions, an orientation feed and
//! gesture simulation. Used by the demo binary and the integration tests.
//!
//! # Layout model
//!
//! A banner view is as wide as its container minus the installed left and
//! right constraints, and as tall as the configured content height (never
//! below the requested minimum). The message element gets whatever width
//! the content insets, icon and action buttons leave.
//!
//! # Example
//!
//! ```
//! use iced_snackbar::domain::snackbar::DisplayDuration;
//! use iced_snackbar::infrastructure::HeadlessHost;
//! use iced_snackbar::ui::snackbar::Banner;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let host = Rc::new(HeadlessHost::new(320.0));
//! let mut banner = Banner::with_message("Saved", DisplayDuration::Short);
//! banner.show(host.clone());
//!
//! host.advance_and_pump(Duration::from_secs(2), &mut banner);
//! assert!(banner.phase().is_idle());
//! ```

use crate::application::animation::Transition;
use crate::application::port::{
    Animator, BannerId, ConstraintLayout, Event, ObserverToken, OrientationFeed,
    RemoteDispatcher, TimerHandle, TransitionId, UiScheduler, ViewId, ViewTree,
};
use crate::domain::layout::{ConstraintKind, ConstraintSet};
use crate::domain::snackbar::{ActionButton, EdgeInsets, SwipeDirection};
use crate::ui::design_tokens::sizing;
use crate::ui::snackbar::Banner;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Height every banner lays out at unless configured otherwise.
const DEFAULT_CONTENT_HEIGHT: f32 = sizing::DEFAULT_FRAME_HEIGHT;

#[derive(Debug, Clone, Default)]
struct ViewNode {
    parent: Option<ViewId>,
    /// Fixed width of containers. `None` for views sized by constraints.
    fixed_width: Option<f32>,
    safe_area: EdgeInsets,
    height: f32,
    alpha: f32,
    corner_radius: f32,
    constraints: ConstraintSet,
    message_wrap_width: f32,
    layout_passes: u32,
    content_revision: u32,
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    handle: TimerHandle,
    target: BannerId,
    due: Duration,
}

#[derive(Debug, Clone, Copy)]
struct PendingTransition {
    id: TransitionId,
    target: BannerId,
    due: Duration,
}

#[derive(Debug)]
struct State {
    clock: Duration,
    main_window: Option<ViewId>,
    views: HashMap<ViewId, ViewNode>,
    /// Banner owning each animated view, learned from `animate`.
    owners: HashMap<ViewId, BannerId>,
    content_height: f32,
    timers: Vec<PendingTimer>,
    transitions: Vec<PendingTransition>,
    history: Vec<Transition>,
    queue: VecDeque<(BannerId, Event)>,
    observers: BTreeMap<ObserverToken, BannerId>,
    needs_layout: BTreeSet<ViewId>,
    next_handle: u64,
}

impl State {
    fn next_handle(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }

    fn node_mut(&mut self, view: ViewId) -> &mut ViewNode {
        self.views.entry(view).or_insert_with(|| ViewNode {
            alpha: 1.0,
            ..ViewNode::default()
        })
    }

    fn width(&self, view: ViewId) -> f32 {
        let Some(node) = self.views.get(&view) else {
            return sizing::DEFAULT_FRAME_WIDTH;
        };
        if let Some(width) = node.fixed_width {
            return width;
        }
        let Some(parent) = node.parent else {
            return sizing::DEFAULT_FRAME_WIDTH;
        };
        let parent_width = self.width(parent);
        let c = &node.constraints;
        if c.is_active(ConstraintKind::Left) && c.is_active(ConstraintKind::Right) {
            let left = c.constant(ConstraintKind::Left).unwrap_or(0.0);
            let right = c.constant(ConstraintKind::Right).unwrap_or(0.0);
            (parent_width - left + right).max(0.0)
        } else {
            sizing::DEFAULT_FRAME_WIDTH.min(parent_width)
        }
    }

    fn message_frame_width(&self, view: ViewId) -> f32 {
        let Some(node) = self.views.get(&view) else {
            return 0.0;
        };
        let c = &node.constraints;
        let constant = |kind| c.constant(kind).unwrap_or(0.0);
        let taken = constant(ConstraintKind::ContentLeft) - constant(ConstraintKind::ContentRight)
            + constant(ConstraintKind::IconWidth)
            + constant(ConstraintKind::ActionMaxWidth)
            + constant(ConstraintKind::SecondActionMaxWidth);
        (self.width(view) - taken).max(0.0)
    }

    /// Lays out `view`, then every view below it. Banner views report
    /// each pass to their owner.
    fn layout(&mut self, view: ViewId) {
        let children: Vec<ViewId> = self
            .views
            .iter()
            .filter(|(_, node)| node.parent == Some(view))
            .map(|(id, _)| *id)
            .collect();
        let content_height = self.content_height;
        let node = self.node_mut(view);
        node.layout_passes += 1;
        if node.fixed_width.is_none() {
            node.height = content_height.max(sizing::MIN_HEIGHT);
        }
        self.needs_layout.remove(&view);
        if let Some(owner) = self.owners.get(&view).copied() {
            self.queue.push_back((owner, Event::LayoutPassed));
        }
        for child in children {
            self.layout(child);
        }
    }

    fn is_attached_to_window(&self, view: ViewId) -> bool {
        let mut current = Some(view);
        while let Some(id) = current {
            if Some(id) == self.main_window {
                return true;
            }
            current = self.views.get(&id).and_then(|node| node.parent);
        }
        false
    }
}

/// In-memory implementation of every host port.
#[derive(Debug)]
pub struct HeadlessHost {
    state: RefCell<State>,
    sender: UnboundedSender<(BannerId, Event)>,
    receiver: RefCell<UnboundedReceiver<(BannerId, Event)>>,
}

impl HeadlessHost {
    /// A host with a main window `width` units wide and no safe-area inset.
    #[must_use]
    pub fn new(width: f32) -> Self {
        let window = ViewId::new();
        let mut views = HashMap::new();
        views.insert(
            window,
            ViewNode {
                fixed_width: Some(width),
                alpha: 1.0,
                ..ViewNode::default()
            },
        );
        let (sender, receiver) = unbounded_channel();
        Self {
            state: RefCell::new(State {
                clock: Duration::ZERO,
                main_window: Some(window),
                views,
                owners: HashMap::new(),
                content_height: DEFAULT_CONTENT_HEIGHT,
                timers: Vec::new(),
                transitions: Vec::new(),
                history: Vec::new(),
                queue: VecDeque::new(),
                observers: BTreeMap::new(),
                needs_layout: BTreeSet::new(),
                next_handle: 0,
            }),
            sender,
            receiver: RefCell::new(receiver),
        }
    }

    /// A host with no main window. Banners need an explicit container.
    #[must_use]
    pub fn without_window() -> Self {
        let host = Self::new(0.0);
        host.state.borrow_mut().main_window = None;
        host
    }

    /// Sets the main window's safe-area insets.
    #[must_use]
    pub fn with_safe_area(self, insets: EdgeInsets) -> Self {
        {
            let mut state = self.state.borrow_mut();
            if let Some(window) = state.main_window {
                state.node_mut(window).safe_area = insets;
            }
        }
        self
    }

    /// Sets the height banners lay out at.
    #[must_use]
    pub fn with_content_height(self, height: f32) -> Self {
        self.state.borrow_mut().content_height = height;
        self
    }

    /// Adds a free-standing container view `width` units wide.
    pub fn add_container(&self, width: f32) -> ViewId {
        let view = ViewId::new();
        self.state.borrow_mut().node_mut(view).fixed_width = Some(width);
        view
    }

    // =========================================================================
    // Clock
    // =========================================================================

    #[must_use]
    pub fn now(&self) -> Duration {
        self.state.borrow().clock
    }

    /// Moves the clock forward, queueing every timer and transition that
    /// comes due, then runs pending layout passes.
    pub fn advance(&self, by: Duration) {
        let end = self.now() + by;
        while self.fire_next_due(end) {}
        self.state.borrow_mut().clock = end;
        self.flush_layout();
    }

    /// Like [`advance`](Self::advance), but delivers events to `banner`
    /// after each due item so that work it schedules in response also runs
    /// within the window.
    pub fn advance_and_pump(&self, by: Duration, banner: &mut Banner) {
        let end = self.now() + by;
        self.pump(banner);
        while self.fire_next_due(end) {
            self.pump(banner);
        }
        self.state.borrow_mut().clock = end;
        self.pump(banner);
    }

    /// Queues the earliest timer or transition due at or before `end`.
    fn fire_next_due(&self, end: Duration) -> bool {
        let mut state = self.state.borrow_mut();
        let timer = state
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= end)
            .min_by_key(|(_, timer)| timer.due)
            .map(|(index, timer)| (index, timer.due));
        let transition = state
            .transitions
            .iter()
            .enumerate()
            .filter(|(_, transition)| transition.due <= end)
            .min_by_key(|(_, transition)| transition.due)
            .map(|(index, transition)| (index, transition.due));

        match (timer, transition) {
            (Some((index, due)), other) if other.is_none_or(|(_, t)| due <= t) => {
                let timer = state.timers.remove(index);
                state.clock = state.clock.max(due);
                state.queue.push_back((timer.target, Event::TimerFired(timer.handle)));
                tracing::trace!(timer = timer.handle.raw(), at = ?due, "timer fired");
                true
            }
            (_, Some((index, due))) => {
                let transition = state.transitions.remove(index);
                state.clock = state.clock.max(due);
                state
                    .queue
                    .push_back((transition.target, Event::TransitionFinished(transition.id)));
                tracing::trace!(transition = transition.id.raw(), at = ?due, "transition finished");
                true
            }
            _ => false,
        }
    }

    /// Runs layout passes requested through `set_needs_layout`.
    pub fn flush_layout(&self) {
        let mut state = self.state.borrow_mut();
        while let Some(view) = state.needs_layout.pop_first() {
            state.layout(view);
        }
    }

    // =========================================================================
    // Event delivery
    // =========================================================================

    /// Pops the next queued event, pulling in remote requests first.
    pub fn next_event(&self) -> Option<(BannerId, Event)> {
        self.drain_remote();
        self.state.borrow_mut().queue.pop_front()
    }

    /// Delivers every queued event addressed to `banner`, including events
    /// queued while handling them. Other banners' events stay queued.
    pub fn pump(&self, banner: &mut Banner) -> usize {
        let target = banner.id();
        let mut delivered = 0;
        loop {
            self.drain_remote();
            self.flush_layout();
            let next = {
                let mut state = self.state.borrow_mut();
                let position = state.queue.iter().position(|(id, _)| *id == target);
                position.and_then(|index| state.queue.remove(index))
            };
            let Some((_, event)) = next else {
                return delivered;
            };
            banner.update(event);
            delivered += 1;
        }
    }

    fn drain_remote(&self) {
        let mut receiver = self.receiver.borrow_mut();
        while let Ok(item) = receiver.try_recv() {
            self.state.borrow_mut().queue.push_back(item);
        }
    }

    #[must_use]
    pub fn queued(&self) -> usize {
        self.state.borrow().queue.len()
    }

    // =========================================================================
    // Simulation
    // =========================================================================

    /// Swaps the main window's orientation to `width` and notifies observers.
    pub fn rotate(&self, width: f32) {
        let mut state = self.state.borrow_mut();
        if let Some(window) = state.main_window {
            state.node_mut(window).fixed_width = Some(width);
        }
        let observers: Vec<BannerId> = state.observers.values().copied().collect();
        for target in observers {
            state.queue.push_back((target, Event::OrientationChanged));
        }
    }

    pub fn tap(&self, banner: BannerId) {
        self.post(banner, Event::Tapped);
    }

    pub fn swipe(&self, banner: BannerId, direction: SwipeDirection) {
        self.post(banner, Event::Swiped(direction));
    }

    pub fn press(&self, banner: BannerId, button: ActionButton) {
        self.post(banner, Event::ActionPressed(button));
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    #[must_use]
    pub fn main_window_id(&self) -> Option<ViewId> {
        self.state.borrow().main_window
    }

    /// Whether `view` is in the main window's tree.
    #[must_use]
    pub fn is_on_screen(&self, view: ViewId) -> bool {
        self.state.borrow().is_attached_to_window(view)
    }

    #[must_use]
    pub fn children_of(&self, parent: ViewId) -> Vec<ViewId> {
        self.state
            .borrow()
            .views
            .iter()
            .filter(|(_, node)| node.parent == Some(parent))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Constraints last applied to `view`.
    #[must_use]
    pub fn constraints_of(&self, view: ViewId) -> ConstraintSet {
        self.state
            .borrow()
            .views
            .get(&view)
            .map(|node| node.constraints.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn alpha(&self, view: ViewId) -> f32 {
        self.state.borrow().views.get(&view).map_or(1.0, |node| node.alpha)
    }

    #[must_use]
    pub fn corner_radius(&self, view: ViewId) -> f32 {
        self.state
            .borrow()
            .views
            .get(&view)
            .map_or(0.0, |node| node.corner_radius)
    }

    #[must_use]
    pub fn layout_passes(&self, view: ViewId) -> u32 {
        self.state
            .borrow()
            .views
            .get(&view)
            .map_or(0, |node| node.layout_passes)
    }

    /// How often the content of `view` was reported changed.
    #[must_use]
    pub fn content_revision(&self, view: ViewId) -> u32 {
        self.state
            .borrow()
            .views
            .get(&view)
            .map_or(0, |node| node.content_revision)
    }

    #[must_use]
    pub fn message_wrap_width_of(&self, view: ViewId) -> f32 {
        self.state
            .borrow()
            .views
            .get(&view)
            .map_or(0.0, |node| node.message_wrap_width)
    }

    /// Every transition started so far, oldest first.
    #[must_use]
    pub fn transitions(&self) -> Vec<Transition> {
        self.state.borrow().history.clone()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    #[must_use]
    pub fn pending_transitions(&self) -> usize {
        self.state.borrow().transitions.len()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.state.borrow().observers.len()
    }
}

// =============================================================================
// Port implementations
// =============================================================================

impl ViewTree for HeadlessHost {
    fn main_window(&self) -> Option<ViewId> {
        self.state.borrow().main_window
    }

    fn add_subview(&self, parent: ViewId, child: ViewId) {
        let mut state = self.state.borrow_mut();
        state.node_mut(parent);
        state.node_mut(child).parent = Some(parent);
    }

    fn remove_from_superview(&self, view: ViewId) {
        let mut state = self.state.borrow_mut();
        if let Some(node) = state.views.get_mut(&view) {
            node.parent = None;
            node.constraints.clear();
        }
        state.needs_layout.remove(&view);
    }

    fn superview(&self, view: ViewId) -> Option<ViewId> {
        self.state.borrow().views.get(&view).and_then(|node| node.parent)
    }

    fn width(&self, view: ViewId) -> f32 {
        self.state.borrow().width(view)
    }

    fn safe_area_insets(&self, view: ViewId) -> EdgeInsets {
        self.state
            .borrow()
            .views
            .get(&view)
            .map_or(EdgeInsets::ZERO, |node| node.safe_area)
    }

    fn fitting_height(&self, _view: ViewId, _width: f32, min_height: f32) -> f32 {
        self.state.borrow().content_height.max(min_height)
    }

    fn frame_height(&self, view: ViewId) -> f32 {
        self.state.borrow().views.get(&view).map_or(0.0, |node| node.height)
    }

    fn set_alpha(&self, view: ViewId, alpha: f32) {
        self.state.borrow_mut().node_mut(view).alpha = alpha;
    }

    fn set_corner_radius(&self, view: ViewId, radius: f32) {
        self.state.borrow_mut().node_mut(view).corner_radius = radius;
    }

    fn content_changed(&self, view: ViewId) {
        self.state.borrow_mut().node_mut(view).content_revision += 1;
    }

    fn message_frame_width(&self, view: ViewId) -> f32 {
        self.state.borrow().message_frame_width(view)
    }

    fn set_message_wrap_width(&self, view: ViewId, width: f32) {
        self.state.borrow_mut().node_mut(view).message_wrap_width = width;
    }
}

impl ConstraintLayout for HeadlessHost {
    fn apply_constraints(&self, view: ViewId, constraints: &ConstraintSet) {
        self.state.borrow_mut().node_mut(view).constraints = constraints.clone();
    }

    fn layout_if_needed(&self, view: ViewId) {
        self.state.borrow_mut().layout(view);
    }

    fn set_needs_layout(&self, view: ViewId) {
        self.state.borrow_mut().needs_layout.insert(view);
    }
}

impl Animator for HeadlessHost {
    fn animate(&self, target: BannerId, transition: &Transition) -> TransitionId {
        let mut state = self.state.borrow_mut();
        let id = TransitionId::from_raw(state.next_handle());
        let due = state.clock + transition.timing.duration;
        state.owners.insert(transition.view, target);
        state.node_mut(transition.view).alpha = transition.alpha;
        state.layout(transition.container);
        state.transitions.push(PendingTransition { id, target, due });
        state.history.push(*transition);
        id
    }
}

impl UiScheduler for HeadlessHost {
    fn schedule_once(&self, target: BannerId, after: Duration) -> TimerHandle {
        let mut state = self.state.borrow_mut();
        let handle = TimerHandle::from_raw(state.next_handle());
        let due = state.clock + after;
        state.timers.push(PendingTimer { handle, target, due });
        tracing::trace!(timer = handle.raw(), ?due, "timer scheduled");
        handle
    }

    fn invalidate(&self, handle: TimerHandle) {
        self.state
            .borrow_mut()
            .timers
            .retain(|timer| timer.handle != handle);
    }

    fn post(&self, target: BannerId, event: Event) {
        self.state.borrow_mut().queue.push_back((target, event));
    }

    fn remote(&self) -> RemoteDispatcher {
        RemoteDispatcher::new(self.sender.clone())
    }
}

impl OrientationFeed for HeadlessHost {
    fn add_observer(&self, target: BannerId) -> ObserverToken {
        let mut state = self.state.borrow_mut();
        let token = ObserverToken::from_raw(state.next_handle());
        state.observers.insert(token, target);
        token
    }

    fn remove_observer(&self, token: ObserverToken) {
        self.state.borrow_mut().observers.remove(&token);
    }
}

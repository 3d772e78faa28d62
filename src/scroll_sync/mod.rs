mod binding;

pub(crate) use binding::use_scroll_sync;

use std::time::Duration;

/// Scroll movement (in px) at or below which an event is treated as noise.
pub(crate) const SCROLL_THRESHOLD_PX: f64 = 5.0;

/// How long a pane keeps driving after it mirrored its position.
pub(crate) const RELEASE_DELAY: Duration = Duration::from_millis(50);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Pane {
    Editor,
    Preview,
}

impl Pane {
    pub fn other(self) -> Pane {
        match self {
            Pane::Editor => Pane::Preview,
            Pane::Preview => Pane::Editor,
        }
    }
}

/// A value kept once per pane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct PerPane<T> {
    pub editor: T,
    pub preview: T,
}

impl<T> PerPane<T> {
    pub fn get(&self, pane: Pane) -> &T {
        match pane {
            Pane::Editor => &self.editor,
            Pane::Preview => &self.preview,
        }
    }

    pub fn get_mut(&mut self, pane: Pane) -> &mut T {
        match pane {
            Pane::Editor => &mut self.editor,
            Pane::Preview => &mut self.preview,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct ScrollGeometry {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollGeometry {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    pub fn scrollable_range(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// Scroll position in `[0, 1]`; 0 when the content fits without scrolling.
    pub fn fraction(&self) -> f64 {
        let range = self.scrollable_range();
        if range <= 0.0 || !self.scroll_top.is_finite() {
            return 0.0;
        }
        (self.scroll_top / range).clamp(0.0, 1.0)
    }

    pub fn top_for_fraction(&self, fraction: f64) -> f64 {
        fraction * self.scrollable_range()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum GuardState {
    #[default]
    Idle,
    Driving,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct PaneGuard {
    state: GuardState,
    last_scroll_top: f64,
}

/// Feedback suppressor for mirrored scrolling between the two panes.
///
/// The DOM side feeds scroll events in through [`ScrollSync::accepts_scroll`]
/// and, once per animation frame, [`ScrollSync::on_frame`]. A pane that
/// mirrored its position stays `Driving` until [`ScrollSync::release`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct ScrollSync {
    enabled: bool,
    guards: PerPane<PaneGuard>,
}

impl ScrollSync {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Default::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggling resets both panes to idle; positions are left untouched.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        for pane in [Pane::Editor, Pane::Preview] {
            self.guards.get_mut(pane).state = GuardState::Idle;
        }
    }

    pub fn state(&self, pane: Pane) -> GuardState {
        self.guards.get(pane).state
    }

    pub fn is_driving(&self, pane: Pane) -> bool {
        self.state(pane) == GuardState::Driving
    }

    /// Whether a scroll event from `source` should schedule a frame.
    pub fn accepts_scroll(&self, source: Pane) -> bool {
        self.enabled && !self.is_driving(source.other())
    }

    /// Handle a coalesced scroll of `source`.
    ///
    /// Returns the scroll top to apply to the other pane, or `None` when the
    /// movement is noise or the other pane is the one driving.
    pub fn on_frame(
        &mut self,
        source: Pane,
        source_geometry: ScrollGeometry,
        target_geometry: ScrollGeometry,
    ) -> Option<f64> {
        if !self.accepts_scroll(source) {
            return None;
        }

        let guard = self.guards.get_mut(source);
        let current = source_geometry.scroll_top;
        if (current - guard.last_scroll_top).abs() <= SCROLL_THRESHOLD_PX {
            return None;
        }

        guard.state = GuardState::Driving;
        guard.last_scroll_top = current;

        Some(target_geometry.top_for_fraction(source_geometry.fraction()))
    }

    pub fn release(&mut self, pane: Pane) {
        self.guards.get_mut(pane).state = GuardState::Idle;
    }
}

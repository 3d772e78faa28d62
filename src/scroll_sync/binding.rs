use super::{Pane, PerPane, ScrollGeometry, ScrollSync, RELEASE_DELAY};
use leptos::html;
use leptos::prelude::*;
use leptos_dom::helpers::{
    request_animation_frame_with_handle, set_timeout_with_handle, AnimationFrameRequestHandle,
    TimeoutHandle,
};

/// Browser-side driver for [`ScrollSync`].
///
/// Owns the pending animation frame and the pending release timer of each
/// pane. Both are cancelled before being rescheduled, when sync is turned
/// off, and when the owning component is cleaned up.
#[derive(Clone, Copy)]
pub(crate) struct ScrollSyncHandle {
    state: StoredValue<ScrollSync>,
    frames: StoredValue<PerPane<Option<AnimationFrameRequestHandle>>>,
    releases: StoredValue<PerPane<Option<TimeoutHandle>>>,
    editor: NodeRef<html::Textarea>,
    preview: NodeRef<html::Div>,
}

fn geometry(el: &web_sys::Element) -> ScrollGeometry {
    ScrollGeometry::new(
        f64::from(el.scroll_top()),
        f64::from(el.scroll_height()),
        f64::from(el.client_height()),
    )
}

/// Wire scroll mirroring between `editor` and `preview`, gated by `enabled`.
///
/// Attach [`ScrollSyncHandle::on_scroll`] to each pane's `on:scroll`.
pub(crate) fn use_scroll_sync(
    editor: NodeRef<html::Textarea>,
    preview: NodeRef<html::Div>,
    enabled: Signal<bool>,
) -> ScrollSyncHandle {
    let handle = ScrollSyncHandle {
        state: StoredValue::new(ScrollSync::new(enabled.get_untracked())),
        frames: StoredValue::new(PerPane::default()),
        releases: StoredValue::new(PerPane::default()),
        editor,
        preview,
    };

    Effect::new(move |_| {
        let on = enabled.get();
        handle.set_enabled(on);
    });

    on_cleanup(move || handle.cancel_pending());

    handle
}

impl ScrollSyncHandle {
    fn element(&self, pane: Pane) -> Option<web_sys::Element> {
        match pane {
            Pane::Editor => self.editor.get_untracked().map(web_sys::Element::from),
            Pane::Preview => self.preview.get_untracked().map(web_sys::Element::from),
        }
    }

    fn set_enabled(&self, enabled: bool) {
        if !enabled {
            self.cancel_pending();
        }
        self.state.update_value(|s| s.set_enabled(enabled));
        tracing::debug!(enabled, "scroll sync toggled");
    }

    fn cancel_pending(&self) {
        self.frames.update_value(|frames| {
            for pane in [Pane::Editor, Pane::Preview] {
                if let Some(frame) = frames.get_mut(pane).take() {
                    frame.cancel();
                }
            }
        });
        self.releases.update_value(|timers| {
            for pane in [Pane::Editor, Pane::Preview] {
                if let Some(timer) = timers.get_mut(pane).take() {
                    timer.clear();
                }
            }
        });
    }

    /// Scroll listener for `pane`; coalesces to one mirror per animation frame.
    pub fn on_scroll(&self, pane: Pane) {
        if !self.state.with_value(|s| s.accepts_scroll(pane)) {
            return;
        }

        let this = *self;
        self.frames.update_value(|frames| {
            let slot = frames.get_mut(pane);
            if let Some(pending) = slot.take() {
                pending.cancel();
            }
            match request_animation_frame_with_handle(move || this.run_frame(pane)) {
                Ok(h) => *slot = Some(h),
                Err(e) => tracing::warn!(?e, "requestAnimationFrame failed"),
            }
        });
    }

    fn run_frame(&self, source: Pane) {
        self.frames.update_value(|frames| *frames.get_mut(source) = None);

        let (Some(source_el), Some(target_el)) =
            (self.element(source), self.element(source.other()))
        else {
            return;
        };

        let target_top = self
            .state
            .try_update_value(|s| s.on_frame(source, geometry(&source_el), geometry(&target_el)))
            .flatten();

        if let Some(top) = target_top {
            target_el.set_scroll_top(top.round() as i32);
            self.schedule_release(source);
        }
    }

    fn schedule_release(&self, pane: Pane) {
        let this = *self;
        self.releases.update_value(|timers| {
            let slot = timers.get_mut(pane);
            if let Some(pending) = slot.take() {
                pending.clear();
            }
            let cb = move || {
                this.releases.update_value(|t| *t.get_mut(pane) = None);
                this.state.update_value(|s| s.release(pane));
            };
            match set_timeout_with_handle(cb, RELEASE_DELAY) {
                Ok(h) => *slot = Some(h),
                Err(e) => {
                    tracing::warn!(?e, "setTimeout failed; releasing immediately");
                    this.state.update_value(|s| s.release(pane));
                }
            }
        });
    }
}

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use drift_motion::{AnimationState, ArcItem, DocumentMetrics, document_progress, element_progress};
use parking_lot::Mutex;

use crate::{ScrollAnimationConfig, ViewportSource};

/// Scroll-driven animation sampler.
///
/// Owns the subscription to one [`ViewportSource`] and the latest derived
/// [`AnimationState`]. The host forwards its scroll/resize notifications to [`on_scroll`]
/// and [`on_resize`] and calls [`frame`] once per rendering frame, notifications only mark
/// a pending recomputation so any number of them within one frame costs a single
/// derivation against the newest source values.
///
/// The sampler does nothing until [`start`] is called and stops sampling on [`stop`] or
/// drop, a dropped sampler cannot leak pending work.
///
/// [`on_scroll`]: Self::on_scroll
/// [`on_resize`]: Self::on_resize
/// [`frame`]: Self::frame
/// [`start`]: Self::start
/// [`stop`]: Self::stop
pub struct ScrollAnimation {
    source: Arc<dyn ViewportSource>,
    config: ScrollAnimationConfig,
    state: Arc<Mutex<AnimationState>>,
    pending: AtomicBool,
    running: bool,
}
impl ScrollAnimation {
    /// New stopped sampler over the `source`.
    ///
    /// The state starts at [`AnimationState::default`] until [`start`] takes the first
    /// sample.
    ///
    /// [`start`]: Self::start
    pub fn new(source: impl ViewportSource, config: ScrollAnimationConfig) -> Self {
        ScrollAnimation {
            source: Arc::new(source),
            config,
            state: Arc::new(Mutex::new(AnimationState::default())),
            pending: AtomicBool::new(false),
            running: false,
        }
    }

    /// The sampler configuration.
    pub fn config(&self) -> &ScrollAnimationConfig {
        &self.config
    }

    /// If the sampler is started and processing notifications.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Shared reader of the latest derived state.
    ///
    /// Handles stay valid after the sampler stops or drops, they then read the last
    /// derived state.
    pub fn handle(&self) -> ScrollAnimationHandle {
        ScrollAnimationHandle {
            state: self.state.clone(),
        }
    }

    /// Start processing notifications and take an immediate sample.
    ///
    /// The immediate sample means consumers never observe the default state once the
    /// sampler is running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        tracing::debug!(target: "drift::sampler", "started");
        self.sample_now();
    }

    /// Stop processing notifications and discard any pending recomputation.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.pending.store(false, Ordering::Release);
        tracing::debug!(target: "drift::sampler", "stopped");
    }

    /// Host scroll notification.
    ///
    /// Only marks a recomputation for the next [`frame`], scheduling while one is already
    /// pending is a no-op.
    ///
    /// [`frame`]: Self::frame
    pub fn on_scroll(&self) {
        self.schedule();
    }

    /// Host resize notification.
    ///
    /// Shares the pending slot with [`on_scroll`], a resize and a scroll in the same frame
    /// still cost one derivation.
    ///
    /// [`on_scroll`]: Self::on_scroll
    pub fn on_resize(&self) {
        self.schedule();
    }

    fn schedule(&self) {
        if self.running {
            self.pending.store(true, Ordering::Release);
        }
    }

    /// Run the pending recomputation, if any.
    ///
    /// Called by the host once per rendering frame. Reads the source values current at
    /// this call, notifications coalesced since the last frame are represented by the
    /// newest offset only.
    pub fn frame(&self) {
        if self.running && self.pending.swap(false, Ordering::AcqRel) {
            self.sample_now();
        }
    }

    /// Sample the source and derive a new state immediately, bypassing the frame slot.
    pub fn sample_now(&self) {
        let metrics = DocumentMetrics::new(
            self.source.scroll_offset(),
            self.source.viewport_height(),
            self.source.document_height(),
        );

        let (progress, is_in_view) = match self.source.element_bounds() {
            Some(bounds) => (
                element_progress(&metrics, &bounds, &self.config.element_range),
                bounds.is_in_view(metrics.viewport_height),
            ),
            // whole-document mode has no notion of "out of view"
            None => (document_progress(&metrics), true),
        };

        let state = self.config.ranges.sample(progress, metrics.scroll_offset, is_in_view);
        tracing::trace!(
            target: "drift::sampler",
            offset = metrics.scroll_offset.0 as f64,
            progress = state.progress.0 as f64,
            in_view = state.is_in_view,
            "sampled"
        );
        *self.state.lock() = state;
    }

    /// Latest derived state.
    pub fn state(&self) -> AnimationState {
        *self.state.lock()
    }

    /// Arc placement of every configured item for the latest state.
    pub fn arc_items(&self) -> Vec<ArcItem> {
        let state = self.state();
        self.config.arc.items(&state).collect()
    }
}
impl Drop for ScrollAnimation {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Cloneable reader of a [`ScrollAnimation`] sampler's latest state.
#[derive(Clone)]
pub struct ScrollAnimationHandle {
    state: Arc<Mutex<AnimationState>>,
}
impl ScrollAnimationHandle {
    /// Latest derived state.
    pub fn get(&self) -> AnimationState {
        *self.state.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeadlessViewport;
    use drift_motion::ElementBounds;
    use drift_unit::{FactorUnits, PxUnits};

    fn sampler() -> (HeadlessViewport, ScrollAnimation) {
        let viewport = HeadlessViewport::new(800.px(), 3000.px());
        let sampler = ScrollAnimation::new(viewport.clone(), ScrollAnimationConfig::default());
        (viewport, sampler)
    }

    #[test]
    pub fn start_takes_immediate_sample() {
        let (viewport, mut sampler) = sampler();
        viewport.set_scroll_offset(500.px());

        assert_eq!(0.px(), sampler.state().scroll_offset);
        sampler.start();
        assert_eq!(500.px(), sampler.state().scroll_offset);
        assert_eq!(1.fct(), sampler.state().scale);
    }

    #[test]
    pub fn notifications_coalesce_to_latest_offset() {
        let (viewport, mut sampler) = sampler();
        sampler.start();

        viewport.set_scroll_offset(100.px());
        sampler.on_scroll();
        viewport.set_scroll_offset(200.px());
        sampler.on_scroll();

        sampler.frame();
        assert_eq!(200.px(), sampler.state().scroll_offset);
    }

    #[test]
    pub fn frame_without_notification_is_noop() {
        let (viewport, mut sampler) = sampler();
        sampler.start();

        viewport.set_scroll_offset(100.px());
        sampler.on_scroll();
        sampler.frame();

        // source moved but nothing was scheduled
        viewport.set_scroll_offset(300.px());
        sampler.frame();
        assert_eq!(100.px(), sampler.state().scroll_offset);
    }

    #[test]
    pub fn resize_shares_the_frame_slot() {
        let (viewport, mut sampler) = sampler();
        sampler.start();

        viewport.set_scroll_offset(150.px());
        sampler.on_scroll();
        viewport.set_viewport_height(600.px());
        sampler.on_resize();

        sampler.frame();
        assert_eq!(150.px(), sampler.state().scroll_offset);
    }

    #[test]
    pub fn stopped_sampler_ignores_notifications() {
        let (viewport, mut sampler) = sampler();
        sampler.start();
        viewport.set_scroll_offset(100.px());
        sampler.on_scroll();
        sampler.frame();

        sampler.stop();
        viewport.set_scroll_offset(900.px());
        sampler.on_scroll();
        sampler.frame();

        assert_eq!(100.px(), sampler.state().scroll_offset);
        assert!(!sampler.is_running());
    }

    #[test]
    pub fn stop_discards_pending_work() {
        let (viewport, mut sampler) = sampler();
        sampler.start();

        viewport.set_scroll_offset(100.px());
        sampler.on_scroll();
        sampler.stop();

        sampler.frame();
        assert_eq!(0.px(), sampler.state().scroll_offset);
    }

    #[test]
    pub fn handle_outlives_sampler() {
        let (viewport, mut sampler) = sampler();
        sampler.start();
        viewport.set_scroll_offset(250.px());
        sampler.on_scroll();
        sampler.frame();

        let handle = sampler.handle();
        drop(sampler);

        assert_eq!(250.px(), handle.get().scroll_offset);
    }

    #[test]
    pub fn element_mode_derives_visibility() {
        let (viewport, mut sampler) = sampler();
        viewport.set_element(Some(ElementBounds::new(900.px(), 50.px())));
        sampler.start();
        assert!(!sampler.state().is_in_view);

        // scrolled down 200px, the element is now inside the viewport
        viewport.set_scroll_offset(200.px());
        viewport.set_element(Some(ElementBounds::new(700.px(), 50.px())));
        sampler.on_scroll();
        sampler.frame();
        assert!(sampler.state().is_in_view);
    }

    #[test]
    pub fn arc_items_follow_latest_state() {
        let (viewport, mut sampler) = sampler();
        sampler.start();

        let items = sampler.arc_items();
        assert_eq!(10, items.len());
        assert_eq!(0.8.fct(), items[0].scale);

        viewport.set_scroll_offset(500.px());
        sampler.on_scroll();
        sampler.frame();
        assert_eq!(1.fct(), sampler.arc_items()[0].scale);
    }
}

use scroll_window::{
    ConfigError, RefreshOutcome, ScrollEvent, WindowEngine, WindowOptions, WindowSnapshot,
};

use crate::{
    FrameRequest, FrameScheduler, Listeners, Phase, ScrollChannelSplitter, ScrollSource,
    Subscription,
};

/// A framework-neutral controller that wraps a [`WindowEngine`] and drives it from raw scroll
/// events.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll(now_ms)` whenever the scroll container fires a scroll event
/// - `tick(now_ms)` from a timer or frame loop (advances the debounce)
/// - `on_frame(request)` when a frame requested through the [`FrameScheduler`] fires
///
/// Horizontal offset changes are reported immediately from `on_scroll`. The vertical window is
/// recomputed once scroll events have been quiet for `debounce_interval_ms`, on the next frame.
///
/// Dropping the controller disposes it.
#[derive(Debug)]
pub struct ScrollController<S: ScrollSource, F: FrameScheduler> {
    engine: WindowEngine,
    splitter: ScrollChannelSplitter,
    listeners: Listeners,
    source: S,
    frames: F,
}

impl<S: ScrollSource, F: FrameScheduler> ScrollController<S, F> {
    /// Validates `options` and attaches to `source`.
    ///
    /// The initial window is computed on the first frame, so listeners subscribed right after
    /// this call still receive the first `Vertical` event.
    pub fn initialize(
        options: WindowOptions,
        source: S,
        mut frames: F,
    ) -> Result<Self, ConfigError> {
        let engine = WindowEngine::new(options)?;
        let mut splitter = ScrollChannelSplitter::new(options.debounce_interval_ms);
        let request = frames.request_frame();
        splitter.frame_scheduled(request);
        vdebug!(
            item_count = options.item_count,
            debounce_interval_ms = options.debounce_interval_ms,
            "ScrollController::initialize"
        );
        Ok(Self {
            engine,
            splitter,
            listeners: Listeners::new(),
            source,
            frames,
        })
    }

    /// Applies new options and recomputes the window right away, without waiting for a scroll
    /// event or a frame.
    ///
    /// On error nothing changes. After disposal this is a no-op.
    pub fn on_config_changed(&mut self, options: WindowOptions) -> Result<(), ConfigError> {
        if self.splitter.is_disposed() {
            vwarn!("on_config_changed after dispose");
            return Ok(());
        }
        self.engine.set_options(options)?;
        self.splitter.set_debounce_interval_ms(options.debounce_interval_ms);
        self.run_pipeline();
        Ok(())
    }

    /// Cancels the pending frame and debounce, drops every listener and discards the committed
    /// window. Idempotent.
    pub fn dispose(&mut self) {
        if self.splitter.is_disposed() {
            return;
        }
        if let Some(request) = self.splitter.dispose() {
            self.frames.cancel_frame(request);
        }
        self.listeners.clear();
        self.engine.reset();
        vdebug!("ScrollController::dispose");
    }

    pub fn is_disposed(&self) -> bool {
        self.splitter.is_disposed()
    }

    /// Call this for every scroll event from the scroll container.
    pub fn on_scroll(&mut self, now_ms: u64) {
        let scroll_left = self.source.scroll_left();
        if let Some(scroll_left_px) = self.splitter.on_scroll(now_ms, scroll_left) {
            vtrace!(scroll_left_px, "horizontal scroll");
            self.listeners.emit(&ScrollEvent::Horizontal { scroll_left_px });
        }
    }

    /// Advances the debounce timer.
    ///
    /// Returns the frame requested when the scroll events went quiet, if any.
    pub fn tick(&mut self, now_ms: u64) -> Option<FrameRequest> {
        if !self.splitter.poll_debounce(now_ms) {
            return None;
        }
        let request = self.frames.request_frame();
        self.splitter.frame_scheduled(request);
        vtrace!(now_ms, frame = request.id(), "debounce expired, frame requested");
        Some(request)
    }

    /// Runs the refresh pipeline for a frame previously requested by this controller.
    ///
    /// Returns `None` (and does nothing) for stale requests and after disposal.
    pub fn on_frame(&mut self, request: FrameRequest) -> Option<RefreshOutcome> {
        if !self.splitter.begin_frame(request) {
            vwarn!(frame = request.id(), "ignoring stale frame callback");
            return None;
        }
        let outcome = self.run_pipeline();
        self.splitter.finish_frame();
        Some(outcome)
    }

    /// Runs the refresh pipeline immediately against the current scroll position.
    pub fn refresh(&mut self) -> RefreshOutcome {
        if self.splitter.is_disposed() {
            vwarn!("refresh after dispose");
            return RefreshOutcome::Skipped;
        }
        self.run_pipeline()
    }

    fn run_pipeline(&mut self) -> RefreshOutcome {
        let outcome = self.engine.refresh(self.source.viewport());
        if let Some(range) = outcome.emitted() {
            self.listeners.emit(&ScrollEvent::Vertical { range });
        }
        outcome
    }

    /// Registers a listener for outbound scroll events. No-op handle after disposal.
    pub fn subscribe(
        &mut self,
        f: impl Fn(&ScrollEvent) + Send + Sync + 'static,
    ) -> Subscription {
        let sub = self.listeners.subscribe(f);
        if self.splitter.is_disposed() {
            self.listeners.unsubscribe(sub);
        }
        sub
    }

    /// Returns `true` if the subscription was still registered.
    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        self.listeners.unsubscribe(sub)
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        self.engine.snapshot()
    }

    pub fn engine(&self) -> &WindowEngine {
        &self.engine
    }

    pub fn options(&self) -> &WindowOptions {
        self.engine.options()
    }

    pub fn phase(&self) -> Phase {
        self.splitter.phase()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn frames(&self) -> &F {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut F {
        &mut self.frames
    }
}

impl<S: ScrollSource, F: FrameScheduler> Drop for ScrollController<S, F> {
    fn drop(&mut self) {
        self.dispose();
    }
}

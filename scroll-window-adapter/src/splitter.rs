use crate::{Debounce, FrameRequest};

/// Where the vertical path of a [`ScrollChannelSplitter`] currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Scroll events are arriving; waiting for them to go quiet.
    DebounceWaiting,
    /// A frame callback has been requested to run the refresh pipeline.
    FrameScheduled(FrameRequest),
    /// The refresh pipeline is running inside a frame callback.
    Computing,
    /// Torn down; every input is ignored.
    Disposed,
}

/// Splits raw scroll events into an immediate horizontal path and a debounced,
/// frame-aligned vertical path.
///
/// This is a pure state machine: it owns no timers or callbacks. The controller feeds it
/// timestamps and frame requests and acts on what it returns.
#[derive(Clone, Debug)]
pub struct ScrollChannelSplitter {
    debounce: Debounce,
    pending_frame: Option<FrameRequest>,
    computing: bool,
    disposed: bool,
    last_scroll_left: Option<f64>,
}

impl ScrollChannelSplitter {
    pub fn new(debounce_interval_ms: u64) -> Self {
        Self {
            debounce: Debounce::new(debounce_interval_ms),
            pending_frame: None,
            computing: false,
            disposed: false,
            last_scroll_left: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.disposed {
            Phase::Disposed
        } else if self.computing {
            Phase::Computing
        } else if let Some(request) = self.pending_frame {
            Phase::FrameScheduled(request)
        } else if self.debounce.is_pending() {
            Phase::DebounceWaiting
        } else {
            Phase::Idle
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn debounce(&self) -> &Debounce {
        &self.debounce
    }

    pub fn set_debounce_interval_ms(&mut self, interval_ms: u64) {
        self.debounce.set_interval_ms(interval_ms);
    }

    pub fn last_scroll_left(&self) -> Option<f64> {
        self.last_scroll_left
    }

    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.pending_frame
    }

    /// Handles one raw scroll event.
    ///
    /// Restarts the vertical debounce and returns the horizontal offset to report, if it differs
    /// from the last one observed. Non-finite offsets are ignored.
    pub fn on_scroll(&mut self, now_ms: u64, scroll_left: f64) -> Option<f64> {
        if self.disposed {
            return None;
        }
        self.debounce.restart(now_ms);

        if !scroll_left.is_finite() || self.last_scroll_left == Some(scroll_left) {
            return None;
        }
        self.last_scroll_left = Some(scroll_left);
        Some(scroll_left)
    }

    /// Advances the debounce timer.
    ///
    /// Returns `true` when the timer expired and a frame must be requested. If a frame is already
    /// pending, the expiry folds into it.
    pub fn poll_debounce(&mut self, now_ms: u64) -> bool {
        if self.disposed {
            return false;
        }
        self.debounce.poll(now_ms) && self.pending_frame.is_none()
    }

    /// Records the frame requested after [`Self::poll_debounce`] (or at startup).
    pub fn frame_scheduled(&mut self, request: FrameRequest) {
        debug_assert!(
            self.pending_frame.is_none(),
            "frame_scheduled: a frame is already pending"
        );
        if self.disposed {
            return;
        }
        self.pending_frame = Some(request);
    }

    /// Enters [`Phase::Computing`] if `request` is the pending frame.
    ///
    /// Returns `false` for stale or unknown requests and after disposal.
    pub fn begin_frame(&mut self, request: FrameRequest) -> bool {
        if self.disposed || self.pending_frame != Some(request) {
            return false;
        }
        self.pending_frame = None;
        self.computing = true;
        true
    }

    pub fn finish_frame(&mut self) {
        self.computing = false;
    }

    /// Moves to [`Phase::Disposed`], disarming the debounce.
    ///
    /// Returns the pending frame so the caller can cancel it with the host.
    pub fn dispose(&mut self) -> Option<FrameRequest> {
        self.disposed = true;
        self.computing = false;
        self.debounce.cancel();
        self.pending_frame.take()
    }
}

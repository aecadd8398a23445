use alloc::boxed::Box;
use alloc::collections::VecDeque;

/// Identifies one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameRequest(u64);

impl FrameRequest {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// The host's "run this on the next paint" primitive (`requestAnimationFrame` and friends).
///
/// The controller requests at most one frame at a time and hands the returned request back to
/// `cancel_frame` on teardown. When the frame fires, the host calls
/// `ScrollController::on_frame` with the same request.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameRequest;

    fn cancel_frame(&mut self, request: FrameRequest);
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for &mut T {
    fn request_frame(&mut self) -> FrameRequest {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        (**self).cancel_frame(request)
    }
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for Box<T> {
    fn request_frame(&mut self) -> FrameRequest {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        (**self).cancel_frame(request)
    }
}

/// A frame scheduler for hosts that pump frames themselves (TUI loops, tests, headless runs).
///
/// Requests queue up in order; the host pops them on its frame tick and passes each one to the
/// controller.
#[derive(Clone, Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: VecDeque<FrameRequest>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the oldest pending request.
    pub fn pop(&mut self) -> Option<FrameRequest> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total number of frames ever requested, including cancelled ones.
    pub fn requested(&self) -> u64 {
        self.next_id
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameRequest {
        let request = FrameRequest(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push_back(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.pending.retain(|r| *r != request);
    }
}

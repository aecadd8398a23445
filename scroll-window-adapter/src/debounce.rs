/// A trailing-edge debounce timer driven by adapter-supplied timestamps.
///
/// Every [`Self::restart`] pushes the deadline out by `interval_ms`; [`Self::poll`] reports the
/// expiry exactly once, after the timer has gone quiet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Debounce {
    interval_ms: u64,
    deadline_ms: Option<u64>,
}

impl Debounce {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            deadline_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Changes the interval. A pending deadline keeps the interval it was armed with.
    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms;
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn restart(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(self.interval_ms));
    }

    /// Disarms the timer. Returns `true` if a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline_ms.take().is_some()
    }

    /// Returns `true` once when `now_ms` has reached the deadline, disarming the timer.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use scroll_window::ScrollEvent;

/// A callback fired for every outbound [`ScrollEvent`].
pub type Listener = Arc<dyn Fn(&ScrollEvent) + Send + Sync>;

/// Cancellation handle returned by `subscribe`.
///
/// Dropping a handle does not unsubscribe; pass it to `unsubscribe` (or dispose the owner).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use = "keep the subscription to be able to unsubscribe later"]
pub struct Subscription(u64);

/// Registered listeners, notified in subscription order.
#[derive(Clone, Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(Subscription, Listener)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        f: impl Fn(&ScrollEvent) + Send + Sync + 'static,
    ) -> Subscription {
        let sub = Subscription(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((sub, Arc::new(f)));
        sub
    }

    /// Returns `true` if the subscription was still registered.
    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(s, _)| *s != sub);
        self.entries.len() != before
    }

    pub fn emit(&self, event: &ScrollEvent) {
        for (_, f) in &self.entries {
            f(event);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

use alloc::rc::Rc;
use alloc::sync::Arc;
use core::cell::Cell;

use scroll_window::Viewport;

/// Raw scroll geometry of the host's scroll container, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollPosition {
    pub scroll_top: f64,
    pub scroll_left: f64,
    pub viewport_client_height: f64,
}

impl ScrollPosition {
    pub const fn new(scroll_top: f64, scroll_left: f64, viewport_client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_left,
            viewport_client_height,
        }
    }
}

/// Where the controller reads scroll geometry from when an event arrives or a frame fires.
///
/// Values are read lazily, so a source backed by a live UI element always reports the latest
/// position rather than the one at the time the event was queued.
pub trait ScrollSource {
    fn scroll_top(&self) -> f64;

    fn scroll_left(&self) -> f64;

    fn viewport_client_height(&self) -> f64;

    fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll_top(), self.viewport_client_height())
    }
}

impl ScrollSource for ScrollPosition {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn viewport_client_height(&self) -> f64 {
        self.viewport_client_height
    }
}

impl ScrollSource for Cell<ScrollPosition> {
    fn scroll_top(&self) -> f64 {
        self.get().scroll_top
    }

    fn scroll_left(&self) -> f64 {
        self.get().scroll_left
    }

    fn viewport_client_height(&self) -> f64 {
        self.get().viewport_client_height
    }
}

macro_rules! forward_scroll_source {
    ($($ptr:ty),*) => {
        $(
            impl<T: ScrollSource + ?Sized> ScrollSource for $ptr {
                fn scroll_top(&self) -> f64 {
                    (**self).scroll_top()
                }

                fn scroll_left(&self) -> f64 {
                    (**self).scroll_left()
                }

                fn viewport_client_height(&self) -> f64 {
                    (**self).viewport_client_height()
                }
            }
        )*
    };
}

forward_scroll_source!(&T, Rc<T>, Arc<T>);

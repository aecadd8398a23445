// Example: a host loop feeding scroll events, timer ticks and frames into a controller.
use std::cell::Cell;
use std::rc::Rc;

use scroll_window::{ScrollEvent, WindowOptions};
use scroll_window_adapter::{FrameQueue, ScrollController, ScrollPosition};

fn main() -> Result<(), scroll_window::ConfigError> {
    let position = Rc::new(Cell::new(ScrollPosition::new(0.0, 0.0, 480.0)));
    let options = WindowOptions::new(50_000, 24.0).with_debounce_interval_ms(40);
    let mut c = ScrollController::initialize(options, Rc::clone(&position), FrameQueue::new())?;

    let _sub = c.subscribe(|e: &ScrollEvent| match e {
        ScrollEvent::Vertical { range } => println!("  vertical  {range:?}"),
        ScrollEvent::Horizontal { scroll_left_px } => println!("  horizontal {scroll_left_px}"),
    });

    // Simulate ~60fps: a fling for 300ms, then a short sideways nudge, then idle.
    let mut now_ms = 0u64;
    let mut scroll_top = 0.0;
    while now_ms <= 600 {
        if now_ms <= 300 {
            scroll_top += 180.0;
            position.set(ScrollPosition {
                scroll_top,
                ..position.get()
            });
            c.on_scroll(now_ms);
        } else if (400..416).contains(&now_ms) {
            position.set(ScrollPosition {
                scroll_left: 32.0,
                ..position.get()
            });
            c.on_scroll(now_ms);
        }

        c.tick(now_ms);
        while let Some(request) = c.frames_mut().pop() {
            if let Some(outcome) = c.on_frame(request) {
                println!("t={now_ms}ms frame -> {outcome:?}");
            }
        }
        now_ms += 16;
    }

    // Shrinking the list recomputes immediately, no scroll needed.
    c.on_config_changed(options.with_item_count(100))?;
    println!("after shrink: {:?}", c.snapshot());

    c.dispose();
    Ok(())
}

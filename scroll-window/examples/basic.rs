// Example: drive the engine directly and read back the committed window.
use scroll_window::{Viewport, WindowEngine, WindowOptions};

fn main() -> Result<(), scroll_window::ConfigError> {
    let mut engine = WindowEngine::new(WindowOptions::new(1_000_000, 24.0))?;

    for scroll_top in [0.0, 240.0, 480.0, 12_000.0, 23_999_000.0] {
        let outcome = engine.refresh(Viewport::new(scroll_top, 600.0));
        let s = engine.snapshot();
        println!(
            "scroll_top={scroll_top} outcome={outcome:?} range={:?} top_padding={} bottom_padding={}",
            s.range,
            s.top_padding_px,
            engine.bottom_padding_px()
        );
    }

    let mut first = None;
    let mut last = None;
    engine.for_each_row(|row| {
        first.get_or_insert(row);
        last = Some(row);
    });
    println!("first_row={first:?} last_row={last:?}");
    Ok(())
}

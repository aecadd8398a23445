use crate::*;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;
use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use scroll_window::{IndexRange, RefreshOutcome, ScrollEvent, WindowOptions};

type Source = Rc<Cell<ScrollPosition>>;
type Events = Arc<Mutex<Vec<ScrollEvent>>>;

fn controller(options: WindowOptions) -> (ScrollController<Source, FrameQueue>, Source) {
    let source = Rc::new(Cell::new(ScrollPosition::new(0.0, 0.0, 400.0)));
    let c = ScrollController::initialize(options, Rc::clone(&source), FrameQueue::new())
        .unwrap();
    (c, source)
}

fn record(c: &mut ScrollController<Source, FrameQueue>) -> Events {
    let events: Events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let _ = c.subscribe(move |e| sink.lock().unwrap().push(*e));
    events
}

fn pump_frames(c: &mut ScrollController<Source, FrameQueue>) -> usize {
    let mut ran = 0;
    while let Some(request) = c.frames_mut().pop() {
        if c.on_frame(request).is_some() {
            ran += 1;
        }
    }
    ran
}

fn vertical(events: &Events) -> Vec<IndexRange> {
    events
        .lock()
        .unwrap()
        .iter()
        .filter_map(|e| e.range())
        .collect()
}

fn horizontal(events: &Events) -> Vec<f64> {
    events
        .lock()
        .unwrap()
        .iter()
        .filter_map(|e| match e {
            ScrollEvent::Horizontal { scroll_left_px } => Some(*scroll_left_px),
            ScrollEvent::Vertical { .. } => None,
        })
        .collect()
}

fn scroll_to(source: &Source, scroll_top: f64, scroll_left: f64) {
    source.set(ScrollPosition {
        scroll_top,
        scroll_left,
        ..source.get()
    });
}

#[test]
fn debounce_fires_once_after_quiet_period() {
    let mut d = Debounce::new(50);
    assert!(!d.poll(0));

    d.restart(0);
    assert!(!d.poll(49));
    assert!(d.poll(50));
    assert!(!d.poll(60));

    d.restart(100);
    d.restart(120);
    assert!(!d.poll(160));
    assert!(d.poll(170));

    d.restart(200);
    assert!(d.cancel());
    assert!(!d.cancel());
    assert!(!d.poll(1_000));
}

#[test]
fn zero_interval_debounce_fires_on_next_poll() {
    let mut d = Debounce::new(0);
    d.restart(7);
    assert_eq!(d.deadline_ms(), Some(7));
    assert!(d.poll(7));
}

#[test]
fn splitter_reports_only_changed_horizontal_offsets() {
    let mut s = ScrollChannelSplitter::new(10);
    let seq = [0.0, 0.0, 5.0, 5.0, 3.0, 0.0, f64::NAN, 0.0];
    let reported: Vec<f64> = seq
        .iter()
        .enumerate()
        .filter_map(|(t, &left)| s.on_scroll(t as u64, left))
        .collect();
    assert_eq!(reported, [0.0, 5.0, 3.0, 0.0]);
    assert_eq!(s.last_scroll_left(), Some(0.0));
}

#[test]
fn splitter_walks_through_phases() {
    let mut s = ScrollChannelSplitter::new(10);
    assert_eq!(s.phase(), Phase::Idle);

    s.on_scroll(0, 0.0);
    assert_eq!(s.phase(), Phase::DebounceWaiting);
    assert!(!s.poll_debounce(5));
    assert!(s.poll_debounce(10));

    let request = FrameRequest::new(7);
    s.frame_scheduled(request);
    assert_eq!(s.phase(), Phase::FrameScheduled(request));

    assert!(!s.begin_frame(FrameRequest::new(8)));
    assert!(s.begin_frame(request));
    assert_eq!(s.phase(), Phase::Computing);
    s.finish_frame();
    assert_eq!(s.phase(), Phase::Idle);

    s.on_scroll(20, 1.0);
    assert_eq!(s.dispose(), None);
    assert_eq!(s.phase(), Phase::Disposed);
    assert_eq!(s.on_scroll(30, 2.0), None);
    assert!(!s.poll_debounce(1_000));
}

#[test]
fn splitter_folds_expiry_into_pending_frame() {
    let mut s = ScrollChannelSplitter::new(0);
    let request = FrameRequest::new(1);
    s.frame_scheduled(request);
    s.on_scroll(0, 0.0);
    assert!(!s.poll_debounce(0));
    assert_eq!(s.phase(), Phase::FrameScheduled(request));
    assert_eq!(s.dispose(), Some(request));
}

#[test]
fn frame_queue_cancels_by_request() {
    let mut q = FrameQueue::new();
    let a = q.request_frame();
    let b = q.request_frame();
    q.cancel_frame(a);
    assert_eq!(q.len(), 1);
    assert_eq!(q.pop(), Some(b));
    assert!(q.is_empty());
    assert_eq!(q.requested(), 2);
}

#[test]
fn listeners_unsubscribe_by_handle() {
    let mut l = Listeners::new();
    let hits = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&hits);
    let sub = l.subscribe(move |_| *counter.lock().unwrap() += 1);
    let event = ScrollEvent::Horizontal {
        scroll_left_px: 1.0,
    };

    l.emit(&event);
    assert!(l.unsubscribe(sub));
    assert!(!l.unsubscribe(sub));
    l.emit(&event);
    assert_eq!(*hits.lock().unwrap(), 1);
    assert!(l.is_empty());
}

#[test]
fn initial_window_is_computed_on_first_frame() {
    let (mut c, _source) = controller(WindowOptions::new(1000, 20.0));
    let events = record(&mut c);
    assert!(matches!(c.phase(), Phase::FrameScheduled(_)));
    assert_eq!(c.snapshot().range, None);

    assert_eq!(pump_frames(&mut c), 1);
    assert_eq!(vertical(&events), [IndexRange::new(0, 40)]);

    let s = c.snapshot();
    assert_eq!(s.rows_in_window, 20);
    assert_eq!(s.top_padding_px, 0.0);
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn scroll_burst_produces_one_computation() {
    let opts = WindowOptions::new(1000, 20.0).with_debounce_interval_ms(50);
    let (mut c, source) = controller(opts);
    let events = record(&mut c);
    pump_frames(&mut c);

    for t in (0..=100u64).step_by(10) {
        scroll_to(&source, t as f64 * 40.0, 0.0);
        c.on_scroll(t);
        assert_eq!(c.tick(t), None);
    }
    assert_eq!(c.phase(), Phase::DebounceWaiting);
    assert_eq!(c.tick(149), None);
    assert!(c.tick(150).is_some());
    assert_eq!(c.tick(200), None);

    assert_eq!(c.frames().requested(), 2);
    assert_eq!(pump_frames(&mut c), 1);
    assert_eq!(
        vertical(&events),
        [IndexRange::new(0, 40), IndexRange::new(180, 240)]
    );
    assert_eq!(c.snapshot().top_padding_px, 3_600.0);
}

#[test]
fn debounce_expiry_coalesces_with_pending_frame() {
    let (mut c, source) = controller(WindowOptions::new(1000, 20.0));
    pump_frames(&mut c);

    scroll_to(&source, 2_000.0, 0.0);
    c.on_scroll(0);
    assert!(c.tick(0).is_some());

    scroll_to(&source, 4_000.0, 0.0);
    c.on_scroll(1);
    assert_eq!(c.tick(1), None);

    assert_eq!(pump_frames(&mut c), 1);
    assert_eq!(c.snapshot().range, Some(IndexRange::new(180, 240)));
}

#[test]
fn config_change_recomputes_without_scroll_event() {
    let opts = WindowOptions::new(1000, 20.0).with_debounce_interval_ms(50);
    let (mut c, source) = controller(opts);
    let events = record(&mut c);
    pump_frames(&mut c);
    scroll_to(&source, 4_000.0, 0.0);
    c.on_scroll(0);
    c.tick(50);
    pump_frames(&mut c);
    assert_eq!(vertical(&events).len(), 2);

    c.on_config_changed(WindowOptions::new(500, 20.0).with_debounce_interval_ms(50))
        .unwrap();
    assert!(c.frames().is_empty());
    assert_eq!(
        vertical(&events).last().copied(),
        Some(IndexRange::new(180, 240))
    );
    assert_eq!(vertical(&events).len(), 3);
    assert_eq!(c.options().item_count, 500);
}

#[test]
fn invalid_config_is_rejected_and_state_kept() {
    let (mut c, _source) = controller(WindowOptions::new(1000, 20.0));
    pump_frames(&mut c);
    let before = c.snapshot();

    assert!(c.on_config_changed(WindowOptions::new(10, 0.0)).is_err());
    assert_eq!(c.options().item_count, 1000);
    assert_eq!(c.snapshot(), before);

    let source = ScrollPosition::new(0.0, 0.0, 400.0);
    let opts = WindowOptions::new(10, f64::NAN);
    assert!(ScrollController::initialize(opts, source, FrameQueue::new()).is_err());
}

#[test]
fn empty_list_commits_empty_window_silently() {
    let (mut c, _source) = controller(WindowOptions::new(0, 20.0));
    let events = record(&mut c);
    assert_eq!(pump_frames(&mut c), 1);

    assert!(vertical(&events).is_empty());
    let s = c.snapshot();
    assert_eq!(s.range, Some(IndexRange::EMPTY));
    assert_eq!(s.top_padding_px, 0.0);
}

#[test]
fn horizontal_offsets_are_reported_immediately() {
    let opts = WindowOptions::new(1000, 20.0).with_debounce_interval_ms(50);
    let (mut c, source) = controller(opts);
    let events = record(&mut c);

    for (t, left) in [0.0, 0.0, 15.0, 15.0, 30.0, 15.0].into_iter().enumerate() {
        scroll_to(&source, 0.0, left);
        c.on_scroll(t as u64);
    }
    assert_eq!(horizontal(&events), [0.0, 15.0, 30.0, 15.0]);
    assert!(vertical(&events).is_empty());
}

#[test]
fn manual_refresh_uses_current_position() {
    let (mut c, source) = controller(WindowOptions::new(1000, 20.0));
    pump_frames(&mut c);
    scroll_to(&source, 4_000.0, 0.0);
    assert_eq!(
        c.refresh(),
        RefreshOutcome::Committed(IndexRange::new(180, 240))
    );
    assert_eq!(c.refresh(), RefreshOutcome::Skipped);
}

#[test]
fn stale_frame_requests_are_ignored() {
    let (mut c, _source) = controller(WindowOptions::new(1000, 20.0));
    pump_frames(&mut c);
    assert_eq!(c.on_frame(FrameRequest::new(99)), None);
}

#[test]
fn dispose_cancels_pending_work_and_listeners() {
    let opts = WindowOptions::new(1000, 20.0).with_debounce_interval_ms(10);
    let (mut c, source) = controller(opts);
    let events = record(&mut c);
    pump_frames(&mut c);

    scroll_to(&source, 4_000.0, 0.0);
    c.on_scroll(0);
    let request = c.tick(10).unwrap();
    assert_eq!(c.frames().len(), 1);

    c.dispose();
    assert!(c.is_disposed());
    assert_eq!(c.phase(), Phase::Disposed);
    assert!(c.frames().is_empty());
    assert_eq!(c.snapshot().range, None);

    let late = record(&mut c);
    scroll_to(&source, 8_000.0, 25.0);
    c.on_scroll(20);
    assert_eq!(c.tick(100), None);
    assert_eq!(c.on_frame(request), None);
    assert_eq!(c.refresh(), RefreshOutcome::Skipped);
    c.on_config_changed(WindowOptions::new(5, 1.0)).unwrap();
    assert_eq!(c.options().item_count, 1000);

    assert_eq!(vertical(&events), [IndexRange::new(0, 40)]);
    assert!(late.lock().unwrap().is_empty());
    c.dispose();
}

#[test]
fn dropping_controller_cancels_its_frame() {
    let mut queue = FrameQueue::new();
    {
        let c = ScrollController::initialize(
            WindowOptions::new(1000, 20.0),
            ScrollPosition::new(0.0, 0.0, 400.0),
            &mut queue,
        )
        .unwrap();
        assert_eq!(c.frames().len(), 1);
    }
    assert!(queue.is_empty());
    assert_eq!(queue.requested(), 1);
}

proptest! {
    #[test]
    fn horizontal_events_match_adjacent_changes(
        seq in proptest::collection::vec(0u8..4, 0..64),
    ) {
        let mut s = ScrollChannelSplitter::new(16);
        let reported = seq
            .iter()
            .enumerate()
            .filter(|&(t, &left)| s.on_scroll(t as u64, left as f64).is_some())
            .count();
        let expected = seq
            .iter()
            .enumerate()
            .filter(|&(i, &left)| i == 0 || seq[i - 1] != left)
            .count();
        prop_assert_eq!(reported, expected);
    }
}

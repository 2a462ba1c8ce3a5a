use crate::*;

use alloc::format;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use marquee::{Item, Marquee, MarqueeOptions};

fn items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item::new(format!("item-{i}"), format!("Item {i}")))
        .collect()
}

#[test]
fn manual_jump_pauses_then_resumes_at_deadline() {
    let mut c = Controller::new(items(4), MarqueeOptions::new().with_resume_delay_ms(10_000));
    assert!(c.on_resize(&[0.0, 300.0, 600.0, 900.0]));
    assert!(c.tick(0).is_some());

    let off = c.jump_to_index(2, 1_000);
    assert_eq!(off, -600.0);
    assert_eq!(c.marquee().center_index(), 2);
    assert_eq!(c.resume_at(), Some(11_000));

    // before the deadline the strip stays parked
    assert!(c.tick(5_000).is_none());
    assert_eq!(c.marquee().offset(), -600.0);

    // the expiring deadline resumes and advances in the same tick
    assert_eq!(c.tick(11_000), Some(-601.0));
    assert!(c.resume_at().is_none());
}

#[test]
fn resume_deadline_respects_hover_gate() {
    let mut c = Controller::new(items(4), MarqueeOptions::new());
    c.on_resize(&[0.0, 300.0]);

    c.jump_to_index(1, 0);
    c.pointer_enter();

    // The deadline clears the manual pause, but the hover gate still holds.
    assert!(c.tick(20_000).is_none());
    assert!(c.resume_at().is_none());
    assert!(!c.marquee().is_paused());
    assert!(c.marquee().is_hovered());

    c.pointer_leave();
    assert!(c.tick(20_016).is_some());
}

#[test]
fn step_navigation_arms_resume() {
    let mut c = Controller::new(items(4), MarqueeOptions::new().with_resume_delay_ms(5_000));
    c.on_resize(&[0.0, 300.0, 600.0, 900.0]);

    assert_eq!(c.step_next(0), 1);
    assert_eq!(c.marquee().offset(), -300.0);
    assert_eq!(c.resume_at(), Some(5_000));

    assert_eq!(c.step_prev(100), 0);
    assert_eq!(c.resume_at(), Some(5_100));

    // cancelling the deadline leaves the strip parked until resumed explicitly
    c.cancel_resume();
    assert!(c.tick(60_000).is_none());
    c.marquee_mut().resume();
    assert!(c.tick(60_016).is_some());
}

#[test]
fn manual_navigation_notifies_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let options = MarqueeOptions::new().with_on_change(Some(move |_m: &Marquee, _r: bool| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    let mut c = Controller::new(items(4), options);
    c.on_resize(&[0.0, 300.0]);

    calls.store(0, Ordering::SeqCst);
    c.jump_to_index(3, 0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn once_loader_runs_exactly_once() {
    let loader = OnceLoader::new();
    let calls = AtomicUsize::new(0);

    assert!(!loader.is_loaded());
    assert!(loader.load(|| {
        calls.fetch_add(1, Ordering::SeqCst);
    }));
    assert!(loader.is_loaded());

    assert!(!loader.load(|| {
        calls.fetch_add(1, Ordering::SeqCst);
    }));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn once_loader_first_caller_wins_across_threads() {
    let loader = Arc::new(OnceLoader::new());
    let calls = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let loader = Arc::clone(&loader);
            let calls = Arc::clone(&calls);
            std::thread::spawn(move || {
                loader.load(|| {
                    calls.fetch_add(1, Ordering::SeqCst);
                });
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(loader.is_loaded());
}

// Example: the level-triggered hover gate under a fast pointer sweep.
use marquee::{Item, Marquee, MarqueeOptions};

fn main() {
    let items = (0..4)
        .map(|i| Item::new(format!("p{i}"), format!("Project {i}")))
        .collect();
    let mut m = Marquee::new(items, MarqueeOptions::new());
    m.measure(&[0.0, 300.0]);

    // Sweep across two adjacent cards: B's enter fires before A's leave.
    m.pointer_enter(); // enter card A
    println!("enter A: running={}", m.is_running());
    m.pointer_enter(); // enter card B
    m.pointer_leave(); // A's leave arrives late
    println!("enter B, leave A: running={}", m.is_running());

    // The strip only resumes once the pointer leaves the last card.
    m.pointer_leave();
    println!("leave B: running={}", m.is_running());

    for _ in 0..60 {
        m.advance();
    }
    println!("after 60 frames: offset={}", m.offset());
}

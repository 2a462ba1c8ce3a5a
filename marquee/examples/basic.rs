// Example: minimal usage — measure card spacing, advance frames, render slots.
use marquee::{Item, Marquee, MarqueeOptions};

fn main() {
    let items = vec![
        Item {
            description: "My personal portfolio site.".into(),
            tags: vec!["web".into(), "design".into()],
            ..Item::new("portfolio", "Portfolio Website")
        },
        Item::new("chatbot", "AI Chatbot"),
        Item::new("shop", "E-commerce Platform"),
        Item::new("tasks", "Task Management App"),
    ];

    let mut m = Marquee::new(items, MarqueeOptions::new());

    // The host reports rendered card leading edges after layout.
    m.measure(&[0.0, 332.0, 664.0, 996.0]);
    println!("step={} cycle_len={}", m.step(), m.cycle_len());

    for _ in 0..500 {
        m.advance();
    }
    println!("offset={} center_index={}", m.offset(), m.center_index());

    m.for_each_display_card(|card| {
        println!("slot {:>2} -> {:<24} x={}", card.slot, card.item.title, card.x);
    });
}

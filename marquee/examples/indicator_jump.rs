// Example: dot indicator — center index tracking and direct jumps.
use marquee::{Item, Marquee, MarqueeOptions};

fn dots(m: &Marquee) -> String {
    let center = m.center_index();
    (0..m.count())
        .map(|i| if i == center { '●' } else { '○' })
        .collect()
}

fn main() {
    let items = (0..5)
        .map(|i| Item::new(format!("p{i}"), format!("Project {i}")))
        .collect();
    let mut m = Marquee::new(items, MarqueeOptions::new());
    m.measure(&[0.0, 260.0, 520.0]);

    // Organic scroll moves the highlighted dot.
    for frame in 0..1_000 {
        m.advance();
        if frame % 250 == 0 {
            println!("frame {frame:>4}: {} offset={}", dots(&m), m.offset());
        }
    }

    // A dot click jumps the strip immediately, no animation.
    m.jump_to_index(3);
    println!("jump to 3:  {} offset={}", dots(&m), m.offset());

    m.step_next();
    println!("step next:  {} offset={}", dots(&m), m.offset());
    m.step_prev();
    println!("step prev:  {} offset={}", dots(&m), m.offset());
}

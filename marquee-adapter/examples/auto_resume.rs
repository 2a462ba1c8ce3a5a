// Example: a simulated 60 fps host loop with manual navigation and
// auto-resume.
use marquee::{Item, MarqueeOptions};
use marquee_adapter::Controller;

fn main() {
    let items: Vec<Item> = (0..4)
        .map(|i| Item::new(format!("p{i}"), format!("Project {i}")))
        .collect();
    let options = MarqueeOptions::new().with_resume_delay_ms(2_000);
    let mut c = Controller::new(items, options);
    c.on_resize(&[0.0, 332.0, 664.0, 996.0]);

    let mut now_ms = 0u64;
    for frame in 0u64..400 {
        // Simulate a 60 fps tick.
        now_ms += 16;

        // The user clicks dot 2 one second in.
        if now_ms == 1_008 {
            let off = c.jump_to_index(2, now_ms);
            println!("t={now_ms}ms  clicked dot 2 -> offset={off}, paused");
        }

        match c.tick(now_ms) {
            Some(offset) if frame % 60 == 0 => {
                println!(
                    "t={now_ms}ms  offset={offset:.1} center={}",
                    c.marquee().center_index()
                );
            }
            None if c.resume_at().is_some() && frame % 60 == 0 => {
                println!(
                    "t={now_ms}ms  parked, resuming at t={}ms",
                    c.resume_at().unwrap()
                );
            }
            _ => {}
        }
    }
}

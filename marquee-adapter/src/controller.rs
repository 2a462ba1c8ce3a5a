use alloc::vec::Vec;

use marquee::{Item, Marquee, MarqueeOptions};

/// A framework-neutral controller that wraps a [`marquee::Marquee`] and owns
/// the wall-clock workflows around it.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_resize` when layout settles or the viewport resizes
/// - `pointer_enter` / `pointer_leave` when pointer events occur
/// - `tick(now_ms)` once per display frame
///
/// Manual navigation (`jump_to_index`, `step_next`, `step_prev`) pauses the
/// strip and arms a resume deadline `resume_delay_ms` in the future, so the
/// carousel picks itself back up after the user stops interacting. Hover
/// pause is separate and instant; expiring the deadline only clears the
/// manual pause, never the hover gate.
#[derive(Clone, Debug)]
pub struct Controller {
    m: Marquee,
    resume_at_ms: Option<u64>,
}

impl Controller {
    pub fn new(items: Vec<Item>, options: MarqueeOptions) -> Self {
        Self {
            m: Marquee::new(items, options),
            resume_at_ms: None,
        }
    }

    pub fn from_marquee(m: Marquee) -> Self {
        Self {
            m,
            resume_at_ms: None,
        }
    }

    pub fn marquee(&self) -> &Marquee {
        &self.m
    }

    pub fn marquee_mut(&mut self) -> &mut Marquee {
        &mut self.m
    }

    pub fn into_marquee(self) -> Marquee {
        self.m
    }

    /// When the strip will resume after a manual navigation, if a deadline is
    /// armed.
    pub fn resume_at(&self) -> Option<u64> {
        self.resume_at_ms
    }

    /// Drops a pending resume deadline, leaving the strip paused until
    /// [`marquee::Marquee::resume`] is called explicitly.
    pub fn cancel_resume(&mut self) {
        self.resume_at_ms = None;
    }

    /// Advances the controller by one display frame.
    ///
    /// Expires the auto-resume deadline first, then advances the engine.
    /// Returns the new offset when the strip moved, for the host to apply to
    /// the real transform.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        if let Some(at) = self.resume_at_ms {
            if now_ms >= at {
                self.resume_at_ms = None;
                self.m.resume();
            }
        }
        if self.m.advance() {
            Some(self.m.offset())
        } else {
            None
        }
    }

    /// Call this after layout settles and on every viewport resize, with the
    /// rendered cards' leading-edge positions.
    pub fn on_resize(&mut self, leading_edges: &[f64]) -> bool {
        self.m.measure(leading_edges)
    }

    pub fn pointer_enter(&mut self) {
        self.m.pointer_enter();
    }

    pub fn pointer_leave(&mut self) {
        self.m.pointer_leave();
    }

    /// Jumps to a dot indicator's item: immediate, no animation, and the
    /// strip pauses until `resume_delay_ms` after `now_ms`.
    ///
    /// Returns the applied offset.
    pub fn jump_to_index(&mut self, index: usize, now_ms: u64) -> f64 {
        let mut offset = self.m.offset();
        self.m.batch_update(|m| {
            m.pause();
            offset = m.jump_to_index(index);
        });
        self.arm_resume(now_ms);
        offset
    }

    /// Moves one item forward, with the same pause-and-resume semantics as
    /// [`Controller::jump_to_index`]. Returns the new center index.
    pub fn step_next(&mut self, now_ms: u64) -> usize {
        let mut index = 0;
        self.m.batch_update(|m| {
            m.pause();
            index = m.step_next();
        });
        self.arm_resume(now_ms);
        index
    }

    /// Moves one item backward, with the same pause-and-resume semantics as
    /// [`Controller::jump_to_index`]. Returns the new center index.
    pub fn step_prev(&mut self, now_ms: u64) -> usize {
        let mut index = 0;
        self.m.batch_update(|m| {
            m.pause();
            index = m.step_prev();
        });
        self.arm_resume(now_ms);
        index
    }

    fn arm_resume(&mut self, now_ms: u64) {
        let delay = self.m.options().resume_delay_ms;
        self.resume_at_ms = Some(now_ms.saturating_add(delay));
    }
}

use alloc::sync::Arc;

use crate::marquee::Marquee;

/// A callback fired when a marquee state update occurs.
///
/// The second argument is `running`.
pub type OnChangeCallback = Arc<dyn Fn(&Marquee, bool) + Send + Sync>;

/// Provisional card spacing used until the first successful measurement.
///
/// The loop animates (imprecisely) with this value before layout is ready.
pub const DEFAULT_FALLBACK_STEP: f64 = 320.0;

/// Configuration for [`crate::Marquee`].
///
/// Cheap to clone: the callback is stored in an `Arc`, so adapters can update
/// a few fields and call `Marquee::set_options` without reallocating closures.
#[derive(Clone)]
pub struct MarqueeOptions {
    /// Pixels the strip moves per display frame.
    pub speed: f64,

    /// Card spacing assumed until [`crate::Marquee::measure`] succeeds.
    pub fallback_step: f64,

    /// Enables/disables the marquee. When disabled, the strip does not
    /// advance and display queries return empty results.
    pub enabled: bool,

    /// Initial horizontal translation in pixels (usually 0).
    pub initial_offset: f64,

    /// How long after a manual navigation the strip resumes automatically.
    ///
    /// The engine itself is wall-clock free; this is read by adapters that
    /// drive the resume deadline (see the `marquee-adapter` crate).
    pub resume_delay_ms: u64,

    /// Optional callback fired when the marquee's internal state changes.
    ///
    /// The second argument indicates whether the strip is running.
    pub on_change: Option<OnChangeCallback>,
}

impl MarqueeOptions {
    pub fn new() -> Self {
        Self {
            speed: 1.0,
            fallback_step: DEFAULT_FALLBACK_STEP,
            enabled: true,
            initial_offset: 0.0,
            resume_delay_ms: 10_000,
            on_change: None,
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_fallback_step(mut self, fallback_step: f64) -> Self {
        self.fallback_step = fallback_step;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: f64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_resume_delay_ms(mut self, delay_ms: u64) -> Self {
        self.resume_delay_ms = delay_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Marquee, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for MarqueeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for MarqueeOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MarqueeOptions")
            .field("speed", &self.speed)
            .field("fallback_step", &self.fallback_step)
            .field("enabled", &self.enabled)
            .field("initial_offset", &self.initial_offset)
            .field("resume_delay_ms", &self.resume_delay_ms)
            .finish_non_exhaustive()
    }
}

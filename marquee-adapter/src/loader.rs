use core::sync::atomic::{AtomicBool, Ordering};

/// A process-wide "load once" guard for an external library's load-and-init
/// sequence (e.g. an animated-background script).
///
/// `const`-constructible, so it can live in a `static`:
///
/// ```
/// use marquee_adapter::OnceLoader;
///
/// static SCENE: OnceLoader = OnceLoader::new();
///
/// let ran = SCENE.load(|| { /* inject script, call init */ });
/// assert!(ran);
/// assert!(!SCENE.load(|| unreachable!()));
/// ```
///
/// The flag flips before `load` runs, so a re-entrant or concurrent caller
/// never starts a second initialization. It is never reset.
#[derive(Debug, Default)]
pub struct OnceLoader {
    loaded: AtomicBool,
}

impl OnceLoader {
    pub const fn new() -> Self {
        Self {
            loaded: AtomicBool::new(false),
        }
    }

    /// Runs `load` if no caller has before.
    ///
    /// Returns whether this call performed the load.
    pub fn load(&self, load: impl FnOnce()) -> bool {
        if self
            .loaded
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            load();
            true
        } else {
            false
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }
}

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::{DisplayCard, FrameState, Item, LayoutState, MarqueeOptions, ScrollState};

/// A headless infinite-loop carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by reporting card geometry and pointer events,
///   and by calling [`Marquee::advance`] once per display frame.
/// - Rendering is exposed via zero-allocation iteration
///   (`for_each_display_card`).
///
/// The rendered strip is the item list duplicated exactly twice, so content
/// is visually contiguous at both ends while the offset travels up to one
/// full logical cycle. Wraparound is a modular reduction of the offset, never
/// a reset to a fixed constant.
///
/// For auto-resume after manual navigation and frame-tick plumbing, see the
/// `marquee-adapter` crate.
#[derive(Clone, Debug)]
pub struct Marquee {
    options: MarqueeOptions,
    items: Vec<Item>,

    offset: f64,
    step: f64,
    measured: bool,

    hover_depth: usize,
    paused: bool,
    selected: Option<usize>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Marquee {
    /// Creates a new marquee over `items`.
    ///
    /// Until [`Marquee::measure`] succeeds, card spacing falls back to
    /// `options.fallback_step` so the loop can animate before layout is
    /// ready.
    pub fn new(items: Vec<Item>, options: MarqueeOptions) -> Self {
        let step = sanitize_step(options.fallback_step);
        let cycle = step * items.len() as f64;
        let offset = normalized(sanitize_offset(options.initial_offset), cycle);
        mdebug!(
            count = items.len(),
            enabled = options.enabled,
            step,
            "Marquee::new"
        );
        Self {
            options,
            items,
            offset,
            step,
            measured: false,
            hover_depth: 0,
            paused: false,
            selected: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &MarqueeOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: MarqueeOptions) {
        self.options = options;
        mtrace!(
            enabled = self.options.enabled,
            speed = self.options.speed,
            "Marquee::set_options"
        );
        if !self.measured {
            self.step = sanitize_step(self.options.fallback_step);
        }
        self.offset = normalized(self.offset, self.cycle_len());
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut MarqueeOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Marquee, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn set_speed(&mut self, speed: f64) {
        if !speed.is_finite() || speed < 0.0 {
            mwarn!(speed, "set_speed: rejecting invalid speed");
            return;
        }
        if self.options.speed == speed {
            return;
        }
        self.options.speed = speed;
        self.notify();
    }

    pub fn set_fallback_step(&mut self, fallback_step: f64) {
        self.options.fallback_step = fallback_step;
        if !self.measured {
            self.step = sanitize_step(fallback_step);
            self.offset = normalized(self.offset, self.cycle_len());
        }
        self.notify();
    }

    pub fn set_resume_delay_ms(&mut self, delay_ms: u64) {
        self.options.resume_delay_ms = delay_ms;
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_running());
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended for UI adapters: on a typical frame you might measure,
    /// jump, and pause together. Without batching, each setter may trigger
    /// `on_change`, which can be expensive if the callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    /// Enables/disables the marquee.
    ///
    /// Toggling resets the scroll offset and the interaction gates to their
    /// initial state; the current selection survives (its lifecycle is
    /// independent of scroll state).
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        self.offset = normalized(sanitize_offset(self.options.initial_offset), self.cycle_len());
        self.hover_depth = 0;
        self.paused = false;
        self.notify();
    }

    /// Whether the Animation Driver is actively advancing the strip.
    ///
    /// Level-triggered: enabled, no card hovered, and not manually paused.
    pub fn is_running(&self) -> bool {
        self.options.enabled && self.hover_depth == 0 && !self.paused
    }

    /// Current horizontal translation in pixels, in `(-cycle_len, 0]` once
    /// wrapping is active.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Sets the offset directly, reducing it modularly into
    /// `(-cycle_len, 0]`. Non-finite values are rejected.
    pub fn set_offset(&mut self, offset: f64) {
        if !offset.is_finite() {
            mwarn!(offset, "set_offset: rejecting non-finite offset");
            return;
        }
        let offset = normalized(offset, self.cycle_len());
        if self.offset == offset {
            return;
        }
        self.offset = offset;
        self.notify();
    }

    /// Measured distance between the leading edges of two consecutive cards
    /// (card width + inter-card gap), or the fallback spacing until a
    /// measurement succeeds.
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn is_measured(&self) -> bool {
        self.measured
    }

    /// Distance after which the strip's visual content repeats identically.
    ///
    /// Zero while the item list is empty or no positive spacing is known;
    /// wraparound is disabled in that case.
    pub fn cycle_len(&self) -> f64 {
        self.step * self.items.len() as f64
    }

    /// Derives card spacing from rendered leading-edge positions.
    ///
    /// Call after layout and on every viewport resize with the cards'
    /// leading-edge x positions in render order. Fewer than two cards, or a
    /// non-finite/non-positive delta, keeps the previous (or fallback)
    /// spacing and reports `false`; the next opportunity retries. Re-measuring
    /// an unchanged layout is a no-op.
    ///
    /// Returns whether the spacing changed.
    pub fn measure(&mut self, leading_edges: &[f64]) -> bool {
        if leading_edges.len() < 2 {
            mdebug!(
                cards = leading_edges.len(),
                "measure: fewer than two cards, keeping previous spacing"
            );
            return false;
        }
        let step = leading_edges[1] - leading_edges[0];
        if !step.is_finite() || step <= 0.0 {
            mwarn!(step, "measure: rejecting non-positive card spacing");
            return false;
        }
        if self.measured && self.step == step {
            return false;
        }
        mdebug!(step, "measure: card spacing updated");
        self.step = step;
        self.measured = true;
        // Keep the offset inside the new cycle so the strip does not jump.
        self.offset = normalized(self.offset, self.cycle_len());
        self.notify();
        true
    }

    /// Advances the strip by one display frame.
    ///
    /// While running, applies `offset -= speed`, then corrects
    /// `offset <= -cycle_len` by adding `cycle_len` in the same step. The
    /// correction is a pure modular reduction, so the value after wraparound
    /// represents the same visual position. With `cycle_len <= 0` wraparound
    /// is disabled; the offset still decreases and stays finite.
    ///
    /// One call does one bounded frame of work. Scheduling the next call (and
    /// stopping within a frame of `is_running` becoming false) is the host
    /// loop's job.
    ///
    /// Returns whether the strip moved.
    pub fn advance(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let speed = self.options.speed;
        if !(speed > 0.0) {
            return false;
        }
        self.offset -= speed;
        let cycle = self.cycle_len();
        if cycle > 0.0 {
            while self.offset <= -cycle {
                self.offset += cycle;
            }
        }
        self.notify();
        true
    }

    /// Reports a pointer entering any rendered card. Pauses the strip.
    pub fn pointer_enter(&mut self) {
        self.hover_depth += 1;
        if self.hover_depth == 1 {
            mtrace!("pointer_enter: pausing");
            self.notify();
        }
    }

    /// Reports a pointer leaving a card.
    ///
    /// The gate is a hover-depth counter, so a fast sweep across adjacent
    /// cards (A's leave arriving after B's enter) keeps the strip paused
    /// rather than wrongly resuming or sticking. An unmatched leave is
    /// ignored (debug-asserted).
    pub fn pointer_leave(&mut self) {
        if self.hover_depth == 0 {
            mwarn!("pointer_leave without matching pointer_enter");
            debug_assert!(
                self.hover_depth > 0,
                "pointer_leave without matching pointer_enter"
            );
            return;
        }
        self.hover_depth -= 1;
        if self.hover_depth == 0 {
            mtrace!("pointer_leave: resuming");
            self.notify();
        }
    }

    pub fn hover_depth(&self) -> usize {
        self.hover_depth
    }

    pub fn is_hovered(&self) -> bool {
        self.hover_depth > 0
    }

    /// Manually pauses the strip (e.g. around indicator navigation).
    ///
    /// Independent of the hover gate; both must clear for the strip to run.
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.notify();
        }
    }

    /// Clears a manual pause. Resumes from the current offset without
    /// snapping (provided no card is hovered).
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.notify();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The logical item nearest the visual origin, for dot highlighting.
    ///
    /// Advisory UI state: `round(|offset| / step) mod count`. A one-item
    /// rounding error under fast scroll has no correctness impact on the
    /// driver. Degenerate states (no items, no positive spacing, disabled)
    /// return 0.
    pub fn center_index(&self) -> usize {
        if !self.options.enabled {
            return 0;
        }
        let count = self.items.len();
        if count == 0 || !(self.step > 0.0) {
            return 0;
        }
        let cycle = self.cycle_len();
        let mut dist = -self.offset % cycle;
        if dist < 0.0 {
            dist += cycle;
        }
        let index = (dist / self.step + 0.5) as usize;
        index % count
    }

    /// Jumps so that logical item `index` sits at the visual origin:
    /// `offset = -(index * step)`, immediately, no animation.
    ///
    /// Otherwise behaves identically to organic scroll. Returns the applied
    /// offset.
    pub fn jump_to_index(&mut self, index: usize) -> f64 {
        let count = self.items.len();
        if count == 0 {
            return self.offset;
        }
        let index = index.min(count - 1);
        let target = -(index as f64 * self.step);
        mtrace!(index, target, "jump_to_index");
        self.set_offset(target);
        self.offset
    }

    /// Jumps one logical item forward from the current center.
    ///
    /// Returns the new center index.
    pub fn step_next(&mut self) -> usize {
        let count = self.items.len();
        if count == 0 {
            return 0;
        }
        let next = (self.center_index() + 1) % count;
        self.jump_to_index(next);
        next
    }

    /// Jumps one logical item backward from the current center.
    ///
    /// Returns the new center index.
    pub fn step_prev(&mut self) -> usize {
        let count = self.items.len();
        if count == 0 {
            return 0;
        }
        let prev = (self.center_index() + count - 1) % count;
        self.jump_to_index(prev);
        prev
    }

    /// Records an item click for the detail overlay.
    ///
    /// Selection state only; overlay rendering belongs to the host. Selecting
    /// does not stop or alter the scroll state (the hover gate does that on
    /// its own). Returns `false` for an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            mwarn!(index, count = self.items.len(), "select: out of range");
            return false;
        }
        if self.selected == Some(index) {
            return true;
        }
        self.selected = Some(index);
        self.notify();
        true
    }

    /// Clears the selection (overlay dismissed).
    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.notify();
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Number of cards in the doubled display sequence.
    pub fn display_len(&self) -> usize {
        if !self.options.enabled {
            return 0;
        }
        self.items.len() * 2
    }

    /// Iterates the doubled display sequence without allocations.
    ///
    /// Each card carries its slot, logical index, and leading-edge x position
    /// (`offset + slot * step`). Emits nothing while disabled.
    pub fn for_each_display_card<'a>(&'a self, mut f: impl FnMut(DisplayCard<'a>)) {
        if !self.options.enabled {
            return;
        }
        let count = self.items.len();
        for slot in 0..count * 2 {
            let index = slot % count;
            f(DisplayCard {
                slot,
                index,
                x: self.offset + slot as f64 * self.step,
                item: &self.items[index],
            });
        }
    }

    /// Collects display cards into `out` (clears `out` first).
    ///
    /// Convenience wrapper around [`Self::for_each_display_card`]; for
    /// maximum performance, prefer the iteration API and reuse a scratch
    /// buffer in your adapter.
    pub fn collect_display_cards<'a>(&'a self, out: &mut Vec<DisplayCard<'a>>) {
        out.clear();
        self.for_each_display_card(|card| out.push(card));
    }

    /// Returns a lightweight snapshot of the current scroll state.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.offset,
            running: self.is_running(),
        }
    }

    /// Returns a lightweight snapshot of the measured layout.
    pub fn layout_state(&self) -> LayoutState {
        LayoutState {
            step: self.step,
            measured: self.measured,
        }
    }

    /// Returns a combined snapshot of layout + scroll state.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            layout: self.layout_state(),
            scroll: self.scroll_state(),
        }
    }

    /// Restores the scroll offset from a previously captured snapshot.
    ///
    /// The offset is reduced modularly into the current cycle. `running` is
    /// not forced; it stays derived from the gates.
    pub fn restore_scroll_state(&mut self, scroll: ScrollState) {
        self.set_offset(scroll.offset);
    }

    /// Restores measured layout from a previously captured snapshot.
    ///
    /// Non-finite or non-positive steps are rejected, keeping the current
    /// spacing.
    pub fn restore_layout_state(&mut self, layout: LayoutState) {
        if !layout.step.is_finite() || layout.step <= 0.0 {
            mwarn!(step = layout.step, "restore_layout_state: rejecting step");
            return;
        }
        if self.step == layout.step && self.measured == layout.measured {
            return;
        }
        self.step = layout.step;
        self.measured = layout.measured;
        self.offset = normalized(self.offset, self.cycle_len());
        self.notify();
    }

    /// Restores both layout + scroll state from a previously captured
    /// snapshot.
    pub fn restore_frame_state(&mut self, frame: FrameState) {
        self.batch_update(|m| {
            m.restore_layout_state(frame.layout);
            m.restore_scroll_state(frame.scroll);
        });
    }
}

fn sanitize_step(step: f64) -> f64 {
    if step.is_finite() && step > 0.0 { step } else { 0.0 }
}

fn sanitize_offset(offset: f64) -> f64 {
    if offset.is_finite() { offset } else { 0.0 }
}

/// Reduces `offset` modularly into `(-cycle, 0]`.
///
/// In-range values pass through untouched so exact jump targets are
/// preserved. With `cycle <= 0` reduction is disabled.
fn normalized(offset: f64, cycle: f64) -> f64 {
    if cycle <= 0.0 {
        return offset;
    }
    if offset > 0.0 || offset <= -cycle {
        let mut off = offset % cycle;
        if off > 0.0 {
            off -= cycle;
        }
        off
    } else {
        offset
    }
}

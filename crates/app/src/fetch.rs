use dioxus::prelude::*;

/// Monotonically increasing stamp for a view's report fetches.
///
/// Without cancellation, a slow earlier request could land after a newer one
/// and overwrite its state. Each fetch takes a stamp from `begin()` and only
/// commits its result if `is_current` still holds.
#[derive(Clone, Copy)]
pub struct RequestGeneration(Signal<u64>);

impl RequestGeneration {
    pub fn new(counter: Signal<u64>) -> Self {
        Self(counter)
    }

    /// Start a new fetch, invalidating every outstanding one.
    pub fn begin(&mut self) -> u64 {
        let next = *self.0.peek() + 1;
        self.0.set(next);
        next
    }

    /// Whether the fetch holding `stamp` is still the latest.
    pub fn is_current(&self, stamp: u64) -> bool {
        *self.0.peek() == stamp
    }
}

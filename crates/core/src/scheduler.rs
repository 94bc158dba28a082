//! Coalescing redraw scheduler.
//!
//! Holds at most one pending redraw deadline. Scheduling again replaces the
//! pending request, so two quick requests still fire once. Time is passed in
//! by the caller; nothing here reads a clock.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedrawScheduler {
    pending_at_ms: Option<u64>,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending request with one due at `now_ms + delay_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u32) {
        self.pending_at_ms = Some(now_ms.saturating_add(u64::from(delay_ms)));
    }

    pub fn is_pending(&self) -> bool {
        self.pending_at_ms.is_some()
    }

    pub fn pending_at(&self) -> Option<u64> {
        self.pending_at_ms
    }

    /// Milliseconds until the pending request is due (0 if overdue).
    pub fn time_until(&self, now_ms: u64) -> Option<u64> {
        self.pending_at_ms.map(|at| at.saturating_sub(now_ms))
    }

    /// Consume the pending request if it is due.
    pub fn take_due(&mut self, now_ms: u64) -> bool {
        match self.pending_at_ms {
            Some(at) if at <= now_ms => {
                self.pending_at_ms = None;
                true
            }
            _ => false,
        }
    }
}

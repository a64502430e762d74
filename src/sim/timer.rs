//! One-shot deferred events
//!
//! The death pause, the delay before the game over banner and the banner
//! timeout are all "fire once after N ms". Each entry is stamped with the run
//! generation that scheduled it; the session drops entries whose stamp no
//! longer matches, so an aborted run cannot leak into the next one.

/// What a deferred entry does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredEvent {
    /// Dying -> Falling
    BeginFall,
    /// Falling (player off screen) -> GameOverDisplay
    ShowGameOver,
    /// GameOverDisplay -> Idle
    DismissGameOver,
}

/// A scheduled one-shot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deferred {
    /// Timestamp (ms) at or after which the entry fires
    pub due_ms: f64,
    /// Run generation at scheduling time
    pub generation: u32,
    pub event: DeferredEvent,
}

/// Pending one-shots, fired in due order
#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    pending: Vec<Deferred>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, generation: u32, event: DeferredEvent) {
        self.pending.push(Deferred {
            due_ms: now_ms + delay_ms,
            generation,
            event,
        });
    }

    /// Remove and return every entry due at `now_ms`, earliest first
    pub fn take_due(&mut self, now_ms: f64) -> Vec<Deferred> {
        let mut due: Vec<Deferred> = Vec::new();
        self.pending.retain(|d| {
            if d.due_ms <= now_ms {
                due.push(*d);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms));
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

//! Single-slot delayed tick
//!
//! The game loop runs once per frame and asks the scheduler whether the next
//! tick is due. There is never more than one tick pending: scheduling again
//! replaces the pending one, and a cancelled tick never fires.

use log::trace;

/// Identifies one scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// A tick that has just fired, with the time it was due
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiredTick {
    pub handle: TimerHandle,
    pub due_at_ms: f64,
}

#[derive(Debug, Clone, Copy)]
struct PendingTick {
    handle: TimerHandle,
    due_at_ms: f64,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    pending: Option<PendingTick>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a tick `delay_ms` after `now_ms`, dropping any tick already pending
    pub fn schedule(&mut self, now_ms: f64, delay_ms: u32) -> TimerHandle {
        if let Some(previous) = self.cancel() {
            trace!("replaced pending tick {:?}", previous);
        }
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending = Some(PendingTick { handle, due_at_ms: now_ms + f64::from(delay_ms) });
        handle
    }

    /// Arms the tick after `fired`, counted from when `fired` was due so frame
    /// granularity does not stretch the interval. After a stall longer than
    /// one interval the cadence restarts from `now_ms` instead of bursting.
    pub fn schedule_after(&mut self, fired: FiredTick, now_ms: f64, delay_ms: u32) -> TimerHandle {
        let anchor = if now_ms - fired.due_at_ms > f64::from(delay_ms) {
            now_ms
        } else {
            fired.due_at_ms
        };
        self.schedule(anchor, delay_ms)
    }

    /// Disarms the pending tick, returning its handle if there was one
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.pending.take().map(|p| p.handle)
    }

    pub fn pending(&self) -> Option<TimerHandle> {
        self.pending.map(|p| p.handle)
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Milliseconds left before the pending tick fires
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.pending.map(|p| (p.due_at_ms - now_ms).max(0.0))
    }

    /// Fires the pending tick if it is due. A fired tick is disarmed; the
    /// caller decides whether to schedule another.
    pub fn poll(&mut self, now_ms: f64) -> Option<FiredTick> {
        match self.pending {
            Some(p) if now_ms >= p.due_at_ms => {
                self.pending = None;
                Some(FiredTick { handle: p.handle, due_at_ms: p.due_at_ms })
            }
            _ => None,
        }
    }
}

//! Virtual-clock scheduler for every deferred callback.
//!
//! Nothing in Folio sleeps. Delayed work is queued as a [`Task`] with a due
//! time in milliseconds; the host advances the clock and runs whatever came
//! due. Tasks due at the same instant run in scheduling order.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::effects::Control;
use crate::form::Field;
use crate::section::SectionId;

/// Handle for cancelling a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Deferred work understood by [`crate::portfolio::Portfolio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Run the combined scroll handler once
    ScrollTick,
    /// Pointer has been still long enough to count as idle
    PointerIdle,
    ClearThemeTransition,
    ClearNavLinkPress(SectionId),
    ClearNavbarNudge,
    RevealChild { section: SectionId, index: usize },
    FadeInError(Field),
    /// Enter stage `stage` of a button animation
    ButtonStage { control: Control, stage: usize },
    RemoveParticle(u32),
    IntroReveal,
    IntroSettle,
}

#[derive(Debug)]
struct Scheduled {
    due: u64,
    id: u64,
    task: Task,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first, then FIFO)
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Queue of tasks keyed by due time.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: u64,
    next_id: u64,
    queue: BinaryHeap<Scheduled>,
    live: HashSet<u64>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Move the clock forward. Time never runs backwards.
    pub fn set_now(&mut self, now: u64) {
        self.now = self.now.max(now);
    }

    /// Queue `task` to run `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, task: Task) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.queue.push(Scheduled {
            due: self.now + delay_ms,
            id,
            task,
        });
        self.live.insert(id);
        tracing::trace!(?task, delay_ms, "scheduled");
        TimerId(id)
    }

    /// Cancel a pending task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, timer: TimerId) -> bool {
        self.live.remove(&timer.0)
    }

    pub fn is_pending(&self, timer: TimerId) -> bool {
        self.live.contains(&timer.0)
    }

    /// Number of tasks still waiting to run.
    pub fn pending(&self) -> usize {
        self.live.len()
    }

    /// Due time of the earliest live task.
    pub fn next_due(&mut self) -> Option<u64> {
        self.discard_cancelled();
        self.queue.peek().map(|s| s.due)
    }

    /// Pop the earliest task due at or before `now`, moving the clock to its
    /// due time so anything it schedules is relative to that instant.
    pub fn pop_due(&mut self, now: u64) -> Option<Task> {
        self.discard_cancelled();
        if self.queue.peek()?.due > now {
            return None;
        }
        let next = self.queue.pop()?;
        self.live.remove(&next.id);
        self.now = self.now.max(next.due);
        Some(next.task)
    }

    fn discard_cancelled(&mut self) {
        while let Some(head) = self.queue.peek() {
            if self.live.contains(&head.id) {
                break;
            }
            self.queue.pop();
        }
    }
}

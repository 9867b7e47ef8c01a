//! Bounded undo history: a single shared-timeline stack of full-surface
//! snapshots. It is not per-author; every replica pushes and pops it in the
//! same order.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

use crate::surface::Surface;

#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<Surface>,
    capacity: usize,
}

impl History {
    /// A history holding at most `capacity` snapshots (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { snapshots: VecDeque::with_capacity(capacity), capacity }
    }

    /// Push a snapshot. Returns the oldest snapshot if it was evicted to make room.
    pub fn push(&mut self, snapshot: Surface) -> Option<Surface> {
        let evicted = if self.snapshots.len() == self.capacity { self.snapshots.pop_front() } else { None };
        self.snapshots.push_back(snapshot);
        evicted
    }

    /// Pop the most recent snapshot.
    pub fn pop(&mut self) -> Option<Surface> {
        self.snapshots.pop_back()
    }

    /// Put a previously evicted snapshot back at the bottom of the stack.
    pub fn restore_oldest(&mut self, snapshot: Surface) {
        if self.snapshots.len() < self.capacity {
            self.snapshots.push_front(snapshot);
        }
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Number of snapshots currently held.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }
}

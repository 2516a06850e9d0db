//! Time-ordered pending-resumption queue.
//!
//! A binary min-heap keyed on `(time, seq)`.  `seq` is a monotonically
//! increasing insertion counter: entries scheduled for the same virtual
//! instant pop in the order they were pushed, which is the FIFO tie-break
//! the simulation's determinism contract requires.  A re-suspended process
//! gets a fresh `seq` on every push, so "order scheduled" always means the
//! order of the most recent scheduling, not process creation order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bt_core::SimTime;

use crate::Process;

/// One pending resumption: the instant it is due and the process to resume.
pub(crate) struct Entry<W> {
    pub time: SimTime,
    pub seq: u64,
    pub process: Box<dyn Process<W>>,
}

impl<W> PartialEq for Entry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.time.total_cmp(&other.time) == Ordering::Equal && self.seq == other.seq
    }
}
impl<W> Eq for Entry<W> {}

impl<W> PartialOrd for Entry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W> Ord for Entry<W> {
    /// Reversed so `BinaryHeap` (a max-heap) pops the earliest time first,
    /// and within one instant the lowest sequence number.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .time
            .total_cmp(&self.time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// The scheduler's pending-event queue.
pub(crate) struct EventQueue<W> {
    heap: BinaryHeap<Entry<W>>,
    next_seq: u64,
}

impl<W> Default for EventQueue<W> {
    fn default() -> Self {
        Self { heap: BinaryHeap::new(), next_seq: 0 }
    }
}

impl<W> EventQueue<W> {
    /// Queue `process` for resumption at `time`.
    pub fn push(&mut self, time: SimTime, process: Box<dyn Process<W>>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { time, seq, process });
    }

    /// Remove and return the earliest entry (FIFO among ties).
    pub fn pop(&mut self) -> Option<Entry<W>> {
        self.heap.pop()
    }

    /// The due time of the earliest entry, without removing it.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|e| e.time)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

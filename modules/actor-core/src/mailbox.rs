use alloc::vec::Vec;

use portable_atomic::{AtomicUsize, Ordering};
use reaktor_utils_core_rs::{
  collections::{QueueError, RingQueue},
  sync::{sync_mutex_like::SpinSyncMutex, Flag},
};

use crate::{
  enqueue_outcome::EnqueueOutcome, envelope::Envelope, priority::Priority, send_error::SendError,
};

#[cfg(test)]
mod tests;

/// Per-actor message queue with two priority bands and a private stash.
///
/// Producers may be any thread; the consumer is always the worker currently
/// running the actor. Enqueues are non-blocking and linearizable per band.
/// Dequeue drains every urgent envelope before any normal one; within a band
/// order is FIFO.
#[derive(Debug)]
pub struct Mailbox {
  urgent:  SpinSyncMutex<RingQueue<Envelope>>,
  normal:  SpinSyncMutex<RingQueue<Envelope>>,
  stash:   SpinSyncMutex<RingQueue<Envelope>>,
  pending: AtomicUsize,
  closed:  Flag,
}

impl Mailbox {
  /// Creates an empty mailbox.
  #[must_use]
  pub fn new() -> Self {
    Self {
      urgent:  SpinSyncMutex::new(RingQueue::new()),
      normal:  SpinSyncMutex::new(RingQueue::new()),
      stash:   SpinSyncMutex::new(RingQueue::new()),
      pending: AtomicUsize::new(0),
      closed:  Flag::new(false),
    }
  }

  /// Enqueues an envelope on its priority band.
  ///
  /// The returned outcome reports whether this enqueue crossed the
  /// empty boundary; exactly one [`EnqueueOutcome::EnqueuedFirst`] is
  /// produced per empty-to-non-empty transition.
  ///
  /// # Errors
  ///
  /// Returns [`SendError::Closed`] once the mailbox has been closed.
  ///
  /// # Panics
  ///
  /// Panics when the queue backend reports a poll-side variant during an
  /// offer, which the mailbox's unbounded bands never produce.
  pub fn enqueue(&self, envelope: Envelope) -> Result<EnqueueOutcome, SendError> {
    if self.closed.get() {
      return Err(SendError::Closed(envelope));
    }
    let band = match envelope.priority() {
      | Priority::Urgent => &self.urgent,
      | Priority::Normal => &self.normal,
    };
    match band.lock().offer(envelope) {
      | Ok(()) => {},
      | Err(QueueError::Closed(envelope) | QueueError::Full(envelope)) => return Err(SendError::Closed(envelope)),
      | Err(QueueError::Empty) => panic!("unexpected queue error variant during offer"),
    }
    let previously_pending = self.pending.fetch_add(1, Ordering::AcqRel);
    if previously_pending == 0 {
      Ok(EnqueueOutcome::EnqueuedFirst)
    } else {
      Ok(EnqueueOutcome::Enqueued)
    }
  }

  /// Dequeues the next envelope, urgent band first.
  pub fn dequeue(&self) -> Option<Envelope> {
    let envelope = {
      let mut urgent = self.urgent.lock();
      urgent.poll()
    }
    .or_else(|| self.normal.lock().poll());
    if envelope.is_some() {
      self.pending.fetch_sub(1, Ordering::AcqRel);
    }
    envelope
  }

  /// Moves an envelope into the stash.
  pub fn stash(&self, envelope: Envelope) {
    let _ = self.stash.lock().offer(envelope);
  }

  /// Reinjects every stashed envelope at the head of the normal band,
  /// preserving their original relative order. Returns how many moved.
  pub fn unstash_all(&self) -> usize {
    let drained = self.stash.lock().drain();
    let count = drained.len();
    if count == 0 {
      return 0;
    }
    {
      let mut normal = self.normal.lock();
      for envelope in drained.into_iter().rev() {
        let _ = normal.offer_front(envelope);
      }
    }
    self.pending.fetch_add(count, Ordering::AcqRel);
    count
  }

  /// Returns the number of envelopes awaiting dequeue (stash excluded).
  #[must_use]
  pub fn len(&self) -> usize {
    self.pending.load(Ordering::Acquire)
  }

  /// Returns `true` when no envelope awaits dequeue.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns the number of stashed envelopes.
  #[must_use]
  pub fn stash_len(&self) -> usize {
    self.stash.lock().len()
  }

  /// Returns `true` once the mailbox has been closed.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.closed.get()
  }

  /// Closes the mailbox and drains every remaining envelope, stash
  /// included, in dequeue order.
  pub fn close(&self) -> Vec<Envelope> {
    self.closed.set(true);
    let mut drained = Vec::new();
    {
      let mut urgent = self.urgent.lock();
      urgent.close();
      drained.extend(urgent.drain());
    }
    {
      let mut normal = self.normal.lock();
      normal.close();
      drained.extend(normal.drain());
    }
    {
      let mut stash = self.stash.lock();
      stash.close();
      drained.extend(stash.drain());
    }
    self.pending.store(0, Ordering::Release);
    drained
  }
}

impl Default for Mailbox {
  fn default() -> Self {
    Self::new()
  }
}

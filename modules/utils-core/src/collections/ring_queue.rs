use alloc::collections::VecDeque;

use super::QueueError;


/// Growable FIFO ring buffer with an optional capacity bound and a closed
/// state.
///
/// Not synchronised; callers wrap it in a mutex when shared. Closing the
/// queue rejects further offers while the remaining elements stay pollable.
#[derive(Debug)]
pub struct RingQueue<T> {
  items:    VecDeque<T>,
  capacity: Option<usize>,
  closed:   bool,
}

impl<T> RingQueue<T> {
  /// Creates an unbounded queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { items: VecDeque::new(), capacity: None, closed: false }
  }

  /// Creates a queue rejecting offers beyond `capacity` elements.
  #[must_use]
  pub fn bounded(capacity: usize) -> Self {
    Self { items: VecDeque::with_capacity(capacity), capacity: Some(capacity), closed: false }
  }

  /// Appends an element at the tail.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Closed`] after [`RingQueue::close`] and
  /// [`QueueError::Full`] when a bounded queue is at capacity; both variants
  /// return the rejected element.
  pub fn offer(&mut self, item: T) -> Result<(), QueueError<T>> {
    if self.closed {
      return Err(QueueError::Closed(item));
    }
    if let Some(capacity) = self.capacity {
      if self.items.len() >= capacity {
        return Err(QueueError::Full(item));
      }
    }
    self.items.push_back(item);
    Ok(())
  }

  /// Inserts an element at the head, ahead of all queued elements.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Closed`] after [`RingQueue::close`]. Head
  /// insertion ignores the capacity bound; it only ever reinjects elements
  /// that were polled from this queue.
  pub fn offer_front(&mut self, item: T) -> Result<(), QueueError<T>> {
    if self.closed {
      return Err(QueueError::Closed(item));
    }
    self.items.push_front(item);
    Ok(())
  }

  /// Removes and returns the head element.
  pub fn poll(&mut self) -> Option<T> {
    self.items.pop_front()
  }

  /// Returns the number of queued elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Returns `true` when no elements are queued.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Marks the queue closed; queued elements remain pollable.
  pub fn close(&mut self) {
    self.closed = true;
  }

  /// Returns `true` once the queue has been closed.
  #[must_use]
  pub const fn is_closed(&self) -> bool {
    self.closed
  }

  /// Removes and returns every queued element in FIFO order.
  pub fn drain(&mut self) -> VecDeque<T> {
    core::mem::take(&mut self.items)
  }
}

impl<T> Default for RingQueue<T> {
  fn default() -> Self {
    Self::new()
  }
}

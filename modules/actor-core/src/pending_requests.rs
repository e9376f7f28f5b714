use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::{correlation_id::CorrelationId, payload::Payload, request_record::RequestRecord};


/// Correlation table of one actor cell.
///
/// Tracks outstanding requests, the LIFO stack of awaited ids, and early
/// responses parked until their id reaches the stack top.
pub(crate) struct PendingRequests {
  next_id:     u64,
  records:     HashMap<u64, RequestRecord>,
  await_stack: Vec<u64>,
  parked:      HashMap<u64, Payload>,
}

impl PendingRequests {
  pub(crate) fn new() -> Self {
    Self { next_id: 1, records: HashMap::new(), await_stack: Vec::new(), parked: HashMap::new() }
  }

  /// Allocates a fresh positive correlation id.
  pub(crate) fn allocate(&mut self) -> CorrelationId {
    let id = self.next_id;
    self.next_id += 1;
    CorrelationId::new(id)
  }

  pub(crate) fn insert(&mut self, id: CorrelationId) {
    self.records.insert(id.value(), RequestRecord::new());
  }

  pub(crate) fn record_mut(&mut self, id: CorrelationId) -> Option<&mut RequestRecord> {
    self.records.get_mut(&id.value())
  }

  pub(crate) fn contains(&self, id: CorrelationId) -> bool {
    self.records.contains_key(&id.value())
  }

  /// Marks `id` awaited and pushes it on the LIFO stack.
  pub(crate) fn push_awaited(&mut self, id: CorrelationId) {
    if let Some(record) = self.records.get_mut(&id.value()) {
      record.mark_awaited();
      self.await_stack.push(id.value());
    }
  }

  pub(crate) fn is_awaiting(&self) -> bool {
    !self.await_stack.is_empty()
  }

  pub(crate) fn stack_top(&self) -> Option<u64> {
    self.await_stack.last().copied()
  }

  /// Classifies an arrived response: fire now, park until the stack top, or
  /// drop (no record, e.g. a response after its timeout already fired).
  pub(crate) fn accept_response(&mut self, id: CorrelationId, payload: Payload) -> ResponseDisposition {
    let Some(record) = self.records.get(&id.value()) else {
      return ResponseDisposition::Unclaimed(payload);
    };
    if record.is_awaited() && self.stack_top() != Some(id.value()) {
      self.parked.insert(id.value(), payload);
      return ResponseDisposition::Parked;
    }
    let record = match self.records.remove(&id.value()) {
      | Some(record) => record,
      | None => return ResponseDisposition::Unclaimed(payload),
    };
    if record.is_awaited() {
      self.await_stack.pop();
    }
    ResponseDisposition::Fire(record, payload)
  }

  /// Takes the next parked response that reached the stack top.
  pub(crate) fn next_ready(&mut self) -> Option<(RequestRecord, Payload)> {
    let top = self.stack_top()?;
    let payload = self.parked.remove(&top)?;
    let record = self.records.remove(&top)?;
    self.await_stack.pop();
    Some((record, payload))
  }
}

/// What to do with one arrived response.
pub(crate) enum ResponseDisposition {
  /// Run the handlers now.
  Fire(RequestRecord, Payload),
  /// Parked until its id reaches the await-stack top.
  Parked,
  /// No record claims the response; drop it.
  Unclaimed(Payload),
}

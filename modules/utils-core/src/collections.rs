//! Sequential collections and deadline bookkeeping.

mod deadline_heap;
mod queue_error;
mod ring_queue;

pub use deadline_heap::{DeadlineEntry, DeadlineHeap};
pub use queue_error::QueueError;
pub use ring_queue::RingQueue;

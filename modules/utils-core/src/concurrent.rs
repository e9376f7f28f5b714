//! Synchronisation aids for coordinating threads in tests and runtimes.

mod count_down_latch;
mod wait_group;

pub use count_down_latch::CountDownLatch;
pub use wait_group::WaitGroup;

#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![cfg_attr(not(test), deny(clippy::redundant_clone))]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_strip)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::no_effect)]
#![deny(dropping_copy_types)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(unreachable_pub)]

//! Standard-library runtime for the reaktor actor core.
//!
//! Provides the work-stealing thread pool behind the core's scheduler
//! bridge, dedicated threads for detached actors, a timer thread for
//! deadlines and inactivity windows, a monotonic clock over
//! [`std::time::Instant`], and a stderr log writer.

mod detached_runner;
mod instant_clock;
mod pool_scheduler;
mod runtime;
mod stderr_logger_writer;
mod thread_timer_driver;
mod work_queue;

pub use detached_runner::DetachedRunner;
pub use instant_clock::InstantClock;
pub use pool_scheduler::PoolScheduler;
pub use runtime::launch;
pub use stderr_logger_writer::StderrLoggerWriter;
pub use thread_timer_driver::ThreadTimerDriver;
pub use work_queue::{InjectorQueue, WorkQueue, WorkStealer};

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
#![no_std]

//! Credit-regulated streaming on top of the reaktor actor core.
//!
//! Sources generate elements while they hold credit, stages transform them,
//! and sinks consume them while replenishing credit sized to their buffer
//! headroom. The handshake, steady-state, and close/abort protocol ride
//! ordinary actor envelopes, so every stream participant is just an actor
//! spawned from the props builders in this crate.

extern crate alloc;
#[cfg(test)]
extern crate std;

mod credit_balance;
mod sink;
mod source;
mod stage;
mod stream_abort;
mod stream_ack;
mod stream_batch;
mod stream_close;
mod stream_credit;
mod stream_error_kind;
mod stream_id;
mod stream_open;

pub use credit_balance::CreditBalance;
pub use sink::sink_props;
pub use source::source_props;
pub use stage::stage_props;
pub use stream_abort::StreamAbort;
pub use stream_ack::StreamAck;
pub use stream_batch::StreamBatch;
pub use stream_close::StreamClose;
pub use stream_credit::StreamCredit;
pub use stream_error_kind::{StreamErrorKind, STREAM_CATEGORY};
pub use stream_id::StreamId;
pub use stream_open::StreamOpen;

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

//! Runtime-agnostic core of the reaktor actor runtime.
//!
//! Hosts the message data model (copy-on-write payloads, envelopes, atoms),
//! the per-actor machinery (mailbox, behavior, control block, execution
//! engine), request/response correlation, supervision via links and
//! monitors, and the actor system that owns them. Execution and timing are
//! abstract: a scheduler bridge, a timer driver, and a monotonic clock are
//! plugged in by the hosting runtime, with deterministic inline variants
//! provided here for tests and `no_std` hosts.

extern crate alloc;
#[cfg(test)]
extern crate std;

mod actor;
mod actor_backend;
mod actor_cell;
mod actor_context;
mod actor_future;
mod actor_id;
mod actor_ref;
mod actor_state;
mod actor_system_config;
mod atom;
mod behavior;
mod correlation_id;
mod dead_letter_entry;
mod default_handler_policy;
mod down_message;
mod enqueue_outcome;
mod envelope;
mod envelope_kind;
mod error;
mod error_renderer;
mod event_stream;
mod event_stream_event;
mod event_stream_subscriber;
mod exit_message;
mod exit_reason;
mod future_reply_backend;
mod handler_outcome;
mod inactivity_elapsed;
mod inspect_annotation;
mod inspect_registry;
mod inspect_value;
mod inspectable;
mod inspector;
mod inline_scheduler;
mod lifecycle_event;
mod lifecycle_stage;
mod log_event;
mod log_level;
mod logger_subscriber;
mod logger_writer;
mod mailbox;
mod manual_clock;
mod manual_timer_driver;
mod message_signature;
mod monotonic_clock;
mod name_registry;
mod node_id;
mod payload;
mod payload_value;
mod pending_requests;
mod poll_tier;
mod priority;
mod props;
mod quantum_outcome;
mod request_handle;
mod request_record;
mod response_promise;
mod runtime_error_kind;
mod scheduler_config;
mod scheduler_bridge;
mod send_error;
mod spawn_error;
mod system;
mod system_hooks;
mod system_state;
mod timer_action;
mod timer_driver;
/// Seams the external transport layer plugs into.
pub mod transport;
mod type_tag;
mod value_reader;
mod value_writer;
mod weak_actor_ref;

pub use actor::Actor;
pub use actor_backend::ActorBackend;
pub use actor_cell::ActorCell;
pub use actor_context::ActorContext;
pub use actor_future::ActorFuture;
pub use actor_id::ActorId;
pub use actor_ref::ActorRef;
pub use actor_state::ActorState;
pub use actor_system_config::ActorSystemConfig;
pub use atom::{Atom, ATOM_MAX_LEN};
pub use behavior::Behavior;
pub use correlation_id::CorrelationId;
pub use dead_letter_entry::DeadLetterEntry;
pub use default_handler_policy::DefaultHandlerPolicy;
pub use down_message::DownMessage;
pub use enqueue_outcome::EnqueueOutcome;
pub use envelope::Envelope;
pub use envelope_kind::EnvelopeKind;
pub use error::Error;
pub use error_renderer::ErrorRendererRegistry;
pub use event_stream::EventStream;
pub use event_stream_event::EventStreamEvent;
pub use event_stream_subscriber::EventStreamSubscriber;
pub use exit_message::ExitMessage;
pub use exit_reason::{ExitReason, EXIT_CATEGORY};
pub use handler_outcome::HandlerOutcome;
pub use inspect_annotation::InspectAnnotation;
pub use inspect_registry::{
  is_local_only, name_for_tag, register_type, registered_tag, tag_for_name, RegistrationMode,
};
pub use inspect_value::InspectValue;
pub use inspectable::Inspectable;
pub use inspector::Inspector;
pub use inline_scheduler::InlineScheduler;
pub use lifecycle_event::LifecycleEvent;
pub use lifecycle_stage::LifecycleStage;
pub use log_event::LogEvent;
pub use log_level::LogLevel;
pub use logger_subscriber::LoggerSubscriber;
pub use logger_writer::LoggerWriter;
pub use mailbox::Mailbox;
pub use manual_clock::ManualClock;
pub use manual_timer_driver::ManualTimerDriver;
pub use message_signature::MessageSignature;
pub use monotonic_clock::MonotonicClock;
pub use name_registry::NameRegistry;
pub use node_id::NodeId;
pub use payload::{Payload, PayloadBuilder, PayloadField};
pub use payload_value::PayloadValue;
pub use poll_tier::PollTier;
pub use priority::Priority;
pub use props::Props;
pub use quantum_outcome::QuantumOutcome;
pub use request_handle::RequestHandle;
pub use response_promise::ResponsePromise;
pub use runtime_error_kind::{RuntimeErrorKind, RUNTIME_CATEGORY};
pub use scheduler_config::SchedulerConfig;
pub use scheduler_bridge::SchedulerBridge;
pub use send_error::SendError;
pub use spawn_error::SpawnError;
pub use system::ActorSystem;
pub use system_state::SystemState;
pub use timer_action::TimerAction;
pub use timer_driver::TimerDriver;
pub use type_tag::TypeTag;
pub use value_reader::ValueReader;
pub use value_writer::ValueWriter;
pub use weak_actor_ref::WeakActorRef;

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unreachable_pub)]

//! Facade crate for the reaktor actor runtime workspace.
//!
//! Re-exports the public surface of the `reaktor-*-rs` crates living in the
//! same repository: the runtime-agnostic core, the threaded standard
//! runtime, the streaming layer, and the foundation utilities.

/// Runtime-agnostic core: payloads, mailboxes, behaviors, cells,
/// correlation, and supervision.
pub use reaktor_actor_core_rs as actor;
/// Threaded runtime: work-stealing pool, detached actors, timer thread.
pub use reaktor_actor_std_rs as runtime;
/// Credit-regulated streaming layer.
pub use reaktor_streams_rs as streams;
/// Foundation utilities shared by the runtime crates.
pub use reaktor_utils_core_rs as utils;

/// Commonly used types, importable in one line.
pub mod prelude {
  pub use reaktor_actor_core_rs::{
    Actor, ActorContext, ActorRef, ActorSystem, ActorSystemConfig, Atom, Behavior, DownMessage, Error,
    ExitMessage, ExitReason, HandlerOutcome, LogLevel, Payload, Props, ResponsePromise, RuntimeErrorKind,
    SchedulerConfig,
  };
  pub use reaktor_actor_std_rs::launch;
  pub use reaktor_streams_rs::{sink_props, source_props, stage_props, StreamErrorKind};
}

/// Returns the semantic version of the workspace.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}

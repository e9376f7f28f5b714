use core::time::Duration;

use crate::{node_id::NodeId, scheduler_config::SchedulerConfig};

/// Configuration accepted by [`crate::system::ActorSystem`].
///
/// Layering precedence (defaults, file, command line) is the embedder's
/// responsibility; the runtime consumes the merged result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActorSystemConfig {
  node:               NodeId,
  scheduler:          SchedulerConfig,
  request_timeout:    Duration,
  heartbeat_interval: Duration,
}

impl ActorSystemConfig {
  /// Creates the default configuration for the local node.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      node:               NodeId::LOCAL,
      scheduler:          SchedulerConfig::new(),
      request_timeout:    Duration::from_secs(10),
      heartbeat_interval: Duration::from_secs(1),
    }
  }

  /// Overrides the node identifier.
  #[must_use]
  pub const fn with_node(mut self, node: NodeId) -> Self {
    self.node = node;
    self
  }

  /// Overrides the scheduler configuration.
  #[must_use]
  pub const fn with_scheduler(mut self, scheduler: SchedulerConfig) -> Self {
    self.scheduler = scheduler;
    self
  }

  /// Overrides the default request deadline.
  #[must_use]
  pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.request_timeout = timeout;
    self
  }

  /// Overrides the heartbeat interval handed to the transport layer.
  #[must_use]
  pub const fn with_heartbeat_interval(mut self, interval: Duration) -> Self {
    self.heartbeat_interval = interval;
    self
  }

  /// Returns the node identifier.
  #[must_use]
  pub const fn node(&self) -> NodeId {
    self.node
  }

  /// Returns the scheduler configuration.
  #[must_use]
  pub const fn scheduler(&self) -> &SchedulerConfig {
    &self.scheduler
  }

  /// Returns the default request deadline.
  #[must_use]
  pub const fn request_timeout(&self) -> Duration {
    self.request_timeout
  }

  /// Returns the heartbeat interval consumed by the transport layer.
  #[must_use]
  pub const fn heartbeat_interval(&self) -> Duration {
    self.heartbeat_interval
  }
}

impl Default for ActorSystemConfig {
  fn default() -> Self {
    Self::new()
  }
}

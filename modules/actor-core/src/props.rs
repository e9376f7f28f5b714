use alloc::string::String;

use reaktor_utils_core_rs::sync::{sync_mutex_like::SpinSyncMutex, ArcShared};

use crate::{actor::Actor, actor_context::ActorContext, behavior::Behavior, error::Error};

type ConstructorFn = ArcShared<dyn Fn(&mut ActorContext<'_>) -> Result<Behavior, Error> + Send + Sync>;

/// Recipe for spawning an actor.
///
/// Function-style and class-style actors are two constructors that produce
/// the same control block: [`Props::from_actor`] lowers the class form onto
/// the closure form.
pub struct Props {
  constructor: ConstructorFn,
  name:        Option<String>,
  detached:    bool,
}

impl Props {
  /// Creates props from a behavior-returning constructor closure.
  ///
  /// The closure runs once at spawn time; actor state lives in the
  /// returned behavior's clauses and is released with them at termination.
  #[must_use]
  pub fn from_fn<F>(constructor: F) -> Self
  where
    F: Fn(&mut ActorContext<'_>) -> Result<Behavior, Error> + Send + Sync + 'static, {
    let constructor: ConstructorFn = ArcShared::new(constructor)
      .into_dyn(|f| f as &(dyn Fn(&mut ActorContext<'_>) -> Result<Behavior, Error> + Send + Sync));
    Self { constructor, name: None, detached: false }
  }

  /// Creates props from a class-style actor factory.
  #[must_use]
  pub fn from_actor<A, F>(factory: F) -> Self
  where
    A: Actor + 'static,
    F: Fn() -> A + Send + Sync + 'static, {
    Self::from_fn(move |ctx| {
      let actor = ArcShared::new(SpinSyncMutex::new(factory()));
      actor.lock().pre_start(ctx)?;
      {
        let actor = actor.clone();
        ctx.register_cleanup(move |stop_ctx| {
          if let Err(error) = actor.lock().post_stop(stop_ctx) {
            stop_ctx.log(crate::log_level::LogLevel::Warn, alloc::format!("post_stop failed: {error}"));
          }
        });
      }
      Ok(Behavior::new().on_any(move |ctx, payload| actor.lock().receive(ctx, payload)))
    })
  }

  /// Binds a unique name for the actor within its system.
  #[must_use]
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  /// Runs the actor on a dedicated thread with a blocking receive loop
  /// instead of the work-stealing pool.
  #[must_use]
  pub const fn detached(mut self) -> Self {
    self.detached = true;
    self
  }

  /// Returns the requested name, if any.
  #[must_use]
  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  /// Returns `true` when the actor wants a dedicated thread.
  #[must_use]
  pub const fn is_detached(&self) -> bool {
    self.detached
  }

  pub(crate) fn build_behavior(&self, ctx: &mut ActorContext<'_>) -> Result<Behavior, Error> {
    (self.constructor)(ctx)
  }
}

impl Clone for Props {
  fn clone(&self) -> Self {
    Self { constructor: self.constructor.clone(), name: self.name.clone(), detached: self.detached }
  }
}

impl core::fmt::Debug for Props {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Props").field("name", &self.name).field("detached", &self.detached).finish()
  }
}

use reaktor_actor_core_rs::{
  ActorSystem, ActorSystemConfig, EventStreamSubscriber, LogLevel, LoggerSubscriber, LoggerWriter,
  MonotonicClock, SchedulerBridge, TimerDriver,
};
use reaktor_utils_core_rs::sync::ArcShared;

use crate::{
  instant_clock::InstantClock, pool_scheduler::PoolScheduler, stderr_logger_writer::StderrLoggerWriter,
  thread_timer_driver::ThreadTimerDriver,
};

/// Launches an actor system on the threaded runtime: the work-stealing
/// pool, the timer thread, the instant clock, and warn-level stderr
/// logging.
///
/// [`ActorSystem::shutdown`] winds the threads down again.
#[must_use]
pub fn launch(config: ActorSystemConfig) -> ActorSystem {
  let clock: ArcShared<dyn MonotonicClock> =
    ArcShared::new(InstantClock::new()).into_dyn(|clock| clock as &dyn MonotonicClock);
  let timer: ArcShared<dyn TimerDriver> =
    ArcShared::new(ThreadTimerDriver::start(clock.clone())).into_dyn(|timer| timer as &dyn TimerDriver);
  let scheduler: ArcShared<dyn SchedulerBridge> =
    ArcShared::new(PoolScheduler::start(*config.scheduler())).into_dyn(|pool| pool as &dyn SchedulerBridge);

  let system = ActorSystem::with_services(config, scheduler, timer, clock);

  let writer: ArcShared<dyn LoggerWriter> =
    ArcShared::new(StderrLoggerWriter::new()).into_dyn(|writer| writer as &dyn LoggerWriter);
  let logger: ArcShared<dyn EventStreamSubscriber> = ArcShared::new(LoggerSubscriber::new(LogLevel::Warn, writer))
    .into_dyn(|logger| logger as &dyn EventStreamSubscriber);
  system.subscribe(logger);

  system
}

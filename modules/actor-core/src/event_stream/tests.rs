use alloc::{string::String, vec::Vec};

use reaktor_utils_core_rs::sync::{sync_mutex_like::SpinSyncMutex, ArcShared};

use super::EventStream;
use crate::{
  event_stream_event::EventStreamEvent, event_stream_subscriber::EventStreamSubscriber, log_event::LogEvent,
  log_level::LogLevel, logger_subscriber::LoggerSubscriber, logger_writer::LoggerWriter,
};

struct RecordingWriter {
  lines: ArcShared<SpinSyncMutex<Vec<String>>>,
}

impl LoggerWriter for RecordingWriter {
  fn write(&self, event: &LogEvent) {
    self.lines.lock().push(String::from(event.message()));
  }
}

fn log(level: LogLevel, message: &str) -> EventStreamEvent {
  EventStreamEvent::Log(LogEvent::new(level, None, String::from(message)))
}

#[test]
fn publishes_to_every_subscriber() {
  let stream = EventStream::new();
  let lines = ArcShared::new(SpinSyncMutex::new(Vec::new()));

  let writer = ArcShared::new(RecordingWriter { lines: lines.clone() });
  let subscriber = LoggerSubscriber::new(LogLevel::Debug, writer.into_dyn(|writer| writer as &dyn LoggerWriter));
  let subscriber: ArcShared<dyn EventStreamSubscriber> =
    ArcShared::new(subscriber).into_dyn(|subscriber| subscriber as &dyn EventStreamSubscriber);
  stream.subscribe(subscriber);

  stream.publish(&log(LogLevel::Info, "first"));
  stream.publish(&log(LogLevel::Warn, "second"));

  assert_eq!(*lines.lock(), ["first", "second"]);
}

#[test]
fn logger_subscriber_filters_below_its_level() {
  let stream = EventStream::new();
  let lines = ArcShared::new(SpinSyncMutex::new(Vec::new()));

  let writer = ArcShared::new(RecordingWriter { lines: lines.clone() });
  let subscriber = LoggerSubscriber::new(LogLevel::Warn, writer.into_dyn(|writer| writer as &dyn LoggerWriter));
  let subscriber: ArcShared<dyn EventStreamSubscriber> =
    ArcShared::new(subscriber).into_dyn(|subscriber| subscriber as &dyn EventStreamSubscriber);
  stream.subscribe(subscriber);

  stream.publish(&log(LogLevel::Debug, "chatter"));
  stream.publish(&log(LogLevel::Error, "boom"));

  assert_eq!(*lines.lock(), ["boom"]);
}

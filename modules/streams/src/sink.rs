use alloc::boxed::Box;

use reaktor_actor_core_rs::{ActorRef, Behavior, Error, HandlerOutcome, Payload, Props};
use reaktor_utils_core_rs::sync::{sync_mutex_like::SpinSyncMutex, ArcShared};

use crate::{
  stream_abort::StreamAbort, stream_ack::StreamAck, stream_batch::StreamBatch, stream_close::StreamClose,
  stream_credit::StreamCredit, stream_id::StreamId, stream_open::StreamOpen,
};

type FinaliserFn = Box<dyn FnOnce(Option<Error>) + Send>;

struct SinkState<C> {
  consumer:  C,
  upstream:  ActorRef,
  up_id:     Option<StreamId>,
  capacity:  u64,
  up_window: u64,
  finaliser: Option<FinaliserFn>,
}

impl<C> SinkState<C> {
  fn finalise(&mut self, error: Option<Error>) {
    if let Some(finaliser) = self.finaliser.take() {
      finaliser(error);
    }
  }
}

/// Builds the props of a stream sink.
///
/// The sink opens the stream towards `upstream` at spawn time with an
/// initial credit grant of `capacity`, consumes every element through
/// `consumer`, and replenishes credit as elements are consumed. The
/// finaliser runs exactly once: with `None` on a clean close (including a
/// vanished upstream) or with the error on an abort or consumer failure.
#[must_use]
pub fn sink_props<C, F>(upstream: ActorRef, capacity: u64, consumer: C, finaliser: F) -> Props
where
  C: FnMut(&Payload) -> Result<(), Error> + Clone + Send + Sync + 'static,
  F: FnOnce(Option<Error>) + Clone + Send + Sync + 'static, {
  Props::from_fn(move |ctx| {
    let state = ArcShared::new(SpinSyncMutex::new(SinkState {
      consumer:  consumer.clone(),
      upstream:  upstream.clone(),
      up_id:     None,
      capacity,
      up_window: capacity,
      finaliser: Some(Box::new(finaliser.clone())),
    }));

    // A vanished upstream closes the stream cleanly.
    let _ = ctx.monitor(&upstream);
    {
      let state = state.clone();
      ctx.set_down_handler(move |_ctx, _down| {
        state.lock().finalise(None);
        Ok(())
      });
    }

    let _ = upstream.tell(Payload::of1(StreamOpen::new(capacity, ctx.self_ref())));

    let on_ack = state.clone();
    let on_batch = state.clone();
    let on_close = state.clone();
    let on_abort = state;

    Ok(
      Behavior::new()
        .on::<(StreamAck,), _>(move |_ctx, (ack,)| {
          let mut state = on_ack.lock();
          if state.up_id.is_none() {
            state.up_id = Some(ack.id());
          }
          Ok(HandlerOutcome::NoReply)
        })
        .on::<(StreamBatch,), _>(move |_ctx, (batch,)| {
          let mut state = on_batch.lock();
          if state.up_id != Some(batch.id()) {
            return Ok(HandlerOutcome::NoReply);
          }
          state.up_window = state.up_window.saturating_sub(batch.len() as u64);
          for item in batch.items() {
            if let Err(error) = (state.consumer)(item) {
              // Cancel upstream, then report the failure locally.
              if let Some(up_id) = state.up_id.take() {
                let _ = state.upstream.tell(Payload::of1(StreamAbort::new(up_id, error.clone())));
              }
              state.finalise(Some(error));
              return Ok(HandlerOutcome::NoReply);
            }
          }
          // Everything consumed: the full buffer headroom goes back
          // upstream.
          let delta = state.capacity - state.up_window;
          if delta > 0 {
            if let Some(up_id) = state.up_id {
              let _ = state.upstream.tell(Payload::of1(StreamCredit::new(up_id, delta)));
              state.up_window = state.capacity;
            }
          }
          Ok(HandlerOutcome::NoReply)
        })
        .on::<(StreamClose,), _>(move |_ctx, (close,)| {
          let mut state = on_close.lock();
          if state.up_id == Some(close.id()) {
            state.up_id = None;
            state.finalise(None);
          }
          Ok(HandlerOutcome::NoReply)
        })
        .on::<(StreamAbort,), _>(move |_ctx, (abort,)| {
          let mut state = on_abort.lock();
          if state.up_id == Some(abort.id()) || state.up_id.is_none() {
            state.up_id = None;
            state.finalise(Some(abort.error().clone()));
          }
          Ok(HandlerOutcome::NoReply)
        }),
    )
  })
}

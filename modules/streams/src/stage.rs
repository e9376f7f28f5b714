use alloc::{collections::VecDeque, vec::Vec};

use reaktor_actor_core_rs::{ActorRef, Behavior, Error, HandlerOutcome, Payload, Props};
use reaktor_utils_core_rs::sync::{sync_mutex_like::SpinSyncMutex, ArcShared};

use crate::{
  credit_balance::CreditBalance, stream_abort::StreamAbort, stream_ack::StreamAck, stream_batch::StreamBatch,
  stream_close::StreamClose, stream_credit::StreamCredit, stream_error_kind::StreamErrorKind,
  stream_id::StreamId, stream_open::StreamOpen,
};

const MAX_BATCH: usize = 32;

struct DownstreamLink {
  id:     StreamId,
  target: ActorRef,
  credit: CreditBalance,
}

struct StageState<F> {
  transform:   F,
  upstream:    ActorRef,
  self_ref:    Option<ActorRef>,
  up_id:       Option<StreamId>,
  up_opened:   bool,
  up_window:   u64,
  capacity:    usize,
  downstreams: Vec<DownstreamLink>,
  next_id:     u64,
  buffer:      VecDeque<Payload>,
  closing:     bool,
  finished:    bool,
}

impl<F> StageState<F>
where
  F: FnMut(&Payload) -> Result<Option<Payload>, Error>,
{
  /// Emits buffered elements while every downstream link has credit.
  fn flush(&mut self) {
    while !self.buffer.is_empty() && !self.downstreams.is_empty() {
      let credit_floor =
        self.downstreams.iter().map(|link| link.credit.available()).min().unwrap_or(0) as usize;
      let take = credit_floor.min(self.buffer.len()).min(MAX_BATCH);
      if take == 0 {
        return;
      }
      let batch: Vec<Payload> = self.buffer.drain(..take).collect();
      for link in &mut self.downstreams {
        let debited = link.credit.try_debit(take as u64);
        debug_assert!(debited, "flush sizing stays within every balance");
        let _ = link.target.tell(Payload::of1(StreamBatch::new(link.id, batch.clone())));
      }
    }
    if self.closing && self.buffer.is_empty() {
      self.finish_close();
    }
  }

  /// Keeps the upstream window equal to the free buffer headroom.
  fn replenish_upstream(&mut self) {
    if !self.up_opened || self.closing || self.finished {
      return;
    }
    let Some(up_id) = self.up_id else {
      return;
    };
    let headroom = (self.capacity - self.buffer.len().min(self.capacity)) as u64;
    if headroom > self.up_window {
      let delta = headroom - self.up_window;
      let _ = self.upstream.tell(Payload::of1(StreamCredit::new(up_id, delta)));
      self.up_window = headroom;
    }
  }

  fn finish_close(&mut self) {
    if self.finished {
      return;
    }
    self.finished = true;
    for link in self.downstreams.drain(..) {
      let _ = link.target.tell(Payload::of1(StreamClose::new(link.id)));
    }
  }

  /// Reports `error` upstream as cancellation and downstream as an erroring
  /// end-of-stream.
  fn abort_both(&mut self, error: &Error) {
    if self.finished {
      return;
    }
    self.finished = true;
    if let Some(up_id) = self.up_id.take() {
      let _ = self.upstream.tell(Payload::of1(StreamAbort::new(up_id, error.clone())));
    }
    for link in self.downstreams.drain(..) {
      let _ = link.target.tell(Payload::of1(StreamAbort::new(link.id, error.clone())));
    }
    self.buffer.clear();
  }
}

/// Builds the props of a stream stage with one input and any number of
/// outputs.
///
/// The transform maps each input element to zero or one output elements
/// (`Ok(None)` filters). Downstreams open onto the stage like onto any
/// upstream; the first open makes the stage open its own input towards
/// `upstream` with a credit grant of `capacity`. Transform failures abort
/// the stream in both directions.
#[must_use]
pub fn stage_props<F>(upstream: ActorRef, capacity: usize, transform: F) -> Props
where
  F: FnMut(&Payload) -> Result<Option<Payload>, Error> + Clone + Send + Sync + 'static, {
  Props::from_fn(move |ctx| {
    let state = ArcShared::new(SpinSyncMutex::new(StageState {
      transform:   transform.clone(),
      upstream:    upstream.clone(),
      self_ref:    Some(ctx.self_ref()),
      up_id:       None,
      up_opened:   false,
      up_window:   0,
      capacity,
      downstreams: Vec::new(),
      next_id:     1,
      buffer:      VecDeque::new(),
      closing:     false,
      finished:    false,
    }));

    // A vanished upstream ends the stream cleanly.
    let _ = ctx.monitor(&upstream);
    {
      let state = state.clone();
      ctx.set_down_handler(move |_ctx, _down| {
        let mut state = state.lock();
        state.closing = true;
        state.flush();
        Ok(())
      });
    }

    let on_open = state.clone();
    let on_ack = state.clone();
    let on_batch = state.clone();
    let on_credit = state.clone();
    let on_close = state.clone();
    let on_abort = state;

    Ok(
      Behavior::new()
        .on::<(StreamOpen,), _>(move |_ctx, (open,)| {
          let mut state = on_open.lock();
          if state.finished {
            let abort = StreamAbort::new(StreamId::new(0), StreamErrorKind::InvalidStreamState.into_error());
            let _ = open.downstream().tell(Payload::of1(abort));
            return Ok(HandlerOutcome::NoReply);
          }
          if state.downstreams.iter().any(|link| link.target.id() == open.downstream().id()) {
            let abort = StreamAbort::new(StreamId::new(0), StreamErrorKind::DownstreamAlreadyExists.into_error());
            let _ = open.downstream().tell(Payload::of1(abort));
            return Ok(HandlerOutcome::NoReply);
          }
          let id = StreamId::new(state.next_id);
          state.next_id += 1;
          state.downstreams.push(DownstreamLink {
            id,
            target: open.downstream().clone(),
            credit: CreditBalance::new(open.credit()),
          });
          let _ = open.downstream().tell(Payload::of1(StreamAck::new(id)));
          if state.up_opened {
            state.flush();
            state.replenish_upstream();
          } else {
            state.up_opened = true;
            state.up_window = state.capacity as u64;
            let grant = state.capacity as u64;
            let handle = state.self_ref.clone();
            if let Some(handle) = handle {
              let _ = state.upstream.tell(Payload::of1(StreamOpen::new(grant, handle)));
            }
          }
          Ok(HandlerOutcome::NoReply)
        })
        .on::<(StreamAck,), _>(move |_ctx, (ack,)| {
          let mut state = on_ack.lock();
          if state.up_id.is_none() {
            state.up_id = Some(ack.id());
            state.replenish_upstream();
          }
          Ok(HandlerOutcome::NoReply)
        })
        .on::<(StreamBatch,), _>(move |_ctx, (batch,)| {
          let mut state = on_batch.lock();
          if state.up_id != Some(batch.id()) || state.finished {
            return Ok(HandlerOutcome::NoReply);
          }
          state.up_window = state.up_window.saturating_sub(batch.len() as u64);
          for item in batch.items() {
            match (state.transform)(item) {
              | Ok(Some(output)) => state.buffer.push_back(output),
              | Ok(None) => {},
              | Err(error) => {
                state.abort_both(&error);
                return Ok(HandlerOutcome::NoReply);
              },
            }
          }
          state.flush();
          state.replenish_upstream();
          Ok(HandlerOutcome::NoReply)
        })
        .on::<(StreamCredit,), _>(move |_ctx, (credit,)| {
          let mut state = on_credit.lock();
          let mut replenished = false;
          for link in &mut state.downstreams {
            if link.id == credit.id() {
              link.credit.grant(credit.amount());
              replenished = true;
            }
          }
          if replenished {
            state.flush();
            state.replenish_upstream();
          }
          Ok(HandlerOutcome::NoReply)
        })
        .on::<(StreamClose,), _>(move |_ctx, (close,)| {
          let mut state = on_close.lock();
          if state.up_id == Some(close.id()) {
            state.closing = true;
            state.flush();
          }
          Ok(HandlerOutcome::NoReply)
        })
        .on::<(StreamAbort,), _>(move |_ctx, (abort,)| {
          let mut state = on_abort.lock();
          if state.up_id == Some(abort.id()) {
            // Upstream failed: fail the downstream side.
            let error = abort.error().clone();
            state.up_id = None;
            state.abort_both(&error);
          } else if state.downstreams.iter().any(|link| link.id == abort.id()) {
            state.downstreams.retain(|link| link.id != abort.id());
            if state.downstreams.is_empty() {
              // The last consumer cancelled: cancel upstream too.
              let error = abort.error().clone();
              state.abort_both(&error);
            }
          }
          Ok(HandlerOutcome::NoReply)
        }),
    )
  })
}

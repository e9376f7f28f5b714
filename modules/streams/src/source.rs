use alloc::vec::Vec;

use reaktor_actor_core_rs::{ActorRef, Behavior, HandlerOutcome, Payload, Props};
use reaktor_utils_core_rs::sync::{sync_mutex_like::SpinSyncMutex, ArcShared};

use crate::{
  credit_balance::CreditBalance, stream_abort::StreamAbort, stream_ack::StreamAck, stream_batch::StreamBatch,
  stream_close::StreamClose, stream_credit::StreamCredit, stream_error_kind::StreamErrorKind,
  stream_id::StreamId, stream_open::StreamOpen,
};

/// Largest batch a pump emits at once, regardless of available credit.
const MAX_BATCH: usize = 32;

struct DownstreamLink {
  id:     StreamId,
  target: ActorRef,
  credit: CreditBalance,
}

struct SourceState<G> {
  generator: G,
  link:      Option<DownstreamLink>,
  next_id:   u64,
  done:      bool,
}

impl<G> SourceState<G>
where
  G: FnMut() -> Option<Payload>,
{
  fn pump(&mut self) {
    loop {
      let Some(link) = self.link.as_mut() else {
        return;
      };
      if self.done || !link.credit.has_credit() {
        break;
      }
      let mut batch = Vec::new();
      while batch.len() < MAX_BATCH && link.credit.available() > batch.len() as u64 {
        match (self.generator)() {
          | Some(item) => batch.push(item),
          | None => {
            self.done = true;
            break;
          },
        }
      }
      if batch.is_empty() {
        break;
      }
      let debited = link.credit.try_debit(batch.len() as u64);
      debug_assert!(debited, "batch sizing stays within the balance");
      let _ = link.target.tell(Payload::of1(StreamBatch::new(link.id, batch)));
    }
    if self.done {
      if let Some(link) = self.link.take() {
        let _ = link.target.tell(Payload::of1(StreamClose::new(link.id)));
      }
    }
  }
}

/// Builds the props of a stream source.
///
/// The generator is invoked only while the downstream's credit balance is
/// positive; returning `None` ends the stream with a clean close. A source
/// serves exactly one downstream; a second opener is refused with
/// `downstream_already_exists`.
#[must_use]
pub fn source_props<G>(generator: G) -> Props
where
  G: FnMut() -> Option<Payload> + Clone + Send + Sync + 'static, {
  Props::from_fn(move |_ctx| {
    let state =
      ArcShared::new(SpinSyncMutex::new(SourceState { generator: generator.clone(), link: None, next_id: 1, done: false }));

    let on_open = state.clone();
    let on_credit = state.clone();
    let on_abort = state;

    Ok(
      Behavior::new()
        .on::<(StreamOpen,), _>(move |_ctx, (open,)| {
          let mut state = on_open.lock();
          if state.link.is_some() {
            let abort = StreamAbort::new(StreamId::new(0), StreamErrorKind::DownstreamAlreadyExists.into_error());
            let _ = open.downstream().tell(Payload::of1(abort));
            return Ok(HandlerOutcome::NoReply);
          }
          let id = StreamId::new(state.next_id);
          state.next_id += 1;
          state.link = Some(DownstreamLink {
            id,
            target: open.downstream().clone(),
            credit: CreditBalance::new(open.credit()),
          });
          let _ = open.downstream().tell(Payload::of1(StreamAck::new(id)));
          state.pump();
          Ok(HandlerOutcome::NoReply)
        })
        .on::<(StreamCredit,), _>(move |_ctx, (credit,)| {
          let mut state = on_credit.lock();
          let mut replenished = false;
          if let Some(link) = state.link.as_mut() {
            if link.id == credit.id() {
              link.credit.grant(credit.amount());
              replenished = true;
            }
          }
          if replenished {
            state.pump();
          }
          Ok(HandlerOutcome::NoReply)
        })
        .on::<(StreamAbort,), _>(move |_ctx, (abort,)| {
          let mut state = on_abort.lock();
          if state.link.as_ref().map(|link| link.id) == Some(abort.id()) {
            state.link = None;
          }
          Ok(HandlerOutcome::NoReply)
        }),
    )
  })
}

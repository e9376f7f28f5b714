use alloc::{format, string::String};

use hashbrown::HashMap;
use reaktor_utils_core_rs::sync::{sync_mutex_like::SpinSyncMutex, ArcShared};

use crate::{atom::Atom, error::Error};

#[cfg(test)]
mod tests;

type RenderFn = ArcShared<dyn Fn(&Error) -> String + Send + Sync>;

/// Per-category registry of human-readable error renderers.
///
/// Categories without a registered renderer fall back to the default
/// `error(code, category)` form.
#[derive(Default)]
pub struct ErrorRendererRegistry {
  renderers: SpinSyncMutex<HashMap<u64, RenderFn>>,
}

impl ErrorRendererRegistry {
  /// Creates an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self { renderers: SpinSyncMutex::new(HashMap::new()) }
  }

  /// Registers a renderer for `category`, replacing any previous one.
  pub fn register<F>(&self, category: Atom, renderer: F)
  where
    F: Fn(&Error) -> String + Send + Sync + 'static, {
    let renderer: RenderFn = ArcShared::new(renderer).into_dyn(|f| f as &(dyn Fn(&Error) -> String + Send + Sync));
    self.renderers.lock().insert(category.value(), renderer);
  }

  /// Renders an error using its category's renderer or the default form.
  #[must_use]
  pub fn render(&self, error: &Error) -> String {
    let renderer = self.renderers.lock().get(&error.category().value()).cloned();
    match renderer {
      | Some(renderer) => renderer(error),
      | None => format!("{error}"),
    }
  }
}

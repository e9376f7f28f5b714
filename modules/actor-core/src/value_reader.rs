use alloc::{collections::VecDeque, string::String, vec::Vec};

use crate::{
  error::Error, inspect_value::InspectValue, inspector::Inspector, runtime_error_kind::RuntimeErrorKind,
};

/// Reading inspector replaying captured values into an object.
#[derive(Debug)]
pub struct ValueReader {
  values: VecDeque<InspectValue>,
}

impl ValueReader {
  /// Creates a reader replaying `values` in order.
  #[must_use]
  pub fn new(values: Vec<InspectValue>) -> Self {
    Self { values: values.into() }
  }

  fn next(&mut self) -> Result<InspectValue, Error> {
    self.values.pop_front().ok_or_else(|| RuntimeErrorKind::InvalidArgument.into_error())
  }
}

impl Inspector for ValueReader {
  fn is_loading(&self) -> bool {
    true
  }

  fn field_bool(&mut self, value: &mut bool) -> Result<(), Error> {
    match self.next()? {
      | InspectValue::Bool(replayed) => {
        *value = replayed;
        Ok(())
      },
      | _ => Err(RuntimeErrorKind::TypeMismatch.into_error()),
    }
  }

  fn field_u64(&mut self, value: &mut u64) -> Result<(), Error> {
    match self.next()? {
      | InspectValue::U64(replayed) => {
        *value = replayed;
        Ok(())
      },
      | _ => Err(RuntimeErrorKind::TypeMismatch.into_error()),
    }
  }

  fn field_i64(&mut self, value: &mut i64) -> Result<(), Error> {
    match self.next()? {
      | InspectValue::I64(replayed) => {
        *value = replayed;
        Ok(())
      },
      | _ => Err(RuntimeErrorKind::TypeMismatch.into_error()),
    }
  }

  fn field_f64(&mut self, value: &mut f64) -> Result<(), Error> {
    match self.next()? {
      | InspectValue::F64(replayed) => {
        *value = replayed;
        Ok(())
      },
      | _ => Err(RuntimeErrorKind::TypeMismatch.into_error()),
    }
  }

  fn field_text(&mut self, value: &mut String) -> Result<(), Error> {
    match self.next()? {
      | InspectValue::Text(replayed) => {
        *value = replayed;
        Ok(())
      },
      | _ => Err(RuntimeErrorKind::TypeMismatch.into_error()),
    }
  }

  fn field_bytes(&mut self, value: &mut Vec<u8>) -> Result<(), Error> {
    match self.next()? {
      | InspectValue::Bytes(replayed) => {
        *value = replayed;
        Ok(())
      },
      | _ => Err(RuntimeErrorKind::TypeMismatch.into_error()),
    }
  }
}

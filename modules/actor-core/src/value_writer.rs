use alloc::{string::String, vec::Vec};

use crate::{error::Error, inspect_value::InspectValue, inspector::Inspector};


/// Writing inspector capturing field values in visit order.
#[derive(Debug, Default)]
pub struct ValueWriter {
  values: Vec<InspectValue>,
}

impl ValueWriter {
  /// Creates an empty writer.
  #[must_use]
  pub const fn new() -> Self {
    Self { values: Vec::new() }
  }

  /// Consumes the writer and returns the captured values.
  #[must_use]
  pub fn into_values(self) -> Vec<InspectValue> {
    self.values
  }
}

impl Inspector for ValueWriter {
  fn is_loading(&self) -> bool {
    false
  }

  fn field_bool(&mut self, value: &mut bool) -> Result<(), Error> {
    self.values.push(InspectValue::Bool(*value));
    Ok(())
  }

  fn field_u64(&mut self, value: &mut u64) -> Result<(), Error> {
    self.values.push(InspectValue::U64(*value));
    Ok(())
  }

  fn field_i64(&mut self, value: &mut i64) -> Result<(), Error> {
    self.values.push(InspectValue::I64(*value));
    Ok(())
  }

  fn field_f64(&mut self, value: &mut f64) -> Result<(), Error> {
    self.values.push(InspectValue::F64(*value));
    Ok(())
  }

  fn field_text(&mut self, value: &mut String) -> Result<(), Error> {
    self.values.push(InspectValue::Text(value.clone()));
    Ok(())
  }

  fn field_bytes(&mut self, value: &mut Vec<u8>) -> Result<(), Error> {
    self.values.push(InspectValue::Bytes(value.clone()));
    Ok(())
  }
}

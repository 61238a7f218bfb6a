// shopcart/src/model/decode.rs

//! Typed decoding of shopcart payloads.
//!
//! Numeric fields accept JSON numbers or strings holding a number, since HTML
//! forms post every value as text. `product_name` must be a JSON string no
//! longer than the `VARCHAR(63)` column that stores it.

use super::item::ShopcartItem;
use crate::error::DecodeError;
use serde_json::{Map, Value};

/// Length limit of `product_name`, in characters.
pub const PRODUCT_NAME_MAX_CHARS: usize = 63;

pub(crate) fn decode_item(data: &Value) -> Result<ShopcartItem, DecodeError> {
  let fields = data.as_object().ok_or(DecodeError::WrongShape)?;

  Ok(ShopcartItem {
    customer_id: integer_field(fields, "customer_id")?,
    product_id: integer_field(fields, "product_id")?,
    product_name: name_field(fields, "product_name")?,
    product_price: float_field(fields, "product_price")?,
    quantity: quantity_field(fields, "quantity")?,
  })
}

fn required<'a>(fields: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, DecodeError> {
  fields.get(field).ok_or(DecodeError::MissingField { field })
}

fn integer_field(fields: &Map<String, Value>, field: &'static str) -> Result<i64, DecodeError> {
  let wrong_type = DecodeError::WrongFieldType {
    field,
    expected: "an integer",
  };
  match required(fields, field)? {
    Value::Number(n) => n.as_i64().ok_or(wrong_type),
    Value::String(s) => s.trim().parse::<i64>().map_err(|_| wrong_type),
    _ => Err(wrong_type),
  }
}

fn quantity_field(fields: &Map<String, Value>, field: &'static str) -> Result<i32, DecodeError> {
  let value = integer_field(fields, field)?;
  i32::try_from(value).map_err(|_| DecodeError::WrongFieldType {
    field,
    expected: "a 32-bit integer",
  })
}

fn float_field(fields: &Map<String, Value>, field: &'static str) -> Result<f64, DecodeError> {
  let wrong_type = DecodeError::WrongFieldType {
    field,
    expected: "a number",
  };
  let value = match required(fields, field)? {
    Value::Number(n) => n.as_f64(),
    Value::String(s) => s.trim().parse::<f64>().ok(),
    _ => None,
  };
  value.filter(|v| v.is_finite()).ok_or(wrong_type)
}

fn string_field(fields: &Map<String, Value>, field: &'static str) -> Result<String, DecodeError> {
  match required(fields, field)? {
    Value::String(s) => Ok(s.clone()),
    _ => Err(DecodeError::WrongFieldType {
      field,
      expected: "a string",
    }),
  }
}

fn name_field(fields: &Map<String, Value>, field: &'static str) -> Result<String, DecodeError> {
  let name = string_field(fields, field)?;
  if name.chars().count() > PRODUCT_NAME_MAX_CHARS {
    return Err(DecodeError::WrongFieldType {
      field,
      expected: "a string of at most 63 characters",
    });
  }
  Ok(name)
}

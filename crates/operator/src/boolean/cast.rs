// Copyright (c) veldb.dev 2025
// This file is licensed under the MIT, see license.md file

use veldb_type::boolean::{FALSE_TEXT, TRUE_TEXT};
use veldb_type::{Type, Value, parse_bool};

use crate::OperatorError;

pub fn to_float8(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

pub fn to_int8(value: bool) -> i64 {
    if value { 1 } else { 0 }
}

/// The text form crosses process boundaries during shuffles and storage;
/// downstream consumers must see exactly these bytes.
pub fn to_utf8(value: bool) -> &'static str {
    if value { TRUE_TEXT } else { FALSE_TEXT }
}

pub(super) fn to_float8_scalar(args: &[Value]) -> crate::Result<Value> {
    match args {
        [Value::Bool(value)] => Ok(Value::Float8(to_float8(*value))),
        _ => unreachable!("cast operand is type-checked before dispatch"),
    }
}

pub(super) fn to_int8_scalar(args: &[Value]) -> crate::Result<Value> {
    match args {
        [Value::Bool(value)] => Ok(Value::Int8(to_int8(*value))),
        _ => unreachable!("cast operand is type-checked before dispatch"),
    }
}

pub(super) fn to_utf8_scalar(args: &[Value]) -> crate::Result<Value> {
    match args {
        [Value::Bool(value)] => Ok(Value::Utf8(to_utf8(*value).to_string())),
        _ => unreachable!("cast operand is type-checked before dispatch"),
    }
}

/// The one explicitly-partial implementation in the set: text that does not
/// spell a boolean fails with an invalid cast argument.
pub(super) fn from_utf8_scalar(args: &[Value]) -> crate::Result<Value> {
    match args {
        [Value::Utf8(text)] => parse_bool(text).map(Value::Bool).map_err(|source| {
            OperatorError::InvalidCastArgument {
                value: text.clone(),
                to: Type::Bool,
                source,
            }
        }),
        _ => unreachable!("cast operand is type-checked before dispatch"),
    }
}

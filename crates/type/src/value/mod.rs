// Copyright (c) veldb.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::r#type::Type;

pub mod boolean;
pub mod r#type;

/// A runtime value, represented as a native Rust type.
///
/// Operator implementations receive values that the analyzer has already
/// type-checked; there is no undefined variant because three-valued logic
/// lives in the evaluator, not in this layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A boolean: true or false.
    Bool(bool),
    /// An 8-byte floating point
    Float8(f64),
    /// An 8-byte signed integer
    Int8(i64),
    /// A UTF-8 encoded text.
    Utf8(String),
}

impl Value {
    pub fn get_type(&self) -> Type {
        match self {
            Value::Bool(_) => Type::Bool,
            Value::Float8(_) => Type::Float8,
            Value::Int8(_) => Type::Int8,
            Value::Utf8(_) => Type::Utf8,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(true) => f.write_str(boolean::TRUE_TEXT),
            Value::Bool(false) => f.write_str(boolean::FALSE_TEXT),
            Value::Float8(value) => Display::fmt(value, f),
            Value::Int8(value) => Display::fmt(value, f),
            Value::Utf8(value) => Display::fmt(value, f),
        }
    }
}

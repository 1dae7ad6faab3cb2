// Copyright (c) veldb.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// All data types an operator signature can name.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
    /// A boolean: true or false.
    Bool,
    /// An 8-byte floating point
    Float8,
    /// An 8-byte signed integer
    Int8,
    /// A UTF-8 encoded text.
    Utf8,
}

impl Type {
    pub fn is_bool(&self) -> bool {
        matches!(self, Type::Bool)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Type::Float8 | Type::Int8)
    }

    pub fn is_utf8(&self) -> bool {
        matches!(self, Type::Utf8)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Bool => f.write_str("BOOL"),
            Type::Float8 => f.write_str("FLOAT8"),
            Type::Int8 => f.write_str("INT8"),
            Type::Utf8 => f.write_str("UTF8"),
        }
    }
}

// Copyright (c) veldb.dev 2025
// This file is licensed under the MIT, see license.md file

use thiserror::Error;

/// Errors raised while interpreting text as a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("cannot parse boolean from empty text")]
    EmptyBoolean,

    #[error("'{0}' is not a valid boolean, a numeric boolean must be 0 or 1")]
    InvalidNumberBoolean(String),

    #[error("'{0}' is not a valid boolean, expected true or false")]
    InvalidBooleanFormat(String),
}

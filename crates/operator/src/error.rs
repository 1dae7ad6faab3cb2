// Copyright (c) veldb.dev 2025
// This file is licensed under the MIT, see license.md file

use thiserror::Error;
use veldb_type::{Type, TypeError};

use crate::OperatorKind;

/// Errors raised by the operator registry.
///
/// The operator implementations themselves are total over their documented
/// domains and never fail; everything here is either a startup-time
/// registration conflict or a failed explicitly-partial cast.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperatorError {
    #[error("operator {kind} is already registered for operand types {operands:?}")]
    Duplicate { kind: OperatorKind, operands: Vec<Type> },

    #[error("cast from {from} to {to} is already registered")]
    DuplicateCast { from: Type, to: Type },

    #[error("cannot cast '{value}' to {to}")]
    InvalidCastArgument {
        value: String,
        to: Type,
        #[source]
        source: TypeError,
    },
}

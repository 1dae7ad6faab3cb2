// Copyright (c) veldb.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The closed, engine-wide catalog of operator roles.
///
/// Every type's implementation set keys against these kinds; adding a kind is
/// an engine change, not a per-type change.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatorKind {
    // select true = false
    Equal,
    // select true <> false
    NotEqual,
    // select false < true
    LessThan,
    // select false <= true
    LessThanOrEqual,
    // select true > false
    GreaterThan,
    // select true >= false
    GreaterThanOrEqual,
    // select true between false and true
    Between,
    // select cast(true as int8)
    Cast,
    // consumed by hash partitioning and hash joins, not a surface token
    HashCode,
    // internal rewrites only, never bound to a surface token
    Not,
}

impl OperatorKind {
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            OperatorKind::Equal
                | OperatorKind::NotEqual
                | OperatorKind::LessThan
                | OperatorKind::LessThanOrEqual
                | OperatorKind::GreaterThan
                | OperatorKind::GreaterThanOrEqual
        )
    }
}

impl Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OperatorKind::Equal => "EQUAL",
            OperatorKind::NotEqual => "NOT_EQUAL",
            OperatorKind::LessThan => "LESS_THAN",
            OperatorKind::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            OperatorKind::GreaterThan => "GREATER_THAN",
            OperatorKind::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            OperatorKind::Between => "BETWEEN",
            OperatorKind::Cast => "CAST",
            OperatorKind::HashCode => "HASH_CODE",
            OperatorKind::Not => "NOT",
        };
        write!(f, "{}", label)
    }
}

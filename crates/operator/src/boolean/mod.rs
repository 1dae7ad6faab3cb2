// Copyright (c) veldb.dev 2025
// This file is licensed under the MIT, see license.md file

//! The Boolean operator implementation set.
//!
//! Booleans order as false < true. Every function here is pure and
//! stateless; the comparison, between, hash and outbound cast operators are
//! total over the two-element domain and cannot fail.

mod between;
mod cast;
mod compare;
mod hash;
mod not;

pub use between::between;
pub use cast::{to_float8, to_int8, to_utf8};
pub use compare::{
    equal, greater_than, greater_than_or_equal, less_than, less_than_or_equal, not_equal,
};
pub use hash::hash_code;
pub use not::not;

use veldb_type::Type;

use crate::{OperatorKind, Operators, ScalarOperator, Visibility};

/// Register the Boolean implementation set. Called once per registry, at
/// startup.
pub fn register(operators: &mut Operators) -> crate::Result<()> {
    let comparisons: [(OperatorKind, crate::OperatorFn); 6] = [
        (OperatorKind::Equal, compare::equal_scalar),
        (OperatorKind::NotEqual, compare::not_equal_scalar),
        (OperatorKind::LessThan, compare::less_than_scalar),
        (OperatorKind::LessThanOrEqual, compare::less_than_or_equal_scalar),
        (OperatorKind::GreaterThan, compare::greater_than_scalar),
        (OperatorKind::GreaterThanOrEqual, compare::greater_than_or_equal_scalar),
    ];
    for (kind, func) in comparisons {
        operators.register_scalar(ScalarOperator::new(
            kind,
            vec![Type::Bool, Type::Bool],
            Type::Bool,
            Visibility::Public,
            func,
        ))?;
    }

    operators.register_scalar(ScalarOperator::new(
        OperatorKind::Between,
        vec![Type::Bool, Type::Bool, Type::Bool],
        Type::Bool,
        Visibility::Public,
        between::between_scalar,
    ))?;

    operators.register_scalar(ScalarOperator::new(
        OperatorKind::HashCode,
        vec![Type::Bool],
        Type::Int8,
        Visibility::Public,
        hash::hash_code_scalar,
    ))?;

    operators.register_scalar(ScalarOperator::new(
        OperatorKind::Not,
        vec![Type::Bool],
        Type::Bool,
        Visibility::Hidden,
        not::not_scalar,
    ))?;

    operators.register_cast(ScalarOperator::new(
        OperatorKind::Cast,
        vec![Type::Bool],
        Type::Float8,
        Visibility::Public,
        cast::to_float8_scalar,
    ))?;

    operators.register_cast(ScalarOperator::new(
        OperatorKind::Cast,
        vec![Type::Bool],
        Type::Int8,
        Visibility::Public,
        cast::to_int8_scalar,
    ))?;

    operators.register_cast(ScalarOperator::new(
        OperatorKind::Cast,
        vec![Type::Bool],
        Type::Utf8,
        Visibility::Public,
        cast::to_utf8_scalar,
    ))?;

    operators.register_cast(ScalarOperator::new(
        OperatorKind::Cast,
        vec![Type::Utf8],
        Type::Bool,
        Visibility::Public,
        cast::from_utf8_scalar,
    ))?;

    Ok(())
}

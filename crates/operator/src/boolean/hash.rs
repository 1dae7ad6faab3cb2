// Copyright (c) veldb.dev 2025
// This file is licensed under the MIT, see license.md file

use veldb_type::Value;

/// Hash code consumed by hash partitioning and hash joins. The constants are
/// pinned: every process in a distributed query must produce the same value
/// for the same boolean, or partitions and joins silently diverge.
pub fn hash_code(value: bool) -> i64 {
    if value { 1231 } else { 1237 }
}

pub(super) fn hash_code_scalar(args: &[Value]) -> crate::Result<Value> {
    match args {
        [Value::Bool(value)] => Ok(Value::Int8(hash_code(*value))),
        _ => unreachable!("hash operand is type-checked before dispatch"),
    }
}

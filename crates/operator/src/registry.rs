// Copyright (c) veldb.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;
use veldb_type::{Type, Value};

use crate::{OperatorError, OperatorKind, boolean};

/// Whether the analyzer may bind a surface-language token to an
/// implementation. Hidden implementations are reachable only through
/// internal rewrites performed by the planner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Hidden,
}

impl Visibility {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Visibility::Hidden)
    }
}

/// A registered operator implementation. Implementations are plain function
/// pointers over immutable data, so a registry of them is shareable across
/// threads without synchronization.
pub type OperatorFn = fn(&[Value]) -> crate::Result<Value>;

/// One entry of a type's operator implementation set: the lookup key
/// (kind and ordered operand types), the result type, the surface-language
/// visibility and the function itself.
#[derive(Clone)]
pub struct ScalarOperator {
    kind: OperatorKind,
    operands: Vec<Type>,
    returns: Type,
    visibility: Visibility,
    func: OperatorFn,
}

impl ScalarOperator {
    pub fn new(
        kind: OperatorKind,
        operands: Vec<Type>,
        returns: Type,
        visibility: Visibility,
        func: OperatorFn,
    ) -> Self {
        Self { kind, operands, returns, visibility, func }
    }

    pub fn kind(&self) -> OperatorKind {
        self.kind
    }

    pub fn operands(&self) -> &[Type] {
        &self.operands
    }

    pub fn returns(&self) -> Type {
        self.returns
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Invoke the implementation with already-type-checked operands.
    pub fn invoke(&self, args: &[Value]) -> crate::Result<Value> {
        debug_assert_eq!(args.len(), self.operands.len());
        debug_assert!(
            args.iter().zip(self.operands.iter()).all(|(value, ty)| value.get_type() == *ty)
        );
        (self.func)(args)
    }
}

/// The operator registry: (kind, ordered operand types) to implementation
/// for regular operators, (source type, target type) to implementation for
/// casts. Populated once at startup and read-only afterwards.
pub struct Operators {
    scalars: HashMap<(OperatorKind, Vec<Type>), ScalarOperator>,
    casts: HashMap<(Type, Type), ScalarOperator>,
}

impl Operators {
    pub fn new() -> Self {
        Self { scalars: HashMap::new(), casts: HashMap::new() }
    }

    /// The process-wide registry with every built-in type's operator set,
    /// built on first use and immutable afterwards.
    pub fn standard() -> &'static Operators {
        static STANDARD: Lazy<Operators> = Lazy::new(|| {
            let mut operators = Operators::new();
            boolean::register(&mut operators)
                .expect("built-in operator sets must not conflict");
            operators
        });
        &STANDARD
    }

    pub fn register_scalar(&mut self, op: ScalarOperator) -> crate::Result<()> {
        let key = (op.kind, op.operands.clone());
        if self.scalars.contains_key(&key) {
            return Err(OperatorError::Duplicate { kind: op.kind, operands: op.operands });
        }
        debug!(kind = %op.kind, operands = ?op.operands, "registered scalar operator");
        self.scalars.insert(key, op);
        Ok(())
    }

    pub fn register_cast(&mut self, op: ScalarOperator) -> crate::Result<()> {
        debug_assert_eq!(op.kind, OperatorKind::Cast);
        debug_assert_eq!(op.operands.len(), 1);
        let key = (op.operands[0], op.returns);
        if self.casts.contains_key(&key) {
            return Err(OperatorError::DuplicateCast { from: key.0, to: key.1 });
        }
        debug!(from = %key.0, to = %key.1, "registered cast");
        self.casts.insert(key, op);
        Ok(())
    }

    /// Resolve an operator for internal use; hidden implementations are
    /// visible through this path.
    pub fn operator(&self, kind: OperatorKind, operands: &[Type]) -> Option<&ScalarOperator> {
        self.scalars.get(&(kind, operands.to_vec()))
    }

    /// Resolve an operator on behalf of a surface-language token. Hidden
    /// implementations never resolve here.
    pub fn surface_operator(
        &self,
        kind: OperatorKind,
        operands: &[Type],
    ) -> Option<&ScalarOperator> {
        self.operator(kind, operands).filter(|op| !op.visibility.is_hidden())
    }

    pub fn cast(&self, from: Type, to: Type) -> Option<&ScalarOperator> {
        self.casts.get(&(from, to))
    }
}

impl Default for Operators {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use veldb_type::{Type, Value};

    use super::*;

    fn always_true(_args: &[Value]) -> crate::Result<Value> {
        Ok(Value::Bool(true))
    }

    #[test]
    fn test_register_and_resolve() {
        let mut operators = Operators::new();
        operators
            .register_scalar(ScalarOperator::new(
                OperatorKind::Equal,
                vec![Type::Bool, Type::Bool],
                Type::Bool,
                Visibility::Public,
                always_true,
            ))
            .unwrap();

        let op = operators.operator(OperatorKind::Equal, &[Type::Bool, Type::Bool]).unwrap();
        assert_eq!(op.kind(), OperatorKind::Equal);
        assert_eq!(op.operands(), &[Type::Bool, Type::Bool]);
        assert_eq!(op.returns(), Type::Bool);
        assert_eq!(op.visibility(), Visibility::Public);
    }

    #[test]
    fn test_resolve_unknown() {
        let operators = Operators::new();
        assert!(operators.operator(OperatorKind::Equal, &[Type::Bool, Type::Bool]).is_none());
        assert!(operators.cast(Type::Bool, Type::Int8).is_none());
    }

    #[test]
    fn test_resolve_distinguishes_operand_types() {
        let mut operators = Operators::new();
        operators
            .register_scalar(ScalarOperator::new(
                OperatorKind::Equal,
                vec![Type::Bool, Type::Bool],
                Type::Bool,
                Visibility::Public,
                always_true,
            ))
            .unwrap();

        assert!(operators.operator(OperatorKind::Equal, &[Type::Int8, Type::Int8]).is_none());
        assert!(operators.operator(OperatorKind::Equal, &[Type::Bool]).is_none());
    }

    #[test]
    fn test_duplicate_scalar_rejected() {
        let mut operators = Operators::new();
        let op = ScalarOperator::new(
            OperatorKind::Equal,
            vec![Type::Bool, Type::Bool],
            Type::Bool,
            Visibility::Public,
            always_true,
        );
        operators.register_scalar(op.clone()).unwrap();

        let result = operators.register_scalar(op);
        assert_eq!(
            result,
            Err(OperatorError::Duplicate {
                kind: OperatorKind::Equal,
                operands: vec![Type::Bool, Type::Bool],
            })
        );
    }

    #[test]
    fn test_duplicate_cast_rejected() {
        let mut operators = Operators::new();
        let op = ScalarOperator::new(
            OperatorKind::Cast,
            vec![Type::Bool],
            Type::Int8,
            Visibility::Public,
            always_true,
        );
        operators.register_cast(op.clone()).unwrap();

        let result = operators.register_cast(op);
        assert_eq!(
            result,
            Err(OperatorError::DuplicateCast { from: Type::Bool, to: Type::Int8 })
        );
    }

    #[test]
    fn test_same_kind_different_cast_targets() {
        let mut operators = Operators::new();
        for target in [Type::Float8, Type::Int8, Type::Utf8] {
            operators
                .register_cast(ScalarOperator::new(
                    OperatorKind::Cast,
                    vec![Type::Bool],
                    target,
                    Visibility::Public,
                    always_true,
                ))
                .unwrap();
        }
        assert!(operators.cast(Type::Bool, Type::Float8).is_some());
        assert!(operators.cast(Type::Bool, Type::Int8).is_some());
        assert!(operators.cast(Type::Bool, Type::Utf8).is_some());
        assert!(operators.cast(Type::Int8, Type::Bool).is_none());
    }

    #[test]
    fn test_hidden_not_resolvable_from_surface() {
        let mut operators = Operators::new();
        operators
            .register_scalar(ScalarOperator::new(
                OperatorKind::Not,
                vec![Type::Bool],
                Type::Bool,
                Visibility::Hidden,
                always_true,
            ))
            .unwrap();

        assert!(operators.operator(OperatorKind::Not, &[Type::Bool]).is_some());
        assert!(operators.surface_operator(OperatorKind::Not, &[Type::Bool]).is_none());
    }

    #[test]
    fn test_standard_is_shared() {
        let first = Operators::standard() as *const Operators;
        let second = Operators::standard() as *const Operators;
        assert_eq!(first, second);
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Operators>();
        assert_send_sync::<ScalarOperator>();
    }
}

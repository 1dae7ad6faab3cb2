// Copyright (c) veldb.dev 2025
// This file is licensed under the MIT, see license.md file

pub mod boolean;
mod error;
mod kind;
mod registry;

pub use error::OperatorError;
pub use kind::OperatorKind;
pub use registry::{OperatorFn, Operators, ScalarOperator, Visibility};

pub type Result<T> = std::result::Result<T, OperatorError>;

// Copyright (c) veldb.dev 2025
// This file is licensed under the MIT, see license.md file

mod error;
mod value;

pub use error::TypeError;
pub use value::boolean::{self, parse_bool};
pub use value::r#type::Type;
pub use value::Value;

pub type Result<T> = std::result::Result<T, TypeError>;

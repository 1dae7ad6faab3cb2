// Copyright (c) veldb.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::TypeError;

pub fn parse_bool(text: &str) -> Result<bool, TypeError> {
    let value = text.trim();

    if value.is_empty() {
        return Err(TypeError::EmptyBoolean);
    }

    match value.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        "1" | "1.0" => Ok(true),
        "0" | "0.0" => Ok(false),
        _ => {
            // A digit anywhere means the caller tried a numeric boolean
            if value.chars().any(|c| c.is_ascii_digit()) {
                Err(TypeError::InvalidNumberBoolean(value.to_string()))
            } else {
                Err(TypeError::InvalidBooleanFormat(value.to_string()))
            }
        }
    }
}

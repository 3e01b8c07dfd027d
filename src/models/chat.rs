use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::errors::ChatError;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatResponse {
    pub message: Value,
}

#[derive(Serialize, Debug, Clone)]
pub struct ErrorBody {
    pub error: String,
}

/// Pulls `message` out of a parsed body. A missing key yields `null`.
pub fn extract_message(body: Value) -> Result<Value, ChatError> {
    match body {
        Value::Object(mut fields) => Ok(fields.remove("message").unwrap_or(Value::Null)),
        other => Err(ChatError::NotAnObject(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Log form of an echoed value: bare text for strings, compact JSON otherwise.
pub struct LoggedValue<'a>(pub &'a Value);

impl fmt::Display for LoggedValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

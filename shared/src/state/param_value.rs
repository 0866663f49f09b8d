use crate::{constants::MAX_STRING_BYTES, protocol::parameter::PayloadKind};

/// A typed parameter value, as held in a snapshot or carried in one frame
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Float(f32),
    Int(i32),
    Bool(bool),
    Text(String),
    TextList(Vec<String>),
}

impl ParamValue {
    pub fn kind(&self) -> PayloadKind {
        match self {
            ParamValue::Float(_) => PayloadKind::Float,
            ParamValue::Int(_) => PayloadKind::Int,
            ParamValue::Bool(_) => PayloadKind::Bool,
            ParamValue::Text(_) => PayloadKind::Text,
            ParamValue::TextList(_) => PayloadKind::TextList,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            ParamValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            ParamValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            ParamValue::TextList(values) => Some(values),
            _ => None,
        }
    }
}

/// Truncates to at most [`MAX_STRING_BYTES`] bytes without splitting a
/// character. Oversized strings are shortened, never rejected.
pub fn bounded_string(value: &str) -> String {
    if value.len() <= MAX_STRING_BYTES {
        return value.to_string();
    }
    let mut end = MAX_STRING_BYTES;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    value[..end].to_string()
}

//! Defensive conversion of untrusted OSC arguments into typed values.
//!
//! Every inbound argument passes through exactly one of these functions. Each
//! one names the source representations it accepts and has a single fallback
//! branch. Non-finite numbers default to zero with a warning, on every path.

use log::warn;
use rosc::OscType;

use crate::{
    constants::MAX_STRING_BYTES,
    protocol::{control_rule::ControlRule, parameter::{ParameterId, PayloadKind}},
    state::param_value::{bounded_string, ParamValue},
};

/// Numeric slot as float. Accepts float32, float64, int32 and int64 origins.
pub fn to_f32(arg: &OscType, slot: &str) -> f32 {
    let value = match arg {
        OscType::Float(value) => *value,
        OscType::Double(value) => *value as f32,
        OscType::Int(value) => *value as f32,
        OscType::Long(value) => *value as f32,
        other => {
            warn!(
                "{}: expected float32/float64/int32/int64, got {:?}, using 0.0",
                slot, other
            );
            return 0.0;
        }
    };
    finite_or_zero(value, slot)
}

/// Numeric slot as integer. Floats truncate toward zero; anything outside the
/// i32 range, or non-finite, becomes zero.
pub fn to_i32(arg: &OscType, slot: &str) -> i32 {
    match arg {
        OscType::Int(value) => *value,
        OscType::Long(value) => i32::try_from(*value).unwrap_or_else(|_| {
            warn!("{}: value {} out of int32 range, using 0", slot, value);
            0
        }),
        OscType::Float(value) => float_to_i32(f64::from(*value), slot),
        OscType::Double(value) => float_to_i32(*value, slot),
        other => {
            warn!(
                "{}: expected int32/int64/float32/float64, got {:?}, using 0",
                slot, other
            );
            0
        }
    }
}

/// Flags travel as integers; only exactly 1 means set
pub fn to_bool(arg: &OscType, slot: &str) -> bool {
    match arg {
        OscType::Bool(value) => *value,
        other => to_i32(other, slot) == 1,
    }
}

/// String slot, bounded. Non-string input falls back to `fallback`.
pub fn to_text(arg: &OscType, slot: &str, fallback: &str) -> String {
    match arg {
        OscType::String(value) => {
            if value.len() > MAX_STRING_BYTES {
                warn!(
                    "{}: string of {} bytes exceeds the maximum, truncating",
                    slot,
                    value.len()
                );
            }
            bounded_string(value)
        }
        other => {
            warn!(
                "{}: expected string, got {:?}, using '{}'",
                slot, other, fallback
            );
            fallback.to_string()
        }
    }
}

/// Coerces one argument into the payload kind the registry assigns `id`.
/// Discrete integer choices are clamped into their valid range.
pub fn to_param_value(id: ParameterId, arg: &OscType) -> ParamValue {
    let descriptor = id.descriptor();
    let slot = descriptor.address;
    match descriptor.payload {
        PayloadKind::Float => ParamValue::Float(to_f32(arg, slot)),
        PayloadKind::Bool => ParamValue::Bool(to_bool(arg, slot)),
        PayloadKind::Int => {
            let value = to_i32(arg, slot);
            ParamValue::Int(clamp_choice(descriptor.rule, value))
        }
        PayloadKind::Text => {
            let fallback = descriptor.default.to_value();
            ParamValue::Text(to_text(arg, slot, fallback.as_text().unwrap_or("")))
        }
        PayloadKind::TextList => ParamValue::TextList(to_text_list(std::slice::from_ref(arg), slot)),
    }
}

/// Keeps string tokens (bounded) and drops anything else
pub fn to_text_list(args: &[OscType], slot: &str) -> Vec<String> {
    args.iter()
        .filter_map(|arg| match arg {
            OscType::String(value) => Some(bounded_string(value)),
            other => {
                warn!("{}: dropping non-string token {:?}", slot, other);
                None
            }
        })
        .collect()
}

fn clamp_choice(rule: ControlRule, value: i32) -> i32 {
    match rule.choices() {
        Some(choices) if !choices.is_empty() => {
            let last = i32::try_from(choices.len() - 1).unwrap_or(i32::MAX);
            value.clamp(0, last)
        }
        _ => value,
    }
}

fn finite_or_zero(value: f32, slot: &str) -> f32 {
    if value.is_finite() {
        value
    } else {
        warn!("{}: invalid value {}, using 0.0", slot, value);
        0.0
    }
}

fn float_to_i32(value: f64, slot: &str) -> i32 {
    if value.is_finite() && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX) {
        value.trunc() as i32
    } else {
        warn!("{}: value {} out of int32 range, using 0", slot, value);
        0
    }
}

//! Positional argument extraction for string-dispatched contract calls.

use serde_json::Value;

use crate::errors::DispatchError;

fn arg<'a>(method: &str, args: &'a [Value], index: usize, name: &str) -> Result<&'a Value, DispatchError> {
    args.get(index).ok_or_else(|| {
        DispatchError::invalid_arguments(method, format!("missing argument {index} ({name})"))
    })
}

pub fn string_arg(method: &str, args: &[Value], index: usize, name: &str) -> Result<String, DispatchError> {
    arg(method, args, index, name)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| DispatchError::invalid_arguments(method, format!("{name} must be a string")))
}

/// 2^64 and 2^63 as exact f64 bounds.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Whole-valued floats (`0.0`, `-3.0`) name the same integer as their
/// integer spelling.
fn whole_f64(value: &Value) -> Option<f64> {
    value.as_f64().filter(|f| f.is_finite() && f.fract() == 0.0)
}

fn as_u64(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        whole_f64(value)
            .filter(|f| *f >= 0.0 && *f < U64_LIMIT)
            .map(|f| f as u64)
    })
}

fn as_i64(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        whole_f64(value)
            .filter(|f| *f >= -I64_LIMIT && *f < I64_LIMIT)
            .map(|f| f as i64)
    })
}

pub fn u64_arg(method: &str, args: &[Value], index: usize, name: &str) -> Result<u64, DispatchError> {
    as_u64(arg(method, args, index, name)?).ok_or_else(|| {
        DispatchError::invalid_arguments(method, format!("{name} must be a non-negative integer"))
    })
}

pub fn u32_arg(method: &str, args: &[Value], index: usize, name: &str) -> Result<u32, DispatchError> {
    let raw = u64_arg(method, args, index, name)?;
    u32::try_from(raw).map_err(|_| {
        DispatchError::invalid_arguments(method, format!("{name} out of range: {raw}"))
    })
}

pub fn i64_arg(method: &str, args: &[Value], index: usize, name: &str) -> Result<i64, DispatchError> {
    as_i64(arg(method, args, index, name)?)
        .ok_or_else(|| DispatchError::invalid_arguments(method, format!("{name} must be an integer")))
}

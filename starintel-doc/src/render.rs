//! Canonical string rendering of field values fed to content hashes.
//!
//! Renderings match the ones the existing Python collectors hash, so a
//! document identified here gets the same id as one identified there.

use serde_json::Value;

/// Renders a scalar JSON value as a hash input.
///
/// Returns `None` for arrays and objects, which have no canonical rendering.
pub(crate) fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("True".into()),
        Value::Bool(false) => Some("False".into()),
        Value::Null => Some("None".into()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(render_float)
            }
        }
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Shortest round-trip float text, with `.0` kept on integral values and
/// exponent notation outside `1e-4 <= |x| < 1e16`.
///
/// JSON values are always finite, so NaN and infinities never reach here.
pub(crate) fn render_float(x: f64) -> String {
    let abs = x.abs();
    if abs == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.into();
    }

    if (1e-4..1e16).contains(&abs) {
        let fixed = format!("{x}");
        return if fixed.contains('.') {
            fixed
        } else {
            format!("{fixed}.0")
        };
    }

    // `{:e}` yields e.g. "1e-5" or "1.5e16".
    let sci = format!("{x:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        None => sci,
    }
}

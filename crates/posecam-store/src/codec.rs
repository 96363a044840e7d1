use crate::{StoreError, StoredValue};

const SEPARATOR: char = '|';

const JSON_TAG: &str = "json";
const BOOLEAN_TAG: &str = "boolean";
const NUMBER_TAG: &str = "number";
const STRING_TAG: &str = "string";

/// Serialize a value as `<tag>|<payload>`.
pub fn encode(value: &StoredValue) -> Result<String, StoreError> {
    let (tag, payload) = match value {
        StoredValue::Json(v) => (JSON_TAG, serde_json::to_string(v)?),
        StoredValue::Boolean(b) => (BOOLEAN_TAG, b.to_string()),
        StoredValue::Number(n) => (NUMBER_TAG, format_number(*n)),
        StoredValue::Text(s) => (STRING_TAG, s.clone()),
    };
    Ok(format!("{tag}{SEPARATOR}{payload}"))
}

/// Parse a stored string back into a value.
///
/// The tag runs up to the first `|`. Unknown tags, including `string`,
/// give back the payload as text; a string with no `|` at all comes back
/// whole as text.
pub fn decode(raw: &str) -> Result<StoredValue, StoreError> {
    let Some((tag, payload)) = raw.split_once(SEPARATOR) else {
        return Ok(StoredValue::Text(raw.to_string()));
    };

    match tag {
        JSON_TAG => Ok(StoredValue::Json(serde_json::from_str(payload)?)),
        BOOLEAN_TAG => Ok(StoredValue::Boolean(payload == "true")),
        NUMBER_TAG => parse_number(payload).map(StoredValue::Number),
        _ => Ok(StoredValue::Text(payload.to_string())),
    }
}

/// Integral values print without a fractional part, `42` rather than `42.0`.
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn parse_number(payload: &str) -> Result<f64, StoreError> {
    payload
        .trim()
        .parse::<f64>()
        .map_err(|_| StoreError::Number(payload.to_string()))
}

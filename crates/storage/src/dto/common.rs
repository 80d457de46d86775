use serde_json::Value;

/// Parse an id that may arrive as a JSON number or a numeric string.
///
/// Only strictly positive integers are accepted. Integral floats such as
/// `2.0` or `"1e1"` count as integers; `1.5` does not.
pub fn parse_positive_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(integral))
            .filter(|id| *id > 0),
        Value::String(text) => parse_positive_id_str(text),
        _ => None,
    }
}

/// Same rules as [`parse_positive_id`] for ids taken from a URL path segment
/// or a query string.
pub fn parse_positive_id_str(text: &str) -> Option<i64> {
    let text = text.trim();
    text.parse::<i64>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().and_then(integral))
        .filter(|id| *id > 0)
}

fn integral(value: f64) -> Option<i64> {
    // i64::MAX is not representable as f64; 2^63 is the first value past it
    let in_range = value.is_finite() && value.abs() < 9_223_372_036_854_775_808.0;
    (in_range && value.fract() == 0.0).then_some(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_positive_id(&json!(7)), Some(7));
        assert_eq!(parse_positive_id(&json!("12")), Some(12));
        assert_eq!(parse_positive_id(&json!(" 3 ")), Some(3));
        assert_eq!(parse_positive_id(&json!("+4")), Some(4));
        assert_eq!(parse_positive_id_str("42"), Some(42));
    }

    #[test]
    fn accepts_integral_floats() {
        assert_eq!(parse_positive_id(&json!(2.0)), Some(2));
        assert_eq!(parse_positive_id(&json!("2.0")), Some(2));
        assert_eq!(parse_positive_id(&json!("1e1")), Some(10));
        assert_eq!(parse_positive_id_str("1e3"), Some(1000));
    }

    #[test]
    fn rejects_zero_negative_and_garbage() {
        assert_eq!(parse_positive_id(&json!(0)), None);
        assert_eq!(parse_positive_id(&json!(-4)), None);
        assert_eq!(parse_positive_id(&json!(-2.0)), None);
        assert_eq!(parse_positive_id(&json!(1.5)), None);
        assert_eq!(parse_positive_id(&json!("2.5")), None);
        assert_eq!(parse_positive_id(&json!(1e300)), None);
        assert_eq!(parse_positive_id(&json!("abc")), None);
        assert_eq!(parse_positive_id(&json!("")), None);
        assert_eq!(parse_positive_id(&json!("NaN")), None);
        assert_eq!(parse_positive_id(&json!("inf")), None);
        assert_eq!(parse_positive_id(&json!(null)), None);
        assert_eq!(parse_positive_id(&json!(true)), None);
        assert_eq!(parse_positive_id(&json!([1])), None);
        assert_eq!(parse_positive_id_str("0"), None);
    }
}

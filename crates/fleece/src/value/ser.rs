use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::Value;

/// Integral numbers below this magnitude are written without a fractional part,
/// except negative zero which keeps its sign.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (key, value) in object {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn serialize_number<S: Serializer>(number: f64, serializer: S) -> Result<S::Ok, S::Error> {
    let negative_zero = number == 0.0 && number.is_sign_negative();
    if number.trunc() == number && number.abs() < MAX_EXACT_INTEGER && !negative_zero {
        serializer.serialize_i64(number as i64)
    } else {
        serializer.serialize_f64(number)
    }
}

#[cfg(test)]
mod tests {
    use crate::value::{Map, Value};
    use test_case::test_case;

    #[test_case(Value::Number(1.0), "1"; "integral")]
    #[test_case(Value::Number(-7.0), "-7"; "negative integral")]
    #[test_case(Value::Number(3.3), "3.3"; "fractional")]
    #[test_case(Value::Null, "null"; "null")]
    #[test_case(Value::Bool(false), "false"; "bool")]
    #[test_case(Value::from("a\"b"), r#""a\"b""#; "escaped string")]
    #[test_case(Value::Array(vec![]), "[]"; "empty array")]
    #[test_case(Value::Object(Map::default()), "{}"; "empty object")]
    fn compact(value: Value, expected: &str) {
        assert_eq!(
            serde_json::to_string(&value).expect("Serializable"),
            expected
        );
    }

    #[test_case(1e300; "huge")]
    #[test_case(-1e-300; "tiny")]
    #[test_case(1.5e17; "past exact integers")]
    #[test_case(f64::MAX; "max")]
    fn number_survives_reparse(number: f64) {
        let output = serde_json::to_string(&Value::Number(number)).expect("Serializable");
        let reparsed: Value = serde_json::from_str(&output).expect("Valid JSON");
        assert_eq!(reparsed, Value::Number(number));
    }

    #[test]
    fn negative_zero_keeps_sign() {
        let output = serde_json::to_string(&Value::Number(-0.0)).expect("Serializable");
        assert!(output.starts_with('-'), "{output}");
        let reparsed: Value = serde_json::from_str(&output).expect("Valid JSON");
        let number = reparsed.as_f64().expect("Number");
        assert_eq!(number.to_bits(), (-0.0_f64).to_bits());
        assert_eq!(
            serde_json::to_string(&Value::Number(0.0)).expect("Serializable"),
            "0"
        );
    }

    #[test]
    fn reparse_gives_same_tree() {
        let input = r#"{"a":[1,2.5,"x",true,null],"b":{"c":-0.125}}"#;
        let value: Value = serde_json::from_str(input).expect("Valid JSON");
        let output = serde_json::to_string(&value).expect("Serializable");
        assert_eq!(output, input);
        let reparsed: Value = serde_json::from_str(&output).expect("Valid JSON");
        assert_eq!(reparsed, value);
    }
}

//! JSON parsing that never fails.
//!
//! Values coming from storage, query strings or annotations may be missing
//! or malformed. Callers want "a value or nothing", so failures become
//! `None` with a debug trace.

use flowdeck_core::ResultExt;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a JSON string, returning `None` for empty input, malformed input,
/// or a falsy document (`null`, `false`, `0`, `""`).
///
/// ```
/// use flowdeck_ui::try_json_parse;
/// use serde_json::json;
///
/// assert_eq!(try_json_parse(r#"{"a":1}"#), Some(json!({"a": 1})));
/// assert_eq!(try_json_parse("{oops"), None);
/// assert_eq!(try_json_parse(""), None);
/// ```
#[inline]
#[must_use]
pub fn try_json_parse(input: &str) -> Option<Value> {
    if input.is_empty() {
        return None;
    }
    serde_json::from_str::<Value>(input)
        .into_option_traced("try_json_parse")
        .filter(is_truthy)
}

/// Parse a JSON string into `T`, returning `None` on empty input or any
/// parse or shape mismatch.
#[must_use]
pub fn try_json_parse_as<T: DeserializeOwned>(input: &str) -> Option<T> {
    if input.is_empty() {
        return None;
    }
    serde_json::from_str::<T>(input).into_option_traced("try_json_parse_as")
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_parses_object() {
        assert_eq!(
            try_json_parse(r#"{"namespace":"argo","n":[1,2]}"#),
            Some(json!({"namespace": "argo", "n": [1, 2]}))
        );
    }

    #[test]
    fn test_parses_truthy_scalars() {
        assert_eq!(try_json_parse("true"), Some(json!(true)));
        assert_eq!(try_json_parse("42"), Some(json!(42)));
        assert_eq!(try_json_parse(r#""x""#), Some(json!("x")));
        assert_eq!(try_json_parse("[]"), Some(json!([])));
    }

    #[test]
    fn test_falsy_documents_are_absent() {
        for input in ["null", "false", "0", "0.0", r#""""#] {
            assert_eq!(try_json_parse(input), None, "input {input}");
        }
    }

    #[test]
    fn test_malformed_is_absent() {
        assert_eq!(try_json_parse("{"), None);
        assert_eq!(try_json_parse("undefined"), None);
        assert_eq!(try_json_parse("   "), None);
    }

    #[test]
    fn test_typed_parse() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Filter {
            phases: Vec<String>,
        }

        assert_eq!(
            try_json_parse_as::<Filter>(r#"{"phases":["Running"]}"#),
            Some(Filter {
                phases: vec!["Running".to_string()]
            })
        );
        assert_eq!(try_json_parse_as::<Filter>(r#"{"phases":3}"#), None);
        assert_eq!(try_json_parse_as::<Filter>(""), None);
    }

    #[test]
    fn test_typed_parse_keeps_falsy_values() {
        assert_eq!(try_json_parse_as::<u32>("0"), Some(0));
        assert_eq!(try_json_parse_as::<Option<u32>>("null"), Some(None));
    }
}

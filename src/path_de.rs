use serde::de::DeserializeOwned;
use serde_json::Value;

fn describe<E: std::fmt::Display>(err: serde_path_to_error::Error<E>) -> String {
    let path = err.path().to_string();
    format!("at JSON path {path} → {}", err.into_inner())
}

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, String> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(describe)
}

/// Same as [`from_str_with_path`] for an already parsed document fragment.
pub fn from_value_with_path<T: DeserializeOwned>(value: Value) -> Result<T, String> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(describe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn error_names_the_failing_key() {
        let err = from_str_with_path::<IndexMap<String, Vec<u32>>>(r#"{"a": [1], "b": [2, "x"]}"#).unwrap_err();
        assert!(err.starts_with("at JSON path b[1]"), "{err}");
    }

    #[test]
    fn value_input_keeps_order() {
        let v = serde_json::json!({"z": 1, "a": 2});
        let map = from_value_with_path::<IndexMap<String, u32>>(v).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["z", "a"]);
    }
}

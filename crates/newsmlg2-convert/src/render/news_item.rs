use serde_json::Value;

use crate::error::{ConvertError, Result};
use crate::fields::Concept;
use crate::record::value_to_int;

/// Item version as an integer
///
/// Fails when the value has no integer reading (booleans, fractions,
/// non-numeric text, arrays, objects).
pub fn render_version(version: &Value) -> Result<i64> {
    value_to_int(version).ok_or_else(|| ConvertError::TypeCoercion {
        field: "version".to_string(),
        value: version.to_string(),
    })
}

/// Provider
pub fn render_provider(qcode: Option<String>, name: Option<String>) -> Concept {
    Concept { qcode, name }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_version_coercion() {
        assert_eq!(render_version(&json!("1")).unwrap(), 1);
        assert_eq!(render_version(&json!(12)).unwrap(), 12);
        assert_eq!(render_version(&json!(" 3 ")).unwrap(), 3);
        assert_eq!(render_version(&json!(2.0)).unwrap(), 2);
    }

    #[test]
    fn test_version_coercion_failures() {
        for bad in [json!("v2"), json!(1.5), json!(1e20), json!(true), json!([1])] {
            let err = render_version(&bad).unwrap_err();
            assert!(matches!(err, ConvertError::TypeCoercion { ref field, .. } if field == "version"));
        }
    }

    #[test]
    fn test_provider() {
        let provider = render_provider(Some("nprov:dpa".into()), Some("dpa".into()));
        assert_eq!(provider.name.as_deref(), Some("dpa"));
    }
}

//! Executor output: enrichment fields or a failure marker

use serde_json::{Map, Value};

/// Outcome of one Executor attempt (Value Object)
///
/// The schema is open: attribute names are provider-supplied and unknown in
/// advance. A generation or parse failure is a *value* (`Failed`), distinct
/// from the transport fault channel, so the retry loop can branch on the two
/// without string sniffing. In serialized form `Failed` is the designated
/// error marker `{"error": reason}`.
#[derive(Debug, Clone, PartialEq)]
pub enum EnrichmentResult {
    /// Attribute → string value pairs, in the order the provider emitted them.
    Fields(Vec<(String, String)>),
    /// The model's output could not be parsed as a mapping.
    Failed(String),
}

impl EnrichmentResult {
    pub fn failed(reason: impl Into<String>) -> Self {
        EnrichmentResult::Failed(reason.into())
    }

    /// Build a result from a parsed JSON object, stringifying every value.
    ///
    /// String values are taken verbatim; any other JSON value keeps its JSON
    /// rendering, matching the flat attribute→string contract.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let fields = object
            .iter()
            .map(|(name, value)| {
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (name.clone(), text)
            })
            .collect();
        EnrichmentResult::Fields(fields)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, EnrichmentResult::Failed(_))
    }

    /// The fields of a successful result, `None` for the failure marker.
    pub fn fields(&self) -> Option<&[(String, String)]> {
        match self {
            EnrichmentResult::Fields(fields) => Some(fields),
            EnrichmentResult::Failed(_) => None,
        }
    }

    /// JSON rendering used in validation prompts and the conversation trace.
    pub fn to_json(&self) -> Value {
        match self {
            EnrichmentResult::Fields(fields) => {
                let mut map = Map::new();
                for (name, value) in fields {
                    map.insert(name.clone(), Value::String(value.clone()));
                }
                Value::Object(map)
            }
            EnrichmentResult::Failed(reason) => {
                let mut map = Map::new();
                map.insert("error".to_string(), Value::String(reason.clone()));
                Value::Object(map)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_object_stringifies_values() {
        let Value::Object(object) = json!({"country": "UK", "population": 67, "eu": false})
        else {
            unreachable!()
        };
        let result = EnrichmentResult::from_json_object(&object);
        assert_eq!(
            result.fields().unwrap(),
            [
                ("country".to_string(), "UK".to_string()),
                ("population".to_string(), "67".to_string()),
                ("eu".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_failed_marker_serialization() {
        let result = EnrichmentResult::failed("no JSON found");
        assert!(result.is_failed());
        assert!(result.fields().is_none());
        assert_eq!(result.to_json(), json!({"error": "no JSON found"}));
    }

    #[test]
    fn test_fields_preserve_provider_order() {
        let Value::Object(object) = json!({"z": "1", "a": "2"}) else {
            unreachable!()
        };
        let result = EnrichmentResult::from_json_object(&object);
        let names: Vec<&str> = result
            .fields()
            .unwrap()
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(names, vec!["z", "a"]);
    }
}

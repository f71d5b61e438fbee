use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One match from a `suggest*` endpoint. Concepts, sources, locations and
/// categories all carry a `uri`; everything else is kept as-is.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Suggestion {
    pub uri: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Suggestion {
    /// A human-readable label: `label.eng`, then `label`, then `title`.
    pub fn label(&self) -> Option<&str> {
        match self.extra.get("label") {
            Some(Value::Object(labels)) => labels
                .get("eng")
                .or_else(|| labels.values().next())
                .and_then(Value::as_str),
            Some(Value::String(label)) => Some(label.as_str()),
            _ => self.extra.get("title").and_then(Value::as_str),
        }
    }
}

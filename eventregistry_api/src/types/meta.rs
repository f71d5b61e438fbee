use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of a paged result, e.g. the `events` or `articles` block.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    pub total_results: Option<i64>,
    pub page: Option<i64>,
    pub count: Option<i64>,
    pub pages: Option<i64>,
}

impl<T> Default for ResultPage<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            total_results: None,
            page: None,
            count: None,
            pages: None,
        }
    }
}

/// Body returned by `/login`. A present `error` means the login was refused.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

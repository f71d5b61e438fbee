//! Event records as returned for `getEvents` and `getEvent`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::meta::ResultPage;

/// Top-level body of a `getEvents` response. Only the blocks that were
/// requested are present.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub events: Option<ResultPage<Event>>,
    pub uri_list: Option<ResultPage<String>>,
    pub time_aggr: Option<Value>,
    pub keyword_aggr: Option<Value>,
    pub concept_aggr: Option<Value>,
    pub category_aggr: Option<Value>,
    pub recent_activity: Option<Value>,
}

/// A cluster of articles about the same real-world occurrence.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub uri: String,

    /// Title per language, keyed by language code (`eng`, `deu`, ...).
    #[serde(default)]
    pub title: HashMap<String, String>,

    #[serde(default)]
    pub summary: HashMap<String, String>,

    pub event_date: Option<String>,

    pub total_article_count: Option<i64>,

    /// Article counts per language.
    #[serde(default)]
    pub article_counts: HashMap<String, i64>,

    pub location: Option<LocationInfo>,

    #[serde(default)]
    pub concepts: Vec<Value>,

    #[serde(default)]
    pub categories: Vec<Value>,

    pub wgt: Option<f64>,
}

impl Event {
    /// The title in `lang`, falling back to English and then any language.
    pub fn title_in(&self, lang: &str) -> Option<&str> {
        self.title
            .get(lang)
            .or_else(|| self.title.get("eng"))
            .or_else(|| self.title.values().next())
            .map(String::as_str)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    #[serde(rename = "type")]
    pub location_type: Option<String>,
    #[serde(default)]
    pub label: HashMap<String, String>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

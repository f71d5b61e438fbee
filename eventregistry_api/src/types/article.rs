//! Article records as returned for `getArticles` and `getArticle`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::meta::ResultPage;

/// Top-level body of a `getArticles` response.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesResponse {
    pub articles: Option<ResultPage<Article>>,
    pub uri_list: Option<ResultPage<String>>,
    pub article_ids: Option<ResultPage<Value>>,
    pub time_aggr: Option<Value>,
    pub concept_aggr: Option<Value>,
    pub source_aggr: Option<Value>,
    pub keyword_aggr: Option<Value>,
}

/// A single news article.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub uri: String,

    /// Internal numeric id, sent as a string by the service.
    pub id: Option<String>,

    pub lang: Option<String>,

    pub date: Option<String>,

    pub time: Option<String>,

    pub url: Option<String>,

    pub title: Option<String>,

    pub body: Option<String>,

    pub source: Option<SourceInfo>,

    /// URI of the event this article was clustered into.
    pub event_uri: Option<String>,

    pub is_duplicate: Option<bool>,

    pub sim: Option<f64>,
}

/// The news source that published an article.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    pub uri: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

use crate::params::{ContributesParameters, ParameterMap};
use crate::request::{ResultRequest, Subject};

use super::common::Query;

/// How the articles of an [`ArticleQuery`] are identified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArticleSelector {
    Uri(Vec<String>),
    Id(Vec<String>),
    Url(Vec<String>),
}

impl ArticleSelector {
    fn key(&self) -> &'static str {
        match self {
            ArticleSelector::Uri(_) => "articleUri",
            ArticleSelector::Id(_) => "articleId",
            ArticleSelector::Url(_) => "articleUrl",
        }
    }

    fn values(&self) -> &[String] {
        match self {
            ArticleSelector::Uri(v) | ArticleSelector::Id(v) | ArticleSelector::Url(v) => v,
        }
    }
}

/// Fetches one or more articles by URI, internal id or canonical URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ArticleQuery {
    selector: ArticleSelector,
    requested: Vec<ResultRequest>,
}

impl ArticleQuery {
    pub const ACTION: &'static str = "getArticle";

    pub fn new<I, S>(article_uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_selector(ArticleSelector::Uri(
            article_uris.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn by_id<I>(ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        Self::with_selector(ArticleSelector::Id(
            ids.into_iter().map(|id| id.to_string()).collect(),
        ))
    }

    pub fn by_url<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_selector(ArticleSelector::Url(urls.into_iter().map(Into::into).collect()))
    }

    fn with_selector(selector: ArticleSelector) -> Self {
        Self {
            selector,
            requested: Vec::new(),
        }
    }

    pub fn selector(&self) -> &ArticleSelector {
        &self.selector
    }
}

impl Query for ArticleQuery {
    fn action(&self) -> &'static str {
        Self::ACTION
    }
    fn path(&self) -> &'static str {
        "/json/article"
    }
    fn subject(&self) -> Subject {
        Subject::Article
    }
    fn requested_results(&self) -> &[ResultRequest] {
        &self.requested
    }
    fn requested_results_mut(&mut self) -> &mut Vec<ResultRequest> {
        &mut self.requested
    }
}

impl ContributesParameters for ArticleQuery {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert(self.selector.key(), self.selector.values());
        params.insert("action", Self::ACTION);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_constructors_pick_the_key() {
        let params = ArticleQuery::by_id([42u64]).to_parameter_map();
        assert!(params.contains_key("articleId"));
        assert!(!params.contains_key("articleUri"));

        let params = ArticleQuery::by_url(["https://example.com/a"]).to_parameter_map();
        assert_eq!(
            params.get("articleUrl").and_then(|v| v.as_list()),
            Some(&["https://example.com/a".to_string()][..])
        );
    }
}

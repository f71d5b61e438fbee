use crate::params::{ContributesParameters, ParameterMap};
use crate::request::{ResultRequest, Subject};

use super::common::{Query, SearchFilter, SearchQuery};

/// Searches for articles matching a set of filter criteria.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArticlesQuery {
    pub filter: SearchFilter,
    article_id_list: Option<Vec<String>>,
    requested: Vec<ResultRequest>,
}

impl ArticlesQuery {
    pub const ACTION: &'static str = "getArticles";

    /// Serves exactly these articles. Every filter criterion is ignored.
    pub fn set_article_id_list<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.filter = SearchFilter::default();
        self.article_id_list = Some(ids.into_iter().map(|id| id.to_string()).collect());
    }
}

impl Query for ArticlesQuery {
    fn action(&self) -> &'static str {
        Self::ACTION
    }
    fn path(&self) -> &'static str {
        "/json/article"
    }
    fn subject(&self) -> Subject {
        Subject::Articles
    }
    fn requested_results(&self) -> &[ResultRequest] {
        &self.requested
    }
    fn requested_results_mut(&mut self) -> &mut Vec<ResultRequest> {
        &mut self.requested
    }
}

impl SearchQuery for ArticlesQuery {
    fn filter_mut(&mut self) -> &mut SearchFilter {
        &mut self.filter
    }
}

impl ContributesParameters for ArticlesQuery {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("action", Self::ACTION);
        if let Some(ids) = &self.article_id_list {
            params.insert("articleIdList", ids.join(","));
            return params;
        }
        self.filter.write_to(&mut params);
        params
    }
}

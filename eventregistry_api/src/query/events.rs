use crate::params::{ContributesParameters, ParameterMap};
use crate::request::{ResultRequest, Subject};

use super::common::{Query, SearchFilter, SearchQuery};

/// Searches for events matching a set of filter criteria.
///
/// ```
/// use eventregistry_api::{EventsQuery, Query, RequestEventsInfo, SearchQuery};
///
/// let mut query = EventsQuery::default().with_keywords("obama");
/// query.set_date_limit("2014-05-02", "2014-05-10").unwrap();
/// query.add_requested_result(RequestEventsInfo::default()).unwrap();
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventsQuery {
    pub filter: SearchFilter,
    pub min_articles_in_event: Option<u32>,
    pub max_articles_in_event: Option<u32>,
    event_uri_list: Option<Vec<String>>,
    requested: Vec<ResultRequest>,
}

impl EventsQuery {
    pub const ACTION: &'static str = "getEvents";

    /// Serves exactly these events. Every filter criterion set before or
    /// after this call is ignored.
    pub fn set_event_uri_list<I, S>(&mut self, uris: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = SearchFilter::default();
        self.min_articles_in_event = None;
        self.max_articles_in_event = None;
        self.event_uri_list = Some(uris.into_iter().map(Into::into).collect());
    }

    pub fn with_min_articles_in_event(mut self, count: u32) -> Self {
        self.min_articles_in_event = Some(count);
        self
    }

    pub fn with_max_articles_in_event(mut self, count: u32) -> Self {
        self.max_articles_in_event = Some(count);
        self
    }
}

impl Query for EventsQuery {
    fn action(&self) -> &'static str {
        Self::ACTION
    }
    fn path(&self) -> &'static str {
        "/json/event"
    }
    fn subject(&self) -> Subject {
        Subject::Events
    }
    fn requested_results(&self) -> &[ResultRequest] {
        &self.requested
    }
    fn requested_results_mut(&mut self) -> &mut Vec<ResultRequest> {
        &mut self.requested
    }
}

impl SearchQuery for EventsQuery {
    fn filter_mut(&mut self) -> &mut SearchFilter {
        &mut self.filter
    }
}

impl ContributesParameters for EventsQuery {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("action", Self::ACTION);
        if let Some(uris) = &self.event_uri_list {
            params.insert("eventUriList", uris.join(","));
            return params;
        }
        self.filter.write_to(&mut params);
        if let Some(min) = self.min_articles_in_event {
            params.insert("minArticlesInEvent", min);
        }
        if let Some(max) = self.max_articles_in_event {
            params.insert("maxArticlesInEvent", max);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ContractViolation;
    use crate::request::RequestArticlesInfo;

    #[test]
    fn add_keyword_joins_with_space() {
        let mut query = EventsQuery::default();
        query.add_keyword("barack");
        query.add_keyword("obama");
        assert_eq!(
            query.to_parameter_map().get("keywords").and_then(|v| v.as_str()),
            Some("barack obama")
        );
    }

    #[test]
    fn rejects_articles_requests() {
        let mut query = EventsQuery::default();
        let err = query
            .add_requested_result(RequestArticlesInfo::default())
            .unwrap_err();
        assert_eq!(
            err,
            ContractViolation::FamilyMismatch {
                action: "getEvents",
                expected: Subject::Events,
                found: Subject::Articles,
            }
        );
        assert!(query.requested_results().is_empty());
    }

    #[test]
    fn article_count_bounds_are_written() {
        let params = EventsQuery::default()
            .with_min_articles_in_event(10)
            .with_max_articles_in_event(50)
            .to_parameter_map();
        assert_eq!(params.get("minArticlesInEvent").and_then(|v| v.as_int()), Some(10));
        assert_eq!(params.get("maxArticlesInEvent").and_then(|v| v.as_int()), Some(50));
    }
}

use eventregistry_api::{
    encode_query, flatten, ArticleFlags, ArticleQuery, ArticlesQuery, ContractViolation,
    Credentials, EventFlags, EventQuery, EventsQuery, ParamValue, Query, RequestArticleInfo,
    RequestArticlesConceptAggr, RequestArticlesInfo, RequestArticlesKeywordAggr,
    RequestEventArticles, RequestEventInfo, RequestEventsConceptGraph, RequestEventsInfo,
    RequestEventsTimeAggr, SearchQuery, Subject,
};

fn result_types(params: &eventregistry_api::ParameterMap) -> Vec<String> {
    params
        .get("resultType")
        .and_then(|v| v.as_list())
        .map(|l| l.to_vec())
        .unwrap_or_default()
}

#[test]
fn events_search_flattens_to_minimal_params() {
    let mut query = EventsQuery::default().with_keywords("obama");
    query.set_date_limit("2014-05-02", "2014-05-10").unwrap();
    query
        .add_requested_result(RequestEventsInfo::default())
        .unwrap();

    let params = flatten(&query).unwrap();
    assert_eq!(params.get("action").and_then(|v| v.as_str()), Some("getEvents"));
    assert_eq!(params.get("keywords").and_then(|v| v.as_str()), Some("obama"));
    assert_eq!(params.get("dateStart").and_then(|v| v.as_str()), Some("2014-05-02"));
    assert_eq!(params.get("dateEnd").and_then(|v| v.as_str()), Some("2014-05-10"));
    assert_eq!(result_types(&params), vec!["events"]);
    assert_eq!(params.get("eventsPage"), Some(&ParamValue::Int(0)));
    assert_eq!(params.get("eventsCount"), Some(&ParamValue::Int(20)));
    assert!(params.keys().all(|k| !k.starts_with("eventsIncludeEvent")));
}

#[test]
fn event_uri_list_replaces_filters() {
    let mut query = EventsQuery::default().with_keywords("obama");
    query.add_concept("http://en.wikipedia.org/wiki/Barack_Obama");
    query.set_date_limit("2014-05-02", None::<&str>).unwrap();
    query.set_event_uri_list(["u1", "u2"]);

    let params = eventregistry_api::ContributesParameters::to_parameter_map(&query);
    insta::assert_snapshot!(params.to_query_string(), @"action=getEvents&eventUriList=u1%2Cu2");
}

#[test]
fn result_types_follow_attachment_order() {
    let query = EventsQuery::default()
        .with_requested_result(RequestEventsTimeAggr)
        .unwrap()
        .with_requested_result(RequestEventsInfo::default())
        .unwrap()
        .with_requested_result(RequestEventsConceptGraph::default())
        .unwrap();

    let params = flatten(&query).unwrap();
    assert_eq!(result_types(&params), vec!["timeAggr", "events", "conceptGraph"]);
}

#[test]
fn mismatched_family_is_rejected() {
    let mut articles = ArticlesQuery::default();
    let err = articles
        .add_requested_result(RequestEventsInfo::default())
        .unwrap_err();
    assert!(matches!(
        err,
        ContractViolation::FamilyMismatch {
            expected: Subject::Articles,
            found: Subject::Events,
            ..
        }
    ));

    let mut article = ArticleQuery::new(["art-1"]);
    assert!(article
        .add_requested_result(RequestArticlesInfo::default())
        .is_err());
    assert!(article
        .add_requested_result(RequestArticleInfo::default())
        .is_ok());
    assert_eq!(article.requested_results().len(), 1);
}

#[test]
fn later_requests_overwrite_shared_keys() {
    let query = ArticlesQuery::default()
        .with_requested_result(RequestArticlesConceptAggr::default())
        .unwrap()
        .with_requested_result(
            RequestArticlesConceptAggr::default()
                .with_sample_size(5000)
                .unwrap(),
        )
        .unwrap();
    let params = flatten(&query).unwrap();
    assert_eq!(params.get("conceptAggrSampleSize"), Some(&ParamValue::Int(5000)));
    assert_eq!(result_types(&params), vec!["conceptAggr", "conceptAggr"]);
}

#[test]
fn date_string_round_trips() {
    let mut query = ArticlesQuery::default();
    query.set_date_limit("2014-05-02", None::<&str>).unwrap();
    query
        .add_requested_result(RequestArticlesKeywordAggr::default())
        .unwrap();
    let params = flatten(&query).unwrap();
    assert_eq!(params.get("dateStart").and_then(|v| v.as_str()), Some("2014-05-02"));
    assert!(!params.contains_key("dateEnd"));
}

#[test]
fn date_values_are_formatted() {
    let mut query = EventsQuery::default();
    let start = chrono::NaiveDate::from_ymd_opt(2014, 5, 2).unwrap();
    let end = chrono::NaiveDate::from_ymd_opt(2014, 5, 10)
        .unwrap()
        .and_hms_opt(23, 59, 0)
        .unwrap();
    query.set_date_limit(start, end).unwrap();
    assert_eq!(query.filter.date_start.as_deref(), Some("2014-05-02"));
    assert_eq!(query.filter.date_end.as_deref(), Some("2014-05-10"));
}

#[test]
fn credentials_are_appended_last() {
    let query = EventQuery::new(["eng-2940883"])
        .with_requested_result(RequestEventInfo::default())
        .unwrap();
    let creds = Credentials::new("me@example.com", "secret");
    let request = encode_query(&query, Some(&creds)).unwrap();

    assert_eq!(request.path, "/json/event");
    let keys: Vec<_> = request.params.keys().collect();
    assert_eq!(&keys[keys.len() - 2..], &["erUsername", "erPassword"]);

    let anonymous = encode_query(&query, None).unwrap();
    assert!(!anonymous.params.contains_key("erUsername"));
}

#[test]
fn encoded_event_query() {
    let query = EventQuery::new(["eng-2940883"])
        .with_requested_result(
            RequestEventArticles::default()
                .with_count(10)
                .unwrap()
                .with_article_flags(ArticleFlags {
                    concepts: true,
                    ..Default::default()
                }),
        )
        .unwrap();
    let request = encode_query(&query, None).unwrap();
    insta::assert_snapshot!(
        request.query_string(),
        @"action=getEvent&eventUri=eng-2940883&articlesLang=eng&articlesLang=deu&articlesLang=zho&articlesLang=slv&articlesLang=spa&articlesPage=0&articlesCount=10&articlesSortBy=cosSim&articlesSortByAsc=False&articlesBodyLen=200&articlesConceptLang=eng&articlesConceptType=person&articlesConceptType=org&articlesConceptType=loc&articlesConceptType=wiki&articlesIncludeArticleConcepts=True&resultType=articles"
    );
}

#[test]
fn empty_query_cannot_be_encoded() {
    let query = EventsQuery::default();
    let err = encode_query(&query, None).unwrap_err();
    assert!(matches!(
        err,
        eventregistry_api::Error::Contract(ContractViolation::NoResultRequested)
    ));
}

#[test]
fn flags_only_written_when_changed() {
    let info = RequestEventInfo::default().with_event_flags(EventFlags {
        stories: true,
        concepts: false,
        ..Default::default()
    });
    let params = eventregistry_api::ContributesParameters::to_parameter_map(&info);
    assert_eq!(params.get("infoIncludeEventStories"), Some(&ParamValue::Bool(true)));
    assert_eq!(params.get("infoIncludeEventConcepts"), Some(&ParamValue::Bool(false)));
    assert!(!params.contains_key("infoIncludeEventLocation"));
}

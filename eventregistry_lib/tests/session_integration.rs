use std::time::Duration;

use eventregistry_lib::types::EventsResponse;
use eventregistry_lib::{
    eventregistry_api::{Error, RequestEventsInfo},
    ConceptSuggest, EventRegistry, EventRegistryError, EventsQuery, LocationSuggest, Query,
    RecentArticles, RecentEvents, RetryPolicy, SearchQuery, Settings,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> Settings {
    Settings {
        host: server.uri(),
        min_delay: Duration::ZERO,
        retry: RetryPolicy::never(),
        ..Default::default()
    }
}

fn events_body() -> serde_json::Value {
    json!({
        "events": {
            "results": [{"uri": "eng-1", "title": {"eng": "Obama\u{0007} in Ljubljana"}}],
            "totalResults": 1,
            "page": 1,
            "count": 20,
            "pages": 1
        }
    })
}

fn events_query() -> EventsQuery {
    EventsQuery::default()
        .with_keywords("obama")
        .with_requested_result(RequestEventsInfo::default())
        .unwrap()
}

async fn mount_login(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_string_contains("email=me%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn exec_query_decodes_and_cleans_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/event"))
        .and(query_param("action", "getEvents"))
        .and(query_param("keywords", "obama"))
        .respond_with(ResponseTemplate::new(200).set_body_json(events_body()))
        .expect(1)
        .mount(&server)
        .await;

    let session = EventRegistry::new(&settings(&server)).unwrap();
    let resp: EventsResponse = session.exec_query(&events_query()).await.unwrap();
    let events = resp.events.unwrap();
    assert_eq!(events.total_results, Some(1));
    assert_eq!(events.results[0].title_in("eng"), Some("Obama in Ljubljana"));
    assert!(session.last_error().is_none());
}

#[tokio::test]
async fn credentials_follow_login() {
    let server = MockServer::start().await;
    mount_login(&server, json!({"action": "successfulLogin"})).await;
    Mock::given(method("GET"))
        .and(path("/json/event"))
        .and(query_param("erUsername", "me@example.com"))
        .and(query_param("erPassword", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(events_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = EventRegistry::new(&settings(&server)).unwrap();
    session
        .login("me@example.com", "secret", true)
        .await
        .unwrap();
    assert!(session.is_logged_in());
    let resp: EventsResponse = session.exec_query(&events_query()).await.unwrap();
    assert!(resp.events.is_some());
}

#[tokio::test]
async fn strict_login_reports_refusal() {
    let server = MockServer::start().await;
    mount_login(&server, json!({"error": "Invalid email or password"})).await;

    let mut session = EventRegistry::new(&settings(&server)).unwrap();
    let err = session
        .login("me@example.com", "wrong", true)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EventRegistryError::Api(Error::Authentication(ref msg)) if msg == "Invalid email or password"
    ));

    session.login("me@example.com", "wrong", false).await.unwrap();
    assert_eq!(
        session.last_error().as_deref(),
        Some("Invalid email or password")
    );
}

#[tokio::test]
async fn refused_login_keeps_credentials_off_the_wire() {
    let server = MockServer::start().await;
    mount_login(&server, json!({"error": "Invalid email or password"})).await;
    Mock::given(method("GET"))
        .and(path("/json/overview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalArticles": 10})))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = EventRegistry::new(&settings(&server)).unwrap();
    assert!(session.login("me@example.com", "wrong", true).await.is_err());
    assert!(!session.is_logged_in());
    session.login("me@example.com", "wrong", false).await.unwrap();
    assert!(!session.is_logged_in());

    session.get_recent_stats().await.unwrap();
    let requests = server.received_requests().await.unwrap();
    let overview = requests
        .iter()
        .find(|r| r.url.path() == "/json/overview")
        .unwrap();
    assert!(!overview.url.query_pairs().any(|(k, _)| k == "erUsername" || k == "erPassword"));
}

#[tokio::test]
async fn connect_logs_in_with_settings_credentials() {
    let server = MockServer::start().await;
    mount_login(&server, json!({})).await;

    let settings = Settings {
        username: Some("me@example.com".to_string()),
        password: Some("secret".to_string()),
        ..settings(&server)
    };
    let session = EventRegistry::connect(&settings).await.unwrap();
    assert!(session.is_logged_in());
}

#[tokio::test]
async fn failure_sets_last_error_until_next_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/overview"))
        .and(query_param("action", "getRecentStats"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/json/overview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalArticles": 10})))
        .mount(&server)
        .await;

    let session = EventRegistry::new(&settings(&server)).unwrap();
    let err = session.get_recent_stats().await.unwrap_err();
    assert!(matches!(
        err,
        EventRegistryError::Api(Error::HttpStatus { status: 404, .. })
    ));
    assert!(session.last_error().unwrap().contains("404"));

    let stats = session.get_recent_stats().await.unwrap();
    assert_eq!(stats["totalArticles"], 10);
    assert!(session.last_error().is_none());
}

#[tokio::test]
async fn server_errors_are_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/event"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/json/event"))
        .respond_with(ResponseTemplate::new(200).set_body_json(events_body()))
        .mount(&server)
        .await;

    let settings = Settings {
        retry: RetryPolicy::limited(3, Duration::from_millis(10)),
        ..settings(&server)
    };
    let session = EventRegistry::new(&settings).unwrap();
    let resp: EventsResponse = session.exec_query(&events_query()).await.unwrap();
    assert!(resp.events.is_some());
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn retries_stop_at_the_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let settings = Settings {
        retry: RetryPolicy::limited(2, Duration::from_millis(10)),
        ..settings(&server)
    };
    let session = EventRegistry::new(&settings).unwrap();
    let result: Result<EventsResponse, _> = session.exec_query(&events_query()).await;
    assert!(result.is_err());
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .mount(&server)
        .await;

    let settings = Settings {
        retry: RetryPolicy::limited(5, Duration::from_millis(10)),
        ..settings(&server)
    };
    let session = EventRegistry::new(&settings).unwrap();
    let result: Result<EventsResponse, _> = session.exec_query(&events_query()).await;
    assert!(result.is_err());
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn empty_query_fails_before_sending() {
    let server = MockServer::start().await;
    let session = EventRegistry::new(&settings(&server)).unwrap();
    let result: Result<EventsResponse, _> = session.exec_query(&EventsQuery::default()).await;
    let err = result.unwrap_err();
    assert!(err.as_contract_violation().is_some());
    assert!(session.last_error().is_some());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn concept_lookup_returns_first_uri() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/suggestConcepts"))
        .and(query_param("prefix", "Obama"))
        .and(query_param("source", "person"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"uri": "http://en.wikipedia.org/wiki/Barack_Obama", "label": {"eng": "Barack Obama"}},
            {"uri": "http://en.wikipedia.org/wiki/Michelle_Obama", "label": {"eng": "Michelle Obama"}}
        ])))
        .mount(&server)
        .await;

    let session = EventRegistry::new(&settings(&server)).unwrap();
    let uri = session
        .get_concept_uri("Obama", "eng", &["person"])
        .await
        .unwrap();
    assert_eq!(uri.as_deref(), Some("http://en.wikipedia.org/wiki/Barack_Obama"));

    let suggestions = session
        .suggest_concepts(&ConceptSuggest {
            sources: vec!["person".to_string()],
            ..ConceptSuggest::new("Obama")
        })
        .await
        .unwrap();
    assert_eq!(suggestions[1].label(), Some("Michelle Obama"));
}

#[tokio::test]
async fn location_lookup_uses_full_location_info() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/suggestConcepts"))
        .and(query_param("source", "loc"))
        .and(query_param("fullLocInfo", "True"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/json/suggestLocations"))
        .and(query_param("source", "city"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"uri": "http://en.wikipedia.org/wiki/Ljubljana", "label": {"eng": "Ljubljana"}}
        ])))
        .mount(&server)
        .await;

    let session = EventRegistry::new(&settings(&server)).unwrap();
    assert_eq!(session.get_location_uri("Nowhere", "eng").await.unwrap(), None);
    let found = session
        .suggest_locations(&LocationSuggest::new("Lju"))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn recent_activity_uses_overview() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/overview"))
        .and(query_param("action", "getRecentActivity"))
        .and(query_param("addEvents", "True"))
        .and(query_param("recentActivityEventsLastActivityId", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recentActivity": {"events": {"activity": [], "lastActivityId": 43}}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/json/overview"))
        .and(query_param("addArticles", "True"))
        .and(query_param("recentActivityArticlesMaxArticleCount", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recentActivity": {"articles": {"activity": [], "lastActivityId": 7}}
        })))
        .mount(&server)
        .await;

    let session = EventRegistry::new(&settings(&server)).unwrap();
    let mut recent = RecentEvents::default();
    recent.last_activity_id = 42;
    let events = session
        .get_recent_events(&recent)
        .await
        .unwrap();
    assert_eq!(events["recentActivity"]["events"]["lastActivityId"], 43);

    let articles = session
        .get_recent_articles(&RecentArticles::default().with_max_article_count(100).unwrap())
        .await
        .unwrap();
    assert_eq!(articles["recentActivity"]["articles"]["lastActivityId"], 7);
}

#[tokio::test]
async fn post_request_carries_credentials_in_body() {
    let server = MockServer::start().await;
    mount_login(&server, json!({})).await;
    Mock::given(method("POST"))
        .and(path("/json/article"))
        .and(body_string_contains("erUsername=me%40example.com"))
        .and(body_string_contains("action=getArticles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = EventRegistry::new(&settings(&server)).unwrap();
    session.login("me@example.com", "secret", false).await.unwrap();
    let mut params = eventregistry_lib::ParameterMap::new();
    params.insert("action", "getArticles");
    let resp = session.json_post_request("/json/article", &params).await.unwrap();
    assert_eq!(resp["ok"], true);
}

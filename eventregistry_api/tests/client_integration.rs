use eventregistry_api::types::{EventsResponse, LoginResponse};
use eventregistry_api::{
    encode_query, Client, Credentials, Error, EventsQuery, ParameterMap, Query,
    RequestEventsInfo, SearchQuery,
};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn execute_events_query_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/event"))
        .and(query_param("action", "getEvents"))
        .and(query_param("keywords", "obama"))
        .and(query_param("resultType", "events"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("events.json")))
        .mount(&mock_server)
        .await;

    let query = EventsQuery::default()
        .with_keywords("obama")
        .with_requested_result(RequestEventsInfo::default())
        .unwrap();
    let request = encode_query(&query, None).unwrap();

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let resp: EventsResponse = client.execute(&request).await.unwrap();
    assert_eq!(resp.events.unwrap().results.len(), 2);
}

#[tokio::test]
async fn server_error_is_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/event"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result: Result<serde_json::Value, Error> =
        client.get_json("/json/event", &ParameterMap::new()).await;
    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_json_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/article"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result: Result<serde_json::Value, Error> =
        client.get_json("/json/article", &ParameterMap::new()).await;
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[tokio::test]
async fn post_json_sends_form_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/json/article"))
        .and(body_string_contains("action=getArticles"))
        .and(body_string_contains("lang=eng&lang=deu"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\": true}"))
        .mount(&mock_server)
        .await;

    let mut params = ParameterMap::new();
    params.insert("action", "getArticles");
    params.insert("lang", vec!["eng".to_string(), "deu".to_string()]);

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let resp: serde_json::Value = client.post_json("/json/article", &params).await.unwrap();
    assert_eq!(resp["ok"], true);
}

#[tokio::test]
async fn login_keeps_session_cookie() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_string_contains("email=me%40example.com"))
        .and(body_string_contains("pass=secret"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=abc123; Path=/")
                .set_body_string("{\"action\": \"success\"}"),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/json/overview"))
        .and(wiremock::matchers::header("cookie", "session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"stats\": {}}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let login: LoginResponse = client
        .login(&Credentials::new("me@example.com", "secret"))
        .await
        .unwrap();
    assert!(login.error.is_none());

    let resp: serde_json::Value = client
        .get_json("/json/overview", &ParameterMap::new())
        .await
        .unwrap();
    assert!(resp.get("stats").is_some());
}

#[tokio::test]
async fn login_error_field_is_returned() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("{\"error\": \"Invalid email or password\"}"),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let login = client
        .login(&Credentials::new("me@example.com", "wrong"))
        .await
        .unwrap();
    assert_eq!(login.error.as_deref(), Some("Invalid email or password"));
}

use eventregistry_api::types::{ArticlesResponse, EventsResponse, Suggestion};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_events_full() {
    let json = load_fixture("events.json");
    let resp: EventsResponse = serde_json::from_str(&json).unwrap();
    let page = resp.events.unwrap();
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.total_results, Some(57));
    assert_eq!(page.pages, Some(3));

    let event = &page.results[0];
    assert_eq!(event.uri, "eng-2940883");
    assert_eq!(event.title_in("slv"), Some("Obama obiskal Ljubljano"));
    assert_eq!(event.total_article_count, Some(182));
    assert_eq!(event.article_counts.get("eng"), Some(&120));
    let location = event.location.as_ref().unwrap();
    assert_eq!(location.location_type.as_deref(), Some("place"));
    assert_eq!(location.lat, Some(46.05));
}

#[test]
fn event_title_falls_back_to_any_language() {
    let json = load_fixture("events.json");
    let resp: EventsResponse = serde_json::from_str(&json).unwrap();
    let event = &resp.events.unwrap().results[1];
    assert_eq!(event.title_in("eng"), Some("Gipfeltreffen in Berlin"));
    assert!(event.location.is_none());
    assert!(event.concepts.is_empty());
}

#[test]
fn deserialize_articles_full() {
    let json = load_fixture("articles.json");
    let resp: ArticlesResponse = serde_json::from_str(&json).unwrap();
    let page = resp.articles.unwrap();
    assert_eq!(page.results.len(), 1);

    let article = &page.results[0];
    assert_eq!(article.uri, "204771385");
    assert_eq!(article.lang.as_deref(), Some("eng"));
    assert_eq!(article.event_uri.as_deref(), Some("eng-2940883"));
    assert_eq!(article.is_duplicate, Some(false));
    assert_eq!(
        article.source.as_ref().and_then(|s| s.title.as_deref()),
        Some("BBC")
    );
}

#[test]
fn missing_blocks_are_none() {
    let resp: EventsResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.events.is_none());
    assert!(resp.time_aggr.is_none());
}

#[test]
fn suggestion_labels() {
    let concepts: Vec<Suggestion> =
        serde_json::from_str(&load_fixture("suggest_concepts.json")).unwrap();
    assert_eq!(concepts[0].label(), Some("Barack Obama"));
    assert_eq!(
        concepts[0].uri.as_deref(),
        Some("http://en.wikipedia.org/wiki/Barack_Obama")
    );

    let sources: Vec<Suggestion> =
        serde_json::from_str(&load_fixture("suggest_sources.json")).unwrap();
    assert_eq!(sources[0].label(), Some("BBC"));
}

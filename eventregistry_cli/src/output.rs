use eventregistry_lib::types::{Article, Event, Suggestion};
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "URI")]
    uri: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Articles")]
    articles: i64,
    #[tabled(rename = "Location")]
    location: String,
}

#[derive(Tabled)]
struct ArticleRow {
    #[tabled(rename = "URI")]
    uri: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Lang")]
    lang: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Title")]
    title: String,
}

#[derive(Tabled)]
struct SuggestionRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "URI")]
    uri: String,
}

// -- Row builders --

fn build_event_rows(events: &[Event]) -> Vec<EventRow> {
    events
        .iter()
        .map(|e| EventRow {
            uri: e.uri.clone(),
            date: e.event_date.clone().unwrap_or_default(),
            title: truncate(e.title_in("eng").unwrap_or_default(), 70),
            articles: e.total_article_count.unwrap_or(0),
            location: e
                .location
                .as_ref()
                .and_then(|l| l.label.get("eng").cloned())
                .unwrap_or_default(),
        })
        .collect()
}

fn build_article_rows(articles: &[Article]) -> Vec<ArticleRow> {
    articles
        .iter()
        .map(|a| ArticleRow {
            uri: a.uri.clone(),
            date: a.date.clone().unwrap_or_default(),
            lang: a.lang.clone().unwrap_or_default(),
            source: a
                .source
                .as_ref()
                .and_then(|s| s.title.clone())
                .unwrap_or_default(),
            title: truncate(a.title.as_deref().unwrap_or_default(), 70),
        })
        .collect()
}

fn build_suggestion_rows(suggestions: &[Suggestion]) -> Vec<SuggestionRow> {
    suggestions
        .iter()
        .map(|s| SuggestionRow {
            label: s.label().unwrap_or_default().to_string(),
            uri: s.uri.clone().unwrap_or_default(),
        })
        .collect()
}

// -- Table output --

pub fn print_events_table(events: &[Event]) {
    println!("{}", Table::new(build_event_rows(events)));
}

pub fn print_articles_table(articles: &[Article]) {
    println!("{}", Table::new(build_article_rows(articles)));
}

pub fn print_suggestions_table(suggestions: &[Suggestion]) {
    println!("{}", Table::new(build_suggestion_rows(suggestions)));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

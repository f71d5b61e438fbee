use anyhow::Result;
use clap::Args;
use eventregistry_lib::request::{RequestEventArticles, RequestEventInfo};
use eventregistry_lib::types::{Article, Event};
use eventregistry_lib::{EventQuery, EventRegistry, Query};
use serde_json::Value;

use crate::output::{print_articles_table, print_events_table, print_json, OutputFormat};

#[derive(Args)]
pub struct EventArgs {
    /// Event URIs, e.g. eng-2940883
    #[arg(required = true)]
    pub uris: Vec<String>,

    /// List the event's articles instead of its details
    #[arg(long)]
    pub articles: bool,

    /// Articles per event (max 200)
    #[arg(long, default_value = "20")]
    pub count: u32,

    /// Article language (repeatable)
    #[arg(long)]
    pub lang: Vec<String>,
}

pub async fn run(args: &EventArgs, session: &EventRegistry, format: &OutputFormat) -> Result<()> {
    let mut query = EventQuery::new(args.uris.iter().cloned());
    if args.articles {
        let mut request = RequestEventArticles::default().with_count(args.count)?;
        if !args.lang.is_empty() {
            request = request.with_lang(args.lang.iter().cloned());
        }
        query.add_requested_result(request)?;
    } else {
        query.add_requested_result(RequestEventInfo::default())?;
    }

    // Keyed by event URI.
    let resp: Value = session.exec_query(&query).await?;

    match format {
        OutputFormat::Json => print_json(&resp),
        OutputFormat::Table if args.articles => {
            print_articles_table(&collect::<Article>(&resp, &args.uris, "/articles/results")?)
        }
        OutputFormat::Table => print_events_table(&collect::<Event>(&resp, &args.uris, "/info")?),
    }

    Ok(())
}

/// Gathers the records at `pointer` under each requested URI. URIs the
/// service did not return are reported and skipped.
fn collect<T: serde::de::DeserializeOwned>(
    resp: &Value,
    uris: &[String],
    pointer: &str,
) -> Result<Vec<T>> {
    let mut out = Vec::new();
    for uri in uris {
        let Some(found) = resp.get(uri).and_then(|entry| entry.pointer(pointer)) else {
            eprintln!("Event {} not found", uri);
            continue;
        };
        match found {
            Value::Array(items) => {
                for item in items {
                    out.push(serde_json::from_value(item.clone())?);
                }
            }
            other => out.push(serde_json::from_value(other.clone())?),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collect_reads_info_per_uri() {
        let resp = json!({
            "eng-1": {"info": {"uri": "eng-1", "title": {"eng": "One"}}},
            "eng-2": {"error": "Event not found"}
        });
        let uris = vec!["eng-1".to_string(), "eng-2".to_string()];
        let events: Vec<Event> = collect(&resp, &uris, "/info").unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].uri, "eng-1");
    }

    #[test]
    fn collect_flattens_article_lists() {
        let resp = json!({
            "eng-1": {"articles": {"results": [{"uri": "a1"}, {"uri": "a2"}]}}
        });
        let articles: Vec<Article> =
            collect(&resp, &["eng-1".to_string()], "/articles/results").unwrap();
        assert_eq!(articles.len(), 2);
    }
}

use anyhow::Result;
use clap::{Args, ValueEnum};
use eventregistry_lib::types::{Article, Event};
use eventregistry_lib::{EventRegistry, RecentArticles, RecentEvents};
use serde_json::Value;

use crate::output::{print_articles_table, print_events_table, print_json, OutputFormat};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RecentKind {
    Events,
    Articles,
}

#[derive(Args)]
pub struct RecentArgs {
    #[arg(value_enum)]
    pub kind: RecentKind,

    /// Return only activity newer than this id (from a previous call)
    #[arg(long, default_value = "0")]
    pub last_activity_id: i64,

    /// Maximum number of items (max 1000)
    #[arg(long, default_value = "60")]
    pub max_count: u32,

    /// How far back to look, in minutes
    #[arg(long, default_value = "600")]
    pub mins_back: u32,

    /// Only events with an article in this language
    #[arg(long)]
    pub lang: Option<String>,
}

pub async fn run(args: &RecentArgs, session: &EventRegistry, format: &OutputFormat) -> Result<()> {
    let resp = match args.kind {
        RecentKind::Events => {
            let mut params = RecentEvents::default().with_max_event_count(args.max_count)?;
            params.max_mins_back = args.mins_back;
            params.last_activity_id = args.last_activity_id;
            params.mandatory_lang = args.lang.clone();
            session.get_recent_events(&params).await?
        }
        RecentKind::Articles => {
            let mut params = RecentArticles::default().with_max_article_count(args.max_count)?;
            params.max_mins_back = args.mins_back;
            params.last_activity_id = args.last_activity_id;
            session.get_recent_articles(&params).await?
        }
    };

    let block = match args.kind {
        RecentKind::Events => "events",
        RecentKind::Articles => "articles",
    };
    let activity = resp
        .pointer(&format!("/recentActivity/{}", block))
        .cloned()
        .unwrap_or(Value::Null);

    match format {
        OutputFormat::Json => print_json(&activity),
        OutputFormat::Table => {
            if let Some(id) = activity.get("lastActivityId") {
                eprintln!("Last activity id: {}", id);
            }
            let items = activity
                .get("activity")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            match args.kind {
                RecentKind::Events => {
                    let events: Vec<Event> = parse_items(items);
                    print_events_table(&events);
                }
                RecentKind::Articles => {
                    let articles: Vec<Article> = parse_items(items);
                    print_articles_table(&articles);
                }
            }
        }
    }

    Ok(())
}

/// Items that fail to parse are skipped.
fn parse_items<T: serde::de::DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

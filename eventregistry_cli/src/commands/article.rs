use anyhow::{bail, Result};
use clap::Args;
use eventregistry_lib::request::RequestArticleInfo;
use eventregistry_lib::types::Article;
use eventregistry_lib::{ArticleQuery, EventRegistry, Query};
use serde_json::Value;

use crate::output::{print_articles_table, print_json, OutputFormat};

#[derive(Args)]
pub struct ArticleArgs {
    /// Article URI
    #[arg(long, conflicts_with_all = ["id", "url"])]
    pub uri: Option<String>,

    /// Internal article id
    #[arg(long, conflicts_with = "url")]
    pub id: Option<u64>,

    /// Article URL as published by its source
    #[arg(long)]
    pub url: Option<String>,

    /// Characters of body text to return, -1 for the full body
    #[arg(long, default_value = "-1", allow_hyphen_values = true)]
    pub body_len: i32,
}

pub async fn run(args: &ArticleArgs, session: &EventRegistry, format: &OutputFormat) -> Result<()> {
    let mut query = match (&args.uri, args.id, &args.url) {
        (Some(uri), _, _) => ArticleQuery::new([uri.as_str()]),
        (_, Some(id), _) => ArticleQuery::by_id([id]),
        (_, _, Some(url)) => ArticleQuery::by_url([url.as_str()]),
        _ => bail!("One of --uri, --id or --url is required"),
    };
    query.add_requested_result(RequestArticleInfo::default().with_body_len(args.body_len))?;

    // Keyed by whatever identifier was sent.
    let resp: Value = session.exec_query(&query).await?;

    match format {
        OutputFormat::Json => print_json(&resp),
        OutputFormat::Table => {
            let articles = resp
                .as_object()
                .map(|entries| {
                    entries
                        .values()
                        .filter_map(|entry| entry.get("info"))
                        .filter_map(|info| serde_json::from_value::<Article>(info.clone()).ok())
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();
            if articles.is_empty() {
                eprintln!("Article not found");
            }
            print_articles_table(&articles);
            if let Some(body) = articles.first().and_then(|a| a.body.as_deref()) {
                println!("\n{}", body);
            }
        }
    }

    Ok(())
}

use anyhow::Result;
use clap::Args;
use eventregistry_lib::request::{ArticleSortBy, RequestArticlesInfo};
use eventregistry_lib::types::ArticlesResponse;
use eventregistry_lib::{ArticlesQuery, EventRegistry, Query};

use super::FilterArgs;
use crate::output::{print_articles_table, print_json, OutputFormat};

#[derive(Args)]
pub struct ArticlesArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Page number, starting at 0
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// Results per page (max 200)
    #[arg(long, default_value = "20")]
    pub count: u32,

    /// Sort field: none, date, id, cosSim, fq
    #[arg(long, default_value = "date")]
    pub sort_by: ArticleSortBy,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub asc: bool,

    /// Characters of body text to return, -1 for the full body
    #[arg(long, default_value = "200", allow_hyphen_values = true)]
    pub body_len: i32,
}

pub async fn run(
    args: &ArticlesArgs,
    session: &EventRegistry,
    format: &OutputFormat,
) -> Result<()> {
    let mut query = ArticlesQuery::default();
    args.filters.apply(&mut query, session).await?;

    query.add_requested_result(
        RequestArticlesInfo::default()
            .with_page(args.page)
            .with_count(args.count)?
            .with_sort_by(args.sort_by, args.asc)
            .with_body_len(args.body_len),
    )?;

    let resp: ArticlesResponse = session.exec_query(&query).await?;

    match format {
        OutputFormat::Json => print_json(&resp),
        OutputFormat::Table => {
            let page = resp.articles.unwrap_or_default();
            eprintln!(
                "Page {}/{} ({} total articles)",
                page.page.unwrap_or(0),
                page.pages.unwrap_or(0),
                page.total_results.unwrap_or(0)
            );
            print_articles_table(&page.results);
        }
    }

    Ok(())
}

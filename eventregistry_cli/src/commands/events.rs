use anyhow::Result;
use clap::Args;
use eventregistry_lib::request::{
    EventsSortBy, RequestEventsCategoryAggr, RequestEventsConceptAggr, RequestEventsInfo,
    RequestEventsTimeAggr,
};
use eventregistry_lib::types::EventsResponse;
use eventregistry_lib::{EventRegistry, EventsQuery, Query};

use super::FilterArgs;
use crate::output::{print_events_table, print_json, OutputFormat};

#[derive(Args)]
pub struct EventsArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Minimum number of articles in an event
    #[arg(long)]
    pub min_articles: Option<u32>,

    /// Page number, starting at 0
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// Results per page (max 200)
    #[arg(long, default_value = "20")]
    pub count: u32,

    /// Sort field: date, size, rel
    #[arg(long, default_value = "date")]
    pub sort_by: EventsSortBy,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub asc: bool,

    /// Also request the event count per day
    #[arg(long)]
    pub time_aggr: bool,

    /// Also request the top concepts across matching events
    #[arg(long)]
    pub concept_aggr: bool,

    /// Also request the category distribution
    #[arg(long)]
    pub category_aggr: bool,
}

pub async fn run(args: &EventsArgs, session: &EventRegistry, format: &OutputFormat) -> Result<()> {
    let mut query = EventsQuery::default();
    args.filters.apply(&mut query, session).await?;
    if let Some(min) = args.min_articles {
        query = query.with_min_articles_in_event(min);
    }

    query.add_requested_result(
        RequestEventsInfo::default()
            .with_page(args.page)
            .with_count(args.count)?
            .with_sort_by(args.sort_by, args.asc),
    )?;
    if args.time_aggr {
        query.add_requested_result(RequestEventsTimeAggr)?;
    }
    if args.concept_aggr {
        query.add_requested_result(RequestEventsConceptAggr::default())?;
    }
    if args.category_aggr {
        query.add_requested_result(RequestEventsCategoryAggr)?;
    }

    let resp: EventsResponse = session.exec_query(&query).await?;

    match format {
        OutputFormat::Json => print_json(&resp),
        OutputFormat::Table => {
            let page = resp.events.unwrap_or_default();
            eprintln!(
                "Page {}/{} ({} total events)",
                page.page.unwrap_or(0),
                page.pages.unwrap_or(0),
                page.total_results.unwrap_or(0)
            );
            print_events_table(&page.results);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        events: EventsArgs,
    }

    #[test]
    fn sort_by_parses_known_orders() {
        let cli = Cli::try_parse_from(["er", "--sort-by", "size"]).unwrap();
        assert_eq!(cli.events.sort_by, EventsSortBy::Size);
        let cli = Cli::try_parse_from(["er"]).unwrap();
        assert_eq!(cli.events.sort_by, EventsSortBy::Date);
    }

    #[test]
    fn unknown_sort_by_is_rejected() {
        assert!(Cli::try_parse_from(["er", "--sort-by", "bogus"]).is_err());
    }
}

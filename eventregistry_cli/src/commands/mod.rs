//! CLI subcommand implementations.

pub mod article;
pub mod articles;
pub mod event;
pub mod events;
pub mod recent;
pub mod stats;
pub mod suggest;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;
use eventregistry_lib::{EventRegistry, SearchQuery};

/// Filters shared by `events` and `articles`.
///
/// Concept, location, category and source values may be URIs or labels;
/// labels are resolved through the suggest endpoints.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Keywords that must appear in the text
    #[arg(long)]
    pub keywords: Option<String>,

    /// Concept URI or label (repeatable)
    #[arg(long)]
    pub concept: Vec<String>,

    /// Location URI or label (repeatable)
    #[arg(long)]
    pub location: Vec<String>,

    /// Category URI or label (repeatable)
    #[arg(long)]
    pub category: Vec<String>,

    /// News source URI or name (repeatable)
    #[arg(long)]
    pub source: Vec<String>,

    /// Language code, e.g. eng, deu, slv (repeatable)
    #[arg(long)]
    pub lang: Vec<String>,

    /// Earliest date (YYYY-MM-DD)
    #[arg(long)]
    pub date_start: Option<NaiveDate>,

    /// Latest date (YYYY-MM-DD)
    #[arg(long)]
    pub date_end: Option<NaiveDate>,
}

impl FilterArgs {
    pub async fn apply<Q: SearchQuery>(&self, query: &mut Q, session: &EventRegistry) -> Result<()> {
        if let Some(keywords) = &self.keywords {
            query.add_keyword(keywords);
        }
        for concept in &self.concept {
            let uri = resolve(concept, "concept", || {
                session.get_concept_uri(concept, "eng", &["concepts"])
            })
            .await?;
            query.add_concept(&uri);
        }
        for location in &self.location {
            let uri = resolve(location, "location", || {
                session.get_location_uri(location, "eng")
            })
            .await?;
            query.add_location(&uri);
        }
        for category in &self.category {
            let uri = resolve(category, "category", || session.get_category_uri(category)).await?;
            query.add_category(&uri);
        }
        for source in &self.source {
            let uri = resolve(source, "news source", || session.get_news_source_uri(source)).await?;
            query.add_news_source(&uri);
        }
        if !self.lang.is_empty() {
            query.filter_mut().lang = self.lang.clone();
        }
        if self.date_start.is_some() || self.date_end.is_some() {
            query.set_date_limit(self.date_start, self.date_end)?;
        }
        Ok(())
    }
}

/// Returns `value` when it already looks like a URI, otherwise the first
/// suggestion for it.
async fn resolve<F, Fut>(value: &str, kind: &str, lookup: F) -> Result<String>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<Option<String>, eventregistry_lib::EventRegistryError>>,
{
    if looks_like_uri(value) {
        return Ok(value.to_string());
    }
    match lookup().await? {
        Some(uri) => {
            eprintln!("Using {} {} for \"{}\"", kind, uri, value);
            Ok(uri)
        }
        None => bail!("No {} found for \"{}\"", kind, value),
    }
}

fn looks_like_uri(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://") || value.contains('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uris_are_not_looked_up() {
        assert!(looks_like_uri("http://en.wikipedia.org/wiki/Barack_Obama"));
        assert!(looks_like_uri("dmoz/Business"));
        assert!(!looks_like_uri("Barack Obama"));
    }
}

use anyhow::Result;
use clap::{Args, ValueEnum};
use eventregistry_lib::{
    CategorySuggest, ConceptClassSuggest, ConceptSuggest, EventRegistry, LocationSuggest,
    SourceSuggest,
};

use crate::output::{print_json, print_suggestions_table, OutputFormat};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SuggestKind {
    Concepts,
    Sources,
    Locations,
    Categories,
    Classes,
}

#[derive(Args)]
pub struct SuggestArgs {
    /// What to suggest
    #[arg(value_enum)]
    pub kind: SuggestKind,

    /// Text the label starts with
    pub prefix: String,

    /// Language of the prefix
    #[arg(long, default_value = "eng")]
    pub lang: String,

    /// Number of suggestions
    #[arg(long, default_value = "20")]
    pub count: u32,

    /// Concept sources for `concepts`: person, loc, org, wiki, concepts (repeatable)
    #[arg(long)]
    pub source: Vec<String>,
}

pub async fn run(args: &SuggestArgs, session: &EventRegistry, format: &OutputFormat) -> Result<()> {
    let suggestions = match args.kind {
        SuggestKind::Concepts => {
            let mut params = ConceptSuggest::new(&args.prefix);
            params.lang = args.lang.clone();
            params.count = args.count;
            if !args.source.is_empty() {
                params.sources = args.source.clone();
            }
            session.suggest_concepts(&params).await?
        }
        SuggestKind::Sources => {
            let mut params = SourceSuggest::new(&args.prefix);
            params.count = args.count;
            session.suggest_news_sources(&params).await?
        }
        SuggestKind::Locations => {
            let mut params = LocationSuggest::new(&args.prefix);
            params.lang = args.lang.clone();
            params.count = args.count;
            session.suggest_locations(&params).await?
        }
        SuggestKind::Categories => {
            let mut params = CategorySuggest::new(&args.prefix);
            params.count = args.count;
            session.suggest_categories(&params).await?
        }
        SuggestKind::Classes => {
            let mut params = ConceptClassSuggest::new(&args.prefix);
            params.lang = args.lang.clone();
            params.count = args.count;
            session.suggest_concept_classes(&params).await?
        }
    };

    match format {
        OutputFormat::Json => print_json(&suggestions),
        OutputFormat::Table => print_suggestions_table(&suggestions),
    }

    Ok(())
}

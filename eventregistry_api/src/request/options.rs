//! Enumerated option values shared by result requests.

use std::str::FromStr;

/// Languages with the broadest coverage; the default for article lists.
pub const MAIN_LANGS: &[&str] = &["eng", "deu", "zho", "slv", "spa"];

/// Every language the service indexes.
pub const ALL_LANGS: &[&str] = &[
    "eng", "deu", "spa", "cat", "por", "ita", "fra", "rus", "ara", "tur", "zho", "slv", "hrv",
    "srp",
];

/// Kind of concept (entity) to return or to compute similarity on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConceptType {
    Location,
    Person,
    Organization,
    Keyword,
    Wiki,
    ConceptClass,
    TopicPage,
}

/// Concept types returned when the caller does not choose.
pub const DEFAULT_CONCEPT_TYPES: &[ConceptType] = &[
    ConceptType::Person,
    ConceptType::Organization,
    ConceptType::Location,
    ConceptType::Wiki,
];

impl std::fmt::Display for ConceptType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ConceptType::Location => "loc",
                ConceptType::Person => "person",
                ConceptType::Organization => "org",
                ConceptType::Keyword => "keyword",
                ConceptType::Wiki => "wiki",
                ConceptType::ConceptClass => "concept-class",
                ConceptType::TopicPage => "topic-page",
            }
        )
    }
}
impl FromStr for ConceptType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loc" => Ok(ConceptType::Location),
            "person" => Ok(ConceptType::Person),
            "org" => Ok(ConceptType::Organization),
            "keyword" => Ok(ConceptType::Keyword),
            "wiki" => Ok(ConceptType::Wiki),
            "concept-class" => Ok(ConceptType::ConceptClass),
            "topic-page" => Ok(ConceptType::TopicPage),
            other => Err(format!("unknown concept type: {}", other)),
        }
    }
}

/// Ordering of article lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArticleSortBy {
    /// Keep the service's native order. Only meaningful for article URI lists.
    Unsorted,
    Date,
    Id,
    /// Cosine similarity to the event or article centroid.
    #[default]
    CosSim,
    /// Frequency of the article's content across sources.
    Fq,
}
impl std::fmt::Display for ArticleSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ArticleSortBy::Unsorted => "none",
                ArticleSortBy::Date => "date",
                ArticleSortBy::Id => "id",
                ArticleSortBy::CosSim => "cosSim",
                ArticleSortBy::Fq => "fq",
            }
        )
    }
}
impl FromStr for ArticleSortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ArticleSortBy::Unsorted),
            "date" => Ok(ArticleSortBy::Date),
            "id" => Ok(ArticleSortBy::Id),
            "cosSim" => Ok(ArticleSortBy::CosSim),
            "fq" => Ok(ArticleSortBy::Fq),
            other => Err(format!("unknown article sort order: {}", other)),
        }
    }
}

/// Ordering of event lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventsSortBy {
    #[default]
    Date,
    Size,
    Relevance,
}
impl std::fmt::Display for EventsSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EventsSortBy::Date => "date",
                EventsSortBy::Size => "size",
                EventsSortBy::Relevance => "rel",
            }
        )
    }
}
impl FromStr for EventsSortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(EventsSortBy::Date),
            "size" => Ok(EventsSortBy::Size),
            "rel" => Ok(EventsSortBy::Relevance),
            other => Err(format!("unknown event sort order: {}", other)),
        }
    }
}

/// Signal used to compute similarity between events or stories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SimilaritySource {
    /// Overlap of annotated concepts.
    #[default]
    Concept,
    /// Canonical correlation analysis over the article text.
    Cca,
}
impl std::fmt::Display for SimilaritySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SimilaritySource::Concept => "concept",
                SimilaritySource::Cca => "cca",
            }
        )
    }
}
impl FromStr for SimilaritySource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "concept" => Ok(SimilaritySource::Concept),
            "cca" => Ok(SimilaritySource::Cca),
            other => Err(format!("unknown similarity source: {}", other)),
        }
    }
}

/// Association measure between concept pairs in a concept matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConceptMatrixMeasure {
    /// Pointwise mutual information.
    #[default]
    Pmi,
    /// Pair frequency times the IDF of the individual concepts.
    PairTfIdf,
    ChiSquare,
}
impl std::fmt::Display for ConceptMatrixMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ConceptMatrixMeasure::Pmi => "pmi",
                ConceptMatrixMeasure::PairTfIdf => "pairTfIdf",
                ConceptMatrixMeasure::ChiSquare => "chiSquare",
            }
        )
    }
}
impl FromStr for ConceptMatrixMeasure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pmi" => Ok(ConceptMatrixMeasure::Pmi),
            "pairTfIdf" => Ok(ConceptMatrixMeasure::PairTfIdf),
            "chiSquare" => Ok(ConceptMatrixMeasure::ChiSquare),
            other => Err(format!("unknown concept matrix measure: {}", other)),
        }
    }
}

pub(crate) fn default_concept_types() -> Vec<ConceptType> {
    DEFAULT_CONCEPT_TYPES.to_vec()
}

pub(crate) fn english() -> Vec<String> {
    vec!["eng".to_string()]
}

pub(crate) fn main_langs() -> Vec<String> {
    MAIN_LANGS.iter().map(|l| l.to_string()).collect()
}

pub(crate) fn concept_type_names(types: &[ConceptType]) -> Vec<String> {
    types.iter().map(|t| t.to_string()).collect()
}

pub(crate) fn strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concept_type_round_trips_through_wire_name() {
        for t in [
            ConceptType::Location,
            ConceptType::ConceptClass,
            ConceptType::TopicPage,
        ] {
            assert_eq!(t.to_string().parse::<ConceptType>(), Ok(t));
        }
        assert!("city".parse::<ConceptType>().is_err());
    }

    #[test]
    fn defaults_match_service_defaults() {
        assert_eq!(ArticleSortBy::default().to_string(), "cosSim");
        assert_eq!(EventsSortBy::default().to_string(), "date");
        assert_eq!(SimilaritySource::default().to_string(), "concept");
        assert_eq!(ConceptMatrixMeasure::default().to_string(), "pmi");
        assert_eq!(
            concept_type_names(DEFAULT_CONCEPT_TYPES),
            vec!["person", "org", "loc", "wiki"]
        );
    }
}

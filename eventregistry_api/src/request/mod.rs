//! Result requests: the views of data a query asks the service to return.
//!
//! Each result request belongs to exactly one subject family and may only be
//! attached to a query over the same subject. Every request validates its
//! bounded options when they are set and contributes a namespaced slice of
//! parameters to the final request.

use crate::errors::ContractViolation;
use crate::params::{ContributesParameters, ParameterMap};

/// Builders for the concept label languages and concept types that most
/// result requests carry as `concept_lang` / `concept_types` fields.
macro_rules! impl_concept_options {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $ty {
                /// Languages in which concept labels are returned.
                pub fn with_concept_lang<I, S>(mut self, langs: I) -> Self
                where
                    I: IntoIterator<Item = S>,
                    S: Into<String>,
                {
                    self.concept_lang = crate::request::options::strings(langs);
                    self
                }

                /// Concept types to return.
                pub fn with_concept_types(mut self, types: &[crate::request::ConceptType]) -> Self {
                    self.concept_types = types.to_vec();
                    self
                }
            }
        )*
    };
}

mod options;
pub use self::options::{
    ArticleSortBy, ConceptMatrixMeasure, ConceptType, EventsSortBy, SimilaritySource, ALL_LANGS,
    DEFAULT_CONCEPT_TYPES, MAIN_LANGS,
};

mod event;
pub use self::event::{
    RequestEventArticleTrend, RequestEventArticleUris, RequestEventArticles,
    RequestEventDateMentionAggr, RequestEventInfo, RequestEventKeywordAggr,
    RequestEventSimilarEvents, RequestEventSimilarStories, RequestEventSourceAggr,
};

mod events;
pub use self::events::{
    RequestEventsCategoryAggr, RequestEventsConceptAggr, RequestEventsConceptGraph,
    RequestEventsConceptMatrix, RequestEventsConceptTrends, RequestEventsDateMentionAggr,
    RequestEventsEventClusters, RequestEventsInfo, RequestEventsKeywordAggr, RequestEventsLocAggr,
    RequestEventsLocTimeAggr, RequestEventsRecentActivity, RequestEventsTimeAggr,
    RequestEventsTopPublisherAggr, RequestEventsUriList,
};

mod article;
pub use self::article::{
    RequestArticleDuplicatedArticles, RequestArticleInfo, RequestArticleOriginalArticle,
    RequestArticleSimilarArticles,
};

mod articles;
pub use self::articles::{
    RequestArticlesCategoryAggr, RequestArticlesConceptAggr, RequestArticlesConceptGraph,
    RequestArticlesConceptMatrix, RequestArticlesConceptTrends, RequestArticlesDateMentionAggr,
    RequestArticlesIdList, RequestArticlesInfo, RequestArticlesKeywordAggr,
    RequestArticlesRecentActivity, RequestArticlesSourceAggr, RequestArticlesTimeAggr,
    RequestArticlesUriList,
};

/// What a query (and its result requests) is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subject {
    /// A single event.
    Event,
    /// A collection of events matching a search.
    Events,
    /// A single article.
    Article,
    /// A collection of articles matching a search.
    Articles,
}
impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Subject::Event => "event",
                Subject::Events => "events",
                Subject::Article => "article",
                Subject::Articles => "articles",
            }
        )
    }
}

/// Fails when `value` exceeds the inclusive `max` for `param`.
pub fn check_bound(param: &'static str, value: u32, max: u32) -> Result<u32, ContractViolation> {
    if value > max {
        return Err(ContractViolation::BoundExceeded {
            param,
            value: value as i64,
            max: max as i64,
        });
    }
    Ok(value)
}

/// Declares a family enum over its request structs, with dispatch to each
/// struct's `RESULT_TYPE` and parameters, and `From` conversions into both
/// the family enum and [`ResultRequest`].
macro_rules! request_family {
    (
        $(#[$meta:meta])*
        $family:ident => $outer:ident {
            $( $variant:ident($ty:ty) ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub enum $family {
            $( $variant($ty), )*
        }

        impl $family {
            /// The tag identifying this result shape to the service.
            pub fn result_type(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => <$ty>::RESULT_TYPE, )*
                }
            }
        }

        impl ContributesParameters for $family {
            fn to_parameter_map(&self) -> ParameterMap {
                match self {
                    $( Self::$variant(r) => r.to_parameter_map(), )*
                }
            }
        }

        impl From<$family> for ResultRequest {
            fn from(r: $family) -> Self {
                ResultRequest::$outer(r)
            }
        }

        $(
            impl From<$ty> for $family {
                fn from(r: $ty) -> Self {
                    Self::$variant(r)
                }
            }
            impl From<$ty> for ResultRequest {
                fn from(r: $ty) -> Self {
                    ResultRequest::$outer($family::$variant(r))
                }
            }
        )*
    };
}

request_family! {
    /// Result requests about a single event.
    EventRequest => Event {
        Info(RequestEventInfo),
        Articles(RequestEventArticles),
        ArticleUris(RequestEventArticleUris),
        KeywordAggr(RequestEventKeywordAggr),
        SourceAggr(RequestEventSourceAggr),
        DateMentionAggr(RequestEventDateMentionAggr),
        ArticleTrend(RequestEventArticleTrend),
        SimilarEvents(RequestEventSimilarEvents),
        SimilarStories(RequestEventSimilarStories),
    }
}

request_family! {
    /// Result requests about the events matching a search.
    EventsRequest => Events {
        Info(RequestEventsInfo),
        UriList(RequestEventsUriList),
        TimeAggr(RequestEventsTimeAggr),
        KeywordAggr(RequestEventsKeywordAggr),
        LocAggr(RequestEventsLocAggr),
        LocTimeAggr(RequestEventsLocTimeAggr),
        TopPublisherAggr(RequestEventsTopPublisherAggr),
        ConceptAggr(RequestEventsConceptAggr),
        ConceptGraph(RequestEventsConceptGraph),
        ConceptMatrix(RequestEventsConceptMatrix),
        ConceptTrends(RequestEventsConceptTrends),
        DateMentionAggr(RequestEventsDateMentionAggr),
        EventClusters(RequestEventsEventClusters),
        CategoryAggr(RequestEventsCategoryAggr),
        RecentActivity(RequestEventsRecentActivity),
    }
}

request_family! {
    /// Result requests about a single article.
    ArticleRequest => Article {
        Info(RequestArticleInfo),
        SimilarArticles(RequestArticleSimilarArticles),
        DuplicatedArticles(RequestArticleDuplicatedArticles),
        OriginalArticle(RequestArticleOriginalArticle),
    }
}

request_family! {
    /// Result requests about the articles matching a search.
    ArticlesRequest => Articles {
        Info(RequestArticlesInfo),
        UriList(RequestArticlesUriList),
        IdList(RequestArticlesIdList),
        TimeAggr(RequestArticlesTimeAggr),
        CategoryAggr(RequestArticlesCategoryAggr),
        ConceptAggr(RequestArticlesConceptAggr),
        SourceAggr(RequestArticlesSourceAggr),
        KeywordAggr(RequestArticlesKeywordAggr),
        ConceptMatrix(RequestArticlesConceptMatrix),
        ConceptGraph(RequestArticlesConceptGraph),
        ConceptTrends(RequestArticlesConceptTrends),
        DateMentionAggr(RequestArticlesDateMentionAggr),
        RecentActivity(RequestArticlesRecentActivity),
    }
}

/// Any result request, tagged with its subject family.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultRequest {
    Event(EventRequest),
    Events(EventsRequest),
    Article(ArticleRequest),
    Articles(ArticlesRequest),
}

impl ResultRequest {
    /// The subject family this request belongs to.
    pub fn subject(&self) -> Subject {
        match self {
            ResultRequest::Event(_) => Subject::Event,
            ResultRequest::Events(_) => Subject::Events,
            ResultRequest::Article(_) => Subject::Article,
            ResultRequest::Articles(_) => Subject::Articles,
        }
    }

    /// The tag identifying this result shape to the service.
    pub fn result_type(&self) -> &'static str {
        match self {
            ResultRequest::Event(r) => r.result_type(),
            ResultRequest::Events(r) => r.result_type(),
            ResultRequest::Article(r) => r.result_type(),
            ResultRequest::Articles(r) => r.result_type(),
        }
    }
}

impl ContributesParameters for ResultRequest {
    fn to_parameter_map(&self) -> ParameterMap {
        match self {
            ResultRequest::Event(r) => r.to_parameter_map(),
            ResultRequest::Events(r) => r.to_parameter_map(),
            ResultRequest::Article(r) => r.to_parameter_map(),
            ResultRequest::Articles(r) => r.to_parameter_map(),
        }
    }
}

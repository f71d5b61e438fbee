//! Result requests for a single event, attached to [`crate::EventQuery`].

use crate::errors::ContractViolation;
use crate::flags::{impl_flag_builders, ArticleFlags, ConceptFlags, EventFlags, SourceFlags, StoryFlags};
use crate::params::{ContributesParameters, ParameterMap};

use super::check_bound;
use super::options::{
    concept_type_names, default_concept_types, english, main_langs, strings, ArticleSortBy,
    ConceptType, SimilaritySource,
};

/// Details about the event itself.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventInfo {
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    event_flags: EventFlags,
    story_flags: StoryFlags,
    concept_flags: ConceptFlags,
}

impl Default for RequestEventInfo {
    fn default() -> Self {
        Self {
            concept_lang: english(),
            concept_types: default_concept_types(),
            event_flags: EventFlags::default(),
            story_flags: StoryFlags::default(),
            concept_flags: ConceptFlags::default(),
        }
    }
}

impl RequestEventInfo {
    pub const RESULT_TYPE: &'static str = "info";
}

impl ContributesParameters for RequestEventInfo {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("infoConceptLang", self.concept_lang.clone());
        params.insert("infoConceptType", concept_type_names(&self.concept_types));
        self.event_flags.write_to("info", &mut params);
        self.story_flags.write_to("info", &mut params);
        self.concept_flags.write_to("info", &mut params);
        params
    }
}

/// A page of the articles that make up the event.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventArticles {
    page: u32,
    count: u32,
    lang: Vec<String>,
    body_len: i32,
    sort_by: ArticleSortBy,
    sort_by_asc: bool,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    article_flags: ArticleFlags,
    concept_flags: ConceptFlags,
    source_flags: SourceFlags,
}

impl Default for RequestEventArticles {
    fn default() -> Self {
        Self {
            page: 0,
            count: 20,
            lang: main_langs(),
            body_len: 200,
            sort_by: ArticleSortBy::CosSim,
            sort_by_asc: false,
            concept_lang: english(),
            concept_types: default_concept_types(),
            article_flags: ArticleFlags::default(),
            concept_flags: ConceptFlags::default(),
            source_flags: SourceFlags::default(),
        }
    }
}

impl RequestEventArticles {
    pub const RESULT_TYPE: &'static str = "articles";
    pub const MAX_COUNT: u32 = 200;

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Number of articles per page, at most [`Self::MAX_COUNT`].
    pub fn with_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.count = check_bound("articlesCount", count, Self::MAX_COUNT)?;
        Ok(self)
    }

    /// Only return articles in these languages.
    pub fn with_lang<I, S>(mut self, langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lang = strings(langs);
        self
    }

    /// Characters of body text to return; -1 returns the full body.
    pub fn with_body_len(mut self, body_len: i32) -> Self {
        self.body_len = body_len;
        self
    }

    pub fn with_sort_by(mut self, sort_by: ArticleSortBy, ascending: bool) -> Self {
        self.sort_by = sort_by;
        self.sort_by_asc = ascending;
        self
    }
}

impl ContributesParameters for RequestEventArticles {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("articlesLang", self.lang.clone());
        params.insert("articlesPage", self.page);
        params.insert("articlesCount", self.count);
        params.insert("articlesSortBy", self.sort_by.to_string());
        params.insert("articlesSortByAsc", self.sort_by_asc);
        params.insert("articlesBodyLen", self.body_len);
        params.insert("articlesConceptLang", self.concept_lang.clone());
        params.insert("articlesConceptType", concept_type_names(&self.concept_types));
        self.article_flags.write_to("articles", &mut params);
        self.concept_flags.write_to("articles", &mut params);
        self.source_flags.write_to("articles", &mut params);
        params
    }
}

/// URIs of all articles in the event.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventArticleUris {
    lang: Vec<String>,
    sort_by: ArticleSortBy,
    sort_by_asc: bool,
}

impl Default for RequestEventArticleUris {
    fn default() -> Self {
        Self {
            lang: main_langs(),
            sort_by: ArticleSortBy::CosSim,
            sort_by_asc: false,
        }
    }
}

impl RequestEventArticleUris {
    pub const RESULT_TYPE: &'static str = "articleUris";

    pub fn with_lang<I, S>(mut self, langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lang = strings(langs);
        self
    }

    pub fn with_sort_by(mut self, sort_by: ArticleSortBy, ascending: bool) -> Self {
        self.sort_by = sort_by;
        self.sort_by_asc = ascending;
        self
    }
}

impl ContributesParameters for RequestEventArticleUris {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("articleUrisLang", self.lang.clone());
        params.insert("articleUrisSortBy", self.sort_by.to_string());
        params.insert("articleUrisSortByAsc", self.sort_by_asc);
        params
    }
}

/// Top keywords across a sample of the event's articles.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventKeywordAggr {
    sample_size: u32,
}

impl Default for RequestEventKeywordAggr {
    fn default() -> Self {
        Self { sample_size: 500 }
    }
}

impl RequestEventKeywordAggr {
    pub const RESULT_TYPE: &'static str = "keywordAggr";
    pub const MAX_SAMPLE_SIZE: u32 = 1000;

    pub fn with_sample_size(mut self, sample_size: u32) -> Result<Self, ContractViolation> {
        self.sample_size = check_bound("keywordAggrSampleSize", sample_size, Self::MAX_SAMPLE_SIZE)?;
        Ok(self)
    }
}

impl ContributesParameters for RequestEventKeywordAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("keywordAggrSampleSize", self.sample_size);
        params
    }
}

/// Distribution of the event's articles over news sources.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestEventSourceAggr;

impl RequestEventSourceAggr {
    pub const RESULT_TYPE: &'static str = "sourceAggr";
}

impl ContributesParameters for RequestEventSourceAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        ParameterMap::new()
    }
}

/// Dates mentioned in the event's articles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestEventDateMentionAggr;

impl RequestEventDateMentionAggr {
    pub const RESULT_TYPE: &'static str = "dateMentionAggr";
}

impl ContributesParameters for RequestEventDateMentionAggr {
    fn to_parameter_map(&self) -> ParameterMap {
        ParameterMap::new()
    }
}

/// How the event's articles are distributed over time.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventArticleTrend {
    lang: Vec<String>,
    min_article_cos_sim: f64,
    body_len: i32,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    article_flags: ArticleFlags,
    concept_flags: ConceptFlags,
    source_flags: SourceFlags,
}

impl Default for RequestEventArticleTrend {
    fn default() -> Self {
        Self {
            lang: main_langs(),
            min_article_cos_sim: -1.0,
            body_len: 0,
            concept_lang: english(),
            concept_types: default_concept_types(),
            article_flags: ArticleFlags::default(),
            concept_flags: ConceptFlags::default(),
            source_flags: SourceFlags::default(),
        }
    }
}

impl RequestEventArticleTrend {
    pub const RESULT_TYPE: &'static str = "articleTrend";

    pub fn with_lang<I, S>(mut self, langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lang = strings(langs);
        self
    }

    /// Ignore articles less similar than this to the event centroid; -1 keeps all.
    pub fn with_min_article_cos_sim(mut self, min: f64) -> Self {
        self.min_article_cos_sim = min;
        self
    }

    pub fn with_body_len(mut self, body_len: i32) -> Self {
        self.body_len = body_len;
        self
    }
}

impl ContributesParameters for RequestEventArticleTrend {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("articleTrendLang", self.lang.clone());
        params.insert("articleTrendMinArticleCosSim", self.min_article_cos_sim);
        params.insert("articleTrendBodyLen", self.body_len);
        params.insert("articleTrendConceptLang", self.concept_lang.clone());
        params.insert("articleTrendConceptType", concept_type_names(&self.concept_types));
        self.article_flags.write_to("articleTrend", &mut params);
        self.concept_flags.write_to("articleTrend", &mut params);
        self.source_flags.write_to("articleTrend", &mut params);
        params
    }
}

/// Events similar to this one.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventSimilarEvents {
    count: u32,
    source: SimilaritySource,
    max_day_diff: i64,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    add_article_trend_info: bool,
    aggr_hours: u32,
    include_self: bool,
    event_flags: EventFlags,
    story_flags: StoryFlags,
    concept_flags: ConceptFlags,
}

impl Default for RequestEventSimilarEvents {
    fn default() -> Self {
        Self {
            count: 20,
            source: SimilaritySource::Concept,
            max_day_diff: i64::MAX,
            concept_lang: english(),
            concept_types: default_concept_types(),
            add_article_trend_info: false,
            aggr_hours: 6,
            include_self: false,
            event_flags: EventFlags::default(),
            story_flags: StoryFlags::default(),
            concept_flags: ConceptFlags::default(),
        }
    }
}

impl RequestEventSimilarEvents {
    pub const RESULT_TYPE: &'static str = "similarEvents";
    pub const MAX_COUNT: u32 = 200;

    pub fn with_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.count = check_bound("similarEventsCount", count, Self::MAX_COUNT)?;
        Ok(self)
    }

    pub fn with_source(mut self, source: SimilaritySource) -> Self {
        self.source = source;
        self
    }

    /// Maximum distance in days between this event and a similar one.
    pub fn with_max_day_diff(mut self, days: i64) -> Self {
        self.max_day_diff = days;
        self
    }

    /// Add each similar event's article distribution over time, aggregated
    /// in windows of `aggr_hours` hours.
    pub fn with_article_trend_info(mut self, aggr_hours: u32) -> Self {
        self.add_article_trend_info = true;
        self.aggr_hours = aggr_hours;
        self
    }

    /// Include the event itself among the results.
    pub fn with_include_self(mut self, include_self: bool) -> Self {
        self.include_self = include_self;
        self
    }
}

impl ContributesParameters for RequestEventSimilarEvents {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("similarEventsCount", self.count);
        params.insert("similarEventsConceptLang", self.concept_lang.clone());
        params.insert("similarEventsConceptType", concept_type_names(&self.concept_types));
        params.insert("similarEventsSource", self.source.to_string());
        params.insert("similarEventsMaxDayDiff", self.max_day_diff);
        params.insert("similarEventsAddArticleTrendInfo", self.add_article_trend_info);
        params.insert("similarEventsAggrHours", self.aggr_hours);
        params.insert("similarEventsIncludeSelf", self.include_self);
        self.event_flags.write_to("similarEvents", &mut params);
        self.story_flags.write_to("similarEvents", &mut params);
        self.concept_flags.write_to("similarEvents", &mut params);
        params
    }
}

/// Stories (single-language clusters) similar to this event.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEventSimilarStories {
    count: u32,
    source: SimilaritySource,
    lang: Vec<String>,
    max_day_diff: i64,
    concept_lang: Vec<String>,
    concept_types: Vec<ConceptType>,
    story_flags: StoryFlags,
    concept_flags: ConceptFlags,
}

impl Default for RequestEventSimilarStories {
    fn default() -> Self {
        Self {
            count: 20,
            source: SimilaritySource::Concept,
            lang: english(),
            max_day_diff: i64::MAX,
            concept_lang: english(),
            concept_types: default_concept_types(),
            story_flags: StoryFlags::default(),
            concept_flags: ConceptFlags::default(),
        }
    }
}

impl RequestEventSimilarStories {
    pub const RESULT_TYPE: &'static str = "similarStories";
    pub const MAX_COUNT: u32 = 200;

    pub fn with_count(mut self, count: u32) -> Result<Self, ContractViolation> {
        self.count = check_bound("similarStoriesCount", count, Self::MAX_COUNT)?;
        Ok(self)
    }

    pub fn with_source(mut self, source: SimilaritySource) -> Self {
        self.source = source;
        self
    }

    /// Languages the similar stories must be in.
    pub fn with_lang<I, S>(mut self, langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lang = strings(langs);
        self
    }

    pub fn with_max_day_diff(mut self, days: i64) -> Self {
        self.max_day_diff = days;
        self
    }
}

impl ContributesParameters for RequestEventSimilarStories {
    fn to_parameter_map(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        params.insert("similarStoriesCount", self.count);
        params.insert("similarStoriesLang", self.lang.clone());
        params.insert("similarStoriesConceptLang", self.concept_lang.clone());
        params.insert("similarStoriesConceptType", concept_type_names(&self.concept_types));
        params.insert("similarStoriesSource", self.source.to_string());
        params.insert("similarStoriesMaxDayDiff", self.max_day_diff);
        self.story_flags.write_to("similarStories", &mut params);
        self.concept_flags.write_to("similarStories", &mut params);
        params
    }
}

impl_concept_options!(
    RequestEventInfo,
    RequestEventArticles,
    RequestEventArticleTrend,
    RequestEventSimilarEvents,
    RequestEventSimilarStories,
);

impl_flag_builders!(RequestEventInfo {
    with_event_flags => event_flags: EventFlags,
    with_story_flags => story_flags: StoryFlags,
    with_concept_flags => concept_flags: ConceptFlags,
});
impl_flag_builders!(RequestEventArticles {
    with_article_flags => article_flags: ArticleFlags,
    with_concept_flags => concept_flags: ConceptFlags,
    with_source_flags => source_flags: SourceFlags,
});
impl_flag_builders!(RequestEventArticleTrend {
    with_article_flags => article_flags: ArticleFlags,
    with_concept_flags => concept_flags: ConceptFlags,
    with_source_flags => source_flags: SourceFlags,
});
impl_flag_builders!(RequestEventSimilarEvents {
    with_event_flags => event_flags: EventFlags,
    with_story_flags => story_flags: StoryFlags,
    with_concept_flags => concept_flags: ConceptFlags,
});
impl_flag_builders!(RequestEventSimilarStories {
    with_story_flags => story_flags: StoryFlags,
    with_concept_flags => concept_flags: ConceptFlags,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;

    #[test]
    fn event_info_defaults() {
        let params = RequestEventInfo::default().to_parameter_map();
        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec!["infoConceptLang", "infoConceptType"]
        );
    }

    #[test]
    fn event_articles_count_bound() {
        assert!(RequestEventArticles::default().with_count(200).is_ok());
        assert!(matches!(
            RequestEventArticles::default().with_count(201),
            Err(ContractViolation::BoundExceeded { max: 200, .. })
        ));
    }

    #[test]
    fn event_articles_writes_changed_flags_under_prefix() {
        let params = RequestEventArticles::default()
            .with_body_len(-1)
            .with_article_flags(ArticleFlags {
                concepts: true,
                ..Default::default()
            })
            .to_parameter_map();
        assert_eq!(params.get("articlesBodyLen"), Some(&ParamValue::Int(-1)));
        assert_eq!(
            params.get("articlesIncludeArticleConcepts"),
            Some(&ParamValue::Bool(true))
        );
        assert!(!params.contains_key("articlesIncludeArticleBody"));
    }

    #[test]
    fn similar_events_binds_aggregation_window() {
        let params = RequestEventSimilarEvents::default()
            .with_article_trend_info(12)
            .to_parameter_map();
        assert_eq!(
            params.get("similarEventsAddArticleTrendInfo"),
            Some(&ParamValue::Bool(true))
        );
        assert_eq!(params.get("similarEventsAggrHours"), Some(&ParamValue::Int(12)));
    }

    #[test]
    fn similar_events_source_selects_signal() {
        let params = RequestEventSimilarEvents::default()
            .with_source(SimilaritySource::Cca)
            .to_parameter_map();
        assert_eq!(
            params.get("similarEventsSource").and_then(|v| v.as_str()),
            Some("cca")
        );
    }

    #[test]
    fn keyword_aggr_sample_bound() {
        assert!(RequestEventKeywordAggr::default().with_sample_size(1000).is_ok());
        assert!(RequestEventKeywordAggr::default().with_sample_size(1001).is_err());
    }

    #[test]
    fn similar_events_and_stories_count_bounds() {
        assert!(RequestEventSimilarEvents::default().with_count(200).is_ok());
        assert!(RequestEventSimilarEvents::default().with_count(201).is_err());
        assert!(RequestEventSimilarStories::default().with_count(200).is_ok());
        assert!(RequestEventSimilarStories::default().with_count(201).is_err());
    }

    #[test]
    fn article_trend_cos_sim_is_fractional() {
        let params = RequestEventArticleTrend::default()
            .with_min_article_cos_sim(0.5)
            .to_parameter_map();
        assert_eq!(
            params.get("articleTrendMinArticleCosSim"),
            Some(&ParamValue::Float(0.5))
        );
        assert!(params
            .to_query_string()
            .contains("articleTrendMinArticleCosSim=0.5"));
    }
}
